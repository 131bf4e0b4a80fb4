/// Fits room art into the space left on the reveal screen.
///
/// Height is resampled line by line; width is clipped, never squeezed,
/// since squeezing ASCII art mangles it.

/// Resample lines to the target height.
pub fn scale_lines(lines: &[String], target_height: usize) -> Vec<String> {
    if lines.is_empty() || target_height == 0 {
        return vec![];
    }

    let source_height = lines.len();
    if target_height >= source_height {
        return lines.to_vec();
    }

    (0..target_height)
        .map(|i| {
            let source_index = (i * source_height) / target_height;
            lines[source_index.min(source_height - 1)].clone()
        })
        .collect()
}

/// Clip each line to at most `max_width` characters.
pub fn clip_width(lines: Vec<String>, max_width: usize) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| {
            if line.chars().count() > max_width {
                line.chars().take(max_width).collect()
            } else {
                line
            }
        })
        .collect()
}

/// Shrink art to fit a `max_width` x `max_height` box. Art that already fits
/// is returned unchanged.
pub fn fit_art(lines: &[String], max_width: usize, max_height: usize) -> Vec<String> {
    clip_width(scale_lines(lines, max_height), max_width)
}
