//! Hidden solution, suggestion/accusation evaluation and feedback state.

use rand::Rng;
use tracing::{debug, info};

use super::board::Board;
use super::cards::{Room, Solution, Suspect, Weapon};
use super::player::Player;

const NO_MORE_HINTS: &str = "No more hints available.";

/// Result of the most recent suggestion or accusation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Pending,
    Correct,
    Incorrect,
}

/// How a feedback message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Correct,
    Incorrect,
    Hint,
}

/// Final state of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Solved,
    /// A wrong accusation ends the game.
    Failed,
}

#[derive(Debug, Clone)]
pub struct Game {
    pub board: Board,
    pub player: Player,
    solution: Solution,
    /// Elimination clues not yet handed out.
    game_clues: Vec<String>,
    feedback_message: String,
    outcome: Outcome,
    hint_used: bool,
    hint_spot_feedback: Option<String>,
    verdict: Option<Verdict>,
}

impl Game {
    /// Draw a fresh solution and lay out weapons and hints to match it.
    pub fn new<R: Rng>(board: Board, player: Player, rng: &mut R) -> Self {
        let solution = Self::generate_solution(rng);
        Self::with_solution(board, player, solution, rng)
    }

    /// Set up a game around a known solution.
    pub fn with_solution<R: Rng>(
        mut board: Board,
        player: Player,
        solution: Solution,
        rng: &mut R,
    ) -> Self {
        board.setup_weapons(&solution, rng);
        board.generate_hints(&solution, rng);
        debug!(%solution, "solution drawn");

        let game_clues = Suspect::ALL
            .into_iter()
            .filter(|&s| s != solution.murderer)
            .map(|s| format!("{s} has a solid alibi."))
            .collect();

        Self {
            board,
            player,
            solution,
            game_clues,
            feedback_message: String::new(),
            outcome: Outcome::Pending,
            hint_used: false,
            hint_spot_feedback: None,
            verdict: None,
        }
    }

    /// Draw murderer, weapon and room independently and uniformly.
    pub fn generate_solution<R: Rng>(rng: &mut R) -> Solution {
        Solution::new(
            Suspect::from_index(rng.gen_range(0..Suspect::COUNT)),
            Weapon::from_index(rng.gen_range(0..Weapon::COUNT)),
            Room::from_index(rng.gen_range(0..Room::COUNT)),
        )
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    pub fn clues_remaining(&self) -> usize {
        self.game_clues.len()
    }

    /// Room under the player's token, if any.
    pub fn current_room(&self) -> Option<Room> {
        self.board.room_at(self.player.position)
    }

    fn evaluate(&mut self, guess: Solution) -> bool {
        let is_correct = guess == self.solution;
        if is_correct {
            self.feedback_message = format!("{guess} is CORRECT!");
            self.outcome = Outcome::Correct;
        } else {
            self.feedback_message = format!("{guess} is INCORRECT.");
            self.outcome = Outcome::Incorrect;
        }
        is_correct
    }

    /// Compare a suggestion against the solution and record the feedback.
    /// A correct suggestion solves the case.
    pub fn make_suggestion(&mut self, murderer: Suspect, weapon: Weapon, room: Room) -> bool {
        let is_correct = self.evaluate(Solution::new(murderer, weapon, room));
        debug!(%murderer, %weapon, %room, is_correct, "suggestion made");
        if is_correct {
            self.verdict = Some(Verdict::Solved);
        }
        is_correct
    }

    /// Final accusation: correct solves the case, anything else loses it.
    pub fn make_accusation(&mut self, murderer: Suspect, weapon: Weapon, room: Room) -> bool {
        let is_correct = self.evaluate(Solution::new(murderer, weapon, room));
        if is_correct {
            self.verdict = Some(Verdict::Solved);
        } else {
            self.feedback_message = format!(
                "{} is WRONG. It was {}.",
                Solution::new(murderer, weapon, room),
                self.solution
            );
            self.verdict = Some(Verdict::Failed);
        }
        info!(%murderer, %weapon, %room, is_correct, "accusation made");
        is_correct
    }

    /// Look up the player's cell in the hint map. Standing still on a hint
    /// spot re-triggers the same feedback; spots are never used up.
    pub fn check_hint_spot(&mut self) -> Option<&str> {
        match self.board.get_hint(self.player.position) {
            Some(hint) => {
                debug!(position = ?self.player.position, hint, "hint spot found");
                self.hint_used = true;
                self.hint_spot_feedback = Some(hint.to_string());
            }
            None => self.hint_spot_feedback = None,
        }
        self.hint_spot_feedback.as_deref()
    }

    /// Hand out a random clue that has not been given yet.
    pub fn provide_hint<R: Rng>(&mut self, rng: &mut R) -> String {
        if self.game_clues.is_empty() {
            return NO_MORE_HINTS.to_string();
        }
        let index = rng.gen_range(0..self.game_clues.len());
        let clue = self.game_clues.swap_remove(index);
        debug!(clue = %clue, "hint provided");
        format!("Hint: {clue}")
    }

    /// Current feedback to display. Hint-spot text takes priority.
    pub fn get_feedback(&self) -> Option<(&str, FeedbackTone)> {
        if let Some(hint) = &self.hint_spot_feedback {
            return Some((hint.as_str(), FeedbackTone::Hint));
        }
        match self.outcome {
            Outcome::Pending => None,
            Outcome::Correct => Some((self.feedback_message.as_str(), FeedbackTone::Correct)),
            Outcome::Incorrect => Some((self.feedback_message.as_str(), FeedbackTone::Incorrect)),
        }
    }

    pub fn reset_feedback(&mut self) {
        self.feedback_message.clear();
        self.outcome = Outcome::Pending;
        self.hint_used = false;
        self.hint_spot_feedback = None;
    }

    /// True iff the latest evaluated guess was correct.
    pub fn check_win_condition(&self) -> bool {
        self.outcome == Outcome::Correct
    }
}
