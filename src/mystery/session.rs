//! Session flow: dice, movement budget, suggestion/accusation pickers,
//! overlays, the detective's notes and timed reveal screens.
//!
//! All wall-clock decisions take an explicit `Instant` so the flow can be
//! driven frame by frame from the terminal loop or stepped in tests.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use super::board::Board;
use super::cards::{Direction, Room, Solution, Suspect, Weapon};
use super::game::{Game, Verdict};
use super::player::Player;
use crate::config::Timings;
use crate::constants::{DICE_SIDES, PLAYER_NAME, PLAYER_START};

/// Abstract input, decoupled from the terminal key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    Up,
    Down,
    Left,
    Right,
    Roll,
    Suggest,
    Accuse,
    AskHint,
    ToggleInstructions,
    ToggleNotes,
    Confirm,
    Cancel,
    Quit,
    Other,
}

impl SessionInput {
    fn direction(self) -> Option<Direction> {
        match self {
            SessionInput::Up => Some(Direction::Up),
            SessionInput::Down => Some(Direction::Down),
            SessionInput::Left => Some(Direction::Left),
            SessionInput::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Intro,
    Playing,
    Finished(Verdict),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingRoll,
    Moving { roll: u32, remaining: u32 },
}

/// Full-screen overlays toggled by the player. At most one is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Instructions,
    Notes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Suggestion,
    Accusation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerStep {
    Suspect,
    Weapon,
    Room,
}

/// Menu state while composing a suggestion or accusation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Picker {
    pub kind: PickerKind,
    pub step: PickerStep,
    pub suspect: usize,
    pub weapon: usize,
    pub room: usize,
    /// Suggestions are always about the room the player stands in.
    pub fixed_room: Option<Room>,
}

impl Picker {
    fn new(kind: PickerKind, fixed_room: Option<Room>) -> Self {
        Self {
            kind,
            step: PickerStep::Suspect,
            suspect: 0,
            weapon: 0,
            room: 0,
            fixed_room,
        }
    }

    /// Number of options at the current step.
    pub fn option_count(&self) -> usize {
        match self.step {
            PickerStep::Suspect => Suspect::COUNT,
            PickerStep::Weapon => Weapon::COUNT,
            PickerStep::Room => Room::COUNT,
        }
    }

    /// Highlighted index at the current step.
    pub fn selected(&self) -> usize {
        match self.step {
            PickerStep::Suspect => self.suspect,
            PickerStep::Weapon => self.weapon,
            PickerStep::Room => self.room,
        }
    }

    fn shift(&mut self, delta: isize) {
        let count = self.option_count() as isize;
        let next = (self.selected() as isize + delta).rem_euclid(count) as usize;
        match self.step {
            PickerStep::Suspect => self.suspect = next,
            PickerStep::Weapon => self.weapon = next,
            PickerStep::Room => self.room = next,
        }
    }

    /// The guess as composed so far.
    pub fn guess(&self) -> Solution {
        Solution::new(
            Suspect::from_index(self.suspect),
            Weapon::from_index(self.weapon),
            self.fixed_room.unwrap_or(Room::from_index(self.room)),
        )
    }
}

/// Screens shown for a fixed time before play resumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimedScreen {
    HintReveal { text: String },
    RoomReveal { room: Room, weapon: Option<Weapon> },
    Feedback,
}

#[derive(Debug, Clone)]
pub struct ActiveScreen {
    pub screen: TimedScreen,
    pub started: Instant,
}

/// The detective's note sheet.
#[derive(Debug, Clone, Default)]
pub struct Notes {
    pub suggestions: Vec<String>,
    /// Rooms visited with the weapon found there, in visit order.
    pub room_weapons: Vec<(Room, Option<Weapon>)>,
    pub hints: Vec<String>,
}

impl Notes {
    fn record_room(&mut self, room: Room, weapon: Option<Weapon>) {
        if !self.room_weapons.iter().any(|(r, _)| *r == room) {
            self.room_weapons.push((room, weapon));
        }
    }

    fn record_hint(&mut self, hint: &str) -> bool {
        if self.hints.iter().any(|h| h == hint) {
            return false;
        }
        self.hints.push(hint.to_string());
        true
    }

    /// Room clues followed by gathered hints, as shown on the note sheet.
    pub fn all_hints(&self) -> Vec<String> {
        self.room_weapons
            .iter()
            .map(|(room, weapon)| match weapon {
                Some(weapon) => format!("The {weapon} is in the {room}."),
                None => format!("There is no weapon in the {room}."),
            })
            .chain(self.hints.iter().cloned())
            .collect()
    }
}

/// Roll a six-sided die.
pub fn roll_dice<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(1..=DICE_SIDES)
}

pub struct Session {
    pub game: Game,
    pub state: SessionState,
    pub phase: TurnPhase,
    pub picker: Option<Picker>,
    pub overlay: Overlay,
    pub active_screen: Option<ActiveScreen>,
    pub notes: Notes,
    pub last_roll: Option<u32>,
    last_room: Option<Room>,
    finished_at: Option<Instant>,
    timings: Timings,
    rng: StdRng,
}

impl Session {
    /// Lay out a fresh mansion and mystery from the given generator.
    pub fn new(timings: Timings, mut rng: StdRng) -> Self {
        let mut board = Board::new(&mut rng);
        board.setup_rooms();
        let player = Player::new(PLAYER_NAME, PLAYER_START);
        let game = Game::new(board, player, &mut rng);
        Self::with_game(game, timings, rng)
    }

    /// Wrap an already set-up game.
    pub fn with_game(game: Game, timings: Timings, rng: StdRng) -> Self {
        Self {
            game,
            state: SessionState::Intro,
            phase: TurnPhase::AwaitingRoll,
            picker: None,
            overlay: Overlay::None,
            active_screen: None,
            notes: Notes::default(),
            last_roll: None,
            last_room: None,
            finished_at: None,
            timings,
            rng,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state != SessionState::Quit
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// Moves left in the current turn, 0 while waiting for a roll.
    pub fn spaces_left(&self) -> u32 {
        match self.phase {
            TurnPhase::AwaitingRoll => 0,
            TurnPhase::Moving { remaining, .. } => remaining,
        }
    }

    /// Suggestions need a finished move inside a room.
    pub fn can_suggest(&self) -> bool {
        self.phase == TurnPhase::AwaitingRoll && self.game.current_room().is_some()
    }

    pub fn process_input(&mut self, input: SessionInput, now: Instant) {
        match self.state {
            SessionState::Intro => match input {
                SessionInput::Confirm => {
                    info!("investigation started");
                    self.state = SessionState::Playing;
                }
                SessionInput::Quit | SessionInput::Cancel => self.quit(),
                _ => {}
            },
            // Releases and unmapped keys arrive as Other and must not end
            // the closing screen early
            SessionState::Finished(_) => {
                if input != SessionInput::Other {
                    self.quit();
                }
            }
            SessionState::Quit => {}
            SessionState::Playing => self.process_playing_input(input, now),
        }
    }

    fn quit(&mut self) {
        info!(state = ?self.state, "session quit");
        self.state = SessionState::Quit;
    }

    fn process_playing_input(&mut self, input: SessionInput, now: Instant) {
        if input == SessionInput::Quit {
            self.quit();
            return;
        }

        // Timed screens block play; Confirm skips ahead
        if self.active_screen.is_some() {
            if matches!(input, SessionInput::Confirm | SessionInput::Cancel) {
                self.dismiss_screen();
            }
            return;
        }

        match input {
            SessionInput::ToggleInstructions => {
                self.overlay = match self.overlay {
                    Overlay::Instructions => Overlay::None,
                    _ => Overlay::Instructions,
                };
                return;
            }
            SessionInput::ToggleNotes => {
                self.overlay = match self.overlay {
                    Overlay::Notes => Overlay::None,
                    _ => Overlay::Notes,
                };
                return;
            }
            _ => {}
        }

        if self.overlay != Overlay::None {
            if input == SessionInput::Cancel {
                self.overlay = Overlay::None;
            }
            return;
        }

        if self.picker.is_some() {
            self.process_picker_input(input, now);
            return;
        }

        match (input, self.phase) {
            (SessionInput::Cancel, _) => self.quit(),
            (SessionInput::Roll, TurnPhase::AwaitingRoll) => {
                let roll = roll_dice(&mut self.rng);
                debug!(roll, "dice rolled");
                self.last_roll = Some(roll);
                self.phase = TurnPhase::Moving {
                    roll,
                    remaining: roll,
                };
            }
            (SessionInput::Suggest, TurnPhase::AwaitingRoll) => {
                if let Some(room) = self.game.current_room() {
                    self.picker = Some(Picker::new(PickerKind::Suggestion, Some(room)));
                }
            }
            (SessionInput::Accuse, TurnPhase::AwaitingRoll) => {
                self.picker = Some(Picker::new(PickerKind::Accusation, None));
            }
            (SessionInput::AskHint, TurnPhase::AwaitingRoll) => {
                let text = self.game.provide_hint(&mut self.rng);
                if let Some(clue) = text.strip_prefix("Hint: ") {
                    self.notes.record_hint(clue);
                }
                self.show(TimedScreen::HintReveal { text }, now);
            }
            (_, TurnPhase::Moving { roll, remaining }) => {
                let Some(direction) = input.direction() else {
                    return;
                };
                if !self.game.player.move_in(direction, &self.game.board) {
                    return;
                }
                let remaining = remaining - 1;
                if remaining > 0 {
                    self.phase = TurnPhase::Moving { roll, remaining };
                } else {
                    self.finish_movement(now);
                }
            }
            _ => {}
        }
    }

    fn finish_movement(&mut self, now: Instant) {
        self.phase = TurnPhase::AwaitingRoll;

        if let Some(hint) = self.game.check_hint_spot() {
            let hint = hint.to_string();
            if self.notes.record_hint(&hint) {
                info!(hint = %hint, "hint gathered");
                self.show(TimedScreen::HintReveal { text: hint }, now);
            }
        }

        // Hallway stops leave last_room alone, so only a different room
        // shows its reveal again
        if let Some(room) = self.game.current_room() {
            if self.last_room != Some(room) {
                self.last_room = Some(room);
                let weapon = self.game.board.room_weapon(room);
                debug!(%room, ?weapon, "room entered");
                self.notes.record_room(room, weapon);
                self.show(TimedScreen::RoomReveal { room, weapon }, now);
            }
        }
    }

    fn process_picker_input(&mut self, input: SessionInput, now: Instant) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };

        match input {
            SessionInput::Up => picker.shift(-1),
            SessionInput::Down => picker.shift(1),
            SessionInput::Cancel => self.picker = None,
            SessionInput::Confirm => match (picker.kind, picker.step) {
                (_, PickerStep::Suspect) => picker.step = PickerStep::Weapon,
                (PickerKind::Accusation, PickerStep::Weapon) => picker.step = PickerStep::Room,
                _ => {
                    let picker = *picker;
                    self.picker = None;
                    self.submit(picker, now);
                }
            },
            _ => {}
        }
    }

    fn submit(&mut self, picker: Picker, now: Instant) {
        let guess = picker.guess();
        match picker.kind {
            PickerKind::Suggestion => {
                self.notes.suggestions.push(guess.to_string());
                if self
                    .game
                    .make_suggestion(guess.murderer, guess.weapon, guess.room)
                {
                    self.finish(Verdict::Solved, now);
                } else {
                    self.show(TimedScreen::Feedback, now);
                }
            }
            PickerKind::Accusation => {
                self.notes.suggestions.push(format!("Accused: {guess}"));
                self.game
                    .make_accusation(guess.murderer, guess.weapon, guess.room);
                let verdict = self.game.verdict().unwrap_or(Verdict::Failed);
                self.finish(verdict, now);
            }
        }
    }

    fn finish(&mut self, verdict: Verdict, now: Instant) {
        info!(?verdict, solution = %self.game.solution(), "case closed");
        self.state = SessionState::Finished(verdict);
        self.finished_at = Some(now);
    }

    fn show(&mut self, screen: TimedScreen, now: Instant) {
        self.active_screen = Some(ActiveScreen {
            screen,
            started: now,
        });
    }

    fn dismiss_screen(&mut self) {
        if let Some(active) = self.active_screen.take() {
            if !matches!(active.screen, TimedScreen::RoomReveal { .. }) {
                self.game.reset_feedback();
            }
        }
    }

    /// Expire timed screens and the end screen.
    pub fn tick(&mut self, now: Instant) {
        if let Some(active) = &self.active_screen {
            let duration = match active.screen {
                TimedScreen::HintReveal { .. } => self.timings.hint,
                TimedScreen::RoomReveal { .. } => self.timings.room,
                TimedScreen::Feedback => self.timings.feedback,
            };
            if now.saturating_duration_since(active.started) >= duration {
                self.dismiss_screen();
            }
        }

        if let (SessionState::Finished(_), Some(at)) = (self.state, self.finished_at) {
            if now.saturating_duration_since(at) >= self.timings.victory {
                self.quit();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mystery::board::Position;
    use rand::SeedableRng;
    use std::time::Duration;

    fn timings() -> Timings {
        Timings {
            feedback: Duration::from_millis(100),
            hint: Duration::from_millis(100),
            room: Duration::from_millis(100),
            victory: Duration::from_millis(500),
        }
    }

    fn known_session(seed: u64) -> Session {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new(&mut rng);
        board.setup_rooms();
        let player = Player::new(PLAYER_NAME, PLAYER_START);
        let solution = Solution::new(Suspect::MrsWhite, Weapon::Rope, Room::Kitchen);
        let game = Game::with_solution(board, player, solution, &mut rng);
        let mut session = Session::with_game(game, timings(), rng);
        session.process_input(SessionInput::Confirm, Instant::now());
        session
    }

    /// Put the player in a room with no moves pending.
    fn stand_in(session: &mut Session, room: Room) -> Position {
        let position = session.game.board.room_position(room).unwrap();
        session.game.player.position = position;
        position
    }

    #[test]
    fn test_intro_waits_for_confirm() {
        let mut session = Session::new(timings(), StdRng::seed_from_u64(1));
        let now = Instant::now();
        assert_eq!(session.state, SessionState::Intro);

        session.process_input(SessionInput::Roll, now);
        assert_eq!(session.state, SessionState::Intro);
        session.process_input(SessionInput::Confirm, now);
        assert_eq!(session.state, SessionState::Playing);
    }

    #[test]
    fn test_roll_sets_moving() {
        let mut session = known_session(1);
        session.process_input(SessionInput::Roll, Instant::now());

        match session.phase {
            TurnPhase::Moving { roll, remaining } => {
                assert!((1..=6).contains(&roll));
                assert_eq!(roll, remaining);
            }
            TurnPhase::AwaitingRoll => panic!("expected moving"),
        }
        assert_eq!(session.spaces_left(), session.last_roll.unwrap());
    }

    #[test]
    fn test_cannot_roll_while_moving() {
        let mut session = known_session(1);
        let now = Instant::now();
        session.process_input(SessionInput::Roll, now);
        let phase = session.phase;
        session.process_input(SessionInput::Roll, now);
        assert_eq!(session.phase, phase);
    }

    #[test]
    fn test_moves_consume_budget() {
        let mut session = known_session(1);
        let now = Instant::now();
        session.phase = TurnPhase::Moving {
            roll: 2,
            remaining: 2,
        };

        session.process_input(SessionInput::Left, now);
        assert_eq!(session.spaces_left(), 1);
        assert_eq!(session.game.player.position, (3, 3));

        session.process_input(SessionInput::Right, now);
        assert_eq!(session.phase, TurnPhase::AwaitingRoll);
        assert_eq!(session.game.player.position, (3, 4));
    }

    #[test]
    fn test_blocked_move_keeps_budget() {
        let mut session = known_session(1);
        session.game.player.position = (1, 2);
        session.phase = TurnPhase::Moving {
            roll: 3,
            remaining: 3,
        };

        session.process_input(SessionInput::Up, Instant::now());
        assert_eq!(session.spaces_left(), 3);
        assert_eq!(session.game.player.position, (1, 2));
    }

    #[test]
    fn test_direction_ignored_while_awaiting_roll() {
        let mut session = known_session(1);
        session.process_input(SessionInput::Left, Instant::now());
        assert_eq!(session.game.player.position, PLAYER_START);
    }

    #[test]
    fn test_suggestion_requires_room() {
        let mut session = known_session(1);
        session.process_input(SessionInput::Suggest, Instant::now());
        assert!(session.picker.is_none());
        assert!(!session.can_suggest());
    }

    #[test]
    fn test_correct_suggestion_solves() {
        let mut session = known_session(1);
        let now = Instant::now();
        stand_in(&mut session, Room::Kitchen);

        session.process_input(SessionInput::Suggest, now);
        let picker = session.picker.expect("picker opened");
        assert_eq!(picker.fixed_room, Some(Room::Kitchen));

        // Mrs. White is index 5, Rope index 4; step up to wrap around
        session.process_input(SessionInput::Up, now);
        session.process_input(SessionInput::Confirm, now);
        for _ in 0..4 {
            session.process_input(SessionInput::Down, now);
        }
        session.process_input(SessionInput::Confirm, now);

        assert_eq!(session.state, SessionState::Finished(Verdict::Solved));
        assert!(session.game.check_win_condition());
        assert_eq!(
            session.notes.suggestions,
            vec!["Mrs. White with Rope in Kitchen".to_string()]
        );
    }

    #[test]
    fn test_wrong_suggestion_shows_feedback_then_clears() {
        let mut session = known_session(1);
        let now = Instant::now();
        stand_in(&mut session, Room::Kitchen);

        session.process_input(SessionInput::Suggest, now);
        session.process_input(SessionInput::Confirm, now);
        session.process_input(SessionInput::Confirm, now);

        assert_eq!(session.state, SessionState::Playing);
        assert_eq!(
            session.active_screen.as_ref().map(|a| a.screen.clone()),
            Some(TimedScreen::Feedback)
        );
        assert!(session.game.get_feedback().is_some());

        session.tick(now + Duration::from_millis(50));
        assert!(session.active_screen.is_some());
        session.tick(now + Duration::from_millis(150));
        assert!(session.active_screen.is_none());
        assert!(session.game.get_feedback().is_none());
    }

    #[test]
    fn test_picker_cancel() {
        let mut session = known_session(1);
        let now = Instant::now();
        stand_in(&mut session, Room::Study);
        session.process_input(SessionInput::Suggest, now);
        session.process_input(SessionInput::Cancel, now);
        assert!(session.picker.is_none());
        assert_eq!(session.state, SessionState::Playing);
    }

    #[test]
    fn test_picker_wraps() {
        let mut session = known_session(1);
        let now = Instant::now();
        session.process_input(SessionInput::Accuse, now);
        session.process_input(SessionInput::Up, now);
        assert_eq!(session.picker.unwrap().suspect, Suspect::COUNT - 1);
        session.process_input(SessionInput::Down, now);
        assert_eq!(session.picker.unwrap().suspect, 0);
    }

    #[test]
    fn test_wrong_accusation_fails() {
        let mut session = known_session(1);
        let now = Instant::now();
        session.process_input(SessionInput::Accuse, now);
        for _ in 0..3 {
            session.process_input(SessionInput::Confirm, now);
        }
        // Miss Scarlet / Candlestick / Bedroom
        assert_eq!(session.state, SessionState::Finished(Verdict::Failed));

        session.tick(now + Duration::from_millis(600));
        assert_eq!(session.state, SessionState::Quit);
        assert!(!session.is_running());
    }

    #[test]
    fn test_closing_screen_ignores_unmapped_input() {
        let mut session = known_session(1);
        let now = Instant::now();
        session.process_input(SessionInput::Accuse, now);
        for _ in 0..3 {
            session.process_input(SessionInput::Confirm, now);
        }

        session.process_input(SessionInput::Other, now);
        assert_eq!(session.state, SessionState::Finished(Verdict::Failed));

        session.process_input(SessionInput::Roll, now);
        assert_eq!(session.state, SessionState::Quit);
    }

    #[test]
    fn test_correct_accusation_picks_any_room() {
        let mut session = known_session(1);
        let now = Instant::now();
        session.process_input(SessionInput::Accuse, now);
        let picker = session.picker.as_mut().unwrap();
        picker.suspect = Suspect::MrsWhite.index();
        picker.weapon = Weapon::Rope.index();
        picker.room = Room::Kitchen.index();
        for _ in 0..3 {
            session.process_input(SessionInput::Confirm, now);
        }
        assert_eq!(session.state, SessionState::Finished(Verdict::Solved));
    }

    #[test]
    fn test_overlays_toggle_and_block() {
        let mut session = known_session(1);
        let now = Instant::now();

        session.process_input(SessionInput::ToggleInstructions, now);
        assert_eq!(session.overlay, Overlay::Instructions);
        session.process_input(SessionInput::Roll, now);
        assert_eq!(session.phase, TurnPhase::AwaitingRoll);

        session.process_input(SessionInput::ToggleNotes, now);
        assert_eq!(session.overlay, Overlay::Notes);
        session.process_input(SessionInput::ToggleNotes, now);
        assert_eq!(session.overlay, Overlay::None);
    }

    #[test]
    fn test_landing_on_hint_spot_gathers_once() {
        let mut session = known_session(1);
        let now = Instant::now();
        let (&spot, text) = session.game.board.hint_spots().iter().next().unwrap();
        let text = text.clone();

        // Start one step left of the spot if walkable, else right
        let (row, col) = spot;
        let (start, dir) = if session.game.board.is_walkable((row, col - 1)) {
            ((row, col - 1), SessionInput::Right)
        } else {
            ((row, col + 1), SessionInput::Left)
        };
        session.game.player.position = start;
        session.phase = TurnPhase::Moving {
            roll: 1,
            remaining: 1,
        };
        session.process_input(dir, now);

        assert_eq!(session.notes.hints, vec![text.clone()]);
        assert_eq!(
            session.active_screen.as_ref().map(|a| a.screen.clone()),
            Some(TimedScreen::HintReveal { text })
        );

        // Returning to the spot does not duplicate the note or the reveal
        session.process_input(SessionInput::Confirm, now);
        session.game.player.position = start;
        session.phase = TurnPhase::Moving {
            roll: 1,
            remaining: 1,
        };
        session.process_input(dir, now);
        assert_eq!(session.notes.hints.len(), 1);
        assert!(session.active_screen.is_none());
    }

    #[test]
    fn test_entering_room_reveals_weapon() {
        let mut session = known_session(1);
        let now = Instant::now();
        let (row, col) = session.game.board.room_position(Room::Kitchen).unwrap();
        let start = if session.game.board.is_walkable((row + 1, col)) {
            (row + 1, col)
        } else {
            (row - 1, col)
        };
        let dir = if start.0 > row {
            SessionInput::Up
        } else {
            SessionInput::Down
        };
        session.game.player.position = start;
        session.phase = TurnPhase::Moving {
            roll: 1,
            remaining: 1,
        };
        session.process_input(dir, now);

        assert_eq!(
            session.active_screen.as_ref().map(|a| a.screen.clone()),
            Some(TimedScreen::RoomReveal {
                room: Room::Kitchen,
                weapon: Some(Weapon::Rope)
            })
        );
        assert_eq!(
            session.notes.room_weapons,
            vec![(Room::Kitchen, Some(Weapon::Rope))]
        );
        assert!(session
            .notes
            .all_hints()
            .contains(&"The Rope is in the Kitchen.".to_string()));

        session.tick(now + Duration::from_millis(150));
        assert!(session.active_screen.is_none());
        assert!(session.can_suggest());
    }

    /// End a move at `position` and report the screen it opened, if any.
    fn arrive(session: &mut Session, position: Position, now: Instant) -> Option<TimedScreen> {
        session.active_screen = None;
        session.game.player.position = position;
        session.finish_movement(now);
        session.active_screen.as_ref().map(|a| a.screen.clone())
    }

    fn is_room_reveal(screen: &Option<TimedScreen>, room: Room) -> bool {
        matches!(screen, Some(TimedScreen::RoomReveal { room: r, .. }) if *r == room)
    }

    #[test]
    fn test_room_reveal_waits_for_a_different_room() {
        let mut session = known_session(1);
        let now = Instant::now();
        let kitchen = session.game.board.room_position(Room::Kitchen).unwrap();
        let study = session.game.board.room_position(Room::Study).unwrap();

        assert!(is_room_reveal(&arrive(&mut session, kitchen, now), Room::Kitchen));

        // Back out to the hallway and straight in again
        let hallway = arrive(&mut session, PLAYER_START, now);
        assert!(!matches!(hallway, Some(TimedScreen::RoomReveal { .. })));
        assert_eq!(arrive(&mut session, kitchen, now), None);

        assert!(is_room_reveal(&arrive(&mut session, study, now), Room::Study));
        assert!(is_room_reveal(&arrive(&mut session, kitchen, now), Room::Kitchen));
        assert_eq!(session.notes.room_weapons.len(), 2);
    }

    #[test]
    fn test_timed_screen_blocks_input() {
        let mut session = known_session(1);
        let now = Instant::now();
        session.process_input(SessionInput::AskHint, now);
        assert!(session.active_screen.is_some());

        session.process_input(SessionInput::Roll, now);
        assert_eq!(session.phase, TurnPhase::AwaitingRoll);

        session.process_input(SessionInput::Confirm, now);
        assert!(session.active_screen.is_none());
    }

    #[test]
    fn test_ask_hint_records_clue() {
        let mut session = known_session(1);
        let now = Instant::now();
        session.process_input(SessionInput::AskHint, now);

        assert_eq!(session.notes.hints.len(), 1);
        assert!(session.notes.hints[0].ends_with("has a solid alibi."));
    }

    #[test]
    fn test_quit_and_cancel() {
        let mut session = known_session(1);
        session.process_input(SessionInput::Quit, Instant::now());
        assert_eq!(session.state, SessionState::Quit);

        let mut session = known_session(1);
        session.process_input(SessionInput::Cancel, Instant::now());
        assert_eq!(session.state, SessionState::Quit);
    }

    #[test]
    fn test_roll_dice_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let roll = roll_dice(&mut rng);
            assert!((1..=6).contains(&roll));
        }
    }
}
