use crate::game::{Action, Difficulty, Game};
use crate::port::{Presenter, SoundCue};
use crate::session::Session;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Welcome,
    Table,
}

/// High-level input actions produced by the key handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    NameChar(char),
    NameBackspace,
    DifficultyNext,
    StartGame,
    Check,
    Fold,
    AmountOpen,
    AmountDigit(u8),
    AmountBackspace,
    AmountSubmit,
    AmountCancel,
}

/// The terminal redraws every loop iteration, so render requests need no
/// bookkeeping; only the most recent sound cue is kept for the status line.
#[derive(Debug, Default)]
pub struct TuiPresenter {
    last_sound: Option<SoundCue>,
}

impl TuiPresenter {
    pub fn last_sound(&self) -> Option<SoundCue> {
        self.last_sound
    }
}

impl Presenter for TuiPresenter {
    fn render_state(&mut self, _game: &Game) {}

    fn play_sound(&mut self, cue: SoundCue) {
        self.last_sound = Some(cue);
    }
}

pub struct AppState {
    pub scene: Scene,
    name_entry: String,
    difficulty: Difficulty,
    session: Option<Session<TuiPresenter>>,
    amount_entry: Option<String>,
    action_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            scene: Scene::Welcome,
            name_entry: String::new(),
            difficulty: Difficulty::default(),
            session: None,
            amount_entry: None,
            action_error: None,
        }
    }
}

impl AppState {
    pub fn name_entry(&self) -> &str {
        &self.name_entry
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn session(&self) -> Option<&Session<TuiPresenter>> {
        self.session.as_ref()
    }

    pub fn amount_entry(&self) -> Option<&str> {
        self.amount_entry.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    /// Advance pending AI turns and round breaks.
    pub fn tick(&mut self) {
        if let Some(session) = &mut self.session {
            session.tick(Instant::now());
        }
    }

    pub fn handle_input(&mut self, input: InputAction) {
        match input {
            InputAction::NameChar(c) => {
                if self.name_entry.len() < 24 {
                    self.name_entry.push(c);
                }
            }
            InputAction::NameBackspace => {
                self.name_entry.pop();
            }
            InputAction::DifficultyNext => self.difficulty = self.difficulty.next(),
            InputAction::StartGame => {
                let session = Session::start_game(
                    &self.name_entry,
                    self.difficulty,
                    TuiPresenter::default(),
                );
                self.session = Some(session);
                self.scene = Scene::Table;
            }
            InputAction::Check => self.submit(Action::Check),
            InputAction::Fold => self.submit(Action::Fold),
            InputAction::AmountOpen => {
                if self.session.as_ref().is_some_and(|s| s.awaiting_human()) {
                    self.amount_entry = Some(String::new());
                }
            }
            InputAction::AmountDigit(d) => {
                if let Some(entry) = &mut self.amount_entry {
                    if entry.len() < 9 {
                        entry.push((b'0' + d) as char);
                    }
                }
            }
            InputAction::AmountBackspace => {
                if let Some(entry) = &mut self.amount_entry {
                    entry.pop();
                }
            }
            InputAction::AmountCancel => self.amount_entry = None,
            InputAction::AmountSubmit => {
                let Some(entry) = self.amount_entry.take() else { return };
                match entry.parse::<u64>() {
                    Ok(amount) => self.submit(Action::Bet(amount)),
                    Err(_) => {
                        // Re-prompt: keep the entry open with an error.
                        self.action_error = Some(format!("not a valid amount: '{entry}'"));
                        self.amount_entry = Some(String::new());
                    }
                }
            }
        }
    }

    pub fn amount_entry_active(&self) -> bool {
        self.amount_entry.is_some()
    }

    fn submit(&mut self, action: Action) {
        let Some(session) = &mut self.session else { return };
        match session.submit_human_action(action) {
            Ok(()) => self.action_error = None,
            Err(err) => self.action_error = Some(err.to_string()),
        }
    }
}
