//! Presentation port: the only surface the core calls out through.
//!
//! The engine never touches rendering internals; it reports state changes and
//! sound-worthy events here, which keeps the core headless and lets tests run
//! against a recording implementation.

use crate::game::Game;

/// Tags for audio events. What (if anything) plays is up to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Hole cards going out to a player.
    CardDeal,
    /// Chips entering the pot: a bet, raise, call, or all-in.
    Chips,
    /// The pot being awarded.
    Win,
}

/// Receives render requests and sound cues from the engine.
pub trait Presenter {
    /// Called after every state-affecting transition: round start, community
    /// cards dealt, showdown resolved.
    fn render_state(&mut self, game: &Game);

    fn play_sound(&mut self, cue: SoundCue);
}

/// Ignores everything. For headless use.
#[derive(Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render_state(&mut self, _game: &Game) {}
    fn play_sound(&mut self, _cue: SoundCue) {}
}

/// Counts renders and records sound cues in order. Used by tests.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub renders: usize,
    pub sounds: Vec<SoundCue>,
}

impl Presenter for RecordingPresenter {
    fn render_state(&mut self, _game: &Game) {
        self.renders += 1;
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }
}
