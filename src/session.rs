//! The turn scheduler: one linear, cooperative flow with two suspension
//! points.
//!
//! A human turn suspends indefinitely until the frontend submits an intent
//! through [`Session::submit_human_action`]. An AI turn suspends for a fixed
//! "thinking" delay; the decision itself is computed synchronously when the
//! turn is scheduled and applied unchanged when the delay elapses. After a
//! showdown the session pauses for a round break, then starts the next round.
//!
//! Nothing mutates the game outside [`Session::tick`] and
//! [`Session::submit_human_action`], so no locking is needed; frontends call
//! `tick` from their event loop with the current instant.

use crate::game::{Action, ActionError, AiDecision, Difficulty, Game, Phase};
use crate::port::Presenter;
use std::time::{Duration, Instant};

/// How long an AI seat "thinks" before its precomputed action fires.
pub const THINKING_DELAY: Duration = Duration::from_secs(1);
/// Pause between a showdown and the next round's deal.
pub const ROUND_BREAK: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy)]
enum TurnState {
    /// Suspended until the human seat submits check/bet/fold. No timeout.
    AwaitingHuman,
    /// An AI turn in flight: the decision is already made, only time passes.
    AiThinking { decision: AiDecision, resume_at: Instant },
    /// Showdown resolved; a new round starts when the break elapses.
    RoundBreak { resume_at: Instant },
}

/// Drives a [`Game`] through rounds against a presentation port.
pub struct Session<P: Presenter> {
    game: Game,
    port: P,
    turn: TurnState,
    thinking_delay: Duration,
    round_break: Duration,
}

impl<P: Presenter> Session<P> {
    /// Seat the named human against four AI opponents at the given
    /// difficulty and deal the first round.
    pub fn start_game(player_name: &str, difficulty: Difficulty, port: P) -> Self {
        Self::new(Game::new(player_name, difficulty), port)
    }

    /// Start a session over a prepared game (e.g. one with a seeded deck).
    pub fn new(mut game: Game, mut port: P) -> Self {
        game.start_round(&mut port);
        let mut session = Self {
            game,
            port,
            turn: TurnState::AwaitingHuman,
            thinking_delay: THINKING_DELAY,
            round_break: ROUND_BREAK,
        };
        session.turn = session.next_turn_state(Instant::now());
        session
    }

    /// Override the fixed delays (tests and fast-forward frontends).
    pub fn with_delays(mut self, thinking_delay: Duration, round_break: Duration) -> Self {
        self.thinking_delay = thinking_delay;
        self.round_break = round_break;
        // Reschedule anything already pending under the old delays.
        self.turn = self.next_turn_state(Instant::now());
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// True while the flow is suspended on the human seat.
    pub fn awaiting_human(&self) -> bool {
        matches!(self.turn, TurnState::AwaitingHuman)
    }

    fn next_turn_state(&mut self, now: Instant) -> TurnState {
        if self.game.phase() == Phase::Showdown {
            return TurnState::RoundBreak { resume_at: now + self.round_break };
        }
        let seat = self.game.current_index();
        if self.game.players()[seat].is_ai() {
            let decision = self.game.decide_ai(seat);
            TurnState::AiThinking { decision, resume_at: now + self.thinking_delay }
        } else {
            TurnState::AwaitingHuman
        }
    }

    /// Apply a human intent. A rejected action leaves the turn with the same
    /// player; the frontend re-prompts.
    pub fn submit_human_action(&mut self, action: Action) -> Result<(), ActionError> {
        if !self.awaiting_human() {
            return Err(ActionError::OutOfTurn);
        }
        self.game.apply_action(action, &mut self.port)?;
        self.turn = self.next_turn_state(Instant::now());
        Ok(())
    }

    /// Resume any scheduled continuation whose deadline has passed. Returns
    /// true when game state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.turn {
            TurnState::AiThinking { decision, resume_at } if now >= resume_at => {
                self.game.apply_ai_decision(decision, &mut self.port);
                self.turn = self.next_turn_state(now);
                true
            }
            TurnState::RoundBreak { resume_at } if now >= resume_at => {
                self.game.start_round(&mut self.port);
                self.turn = self.next_turn_state(now);
                true
            }
            _ => false,
        }
    }
}
