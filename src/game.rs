//! The game state machine: blinds, deals, betting passes, phase advances, and
//! showdown resolution for a fixed table of one human and four AI players.
//!
//! All mutation happens through the transition methods on [`Game`]; the deck,
//! pot, and player records are exclusively owned here. Each non-showdown
//! phase runs exactly one betting pass: starting at `current_index`, every
//! seat is visited once in table order (folded or broke seats are skipped
//! without prompting), then the phase advances.

use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::{evaluate, HandResult};
use crate::port::{Presenter, SoundCue};
use log::{debug, info};
use std::fmt;
use std::str::FromStr;

pub const SMALL_BLIND: u64 = 50;
pub const BIG_BLIND: u64 = 100;
pub const STARTING_CHIPS: u64 = 1000;
/// Fixed increment an AI raise adds on top of matching the table's max bet.
pub const RAISE_STEP: u64 = 100;
/// Number of AI opponents seated alongside the human.
pub const AI_SEATS: usize = 4;
pub const DEFAULT_PLAYER_NAME: &str = "You";

/// AI difficulty label. Accepted at game start and carried on the player;
/// it does not alter the decision thresholds in this version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: '{other}'")),
        }
    }
}

/// Betting phases in order. Showdown is terminal for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Phase {
    pub const fn label(self) -> &'static str {
        match self {
            Phase::PreFlop => "pre-flop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An action intent for the seat currently to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Check,
    Bet(u64),
    Fold,
}

/// A precomputed AI decision; amounts are the chips that will enter the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiDecision {
    Raise(u64),
    Call(u64),
    AllIn(u64),
    Fold,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("bet must be a positive amount")]
    ZeroBet,
    #[error("bet of {amount} exceeds remaining chips ({chips})")]
    BetExceedsChips { amount: u64, chips: u64 },
    #[error("cannot act during showdown")]
    Showdown,
    #[error("no human action is pending")]
    OutOfTurn,
}

/// Per-seat state. Created once per game; `hand`, `current_bet`, and
/// `is_folded` reset every round, `chips` persists across rounds.
#[derive(Debug, Clone)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) is_ai: bool,
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) hand: Vec<Card>,
    pub(crate) chips: u64,
    pub(crate) current_bet: u64,
    pub(crate) is_folded: bool,
}

impl Player {
    pub(crate) fn human(name: String) -> Self {
        Self {
            name,
            is_ai: false,
            difficulty: None,
            hand: Vec::new(),
            chips: STARTING_CHIPS,
            current_bet: 0,
            is_folded: false,
        }
    }

    pub(crate) fn ai(name: String, difficulty: Difficulty) -> Self {
        Self { is_ai: true, difficulty: Some(difficulty), ..Self::human(name) }
    }

    fn reset_for_new_round(&mut self) {
        self.hand.clear();
        self.current_bet = 0;
        self.is_folded = false;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_ai(&self) -> bool {
        self.is_ai
    }

    /// Only meaningful for AI seats.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// The player's hole cards (empty before the deal, two after).
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn chips(&self) -> u64 {
        self.chips
    }

    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    pub fn is_folded(&self) -> bool {
        self.is_folded
    }

    /// A seat is prompted during a betting pass only while it has chips and
    /// has not folded.
    fn can_act(&self) -> bool {
        !self.is_folded && self.chips > 0
    }
}

/// One running game: the table, deck, pot, community cards, and turn cursor.
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    deck: Deck,
    pot: u64,
    community: Vec<Card>,
    phase: Phase,
    dealer_index: usize,
    current_index: usize,
    small_blind: u64,
    big_blind: u64,
    /// Seats visited in the current betting pass; the pass ends at `n`.
    acted: usize,
    /// Winner of the last resolved showdown, for display.
    last_winner: Option<usize>,
    deck_seed: Option<u64>,
}

impl Game {
    /// Seat one human (defaulted name if blank) and four AI opponents.
    pub fn new(player_name: &str, difficulty: Difficulty) -> Self {
        let name = player_name.trim();
        let name = if name.is_empty() { DEFAULT_PLAYER_NAME } else { name };
        let mut players = Vec::with_capacity(1 + AI_SEATS);
        players.push(Player::human(name.to_string()));
        for i in 1..=AI_SEATS {
            players.push(Player::ai(format!("AI {i}"), difficulty));
        }
        Self {
            players,
            deck: Deck::standard(),
            pot: 0,
            community: Vec::new(),
            phase: Phase::PreFlop,
            dealer_index: 0,
            current_index: 0,
            small_blind: SMALL_BLIND,
            big_blind: BIG_BLIND,
            acted: 0,
            last_winner: None,
            deck_seed: None,
        }
    }

    /// Make every round's shuffle reproducible; the seed advances by one per
    /// round so consecutive rounds still differ.
    pub fn set_deck_seed(&mut self, seed: u64) {
        self.deck_seed = Some(seed);
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dealer_index(&self) -> usize {
        self.dealer_index
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_index]
    }

    pub fn small_blind(&self) -> u64 {
        self.small_blind
    }

    pub fn big_blind(&self) -> u64 {
        self.big_blind
    }

    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn last_winner(&self) -> Option<usize> {
        self.last_winner
    }

    /// Highest `current_bet` at the table.
    pub fn current_max_bet(&self) -> u64 {
        self.players.iter().map(|p| p.current_bet).max().unwrap_or(0)
    }

    /// Whether the engine is suspended waiting for the human seat.
    pub fn awaiting_human(&self) -> bool {
        self.phase != Phase::Showdown && !self.current_player().is_ai
    }

    /// Begin a round: reset the pot, community cards, and per-player round
    /// state, rebuild and reshuffle the deck, post blinds, deal two hole
    /// cards to each seat, then open the pre-flop betting pass. The dealer
    /// button moves one seat forward for the following round.
    pub fn start_round(&mut self, port: &mut dyn Presenter) {
        self.pot = 0;
        self.community.clear();
        self.phase = Phase::PreFlop;
        self.last_winner = None;
        for p in &mut self.players {
            p.reset_for_new_round();
        }
        self.deck = match self.deck_seed {
            Some(seed) => {
                self.deck_seed = Some(seed.wrapping_add(1));
                let mut d = Deck::standard();
                d.shuffle_seeded(seed);
                d
            }
            None => Deck::shuffled(),
        };

        self.post_blinds();

        for i in 0..self.players.len() {
            for _ in 0..2 {
                if let Some(card) = self.deck.deal() {
                    self.players[i].hand.push(card);
                }
            }
            port.play_sound(SoundCue::CardDeal);
        }

        port.render_state(self);

        self.acted = 0;
        self.settle_turn(port);
        self.dealer_index = (self.dealer_index + 1) % self.players.len();
    }

    fn post_blinds(&mut self) {
        let n = self.players.len();
        let sb_seat = (self.dealer_index + 1) % n;
        let bb_seat = (self.dealer_index + 2) % n;

        for (seat, blind, label) in
            [(sb_seat, self.small_blind, "small"), (bb_seat, self.big_blind, "big")]
        {
            let p = &mut self.players[seat];
            let v = p.chips.min(blind);
            p.chips -= v;
            p.current_bet += v;
            self.pot += v;
            info!("{} posts the {label} blind: {v}", p.name);
        }

        self.current_index = (self.dealer_index + 3) % n;
    }

    /// Apply an action for the seat currently to act. Invalid bets are
    /// rejected with no state change and the turn stays with the same player.
    pub fn apply_action(
        &mut self,
        action: Action,
        port: &mut dyn Presenter,
    ) -> Result<(), ActionError> {
        if self.phase == Phase::Showdown {
            return Err(ActionError::Showdown);
        }
        let idx = self.current_index;
        match action {
            Action::Check => {
                info!("{} checks", self.players[idx].name);
            }
            Action::Bet(amount) => {
                let p = &mut self.players[idx];
                if amount == 0 {
                    return Err(ActionError::ZeroBet);
                }
                if amount > p.chips {
                    return Err(ActionError::BetExceedsChips { amount, chips: p.chips });
                }
                p.chips -= amount;
                p.current_bet += amount;
                self.pot += amount;
                info!("{} bets {amount}", p.name);
                port.play_sound(SoundCue::Chips);
            }
            Action::Fold => {
                self.players[idx].is_folded = true;
                info!("{} folds", self.players[idx].name);
            }
        }
        self.advance_turn(port);
        Ok(())
    }

    /// Compute (without applying) the decision for an AI seat, from the
    /// normalized strength of its hole cards plus the community so far.
    pub fn decide_ai(&self, seat: usize) -> AiDecision {
        let p = &self.players[seat];
        let strength = evaluate(&p.hand, &self.community).strength();
        let max_bet = self.current_max_bet();
        let to_call = max_bet.saturating_sub(p.current_bet);

        if strength > 0.8 {
            AiDecision::Raise((to_call + RAISE_STEP).min(p.chips))
        } else if strength > 0.5 {
            if to_call > p.chips {
                AiDecision::AllIn(p.chips)
            } else {
                AiDecision::Call(to_call)
            }
        } else {
            AiDecision::Fold
        }
    }

    /// Apply a previously computed AI decision for the seat currently to act.
    pub fn apply_ai_decision(&mut self, decision: AiDecision, port: &mut dyn Presenter) {
        if self.phase == Phase::Showdown {
            return;
        }
        let idx = self.current_index;
        match decision {
            AiDecision::Raise(amount) | AiDecision::Call(amount) | AiDecision::AllIn(amount) => {
                let p = &mut self.players[idx];
                let v = p.chips.min(amount);
                p.chips -= v;
                p.current_bet += v;
                self.pot += v;
                match decision {
                    AiDecision::Raise(_) => info!("{} raises {v}", p.name),
                    AiDecision::AllIn(_) => info!("{} calls all-in for {v}", p.name),
                    _ => info!("{} calls {v}", p.name),
                }
                port.play_sound(SoundCue::Chips);
            }
            AiDecision::Fold => {
                self.players[idx].is_folded = true;
                info!("{} folds", self.players[idx].name);
            }
        }
        self.advance_turn(port);
    }

    fn advance_turn(&mut self, port: &mut dyn Presenter) {
        self.acted += 1;
        self.current_index = (self.current_index + 1) % self.players.len();
        self.settle_turn(port);
    }

    /// Skip past seats that cannot act, then advance the phase once every
    /// seat has been visited.
    fn settle_turn(&mut self, port: &mut dyn Presenter) {
        let n = self.players.len();
        while self.acted < n && !self.players[self.current_index].can_act() {
            self.acted += 1;
            self.current_index = (self.current_index + 1) % n;
        }
        if self.acted >= n {
            self.advance_phase(port);
        }
    }

    /// Close the completed betting pass: clear per-seat bets (the pot keeps
    /// everything), deal the next community cards, and open the next pass.
    /// Completing the river pass resolves the showdown instead.
    fn advance_phase(&mut self, port: &mut dyn Presenter) {
        for p in &mut self.players {
            p.current_bet = 0;
        }

        match self.phase {
            Phase::PreFlop => {
                self.phase = Phase::Flop;
                let flop = self.deck.deal_n(3);
                self.community.extend(flop);
            }
            Phase::Flop => {
                self.phase = Phase::Turn;
                if let Some(card) = self.deck.deal() {
                    self.community.push(card);
                }
            }
            Phase::Turn => {
                self.phase = Phase::River;
                if let Some(card) = self.deck.deal() {
                    self.community.push(card);
                }
            }
            Phase::River => {
                self.phase = Phase::Showdown;
                self.resolve_showdown(port);
                return;
            }
            Phase::Showdown => return,
        }

        debug!("phase advanced to {}", self.phase);
        port.render_state(self);
        self.acted = 0;
        self.settle_turn(port);
    }

    /// Evaluate every non-folded hand in table order and award the pot to the
    /// first hand never strictly beaten. Exact ties keep the earlier seat;
    /// the pot is never split. With no non-folded players nothing is awarded.
    fn resolve_showdown(&mut self, port: &mut dyn Presenter) {
        let mut best: Option<(usize, HandResult)> = None;
        for (i, p) in self.players.iter().enumerate() {
            if p.is_folded {
                continue;
            }
            let result = evaluate(&p.hand, &self.community);
            info!("{} shows: {}", p.name, result.rank.label());
            match best {
                Some((_, held)) if !result.beats(&held) => {}
                _ => best = Some((i, result)),
            }
        }

        if let Some((i, result)) = best {
            let amount = self.pot;
            self.players[i].chips += amount;
            self.pot = 0;
            self.last_winner = Some(i);
            info!("{} wins {amount} with {}", self.players[i].name, result.rank.label());
            port.play_sound(SoundCue::Win);
        } else {
            info!("no active players at showdown; pot not awarded");
        }

        port.render_state(self);
    }
}
