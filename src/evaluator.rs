//! Hand evaluation: a pure combinatorial classifier over 0..=7 cards.
//!
//! Flush and straight detection run independently over the merged card set
//! rather than over a verified 5-card subset, and `high_card` is the maximum
//! value among all merged cards rather than a full kicker ladder. Both are
//! deliberate behavioral contracts of this engine, kept coarse on purpose;
//! callers compare results by `(rank, high_card)` only.

use crate::cards::Card;

/// Hand categories from weakest (1) to strongest (10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HandRank {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandRank {
    /// Numeric score 1..=10.
    pub const fn score(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

impl std::fmt::Display for HandRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one evaluation. Ephemeral; produced per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    pub rank: HandRank,
    /// Highest card value among all merged cards (2..=14; 0 for empty input).
    pub high_card: u8,
}

impl HandResult {
    /// Normalized strength in 0.1..=1.0, used by the AI decision thresholds.
    pub fn strength(&self) -> f64 {
        f64::from(self.rank.score()) / 10.0
    }

    /// Strictly stronger than `other`: greater rank, or equal rank with a
    /// strictly greater high card. Exact ties are NOT stronger; the showdown
    /// keeps the first-evaluated hand on a tie.
    pub fn beats(&self, other: &HandResult) -> bool {
        self.rank > other.rank || (self.rank == other.rank && self.high_card > other.high_card)
    }
}

/// Classify the best combination in `hand` (0..=2 hole cards) merged with
/// `community` (0..=5 shared cards).
///
/// Pure and deterministic: identical card multisets always produce identical
/// results. Partial inputs are accepted so the AI can estimate strength
/// before the river.
///
/// ```
/// use holdem_rs::cards::parse_cards;
/// use holdem_rs::evaluator::{evaluate, HandRank};
///
/// let hand = parse_cards("Ah Kh").unwrap();
/// let community = parse_cards("Qh Jh 10h 2c 3d").unwrap();
/// let result = evaluate(&hand, &community);
/// assert_eq!(result.rank, HandRank::RoyalFlush);
/// assert_eq!(result.high_card, 14);
/// ```
pub fn evaluate(hand: &[Card], community: &[Card]) -> HandResult {
    let cards: Vec<Card> = hand.iter().chain(community.iter()).copied().collect();

    let mut values: Vec<u8> = cards.iter().map(|c| c.rank().value()).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = check_flush(&cards);
    let is_straight = check_straight(&values);
    let counts = RankCounts::from_values(&values);
    let high_card = values.first().copied().unwrap_or(0);

    let rank = if is_flush && is_straight && high_card == 14 {
        HandRank::RoyalFlush
    } else if is_flush && is_straight {
        HandRank::StraightFlush
    } else if counts.four_of_kind {
        HandRank::FourOfAKind
    } else if counts.three_of_kind && counts.pairs == 1 {
        HandRank::FullHouse
    } else if is_flush {
        HandRank::Flush
    } else if is_straight {
        HandRank::Straight
    } else if counts.three_of_kind {
        HandRank::ThreeOfAKind
    } else if counts.pairs == 2 {
        HandRank::TwoPair
    } else if counts.pairs == 1 {
        HandRank::Pair
    } else {
        HandRank::HighCard
    };

    HandResult { rank, high_card }
}

/// Any suit represented five or more times.
fn check_flush(cards: &[Card]) -> bool {
    let mut suit_counts = [0u8; 4];
    for c in cards {
        suit_counts[c.suit() as usize] += 1;
    }
    suit_counts.iter().any(|&n| n >= 5)
}

/// Five consecutive distinct values anywhere in the set, or the wheel
/// (A-2-3-4-5 with the ace counting low). `values` must be sorted descending.
fn check_straight(values: &[u8]) -> bool {
    let mut uniq: Vec<u8> = values.to_vec();
    uniq.dedup();

    if uniq.len() >= 5 {
        for window in uniq.windows(5) {
            if window.windows(2).all(|w| w[0] - 1 == w[1]) {
                return true;
            }
        }
    }
    // Wheel: ace plays low.
    [14, 5, 4, 3, 2].iter().all(|v| uniq.contains(v))
}

/// Frequency-derived facts about the rank multiset.
struct RankCounts {
    four_of_kind: bool,
    three_of_kind: bool,
    /// Number of distinct values appearing exactly twice.
    pairs: u8,
}

impl RankCounts {
    fn from_values(values: &[u8]) -> Self {
        let mut freq = [0u8; 15];
        for &v in values {
            freq[v as usize] += 1;
        }
        Self {
            four_of_kind: freq.contains(&4),
            three_of_kind: freq.contains(&3),
            pairs: freq.iter().filter(|&&n| n == 2).count() as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn eval(hand: &str, community: &str) -> HandResult {
        evaluate(&parse_cards(hand).unwrap(), &parse_cards(community).unwrap())
    }

    #[test]
    fn high_card_is_max_merged_value() {
        let r = eval("2c 5d", "9h Jc 3s");
        assert_eq!(r.rank, HandRank::HighCard);
        assert_eq!(r.high_card, 11);
    }

    #[test]
    fn pair_and_two_pair() {
        assert_eq!(eval("Ah Ad", "2c 5d 9h").rank, HandRank::Pair);
        assert_eq!(eval("Ah Ad", "5c 5d 9h").rank, HandRank::TwoPair);
    }

    #[test]
    fn trips_without_pair_is_three_of_a_kind() {
        let r = eval("Qh Qd", "Qc 5d 9h Jc 2s");
        assert_eq!(r.rank, HandRank::ThreeOfAKind);
    }

    #[test]
    fn full_house_needs_exactly_one_pair_beside_trips() {
        assert_eq!(eval("Qh Qd", "Qc 5d 5h Jc 2s").rank, HandRank::FullHouse);
        // Two trips: the frequency multiset has no pair, so this is NOT a full
        // house under this classifier.
        assert_eq!(eval("Qh Qd", "Qc 5d 5h 5s 2s").rank, HandRank::ThreeOfAKind);
    }

    #[test]
    fn wheel_straight_recognized() {
        let r = eval("Ah 2d", "3c 4s 5h Kc 9d");
        assert_eq!(r.rank, HandRank::Straight);
        assert_eq!(r.high_card, 14);
    }

    #[test]
    fn royal_flush_requires_ace_high() {
        assert_eq!(eval("Ah Kh", "Qh Jh 10h 2c 3d").rank, HandRank::RoyalFlush);
        assert_eq!(eval("9h Kh", "Qh Jh 10h 2c 3d").rank, HandRank::StraightFlush);
    }

    #[test]
    fn unrelated_flush_and_straight_classify_as_straight_flush() {
        // Five hearts plus a 5-6-7-8-9 straight that is not all hearts. The
        // flush and straight checks are independent, so this reads as a
        // straight flush. Contractual behavior, not a defect.
        let r = eval("2h 5h", "8h 9h Jh 6c 7d");
        assert!(check_flush(&parse_cards("2h 5h 8h 9h Jh").unwrap()));
        assert_eq!(r.rank, HandRank::StraightFlush);
    }

    #[test]
    fn empty_input_is_high_card_zero() {
        let r = evaluate(&[], &[]);
        assert_eq!(r.rank, HandRank::HighCard);
        assert_eq!(r.high_card, 0);
    }

    #[test]
    fn strength_is_rank_over_ten() {
        let r = eval("Ah Ad", "2c 5d 9h");
        assert!((r.strength() - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn beats_is_strict() {
        let a = HandResult { rank: HandRank::Pair, high_card: 14 };
        let b = HandResult { rank: HandRank::Pair, high_card: 14 };
        let c = HandResult { rank: HandRank::Pair, high_card: 13 };
        assert!(!a.beats(&b));
        assert!(a.beats(&c));
        assert!(!c.beats(&a));
    }
}
