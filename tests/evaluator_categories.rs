use holdem_rs::cards::parse_cards;
use holdem_rs::evaluator::{evaluate, HandRank, HandResult};

fn eval(hand: &str, community: &str) -> HandResult {
    evaluate(&parse_cards(hand).unwrap(), &parse_cards(community).unwrap())
}

#[test]
fn every_category_is_reachable() {
    assert_eq!(eval("Ah Kh", "Qh Jh 10h 2c 3d").rank, HandRank::RoyalFlush);
    assert_eq!(eval("9s Ks", "Qs Js 10s 2c 3d").rank, HandRank::StraightFlush);
    assert_eq!(eval("9s 9d", "9h 9c 10s 2c 3d").rank, HandRank::FourOfAKind);
    assert_eq!(eval("9s 9d", "9h Kc Ks 2c 3d").rank, HandRank::FullHouse);
    assert_eq!(eval("2h 9h", "Kh Jh 4h 10c 3d").rank, HandRank::Flush);
    assert_eq!(eval("5s 6d", "7h 8c 9s 2c Ad").rank, HandRank::Straight);
    assert_eq!(eval("9s 9d", "9h Kc Qs 2c 3d").rank, HandRank::ThreeOfAKind);
    assert_eq!(eval("9s 9d", "Kh Kc Qs 2c 3d").rank, HandRank::TwoPair);
    assert_eq!(eval("9s 9d", "Ah Kc Qs 2c 3d").rank, HandRank::Pair);
    assert_eq!(eval("9s 7d", "Ah Kc Qs 2c 3d").rank, HandRank::HighCard);
}

#[test]
fn labels_match_their_ranks() {
    let r = eval("9s 9d", "9h Kc Ks 2c 3d");
    assert_eq!(r.rank.label(), "Full House");
    assert_eq!(r.rank.score(), 7);
    assert_eq!(eval("Ah Kh", "Qh Jh 10h 2c 3d").rank.label(), "Royal Flush");
    assert_eq!(eval("9s 7d", "Ah Kc Qs 2c 3d").rank.label(), "High Card");
}

#[test]
fn wheel_counts_as_a_straight_with_any_suits() {
    let r = eval("Ah 2d", "3c 4s 5h 9c Jd");
    assert_eq!(r.rank, HandRank::Straight);
    assert_eq!(r.rank.score(), 5);
}

#[test]
fn four_of_a_kind_beats_a_full_house() {
    let quads = eval("2s 2d", "2h 2c 10s Jc Qd");
    let boat = eval("As Ad", "Ah Kc Ks Jc Qd");
    assert!(quads.beats(&boat));
    assert!(!boat.beats(&quads));
}

#[test]
fn a_bare_triple_does_not_make_a_full_house() {
    // Trips plus no pair classifies lower.
    assert_eq!(eval("9s 9d", "9h Kc Qs 2c 3d").rank, HandRank::ThreeOfAKind);
    // Trips plus exactly one pair does.
    assert_eq!(eval("9s 9d", "9h Kc Ks 2c 3d").rank, HandRank::FullHouse);
}

#[test]
fn high_card_spans_the_whole_merged_set() {
    // The ace sits in the community, not the hole cards.
    let r = eval("2s 7d", "Ah Kc Qs 4c 3d");
    assert_eq!(r.high_card, 14);
}

#[test]
fn partial_inputs_are_accepted() {
    // Pre-flop strength estimation: two hole cards, no community.
    let r = eval("Ah Ad", "");
    assert_eq!(r.rank, HandRank::Pair);
    assert_eq!(r.high_card, 14);

    // Flop-only estimate.
    let r = eval("Ah Ad", "Ac 2d 3s");
    assert_eq!(r.rank, HandRank::ThreeOfAKind);
}

#[test]
fn determinism_over_card_order() {
    let a = eval("Ah Kd", "Qc Jh 10s 3c 2d");
    let b = eval("Kd Ah", "2d 3c 10s Jh Qc");
    assert_eq!(a, b);
}

#[test]
fn independent_flush_and_straight_read_as_a_straight_flush() {
    // Five clubs plus a straight that mixes suits: no five cards are both a
    // flush and a straight, yet the classifier reports a straight flush.
    // This is the documented coarse behavior, preserved on purpose.
    let r = eval("2c 5c", "8c 9c Jc 6h 7d");
    assert_eq!(r.rank, HandRank::StraightFlush);
}
