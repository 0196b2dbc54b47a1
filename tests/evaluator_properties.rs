use holdem_rs::cards::{Card, Rank, Suit};
use holdem_rs::evaluator::{evaluate, HandRank};
use proptest::prelude::*;

prop_compose! {
    fn any_rank()(v in 2u8..=14u8) -> Rank {
        rank_from_val(v)
    }
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Hearts), Just(Suit::Diamonds), Just(Suit::Clubs), Just(Suit::Spades),]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s))
}

fn rank_from_val(v: u8) -> Rank {
    match v {
        2 => Rank::Two,
        3 => Rank::Three,
        4 => Rank::Four,
        5 => Rank::Five,
        6 => Rank::Six,
        7 => Rank::Seven,
        8 => Rank::Eight,
        9 => Rank::Nine,
        10 => Rank::Ten,
        11 => Rank::Jack,
        12 => Rank::Queen,
        13 => Rank::King,
        _ => Rank::Ace,
    }
}

proptest! {
    #[test]
    fn score_and_high_card_stay_in_range(cards in prop::array::uniform7(any_card())) {
        let r = evaluate(&cards[..2], &cards[2..]);
        prop_assert!((1..=10).contains(&r.rank.score()));
        prop_assert!((2..=14).contains(&r.high_card));
    }

    #[test]
    fn strength_is_score_scaled(cards in prop::array::uniform7(any_card())) {
        let r = evaluate(&cards[..2], &cards[2..]);
        let expected = f64::from(r.rank.score()) / 10.0;
        prop_assert!((r.strength() - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn split_between_hand_and_community_is_irrelevant(
        cards in prop::array::uniform7(any_card()),
        split in 0usize..=7,
    ) {
        // Only the merged multiset matters.
        let a = evaluate(&cards[..split], &cards[split..]);
        let b = evaluate(&cards, &[]);
        let c = evaluate(&[], &cards);
        prop_assert_eq!(a, b);
        prop_assert_eq!(b, c);
    }

    #[test]
    fn order_of_cards_is_irrelevant(cards in prop::array::uniform7(any_card())) {
        let forward = evaluate(&cards[..2], &cards[2..]);
        let mut reversed = cards;
        reversed.reverse();
        let backward = evaluate(&reversed[..2], &reversed[2..]);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn high_card_is_the_maximum_merged_value(cards in prop::array::uniform7(any_card())) {
        let r = evaluate(&cards[..2], &cards[2..]);
        let max = cards.iter().map(|c| c.rank().value()).max().unwrap();
        prop_assert_eq!(r.high_card, max);
    }

    #[test]
    fn extra_community_cards_never_lower_the_high_card(
        cards in prop::array::uniform7(any_card()),
        extra in prop::collection::vec(any_card(), 0..=2),
    ) {
        let before = evaluate(&cards[..2], &cards[2..]);
        let mut community: Vec<Card> = cards[2..].to_vec();
        community.extend(extra);
        let after = evaluate(&cards[..2], &community);
        prop_assert!(after.high_card >= before.high_card);
    }

    #[test]
    fn five_of_one_suit_reads_at_least_as_a_flush(
        values in prop::collection::btree_set(2u8..=14u8, 5..=7),
        suit in any_suit(),
    ) {
        let cards: Vec<Card> =
            values.iter().map(|&v| Card::new(rank_from_val(v), suit)).collect();
        let r = evaluate(&[], &cards);
        prop_assert!(r.rank >= HandRank::Flush);
    }

    #[test]
    fn beats_is_irreflexive_and_antisymmetric(
        a in prop::array::uniform7(any_card()),
        b in prop::array::uniform7(any_card()),
    ) {
        let ea = evaluate(&a[..2], &a[2..]);
        let eb = evaluate(&b[..2], &b[2..]);
        prop_assert!(!ea.beats(&ea));
        prop_assert!(!(ea.beats(&eb) && eb.beats(&ea)));
    }
}
