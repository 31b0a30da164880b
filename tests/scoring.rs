//! Scoring integration tests.

use cribrs::score::{
    ScoreBreakdown, crib_flush, fifteens, flush, his_heels, nobs, pairs, runs, score_crib,
    score_hand, subsets,
};
use cribrs::{Card, Hand, Suit, total};

fn card(suit: Suit, rank: u8) -> Card {
    Card::try_new(suit, rank).unwrap()
}

fn hand(cards: &[Card]) -> Hand {
    cards.iter().copied().collect()
}

#[test]
fn subsets_enumerate_each_combination_once() {
    let cards = [
        card(Suit::Spade, 1),
        card(Suit::Club, 2),
        card(Suit::Heart, 3),
        card(Suit::Diamond, 4),
        card(Suit::Spade, 5),
    ];

    assert_eq!(subsets(&cards, 2).count(), 10);
    assert_eq!(subsets(&cards, 3).count(), 10);
    assert_eq!(subsets(&cards, 5).count(), 1);
    assert!(subsets(&cards, 6).next().is_none());
    assert!(
        subsets(&cards, 3)
            .all(|subset| subset[0] != subset[1] && subset[1] != subset[2])
    );
}

#[test]
fn fifteens_count_every_combination() {
    let nines = [
        card(Suit::Spade, 9),
        card(Suit::Club, 9),
        card(Suit::Heart, 9),
        card(Suit::Diamond, 9),
    ];
    assert_eq!(fifteens(&nines), 0);

    assert_eq!(fifteens(&[card(Suit::Spade, 5), card(Suit::Club, 10)]), 2);

    let fives_and_ten = [
        card(Suit::Spade, 5),
        card(Suit::Club, 5),
        card(Suit::Heart, 5),
        card(Suit::Diamond, 10),
    ];
    assert_eq!(fifteens(&fives_and_ten), 8);
}

#[test]
fn fifteens_count_face_cards_as_ten() {
    let cards = [
        card(Suit::Spade, 5),
        card(Suit::Club, 11),
        card(Suit::Heart, 12),
        card(Suit::Diamond, 13),
    ];
    assert_eq!(fifteens(&cards), 6);
}

#[test]
fn fifteens_of_empty_and_single_cards_score_nothing() {
    assert_eq!(fifteens(&[]), 0);
    assert_eq!(fifteens(&[card(Suit::Spade, 13)]), 0);
}

#[test]
fn twenty_nine_hand_counts_sixteen_for_fifteens() {
    let cards = [
        card(Suit::Spade, 5),
        card(Suit::Club, 5),
        card(Suit::Heart, 5),
        card(Suit::Diamond, 11),
        card(Suit::Diamond, 5),
    ];
    assert_eq!(fifteens(&cards), 16);
}

#[test]
fn pairs_follow_kind_pattern() {
    let no_pairs = [
        card(Suit::Spade, 9),
        card(Suit::Club, 7),
        card(Suit::Heart, 8),
        card(Suit::Diamond, 6),
    ];
    assert_eq!(pairs(&no_pairs), 0);

    assert_eq!(pairs(&[card(Suit::Spade, 5), card(Suit::Club, 5)]), 2);

    let triple = [
        card(Suit::Spade, 4),
        card(Suit::Club, 4),
        card(Suit::Heart, 4),
    ];
    assert_eq!(pairs(&triple), 6);

    let four_jacks = [
        card(Suit::Spade, 11),
        card(Suit::Club, 11),
        card(Suit::Heart, 11),
        card(Suit::Diamond, 11),
    ];
    assert_eq!(pairs(&four_jacks), 12);
}

#[test]
fn nobs_requires_jack_of_starter_suit() {
    let nines = [
        card(Suit::Spade, 9),
        card(Suit::Club, 9),
        card(Suit::Heart, 9),
        card(Suit::Diamond, 9),
    ];
    assert_eq!(nobs(&nines, card(Suit::Spade, 11)), 0);

    let with_jack = [
        card(Suit::Spade, 11),
        card(Suit::Club, 9),
        card(Suit::Heart, 9),
        card(Suit::Diamond, 9),
    ];
    assert_eq!(nobs(&with_jack, card(Suit::Spade, 9)), 1);
    assert_eq!(nobs(&with_jack, card(Suit::Heart, 2)), 0);

    assert_eq!(nobs(&nines, card(Suit::Spade, 13)), 0);
}

#[test]
fn nobs_is_zero_for_jack_starter_even_with_jacks_in_hand() {
    let jacks = [
        card(Suit::Spade, 11),
        card(Suit::Club, 11),
        card(Suit::Heart, 11),
    ];
    assert_eq!(nobs(&jacks, card(Suit::Diamond, 11)), 0);
    assert_eq!(his_heels(card(Suit::Diamond, 11)), 2);
    assert_eq!(his_heels(card(Suit::Diamond, 10)), 0);
}

#[test]
fn flush_counts_four_or_five() {
    let spades = [
        card(Suit::Spade, 5),
        card(Suit::Spade, 6),
        card(Suit::Spade, 7),
        card(Suit::Spade, 8),
    ];
    assert_eq!(flush(&spades), 4);

    let mixed = [
        card(Suit::Spade, 9),
        card(Suit::Club, 9),
        card(Suit::Spade, 10),
        card(Suit::Spade, 11),
    ];
    assert_eq!(flush(&mixed), 0);

    let mut five = spades.to_vec();
    five.push(card(Suit::Spade, 13));
    assert_eq!(flush(&five), 5);

    let mut four_and_off_suit = spades.to_vec();
    four_and_off_suit.push(card(Suit::Heart, 13));
    assert_eq!(flush(&four_and_off_suit), 4);
}

#[test]
fn crib_flush_needs_starter() {
    let crib = [
        card(Suit::Heart, 1),
        card(Suit::Heart, 4),
        card(Suit::Heart, 8),
        card(Suit::Heart, 12),
    ];
    assert_eq!(crib_flush(&crib, card(Suit::Heart, 6)), 5);
    assert_eq!(crib_flush(&crib, card(Suit::Club, 6)), 0);
}

#[test]
fn runs_score_length_and_multiplicity() {
    let three = [
        card(Suit::Spade, 5),
        card(Suit::Club, 6),
        card(Suit::Heart, 7),
    ];
    assert_eq!(runs(&three), 3);

    let five = [
        card(Suit::Spade, 5),
        card(Suit::Club, 6),
        card(Suit::Heart, 7),
        card(Suit::Spade, 8),
        card(Suit::Heart, 9),
    ];
    assert_eq!(runs(&five), 5);

    let double_double = [
        card(Suit::Spade, 5),
        card(Suit::Club, 6),
        card(Suit::Heart, 6),
        card(Suit::Spade, 7),
        card(Suit::Heart, 7),
    ];
    assert_eq!(runs(&double_double), 12);

    let none = [
        card(Suit::Spade, 1),
        card(Suit::Club, 3),
        card(Suit::Heart, 5),
        card(Suit::Diamond, 7),
        card(Suit::Spade, 10),
    ];
    assert_eq!(runs(&none), 0);
}

#[test]
fn runs_triple_run_and_double_run_of_four() {
    let triple = [
        card(Suit::Spade, 9),
        card(Suit::Club, 9),
        card(Suit::Heart, 9),
        card(Suit::Spade, 10),
        card(Suit::Heart, 11),
    ];
    assert_eq!(runs(&triple), 9);

    let double_four = [
        card(Suit::Spade, 2),
        card(Suit::Club, 3),
        card(Suit::Heart, 3),
        card(Suit::Spade, 4),
        card(Suit::Heart, 5),
    ];
    assert_eq!(runs(&double_four), 8);
}

#[test]
fn longer_run_dominates_shorter_one() {
    let cards = [
        card(Suit::Spade, 1),
        card(Suit::Club, 2),
        card(Suit::Heart, 3),
        card(Suit::Spade, 4),
        card(Suit::Heart, 12),
    ];
    assert_eq!(runs(&cards), 4);
}

#[test]
fn disjoint_runs_of_equal_length_both_score() {
    let cards = [
        card(Suit::Spade, 1),
        card(Suit::Club, 2),
        card(Suit::Heart, 3),
        card(Suit::Spade, 5),
        card(Suit::Club, 6),
        card(Suit::Heart, 7),
    ];
    assert_eq!(runs(&cards), 6);

    let uneven = [
        card(Suit::Spade, 1),
        card(Suit::Club, 2),
        card(Suit::Heart, 3),
        card(Suit::Spade, 5),
        card(Suit::Club, 6),
        card(Suit::Heart, 7),
        card(Suit::Diamond, 8),
    ];
    assert_eq!(runs(&uneven), 4);
}

#[test]
fn runs_wrap_neither_past_king_nor_to_ace() {
    let cards = [
        card(Suit::Spade, 12),
        card(Suit::Club, 13),
        card(Suit::Heart, 1),
    ];
    assert_eq!(runs(&cards), 0);
}

#[test]
fn total_uses_starter_in_every_category() {
    let mut run = Hand::new();
    run.pickup_all([
        card(Suit::Spade, 2),
        card(Suit::Club, 3),
        card(Suit::Heart, 4),
    ]);
    assert_eq!(total(&run, card(Suit::Diamond, 5)), 4);

    let fives = hand(&[
        card(Suit::Spade, 5),
        card(Suit::Club, 5),
        card(Suit::Heart, 10),
    ]);
    assert_eq!(total(&fives, card(Suit::Diamond, 9)), 6);

    let flush_run = hand(&[
        card(Suit::Spade, 2),
        card(Suit::Spade, 3),
        card(Suit::Spade, 4),
        card(Suit::Spade, 5),
    ]);
    assert_eq!(total(&flush_run, card(Suit::Club, 10)), 12);
}

#[test]
fn total_does_not_mutate_hand_and_is_idempotent() {
    let cards = hand(&[
        card(Suit::Spade, 2),
        card(Suit::Spade, 3),
        card(Suit::Spade, 4),
        card(Suit::Spade, 5),
    ]);
    let before = cards.clone();
    let starter = card(Suit::Club, 10);

    let first = total(&cards, starter);
    let second = total(&cards, starter);

    assert_eq!(first, second);
    assert_eq!(cards, before);
    assert_eq!(cards.len(), 4);
}

#[test]
fn breakdown_reports_each_category() {
    let cards = hand(&[
        card(Suit::Spade, 5),
        card(Suit::Club, 5),
        card(Suit::Heart, 5),
        card(Suit::Diamond, 11),
    ]);
    let starter = card(Suit::Diamond, 5);

    let breakdown = score_hand(&cards, starter);
    assert_eq!(
        breakdown,
        ScoreBreakdown {
            fifteens: 16,
            pairs: 12,
            runs: 0,
            flush: 0,
            nobs: 1,
        }
    );
    assert_eq!(breakdown.total(), 29);
}

#[test]
fn crib_needs_five_card_flush_but_hand_does_not() {
    let cards = hand(&[
        card(Suit::Heart, 1),
        card(Suit::Heart, 4),
        card(Suit::Heart, 8),
        card(Suit::Heart, 12),
    ]);
    let starter = card(Suit::Club, 6);

    assert_eq!(score_hand(&cards, starter).flush, 4);
    assert_eq!(score_crib(&cards, starter).flush, 0);
    assert_eq!(score_crib(&cards, card(Suit::Heart, 6)).flush, 5);
}

#[test]
fn fifteens_and_pairs_are_even_for_every_starter() {
    let cards = hand(&[
        card(Suit::Spade, 7),
        card(Suit::Club, 8),
        card(Suit::Heart, 8),
        card(Suit::Diamond, 13),
    ]);

    for suit in Suit::ALL {
        for rank in 1..=13 {
            let breakdown = score_hand(&cards, card(suit, rank));
            assert_eq!(breakdown.fifteens % 2, 0);
            assert_eq!(breakdown.pairs % 2, 0);
            assert_eq!(breakdown.total(), total(&cards, card(suit, rank)));
        }
    }
}
