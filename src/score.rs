//! Hand scoring.
//!
//! Every scorer is a pure function over a slice of cards. The aggregate
//! functions ([`score_hand`], [`score_crib`] and [`total`]) build a combined
//! view of the hand plus the starter for fifteens, pairs, runs and flush, and
//! evaluate nobs against the hand alone. The caller's [`Hand`] is never
//! modified.
//!
//! # Example
//!
//! ```
//! use cribrs::{Card, Hand, Rank, Suit, score};
//!
//! let mut hand = Hand::new();
//! hand.pickup_all([
//!     Card::new(Suit::Spade, Rank::Two),
//!     Card::new(Suit::Spade, Rank::Three),
//!     Card::new(Suit::Spade, Rank::Four),
//!     Card::new(Suit::Spade, Rank::Five),
//! ]);
//! let starter = Card::new(Suit::Club, Rank::Ten);
//!
//! assert_eq!(score::total(&hand, starter), 12);
//! assert_eq!(hand.len(), 4);
//! ```

extern crate alloc;

use alloc::vec::Vec;
use core::iter;

use itertools::Itertools;

use crate::card::{Card, Rank};
use crate::hand::Hand;

/// Points for each combination counting fifteen.
pub const FIFTEEN_POINTS: u8 = 2;
/// Points for each pair.
pub const PAIR_POINTS: u8 = 2;
/// Points for holding the jack of the starter's suit.
pub const NOBS_POINTS: u8 = 1;
/// Points for the dealer when the starter is a jack.
pub const HIS_HEELS_POINTS: u8 = 2;

const FIFTEEN: u16 = 15;
const MIN_RUN: usize = 3;

/// Points scored in each category for a hand and starter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    /// Points from combinations summing to fifteen.
    pub fifteens: u8,
    /// Points from pairs.
    pub pairs: u8,
    /// Points from runs.
    pub runs: u8,
    /// Points from a flush.
    pub flush: u8,
    /// Point for his nobs.
    pub nobs: u8,
}

impl ScoreBreakdown {
    /// Sum of all categories.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.fifteens
            .saturating_add(self.pairs)
            .saturating_add(self.runs)
            .saturating_add(self.flush)
            .saturating_add(self.nobs)
    }
}

fn points(count: usize, each: u8) -> u8 {
    u8::try_from(count.saturating_mul(usize::from(each))).unwrap_or(u8::MAX)
}

/// Enumerates every subset of `size` cards, each card used at most once.
///
/// Subsets are yielded in lexicographic order of card positions.
pub fn subsets(cards: &[Card], size: usize) -> impl Iterator<Item = Vec<Card>> + '_ {
    cards.iter().copied().combinations(size)
}

/// Scores two points for every subset of two or more cards whose values sum
/// to fifteen.
#[must_use]
pub fn fifteens(cards: &[Card]) -> u8 {
    let count = (2..=cards.len())
        .flat_map(|size| subsets(cards, size))
        .filter(|subset| {
            subset
                .iter()
                .map(|card| u16::from(card.cribbage_value()))
                .sum::<u16>()
                == FIFTEEN
        })
        .count();

    points(count, FIFTEEN_POINTS)
}

/// Scores two points for every pair of cards with the same rank.
#[must_use]
pub fn pairs(cards: &[Card]) -> u8 {
    let count = subsets(cards, 2)
        .filter(|pair| pair[0].rank == pair[1].rank)
        .count();

    points(count, PAIR_POINTS)
}

/// A maximal stretch of consecutive ranks present in a set of cards.
#[derive(Debug, Clone, Copy)]
struct RankRun {
    /// Lowest rank value in the run.
    start: usize,
    /// Number of distinct ranks.
    len: usize,
}

fn rank_counts(cards: &[Card]) -> [usize; 14] {
    let mut counts = [0; 14];
    for card in cards {
        counts[usize::from(card.rank.value())] += 1;
    }
    counts
}

fn maximal_runs(counts: &[usize; 14]) -> Vec<RankRun> {
    let mut runs = Vec::new();
    let mut current: Option<RankRun> = None;

    for rank in Rank::ALL {
        let value = usize::from(rank.value());
        if counts[value] == 0 {
            runs.extend(current.take());
        } else if let Some(run) = current.as_mut() {
            run.len += 1;
        } else {
            current = Some(RankRun {
                start: value,
                len: 1,
            });
        }
    }

    runs.extend(current);
    runs
}

/// Scores the longest run of consecutive ranks.
///
/// A run scores its length times the number of cards held at each of its
/// ranks, so a double run of three scores six. Shorter runs never score
/// alongside a longer one. When several disjoint runs share the longest
/// length (possible only with six or more cards), each of them scores.
#[must_use]
pub fn runs(cards: &[Card]) -> u8 {
    let counts = rank_counts(cards);
    let maximal = maximal_runs(&counts);

    let longest = maximal.iter().map(|run| run.len).max().unwrap_or(0);
    if longest < MIN_RUN {
        return 0;
    }

    let total = maximal
        .iter()
        .filter(|run| run.len == longest)
        .map(|run| {
            counts[run.start..run.start + run.len]
                .iter()
                .fold(run.len, |acc, &count| acc.saturating_mul(count))
        })
        .fold(0, usize::saturating_add);

    points(total, 1)
}

/// Scores a flush: the number of cards in a suit held four or more times.
#[must_use]
pub fn flush(cards: &[Card]) -> u8 {
    let mut counts = [0; 4];
    for card in cards {
        counts[usize::from(card.suit.id() - 1)] += 1;
    }

    let best = counts.into_iter().max().unwrap_or(0);
    if best >= 4 { points(best, 1) } else { 0 }
}

/// Scores a crib flush, which needs every crib card and the starter to share
/// a suit.
#[must_use]
pub fn crib_flush(crib: &[Card], starter: Card) -> u8 {
    if crib.len() >= 4 && crib.iter().all(|card| card.suit == starter.suit) {
        points(crib.len() + 1, 1)
    } else {
        0
    }
}

/// Scores his nobs: one point for the jack of the starter's suit.
///
/// A jack starter scores nothing here; the dealer collects his heels for it
/// instead.
#[must_use]
pub fn nobs(hand: &[Card], starter: Card) -> u8 {
    if starter.is_jack() {
        return 0;
    }

    if hand
        .iter()
        .any(|card| card.is_jack() && card.suit == starter.suit)
    {
        NOBS_POINTS
    } else {
        0
    }
}

/// Scores his heels: the dealer's bonus when the starter is a jack.
#[must_use]
pub const fn his_heels(starter: Card) -> u8 {
    if starter.is_jack() { HIS_HEELS_POINTS } else { 0 }
}

fn with_starter(hand: &[Card], starter: Card) -> Vec<Card> {
    hand.iter().copied().chain(iter::once(starter)).collect()
}

/// Scores a hand against the starter, category by category.
#[must_use]
pub fn score_hand(hand: &Hand, starter: Card) -> ScoreBreakdown {
    let combined = with_starter(hand.cards(), starter);

    let breakdown = ScoreBreakdown {
        fifteens: fifteens(&combined),
        pairs: pairs(&combined),
        runs: runs(&combined),
        flush: flush(&combined),
        nobs: nobs(hand.cards(), starter),
    };
    log::debug!("scored hand [{hand}] with starter {starter}: {breakdown:?}");

    breakdown
}

/// Scores a crib against the starter.
///
/// Identical to [`score_hand`] except that a flush needs the starter too.
#[must_use]
pub fn score_crib(crib: &Hand, starter: Card) -> ScoreBreakdown {
    let combined = with_starter(crib.cards(), starter);

    let breakdown = ScoreBreakdown {
        fifteens: fifteens(&combined),
        pairs: pairs(&combined),
        runs: runs(&combined),
        flush: crib_flush(crib.cards(), starter),
        nobs: nobs(crib.cards(), starter),
    };
    log::debug!("scored crib [{crib}] with starter {starter}: {breakdown:?}");

    breakdown
}

/// Total points for a hand and starter.
#[must_use]
pub fn total(hand: &Hand, starter: Card) -> u8 {
    score_hand(hand, starter).total()
}
