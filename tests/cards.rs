//! Card, hand and deck tests.

use std::collections::HashSet;

use cribrs::{
    Card, DECK_SIZE, Deck, DiscardError, EmptyDeckError, Hand, InvalidCardValueError,
    InvalidSuitError, Rank, Suit,
};

#[test]
fn suit_from_id() {
    assert_eq!(Suit::from_id(1), Ok(Suit::Spade));
    assert_eq!(Suit::try_from(3), Ok(Suit::Heart));
    assert_eq!(Suit::Diamond.id(), 4);
    assert_eq!(Suit::from_id(0), Err(InvalidSuitError::Id(0)));
    assert_eq!(Suit::from_id(5), Err(InvalidSuitError::Id(5)));
}

#[test]
fn suit_from_name_ignores_case() {
    assert_eq!("heart".parse::<Suit>(), Ok(Suit::Heart));
    assert_eq!("SPADE".parse::<Suit>(), Ok(Suit::Spade));
    assert_eq!("Club".parse::<Suit>(), Ok(Suit::Club));
    assert_eq!("diamond".parse::<Suit>(), Ok(Suit::Diamond));
}

#[test]
fn suit_from_name_rejects_plurals() {
    assert_eq!("Clubs".parse::<Suit>(), Err(InvalidSuitError::Name));
    assert_eq!("diamonds".parse::<Suit>(), Err(InvalidSuitError::Name));
    assert_eq!("spades".parse::<Suit>(), Err(InvalidSuitError::Name));
    assert_eq!("spadeS".parse::<Suit>(), Err(InvalidSuitError::Name));
    assert_eq!("invalid".parse::<Suit>(), Err(InvalidSuitError::Name));
    assert_eq!("".parse::<Suit>(), Err(InvalidSuitError::Name));
    assert_eq!("s".parse::<Suit>(), Err(InvalidSuitError::Name));
}

#[test]
fn suit_display() {
    assert_eq!(Suit::Club.to_string(), "club");
    assert_eq!(Suit::from_id(2).unwrap().to_string(), "club");
}

#[test]
fn card_rank_validation() {
    let card = Card::try_new(Suit::Heart, 10).unwrap();
    assert_eq!(card.suit, Suit::Heart);
    assert_eq!(card.rank, Rank::Ten);

    assert_eq!(
        Card::try_new(Suit::Heart, 15),
        Err(InvalidCardValueError(15))
    );
    assert_eq!(Card::try_new(Suit::Heart, 0), Err(InvalidCardValueError(0)));
    assert_eq!(Rank::try_from(13), Ok(Rank::King));
}

#[test]
fn cribbage_value_caps_at_ten() {
    assert_eq!(Card::new(Suit::Spade, Rank::Ace).cribbage_value(), 1);
    assert_eq!(Card::new(Suit::Spade, Rank::Nine).cribbage_value(), 9);
    assert_eq!(Card::new(Suit::Spade, Rank::Ten).cribbage_value(), 10);
    assert_eq!(Card::new(Suit::Spade, Rank::Jack).cribbage_value(), 10);
    assert_eq!(Card::new(Suit::Spade, Rank::King).cribbage_value(), 10);
}

#[test]
fn card_equality_and_display() {
    let five = Card::new(Suit::Spade, Rank::Five);
    assert_eq!(five, Card::try_new(Suit::Spade, 5).unwrap());
    assert_ne!(five, Card::new(Suit::Club, Rank::Five));
    assert_eq!(five.to_string(), "5 of spades");
    assert_eq!(Card::new(Suit::Diamond, Rank::Queen).to_string(), "12 of diamonds");
}

#[test]
fn hand_pickup_preserves_order() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());

    let first = Card::new(Suit::Spade, Rank::Five);
    hand.pickup(first);
    assert_eq!(hand.len(), 1);
    assert!(hand.cards().contains(&first));

    hand.pickup_all([
        Card::new(Suit::Club, Rank::Ten),
        Card::new(Suit::Heart, Rank::Two),
    ]);
    assert_eq!(
        hand.cards(),
        &[
            first,
            Card::new(Suit::Club, Rank::Ten),
            Card::new(Suit::Heart, Rank::Two),
        ]
    );
    assert_eq!(
        hand.to_string(),
        "5 of spades, 10 of clubs, 2 of hearts"
    );
    assert!(hand.has_suit(Suit::Spade));
    assert!(!hand.has_suit(Suit::Diamond));
}

#[test]
fn hand_discard() {
    let five = Card::new(Suit::Spade, Rank::Five);
    let ten = Card::new(Suit::Club, Rank::Ten);
    let mut hand: Hand = [five, ten].into_iter().collect();

    assert_eq!(hand.discard(five), Ok(five));
    assert_eq!(hand.cards(), &[ten]);
    assert_eq!(hand.discard(five), Err(DiscardError::CardNotInHand));

    hand.clear();
    assert_eq!(hand.discard(ten), Err(DiscardError::EmptyHand));
}

#[test]
fn fresh_deck_holds_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    let shuffled = Deck::from_seed(7);
    let unique: HashSet<Card> = shuffled.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn seeded_decks_are_reproducible() {
    assert_eq!(Deck::from_seed(42), Deck::from_seed(42));
    assert_ne!(Deck::from_seed(42), Deck::new());
}

#[test]
fn draw_until_empty() {
    let mut deck = Deck::new();
    for _ in 0..DECK_SIZE {
        deck.draw().unwrap();
    }
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(EmptyDeckError));
}

#[test]
fn stacked_deck_draws_in_order() {
    let first = Card::new(Suit::Heart, Rank::Ace);
    let second = Card::new(Suit::Club, Rank::King);
    let mut deck = Deck::stacked([first, second]);

    assert_eq!(deck.draw(), Ok(first));
    assert_eq!(deck.draw(), Ok(second));
    assert_eq!(deck.draw(), Err(EmptyDeckError));
}
