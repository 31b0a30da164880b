//! Plays seeded rounds until someone wins, laying away the first two cards
//! dealt each time, and prints every show.

use std::time::{SystemTime, UNIX_EPOCH};

use cribrs::{Game, GameOptions, GameState, PlayerShow, ShowResult};

fn print_player(label: &str, show: &PlayerShow) {
    let score = show.score;
    println!(
        "  {label} (player {}): [{}] -> {} (fifteens {}, pairs {}, runs {}, flush {}, nobs {}){}",
        show.player_id,
        show.hand,
        score.total(),
        score.fifteens,
        score.pairs,
        score.runs,
        score.flush,
        score.nobs,
        if show.counted { "" } else { " not counted" },
    );
}

fn print_show(round: u32, result: &ShowResult) {
    println!("Round {round}, starter {}", result.starter);
    if result.his_heels > 0 {
        println!("  his heels: {}", result.his_heels);
    }
    print_player("non-dealer", &result.non_dealer);
    print_player("dealer", &result.dealer);
    println!("  crib -> {}", result.crib.total());
    println!(
        "  scores: player {} = {}, player {} = {}",
        result.non_dealer.player_id,
        result.non_dealer.points,
        result.dealer.player_id,
        result.dealer.points
    );
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    println!("Cribbage with seed {seed}");

    let game = Game::new(GameOptions::default(), seed);
    let players = [game.join(), game.join()];
    if let Err(err) = game.start_round() {
        println!("Round error: {err}");
        return;
    }

    let mut round = 1;
    loop {
        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            return;
        }

        for player_id in players.iter().flatten() {
            let hand = game.get_hand(*player_id).unwrap_or_default();
            let Some(crib_cards) = hand.cards().get(..2) else {
                println!("Discard error: player {player_id} holds fewer than two cards");
                return;
            };
            if let Err(err) = game.discard(*player_id, crib_cards) {
                println!("Discard error: {err}");
                return;
            }
        }

        if let Err(err) = game.cut() {
            println!("Cut error: {err}");
            return;
        }

        if game.state() == GameState::Play {
            if let Err(err) = game.finish_play() {
                println!("Play error: {err}");
                return;
            }

            match game.show() {
                Ok(result) => print_show(round, &result),
                Err(err) => {
                    println!("Show error: {err}");
                    return;
                }
            }
        }

        if let Some(winner) = game.winner() {
            println!("Player {winner} wins after {round} rounds.");
            break;
        }

        if let Err(err) = game.next_round() {
            println!("Round error: {err}");
            return;
        }
        round += 1;
    }
}
