//! Game integration tests.

use pairgames::{
    Actor, Card, Deck, Game, GameEvent, GameOptions, GameState, Hand, PairRecord, Prompt,
    RequestError, Seat, Seats, Suit, Timing, Variant, Winner, find_pairs,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn instant() -> GameOptions {
    GameOptions::default().with_timing(Timing::instant())
}

/// A Go Fish game whose opening deal has finished.
fn go_fish(seed: u64) -> Game {
    let game = Game::new(Variant::GoFish, instant(), seed);
    game.run_until_idle();
    game
}

fn seat(cards: &[Card], pairs: usize) -> Seat {
    let pair = PairRecord::new(card(Suit::Hearts, 2), card(Suit::Spades, 2));
    Seat {
        hand: Hand::from_cards(cards),
        pairs: vec![pair; pairs],
    }
}

fn rig(game: &Game, player: &[Card], computer: &[Card], draws: &[Card]) {
    *game.seats.lock() = Seats {
        player: seat(player, 0),
        computer: seat(computer, 0),
    };
    *game.deck.lock() = Deck::from_draws(draws);
    game.drain_events();
}

fn pair_count_total(game: &Game) -> usize {
    game.pair_count(Actor::Player) + game.pair_count(Actor::Computer)
}

#[test]
fn go_fish_opening_deal() {
    let game = Game::new(Variant::GoFish, instant(), 11);
    assert_eq!(game.state(), GameState::Dealing);
    assert!(game.is_busy());
    assert_eq!(
        game.request_ask(1).unwrap_err(),
        RequestError::TransitionInFlight
    );

    game.run_until_idle();

    let held = game.hand(Actor::Player).len() + game.hand(Actor::Computer).len();
    assert_eq!(held + 2 * pair_count_total(&game), 14);
    assert_eq!(game.cards_remaining(), 52 - 14);
    assert!(find_pairs(game.hand(Actor::Player).cards()).is_empty());
    assert!(find_pairs(game.hand(Actor::Computer).cards()).is_empty());
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.current_turn(), Actor::Player);
    assert_eq!(game.pending_prompt(), Some(Prompt::ChooseRank));

    let dealt: Vec<Actor> = game
        .drain_events()
        .into_iter()
        .filter_map(|event| match event {
            GameEvent::CardDealt { to, .. } => Some(to),
            _ => None,
        })
        .collect();
    assert_eq!(dealt.len(), 14);
    assert_eq!(dealt[0], Actor::Player);
    assert_eq!(dealt[1], Actor::Computer);
}

#[test]
fn go_fish_hand_size_is_configurable() {
    let game = Game::new(Variant::GoFish, instant().with_hand_size(5), 2);
    game.run_until_idle();
    assert_eq!(game.cards_remaining(), 52 - 10);
}

#[test]
fn ask_for_missing_rank_waits_for_draw() {
    let game = go_fish(1);
    rig(
        &game,
        &[card(Suit::Spades, 5)],
        &[card(Suit::Clubs, 13)],
        &[card(Suit::Hearts, 2)],
    );

    game.request_ask(5).unwrap();

    assert_eq!(game.state(), GameState::AwaitingDraw);
    assert_eq!(game.pending_prompt(), Some(Prompt::GoFish { rank: 5 }));
    assert_eq!(game.hand(Actor::Computer).cards(), &[card(Suit::Clubs, 13)]);
    assert!(!game.is_busy());
}

#[test]
fn ask_for_held_rank_transfers_every_match() {
    let game = go_fish(1);
    rig(
        &game,
        &[card(Suit::Spades, 5), card(Suit::Diamonds, 9)],
        &[
            card(Suit::Hearts, 5),
            card(Suit::Diamonds, 13),
            card(Suit::Clubs, 5),
        ],
        &[card(Suit::Hearts, 2)],
    );

    game.request_ask(5).unwrap();

    assert_eq!(game.hand(Actor::Computer).cards(), &[card(Suit::Diamonds, 13)]);
    assert_eq!(game.hand(Actor::Player).count_rank(5), 3);

    let events = game.drain_events();
    assert!(events.contains(&GameEvent::CardsTransferred {
        from: Actor::Computer,
        to: Actor::Player,
        cards: vec![card(Suit::Hearts, 5), card(Suit::Clubs, 5)],
    }));

    game.run_until_idle();

    assert_eq!(game.pair_count(Actor::Player), 1);
    assert_eq!(
        game.hand(Actor::Player).cards(),
        &[card(Suit::Diamonds, 9), card(Suit::Clubs, 5)]
    );
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.pending_prompt(), Some(Prompt::ChooseRank));
}

#[test]
fn ask_for_rank_not_held_is_rejected() {
    let game = go_fish(1);
    rig(
        &game,
        &[card(Suit::Spades, 5)],
        &[card(Suit::Clubs, 13)],
        &[card(Suit::Hearts, 2)],
    );

    assert_eq!(game.request_ask(13).unwrap_err(), RequestError::RankNotHeld);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.hand(Actor::Computer).len(), 1);
    assert!(game.drain_events().is_empty());
}

#[test]
fn requests_out_of_state_are_rejected() {
    let game = go_fish(1);
    assert_eq!(game.request_draw().unwrap_err(), RequestError::InvalidState);
    assert_eq!(
        game.request_respond(false).unwrap_err(),
        RequestError::InvalidState
    );
    assert_eq!(game.request_pick(0).unwrap_err(), RequestError::WrongVariant);
}

#[test]
fn drawing_always_ends_the_turn() {
    let game = go_fish(1);
    rig(
        &game,
        &[card(Suit::Spades, 5)],
        &[card(Suit::Clubs, 13)],
        &[card(Suit::Hearts, 5), card(Suit::Hearts, 8)],
    );

    game.request_ask(5).unwrap();
    game.request_draw().unwrap();
    assert_eq!(
        game.request_draw().unwrap_err(),
        RequestError::TransitionInFlight
    );

    game.run_until_idle();

    // The drawn five pairs up, but the computer still takes its turn.
    assert_eq!(game.pair_count(Actor::Player), 1);
    assert_eq!(game.current_turn(), Actor::Computer);
    assert_eq!(game.state(), GameState::AwaitingResponse);
    assert_eq!(game.pending_prompt(), Some(Prompt::RespondToAsk { rank: 13 }));
}

#[test]
fn computer_turn_requires_truthful_answers() {
    let game = go_fish(1);
    rig(
        &game,
        &[card(Suit::Spades, 7), card(Suit::Clubs, 2)],
        &[card(Suit::Hearts, 7)],
        &[
            card(Suit::Diamonds, 3),
            card(Suit::Diamonds, 4),
            card(Suit::Spades, 9),
        ],
    );

    game.request_ask(2).unwrap();
    game.request_draw().unwrap();
    game.run_until_idle();

    assert_eq!(game.pending_prompt(), Some(Prompt::RespondToAsk { rank: 7 }));
    assert_eq!(
        game.request_respond(false).unwrap_err(),
        RequestError::FalseDenial
    );
    assert_eq!(game.state(), GameState::AwaitingResponse);

    game.request_respond(true).unwrap();
    game.run_until_idle();

    // The computer paired its sevens, emptied its hand, drew the four and
    // asked for it.
    assert_eq!(game.pair_count(Actor::Computer), 1);
    assert_eq!(game.hand(Actor::Computer).cards(), &[card(Suit::Diamonds, 4)]);
    assert_eq!(game.pending_prompt(), Some(Prompt::RespondToAsk { rank: 4 }));
    assert_eq!(
        game.request_respond(true).unwrap_err(),
        RequestError::FalseClaim
    );

    game.request_respond(false).unwrap();
    game.run_until_idle();

    assert_eq!(game.hand(Actor::Computer).len(), 2);
    assert!(game.hand(Actor::Computer).has_rank(9));
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.current_turn(), Actor::Player);
}

#[test]
fn go_fish_game_over_by_pair_count() {
    let game = go_fish(1);
    *game.deck.lock() = Deck::empty();
    *game.seats.lock() = Seats {
        player: seat(&[], 3),
        computer: seat(&[], 2),
    };

    assert!(game.check_game_over());
    assert!(game.is_game_over());

    let result = game.result().unwrap();
    assert_eq!(result.winner, Winner::Player);
    assert_eq!(result.player_pairs, 3);
    assert_eq!(result.computer_pairs, 2);
    assert_eq!(result.old_maid_holder, None);
    assert!(game.drain_events().contains(&GameEvent::GameOver(result)));
    assert_eq!(game.request_ask(2).unwrap_err(), RequestError::GameOver);
}

#[test]
fn go_fish_equal_pairs_is_a_tie() {
    let game = go_fish(1);
    *game.deck.lock() = Deck::empty();
    *game.seats.lock() = Seats {
        player: seat(&[], 2),
        computer: seat(&[], 2),
    };

    assert!(game.check_game_over());
    assert_eq!(game.result().unwrap().winner, Winner::Tie);
}

#[test]
fn go_fish_not_over_while_cards_remain() {
    let game = go_fish(1);
    *game.deck.lock() = Deck::empty();
    *game.seats.lock() = Seats {
        player: seat(&[], 3),
        computer: seat(&[card(Suit::Clubs, 4)], 2),
    };
    assert!(!game.check_game_over());

    *game.seats.lock() = Seats::default();
    *game.deck.lock() = Deck::from_draws(&[card(Suit::Clubs, 4)]);
    assert!(!game.check_game_over());
    assert_eq!(game.result(), None);
}

#[test]
fn last_pair_ends_go_fish() {
    let game = go_fish(1);
    rig(&game, &[card(Suit::Spades, 5)], &[card(Suit::Hearts, 5)], &[]);

    game.request_ask(5).unwrap();
    game.run_until_idle();

    assert!(game.is_game_over());
    let result = game.result().unwrap();
    assert_eq!(result.winner, Winner::Player);
    assert_eq!(result.player_pairs, 1);
}

#[test]
fn scheduled_steps_wait_for_the_clock() {
    let game = Game::new(Variant::GoFish, GameOptions::default(), 5);
    game.run_until_idle();
    rig(
        &game,
        &[card(Suit::Spades, 5), card(Suit::Diamonds, 9)],
        &[card(Suit::Hearts, 5)],
        &[card(Suit::Hearts, 2)],
    );

    let transfer = game.options.timing.transfer;
    game.request_ask(5).unwrap();
    assert_eq!(game.next_due_in(), Some(transfer));

    assert_eq!(game.advance(transfer - 1), 0);
    assert!(game.is_busy());
    assert_eq!(game.pair_count(Actor::Player), 0);

    assert_eq!(game.advance(1), 1);
    assert!(!game.is_busy());
    assert_eq!(game.pair_count(Actor::Player), 1);
    assert_eq!(game.pending_prompt(), Some(Prompt::ChooseRank));
}

#[test]
fn empty_hand_draws_automatically() {
    let game = go_fish(1);
    rig(
        &game,
        &[card(Suit::Spades, 5)],
        &[card(Suit::Hearts, 5), card(Suit::Clubs, 8)],
        &[card(Suit::Hearts, 12)],
    );

    game.request_ask(5).unwrap();
    game.run_until_idle();

    assert_eq!(game.hand(Actor::Player).cards(), &[card(Suit::Hearts, 12)]);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.pending_prompt(), Some(Prompt::ChooseRank));
}

#[test]
fn new_game_resets_everything() {
    let game = go_fish(9);
    rig(&game, &[card(Suit::Spades, 5)], &[card(Suit::Hearts, 5)], &[]);
    game.request_ask(5).unwrap();
    game.run_until_idle();
    assert!(game.is_game_over());

    game.new_game();
    assert_eq!(game.state(), GameState::Dealing);
    assert_eq!(game.result(), None);
    assert_eq!(pair_count_total(&game), 0);
    assert_eq!(game.cards_remaining(), 52);

    game.run_until_idle();
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn every_mutation_emits_a_snapshot() {
    let game = go_fish(4);
    rig(
        &game,
        &[card(Suit::Spades, 5)],
        &[card(Suit::Clubs, 13)],
        &[card(Suit::Hearts, 2)],
    );

    game.request_ask(5).unwrap();
    let events = game.drain_events();
    assert_eq!(events[0], GameEvent::Prompt(Prompt::GoFish { rank: 5 }));
    let GameEvent::StateChanged(snapshot) = &events[1] else {
        panic!("expected a snapshot, got {:?}", events[1]);
    };
    assert_eq!(snapshot.state, GameState::AwaitingDraw);
    assert_eq!(snapshot.deck_remaining, 1);
    assert_eq!(snapshot.player_hand, vec![card(Suit::Spades, 5)]);
    assert!(!snapshot.busy);
}

fn play_go_fish(seed: u64) -> Game {
    let game = go_fish(seed);
    for _ in 0..2_000 {
        game.run_until_idle();
        match game.pending_prompt() {
            Some(Prompt::ChooseRank) => {
                let rank = game.hand(Actor::Player).cards()[0].rank;
                game.request_ask(rank).unwrap();
            }
            Some(Prompt::GoFish { .. }) => game.request_draw().unwrap(),
            Some(Prompt::RespondToAsk { rank }) => {
                let holds = game.hand(Actor::Player).has_rank(rank);
                game.request_respond(holds).unwrap();
            }
            Some(Prompt::PickOpponentCard { .. }) => unreachable!(),
            None => break,
        }
    }
    game
}

#[test]
fn go_fish_plays_to_completion() {
    for seed in 0..20 {
        let game = play_go_fish(seed);
        assert!(game.is_game_over(), "seed {seed} did not finish");
        let result = game.result().unwrap();
        assert_eq!(result.player_pairs + result.computer_pairs, 26);
        let expected = match result.player_pairs.cmp(&result.computer_pairs) {
            std::cmp::Ordering::Greater => Winner::Player,
            std::cmp::Ordering::Less => Winner::Computer,
            std::cmp::Ordering::Equal => Winner::Tie,
        };
        assert_eq!(result.winner, expected);
    }
}

#[test]
fn old_maid_deal_uses_whole_deck() {
    let game = Game::new(Variant::OldMaid, instant(), 21);

    let events = game.drain_events();
    let to_player = events
        .iter()
        .filter(|e| matches!(e, GameEvent::CardDealt { to: Actor::Player, .. }))
        .count();
    let to_computer = events
        .iter()
        .filter(|e| matches!(e, GameEvent::CardDealt { to: Actor::Computer, .. }))
        .count();
    assert_eq!((to_player, to_computer), (27, 26));

    let player = game.hand(Actor::Player);
    let computer = game.hand(Actor::Computer);
    assert_eq!(
        player.len() + computer.len() + 2 * pair_count_total(&game),
        53
    );
    assert_eq!(game.cards_remaining(), 0);
    assert!(find_pairs(player.cards()).is_empty());
    assert!(find_pairs(computer.cards()).is_empty());

    let old_maids = player
        .cards()
        .iter()
        .chain(computer.cards())
        .filter(|c| c.is_old_maid())
        .count();
    assert_eq!(old_maids, 1);

    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(
        game.pending_prompt(),
        Some(Prompt::PickOpponentCard {
            count: computer.len()
        })
    );
}

#[test]
fn old_maid_pick_and_answer() {
    let game = Game::new(Variant::OldMaid, instant(), 3);
    rig(
        &game,
        &[card(Suit::Spades, 3), Card::OLD_MAID],
        &[card(Suit::Hearts, 3), card(Suit::Clubs, 8)],
        &[],
    );

    assert_eq!(game.request_pick(5).unwrap_err(), RequestError::NoSuchCard);
    assert_eq!(game.request_ask(3).unwrap_err(), RequestError::WrongVariant);

    game.request_pick(0).unwrap();
    assert_eq!(
        game.request_pick(0).unwrap_err(),
        RequestError::TransitionInFlight
    );
    game.run_until_idle();

    // The player paired the threes; the computer then took the Old Maid.
    assert_eq!(game.pair_count(Actor::Player), 1);
    assert!(game.hand(Actor::Player).is_empty());
    assert!(!game.is_game_over());
    assert_eq!(game.hand(Actor::Computer).len(), 2);
    assert!(game.hand(Actor::Computer).cards().contains(&Card::OLD_MAID));
    assert_eq!(
        game.pending_prompt(),
        Some(Prompt::PickOpponentCard { count: 2 })
    );
}

#[test]
fn old_maid_holder_loses() {
    let game = Game::new(Variant::OldMaid, instant(), 3);
    *game.seats.lock() = Seats {
        player: seat(&[Card::OLD_MAID], 0),
        computer: seat(&[], 0),
    };

    assert!(game.check_game_over());
    let result = game.result().unwrap();
    assert_eq!(result.winner, Winner::Computer);
    assert_eq!(result.old_maid_holder, Some(Actor::Player));
}

#[test]
fn old_maid_not_over_with_two_cards() {
    let game = Game::new(Variant::OldMaid, instant(), 3);
    *game.seats.lock() = Seats {
        player: seat(&[Card::OLD_MAID], 0),
        computer: seat(&[card(Suit::Hearts, 4)], 0),
    };
    assert!(!game.check_game_over());
}

#[test]
fn computer_pick_waits_for_transfer() {
    let game = Game::new(Variant::OldMaid, GameOptions::default(), 8);
    rig(
        &game,
        &[card(Suit::Spades, 6), card(Suit::Spades, 10)],
        &[
            card(Suit::Hearts, 1),
            card(Suit::Hearts, 2),
            card(Suit::Hearts, 6),
            Card::OLD_MAID,
        ],
        &[],
    );

    game.request_pick(1).unwrap();
    let think = game.options.timing.transfer + game.options.timing.computer_think;
    game.advance(think);

    // The computer has picked but the transfer has not finished yet.
    assert_eq!(game.hand(Actor::Player).len(), 2);
    assert_eq!(game.hand(Actor::Computer).len(), 4);
    assert_eq!(game.state(), GameState::ComputerTurn);

    game.run_until_idle();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.current_turn(), Actor::Player);
}

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by_key(|c| (c.rank, c.suit as u8));
    cards
}

#[test]
fn computer_reshuffles_after_picking() {
    let player = [card(Suit::Spades, 5), card(Suit::Spades, 9)];
    let computer = [
        card(Suit::Hearts, 1),
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 7),
        card(Suit::Hearts, 8),
        card(Suit::Hearts, 12),
    ];

    let mut picked_last = 0;
    for seed in 0..10 {
        let game = Game::new(Variant::OldMaid, GameOptions::default(), seed);
        rig(&game, &player, &computer, &[]);

        // The player takes the ace, leaving six unpaired cards behind.
        game.request_pick(0).unwrap();
        let before = game.hand(Actor::Computer).cards().to_vec();
        assert_eq!(before.len(), 6);

        let timing = game.options.timing;
        game.advance(timing.transfer + timing.computer_think);

        let after = game.hand(Actor::Computer).cards().to_vec();
        assert_eq!(after.len(), 7);
        let held = game.hand(Actor::Player);
        let taken = *[player[0], player[1], card(Suit::Hearts, 1)]
            .iter()
            .find(|c| !held.cards().contains(c))
            .unwrap();

        let mut expected = before.clone();
        expected.push(taken);
        assert_eq!(sorted(after.clone()), sorted(expected));

        if after.last() == Some(&taken) {
            picked_last += 1;
        }
    }

    assert!(picked_last < 10, "picked card always sat at the end");
}

#[test]
fn opening_pair_delay_saturates() {
    let timing = Timing {
        pair_collect: u64::MAX,
        ..Timing::instant()
    };
    let options = GameOptions::default()
        .with_hand_size(26)
        .with_timing(timing);
    let game = Game::new(Variant::GoFish, options, 4);
    game.run_until_idle();

    assert!(!game.is_busy());
    assert_eq!(game.cards_remaining(), 0);
    assert!(pair_count_total(&game) > 0);
    assert_ne!(game.state(), GameState::Dealing);
}

#[test]
fn old_maid_plays_to_completion() {
    for seed in 0..20 {
        let game = Game::new(Variant::OldMaid, instant(), seed);
        for _ in 0..200 {
            game.run_until_idle();
            match game.pending_prompt() {
                Some(Prompt::PickOpponentCard { count }) => {
                    game.request_pick(seed as usize % count).unwrap();
                }
                None => break,
                Some(other) => panic!("unexpected prompt {other:?}"),
            }
        }

        assert!(game.is_game_over(), "seed {seed} did not finish");
        let result = game.result().unwrap();
        let holder = result.old_maid_holder.unwrap();
        assert_eq!(result.winner, Winner::from(holder.opponent()));
        assert_eq!(result.player_pairs + result.computer_pairs, 26);
        assert_eq!(game.hand(holder).cards(), &[Card::OLD_MAID]);
    }
}
