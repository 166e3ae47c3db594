//! Game integration tests.

use threeround::{
    ActionError, CARD_POOL, Card, FinalOutcome, Game, GameOptions, Hand, OutcomeError,
    ParseCardError, Role, RoundOutcome, ScriptedSource, SessionError, SessionProgress, StepError,
    StepEvent, StepKind, Turn,
};

const fn n(value: u8) -> Card {
    Card::number(value).unwrap()
}

/// Deal order is player, dealer, player, dealer; later draws follow.
fn game_from_draws(options: GameOptions, draws: &[Card]) -> Game<ScriptedSource> {
    Game::with_source(options, ScriptedSource::from_draws(draws))
}

fn cards(game: &Game<ScriptedSource>, role: Role) -> Vec<Card> {
    match role {
        Role::Player => game.player_hand().cards().to_vec(),
        Role::Dealer => game.dealer_hand().cards().to_vec(),
    }
}

#[test]
fn card_values_and_labels() {
    assert_eq!(Card::King.value(), 10);
    assert_eq!(Card::Queen.value(), 10);
    assert_eq!(Card::Joker.value(), 10);
    assert_eq!(Card::Ace.value(), 11);
    assert_eq!(n(7).value(), 7);
    assert_eq!(Card::number(1), None);
    assert_eq!(Card::number(10), Some(n(10)));

    assert_eq!("Joker".parse::<Card>(), Ok(Card::Joker));
    assert_eq!(" ace ".parse::<Card>(), Ok(Card::Ace));
    assert_eq!("10".parse::<Card>(), Ok(n(10)));
    assert_eq!("1".parse::<Card>(), Err(ParseCardError::UnknownLabel));
    assert_eq!("Jack".parse::<Card>(), Err(ParseCardError::UnknownLabel));

    for card in CARD_POOL {
        assert_eq!(card.to_string().parse::<Card>(), Ok(card));
    }
}

#[test]
fn hand_score_is_sum_of_card_values() {
    let hand = Hand::with_cards(Role::Player, &[Card::Ace, Card::Ace, n(9)]);
    assert_eq!(hand.score(), 31);
    assert!(hand.is_bust());

    let mut hand = Hand::new(Role::Dealer);
    assert_eq!(hand.score(), 0);
    for card in [Card::King, n(2), n(5)] {
        hand.add_card(card);
        let expected: u8 = hand.cards().iter().map(|c| c.value()).sum();
        assert_eq!(hand.score(), expected);
    }
    assert_eq!(hand.score(), 17);
    assert!(!hand.is_bust());
}

#[test]
fn round_outcome_precedence() {
    assert_eq!(RoundOutcome::decide(22, 10), RoundOutcome::DealerWin);
    assert_eq!(RoundOutcome::decide(18, 22), RoundOutcome::PlayerWin);
    assert_eq!(RoundOutcome::decide(20, 18), RoundOutcome::PlayerWin);
    assert_eq!(RoundOutcome::decide(17, 19), RoundOutcome::DealerWin);
    assert_eq!(RoundOutcome::decide(20, 20), RoundOutcome::Push);
    // Both bust: the player's bust is checked first.
    assert_eq!(RoundOutcome::decide(25, 23), RoundOutcome::DealerWin);
    assert_eq!(RoundOutcome::decide(0, 0), RoundOutcome::Push);

    assert_eq!(FinalOutcome::decide(2, 1), FinalOutcome::PlayerOverall);
    assert_eq!(FinalOutcome::decide(0, 1), FinalOutcome::DealerOverall);
    assert_eq!(FinalOutcome::decide(1, 1), FinalOutcome::Tie);
}

#[test]
fn opening_deal() {
    let game = game_from_draws(GameOptions::default(), &[Card::King, n(9), n(5), n(9)]);

    assert_eq!(game.round_index(), 1);
    assert_eq!(game.turn(), Turn::PlayerTurn);
    assert_eq!(cards(&game, Role::Player), vec![Card::King, n(5)]);
    assert_eq!(cards(&game, Role::Dealer), vec![n(9), n(9)]);
    assert_eq!(game.player_hand().score(), 15);
    assert_eq!(game.dealer_hand().score(), 18);
    assert_eq!(game.last_card(), None);
}

#[test]
fn stand_stand_dealer_wins_and_session_advances() {
    let game = game_from_draws(GameOptions::default(), &[Card::King, n(9), n(5), n(9)]);

    game.stand(Role::Player).unwrap();
    assert_eq!(game.turn(), Turn::DealerTurn);
    assert_eq!(
        game.resolve_outcome().unwrap_err(),
        OutcomeError::NotResolved
    );

    game.stand(Role::Dealer).unwrap();
    assert_eq!(game.turn(), Turn::Resolved);

    let outcome = game.resolve_outcome().unwrap();
    assert_eq!(outcome, RoundOutcome::DealerWin);

    let progress = game.record_round_outcome(outcome).unwrap();
    assert_eq!(progress, SessionProgress::NextRound(2));
    assert_eq!(game.dealer_wins(), 1);
    assert_eq!(game.player_wins(), 0);
    assert_eq!(game.round_index(), 2);
    assert_eq!(game.turn(), Turn::PlayerTurn);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn player_reaching_exactly_21_passes_turn_to_dealer() {
    let game = game_from_draws(
        GameOptions::default(),
        &[n(10), n(5), n(6), n(7), n(5)],
    );
    assert_eq!(game.player_hand().score(), 16);

    let card = game.hit(Role::Player).unwrap();
    assert_eq!(card, n(5));
    assert_eq!(game.player_hand().score(), 21);
    assert_eq!(game.turn(), Turn::DealerTurn);
    assert_eq!(game.last_card(), Some(n(5)));
}

#[test]
fn player_bust_still_waits_for_dealer() {
    let game = game_from_draws(
        GameOptions::default(),
        &[n(10), n(10), n(9), n(6), Card::King, n(10)],
    );

    game.hit(Role::Player).unwrap();
    assert_eq!(game.player_hand().score(), 29);
    assert_eq!(game.turn(), Turn::DealerTurn);

    game.hit(Role::Dealer).unwrap();
    assert_eq!(game.dealer_hand().score(), 26);
    assert_eq!(game.turn(), Turn::Resolved);
    assert_eq!(game.resolve_outcome(), Ok(RoundOutcome::DealerWin));
}

#[test]
fn dealer_hit_reaching_threshold_resolves() {
    let game = game_from_draws(
        GameOptions::default(),
        &[n(10), n(10), n(8), n(5), n(2)],
    );

    game.stand(Role::Player).unwrap();
    assert_eq!(game.dealer_hand().score(), 15);

    game.hit(Role::Dealer).unwrap();
    assert_eq!(game.dealer_hand().score(), 17);
    assert_eq!(game.turn(), Turn::Resolved);
    assert_eq!(game.resolve_outcome(), Ok(RoundOutcome::PlayerWin));
}

#[test]
fn dealer_below_threshold_keeps_turn() {
    let game = game_from_draws(
        GameOptions::default(),
        &[n(10), n(2), n(8), n(3), n(4)],
    );

    game.stand(Role::Player).unwrap();
    game.hit(Role::Dealer).unwrap();
    assert_eq!(game.dealer_hand().score(), 9);
    assert_eq!(game.turn(), Turn::DealerTurn);
}

#[test]
fn out_of_turn_actions_change_nothing() {
    let game = game_from_draws(GameOptions::default(), &[n(10), n(10), n(8), n(9)]);
    let before = game.snapshot();
    let revision = game.revision();

    assert_eq!(game.hit(Role::Dealer).unwrap_err(), ActionError::NotYourTurn);
    assert_eq!(game.stand(Role::Dealer).unwrap_err(), ActionError::NotYourTurn);
    assert!(!game.can_hit(Role::Dealer));
    assert!(game.can_hit(Role::Player));
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.revision(), revision);

    game.stand(Role::Player).unwrap();
    assert_eq!(game.hit(Role::Player).unwrap_err(), ActionError::NotYourTurn);
    assert_eq!(game.stand(Role::Player).unwrap_err(), ActionError::NotYourTurn);

    game.stand(Role::Dealer).unwrap();
    let resolved = game.snapshot();
    assert_eq!(game.hit(Role::Player).unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand(Role::Dealer).unwrap_err(), ActionError::InvalidState);
    assert!(!game.can_stand(Role::Dealer));
    assert_eq!(game.snapshot(), resolved);
}

#[test]
fn manual_dealer_hit_refused_during_autoplay() {
    let options = GameOptions::default().with_auto_play(true);
    let game = game_from_draws(options, &[n(10), n(2), n(9), n(3), n(4), n(10)]);

    game.stand(Role::Player).unwrap();
    assert_eq!(
        game.hit(Role::Dealer).unwrap_err(),
        ActionError::AutoPlayActive
    );
    assert_eq!(game.dealer_hand().len(), 2);
    assert!(!game.can_hit(Role::Dealer));
    assert!(game.can_stand(Role::Dealer));
}

#[test]
fn autoplay_steps_dealer_to_threshold() {
    let options = GameOptions::default().with_auto_play(true);
    let game = game_from_draws(options, &[n(10), n(2), n(9), n(3), n(4), n(10)]);

    assert_eq!(game.pending_step(), None);
    game.stand(Role::Player).unwrap();
    assert_eq!(game.pending_step().map(|p| p.kind), Some(StepKind::DealerDraw));

    assert_eq!(
        game.step(),
        Some(StepEvent::DealerDrew {
            card: n(4),
            score: 9
        })
    );
    assert_eq!(game.turn(), Turn::DealerTurn);

    assert_eq!(
        game.step(),
        Some(StepEvent::DealerDrew {
            card: n(10),
            score: 19
        })
    );
    assert_eq!(game.turn(), Turn::Resolved);
    assert_eq!(game.resolve_outcome(), Ok(RoundOutcome::Push));

    let Some(StepEvent::RoundRecorded { result, progress }) = game.step() else {
        panic!("expected the round to be recorded");
    };
    assert_eq!(result.outcome, RoundOutcome::Push);
    assert_eq!(result.player_score, 19);
    assert_eq!(result.dealer_score, 19);
    assert_eq!(progress, SessionProgress::NextRound(2));
    assert_eq!(game.player_wins(), 0);
    assert_eq!(game.dealer_wins(), 0);
}

#[test]
fn autoplay_stands_when_dealt_at_threshold() {
    let options = GameOptions::default().with_auto_play(true);
    let game = game_from_draws(options, &[n(10), n(10), n(9), n(8)]);

    game.stand(Role::Player).unwrap();
    assert_eq!(game.step(), Some(StepEvent::DealerStood { score: 18 }));
    assert_eq!(game.turn(), Turn::Resolved);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.resolve_outcome(), Ok(RoundOutcome::PlayerWin));
}

#[test]
fn without_autoplay_dealer_waits_for_input() {
    let game = game_from_draws(GameOptions::default(), &[n(10), n(2), n(9), n(3)]);

    game.stand(Role::Player).unwrap();
    assert_eq!(game.pending_step(), None);
    assert_eq!(game.step(), None);
    assert_eq!(game.turn(), Turn::DealerTurn);
}

#[test]
fn dealt_21_stops_player_on_next_step() {
    let game = game_from_draws(GameOptions::default(), &[Card::Ace, n(5), Card::King, n(6)]);

    assert_eq!(game.turn(), Turn::PlayerTurn);
    assert_eq!(
        game.pending_step().map(|p| p.kind),
        Some(StepKind::EndPlayerTurn)
    );
    assert_eq!(game.step(), Some(StepEvent::PlayerStopped { score: 21 }));
    assert_eq!(game.turn(), Turn::DealerTurn);
}

#[test]
fn stale_step_is_not_applied() {
    let options = GameOptions::default().with_auto_play(true);
    let game = game_from_draws(options, &[n(10), n(2), n(9), n(3), n(4), n(10)]);

    game.stand(Role::Player).unwrap();
    let pending = game.pending_step().unwrap();
    assert_eq!(pending.kind, StepKind::DealerDraw);

    game.set_auto_play(false);
    assert_eq!(game.apply_step(pending), Err(StepError::Stale));
    assert_eq!(game.dealer_hand().len(), 2);

    game.stand(Role::Dealer).unwrap();
    let pending = game.pending_step().unwrap();
    assert_eq!(pending.kind, StepKind::RecordOutcome);

    game.reset();
    assert_eq!(game.apply_step(pending), Err(StepError::Stale));
    assert_eq!(game.player_wins(), 0);
    assert_eq!(game.round_index(), 1);
}

#[test]
fn full_session_player_overall() {
    // Player 20, dealer 17 every round.
    let game = game_from_draws(GameOptions::default(), &[n(10), n(10), n(10), n(7)]);

    for round in 1..=3 {
        assert_eq!(game.round_index(), round);
        assert_eq!(game.final_outcome(), Err(SessionError::NotFinished));

        game.stand(Role::Player).unwrap();
        game.stand(Role::Dealer).unwrap();
        let outcome = game.resolve_outcome().unwrap();
        assert_eq!(outcome, RoundOutcome::PlayerWin);

        let progress = game.record_round_outcome(outcome).unwrap();
        if round < 3 {
            assert_eq!(progress, SessionProgress::NextRound(round + 1));
        } else {
            let SessionProgress::Finished(result) = progress else {
                panic!("expected the session to finish");
            };
            assert_eq!(result.player_wins, 3);
            assert_eq!(result.dealer_wins, 0);
            assert_eq!(result.outcome, FinalOutcome::PlayerOverall);
            assert_eq!(result.rounds.len(), 3);
        }
    }

    assert!(game.is_finished());
    assert_eq!(game.round_index(), 3);
    assert_eq!(game.final_outcome(), Ok(FinalOutcome::PlayerOverall));
    assert_eq!(game.pending_step(), None);

    assert_eq!(
        game.record_round_outcome(RoundOutcome::PlayerWin),
        Err(SessionError::Finished)
    );
    assert_eq!(game.hit(Role::Player).unwrap_err(), ActionError::InvalidState);

    let revision = game.revision();
    game.start_round();
    assert_eq!(game.revision(), revision);
    assert_eq!(game.turn(), Turn::Resolved);
}

#[test]
fn pushes_count_for_neither_side() {
    let game = game_from_draws(GameOptions::default(), &[n(10), n(10), n(10), n(7)]);

    for outcome in [
        RoundOutcome::PlayerWin,
        RoundOutcome::DealerWin,
        RoundOutcome::Push,
    ] {
        game.stand(Role::Player).unwrap();
        game.stand(Role::Dealer).unwrap();
        game.record_round_outcome(outcome).unwrap();
    }

    assert_eq!(game.player_wins(), 1);
    assert_eq!(game.dealer_wins(), 1);
    assert_eq!(game.final_outcome(), Ok(FinalOutcome::Tie));

    let history = game.history();
    let outcomes: Vec<_> = history.iter().map(|r| r.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            RoundOutcome::PlayerWin,
            RoundOutcome::DealerWin,
            RoundOutcome::Push
        ]
    );
    assert_eq!(
        history.iter().map(|r| r.round).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn record_requires_resolved_round() {
    let game = game_from_draws(GameOptions::default(), &[n(10), n(10), n(8), n(9)]);

    assert_eq!(
        game.record_round_outcome(RoundOutcome::PlayerWin),
        Err(SessionError::RoundNotResolved)
    );
    assert_eq!(game.player_wins(), 0);
    assert_eq!(game.round_index(), 1);
}

#[test]
fn reset_starts_a_fresh_session() {
    let game = game_from_draws(GameOptions::default(), &[n(10), n(10), n(10), n(7)]);

    for _ in 0..3 {
        game.stand(Role::Player).unwrap();
        game.stand(Role::Dealer).unwrap();
        game.step();
    }
    assert!(game.is_finished());
    assert_eq!(game.player_wins(), 3);

    game.reset();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.round, 1);
    assert_eq!(snapshot.rounds, 3);
    assert_eq!(snapshot.player_wins, 0);
    assert_eq!(snapshot.dealer_wins, 0);
    assert!(!snapshot.finished);
    assert_eq!(snapshot.turn, Turn::PlayerTurn);
    assert_eq!(snapshot.outcome, None);
    assert_eq!(snapshot.player.len(), 2);
    assert_eq!(snapshot.dealer.len(), 2);
    assert_eq!(snapshot.player_score, snapshot.player.score());
    assert_eq!(snapshot.dealer_score, snapshot.dealer.score());
    assert!(game.history().is_empty());
}

#[test]
fn start_round_redeals_current_round() {
    let game = game_from_draws(GameOptions::default(), &[n(2), n(3), n(4), n(5), n(6)]);

    game.hit(Role::Player).unwrap();
    assert_eq!(game.player_hand().len(), 3);

    game.start_round();
    assert_eq!(game.round_index(), 1);
    assert_eq!(game.turn(), Turn::PlayerTurn);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.last_card(), None);
    // Script continues cyclically: 2, 3, 4, 5, 6 | 2, 3, 4, 5
    assert_eq!(cards(&game, Role::Player), vec![n(2), n(4)]);
    assert_eq!(cards(&game, Role::Dealer), vec![n(3), n(5)]);
}

#[test]
fn dealer_play_draws_to_threshold() {
    let game = game_from_draws(
        GameOptions::default(),
        &[n(10), n(2), n(8), n(3), n(4), n(5), n(9)],
    );

    assert_eq!(game.dealer_play().unwrap_err(), ActionError::NotYourTurn);

    game.stand(Role::Player).unwrap();
    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, vec![n(4), n(5), n(9)]);
    assert_eq!(game.dealer_hand().score(), 23);
    assert_eq!(game.turn(), Turn::Resolved);
    assert_eq!(game.resolve_outcome(), Ok(RoundOutcome::PlayerWin));

    assert_eq!(game.dealer_play().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn numbered_cards_outside_two_to_ten_do_not_exist() {
    for value in [0, 1, 11, u8::MAX] {
        assert_eq!(Card::number(value), None);
    }
    for value in 2..=10 {
        assert_eq!(Card::number(value).map(Card::value), Some(value));
    }
    assert!(CARD_POOL.iter().all(|card| card.value() >= 2));
}

#[test]
fn dealer_play_terminates_on_lowest_cards() {
    let mut source = ScriptedSource::from_draws(&[n(2)]);
    {
        let game = Game::with_source(GameOptions::default(), &mut source);
        assert_eq!(game.player_hand().role(), Role::Player);
        assert_eq!(game.dealer_hand().role(), Role::Dealer);

        game.stand(Role::Player).unwrap();
        let drawn = game.dealer_play().unwrap();
        assert_eq!(drawn, vec![n(2); 7]);
        assert_eq!(game.dealer_hand().score(), 18);
        assert_eq!(game.turn(), Turn::Resolved);
        assert_eq!(game.resolve_outcome(), Ok(RoundOutcome::DealerWin));
    }
    // Four dealt cards plus seven dealer draws.
    assert_eq!(source.drawn(), 11);
}

#[test]
fn custom_round_count_and_threshold() {
    let options = GameOptions::default()
        .with_rounds(1)
        .with_dealer_stands_on(12);
    let game = game_from_draws(options, &[n(10), n(5), n(9), n(4), n(3)]);

    game.stand(Role::Player).unwrap();
    game.hit(Role::Dealer).unwrap();
    assert_eq!(game.dealer_hand().score(), 12);
    assert_eq!(game.turn(), Turn::Resolved);

    let outcome = game.resolve_outcome().unwrap();
    let progress = game.record_round_outcome(outcome).unwrap();
    assert!(matches!(progress, SessionProgress::Finished(_)));
    assert_eq!(game.final_outcome(), Ok(FinalOutcome::PlayerOverall));
}

#[test]
fn random_source_is_deterministic_per_seed() {
    let a = Game::new(GameOptions::default(), 7);
    let b = Game::new(GameOptions::default(), 7);

    assert_eq!(a.player_hand(), b.player_hand());
    assert_eq!(a.dealer_hand(), b.dealer_hand());

    for hand in [a.player_hand(), a.dealer_hand()] {
        assert_eq!(hand.len(), 2);
        assert!(hand.cards().iter().all(|card| CARD_POOL.contains(card)));
        let expected: u8 = hand.cards().iter().map(|c| c.value()).sum();
        assert_eq!(hand.score(), expected);
    }
}
