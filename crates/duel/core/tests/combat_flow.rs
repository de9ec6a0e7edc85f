mod common;

use common::*;
use duel_core::{
    ActionOutcome, ActiveEffect, AdvanceOutcome, CombatAction, CombatEngine, CombatState,
    CombatStatus, Difficulty, DuelConfig, DuelEnv, EffectKind, Element, ExecuteError, FixedClock,
    LogAction, PcgRng, Side, advance_turn, initialize_combat,
};

#[test]
fn known_spells_fall_back_to_the_first_five() {
    let config = DuelConfig::default();
    let mut rng = PcgRng::seed_from_u64(11);
    let clock = FixedClock(1_000);
    let mut env = DuelEnv::new(&config, &mut rng, &clock);

    let state = initialize_combat(
        wizard("Ada", mixed_deck()),
        wizard("Bram", mixed_deck()),
        Difficulty::Normal,
        &mut env,
    )
    .unwrap();

    assert_eq!(state.player.hand.len(), 3);
    assert_eq!(state.enemy.hand.len(), 3);
    assert_eq!(state.player.deck_size(), DuelConfig::FALLBACK_DECK_SIZE);
    assert_eq!(state.player.draw_pile.len(), 2);
    assert!(
        state
            .player
            .draw_pile
            .iter()
            .chain(&state.player.hand)
            .all(|spell| spell.id.as_str() != "time_warp")
    );
    assert_eq!(state.log.count(LogAction::FailedDraw), 0);
    assert!(state.log.iter().all(|entry| entry.timestamp == 1_000));
}

#[test]
fn same_seed_replays_the_same_opening() {
    let config = DuelConfig::default();
    let clock = FixedClock(0);

    let mut first_rng = PcgRng::seed_from_u64(5);
    let mut env = DuelEnv::new(&config, &mut first_rng, &clock);
    let first = initialize_combat(
        wizard("Ada", mixed_deck()),
        wizard("Bram", mixed_deck()),
        Difficulty::Hard,
        &mut env,
    )
    .unwrap();

    let mut second_rng = PcgRng::seed_from_u64(5);
    let mut env = DuelEnv::new(&config, &mut second_rng, &clock);
    let second = initialize_combat(
        wizard("Ada", mixed_deck()),
        wizard("Bram", mixed_deck()),
        Difficulty::Hard,
        &mut env,
    )
    .unwrap();

    assert_eq!(first, second);
}

#[test]
fn tiny_deck_opening_costs_health() {
    let config = DuelConfig::default();
    let mut rng = PcgRng::seed_from_u64(11);
    let clock = FixedClock(0);
    let mut env = DuelEnv::new(&config, &mut rng, &clock);

    let state = initialize_combat(
        wizard("Ada", vec![strike("spark", 1, 3), strike("jab", 1, 2)]),
        wizard("Bram", mixed_deck()),
        Difficulty::Normal,
        &mut env,
    )
    .unwrap();

    assert_eq!(state.player.hand.len(), 2);
    assert_eq!(state.player.current_health(), 59);
    assert_eq!(state.log.count(LogAction::FailedDraw), 1);
}

#[test]
fn player_punch_on_normal_deals_six() {
    let config = DuelConfig::default();
    let mut rng = PcgRng::seed_from_u64(0);
    let clock = FixedClock(0);
    let mut env = DuelEnv::new(&config, &mut rng, &clock);
    let mut state = duel_with_hands(Vec::new(), Vec::new());

    CombatEngine::new(&mut state)
        .execute(&mut env, Side::Player, &CombatAction::MysticPunch { spell_tier: 1 })
        .unwrap();

    let punch = state
        .log
        .iter()
        .find(|entry| entry.action == LogAction::MysticPunch)
        .unwrap();
    assert_eq!(punch.damage, Some(-6));
    assert_eq!(punch.target, Some(Side::Enemy));
    assert_eq!(state.enemy.current_health(), 94);
}

#[test]
fn punch_discards_the_selected_spell() {
    let config = DuelConfig::default();
    let mut rng = PcgRng::seed_from_u64(0);
    let clock = FixedClock(0);
    let mut env = DuelEnv::new(&config, &mut rng, &clock);
    let mut state = duel_with_hands(vec![strike("spark", 1, 3)], Vec::new());

    let mut engine = CombatEngine::new(&mut state);
    engine
        .execute(&mut env, Side::Player, &CombatAction::select("spark"))
        .unwrap();
    engine
        .execute(&mut env, Side::Player, &CombatAction::MysticPunch { spell_tier: 2 })
        .unwrap();

    assert!(state.player.hand.is_empty());
    assert_eq!(state.player.discard_pile.len(), 1);
    assert!(state.player.selected_spell.is_none());
}

#[test]
fn overkill_ends_the_duel_with_combat_end_last() {
    let config = DuelConfig::default();
    let mut rng = PcgRng::seed_from_u64(0);
    let clock = FixedClock(0);
    let mut env = DuelEnv::new(&config, &mut rng, &clock);
    let mut state = duel_with_hands(vec![strike("meteor", 0, 150)], Vec::new());

    let mut engine = CombatEngine::new(&mut state);
    engine
        .execute(&mut env, Side::Player, &CombatAction::select("meteor"))
        .unwrap();
    let outcome = engine
        .execute(&mut env, Side::Player, &CombatAction::CastSpell)
        .unwrap();

    assert_eq!(outcome, ActionOutcome::TurnEnded(AdvanceOutcome::Terminal));
    assert_eq!(state.enemy.current_health(), 0);
    assert_eq!(state.status, CombatStatus::PlayerWon);
    assert_eq!(state.winner(), Some(Side::Player));
    assert_eq!(state.log.last().map(|e| e.action), Some(LogAction::CombatEnd));
    assert_eq!(state.log.count(LogAction::CombatEnd), 1);
}

#[test]
fn finished_duel_is_frozen() {
    let config = DuelConfig::default();
    let mut rng = PcgRng::seed_from_u64(0);
    let clock = FixedClock(0);
    let mut env = DuelEnv::new(&config, &mut rng, &clock);
    let mut state = duel_with_hands(vec![strike("meteor", 0, 150), strike("spark", 0, 1)], Vec::new());

    let mut engine = CombatEngine::new(&mut state);
    engine
        .execute(&mut env, Side::Player, &CombatAction::select("meteor"))
        .unwrap();
    engine
        .execute(&mut env, Side::Player, &CombatAction::CastSpell)
        .unwrap();
    let frozen = state.clone();

    let actions = [
        CombatAction::select("spark"),
        CombatAction::CastSpell,
        CombatAction::MysticPunch { spell_tier: 3 },
        CombatAction::SkipTurn,
        CombatAction::discard("spark"),
        CombatAction::AdvanceTurn,
    ];
    for side in [Side::Player, Side::Enemy] {
        for action in &actions {
            let outcome = CombatEngine::new(&mut state)
                .execute(&mut env, side, action)
                .unwrap();
            assert_eq!(outcome, ActionOutcome::Ignored);
        }
    }
    assert_eq!(advance_turn(&mut state, &mut env), AdvanceOutcome::Terminal);
    assert_eq!(state, frozen);
}

fn finish_round(state: &mut CombatState, env: &mut DuelEnv<'_>) -> ActionOutcome {
    let mut engine = CombatEngine::new(state);
    engine.execute(env, Side::Player, &CombatAction::SkipTurn).unwrap();
    engine.execute(env, Side::Enemy, &CombatAction::SkipTurn).unwrap()
}

#[test]
fn lasting_effect_ticks_then_expires_over_two_rounds() {
    let config = DuelConfig::default();
    let mut rng = PcgRng::seed_from_u64(0);
    let clock = FixedClock(0);
    let mut env = DuelEnv::new(&config, &mut rng, &clock);
    let mut state = duel_with_hands(Vec::new(), Vec::new());
    state.player.active_effects.push(ActiveEffect {
        name: "Power Boost".to_owned(),
        kind: EffectKind::StatModifier,
        value: 2,
        element: Element::Fire,
        remaining_duration: 2,
        source: Side::Player,
        periodic: None,
    });

    let outcome = finish_round(&mut state, &mut env);
    assert_eq!(outcome, ActionOutcome::TurnEnded(AdvanceOutcome::RoundAdvanced { round: 2 }));
    assert_eq!(state.player.active_effects.len(), 1);
    assert_eq!(state.player.active_effects[0].remaining_duration, 1);
    assert_eq!(state.log.count(LogAction::EffectExpired), 0);

    finish_round(&mut state, &mut env);
    assert!(state.player.active_effects.is_empty());
    assert_eq!(state.log.count(LogAction::EffectExpired), 1);
    assert_eq!(state.round, 3);
}

#[test]
fn player_over_the_limit_blocks_the_round() {
    let config = DuelConfig::default();
    let mut rng = PcgRng::seed_from_u64(0);
    let clock = FixedClock(0);
    let mut env = DuelEnv::new(&config, &mut rng, &clock);
    let mut state = duel_with_hands(
        vec![strike("a", 0, 1), strike("b", 0, 1), strike("c", 0, 1)],
        vec![strike("x", 0, 1), strike("y", 0, 1), strike("z", 0, 1)],
    );
    state.active = Side::Enemy;
    state.turn = 2;

    let outcome = CombatEngine::new(&mut state)
        .execute(&mut env, Side::Enemy, &CombatAction::SkipTurn)
        .unwrap();
    assert_eq!(
        outcome,
        ActionOutcome::TurnEnded(AdvanceOutcome::AwaitingDiscard { excess: 1 })
    );
    assert_eq!((state.turn, state.round), (2, 1));
    assert_eq!(state.pending_discard, Some(Side::Player));
    assert_eq!(state.enemy.hand.len(), 2);
    assert_eq!(state.enemy.hand[0].id.as_str(), "y");

    let mut engine = CombatEngine::new(&mut state);
    assert_eq!(
        engine.execute(&mut env, Side::Player, &CombatAction::CastSpell),
        Err(ExecuteError::DiscardPending { side: Side::Player })
    );
    assert_eq!(
        engine.execute(&mut env, Side::Enemy, &CombatAction::discard("y")),
        Err(ExecuteError::DiscardPending { side: Side::Player })
    );
    assert_eq!(
        engine.execute(&mut env, Side::Player, &CombatAction::discard("b")),
        Ok(ActionOutcome::Discarded { found: true })
    );
    let resumed = engine
        .execute(&mut env, Side::Player, &CombatAction::AdvanceTurn)
        .unwrap();

    assert_eq!(
        resumed,
        ActionOutcome::TurnEnded(AdvanceOutcome::RoundAdvanced { round: 2 })
    );
    assert_eq!(state.pending_discard, None);
    assert_eq!(state.active, Side::Player);
    assert_eq!(state.turn, 3);
}

#[test]
fn time_warp_grants_the_caster_another_turn() {
    let config = DuelConfig::default();
    let mut rng = PcgRng::seed_from_u64(0);
    let clock = FixedClock(0);
    let mut env = DuelEnv::new(&config, &mut rng, &clock);
    let mut state = duel_with_hands(vec![time_warp()], Vec::new());

    let mut engine = CombatEngine::new(&mut state);
    engine
        .execute(&mut env, Side::Player, &CombatAction::select("time_warp"))
        .unwrap();
    let outcome = engine
        .execute(&mut env, Side::Player, &CombatAction::CastSpell)
        .unwrap();

    assert_eq!(outcome, ActionOutcome::TurnEnded(AdvanceOutcome::ExtraTurn(Side::Player)));
    assert_eq!(state.active, Side::Player);
    assert_eq!(state.turn, 2);
    assert_eq!(state.pending_override, None);
    assert_eq!(state.player.current_mana(), 95);
    assert_eq!(state.log.count(LogAction::ExtraTurn), 1);
}

#[test]
fn insufficient_mana_fails_and_keeps_the_card() {
    let config = DuelConfig::default();
    let mut rng = PcgRng::seed_from_u64(0);
    let clock = FixedClock(0);
    let mut env = DuelEnv::new(&config, &mut rng, &clock);
    let mut state = duel_with_hands(vec![strike("inferno", 40, 30)], Vec::new());
    state.player.set_mana(10);

    let mut engine = CombatEngine::new(&mut state);
    engine
        .execute(&mut env, Side::Player, &CombatAction::select("inferno"))
        .unwrap();
    engine
        .execute(&mut env, Side::Player, &CombatAction::CastSpell)
        .unwrap();

    assert_eq!(state.player.current_mana(), 10);
    assert_eq!(state.player.hand.len(), 1);
    assert_eq!(state.enemy.current_health(), 100);
    assert_eq!(state.log.count(LogAction::CastFailed), 1);
    assert_eq!(state.active, Side::Enemy);
}
