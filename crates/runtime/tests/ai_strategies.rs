mod common;

use common::{
    aura, bolt, duel_with_hand, mana_focus, mend, minion, raise_dead, time_warp, war_cry,
};
use duel_core::{CombatAction, Element, ScriptedRng, Side};
use duel_runtime::{AI_PUNCH_TIER, ActionProvider, AiProvider, AiStrategy, Archetype};

fn cast(spell_id: &str) -> Vec<CombatAction> {
    vec![CombatAction::select(spell_id), CombatAction::CastSpell]
}

fn punch() -> Vec<CombatAction> {
    vec![CombatAction::MysticPunch {
        spell_tier: AI_PUNCH_TIER,
    }]
}

fn plan_for(
    strategy: AiStrategy,
    state: &duel_core::CombatState,
    rolls: impl Into<Vec<u32>>,
) -> Vec<CombatAction> {
    let mut rng = ScriptedRng::new(rolls);
    AiProvider::new(strategy)
        .provide_actions(Side::Player, state, &mut rng)
        .expect("AI plans never fail")
}

#[test]
fn defensive_heals_when_badly_hurt() {
    let mut state = duel_with_hand(vec![bolt("firebolt", Element::Fire, 3, 8), mend(2, 5)]);
    state.player.set_health(20);

    assert_eq!(plan_for(AiStrategy::Defensive, &state, [0]), cast("mend"));
}

#[test]
fn every_strategy_punches_without_affordable_spells() {
    let mut state = duel_with_hand(vec![bolt("firebolt", Element::Fire, 3, 8), mend(2, 5)]);
    state.player.set_mana(1);

    for strategy in [
        AiStrategy::Defensive,
        AiStrategy::Aggressive,
        AiStrategy::Balanced,
        AiStrategy::Elemental,
        AiStrategy::Archetype(Archetype::Necromancer),
        AiStrategy::Archetype(Archetype::TimeWeaver),
        AiStrategy::Archetype(Archetype::BattleMage),
        AiStrategy::Archetype(Archetype::Illusionist),
        AiStrategy::Archetype(Archetype::Alchemist),
    ] {
        assert_eq!(plan_for(strategy, &state, [0]), punch(), "{strategy}");
    }
}

#[test]
fn balanced_finishes_a_weakened_opponent_with_its_strongest_spell() {
    let mut state = duel_with_hand(vec![
        bolt("spark", Element::Air, 1, 3),
        bolt("firebolt", Element::Fire, 3, 8),
    ]);
    state.enemy.set_health(20);

    assert_eq!(plan_for(AiStrategy::Balanced, &state, [0]), cast("firebolt"));
}

#[test]
fn necromancer_summons_then_attacks_while_minion_is_up() {
    let mut state = duel_with_hand(vec![bolt("firebolt", Element::Fire, 3, 8), raise_dead()]);
    let necromancer = AiStrategy::Archetype(Archetype::Necromancer);

    assert_eq!(plan_for(necromancer, &state, [0]), cast("raise_dead"));

    state.player.active_effects.push(minion(Side::Player));
    assert_eq!(plan_for(necromancer, &state, [0]), cast("firebolt"));
}

#[test]
fn time_weaver_reaches_for_time_warp_first() {
    let state = duel_with_hand(vec![bolt("firebolt", Element::Fire, 3, 8), time_warp()]);

    assert_eq!(
        plan_for(AiStrategy::Archetype(Archetype::TimeWeaver), &state, [0]),
        cast("time_warp")
    );
}

#[test]
fn archetypes_punch_instead_of_casting_off_plan() {
    // Illusionists only debuff or attack; a lone heal at full health is ignored.
    let state = duel_with_hand(vec![mend(2, 5)]);

    assert_eq!(
        plan_for(AiStrategy::Archetype(Archetype::Illusionist), &state, [0]),
        punch()
    );
    assert_eq!(plan_for(AiStrategy::Balanced, &state, [99]), cast("mend"));
}

#[test]
fn elemental_chains_the_remembered_element() {
    let mut ai = AiProvider::new(AiStrategy::Elemental);
    let opening = duel_with_hand(vec![bolt("firebolt", Element::Fire, 3, 8)]);
    let mut rng = ScriptedRng::new([0]);

    let plan = ai
        .provide_actions(Side::Player, &opening, &mut rng)
        .expect("AI plans never fail");
    assert_eq!(plan, cast("firebolt"));
    assert_eq!(ai.memory().last_element, Some(Element::Fire));

    // The combo roll (0 < 60) prefers fire over the stronger water spell.
    let follow_up = duel_with_hand(vec![
        bolt("ice_lance", Element::Water, 3, 12),
        bolt("ember", Element::Fire, 1, 4),
    ]);
    let plan = ai
        .provide_actions(Side::Player, &follow_up, &mut rng)
        .expect("AI plans never fail");
    assert_eq!(plan, cast("ember"));
}

#[test]
fn defensive_mix_rolls_a_category_and_falls_through_in_order() {
    let state = duel_with_hand(vec![
        bolt("firebolt", Element::Fire, 3, 8),
        mend(2, 5),
        war_cry(),
    ]);

    // Heal 0..25, buff 25..45, debuff 45..65, damage 65..100.
    assert_eq!(plan_for(AiStrategy::Defensive, &state, [0]), cast("mend"));
    assert_eq!(plan_for(AiStrategy::Defensive, &state, [30]), cast("war_cry"));
    assert_eq!(plan_for(AiStrategy::Defensive, &state, [70]), cast("firebolt"));
    // No debuff in hand: the heal branch is tried first.
    assert_eq!(plan_for(AiStrategy::Defensive, &state, [50]), cast("mend"));
}

#[test]
fn aggressive_picks_among_its_three_hardest_hitters() {
    let state = duel_with_hand(vec![
        bolt("spark", Element::Air, 1, 3),
        bolt("firebolt", Element::Fire, 3, 8),
        bolt("ice_lance", Element::Water, 3, 12),
        bolt("stone_fist", Element::Earth, 3, 10),
    ]);

    // Roll 0 passes the 70% gate; pick 2 is the third strongest.
    assert_eq!(plan_for(AiStrategy::Aggressive, &state, [0, 2]), cast("firebolt"));
    assert_eq!(plan_for(AiStrategy::Aggressive, &state, [0, 1]), cast("stone_fist"));
    // A failed gate falls back to the single strongest spell.
    assert_eq!(plan_for(AiStrategy::Aggressive, &state, [70]), cast("ice_lance"));
}

#[test]
fn elemental_counters_the_opponents_element() {
    let mut state = duel_with_hand(vec![
        bolt("firebolt", Element::Fire, 3, 12),
        bolt("ice_lance", Element::Water, 3, 6),
    ]);
    assert_eq!(plan_for(AiStrategy::Elemental, &state, [0]), cast("firebolt"));

    state.enemy.active_effects.push(aura(Side::Enemy, Element::Fire));
    let mut ai = AiProvider::new(AiStrategy::Elemental);
    let mut rng = ScriptedRng::new([0]);

    let plan = ai
        .provide_actions(Side::Player, &state, &mut rng)
        .expect("AI plans never fail");

    assert_eq!(plan, cast("ice_lance"));
    assert_eq!(ai.memory().last_element, Some(Element::Water));
}

#[test]
fn battle_mage_buffs_only_when_unbuffed() {
    let mut state = duel_with_hand(vec![bolt("firebolt", Element::Fire, 3, 8), war_cry()]);
    let battle_mage = AiStrategy::Archetype(Archetype::BattleMage);

    assert_eq!(plan_for(battle_mage, &state, [0]), cast("war_cry"));

    state.player.active_effects.push(aura(Side::Player, Element::Fire));
    assert_eq!(plan_for(battle_mage, &state, [0]), cast("firebolt"));
}

#[test]
fn alchemist_restores_mana_when_running_dry() {
    let mut state = duel_with_hand(vec![bolt("firebolt", Element::Fire, 3, 8), mana_focus()]);
    let alchemist = AiStrategy::Archetype(Archetype::Alchemist);

    assert_eq!(plan_for(alchemist, &state, [0]), cast("firebolt"));

    state.player.set_mana(20);
    assert_eq!(plan_for(alchemist, &state, [0]), cast("arcane_focus"));
}

#[test]
fn only_elemental_strategy_writes_memory() {
    let state = duel_with_hand(vec![bolt("firebolt", Element::Fire, 3, 8)]);
    let mut ai = AiProvider::new(AiStrategy::Aggressive);
    let mut rng = ScriptedRng::new([0]);

    ai.provide_actions(Side::Player, &state, &mut rng)
        .expect("AI plans never fail");
    assert_eq!(ai.memory().last_element, None);
}

#[test]
fn strategies_parse_from_config_names() {
    assert_eq!("Balanced".parse::<AiStrategy>().ok(), Some(AiStrategy::Balanced));
    assert_eq!(
        "time_weaver".parse::<AiStrategy>().ok(),
        Some(AiStrategy::Archetype(Archetype::TimeWeaver))
    );
    assert!("berserker".parse::<AiStrategy>().is_err());
    assert_eq!(AiStrategy::Archetype(Archetype::BattleMage).to_string(), "battle_mage");
}
