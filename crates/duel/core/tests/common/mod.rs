#![allow(dead_code)]

use duel_core::{
    CombatState, CombatWizard, Difficulty, EffectKind, EffectTarget, Element, Spell, SpellEffect,
    SpellType, Wizard,
};

pub fn strike(id: &str, cost: u32, damage: i32) -> Spell {
    Spell::new(id, id, SpellType::Attack, Element::Fire)
        .with_cost(cost)
        .with_effect(SpellEffect::new(
            EffectKind::Damage,
            damage,
            EffectTarget::Enemy,
            Element::Fire,
        ))
}

pub fn mend(id: &str, cost: u32, healing: i32) -> Spell {
    Spell::new(id, id, SpellType::Healing, Element::Light)
        .with_cost(cost)
        .with_effect(SpellEffect::new(
            EffectKind::Healing,
            healing,
            EffectTarget::SelfTarget,
            Element::Light,
        ))
}

pub fn time_warp() -> Spell {
    Spell::new("time_warp", "Time Warp", SpellType::Utility, Element::Time)
        .with_cost(5)
        .with_effect(
            SpellEffect::new(
                EffectKind::StatusEffect,
                1,
                EffectTarget::SelfTarget,
                Element::Time,
            )
            .with_duration(1),
        )
}

pub fn curse() -> Spell {
    Spell::new("curse", "Curse", SpellType::Debuff, Element::Shadow)
        .with_cost(4)
        .with_effect(
            SpellEffect::new(
                EffectKind::StatusEffect,
                3,
                EffectTarget::Enemy,
                Element::Shadow,
            )
            .with_duration(2),
        )
}

pub fn raise_dead() -> Spell {
    Spell::new("raise_dead", "Raise Dead", SpellType::Summon, Element::Shadow)
        .with_cost(4)
        .with_effect(
            SpellEffect::new(EffectKind::Summon, 4, EffectTarget::SelfTarget, Element::Shadow)
                .with_duration(2),
        )
}

pub fn mixed_deck() -> Vec<Spell> {
    vec![
        strike("firebolt", 3, 8),
        strike("spark", 1, 3),
        mend("mend", 2, 5),
        curse(),
        raise_dead(),
        time_warp(),
    ]
}

pub fn wizard(name: &str, deck: Vec<Spell>) -> Wizard {
    Wizard::new(name, name)
        .with_vitals(60, 20, 4)
        .with_known_spells(deck)
}

/// Round 1, player to act, with the given hands and empty piles.
pub fn duel_with_hands(player_hand: Vec<Spell>, enemy_hand: Vec<Spell>) -> CombatState {
    let mut player = CombatWizard::new(Wizard::new("player", "Player"), Vec::new());
    let mut enemy = CombatWizard::new(Wizard::new("enemy", "Enemy"), Vec::new());
    player.hand = player_hand;
    enemy.hand = enemy_hand;
    CombatState::new(player, enemy, Difficulty::Normal)
}
