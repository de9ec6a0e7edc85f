#![allow(dead_code)]

use duel_core::{
    ActiveEffect, CombatState, CombatWizard, Difficulty, EffectKind, EffectTarget, Element, Side,
    Spell, SpellEffect, SpellType, Wizard,
};

pub fn bolt(id: &str, element: Element, cost: u32, damage: i32) -> Spell {
    Spell::new(id, id, SpellType::Attack, element)
        .with_cost(cost)
        .with_effect(SpellEffect::new(
            EffectKind::Damage,
            damage,
            EffectTarget::Enemy,
            element,
        ))
}

pub fn mend(cost: u32, healing: i32) -> Spell {
    Spell::new("mend", "Mend", SpellType::Healing, Element::Light)
        .with_cost(cost)
        .with_effect(SpellEffect::new(
            EffectKind::Healing,
            healing,
            EffectTarget::SelfTarget,
            Element::Light,
        ))
}

pub fn war_cry() -> Spell {
    Spell::new("war_cry", "War Cry", SpellType::Buff, Element::Fire)
        .with_cost(2)
        .with_effect(
            SpellEffect::new(
                EffectKind::StatModifier,
                3,
                EffectTarget::SelfTarget,
                Element::Fire,
            )
            .with_duration(2),
        )
}

pub fn mana_focus() -> Spell {
    Spell::new("arcane_focus", "Arcane Focus", SpellType::Utility, Element::Arcane).with_effect(
        SpellEffect::new(
            EffectKind::ManaRestore,
            6,
            EffectTarget::SelfTarget,
            Element::Arcane,
        ),
    )
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
        bolt("firebolt", Element::Fire, 3, 8),
        bolt("spark", Element::Air, 1, 3),
        mend(2, 5),
        raise_dead(),
        time_warp(),
    ]
}

pub fn wizard(name: &str) -> Wizard {
    Wizard::new(name.to_lowercase(), name)
        .with_vitals(60, 20, 4)
        .with_known_spells(mixed_deck())
}

/// Round 1, player to act. Both wizards start at 100 health and 100 mana.
pub fn duel_with_hand(hand: Vec<Spell>) -> CombatState {
    let mut player = CombatWizard::new(Wizard::new("player", "Player"), Vec::new());
    let enemy = CombatWizard::new(Wizard::new("enemy", "Enemy"), Vec::new());
    player.hand = hand;
    CombatState::new(player, enemy, Difficulty::Normal)
}

/// A lingering effect of `element` cast by `source`.
pub fn aura(source: Side, element: Element) -> ActiveEffect {
    ActiveEffect {
        name: "Aura".into(),
        kind: EffectKind::StatModifier,
        value: 2,
        element,
        remaining_duration: 2,
        source,
        periodic: None,
    }
}

pub fn minion(source: Side) -> ActiveEffect {
    ActiveEffect {
        name: "Skeleton".into(),
        kind: EffectKind::Summon,
        value: 4,
        element: Element::Shadow,
        remaining_duration: 2,
        source,
        periodic: None,
    }
}
