use duel_core::Spell;

/// Spell categories used by AI nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpellKind {
    Any,
    Damage,
    Healing,
    Buff,
    Debuff,
    Summon,
    ManaRestore,
    TimeWarp,
    /// Buffs and debuffs.
    Tactical,
    /// Healing and mana restoration.
    Recovery,
}

impl SpellKind {
    pub fn matches(self, spell: &Spell) -> bool {
        match self {
            SpellKind::Any => true,
            SpellKind::Damage => spell.is_damage(),
            SpellKind::Healing => spell.is_healing(),
            SpellKind::Buff => spell.is_buff(),
            SpellKind::Debuff => spell.is_debuff(),
            SpellKind::Summon => spell.is_summon(),
            SpellKind::ManaRestore => spell.is_mana_restore(),
            SpellKind::TimeWarp => spell.is_time_warp(),
            SpellKind::Tactical => spell.is_buff() || spell.is_debuff(),
            SpellKind::Recovery => spell.is_healing() || spell.is_mana_restore(),
        }
    }

    /// Ranking used when a node wants the strongest spell of this kind.
    pub fn power(self, spell: &Spell) -> i64 {
        match self {
            SpellKind::Damage => i64::from(spell.damage_value()),
            SpellKind::Healing => i64::from(spell.healing_value()),
            _ => i64::from(spell.tier),
        }
    }
}
