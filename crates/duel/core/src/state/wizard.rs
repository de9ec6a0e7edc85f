use crate::spell::{Spell, SpellId};
use crate::state::ActiveEffect;
use crate::wizard::Wizard;

/// A wizard's live state during one duel.
///
/// Health and mana are private so that every change goes through the
/// clamping mutators; both always stay within `[0, max]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatWizard {
    pub wizard: Wizard,
    current_health: u32,
    current_mana: u32,
    pub active_effects: Vec<ActiveEffect>,
    pub selected_spell: Option<Spell>,
    pub hand: Vec<Spell>,
    /// Index 0 is the top of the pile.
    pub draw_pile: Vec<Spell>,
    pub discard_pile: Vec<Spell>,
}

impl CombatWizard {
    /// Enters combat at full health and mana with `deck` as the draw pile.
    pub fn new(wizard: Wizard, deck: Vec<Spell>) -> Self {
        Self {
            current_health: wizard.max_health,
            current_mana: wizard.max_mana,
            wizard,
            active_effects: Vec::new(),
            selected_spell: None,
            hand: Vec::new(),
            draw_pile: deck,
            discard_pile: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.wizard.name
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn current_mana(&self) -> u32 {
        self.current_mana
    }

    pub fn max_health(&self) -> u32 {
        self.wizard.max_health
    }

    pub fn max_mana(&self) -> u32 {
        self.wizard.max_mana
    }

    /// Subtracts up to `amount` health and returns what was actually lost.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_health);
        self.current_health -= lost;
        lost
    }

    /// Adds up to `amount` health (capped at max) and returns the gain.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_health().saturating_sub(self.current_health));
        self.current_health += gained;
        gained
    }

    /// Adds up to `amount` mana (capped at max) and returns the gain.
    pub fn restore_mana(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_mana().saturating_sub(self.current_mana));
        self.current_mana += gained;
        gained
    }

    /// Pays `cost` if affordable. Returns false and leaves mana untouched
    /// otherwise.
    pub fn spend_mana(&mut self, cost: u32) -> bool {
        if cost > self.current_mana {
            return false;
        }
        self.current_mana -= cost;
        true
    }

    /// Sets health directly, clamped to `[0, max_health]`.
    pub fn set_health(&mut self, health: u32) {
        self.current_health = health.min(self.max_health());
    }

    /// Sets mana directly, clamped to `[0, max_mana]`.
    pub fn set_mana(&mut self, mana: u32) {
        self.current_mana = mana.min(self.max_mana());
    }

    pub fn is_defeated(&self) -> bool {
        self.current_health == 0
    }

    pub fn health_ratio(&self) -> f32 {
        ratio(self.current_health, self.max_health())
    }

    pub fn mana_ratio(&self) -> f32 {
        ratio(self.current_mana, self.max_mana())
    }

    /// Cards owned by this wizard across hand, draw pile, and discard pile.
    pub fn deck_size(&self) -> usize {
        self.hand.len() + self.draw_pile.len() + self.discard_pile.len()
    }

    pub fn hand_spell(&self, spell_id: &SpellId) -> Option<&Spell> {
        self.hand.iter().find(|spell| &spell.id == spell_id)
    }

    pub fn can_afford(&self, spell: &Spell) -> bool {
        spell.mana_cost <= self.current_mana
    }
}

fn ratio(current: u32, max: u32) -> f32 {
    if max == 0 {
        return 0.0;
    }
    current as f32 / max as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> CombatWizard {
        CombatWizard::new(Wizard::new("w", "Wizard").with_vitals(100, 50, 5), Vec::new())
    }

    #[test]
    fn mutators_clamp_and_report_actual_change() {
        let mut w = wizard();
        assert_eq!(w.damage(150), 100);
        assert_eq!(w.current_health(), 0);
        assert!(w.is_defeated());

        assert_eq!(w.heal(30), 30);
        assert_eq!(w.heal(500), 70);
        assert_eq!(w.current_health(), 100);

        assert!(!w.spend_mana(51));
        assert_eq!(w.current_mana(), 50);
        assert!(w.spend_mana(20));
        assert_eq!(w.restore_mana(100), 20);
        assert_eq!(w.current_mana(), 50);
    }

    #[test]
    fn zero_max_ratios_do_not_divide_by_zero() {
        let w = CombatWizard::new(Wizard::new("w", "Wizard").with_vitals(0, 0, 0), Vec::new());
        assert_eq!(w.health_ratio(), 0.0);
        assert_eq!(w.mana_ratio(), 0.0);
    }
}
