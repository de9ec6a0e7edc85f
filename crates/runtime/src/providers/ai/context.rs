//! AI context for spell selection.
//!
//! The [`AiContext`] is the blackboard behavior-tree nodes read from and
//! write to. It provides:
//!
//! - Read access to the combat state, from the deciding side's perspective
//! - The affordable part of the hand (computed once per decision)
//! - Effect and vitality queries used by conditions
//! - The AI's explicit [`AiMemory`] and the injected random source
//! - Choice storage via [`AiContext::choose`]

use behavior_tree::Roll;
use duel_core::{CombatState, CombatWizard, Element, RandomSource, Side, Spell};

use super::memory::AiMemory;
use super::nodes::SpellKind;

pub struct AiContext<'a> {
    /// The side making the decision.
    pub side: Side,

    /// Read-only access to the current combat state.
    pub state: &'a CombatState,

    pub memory: &'a mut AiMemory,

    rng: &'a mut dyn RandomSource,

    /// Hand spells whose cost fits the current mana pool, in hand order.
    affordable: Vec<&'a Spell>,

    choice: Option<&'a Spell>,
}

impl<'a> AiContext<'a> {
    pub fn new(
        side: Side,
        state: &'a CombatState,
        memory: &'a mut AiMemory,
        rng: &'a mut dyn RandomSource,
    ) -> Self {
        let me = state.wizard(side);
        let affordable = me.hand.iter().filter(|spell| me.can_afford(spell)).collect();
        Self {
            side,
            state,
            memory,
            rng,
            affordable,
            choice: None,
        }
    }

    pub fn me(&self) -> &'a CombatWizard {
        self.state.wizard(self.side)
    }

    pub fn opponent(&self) -> &'a CombatWizard {
        self.state.wizard(self.side.opponent())
    }

    pub fn health_ratio(&self) -> f32 {
        self.me().health_ratio()
    }

    pub fn mana_ratio(&self) -> f32 {
        self.me().mana_ratio()
    }

    pub fn opponent_health_ratio(&self) -> f32 {
        self.opponent().health_ratio()
    }

    pub fn affordable(&self) -> &[&'a Spell] {
        &self.affordable
    }

    /// Affordable spells of `kind`, in hand order.
    pub fn candidates(&self, kind: SpellKind) -> Vec<&'a Spell> {
        self.affordable
            .iter()
            .copied()
            .filter(|spell| kind.matches(spell))
            .collect()
    }

    /// Highest-power affordable spell of `kind`. The earliest card wins ties.
    pub fn strongest(&self, kind: SpellKind) -> Option<&'a Spell> {
        let mut best: Option<&'a Spell> = None;
        for spell in self.candidates(kind) {
            if best.is_none_or(|current| kind.power(spell) > kind.power(current)) {
                best = Some(spell);
            }
        }
        best
    }

    /// Uniformly random pick from `candidates`.
    pub fn pick(&mut self, candidates: &[&'a Spell]) -> Option<&'a Spell> {
        if candidates.is_empty() {
            return None;
        }
        let index = self.rng.below(candidates.len() as u32) as usize;
        candidates.get(index).copied()
    }

    /// Whether the opponent carries an effect it cast on itself.
    pub fn opponent_buffed(&self) -> bool {
        let holder = self.side.opponent();
        self.opponent()
            .active_effects
            .iter()
            .any(|effect| effect.is_buff_for(holder))
    }

    /// Whether the opponent carries an effect cast by someone else.
    pub fn opponent_debuffed(&self) -> bool {
        let holder = self.side.opponent();
        self.opponent()
            .active_effects
            .iter()
            .any(|effect| effect.is_debuff_for(holder))
    }

    pub fn self_buffed(&self) -> bool {
        self.me()
            .active_effects
            .iter()
            .any(|effect| effect.is_buff_for(self.side))
    }

    pub fn has_summon(&self) -> bool {
        self.me().active_effects.iter().any(|effect| effect.is_summon())
    }

    /// Elements of the effects currently on the opponent, first seen first.
    pub fn opponent_effect_elements(&self) -> Vec<Element> {
        let mut elements = Vec::new();
        for effect in &self.opponent().active_effects {
            if !elements.contains(&effect.element) {
                elements.push(effect.element);
            }
        }
        elements
    }

    /// Records `spell` as the decision. A later choice replaces an earlier one.
    pub fn choose(&mut self, spell: &'a Spell) {
        self.choice = Some(spell);
    }

    pub fn has_choice(&self) -> bool {
        self.choice.is_some()
    }

    pub fn into_choice(self) -> Option<&'a Spell> {
        self.choice
    }
}

impl Roll for AiContext<'_> {
    fn roll(&mut self, bound: u32) -> u32 {
        self.rng.below(bound)
    }
}
