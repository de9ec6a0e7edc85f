use duel_core::Element;

/// State an AI carries from one decision to the next.
///
/// Only the element of the last chosen spell is remembered; the Elemental
/// strategy uses it to chain combos.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AiMemory {
    pub last_element: Option<Element>,
}

impl AiMemory {
    pub fn remember(&mut self, element: Element) {
        self.last_element = Some(element);
    }
}
