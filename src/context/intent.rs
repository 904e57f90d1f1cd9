// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot navigation intents.
//!
//! A page that routes somewhere else posts an intent first; the destination
//! takes it exactly once on mount. A reload or back-navigation finds an
//! empty slot and replays nothing, which is the whole point of modelling
//! this as an explicit slot instead of router history state.

use leptos::*;

use crate::context::section::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationIntent {
    pub scroll_to: Option<Section>,
    /// True when the clients page bounced the visitor back home. The home
    /// page logs these bounces; navigation itself only follows `scroll_to`.
    pub from_clients: bool,
}

impl NavigationIntent {
    pub fn scroll_to(section: Section) -> Self {
        Self {
            scroll_to: Some(section),
            from_clients: false,
        }
    }

    /// Posted when the clients page bounces back home because there is not
    /// enough to show.
    pub fn from_clients() -> Self {
        Self {
            scroll_to: Some(Section::Portfolio),
            from_clients: true,
        }
    }
}

#[derive(Clone, Copy)]
pub struct IntentSlot(RwSignal<Option<NavigationIntent>>);

impl IntentSlot {
    fn new() -> Self {
        Self(create_rw_signal(None))
    }

    pub fn post(&self, intent: NavigationIntent) {
        self.0.set(Some(intent));
    }

    pub fn take(&self) -> Option<NavigationIntent> {
        self.0.try_update(|slot| slot.take()).flatten()
    }
}

pub fn provide_intent_slot() -> IntentSlot {
    let slot = IntentSlot::new();
    provide_context(slot);
    slot
}

pub fn use_intent_slot() -> IntentSlot {
    use_context::<IntentSlot>().expect("IntentSlot missing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_is_consumed_exactly_once() {
        let runtime = create_runtime();
        let slot = IntentSlot::new();

        slot.post(NavigationIntent::scroll_to(Section::Contact));
        assert_eq!(
            slot.take(),
            Some(NavigationIntent::scroll_to(Section::Contact))
        );
        assert_eq!(slot.take(), None);

        runtime.dispose();
    }

    #[test]
    fn clients_bounce_targets_portfolio() {
        let intent = NavigationIntent::from_clients();
        assert!(intent.from_clients);
        assert_eq!(intent.scroll_to, Some(Section::Portfolio));
        assert!(!NavigationIntent::scroll_to(Section::About).from_clients);
    }

    #[test]
    fn later_post_replaces_unconsumed_intent() {
        let runtime = create_runtime();
        let slot = IntentSlot::new();

        slot.post(NavigationIntent::scroll_to(Section::About));
        slot.post(NavigationIntent::from_clients());
        let taken = slot.take().unwrap();
        assert!(taken.from_clients);
        assert_eq!(taken.scroll_to, Some(Section::Portfolio));
        assert_eq!(slot.take(), None);

        runtime.dispose();
    }
}
