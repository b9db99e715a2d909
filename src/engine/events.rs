//! Encounter events published to registered observers.
//!
//! Every callback is optional and fire-and-forget; the engine behaves
//! identically with zero observers attached.

use crate::engine::types::{CombatPhase, CombatResult};
use std::fmt;

/// Combatant references carry the stable string id, so an observer can
/// track units across the whole encounter.
#[derive(Debug, Clone, PartialEq)]
pub enum EncounterEvent {
    TurnStarted {
        combatant: String,
    },
    WaitingForInput {
        combatant: String,
    },
    ActionPerformed {
        combatant: String,
        description: String,
    },
    AttackAnimation {
        attacker: String,
    },
    DamageDealt {
        target: String,
        amount: u32,
        critical: bool,
    },
    HealApplied {
        target: String,
        amount: u32,
    },
    AbilityUsed {
        caster: String,
        ability: String,
    },
    StateChanged {
        phase: CombatPhase,
    },
    CombatEnded {
        result: CombatResult,
    },
}

/// Listener registry. Not serialized; a restored encounter starts with an
/// empty registry and callers re-subscribe.
#[derive(Default)]
pub struct EventObservers {
    listeners: Vec<Box<dyn FnMut(&EncounterEvent)>>,
}

impl fmt::Debug for EventObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventObservers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl EventObservers {
    pub fn subscribe(&mut self, listener: impl FnMut(&EncounterEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, event: &EncounterEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_every_listener() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = EventObservers::default();
        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            observers.subscribe(move |event| {
                if let EncounterEvent::DamageDealt { amount, .. } = event {
                    seen.borrow_mut().push((tag, *amount));
                }
            });
        }

        observers.emit(&EncounterEvent::DamageDealt {
            target: "x".to_string(),
            amount: 7,
            critical: false,
        });

        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_emit_with_no_listeners_is_harmless() {
        let mut observers = EventObservers::default();
        observers.emit(&EncounterEvent::StateChanged {
            phase: CombatPhase::Running,
        });
        assert!(observers.is_empty());
    }
}
