//! Per-view fetch lifecycle as an explicit state machine.
//!
//! The machine is a pure reducer over three event kinds. Controllers tag
//! every in-flight request with the generation it was issued under; a
//! completion whose generation no longer matches is stale and is discarded,
//! so responses apply in key-epoch order rather than arrival order.

/// Monotonic counter identifying which logical request is current.
pub type Generation = u64;

/// State of one view's fetch lifecycle.
///
/// A tagged union: data exists iff `Success`, a message exists iff `Error`,
/// and exactly one status holds at a time, by construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    /// Renderers treat `Idle` and `Loading` as the same "show progress" signal.
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Idle | FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Events driving the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent<T> {
    /// The view's key input changed (or the view activated / retried).
    KeyChanged,
    FetchSucceeded { generation: Generation, data: T },
    FetchFailed { generation: Generation, message: String },
}

/// One view's fetch state machine: current state plus the generation of the
/// request that is logically current. Owned exclusively by its controller.
#[derive(Debug)]
pub struct FetchMachine<T> {
    state: FetchState<T>,
    generation: Generation,
}

impl<T> Default for FetchMachine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchMachine<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    /// Start a new fetch epoch: supersede any in-flight request and enter
    /// `Loading`. Returns the generation the caller must tag its request with.
    pub fn begin(&mut self) -> Generation {
        self.apply(FetchEvent::KeyChanged);
        self.generation
    }

    /// Apply one event. Returns `true` if the event changed the machine,
    /// `false` if it was discarded as stale or out of order.
    pub fn apply(&mut self, event: FetchEvent<T>) -> bool {
        match event {
            FetchEvent::KeyChanged => {
                // Any state re-arms; the bumped generation orphans in-flight work.
                self.generation += 1;
                self.state = FetchState::Loading;
                true
            }
            FetchEvent::FetchSucceeded { generation, data } => {
                if generation != self.generation || !self.is_loading() {
                    return false;
                }
                self.state = FetchState::Success(data);
                true
            }
            FetchEvent::FetchFailed {
                generation,
                message,
            } => {
                if generation != self.generation || !self.is_loading() {
                    return false;
                }
                self.state = FetchState::Error(message);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_generation_zero() {
        let machine: FetchMachine<Vec<String>> = FetchMachine::new();
        assert_eq!(*machine.state(), FetchState::Idle);
        assert_eq!(machine.generation(), 0);
        assert!(machine.state().is_pending());
    }

    #[test]
    fn begin_enters_loading_and_bumps_generation() {
        let mut machine: FetchMachine<u32> = FetchMachine::new();
        let generation = machine.begin();
        assert_eq!(generation, 1);
        assert_eq!(*machine.state(), FetchState::Loading);
        assert!(machine.state().is_pending());
    }

    #[test]
    fn success_applies_for_current_generation() {
        let mut machine = FetchMachine::new();
        let generation = machine.begin();
        assert!(machine.apply(FetchEvent::FetchSucceeded {
            generation,
            data: 42,
        }));
        assert_eq!(machine.state().data(), Some(&42));
        assert_eq!(machine.state().error_message(), None);
    }

    #[test]
    fn failure_applies_for_current_generation() {
        let mut machine: FetchMachine<u32> = FetchMachine::new();
        let generation = machine.begin();
        assert!(machine.apply(FetchEvent::FetchFailed {
            generation,
            message: "service unreachable".to_string(),
        }));
        assert_eq!(
            machine.state().error_message(),
            Some("service unreachable")
        );
        assert_eq!(machine.state().data(), None);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut machine = FetchMachine::new();
        let first = machine.begin();
        let second = machine.begin();
        assert_ne!(first, second);

        // Newer epoch resolves first.
        assert!(machine.apply(FetchEvent::FetchSucceeded {
            generation: second,
            data: "k2",
        }));

        // The superseded request resolving late must never overwrite.
        assert!(!machine.apply(FetchEvent::FetchSucceeded {
            generation: first,
            data: "k1",
        }));
        assert!(!machine.apply(FetchEvent::FetchFailed {
            generation: first,
            message: "late failure".to_string(),
        }));

        assert_eq!(machine.state().data(), Some(&"k2"));
    }

    #[test]
    fn completion_outside_loading_is_ignored() {
        let mut machine = FetchMachine::new();
        let generation = machine.begin();
        assert!(machine.apply(FetchEvent::FetchSucceeded {
            generation,
            data: 1,
        }));

        // Duplicate completion for the same generation after settling.
        assert!(!machine.apply(FetchEvent::FetchSucceeded {
            generation,
            data: 2,
        }));
        assert_eq!(machine.state().data(), Some(&1));
    }

    #[test]
    fn error_state_rearms_on_key_change() {
        let mut machine: FetchMachine<u32> = FetchMachine::new();
        let generation = machine.begin();
        machine.apply(FetchEvent::FetchFailed {
            generation,
            message: "boom".to_string(),
        });

        let next = machine.begin();
        assert_eq!(*machine.state(), FetchState::Loading);
        assert_eq!(next, generation + 1);
    }

    #[test]
    fn exactly_one_status_holds() {
        let mut machine = FetchMachine::new();
        for _ in 0..3 {
            let generation = machine.begin();
            machine.apply(FetchEvent::FetchSucceeded {
                generation,
                data: "ok",
            });
            let state = machine.state();
            let flags = [
                matches!(state, FetchState::Idle),
                matches!(state, FetchState::Loading),
                matches!(state, FetchState::Success(_)),
                matches!(state, FetchState::Error(_)),
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        }
    }
}
