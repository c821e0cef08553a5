//! The `State` trait shared by round snapshots and daemon lifecycles.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A position something can be in during a round.
///
/// Implemented by [`Status`](super::Status) (is the round still running?) and
/// by [`DaemonState`](super::DaemonState) (has this daemon been decided?).
/// Implementors are plain values: they are copied into every snapshot and
/// compared by value when undo restores one.
///
/// # Example
///
/// ```rust
/// use breach::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Trace {
///     Running,
///     Caught,
/// }
///
/// impl State for Trace {
///     fn name(&self) -> &str {
///         match self {
///             Self::Running => "Running",
///             Self::Caught => "Caught",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Caught)
///     }
/// }
///
/// assert!(Trace::Caught.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Short label used in logs and by renderers.
    fn name(&self) -> &str;

    /// Whether no further transition can leave this state.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Upload {
        Queued,
        Sent,
    }

    impl State for Upload {
        fn name(&self) -> &str {
            match self {
                Self::Queued => "Queued",
                Self::Sent => "Sent",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Sent)
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Idle;

    impl State for Idle {
        fn name(&self) -> &str {
            "Idle"
        }
    }

    #[test]
    fn states_are_not_final_by_default() {
        assert!(!Idle.is_final());
        assert_eq!(Idle.name(), "Idle");
    }

    #[test]
    fn overridden_final_check_is_used() {
        assert_eq!(Upload::Queued.name(), "Queued");
        assert!(!Upload::Queued.is_final());
        assert!(Upload::Sent.is_final());
    }
}
