//! Declarative helper for lifecycle enums.

/// Declare a fieldless lifecycle enum and implement `State` for it.
///
/// Variants listed under `terminal:` report `is_final() == true`. The enum
/// derives `Clone, Copy, PartialEq, Eq, Debug` plus the serde traits, so it
/// can live inside snapshots.
///
/// # Example
///
/// ```
/// use breach::core::State;
/// use breach::state_enum;
///
/// state_enum! {
///     pub enum Uplink {
///         Probing,
///         Breached,
///         Traced,
///     }
///     terminal: [Breached, Traced]
/// }
///
/// assert_eq!(Uplink::Probing.name(), "Probing");
/// assert!(Uplink::Traced.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $ty:ident {
            $(
                $(#[$doc:meta])*
                $variant:ident
            ),* $(,)?
        }
        $(terminal: [$($terminal:ident),* $(,)?])?
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $ty {
            $(
                $(#[$doc])*
                $variant
            ),*
        }

        impl $crate::core::State for $ty {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$terminal => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
