//! Strongly typed identifier wrappers for Cyclus table keys.
//!
//! Cyclus writes agent and resource ids as signed SQLite integers, so the
//! wrappers hold `i64` rather than an unsigned index type.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// `AgentEntry.AgentId` / `TimeSeriesPower.AgentId`.
    pub struct AgentId(i64);
}

typed_id! {
    /// `Transactions.ResourceId` / `Resources.ResourceId`.
    pub struct ResourceId(i64);
}
