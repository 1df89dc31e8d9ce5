//! Floors and typed identifiers.
//!
//! Floors are plain integers ([`Floor`]) because dispatch does distance
//! arithmetic on them.  Passengers and elevators get newtypes so the two
//! kinds of index cannot be mixed up.

use std::fmt;

/// A floor index.  `0` is the lowest reachable level.
pub type Floor = u32;

macro_rules! typed_id {
    ($(#[$attr:meta])* $name:ident($inner:ty), $prefix:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub $inner);

        impl $name {
            /// Position in the owning `Vec`.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

typed_id! {
    /// Assigned by the building in admission order, rejected arrivals
    /// included.  Restarts at 0 every episode.
    PassengerId(u64), "p"
}

typed_id! {
    /// Index of an elevator in the building, which is also the order in
    /// which elevators act within a step.
    ElevatorId(u32), "e"
}
