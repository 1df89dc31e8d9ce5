//! Elevator actions and travel directions.
//!
//! # Wire format
//!
//! `ActionKind` is a closed set of six variants.  The only numeric mapping
//! is the ordinal used when actions cross a numeric boundary (a learning
//! agent's discrete output, a CSV column):
//!
//! | Ordinal | Variant    | Name         |
//! |---------|------------|--------------|
//! | 0       | `Wait`     | `wait`       |
//! | 1       | `MoveUp`   | `move_up`    |
//! | 2       | `MoveDown` | `move_down`  |
//! | 3       | `LoadUp`   | `load_up`    |
//! | 4       | `LoadDown` | `load_down`  |
//! | 5       | `Unload`   | `unload`     |

use std::fmt;
use std::str::FromStr;

use crate::{Floor, LiftError, LiftResult};

/// The single action an elevator performs during one step.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionKind {
    /// Stay put.  Counts neither as a correct nor an incorrect move.
    #[default]
    Wait,
    /// Move up one floor; clamped at the elevator's top bound.
    MoveUp,
    /// Move down one floor; clamped at the elevator's bottom bound.
    MoveDown,
    /// Board as many passengers as fit from the current floor's up-queue.
    LoadUp,
    /// Board as many passengers as fit from the current floor's down-queue.
    LoadDown,
    /// Let off every occupant whose destination is the current floor.
    Unload,
}

impl ActionKind {
    /// Every action, in ordinal order.
    pub const ALL: [ActionKind; 6] = [
        ActionKind::Wait,
        ActionKind::MoveUp,
        ActionKind::MoveDown,
        ActionKind::LoadUp,
        ActionKind::LoadDown,
        ActionKind::Unload,
    ];

    /// Number of distinct actions.
    pub const COUNT: usize = Self::ALL.len();

    /// Wire ordinal of this action.
    #[inline]
    pub fn ordinal(self) -> u8 {
        match self {
            ActionKind::Wait     => 0,
            ActionKind::MoveUp   => 1,
            ActionKind::MoveDown => 2,
            ActionKind::LoadUp   => 3,
            ActionKind::LoadDown => 4,
            ActionKind::Unload   => 5,
        }
    }

    /// Decode a wire ordinal.
    pub fn from_ordinal(ordinal: u8) -> LiftResult<Self> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or_else(|| LiftError::Parse(format!("action ordinal {ordinal} is not in 0..=5")))
    }

    /// Floor delta for movement actions, `None` for everything else.
    #[inline]
    pub fn move_delta(self) -> Option<i32> {
        match self {
            ActionKind::MoveUp   => Some(1),
            ActionKind::MoveDown => Some(-1),
            _                    => None,
        }
    }

    /// Queue direction for load actions, `None` for everything else.
    #[inline]
    pub fn load_direction(self) -> Option<Direction> {
        match self {
            ActionKind::LoadUp   => Some(Direction::Up),
            ActionKind::LoadDown => Some(Direction::Down),
            _                    => None,
        }
    }

    /// Snake-case label, used for CSV values and `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Wait     => "wait",
            ActionKind::MoveUp   => "move_up",
            ActionKind::MoveDown => "move_down",
            ActionKind::LoadUp   => "load_up",
            ActionKind::LoadDown => "load_down",
            ActionKind::Unload   => "unload",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = LiftError;

    fn from_str(s: &str) -> LiftResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| LiftError::Parse(format!("unknown action {s:?}")))
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Travel direction of a waiting passenger, and the queue they wait in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction of a trip from `start` to `destination`.
    ///
    /// Anything not strictly upward is `Down`; callers reject same-floor
    /// trips before they get here.
    #[inline]
    pub fn of_trip(start: Floor, destination: Floor) -> Direction {
        if destination > start { Direction::Up } else { Direction::Down }
    }

    /// Column index in hall-button arrays: up = 0, down = 1.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::Up   => 0,
            Direction::Down => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        })
    }
}
