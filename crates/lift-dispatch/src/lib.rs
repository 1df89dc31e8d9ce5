//! `lift-dispatch`: the controller side of the simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`context`]  | `DispatchContext<'a>`: read-only step snapshot                  |
//! | [`policy`]   | `DispatchPolicy` trait                                          |
//! | [`baseline`] | `WaitPolicy`, `RandomPolicy`                                    |
//! | [`nearest`]  | `NearestCallPolicy`: rider-first, nearest-call heuristic        |
//! | [`error`]    | `DispatchError`, `DispatchResult<T>`                            |
//!
//! # Design notes
//!
//! A policy reads, the building writes.  Each step the driver:
//!
//! 1. builds a `DispatchContext` from the building and its observation;
//! 2. asks the policy for one `ActionKind` per elevator;
//! 3. hands the actions to `Building::execute_step`.
//!
//! Policies are `&self` only, so a single instance can drive many
//! independent episodes in parallel.

pub mod baseline;
pub mod context;
pub mod error;
pub mod nearest;
pub mod policy;


pub use baseline::{RandomPolicy, WaitPolicy};
pub use context::DispatchContext;
pub use error::{DispatchError, DispatchResult};
pub use nearest::NearestCallPolicy;
pub use policy::DispatchPolicy;
