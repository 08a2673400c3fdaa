//! Combat resolution system.
//!
//! Pure functions that move health and stamina between two creatures.
//! Nothing here knows about turns; [`crate::engine::Match`] decides who may
//! act and calls into this module.
//!
//! # Core Functions
//!
//! - `resolve_attack`: damage to the target, plus recoil when exhausted
//! - `reduce_stamina`: pay an attack's energy cost (clamped to 0)
//! - `perform_attack`: index lookup, fainted-attacker guard, then both of
//!   the above in order

pub mod damage;
pub mod resolve;
pub mod result;

pub use damage::exhausted_damage;
pub use resolve::{ActionError, perform_attack, reduce_stamina, resolve_attack};
pub use result::{AttackOutcome, AttackReport};
