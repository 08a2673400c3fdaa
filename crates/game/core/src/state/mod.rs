//! Battle state: attacks, creatures and the players that field them.
//!
//! Everything here is plain data plus the few invariant-preserving mutators
//! combat needs. Rules that involve two creatures live in [`crate::combat`].

mod attack;
mod creature;
mod meter;
mod participant;

pub use attack::Attack;
pub use creature::{Creature, CreatureTemplate, TemplateError};
pub use meter::ResourceMeter;
pub use participant::Participant;
