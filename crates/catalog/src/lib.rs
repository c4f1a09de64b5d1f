//! The static service catalog of the Neuronova site.
//!
//! Everything in this crate is baked-in data: categorized services with
//! their price pairs, bundled packs, and the diagnostic quiz questions.
//! Prices are stored in both currencies; the FC side is a fixed-rate
//! conversion written into the data, never computed at runtime.

#![deny(missing_docs)]

mod packs;
mod quiz;
mod services;
mod types;

pub use packs::{find_pack, packs};
pub use quiz::quiz_questions;
pub use services::{categories, find_service};
pub use types::*;

/// The fixed conversion rate baked into every catalog price pair.
pub const FC_PER_USD: u64 = 2200;
