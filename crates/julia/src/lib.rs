//! An out-of-the-box assembly of the Neuronova assistant.
//!
//! The crate wires the conversation engine to the HTTP backend and ships
//! a small terminal client for trying it out. You can also use it as a
//! library to bring the assistant into your own host apps.

#![deny(missing_docs)]

mod session;

pub use session::{Session, SessionBuilder};

/// Re-exports of [`julia_core`] crate.
pub mod core {
    pub use julia_core::*;
}

/// Re-exports of [`julia_catalog`] crate.
pub mod catalog {
    pub use julia_catalog::*;
}
