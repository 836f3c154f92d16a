//! Derive macros from derive_more used across the crate.

pub use derive_more::{Deref, Display, Into};
