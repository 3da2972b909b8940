//! Domain layer for the process store.
//!
//! Zero internal dependencies so it can be used by both the repository
//! layer and any future CLI or worker tooling.

pub mod error;
pub mod grid;
pub mod pagination;
pub mod process;
pub mod types;
