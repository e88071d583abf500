//! ocean-core - Core library for Ocean Notes
//!
//! This crate contains the note models, list filtering, the REST client for
//! the notes service, and the application shell state machine used by the
//! desktop client.

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod notify;
pub mod shell;

pub use error::{Error, Result};
pub use models::{Note, NoteDraft, NoteId};
