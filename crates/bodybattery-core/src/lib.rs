//! # Body Battery Core Library
//!
//! Core library for the Body Battery daily energy journal client. It owns
//! the entry lifecycle and the synchronization contract between the list
//! view and the create/edit/delete operations; front ends (the CLI binary)
//! are thin rendering layers over it.
//!
//! ## Architecture
//!
//! - **Model**: [`EnergyEntry`] mirrors the wire format exactly; mutations
//!   send a validated [`EnergyDraft`]
//! - **API client**: [`JournalClient`] issues the four REST operations
//!   against one configured base URL, single-attempt, with a typed
//!   failure taxonomy
//! - **Store**: [`EntryStore`] holds the canonical list and refreshes it
//!   wholesale from the server -- the sole synchronization mechanism
//! - **Form**: [`EntryForm`] is the create/edit state machine with hard
//!   1-10 validation
//! - **Table**: the [`table`] module renders the list or its empty state
//! - **Removal**: [`RemovalConfirmation`] guards deletes behind a second
//!   step

pub mod client;
pub mod config;
pub mod entry;
pub mod error;
pub mod form;
pub mod removal;
pub mod store;
pub mod table;

pub use client::{ClientConfig, JournalClient, DEFAULT_BASE_URL};
pub use config::Config;
pub use entry::{EnergyDraft, EnergyEntry, RATING_RANGE};
pub use error::{ApiError, ConfigError, CoreError, ValidationError};
pub use form::{EntryForm, Field, FormMode};
pub use removal::RemovalConfirmation;
pub use store::EntryStore;
