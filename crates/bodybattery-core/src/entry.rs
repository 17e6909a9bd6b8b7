//! Energy journal entry model and wire shapes.
//!
//! Field names match the REST API exactly (`pk`, `wellbeing`,
//! `mental_stress`, `physical_stress`, `date_added`) and must not be
//! renamed: they are the wire contract.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Inclusive domain of every wellbeing/stress rating.
pub const RATING_RANGE: std::ops::RangeInclusive<i32> = 1..=10;

/// Sentinel `pk` for a record the server has not created yet.
pub const UNSAVED_PK: i64 = 0;

/// One journaled observation of wellbeing and stress levels for a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyEntry {
    /// Server-assigned identifier, unique and immutable.
    pub pk: i64,
    /// 1 (very unwell) to 10 (extremely well).
    pub wellbeing: i32,
    /// 1 (no stress) to 10 (extremely stressed).
    pub mental_stress: i32,
    /// 1 (no stress) to 10 (extremely stressed).
    pub physical_stress: i32,
    /// Server-assigned creation timestamp. Opaque to the client: never
    /// parsed, never sent back with a meaningful value.
    pub date_added: String,
}

/// Validated rating triple, the only thing a form submission can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyDraft {
    pub wellbeing: i32,
    pub mental_stress: i32,
    pub physical_stress: i32,
}

impl EnergyDraft {
    /// Build a draft, checking every rating against [`RATING_RANGE`].
    pub fn new(
        wellbeing: i32,
        mental_stress: i32,
        physical_stress: i32,
    ) -> Result<Self, ValidationError> {
        for (field, value) in [
            ("wellbeing", wellbeing),
            ("mental_stress", mental_stress),
            ("physical_stress", physical_stress),
        ] {
            if !RATING_RANGE.contains(&value) {
                return Err(ValidationError::OutOfRange { field, value });
            }
        }
        Ok(Self {
            wellbeing,
            mental_stress,
            physical_stress,
        })
    }
}

/// Request body for POST and PUT.
///
/// The server accepts the full record shape but assigns `pk` and
/// `date_added` itself, ignoring whatever the client sends for them.
#[derive(Debug, Serialize)]
pub struct EntryPayload {
    pub pk: i64,
    pub wellbeing: i32,
    pub mental_stress: i32,
    pub physical_stress: i32,
    pub date_added: String,
}

impl EntryPayload {
    /// Payload for creating a new record.
    pub fn create(draft: &EnergyDraft) -> Self {
        Self::with_pk(UNSAVED_PK, draft)
    }

    /// Payload for updating the record identified by `pk`.
    pub fn update(pk: i64, draft: &EnergyDraft) -> Self {
        Self::with_pk(pk, draft)
    }

    fn with_pk(pk: i64, draft: &EnergyDraft) -> Self {
        Self {
            pk,
            wellbeing: draft.wellbeing,
            mental_stress: draft.mental_stress,
            physical_stress: draft.physical_stress,
            date_added: String::new(),
        }
    }
}
