//! Entry form state machine for creating and editing journal entries.
//!
//! The form is an explicit state object, independent of any UI lifecycle:
//! the CLI drives it from flags, a GUI could drive it from inputs. Field
//! edits go through a reducer keyed by field name, and a submission is
//! only possible once every rating passes hard 1-10 validation.

use crate::entry::{EnergyDraft, EnergyEntry};
use crate::error::{CoreError, ValidationError};
use crate::store::EntryStore;

/// Which mutation a form submission will issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Blank form; submit creates a new record.
    Create,
    /// Seeded from an existing record; submit updates it.
    Edit { pk: i64 },
}

/// Editable form fields, addressed by wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Wellbeing,
    MentalStress,
    PhysicalStress,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Wellbeing, Field::MentalStress, Field::PhysicalStress];

    /// Wire-format name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::Wellbeing => "wellbeing",
            Field::MentalStress => "mental_stress",
            Field::PhysicalStress => "physical_stress",
        }
    }

    /// Resolve a wire-format name.
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        match name {
            "wellbeing" => Ok(Field::Wellbeing),
            "mental_stress" => Ok(Field::MentalStress),
            "physical_stress" => Ok(Field::PhysicalStress),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

/// Controlled input state for one entry, new or existing.
///
/// Submitting issues exactly one create or update call and, on success,
/// exactly one store refresh; the caller then drops the form ("closes" it).
/// On any failure the field state is left intact so the form can stay open
/// for a retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    mode: FormMode,
    wellbeing: Option<i32>,
    mental_stress: Option<i32>,
    physical_stress: Option<i32>,
}

impl EntryForm {
    /// Blank form for a new entry.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            wellbeing: None,
            mental_stress: None,
            physical_stress: None,
        }
    }

    /// Form seeded from an existing record's current values.
    ///
    /// Only `pk` and the three ratings are taken; `date_added` stays with
    /// the server.
    pub fn edit(entry: &EnergyEntry) -> Self {
        Self {
            mode: FormMode::Edit { pk: entry.pk },
            wellbeing: Some(entry.wellbeing),
            mental_stress: Some(entry.mental_stress),
            physical_stress: Some(entry.physical_stress),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Overwrite exactly one field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: i32) {
        match field {
            Field::Wellbeing => self.wellbeing = Some(value),
            Field::MentalStress => self.mental_stress = Some(value),
            Field::PhysicalStress => self.physical_stress = Some(value),
        }
    }

    /// Reducer keyed by wire field name; rejects names that are not part
    /// of the entry shape.
    pub fn apply(&mut self, name: &str, value: i32) -> Result<(), ValidationError> {
        self.set(Field::parse(name)?, value);
        Ok(())
    }

    /// Current value of a field, if one has been entered.
    pub fn get(&self, field: Field) -> Option<i32> {
        match field {
            Field::Wellbeing => self.wellbeing,
            Field::MentalStress => self.mental_stress,
            Field::PhysicalStress => self.physical_stress,
        }
    }

    /// Check that all three ratings are present and in range, producing
    /// the draft a submission will send.
    pub fn validate(&self) -> Result<EnergyDraft, ValidationError> {
        EnergyDraft::new(
            self.require(Field::Wellbeing)?,
            self.require(Field::MentalStress)?,
            self.require(Field::PhysicalStress)?,
        )
    }

    fn require(&self, field: Field) -> Result<i32, ValidationError> {
        self.get(field).ok_or(ValidationError::Missing {
            field: field.name(),
        })
    }

    /// Validate, issue the create or update call, then refresh the store.
    ///
    /// Nothing is sent if validation fails. A failed call leaves the
    /// store's list unchanged, and success is only reported after the
    /// refresh completed -- the list the caller renders next is the
    /// server's current full collection.
    pub async fn submit(&self, store: &mut EntryStore) -> Result<(), CoreError> {
        let draft = self.validate()?;
        match self.mode {
            FormMode::Create => store.client().create_entry(&draft).await?,
            FormMode::Edit { pk } => store.client().update_entry(pk, &draft).await?,
        }
        store.refresh().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_entry() -> EnergyEntry {
        EnergyEntry {
            pk: 7,
            wellbeing: 6,
            mental_stress: 2,
            physical_stress: 4,
            date_added: "2024-01-15T08:00:00Z".into(),
        }
    }

    #[test]
    fn create_form_starts_blank() {
        let form = EntryForm::create();
        assert_eq!(form.mode(), FormMode::Create);
        for field in Field::ALL {
            assert_eq!(form.get(field), None);
        }
    }

    #[test]
    fn edit_form_is_seeded_from_the_record() {
        let form = EntryForm::edit(&sample_entry());
        assert_eq!(form.mode(), FormMode::Edit { pk: 7 });
        assert_eq!(form.get(Field::Wellbeing), Some(6));
        assert_eq!(form.get(Field::MentalStress), Some(2));
        assert_eq!(form.get(Field::PhysicalStress), Some(4));
    }

    #[test]
    fn set_overwrites_exactly_one_field() {
        let mut form = EntryForm::edit(&sample_entry());
        form.set(Field::MentalStress, 9);
        assert_eq!(form.get(Field::Wellbeing), Some(6));
        assert_eq!(form.get(Field::MentalStress), Some(9));
        assert_eq!(form.get(Field::PhysicalStress), Some(4));
    }

    #[test]
    fn apply_resolves_wire_names() {
        let mut form = EntryForm::create();
        form.apply("wellbeing", 5).unwrap();
        form.apply("mental_stress", 4).unwrap();
        form.apply("physical_stress", 6).unwrap();
        let draft = form.validate().unwrap();
        assert_eq!((draft.wellbeing, draft.mental_stress, draft.physical_stress), (5, 4, 6));
    }

    #[test]
    fn apply_rejects_unknown_names() {
        let mut form = EntryForm::create();
        assert_eq!(
            form.apply("date_added", 1),
            Err(ValidationError::UnknownField("date_added".into()))
        );
    }

    #[test]
    fn blank_fields_fail_validation() {
        let mut form = EntryForm::create();
        form.set(Field::Wellbeing, 5);
        assert_eq!(
            form.validate(),
            Err(ValidationError::Missing {
                field: "mental_stress"
            })
        );
    }

    proptest! {
        #[test]
        fn any_in_range_triple_validates(w in 1..=10i32, m in 1..=10i32, p in 1..=10i32) {
            let mut form = EntryForm::create();
            form.set(Field::Wellbeing, w);
            form.set(Field::MentalStress, m);
            form.set(Field::PhysicalStress, p);
            let draft = form.validate().unwrap();
            prop_assert_eq!((draft.wellbeing, draft.mental_stress, draft.physical_stress), (w, m, p));
        }

        #[test]
        fn any_out_of_range_rating_is_rejected(
            value in prop_oneof![i32::MIN..=0, 11..=i32::MAX],
            slot in 0usize..3,
        ) {
            let mut form = EntryForm::create();
            for field in Field::ALL {
                form.set(field, 5);
            }
            form.set(Field::ALL[slot], value);
            prop_assert_eq!(
                form.validate(),
                Err(ValidationError::OutOfRange {
                    field: Field::ALL[slot].name(),
                    value,
                })
            );
        }
    }
}
