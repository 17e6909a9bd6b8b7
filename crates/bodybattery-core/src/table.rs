//! Table view model over the store's entry list.
//!
//! Pure rendering: either an informational empty-state row or one row per
//! entry in the order received, keyed by `pk`. The [`TableContent`] enum
//! makes "empty-state and data rows at the same time" unrepresentable.

use crate::entry::EnergyEntry;

/// Message shown when the journal has no entries.
pub const EMPTY_STATE_MESSAGE: &str = "Oops, no one here yet";

/// Column headers, in display order. The leading `Pk` column is the CLI's
/// edit/delete affordance: it is the id passed back to `edit`/`delete`.
pub const HEADERS: [&str; 5] = [
    "Pk",
    "Wellbeing",
    "Mental Stress",
    "Physical Stress",
    "Date Added",
];

/// One table row. Identity is the record's `pk`, never its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub pk: i64,
    pub wellbeing: i32,
    pub mental_stress: i32,
    pub physical_stress: i32,
    pub date_added: String,
}

/// Body of the journal table: the empty-state message or data rows,
/// never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableContent {
    /// Nothing to show; render [`EMPTY_STATE_MESSAGE`].
    Empty,
    Rows(Vec<Row>),
}

/// Build the table body from the current list, in the order received.
pub fn content(entries: &[EnergyEntry]) -> TableContent {
    if entries.is_empty() {
        return TableContent::Empty;
    }
    TableContent::Rows(
        entries
            .iter()
            .map(|e| Row {
                pk: e.pk,
                wellbeing: e.wellbeing,
                mental_stress: e.mental_stress,
                physical_stress: e.physical_stress,
                date_added: e.date_added.clone(),
            })
            .collect(),
    )
}

/// Render the journal as an aligned text table.
pub fn render(entries: &[EnergyEntry]) -> String {
    let rows = match content(entries) {
        TableContent::Rows(rows) => rows,
        TableContent::Empty => {
            let header = HEADERS.join("  ");
            return format!(
                "{header}\n{divider}\n{EMPTY_STATE_MESSAGE}\n",
                divider = "-".repeat(header.len())
            );
        }
    };

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|r| {
            [
                r.pk.to_string(),
                r.wellbeing.to_string(),
                r.mental_stress.to_string(),
                r.physical_stress.to_string(),
                r.date_added.clone(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pk: i64) -> EnergyEntry {
        EnergyEntry {
            pk,
            wellbeing: 7,
            mental_stress: 3,
            physical_stress: 2,
            date_added: "2024-01-01".into(),
        }
    }

    #[test]
    fn empty_list_renders_the_empty_state_only() {
        assert_eq!(content(&[]), TableContent::Empty);
        let rendered = render(&[]);
        assert!(rendered.contains(EMPTY_STATE_MESSAGE));
        assert!(rendered.contains("Wellbeing"));
    }

    #[test]
    fn non_empty_list_never_shows_the_empty_state() {
        let entries = [entry(1)];
        let rendered = render(&entries);
        assert!(!rendered.contains(EMPTY_STATE_MESSAGE));
        match content(&entries) {
            TableContent::Rows(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].pk, 1);
            }
            TableContent::Empty => panic!("expected rows"),
        }
    }

    #[test]
    fn rows_carry_the_four_display_fields_keyed_by_pk() {
        let entries = [entry(1)];
        let TableContent::Rows(rows) = content(&entries) else {
            panic!("expected rows");
        };
        assert_eq!(
            rows[0],
            Row {
                pk: 1,
                wellbeing: 7,
                mental_stress: 3,
                physical_stress: 2,
                date_added: "2024-01-01".into(),
            }
        );
    }

    #[test]
    fn rows_keep_server_order() {
        let entries = [entry(5), entry(2), entry(9)];
        let TableContent::Rows(rows) = content(&entries) else {
            panic!("expected rows");
        };
        let pks: Vec<i64> = rows.iter().map(|r| r.pk).collect();
        assert_eq!(pks, [5, 2, 9]);
    }

    #[test]
    fn rendered_table_shows_every_value() {
        let rendered = render(&[entry(1)]);
        for needle in ["1", "7", "3", "2", "2024-01-01"] {
            assert!(rendered.contains(needle), "missing {needle} in:\n{rendered}");
        }
    }
}
