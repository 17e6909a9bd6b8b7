//! Energy journal commands -- list, show, add, edit, delete entries.
//!
//! Each mutating command drives the core form or removal confirmation and
//! re-renders the table from the refreshed store, so what the user sees is
//! always the server's current collection.

use clap::Subcommand;

use bodybattery_core::table;
use bodybattery_core::{
    ClientConfig, Config, EntryForm, EntryStore, Field, JournalClient, RemovalConfirmation,
};

#[derive(Subcommand)]
pub enum JournalAction {
    /// List all entries
    List {
        /// Print the raw server snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single entry
    Show {
        /// Entry id
        pk: i64,
    },
    /// Add a new entry
    Add {
        /// Wellbeing, 1 (very unwell) to 10 (extremely well)
        #[arg(long)]
        wellbeing: i32,
        /// Mental stress, 1 (none) to 10 (extreme)
        #[arg(long)]
        mental_stress: i32,
        /// Physical stress, 1 (none) to 10 (extreme)
        #[arg(long)]
        physical_stress: i32,
    },
    /// Edit an existing entry
    Edit {
        /// Entry id
        pk: i64,
        /// New wellbeing rating (1-10)
        #[arg(long)]
        wellbeing: Option<i32>,
        /// New mental stress rating (1-10)
        #[arg(long)]
        mental_stress: Option<i32>,
        /// New physical stress rating (1-10)
        #[arg(long)]
        physical_stress: Option<i32>,
    },
    /// Delete an entry (asks for confirmation)
    Delete {
        /// Entry id
        pk: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let client = JournalClient::new(&ClientConfig {
        base_url: config.api.base_url.clone(),
    })?;
    let mut store = EntryStore::new(client);

    match action {
        JournalAction::List { json } => {
            store.refresh().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(store.entries())?);
            } else {
                print!("{}", table::render(store.entries()));
            }
        }
        JournalAction::Show { pk } => {
            store.refresh().await?;
            match store.get(pk) {
                Some(entry) => println!("{}", serde_json::to_string_pretty(entry)?),
                None => return Err(format!("entry not found: {pk}").into()),
            }
        }
        JournalAction::Add {
            wellbeing,
            mental_stress,
            physical_stress,
        } => {
            let mut form = EntryForm::create();
            form.set(Field::Wellbeing, wellbeing);
            form.set(Field::MentalStress, mental_stress);
            form.set(Field::PhysicalStress, physical_stress);
            form.submit(&mut store).await?;
            println!("Entry added.");
            print!("{}", table::render(store.entries()));
        }
        JournalAction::Edit {
            pk,
            wellbeing,
            mental_stress,
            physical_stress,
        } => {
            store.refresh().await?;
            let entry = store.get(pk).ok_or_else(|| format!("entry not found: {pk}"))?;
            let mut form = EntryForm::edit(entry);
            if let Some(v) = wellbeing {
                form.set(Field::Wellbeing, v);
            }
            if let Some(v) = mental_stress {
                form.set(Field::MentalStress, v);
            }
            if let Some(v) = physical_stress {
                form.set(Field::PhysicalStress, v);
            }
            form.submit(&mut store).await?;
            println!("Entry {pk} updated.");
            print!("{}", table::render(store.entries()));
        }
        JournalAction::Delete { pk, yes } => {
            let confirmation = RemovalConfirmation::new(pk);
            if yes || prompt_confirm(pk)? {
                confirmation.confirm(&mut store).await?;
                println!("Entry {pk} deleted.");
                print!("{}", table::render(store.entries()));
            } else {
                confirmation.decline();
                println!("Aborted.");
            }
        }
    }

    Ok(())
}

fn prompt_confirm(pk: i64) -> Result<bool, Box<dyn std::error::Error>> {
    use std::io::Write;

    print!("Delete entry {pk}? [y/N] ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
