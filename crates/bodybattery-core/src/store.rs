//! In-memory entry store, refreshed wholesale from the server.

use crate::client::JournalClient;
use crate::entry::EnergyEntry;
use crate::error::ApiError;

/// Canonical client-side list of journal entries.
///
/// The list is only ever replaced as a whole by [`refresh`](Self::refresh);
/// there is no partial-update path, so what the store holds is always a
/// full server snapshot, never a locally patched guess.
pub struct EntryStore {
    client: JournalClient,
    entries: Vec<EnergyEntry>,
}

impl EntryStore {
    /// Create an empty store; call [`refresh`](Self::refresh) to load it.
    pub fn new(client: JournalClient) -> Self {
        Self {
            client,
            entries: Vec::new(),
        }
    }

    /// Replace the held list with the server's current collection.
    ///
    /// On failure the previous list is kept untouched.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.entries = self.client.list_entries().await?;
        Ok(())
    }

    /// The client this store refreshes from.
    pub fn client(&self) -> &JournalClient {
        &self.client
    }

    /// Entries in server order.
    pub fn entries(&self) -> &[EnergyEntry] {
        &self.entries
    }

    /// Look up an entry by its server-assigned id.
    pub fn get(&self, pk: i64) -> Option<&EnergyEntry> {
        self.entries.iter().find(|e| e.pk == pk)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
