//! Two-step removal confirmation.

use crate::error::ApiError;
use crate::store::EntryStore;

/// Pending delete for a single record.
///
/// Opening the confirmation deletes nothing. The record is only removed by
/// [`confirm`](Self::confirm), which consumes the confirmation, so no
/// single action can destroy data. [`decline`](Self::decline) drops it and
/// leaves every piece of state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalConfirmation {
    pk: i64,
}

impl RemovalConfirmation {
    /// Open a confirmation for the record identified by `pk`.
    pub fn new(pk: i64) -> Self {
        Self { pk }
    }

    /// The record this confirmation addresses.
    pub fn pk(self) -> i64 {
        self.pk
    }

    /// Delete the record, then refresh the store.
    pub async fn confirm(self, store: &mut EntryStore) -> Result<(), ApiError> {
        store.client().delete_entry(self.pk).await?;
        store.refresh().await?;
        Ok(())
    }

    /// Abandon the delete; nothing is sent and nothing changes.
    pub fn decline(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_addresses_the_record() {
        let confirmation = RemovalConfirmation::new(12);
        assert_eq!(confirmation.pk(), 12);
        confirmation.decline();
    }
}
