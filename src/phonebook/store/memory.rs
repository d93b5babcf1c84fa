use super::DataStore;
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `save` has been called. Lets tests assert that an
    /// aborted action never wrote.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Field;

    pub fn contact(surname: &str, first_name: &str) -> Record {
        Record::from_pairs([(Field::Surname, surname), (Field::FirstName, first_name)])
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let record = contact(&format!("Surname{}", i + 1), &format!("Name{}", i + 1));
                self.store.records.push(record);
            }
            self
        }

        pub fn with_record(mut self, record: Record) -> Self {
            self.store.records.push(record);
            self
        }

        pub fn with_contact(self, surname: &str, first_name: &str) -> Self {
            self.with_record(contact(surname, first_name))
        }
    }
}
