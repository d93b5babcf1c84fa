//! # Storage Layer
//!
//! The phonebook is persisted as a whole: every action loads the complete
//! record set, and every mutation writes the complete set back. The
//! [`DataStore`] trait captures exactly that contract.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production CSV storage
//!   - One header row with the six field names, one row per record
//!   - Whole-file overwrite on save (not atomic, no backup)
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Fixtures for pre-populated stores
//!
//! ## Storage Format
//!
//! ```text
//! Surname,First Name,Patronymic,Organization,Work Phone,Personal Phone
//! Ivanov,Ivan,Ivanovich,"Acme, Inc.",101,+7 900 000 00 00
//! ```

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for record storage.
pub trait DataStore {
    /// Load the full record set. A store with nothing saved yet yields an empty set.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the full record set.
    fn save(&mut self, records: &[Record]) -> Result<()>;
}
