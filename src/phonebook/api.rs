//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every phonebook operation, whatever UI drives it.
//!
//! It dispatches to `commands/*.rs`, holds the session state (the current
//! page size), and returns structured `CmdResult`s. It never prompts, prints,
//! or formats.
//!
//! `PhonebookApi<S: DataStore>` is generic over the storage backend:
//! - Production: `PhonebookApi<FileStore>`
//! - Testing: `PhonebookApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::matcher::Criteria;
use crate::model::{ListedRecord, Record};
use crate::pagination::PageSize;
use crate::store::DataStore;

pub struct PhonebookApi<S: DataStore> {
    store: S,
    page_size: PageSize,
}

impl<S: DataStore> PhonebookApi<S> {
    pub fn new(store: S, page_size: PageSize) -> Self {
        Self { store, page_size }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_pages(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, self.page_size)
    }

    pub fn add_record(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, record)
    }

    pub fn search_records(&self, criteria: &Criteria) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, criteria)
    }

    pub fn select<'a>(&self, listed: &'a [ListedRecord], input: &str) -> Result<&'a ListedRecord> {
        commands::helpers::select_listed(listed, input)
    }

    pub fn update_record(
        &mut self,
        listed: &ListedRecord,
        updated: Record,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, listed, updated)
    }

    pub fn delete_record(&mut self, listed: &ListedRecord) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, listed)
    }

    /// Parses and applies a new page size. On error the current size is kept.
    pub fn set_page_size(&mut self, input: &str) -> Result<commands::CmdResult> {
        let result = commands::page_size::run(self.page_size, input)?;
        if let Some(new_size) = result.page_size {
            self.page_size = new_size;
        }
        Ok(result)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;
    use crate::store::memory::fixtures::{contact, StoreFixture};
    use crate::store::memory::InMemoryStore;

    fn api() -> PhonebookApi<InMemoryStore> {
        PhonebookApi::new(InMemoryStore::new(), PageSize::default())
    }

    #[test]
    fn set_page_size_updates_session_state() {
        let mut api = api();
        api.set_page_size("10").unwrap();
        assert_eq!(api.page_size().get(), 10);
    }

    #[test]
    fn invalid_page_size_keeps_previous_value() {
        let mut api = api();
        for input in ["0", "-3", "abc"] {
            assert!(api.set_page_size(input).is_err());
            assert_eq!(api.page_size().get(), 5);
        }
    }

    #[test]
    fn list_pages_uses_current_page_size() {
        let store = StoreFixture::new().with_contacts(4).store;
        let mut api = PhonebookApi::new(store, PageSize::default());
        assert_eq!(api.list_pages().unwrap().pages.len(), 1);

        api.set_page_size("3").unwrap();
        assert_eq!(api.list_pages().unwrap().pages.len(), 2);
    }

    #[test]
    fn independent_instances_keep_independent_page_sizes() {
        let mut first = api();
        let second = api();
        first.set_page_size("2").unwrap();
        assert_eq!(first.page_size().get(), 2);
        assert_eq!(second.page_size().get(), 5);
    }

    #[test]
    fn search_select_and_update_flow() {
        let mut api = api();
        api.add_record(contact("Ivanov", "Ivan")).unwrap();
        api.add_record(contact("Petrov", "Petr")).unwrap();

        let hits = api
            .search_records(&Criteria::new().with(Field::Surname, "iva"))
            .unwrap()
            .listed_records;
        let selected = api.select(&hits, "1").unwrap().clone();
        let updated = selected.record.with_edits([(Field::FirstName, "Ivan II")]);
        api.update_record(&selected, updated).unwrap();

        let records = api.store().load().unwrap();
        assert_eq!(records[0].first_name, "Ivan II");
        assert_eq!(records[1], contact("Petrov", "Petr"));
    }
}
