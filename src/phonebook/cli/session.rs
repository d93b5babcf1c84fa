use super::render::{print_menu, print_messages, print_numbered, print_page, print_records};
use log::error;
use phonebook::api::{CmdMessage, PhonebookApi};
use phonebook::error::{PhonebookError, Result};
use phonebook::matcher::Criteria;
use phonebook::model::{Field, ListedRecord, Record};
use phonebook::store::DataStore;
use std::io::{BufRead, ErrorKind, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Display,
    Add,
    Edit,
    Search,
    Delete,
    ChangePageSize,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Display),
            "2" => Some(MenuChoice::Add),
            "3" => Some(MenuChoice::Edit),
            "4" => Some(MenuChoice::Search),
            "5" => Some(MenuChoice::Delete),
            "6" => Some(MenuChoice::ChangePageSize),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// The interactive menu loop. Reads one line per prompt from `input` and
/// writes everything to `output`.
pub(super) struct Session<S: DataStore, R: BufRead, W: Write> {
    api: PhonebookApi<S>,
    input: R,
    output: W,
}

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    pub(super) fn new(api: PhonebookApi<S>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    /// Runs until the user picks Exit or input ends.
    pub(super) fn run(&mut self) -> Result<()> {
        loop {
            print_menu(&mut self.output)?;
            let line = match self.prompt("Choose an action: ") {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(PhonebookError::Io(e)) if e.kind() == ErrorKind::InvalidData => {
                    String::new()
                }
                Err(e) => return Err(e),
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => {
                    if let Err(e) = self.dispatch(choice) {
                        self.report(e)?;
                    }
                }
                None => print_messages(
                    &mut self.output,
                    &[CmdMessage::error("Invalid choice. Try again.")],
                )?,
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Display => self.handle_display(),
            MenuChoice::Add => self.handle_add(),
            MenuChoice::Edit => self.handle_edit(),
            MenuChoice::Search => self.handle_search(),
            MenuChoice::Delete => self.handle_delete(),
            MenuChoice::ChangePageSize => self.handle_page_size(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn report(&mut self, e: PhonebookError) -> Result<()> {
        let content = if e.is_user_input() || matches!(e, PhonebookError::RecordNotFound) {
            e.to_string()
        } else {
            error!("{}", e);
            format!("Error: {}", e)
        };
        print_messages(&mut self.output, &[CmdMessage::error(content)])?;
        Ok(())
    }

    fn handle_display(&mut self) -> Result<()> {
        let result = self.api.list_pages()?;
        for page in &result.pages {
            print_page(&mut self.output, page)?;
            self.prompt("Press Enter to continue...")?;
        }
        print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    fn handle_add(&mut self) -> Result<()> {
        let mut record = Record::default();
        for field in Field::ALL {
            let Some(value) = self.prompt(&format!("{}: ", field))? else {
                return Ok(());
            };
            record.set(field, value);
        }
        let result = self.api.add_record(record)?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    fn handle_search(&mut self) -> Result<()> {
        let criteria = self.read_criteria()?;
        let result = self.api.search_records(&criteria)?;
        if !result.listed_records.is_empty() {
            let records: Vec<Record> = result
                .listed_records
                .iter()
                .map(|l| l.record.clone())
                .collect();
            print_records(&mut self.output, &records)?;
        }
        print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    fn handle_edit(&mut self) -> Result<()> {
        let Some(selected) = self.search_and_select()? else {
            return Ok(());
        };

        let mut edits = Vec::with_capacity(Field::ALL.len());
        for field in Field::ALL {
            let label = format!("{} [{}]: ", field, selected.record.get(field));
            let Some(input) = self.prompt(&label)? else {
                return Ok(());
            };
            edits.push((field, input));
        }
        let updated = selected.record.with_edits(edits);

        let result = self.api.update_record(&selected, updated)?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    fn handle_delete(&mut self) -> Result<()> {
        let Some(selected) = self.search_and_select()? else {
            return Ok(());
        };
        let result = self.api.delete_record(&selected)?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    fn handle_page_size(&mut self) -> Result<()> {
        let input = self.prompt_value("Enter new page size: ")?;
        let result = self.api.set_page_size(&input)?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    /// Shared first half of edit and delete: search, show numbered hits,
    /// read a selection. `None` when nothing matched.
    fn search_and_select(&mut self) -> Result<Option<ListedRecord>> {
        let criteria = self.read_criteria()?;
        let result = self.api.search_records(&criteria)?;
        if result.listed_records.is_empty() {
            print_messages(&mut self.output, &result.messages)?;
            return Ok(None);
        }

        let records: Vec<Record> = result
            .listed_records
            .iter()
            .map(|l| l.record.clone())
            .collect();
        print_numbered(&mut self.output, &records)?;

        let input = self.prompt_value("Select record number: ")?;
        let selected = self.api.select(&result.listed_records, &input)?;
        Ok(Some(selected.clone()))
    }

    fn read_criteria(&mut self) -> Result<Criteria> {
        writeln!(
            self.output,
            "Enter search criteria. Leave a field blank to skip it."
        )?;
        let mut criteria = Criteria::new();
        for field in Field::ALL {
            let prefix = self.prompt_value(&format!("{}: ", field))?;
            criteria.set(field, &prefix);
        }
        Ok(criteria)
    }

    /// Prints `label` and reads one line without its line ending.
    /// `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Like [`Self::prompt`], treating end of input as a blank answer.
    fn prompt_value(&mut self, label: &str) -> Result<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    #[cfg(test)]
    fn api(&self) -> &PhonebookApi<S> {
        &self.api
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook::pagination::PageSize;
    use phonebook::store::memory::InMemoryStore;
    use std::io::Cursor;

    type TestSession = Session<InMemoryStore, Cursor<Vec<u8>>, Vec<u8>>;

    fn contact(surname: &str, first_name: &str) -> Record {
        Record::from_pairs([(Field::Surname, surname), (Field::FirstName, first_name)])
    }

    fn session_over(store: InMemoryStore, input: &[u8]) -> TestSession {
        let api = PhonebookApi::new(store, PageSize::default());
        let mut session = Session::new(api, Cursor::new(input.to_vec()), Vec::new());
        session.run().unwrap();
        session
    }

    fn store_with(records: &[Record]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.save(records).unwrap();
        store
    }

    fn run_session(store: InMemoryStore, script: &str) -> TestSession {
        session_over(store, script.as_bytes())
    }

    fn output_of(session: &TestSession) -> String {
        String::from_utf8(session.output().clone()).unwrap()
    }

    fn records_of(session: &TestSession) -> Vec<Record> {
        session.api().store().load().unwrap()
    }

    #[test]
    fn exit_choice_ends_session() {
        let session = run_session(InMemoryStore::new(), "0\n1\n");
        let out = output_of(&session);
        assert_eq!(out.matches("Choose an action: ").count(), 1);
    }

    #[test]
    fn end_of_input_ends_session() {
        let session = run_session(InMemoryStore::new(), "");
        assert!(output_of(&session).contains("Phonebook"));
    }

    #[test]
    fn unknown_choice_is_reported() {
        let session = run_session(InMemoryStore::new(), "9\n0\n");
        assert!(output_of(&session).contains("Invalid choice. Try again."));
    }

    #[test]
    fn add_prompts_each_field_and_saves() {
        let script = "2\nIvanov\nIvan\nIvanovich\nAcme\n101\n555\n0\n";
        let session = run_session(InMemoryStore::new(), script);

        let out = output_of(&session);
        for field in Field::ALL {
            assert!(out.contains(&format!("{}: ", field)));
        }
        assert!(out.contains("Record added."));
        assert_eq!(
            records_of(&session)[0].values(),
            ["Ivanov", "Ivan", "Ivanovich", "Acme", "101", "555"]
        );
    }

    #[test]
    fn add_cut_short_by_end_of_input_saves_nothing() {
        let session = run_session(InMemoryStore::new(), "2\nIvanov\n");

        assert!(!output_of(&session).contains("Record added."));
        assert_eq!(session.api().store().save_count(), 0);
        assert!(records_of(&session).is_empty());
    }

    #[test]
    fn edit_cut_short_by_end_of_input_saves_nothing() {
        let store = store_with(&[contact("Ivanov", "Ivan")]);
        let session = run_session(store, "3\n\n\n\n\n\n\n1\nPetrov\n");

        assert!(!output_of(&session).contains("Record updated."));
        assert_eq!(session.api().store().save_count(), 1);
        assert_eq!(records_of(&session), vec![contact("Ivanov", "Ivan")]);
    }

    #[test]
    fn undecodable_menu_input_is_an_invalid_choice() {
        let session = session_over(InMemoryStore::new(), b"\xff\n0\n");

        let out = output_of(&session);
        assert!(out.contains("Invalid choice. Try again."));
        assert_eq!(out.matches("Choose an action: ").count(), 2);
    }

    #[test]
    fn display_waits_between_pages() {
        let records: Vec<Record> = (1..=7).map(|i| contact(&format!("S{}", i), "N")).collect();
        let session = run_session(store_with(&records), "1\n\n\n0\n");

        let out = output_of(&session);
        assert!(out.contains("Page 1 of 2"));
        assert!(out.contains("Page 2 of 2"));
        assert_eq!(out.matches("Press Enter to continue...").count(), 2);
        assert!(out.find("S5 ").unwrap() < out.find("Page 2 of 2").unwrap());
        assert!(out.find("S6 ").unwrap() > out.find("Page 2 of 2").unwrap());
    }

    #[test]
    fn display_of_empty_store_prints_no_pages() {
        let session = run_session(InMemoryStore::new(), "1\n0\n");
        let out = output_of(&session);
        assert!(!out.contains("Page "));
        assert!(!out.contains("Press Enter"));
    }

    #[test]
    fn search_prints_matches() {
        let store = store_with(&[contact("Ivanov", "Ivan"), contact("Petrov", "Petr")]);
        let session = run_session(store, "4\niva\n\n\n\n\n\n0\n");

        let out = output_of(&session);
        assert!(out.contains("Ivanov"));
        assert!(!out.contains("Petrov"));
    }

    #[test]
    fn search_without_matches_reports_not_found() {
        let store = store_with(&[contact("Ivanov", "Ivan")]);
        let session = run_session(store, "4\nzz\n\n\n\n\n\n0\n");
        assert!(output_of(&session).contains("No records found."));
    }

    #[test]
    fn edit_keeps_blank_fields_and_replaces_others() {
        let store = store_with(&[contact("Ivanov", "Ivan"), contact("Petrov", "Petr")]);
        let script = "3\npet\n\n\n\n\n\n1\n\n  Pyotr  \n\n\n\n\n0\n";
        let session = run_session(store, script);

        let out = output_of(&session);
        assert!(out.contains("First Name [Petr]: "));
        assert!(out.contains("Record updated."));
        assert_eq!(
            records_of(&session),
            vec![contact("Ivanov", "Ivan"), contact("Petrov", "Pyotr")]
        );
    }

    #[test]
    fn edit_with_out_of_range_selection_changes_nothing() {
        let store = store_with(&[contact("Ivanov", "Ivan")]);
        let session = run_session(store, "3\n\n\n\n\n\n\n2\n0\n");

        assert!(output_of(&session).contains("Invalid record number."));
        assert_eq!(session.api().store().save_count(), 1);
    }

    #[test]
    fn delete_with_non_numeric_selection_changes_nothing() {
        let store = store_with(&[contact("Ivanov", "Ivan")]);
        let session = run_session(store, "5\n\n\n\n\n\n\nfirst\n0\n");

        assert!(output_of(&session).contains("Invalid input. Please enter a number."));
        assert_eq!(records_of(&session), vec![contact("Ivanov", "Ivan")]);
        assert_eq!(session.api().store().save_count(), 1);
    }

    #[test]
    fn delete_without_matches_skips_selection() {
        let store = store_with(&[contact("Ivanov", "Ivan")]);
        let session = run_session(store, "5\nzz\n\n\n\n\n\n0\n");

        let out = output_of(&session);
        assert!(out.contains("No records found."));
        assert!(!out.contains("Select record number"));
    }

    #[test]
    fn change_page_size_validates_input() {
        let session = run_session(InMemoryStore::new(), "6\n0\n6\n-3\n6\nabc\n0\n");
        let out = output_of(&session);
        assert_eq!(out.matches("Page size must be a positive number.").count(), 2);
        assert!(out.contains("Invalid input. Page size unchanged."));
        assert_eq!(session.api().page_size().get(), 5);

        let session = run_session(InMemoryStore::new(), "6\n10\n0\n");
        assert_eq!(session.api().page_size().get(), 10);
    }

    #[test]
    fn add_display_search_delete_round_trip() {
        let script = concat!(
            "2\nIvanov\nIvan\n\n\n\n\n",
            "1\n\n",
            "4\niva\n\n\n\n\n\n",
            "5\niva\n\n\n\n\n\n1\n",
            "1\n",
            "0\n"
        );
        let session = run_session(InMemoryStore::new(), script);

        let out = output_of(&session);
        assert_eq!(out.matches("Page 1 of 1").count(), 1);
        assert!(out.contains("Ivanov  | Ivan "));
        assert!(out.contains("Record deleted."));
        assert!(records_of(&session).is_empty());
    }
}
