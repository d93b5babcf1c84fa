use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::matcher::{filter_listed, Criteria};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, criteria: &Criteria) -> Result<CmdResult> {
    let records = store.load()?;
    let listed = filter_listed(records, criteria);

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No records found."));
    }
    Ok(result.with_listed_records(listed))
}
