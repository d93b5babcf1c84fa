use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ListedRecord;
use crate::store::DataStore;
use log::info;

use super::helpers::locate;

pub fn run<S: DataStore>(store: &mut S, listed: &ListedRecord) -> Result<CmdResult> {
    let mut records = store.load()?;
    let position = locate(&records, listed)?;
    records.remove(position);
    store.save(&records)?;

    info!("deleted record at position {}", position);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Record deleted.")))
}
