use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ListedRecord, Record};
use crate::store::DataStore;
use log::info;

use super::helpers::locate;

/// Replaces a previously listed record with `updated`, in place.
pub fn run<S: DataStore>(
    store: &mut S,
    listed: &ListedRecord,
    updated: Record,
) -> Result<CmdResult> {
    let mut records = store.load()?;
    let position = locate(&records, listed)?;
    records[position] = updated;
    store.save(&records)?;

    info!("updated record at position {}", position);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Record updated.")))
}
