use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;
use log::info;

pub fn run<S: DataStore>(store: &mut S, record: Record) -> Result<CmdResult> {
    let mut records = store.load()?;
    records.push(record);
    store.save(&records)?;

    info!("added record at position {}", records.len() - 1);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Record added.")))
}
