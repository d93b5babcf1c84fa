use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::pagination::PageSize;
use log::debug;

/// Validates `input` as a new page size. The caller owns the setting and
/// applies the returned size; on error nothing changes.
pub fn run(current: PageSize, input: &str) -> Result<CmdResult> {
    let new_size: PageSize = input.parse()?;
    debug!("page size {} -> {}", current, new_size);
    Ok(CmdResult::default()
        .with_page_size(new_size)
        .with_message(CmdMessage::success(format!(
            "Page size set to {}.",
            new_size
        ))))
}
