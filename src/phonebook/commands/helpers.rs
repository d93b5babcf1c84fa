use crate::error::{PhonebookError, Result};
use crate::model::{ListedRecord, Record};
use log::warn;

/// Picks a search hit by the 1-based number the user typed.
pub fn select_listed<'a>(listed: &'a [ListedRecord], input: &str) -> Result<&'a ListedRecord> {
    let trimmed = input.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| PhonebookError::InvalidNumber(trimmed.to_string()))?;

    usize::try_from(number)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| listed.get(idx))
        .ok_or(PhonebookError::InvalidSelection(number.max(0) as usize))
}

/// Finds a previously listed record in a freshly loaded set.
///
/// The remembered position wins if it still holds the same contents;
/// otherwise the first record with identical contents is used.
pub fn locate(records: &[Record], listed: &ListedRecord) -> Result<usize> {
    if records.get(listed.position) == Some(&listed.record) {
        return Ok(listed.position);
    }

    let found = records
        .iter()
        .position(|r| r == &listed.record)
        .ok_or(PhonebookError::RecordNotFound)?;
    warn!(
        "record moved from position {} to {} since it was listed",
        listed.position, found
    );
    Ok(found)
}
