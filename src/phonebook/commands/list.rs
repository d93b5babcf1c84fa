use crate::commands::CmdResult;
use crate::error::Result;
use crate::pagination::{paginate, PageSize};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, page_size: PageSize) -> Result<CmdResult> {
    let records = store.load()?;
    let pages = paginate(&records, page_size);
    Ok(CmdResult::default()
        .with_pages(pages)
        .with_page_size(page_size))
}
