use crate::error::{PhonebookError, Result};
use crate::model::Record;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Number of records shown per page. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(PhonebookError::NonPositivePageSize(0));
        }
        Ok(Self(size))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageSize {
    type Err = PhonebookError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let n: i64 = trimmed
            .parse()
            .map_err(|_| PhonebookError::InvalidPageSizeInput(trimmed.to_string()))?;
        if n <= 0 {
            return Err(PhonebookError::NonPositivePageSize(n));
        }
        let size = usize::try_from(n)
            .map_err(|_| PhonebookError::InvalidPageSizeInput(trimmed.to_string()))?;
        Ok(Self(size))
    }
}

/// One page of records, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub total: usize,
    pub records: Vec<Record>,
}

/// Ceiling division. An empty set has zero pages.
pub fn page_count(total: usize, page_size: PageSize) -> usize {
    total.div_ceil(page_size.get())
}

/// The records on page `index` (zero-based), clipped to bounds.
pub fn page(records: &[Record], index: usize, page_size: PageSize) -> &[Record] {
    let size = page_size.get();
    let start = index.saturating_mul(size).min(records.len());
    let end = start.saturating_add(size).min(records.len());
    &records[start..end]
}

pub fn paginate(records: &[Record], page_size: PageSize) -> Vec<Page> {
    let total = page_count(records.len(), page_size);
    (0..total)
        .map(|index| Page {
            number: index + 1,
            total,
            records: page(records, index, page_size).to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    fn size(n: usize) -> PageSize {
        PageSize::new(n).unwrap()
    }

    fn numbered(count: usize) -> Vec<Record> {
        (0..count)
            .map(|i| Record::from_pairs([(Field::Surname, i.to_string())]))
            .collect()
    }

    #[test]
    fn page_count_uses_ceiling_division() {
        assert_eq!(page_count(0, size(5)), 0);
        assert_eq!(page_count(5, size(5)), 1);
        assert_eq!(page_count(6, size(5)), 2);
        assert_eq!(page_count(1, size(1)), 1);
    }

    #[test]
    fn second_page_of_seven_holds_last_two() {
        let records = numbered(7);
        let second = page(&records, 1, size(5));
        let surnames: Vec<_> = second.iter().map(|r| r.surname.as_str()).collect();
        assert_eq!(surnames, vec!["5", "6"]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let records = numbered(3);
        assert!(page(&records, 4, size(5)).is_empty());
        assert!(page(&records, usize::MAX, size(5)).is_empty());
    }

    #[test]
    fn paginate_numbers_pages() {
        let pages = paginate(&numbered(11), size(5));
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].number, 3);
        assert_eq!(pages[2].total, 3);
        assert_eq!(pages[2].records.len(), 1);
    }

    #[test]
    fn paginate_empty_set_has_no_pages() {
        assert!(paginate(&[], PageSize::default()).is_empty());
    }

    #[test]
    fn default_page_size_is_five() {
        assert_eq!(PageSize::default().get(), 5);
    }

    #[test]
    fn parses_positive_sizes() {
        assert_eq!("10".parse::<PageSize>().unwrap().get(), 10);
        assert_eq!(" 3 \n".parse::<PageSize>().unwrap().get(), 3);
    }

    #[test]
    fn rejects_non_positive_sizes() {
        assert!(matches!(
            "0".parse::<PageSize>(),
            Err(PhonebookError::NonPositivePageSize(0))
        ));
        assert!(matches!(
            "-3".parse::<PageSize>(),
            Err(PhonebookError::NonPositivePageSize(-3))
        ));
        assert!(PageSize::new(0).is_err());
    }

    #[test]
    fn rejects_non_numeric_sizes() {
        assert!(matches!(
            "abc".parse::<PageSize>(),
            Err(PhonebookError::InvalidPageSizeInput(_))
        ));
        assert!(matches!(
            "".parse::<PageSize>(),
            Err(PhonebookError::InvalidPageSizeInput(_))
        ));
    }
}
