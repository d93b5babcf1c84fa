use std::fmt;

/// One column of a contact record.
///
/// The declaration order is the display order and the on-disk column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Surname,
    FirstName,
    Patronymic,
    Organization,
    WorkPhone,
    PersonalPhone,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Surname,
        Field::FirstName,
        Field::Patronymic,
        Field::Organization,
        Field::WorkPhone,
        Field::PersonalPhone,
    ];

    /// Human-facing name, also used as the CSV header.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Surname => "Surname",
            Field::FirstName => "First Name",
            Field::Patronymic => "Patronymic",
            Field::Organization => "Organization",
            Field::WorkPhone => "Work Phone",
            Field::PersonalPhone => "Personal Phone",
        }
    }

    pub fn headers() -> [&'static str; 6] {
        Field::ALL.map(|f| f.name())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub surname: String,
    pub first_name: String,
    pub patronymic: String,
    pub organization: String,
    pub work_phone: String,
    pub personal_phone: String,
}

impl Record {
    /// Builds a record from `(field, value)` pairs. Fields not mentioned stay empty.
    pub fn from_pairs<I, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Field, V)>,
        V: Into<String>,
    {
        let mut record = Record::default();
        for (field, value) in pairs {
            record.set(field, value);
        }
        record
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Surname => &self.surname,
            Field::FirstName => &self.first_name,
            Field::Patronymic => &self.patronymic,
            Field::Organization => &self.organization,
            Field::WorkPhone => &self.work_phone,
            Field::PersonalPhone => &self.personal_phone,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Surname => &mut self.surname,
            Field::FirstName => &mut self.first_name,
            Field::Patronymic => &mut self.patronymic,
            Field::Organization => &mut self.organization,
            Field::WorkPhone => &mut self.work_phone,
            Field::PersonalPhone => &mut self.personal_phone,
        };
        *slot = value.into();
    }

    /// Values in column order.
    pub fn values(&self) -> [&str; 6] {
        Field::ALL.map(|f| self.get(f))
    }

    /// Applies user edits field by field: blank input keeps the current
    /// value, anything else replaces it after trimming.
    pub fn with_edits<I, V>(&self, edits: I) -> Record
    where
        I: IntoIterator<Item = (Field, V)>,
        V: AsRef<str>,
    {
        let mut updated = self.clone();
        for (field, input) in edits {
            let trimmed = input.as_ref().trim();
            if !trimmed.is_empty() {
                updated.set(field, trimmed);
            }
        }
        updated
    }
}

/// A record as returned by a search, remembering where it sat in the
/// record set it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedRecord {
    pub position: usize,
    pub record: Record,
}
