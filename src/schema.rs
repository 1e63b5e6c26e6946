use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{CSV_FIELD_SEPARATOR, FIELD_COUNT};

/// The six roster columns, in their at-rest order. This enum is the single
/// source of truth for field validity: display names, user-input parsing,
/// mutability, and which keys the sort operation accepts all live here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldName {
    Id,
    FirstName,
    LastName,
    Grade,
    Class,
    Email,
}

/// Column order of the persisted file. Part of the at-rest contract.
pub const FIELD_ORDER: [FieldName; FIELD_COUNT] = [
    FieldName::Id,
    FieldName::FirstName,
    FieldName::LastName,
    FieldName::Grade,
    FieldName::Class,
    FieldName::Email,
];

impl FieldName {
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldName::Id => "ID",
            FieldName::FirstName => "First Name",
            FieldName::LastName => "Last Name",
            FieldName::Grade => "Grade",
            FieldName::Class => "Class",
            FieldName::Email => "Email",
        }
    }

    /// Parses a user-supplied field name. Exact match on the display name
    /// after trimming; no case folding, matching the original prompts.
    pub fn parse(input: &str) -> Option<FieldName> {
        let trimmed = input.trim();
        FIELD_ORDER.iter().copied().find(|f| f.display_name() == trimmed)
    }

    /// ID is fixed once a record is created; every other field may change.
    pub fn is_mutable(&self) -> bool {
        !matches!(self, FieldName::Id)
    }

    /// The user-facing sort operation only accepts these three keys.
    pub fn is_sort_key(&self) -> bool {
        matches!(self, FieldName::Id | FieldName::LastName | FieldName::Class)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The fixed header row of the persisted file.
pub fn header_line() -> String {
    FIELD_ORDER
        .iter()
        .map(|f| f.display_name())
        .collect::<Vec<_>>()
        .join(&CSV_FIELD_SEPARATOR.to_string())
}
