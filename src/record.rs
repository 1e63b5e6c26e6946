use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::schema::{FieldName, FIELD_ORDER};

/// One student's row. All six fields are stored as text; ID and Grade are
/// numeric-looking but compared as text except where the sort comparator
/// takes its numeric path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub grade: String,
    pub class: String,
    pub email: String,
}

impl StudentRecord {
    pub fn new(
        id: String,
        first_name: String,
        last_name: String,
        grade: String,
        class: String,
        email: String,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            grade,
            class,
            email,
        }
    }

    pub fn field(&self, name: FieldName) -> &str {
        match name {
            FieldName::Id => &self.id,
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Grade => &self.grade,
            FieldName::Class => &self.class,
            FieldName::Email => &self.email,
        }
    }

    /// Overwrites a single field. Mutability policy (ID is immutable through
    /// the store) is enforced by the caller against the schema, not here.
    pub fn set_field(&mut self, name: FieldName, value: String) {
        match name {
            FieldName::Id => self.id = value,
            FieldName::FirstName => self.first_name = value,
            FieldName::LastName => self.last_name = value,
            FieldName::Grade => self.grade = value,
            FieldName::Class => self.class = value,
            FieldName::Email => self.email = value,
        }
    }

    /// Parses one data row. Short rows are padded with empty fields, extra
    /// columns are ignored. Blank lines yield `None`.
    pub fn from_csv_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut fields = parse_csv_fields(trimmed);
        fields.resize(FIELD_COUNT, String::new());
        let mut fields = fields.into_iter();

        Some(Self {
            id: fields.next()?,
            first_name: fields.next()?,
            last_name: fields.next()?,
            grade: fields.next()?,
            class: fields.next()?,
            email: fields.next()?,
        })
    }

    pub fn to_csv_line(&self) -> String {
        FIELD_ORDER
            .iter()
            .map(|f| format_csv_field(self.field(*f)))
            .collect::<Vec<_>>()
            .join(&CSV_FIELD_SEPARATOR.to_string())
    }
}

pub(crate) fn parse_csv_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current_field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            CSV_QUOTE_CHAR if !in_quotes => {
                in_quotes = true;
            }
            CSV_QUOTE_CHAR if in_quotes => {
                if chars.peek() == Some(&CSV_QUOTE_CHAR) {
                    chars.next();
                    current_field.push(CSV_QUOTE_CHAR);
                } else {
                    in_quotes = false;
                }
            }
            CSV_FIELD_SEPARATOR if !in_quotes => {
                fields.push(current_field.trim().to_string());
                current_field.clear();
            }
            _ => {
                current_field.push(ch);
            }
        }
    }

    // Trailing empty fields are meaningful (a row may end with an empty Email).
    fields.push(current_field.trim().to_string());

    fields
}

fn format_csv_field(value: &str) -> String {
    if value.contains(CSV_FIELD_SEPARATOR)
        || value.contains(CSV_QUOTE_CHAR)
        || value.contains('\n')
    {
        format!(
            "{q}{}{q}",
            value.replace(CSV_QUOTE_CHAR, "\"\""),
            q = CSV_QUOTE_CHAR
        )
    } else {
        value.to_string()
    }
}
