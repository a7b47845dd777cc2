use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

/// A single catalog record.
///
/// The serialized field names are the keys of the catalog file format and
/// must not change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "genero")]
    pub genre: String,
    #[serde(rename = "anio")]
    pub year: i64,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            year,
        }
    }

    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    pub fn author_contains(&self, fragment: &str) -> bool {
        self.author
            .to_lowercase()
            .contains(&fragment.to_lowercase())
    }
}

/// A publication year as handed to `add`, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearInput {
    Number(i64),
    Text(String),
}

impl YearInput {
    /// Coerce into an integer year.
    ///
    /// Text is trimmed, may carry one leading sign, and may group digits
    /// with single underscores (`1_967`).
    pub fn coerce(&self) -> Result<i64> {
        match self {
            YearInput::Number(n) => Ok(*n),
            YearInput::Text(raw) => {
                parse_year_text(raw).ok_or_else(|| CatalogError::InvalidYear(raw.clone()))
            }
        }
    }
}

fn parse_year_text(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '_')
    {
        return None;
    }

    let mut cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if negative {
        cleaned.insert(0, '-');
    }
    cleaned.parse().ok()
}

impl From<i64> for YearInput {
    fn from(value: i64) -> Self {
        YearInput::Number(value)
    }
}

impl From<i32> for YearInput {
    fn from(value: i32) -> Self {
        YearInput::Number(value.into())
    }
}

impl From<u32> for YearInput {
    fn from(value: u32) -> Self {
        YearInput::Number(value.into())
    }
}

impl From<u16> for YearInput {
    fn from(value: u16) -> Self {
        YearInput::Number(value.into())
    }
}

impl From<&str> for YearInput {
    fn from(value: &str) -> Self {
        YearInput::Text(value.to_string())
    }
}

impl From<String> for YearInput {
    fn from(value: String) -> Self {
        YearInput::Text(value)
    }
}

impl From<&String> for YearInput {
    fn from(value: &String) -> Self {
        YearInput::Text(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_pass_through() {
        assert_eq!(YearInput::from(1967).coerce().unwrap(), 1967);
        assert_eq!(YearInput::from(-44i64).coerce().unwrap(), -44);
    }

    #[test]
    fn numeric_text_is_coerced() {
        assert_eq!(YearInput::from("1985").coerce().unwrap(), 1985);
        assert_eq!(YearInput::from("  1985\n").coerce().unwrap(), 1985);
        assert_eq!(YearInput::from("+2001").coerce().unwrap(), 2001);
        assert_eq!(YearInput::from("-300").coerce().unwrap(), -300);
        assert_eq!(YearInput::from("1_967").coerce().unwrap(), 1967);
    }

    #[test]
    fn rejects_non_integer_text() {
        for raw in ["not-a-year", "", "   ", "19.5", "1__967", "_1967", "1967_", "+-5", "12a"] {
            let err = YearInput::from(raw).coerce().unwrap_err();
            assert!(
                matches!(err, CatalogError::InvalidYear(ref r) if r == raw),
                "expected rejection for {:?}",
                raw
            );
        }
    }

    #[test]
    fn rejects_out_of_range_text() {
        assert!(YearInput::from("99999999999999999999").coerce().is_err());
    }

    #[test]
    fn title_match_ignores_case() {
        let book = Book::new("Cien años de soledad", "Gabriel García Márquez", "Novela", 1967);
        assert!(book.title_matches("cien AÑOS de soledad"));
        assert!(!book.title_matches("Cien años"));
    }

    #[test]
    fn author_match_is_substring() {
        let book = Book::new("Cien años de soledad", "Gabriel García Márquez", "Novela", 1967);
        assert!(book.author_contains("gabriel"));
        assert!(book.author_contains("GARCÍA"));
        assert!(book.author_contains(""));
        assert!(!book.author_contains("Süskind"));
    }

    #[test]
    fn serializes_with_catalog_keys() {
        let book = Book::new("El perfume", "Patrick Süskind", "Novela", 1985);
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["titulo"], "El perfume");
        assert_eq!(value["autor"], "Patrick Süskind");
        assert_eq!(value["genero"], "Novela");
        assert_eq!(value["anio"], 1985);
    }
}
