//! Business operations. Every function takes the database connection as a
//! parameter so callers decide which store backs it.

pub mod auth;
pub mod booking;
pub mod query;
pub mod workers;

use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Parse a client-supplied identifier. Any textual UUID form is accepted and
/// normalized, so hyphenated and simple spellings name the same record.
pub fn parse_identifier(field: &str, raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::Validation(format!("{} must be a valid identifier", field)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_spellings_normalize() {
        let id = Uuid::new_v4();
        let hyphenated = parse_identifier("userId", &id.hyphenated().to_string()).unwrap();
        let simple = parse_identifier("userId", &id.simple().to_string()).unwrap();
        let braced = parse_identifier("userId", &id.braced().to_string()).unwrap();

        assert_eq!(hyphenated, id);
        assert_eq!(simple, id);
        assert_eq!(braced, id);
    }

    #[test]
    fn legacy_object_ids_are_rejected() {
        let err = parse_identifier("userId", "65a1f0c2e4b0a1b2c3d4e5f6").unwrap_err();
        assert_eq!(err.to_string(), "userId must be a valid identifier");
    }
}
