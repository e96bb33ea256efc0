use validator::ValidationError;

use crate::constants::BLANK_LABEL_ERROR;

pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::new(BLANK_LABEL_ERROR));
    }
    Ok(())
}

/// Trimmed label, or `None` when nothing but whitespace was given.
pub fn normalize_label(raw: &str) -> Option<String> {
    validate_label(raw).ok()?;
    Some(raw.trim().to_string())
}

/// Splits a comma separated list of labels, dropping blank items.
pub fn parse_label_list(raw: &str) -> Vec<String> {
    raw.split(',').filter_map(normalize_label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_label() {
        assert!(validate_label("Dani").is_ok());
        assert!(validate_label("  Ludo ").is_ok());

        let err = validate_label(" \t ").unwrap_err();
        assert_eq!(err.code, BLANK_LABEL_ERROR);
        assert!(validate_label("").is_err());
    }

    #[test]
    fn test_normalize_label_trims() {
        assert_eq!(normalize_label("  Michela  "), Some("Michela".to_string()));
        assert_eq!(normalize_label("   "), None);
    }

    #[test]
    fn test_parse_label_list() {
        assert_eq!(
            parse_label_list("A, B,,  ,C "),
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        );
        assert!(parse_label_list(" , ").is_empty());
    }
}
