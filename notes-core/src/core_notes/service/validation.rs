//! Input validation for note writes

use super::errors::ValidationError;
use crate::core_notes::model::TITLE_MAX_CHARS;

/// Validate a title as submitted and return its trimmed form.
///
/// The length limit applies to the submitted value, counted in Unicode
/// code points.
pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank { field: "title" });
    }

    let length = title.chars().count();
    if length > TITLE_MAX_CHARS {
        return Err(ValidationError::TooLong {
            field: "title",
            max: TITLE_MAX_CHARS,
            actual: length,
        });
    }

    Ok(trimmed.to_string())
}

/// Content defaults to the empty string when absent
pub fn normalize_content(content: Option<String>) -> String {
    content.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed() {
        assert_eq!(validate_title("  Groceries \n").unwrap(), "Groceries");
    }

    #[test]
    fn test_blank_titles_rejected() {
        for title in ["", " ", "\t\n  "] {
            assert_eq!(
                validate_title(title),
                Err(ValidationError::Blank { field: "title" })
            );
        }
    }

    #[test]
    fn test_length_boundary() {
        let max = "a".repeat(TITLE_MAX_CHARS);
        assert_eq!(validate_title(&max).unwrap(), max);

        let over = "a".repeat(TITLE_MAX_CHARS + 1);
        assert!(matches!(
            validate_title(&over),
            Err(ValidationError::TooLong { actual: 257, .. })
        ));
    }

    #[test]
    fn test_length_counts_code_points_not_bytes() {
        // 256 two-byte characters: 512 bytes, still within the limit
        let title = "é".repeat(TITLE_MAX_CHARS);
        assert!(validate_title(&title).is_ok());
    }

    #[test]
    fn test_content_defaults_to_empty() {
        assert_eq!(normalize_content(None), "");
        assert_eq!(normalize_content(Some("body".into())), "body");
    }
}
