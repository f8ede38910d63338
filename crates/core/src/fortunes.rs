//! Fortune text constants and validation.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a fortune text in characters (column is VARCHAR(255)).
pub const MAX_FORTUNE_LENGTH: usize = 255;

/// Maximum length of a category icon key (column is VARCHAR(20)).
pub const MAX_ICON_KEY_LENGTH: usize = 20;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate fortune text: non-empty and at most [`MAX_FORTUNE_LENGTH`] chars.
pub fn validate_fortune_text(text: &str) -> Result<(), String> {
    if text.is_empty() {
        return Err("Fortune text cannot be empty".to_string());
    }
    if text.chars().count() > MAX_FORTUNE_LENGTH {
        return Err(format!(
            "Fortune text exceeds maximum length of {MAX_FORTUNE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an icon key: non-empty, at most [`MAX_ICON_KEY_LENGTH`] chars,
/// lowercase ASCII letters, digits, `-` and `_` only.
pub fn validate_icon_key(key: &str) -> Result<(), String> {
    if key.is_empty() {
        return Err("Icon key cannot be empty".to_string());
    }
    if key.chars().count() > MAX_ICON_KEY_LENGTH {
        return Err(format!(
            "Icon key exceeds maximum length of {MAX_ICON_KEY_LENGTH} characters"
        ));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(format!("Invalid icon key: {key}"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_fortune_text ----------------------------------------------

    #[test]
    fn valid_text_accepted() {
        assert!(validate_fortune_text("Work hard.").is_ok());
    }

    #[test]
    fn empty_text_rejected() {
        let result = validate_fortune_text("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot be empty"));
    }

    #[test]
    fn text_at_max_length_accepted() {
        let text = "a".repeat(MAX_FORTUNE_LENGTH);
        assert!(validate_fortune_text(&text).is_ok());
    }

    #[test]
    fn text_over_max_length_rejected() {
        let text = "a".repeat(MAX_FORTUNE_LENGTH + 1);
        let result = validate_fortune_text(&text);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("exceeds maximum length"));
    }

    // -- validate_icon_key --------------------------------------------------

    #[test]
    fn valid_icon_keys_accepted() {
        assert!(validate_icon_key("briefcase").is_ok());
        assert!(validate_icon_key("lucky-number").is_ok());
        assert!(validate_icon_key("paw_print").is_ok());
    }

    #[test]
    fn invalid_icon_keys_rejected() {
        assert!(validate_icon_key("").is_err());
        assert!(validate_icon_key("Briefcase").is_err());
        assert!(validate_icon_key("icon with spaces").is_err());
        assert!(validate_icon_key(&"x".repeat(MAX_ICON_KEY_LENGTH + 1)).is_err());
    }
}
