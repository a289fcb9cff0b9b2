use crate::errors::ValidationError;
use crate::models::Identifier;

/// Checks a candidate mobile number and returns it as a validated
/// [`Identifier`].
///
/// Surrounding whitespace is stripped first. The remainder must be decimal
/// digits only, between 10 and 15 of them inclusive. No side effects.
pub fn validate(raw: &str) -> Result<Identifier, ValidationError> {
    let trimmed = raw.trim();

    if !trimmed.chars().all(|c| c.is_ascii_digit()) || trimmed.is_empty() {
        return Err(ValidationError::NonNumeric);
    }
    if trimmed.len() < 10 {
        return Err(ValidationError::TooShort);
    }
    if trimmed.len() > 15 {
        return Err(ValidationError::TooLong);
    }

    Ok(Identifier::new(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_digit_strings_in_range() {
        for len in 10..=15 {
            let input = "7".repeat(len);
            let id = validate(&input).unwrap();
            assert_eq!(id.as_str(), input);
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let id = validate("  9509972790\n").unwrap();
        assert_eq!(id.as_str(), "9509972790");
    }

    #[test]
    fn rejects_short_input() {
        assert_eq!(validate("123"), Err(ValidationError::TooShort));
    }

    #[test]
    fn rejects_long_input() {
        assert_eq!(validate(&"1".repeat(16)), Err(ValidationError::TooLong));
    }

    #[test]
    fn rejects_non_digits_regardless_of_length() {
        assert_eq!(validate("95099A2790"), Err(ValidationError::NonNumeric));
        assert_eq!(validate("+919509972790"), Err(ValidationError::NonNumeric));
        assert_eq!(validate("95-0997-2790-01"), Err(ValidationError::NonNumeric));
    }

    #[test]
    fn rejects_empty_and_blank_input() {
        assert_eq!(validate(""), Err(ValidationError::NonNumeric));
        assert_eq!(validate("   "), Err(ValidationError::NonNumeric));
    }
}
