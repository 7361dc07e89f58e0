//! Validation helpers for raw form input strings.
//!
//! The inputs in [crate::form] carry the HTML `required` attribute, so the
//! browser already refuses to submit an empty field. These types mirror that
//! gating programmatically, which keeps the submit path testable without a
//! browser. No further validation happens here: dates and times pass through
//! verbatim.

use roomplan_types::Room;

/// Validate a submitted form input string and convert it to this type.
pub trait ValidateFromFormInput: Sized {
    fn from_form_value(value: &str) -> Result<Self, String>;
}

#[derive(Debug, Default, PartialEq)]
pub struct NonEmptyString(pub String);

impl NonEmptyString {
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValidateFromFormInput for NonEmptyString {
    fn from_form_value(value: &str) -> Result<Self, String> {
        if value.is_empty() {
            Err("Must not be empty".to_owned())
        } else {
            Ok(NonEmptyString(value.to_owned()))
        }
    }
}

/// Rooms validate against the closed id set; the placeholder option's empty
/// value fails the lookup like any other unknown id.
impl ValidateFromFormInput for Room {
    fn from_form_value(value: &str) -> Result<Self, String> {
        Room::from_id(value).ok_or_else(|| format!("Unknown room id '{}'", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_string() {
        assert_eq!(
            NonEmptyString::from_form_value("Alice").unwrap().into_inner(),
            "Alice"
        );
        assert!(NonEmptyString::from_form_value("").is_err());
        // Presence only: whitespace is not trimmed and passes.
        assert_eq!(
            NonEmptyString::from_form_value(" ").unwrap().into_inner(),
            " "
        );
    }

    #[test]
    fn test_room_from_form_value() {
        assert_eq!(Room::from_form_value("room-b").unwrap(), Room::B);
        assert!(Room::from_form_value("").is_err());
        assert!(Room::from_form_value("room-d").is_err());
    }
}
