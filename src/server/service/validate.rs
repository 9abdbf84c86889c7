//! Field validation helpers shared by the entity services.

use chrono::NaiveDate;
use sea_orm::ActiveEnum;
use validator::Validate;

use crate::server::error::validation::ValidationError;

/// Run a payload's derived `validator` rules and collect the failures
pub fn check(request: &impl Validate) -> ValidationError {
    match request.validate() {
        Ok(()) => ValidationError::new(),
        Err(errors) => ValidationError::from(errors),
    }
}

/// Parse a closed string value set into its entity enum, recording a field
/// error naming the allowed values on mismatch
pub fn parse_enum<E>(errors: &mut ValidationError, field: &str, value: &str) -> Option<E>
where
    E: ActiveEnum<Value = String>,
{
    match E::try_from_value(&value.to_string()) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            let allowed = E::values().join(", ");
            errors.add(field, format!("{} must be one of: {}", field, allowed));
            None
        }
    }
}

/// Parse an ISO `YYYY-MM-DD` date, recording a field error on mismatch
pub fn parse_date(errors: &mut ValidationError, field: &str, value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, format!("{} must be a date in YYYY-MM-DD format", field));
            None
        }
    }
}

/// Record a field error when a supplied year level falls outside 1-4
pub fn check_year_level(errors: &mut ValidationError, field: &str, value: i32) {
    if !(1..=4).contains(&value) {
        errors.add(field, format!("{} must be between 1 and 4", field));
    }
}

#[cfg(test)]
mod tests {
    use entity::academic_year::Semester;

    use super::{parse_date, parse_enum};
    use crate::server::error::validation::ValidationError;

    /// Expect a valid enum string to parse without recording an error
    #[test]
    fn test_parse_enum_valid() {
        let mut errors = ValidationError::new();

        let parsed = parse_enum::<Semester>(&mut errors, "semester", "summer");

        assert_eq!(parsed, Some(Semester::Summer));
        assert!(errors.is_empty());
    }

    /// Expect an invalid enum string to record the allowed values
    #[test]
    fn test_parse_enum_invalid() {
        let mut errors = ValidationError::new();

        let parsed = parse_enum::<Semester>(&mut errors, "semester", "winter");

        assert!(parsed.is_none());
        let messages = errors.fields.get("semester").unwrap();
        assert!(messages[0].contains("summer"));
    }

    /// Expect a malformed date to record a format error
    #[test]
    fn test_parse_date_invalid() {
        let mut errors = ValidationError::new();

        assert!(parse_date(&mut errors, "hire_date", "2025-09-01").is_some());
        assert!(parse_date(&mut errors, "hire_date", "09/01/2025").is_none());
        assert!(errors.fields.contains_key("hire_date"));
    }
}
