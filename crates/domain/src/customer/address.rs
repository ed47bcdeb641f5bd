use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::validation::ensure;

/// Postal address of a customer.
///
/// Validated once at construction and immutable afterwards. Replacing a
/// customer's address means constructing a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    street: String,
    number: i32,
    zip: String,
    city: String,
}

impl Address {
    /// Creates a validated address.
    ///
    /// Fields are checked in order street, number, zip, city and the first
    /// violation is returned.
    pub fn new(
        street: impl Into<String>,
        number: i32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };

        ensure([
            (address.street.is_empty(), ValidationError::StreetRequired),
            (address.number == 0, ValidationError::NumberRequired),
            (address.zip.is_empty(), ValidationError::ZipRequired),
            (address.city.is_empty(), ValidationError::CityRequired),
        ])?;

        Ok(address)
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Renders as `"{street}, {number}, {city}, {zip}"`.
impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.street, self.number, self.city, self.zip
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_valid_address() {
        let address = Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap();
        assert_eq!(address.street(), "Street 1");
        assert_eq!(address.number(), 1);
        assert_eq!(address.zip(), "Zipcode 1");
        assert_eq!(address.city(), "City 1");
    }

    #[test]
    fn display_puts_city_before_zip() {
        let address = Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap();
        assert_eq!(address.to_string(), "Street 1, 1, City 1, Zipcode 1");
    }

    #[test]
    fn rejects_each_missing_field() {
        assert_eq!(
            Address::new("", 1, "z", "c"),
            Err(ValidationError::StreetRequired)
        );
        assert_eq!(
            Address::new("s", 0, "z", "c"),
            Err(ValidationError::NumberRequired)
        );
        assert_eq!(
            Address::new("s", 1, "", "c"),
            Err(ValidationError::ZipRequired)
        );
        assert_eq!(
            Address::new("s", 1, "z", ""),
            Err(ValidationError::CityRequired)
        );
    }

    #[test]
    fn street_is_reported_before_later_fields() {
        assert_eq!(
            Address::new("", 0, "", ""),
            Err(ValidationError::StreetRequired)
        );
    }

    #[test]
    fn negative_number_is_accepted() {
        assert!(Address::new("s", -4, "z", "c").is_ok());
    }
}
