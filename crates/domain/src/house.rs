//! House — the top-level aggregate, identified by its name.
//!
//! A house owns a [`Location`] which may be reconfigured after construction,
//! but never removed. Rooms reference their house by [`HouseName`] only; the
//! house holds no room collection, containment is query-driven through
//! repositories.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::HouseName;

/// A country the system accepts addresses for, with its zip-code shape.
///
/// Kept as an immutable static table rather than an enum: adding a country
/// is data, not code.
#[derive(Debug, Clone, Copy)]
pub struct Country {
    name: &'static str,
    /// Zip template where `#` stands for an ASCII digit; other characters
    /// are literal.
    zip_template: &'static str,
}

/// Countries the address validation currently supports.
pub const AVAILABLE_COUNTRIES: &[Country] = &[
    Country {
        name: "United States of America",
        zip_template: "#####",
    },
    Country {
        name: "France",
        zip_template: "#####",
    },
    Country {
        name: "Portugal",
        zip_template: "####-###",
    },
    Country {
        name: "Spain",
        zip_template: "#####",
    },
];

impl Country {
    /// Look a country up by its canonical name.
    #[must_use]
    pub fn find(name: &str) -> Option<&'static Country> {
        AVAILABLE_COUNTRIES.iter().find(|c| c.name == name)
    }

    /// The canonical country name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `zip` matches this country's template.
    #[must_use]
    pub fn matches_zip(&self, zip: &str) -> bool {
        let template = self.zip_template.as_bytes();
        let zip = zip.as_bytes();
        template.len() == zip.len()
            && template.iter().zip(zip).all(|(t, z)| match t {
                b'#' => z.is_ascii_digit(),
                literal => literal == z,
            })
    }
}

/// Postal address, validated against the supported-country table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    street_name: String,
    street_number: String,
    zip_code: String,
    country: String,
}

impl Address {
    /// Validate and build an address.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Blank`] on empty street fields,
    /// [`ValidationError::UnsupportedCountry`] when the country is not in
    /// [`AVAILABLE_COUNTRIES`], and [`ValidationError::InvalidZipCode`] when
    /// the zip does not match the country's format.
    pub fn new(
        street_name: impl Into<String>,
        street_number: impl Into<String>,
        zip_code: impl Into<String>,
        country: &str,
    ) -> Result<Self, ValidationError> {
        let street_name = street_name.into();
        let street_number = street_number.into();
        let zip_code = zip_code.into();
        if street_name.trim().is_empty() {
            return Err(ValidationError::Blank("street name"));
        }
        if street_number.trim().is_empty() {
            return Err(ValidationError::Blank("street number"));
        }
        let known = Country::find(country)
            .ok_or_else(|| ValidationError::UnsupportedCountry(country.to_owned()))?;
        if !known.matches_zip(&zip_code) {
            return Err(ValidationError::InvalidZipCode {
                country: known.name,
                zip: zip_code,
            });
        }
        Ok(Self {
            street_name,
            street_number,
            zip_code,
            country: known.name.to_owned(),
        })
    }

    #[must_use]
    pub fn street_name(&self) -> &str {
        &self.street_name
    }

    #[must_use]
    pub fn street_number(&self) -> &str {
        &self.street_number
    }

    #[must_use]
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }
}

/// GPS coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gps {
    latitude: f64,
    longitude: f64,
}

impl Gps {
    /// Validate and build coordinates.
    ///
    /// # Errors
    ///
    /// Returns a validation error when latitude is outside `[-90, 90]` or
    /// longitude outside `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Where a house is: address plus coordinates. Immutable value object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    address: Address,
    gps: Gps,
}

impl Location {
    #[must_use]
    pub fn new(address: Address, gps: Gps) -> Self {
        Self { address, gps }
    }

    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    #[must_use]
    pub fn gps(&self) -> &Gps {
        &self.gps
    }
}

/// The house aggregate. Identity is the [`HouseName`]; equality and hashing
/// ignore the location so that two loads of the same house compare equal
/// even if reconfigured in between.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    name: HouseName,
    location: Location,
}

impl House {
    /// Create a house.
    #[must_use]
    pub fn new(name: HouseName, location: Location) -> Self {
        Self { name, location }
    }

    /// The natural identity.
    #[must_use]
    pub fn identity(&self) -> &HouseName {
        &self.name
    }

    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Replace the location. The house is never left without one.
    pub fn configure_location(&mut self, location: Location) -> &Location {
        self.location = location;
        &self.location
    }
}

impl PartialEq for House {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for House {}

impl std::hash::Hash for House {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lisbon_location() -> Location {
        let address = Address::new("Rua das Flores", "12", "4000-123", "Portugal").unwrap();
        let gps = Gps::new(38.72, -9.14).unwrap();
        Location::new(address, gps)
    }

    #[test]
    fn should_read_back_name_and_location_after_construction() {
        let name = HouseName::new("Main House").unwrap();
        let location = lisbon_location();
        let house = House::new(name.clone(), location.clone());

        assert_eq!(house.identity(), &name);
        assert_eq!(house.location(), &location);
    }

    #[test]
    fn should_replace_location_when_reconfigured() {
        let mut house = House::new(HouseName::new("Main House").unwrap(), lisbon_location());
        let address = Address::new("5th Avenue", "725", "10022", "United States of America")
            .unwrap();
        let new_location = Location::new(address, Gps::new(40.76, -73.97).unwrap());

        house.configure_location(new_location.clone());
        assert_eq!(house.location(), &new_location);
    }

    #[test]
    fn should_compare_houses_by_name_only() {
        let a = House::new(HouseName::new("Main House").unwrap(), lisbon_location());
        let mut b = a.clone();
        let address = Address::new("Gran Via", "1", "28013", "Spain").unwrap();
        b.configure_location(Location::new(address, Gps::new(40.42, -3.70).unwrap()));

        assert_eq!(a, b);
    }

    #[test]
    fn should_reject_unsupported_country() {
        let result = Address::new("Street", "1", "12345", "Atlantis");
        assert!(matches!(
            result,
            Err(ValidationError::UnsupportedCountry(_))
        ));
    }

    #[test]
    fn should_reject_zip_not_matching_country_template() {
        let result = Address::new("Rua das Flores", "12", "40001-23", "Portugal");
        assert!(matches!(result, Err(ValidationError::InvalidZipCode { .. })));

        let result = Address::new("5th Avenue", "725", "1002", "United States of America");
        assert!(matches!(result, Err(ValidationError::InvalidZipCode { .. })));
    }

    #[test]
    fn should_accept_zip_matching_country_template() {
        assert!(Address::new("Rua das Flores", "12", "4000-123", "Portugal").is_ok());
        assert!(Address::new("Champs-Elysees", "8", "75008", "France").is_ok());
    }

    #[test]
    fn should_reject_out_of_range_coordinates() {
        assert!(matches!(
            Gps::new(91.0, 0.0),
            Err(ValidationError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            Gps::new(0.0, -180.5),
            Err(ValidationError::LongitudeOutOfRange(_))
        ));
    }
}
