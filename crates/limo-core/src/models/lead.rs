//! Lead data model: the fixed set of extractable fields and their results.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A field the extraction engine attempts to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Address,
    City,
    State,
    ZipCode,
    Phone,
    Email,
    PickupLocation,
    Destination,
    PickupTime,
    PickupDate,
    Passengers,
    ServiceType,
    VehicleType,
    Hours,
}

impl Field {
    /// Every field, in result order.
    pub const ALL: [Field; 16] = [
        Field::FirstName,
        Field::LastName,
        Field::Address,
        Field::City,
        Field::State,
        Field::ZipCode,
        Field::Phone,
        Field::Email,
        Field::PickupLocation,
        Field::Destination,
        Field::PickupTime,
        Field::PickupDate,
        Field::Passengers,
        Field::ServiceType,
        Field::VehicleType,
        Field::Hours,
    ];

    /// Get the wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::PickupLocation => "pickupLocation",
            Self::Destination => "destination",
            Self::PickupTime => "pickupTime",
            Self::PickupDate => "pickupDate",
            Self::Passengers => "passengers",
            Self::ServiceType => "serviceType",
            Self::VehicleType => "vehicleType",
            Self::Hours => "hours",
        }
    }

    /// Parse a wire name (as produced by [`Field::as_str`]).
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == s)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted field: its best value so far and the certainty in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldResult {
    /// Extracted text, empty when nothing was found.
    pub text: String,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
}

impl FieldResult {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }

    /// True when no value has been assigned (or it was filtered out).
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Assign unconditionally.
    ///
    /// Used by extraction passes that own the field outright and by the
    /// known-location overrides, which represent ground truth.
    pub fn set(&mut self, text: impl Into<String>, confidence: f32) {
        self.text = text.into();
        self.confidence = confidence;
    }

    /// Assign only if the field is empty or `confidence` is strictly higher
    /// than the current one. Returns whether the value was taken.
    pub fn merge(&mut self, text: impl Into<String>, confidence: f32) -> bool {
        if self.is_empty() || confidence > self.confidence {
            self.set(text, confidence);
            true
        } else {
            false
        }
    }

    /// Clear the text but keep the confidence for diagnostics.
    pub fn clear_text(&mut self) {
        self.text.clear();
    }
}

/// Mapping from every [`Field`] to its [`FieldResult`].
///
/// The key set is fixed at construction; only values change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub first_name: FieldResult,
    pub last_name: FieldResult,
    pub address: FieldResult,
    pub city: FieldResult,
    pub state: FieldResult,
    pub zip_code: FieldResult,
    pub phone: FieldResult,
    pub email: FieldResult,
    pub pickup_location: FieldResult,
    pub destination: FieldResult,
    pub pickup_time: FieldResult,
    pub pickup_date: FieldResult,
    pub passengers: FieldResult,
    pub service_type: FieldResult,
    pub vehicle_type: FieldResult,
    pub hours: FieldResult,
}

impl ExtractionResult {
    /// Create a result with every field empty and zero confidence.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &FieldResult {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Address => &self.address,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::ZipCode => &self.zip_code,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::PickupLocation => &self.pickup_location,
            Field::Destination => &self.destination,
            Field::PickupTime => &self.pickup_time,
            Field::PickupDate => &self.pickup_date,
            Field::Passengers => &self.passengers,
            Field::ServiceType => &self.service_type,
            Field::VehicleType => &self.vehicle_type,
            Field::Hours => &self.hours,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut FieldResult {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Address => &mut self.address,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::ZipCode => &mut self.zip_code,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::PickupLocation => &mut self.pickup_location,
            Field::Destination => &mut self.destination,
            Field::PickupTime => &mut self.pickup_time,
            Field::PickupDate => &mut self.pickup_date,
            Field::Passengers => &mut self.passengers,
            Field::ServiceType => &mut self.service_type,
            Field::VehicleType => &mut self.vehicle_type,
            Field::Hours => &mut self.hours,
        }
    }

    /// Text of a field, or `None` when it is empty.
    pub fn text(&self, field: Field) -> Option<&str> {
        let result = self.get(field);
        if result.is_empty() {
            None
        } else {
            Some(result.text.as_str())
        }
    }

    /// Iterate over all fields in result order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldResult)> {
        Field::ALL.iter().map(move |f| (*f, self.get(*f)))
    }

    /// Fields with non-empty text.
    pub fn populated(&self) -> Vec<Field> {
        self.iter()
            .filter(|(_, r)| !r.is_empty())
            .map(|(f, _)| f)
            .collect()
    }

    /// Clear the text of every field whose confidence is below `threshold`.
    ///
    /// Returns the fields that lost a value.
    pub fn apply_threshold(&mut self, threshold: f32) -> Vec<Field> {
        let mut cleared = Vec::new();
        for field in Field::ALL {
            let result = self.get_mut(field);
            if result.confidence < threshold {
                if !result.is_empty() {
                    cleared.push(field);
                }
                result.clear_text();
            }
        }
        cleared
    }

    /// Field name to text for non-empty fields, as consumed by automation
    /// tools that take flat variables.
    pub fn to_variables(&self) -> BTreeMap<String, String> {
        self.iter()
            .filter(|(_, r)| !r.is_empty())
            .map(|(f, r)| (f.as_str().to_string(), r.text.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_result_is_empty() {
        let result = ExtractionResult::new();
        assert!(result.populated().is_empty());
        assert_eq!(result.iter().count(), 16);
    }

    #[test]
    fn test_merge_rule() {
        let mut field = FieldResult::default();
        assert!(field.merge("Anytown", 0.85));
        assert!(!field.merge("Elsewhere", 0.85));
        assert!(!field.merge("Elsewhere", 0.8));
        assert!(field.merge("Boston", 0.95));
        assert_eq!(field, FieldResult::new("Boston", 0.95));
    }

    #[test]
    fn test_merge_into_empty_ignores_confidence() {
        let mut field = FieldResult::new("", 0.9);
        assert!(field.merge("MA", 0.5));
        assert_eq!(field.text, "MA");
    }

    #[test]
    fn test_apply_threshold_keeps_confidence() {
        let mut result = ExtractionResult::new();
        result.first_name.set("Jo", 0.2);
        result.last_name.set("Smith", 0.9);

        let cleared = result.apply_threshold(0.3);

        assert_eq!(cleared, vec![Field::FirstName]);
        assert_eq!(result.first_name.text, "");
        assert_eq!(result.first_name.confidence, 0.2);
        assert_eq!(result.text(Field::LastName), Some("Smith"));
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let mut result = ExtractionResult::new();
        result.zip_code.set("02720", 0.9);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["zipCode"]["text"], "02720");
        assert!(json.get("pickupLocation").is_some());
        assert_eq!(json.as_object().unwrap().len(), 16);
    }

    #[test]
    fn test_field_names_roundtrip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.as_str()), Some(field));
        }
        assert_eq!(Field::from_name("nope"), None);
    }

    #[test]
    fn test_to_variables_skips_empty() {
        let mut result = ExtractionResult::new();
        result.email.set("a@b.co", 0.95);

        let vars = result.to_variables();
        assert_eq!(vars.len(), 1);
        assert_eq!(vars["email"], "a@b.co");
    }
}
