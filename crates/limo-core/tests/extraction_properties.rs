//! End-to-end behavior of the entity extractor.

use limo_core::{
    extract_entities, EntityExtractor, ExtractionError, ExtractionResult, RuleBasedExtractor,
};
use pretty_assertions::assert_eq;

const BOOKING_EMAIL: &str = "Hi Team,

Here is your lead info!
Name: Maria Lopez
Phone: (401) 555-0142
Email: maria.lopez@example.com
Pick-up location: 77 Water St, Warren, RI 02885
Destination: Logan Airport
Date: March 3rd, 2025
Pickup time: 4:15 am
Number of passengers: 3
Vehicle type: Executive Sedan

Hello Maria, thanks for choosing us.";

fn populated(result: &ExtractionResult) -> usize {
    result.populated().len()
}

#[test]
fn extraction_is_idempotent() {
    let extractor = RuleBasedExtractor::new();
    let first = extractor.extract(BOOKING_EMAIL).unwrap();
    let second = extractor.extract(BOOKING_EMAIL).unwrap();
    assert_eq!(first, second);
}

#[test]
fn raising_threshold_never_adds_fields() {
    let thresholds = [0.0, 0.3, 0.6, 0.75, 0.85, 0.9, 0.95, 0.99, 1.0];
    let counts: Vec<usize> = thresholds
        .iter()
        .map(|t| {
            let result = RuleBasedExtractor::new()
                .with_confidence_threshold(*t)
                .extract(BOOKING_EMAIL)
                .unwrap();
            populated(&result)
        })
        .collect();

    for pair in counts.windows(2) {
        assert!(pair[0] >= pair[1], "counts not monotonic: {:?}", counts);
    }
    assert_eq!(counts.last(), Some(&0));
}

#[test]
fn booking_email_fields() {
    let result = extract_entities(BOOKING_EMAIL).unwrap();

    assert_eq!(result.first_name.text, "Maria");
    assert_eq!(result.last_name.text, "Lopez");
    assert_eq!(result.phone.text, "(401) 555-0142");
    assert_eq!(result.email.text, "maria.lopez@example.com");
    assert_eq!(result.pickup_location.text, "77 Water St, Warren, RI 02885");
    assert_eq!(result.address.text, "77 Water St");
    assert_eq!(result.city.text, "Warren");
    assert_eq!(result.state.text, "RI");
    assert_eq!(result.zip_code.text, "02885");
    assert_eq!(result.destination.text, "Logan Airport");
    assert_eq!(result.pickup_date.text, "March 3rd, 2025");
    assert_eq!(result.pickup_time.text, "4:15 am");
    assert_eq!(result.passengers.text, "3");
    assert_eq!(result.vehicle_type.text, "Executive Sedan");
}

#[test]
fn logan_airport_pickup_forces_boston() {
    for text in [
        "Pick-up location: Logan Airport Terminal C\nAddress: 55 Elm St, Quincy, MA 02169",
        "Pickup: LOGAN AIRPORT, Worcester, MA",
        "Address: logan airport",
    ] {
        let result = extract_entities(text).unwrap();
        assert_eq!(result.city.text, "Boston", "input: {}", text);
        assert_eq!(result.state.text, "MA", "input: {}", text);
        assert!(result.city.confidence >= 0.9);
        assert!(result.state.confidence >= 0.9);
    }
}

#[test]
fn labeled_full_address_splits_components() {
    let result = extract_entities("Address: 123 Main St, Anytown, CA 12345").unwrap();

    assert_eq!(result.address.text, "123 Main St");
    assert_eq!(result.city.text, "Anytown");
    assert_eq!(result.state.text, "CA");
    assert_eq!(result.zip_code.text, "12345");
    for field in [&result.address, &result.city, &result.state, &result.zip_code] {
        assert!(field.confidence >= 0.9, "{:?}", field);
    }
}

#[test]
fn phone_formats_normalize() {
    for number in ["555-123-4567", "(555) 123-4567", "5551234567", "15551234567"] {
        let text = format!("Call me at {} after lunch", number);
        let result = extract_entities(&text).unwrap();
        assert_eq!(result.phone.text, "(555) 123-4567", "input: {}", text);
    }
}

#[test]
fn name_label_takes_priority() {
    let result = extract_entities("Name: John Smith\nFirst Name: Jane\nLast Name: Doe").unwrap();
    assert_eq!(result.first_name.text, "John");
    assert_eq!(result.last_name.text, "Smith");
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(extract_entities(""), Err(ExtractionError::EmptyInput));
    assert_eq!(extract_entities("   "), Err(ExtractionError::EmptyInput));
}

#[test]
fn unrelated_sentence_yields_empty_result() {
    let result = extract_entities("Thanks for your help!").unwrap();
    assert_eq!(populated(&result), 0);
}

#[test]
fn pickup_location_seeds_address() {
    let result = extract_entities("Pickup: 10 Ocean Ave, Swansea, MA").unwrap();

    assert_eq!(result.pickup_location.text, "10 Ocean Ave, Swansea, MA");
    assert_eq!(result.address.text, "10 Ocean Ave, Swansea, MA");
    assert_eq!(result.city.text, "Swansea");
    assert_eq!(result.state.text, "MA");
    assert!(result.city.confidence >= 0.9);
    assert!(result.state.confidence >= 0.9);
}

#[test]
fn non_ascii_digits_are_not_numbers() {
    let result = extract_entities("Call ５５５１２３４５６７ now").unwrap();
    assert_eq!(result.phone.text, "");

    let result = extract_entities("Passengers: ٣").unwrap();
    assert_eq!(result.passengers.text, "");

    let result = extract_entities("Thanks\n١٢ Elm Road").unwrap();
    assert_eq!(result.address.text, "");
}
