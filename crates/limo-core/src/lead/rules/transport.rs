//! Trip details: pickup location, destination, time, date, passengers, hours,
//! service and vehicle type.

use tracing::debug;

use crate::lead::text::LeadText;
use crate::models::lead::{ExtractionResult, FieldResult};

use super::address::extract_address_components;
use super::patterns::{
    AIRPORT_DROP_HINT, AIRPORT_LINE, AIRPORT_PICKUP_HINT, DATE_KEYWORDS, DESTINATION_PATTERNS,
    DROP_KEYWORDS, HOURS_PATTERNS, LABEL_PREFIX, MONTH_NAME_DATE, PASSENGER_PATTERNS,
    PICKUP_DATE_PATTERNS, PICKUP_DIRECTION, PICKUP_KEYWORDS, PICKUP_LOCATION_PATTERNS,
    PICKUP_TIME_PATTERNS, SERVICE_TYPE_PATTERNS, SLASH_DATE, TIME_KEYWORDS, TIME_OF_DAY,
    VEHICLE_TYPE_PATTERNS,
};
use super::{first_capture, ExtractionPass};

/// Transportation pass.
///
/// Runs before the address pass and seeds the address from the pickup
/// location when one is found.
pub struct TransportationPass;

impl ExtractionPass for TransportationPass {
    fn name(&self) -> &'static str {
        "transportation"
    }

    fn run(&self, input: &LeadText, result: &mut ExtractionResult) {
        pickup_location(input, result);
        destination(input, result);
        pickup_time(input, result);
        pickup_date(input, result);

        let text = input.normalized.as_str();
        for (patterns, field, confidence) in [
            (&*PASSENGER_PATTERNS, &mut result.passengers, 0.95),
            (&*HOURS_PATTERNS, &mut result.hours, 0.95),
            (&*SERVICE_TYPE_PATTERNS, &mut result.service_type, 0.9),
            (&*VEHICLE_TYPE_PATTERNS, &mut result.vehicle_type, 0.9),
        ] {
            set_first(patterns, text, confidence, field);
        }

        if result.pickup_location.is_empty() || result.destination.is_empty() {
            airport_fallback(input, result);
        }
    }
}

fn set_first(
    patterns: &[regex::Regex],
    text: &str,
    confidence: f32,
    field: &mut FieldResult,
) -> bool {
    match first_capture(patterns, text, confidence) {
        Some(m) => {
            field.set(m.value, m.confidence);
            true
        }
        None => false,
    }
}

/// Text after the first colon of a line.
fn strip_label(line: &str) -> String {
    LABEL_PREFIX.replace(line, "").trim().to_string()
}

fn seed_address(location: &str, confidence: f32, result: &mut ExtractionResult) {
    if result.address.is_empty() {
        result.address.set(location, confidence);
        extract_address_components(location, result);
    }
}

fn pickup_location(input: &LeadText, result: &mut ExtractionResult) {
    if let Some(m) = first_capture(&PICKUP_LOCATION_PATTERNS, &input.normalized, 0.9) {
        debug!("Pickup location from {:?}", m.source);
        result.pickup_location.set(m.value.as_str(), m.confidence);
        seed_address(&m.value, 0.8, result);
        return;
    }

    let candidate = input
        .lines
        .iter()
        .filter(|line| PICKUP_KEYWORDS.is_match(line) && !DROP_KEYWORDS.is_match(line))
        .map(|line| strip_label(line))
        .find(|location| !location.is_empty());

    if let Some(location) = candidate {
        result.pickup_location.set(location.as_str(), 0.85);
        seed_address(&location, 0.75, result);
    }
}

fn destination(input: &LeadText, result: &mut ExtractionResult) {
    if set_first(&DESTINATION_PATTERNS, &input.normalized, 0.9, &mut result.destination) {
        return;
    }

    let candidate = input
        .lines
        .iter()
        .filter(|line| DROP_KEYWORDS.is_match(line) && !PICKUP_DIRECTION.is_match(line))
        .map(|line| strip_label(line))
        .find(|location| !location.is_empty());

    if let Some(location) = candidate {
        result.destination.set(location, 0.85);
    }
}

fn pickup_time(input: &LeadText, result: &mut ExtractionResult) {
    if set_first(&PICKUP_TIME_PATTERNS, &input.normalized, 0.9, &mut result.pickup_time) {
        return;
    }

    let time = input
        .lines
        .iter()
        .filter(|line| TIME_KEYWORDS.is_match(line))
        .find_map(|line| TIME_OF_DAY.captures(line).map(|caps| caps[1].trim().to_string()));

    if let Some(time) = time {
        result.pickup_time.set(time, 0.85);
    }
}

fn pickup_date(input: &LeadText, result: &mut ExtractionResult) {
    if set_first(&PICKUP_DATE_PATTERNS, &input.normalized, 0.9, &mut result.pickup_date) {
        return;
    }

    let date = input
        .lines
        .iter()
        .filter(|line| DATE_KEYWORDS.is_match(line))
        .find_map(|line| {
            MONTH_NAME_DATE
                .find(line)
                .or_else(|| SLASH_DATE.find(line))
                .map(|m| m.as_str().trim().to_string())
        });

    if let Some(date) = date {
        result.pickup_date.set(date, 0.85);
    }
}

/// Lines that mention an airport fill whichever of pickup and destination is
/// still missing.
///
/// The stripped text is assigned even when it comes out empty.
fn airport_fallback(input: &LeadText, result: &mut ExtractionResult) {
    for line in input.lines.iter().filter(|l| AIRPORT_LINE.is_match(l)) {
        let has_pickup_hint = AIRPORT_PICKUP_HINT.is_match(line);
        let has_drop_hint = AIRPORT_DROP_HINT.is_match(line);

        if result.pickup_location.is_empty() && (has_pickup_hint || !has_drop_hint) {
            debug!("Airport line used as pickup: {:?}", line);
            result.pickup_location.set(strip_label(line), 0.8);
        } else if result.destination.is_empty()
            && (has_drop_hint || result.pickup_location.is_empty())
        {
            debug!("Airport line used as destination: {:?}", line);
            result.destination.set(strip_label(line), 0.8);
        }
    }
}
