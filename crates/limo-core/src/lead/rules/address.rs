//! Address extraction and the city/state/ZIP component parser.

use tracing::{debug, trace};

use crate::lead::text::LeadText;
use crate::models::lead::ExtractionResult;

use super::patterns::{
    ADDRESS_LABEL_PATTERNS, ADDRESS_LINE, AIRPORT_MENTION, AIRPORT_NAME, CITY_STATE,
    FULL_ADDRESS, ROAD_CITY_STATE, STREET_WORD, ZIP_FOLLOWS,
};
use super::states::get_state_abbreviation;
use super::ExtractionPass;

/// Locations whose city and state are known outright.
///
/// Any substring hit (case-insensitive) forces the city and state.
const KNOWN_LOCATIONS: [(&[&str], &str, &str); 2] = [
    (&["logan airport", "bos", "east boston"], "Boston", "MA"),
    (&["swansea"], "Swansea", "MA"),
];

/// Outcome of one component rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The rule did not apply.
    NoMatch,
    /// The rule applied; later rules still run.
    Applied,
    /// The rule applied and ends the cascade.
    Resolved,
}

/// One step of the address component cascade.
pub trait ComponentRule: Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, text: &str, result: &mut ExtractionResult) -> RuleOutcome;
}

/// Component rules in evaluation order.
pub const COMPONENT_RULES: [&dyn ComponentRule; 5] = [
    &KnownLocation,
    &RoadCityState,
    &FullAddress,
    &LooseCityState,
    &AirportLocation,
];

/// Parse city, state and ZIP (and sometimes the street) out of `text`.
pub fn extract_address_components(text: &str, result: &mut ExtractionResult) {
    trace!("Extracting address components from {:?}", text);

    for rule in COMPONENT_RULES {
        match rule.apply(text, result) {
            RuleOutcome::Resolved => {
                debug!("Address rule {} resolved {:?}", rule.name(), text);
                return;
            }
            RuleOutcome::Applied => debug!("Address rule {} applied", rule.name()),
            RuleOutcome::NoMatch => {}
        }
    }
}

/// Hard-coded pickup points (Logan Airport, Swansea).
pub struct KnownLocation;

impl ComponentRule for KnownLocation {
    fn name(&self) -> &'static str {
        "known location"
    }

    fn apply(&self, text: &str, result: &mut ExtractionResult) -> RuleOutcome {
        let lower = text.to_lowercase();
        for (needles, city, state) in KNOWN_LOCATIONS {
            if needles.iter().any(|n| lower.contains(n)) {
                result.city.set(city, 0.95);
                result.state.set(state, 0.95);
                return RuleOutcome::Resolved;
            }
        }
        RuleOutcome::NoMatch
    }
}

/// "Barneyville Road, Swansea, MA" with no ZIP after the state.
pub struct RoadCityState;

impl ComponentRule for RoadCityState {
    fn name(&self) -> &'static str {
        "road, city, state"
    }

    fn apply(&self, text: &str, result: &mut ExtractionResult) -> RuleOutcome {
        let Some(caps) = ROAD_CITY_STATE.captures(text) else {
            return RuleOutcome::NoMatch;
        };

        // A trailing ZIP belongs to the full street address form.
        let end = caps.get(0).map_or(text.len(), |m| m.end());
        if ZIP_FOLLOWS.is_match(&text[end..]) {
            return RuleOutcome::NoMatch;
        }

        result.city.merge(caps[2].trim(), 0.95);
        result.state.merge(caps[3].to_uppercase(), 0.95);
        RuleOutcome::Resolved
    }
}

/// "123 Main St, Anytown, CA 12345"
pub struct FullAddress;

impl ComponentRule for FullAddress {
    fn name(&self) -> &'static str {
        "street, city, state zip"
    }

    fn apply(&self, text: &str, result: &mut ExtractionResult) -> RuleOutcome {
        let Some(caps) = FULL_ADDRESS.captures(text) else {
            return RuleOutcome::NoMatch;
        };

        result.address.merge(caps[1].trim(), 0.95);
        result.city.merge(caps[2].trim(), 0.95);
        result.state.merge(caps[3].to_uppercase(), 0.95);
        if let Some(zip) = caps.get(4) {
            result.zip_code.merge(zip.as_str(), 0.95);
        }
        RuleOutcome::Resolved
    }
}

/// "City, ST" or "City, State" anywhere in the text.
///
/// The state is still taken when the city looks like a street name.
pub struct LooseCityState;

impl ComponentRule for LooseCityState {
    fn name(&self) -> &'static str {
        "city, state"
    }

    fn apply(&self, text: &str, result: &mut ExtractionResult) -> RuleOutcome {
        let Some(caps) = CITY_STATE.captures(text) else {
            return RuleOutcome::NoMatch;
        };

        let city = &caps[1];
        if !STREET_WORD.is_match(city) {
            result.city.merge(city.trim(), 0.85);
        }

        let state = &caps[2];
        if state.len() > 2 {
            let abbreviation = state_name_abbreviation(state);
            if !abbreviation.is_empty() {
                result.state.merge(abbreviation, 0.85);
            }
        } else {
            result.state.merge(state.to_uppercase(), 0.85);
        }

        if let Some(zip) = caps.get(3) {
            result.zip_code.merge(zip.as_str(), 0.9);
        }
        RuleOutcome::Applied
    }
}

/// Look up a one- or two-word state name, retrying with the first word
/// alone ("Illinois please").
fn state_name_abbreviation(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let abbreviation = get_state_abbreviation(&words.join(" "));
    if abbreviation.is_empty() && words.len() > 1 {
        return get_state_abbreviation(words[0]);
    }
    abbreviation
}

/// "Logan International Airport (BOS), Boston, MA"
///
/// The capture layout assumes "Name Airport (XXX), City, ST"; other shapes
/// can land the city in the wrong group.
pub struct AirportLocation;

impl ComponentRule for AirportLocation {
    fn name(&self) -> &'static str {
        "airport"
    }

    fn apply(&self, text: &str, result: &mut ExtractionResult) -> RuleOutcome {
        if !AIRPORT_MENTION.is_match(text) {
            return RuleOutcome::NoMatch;
        }
        let Some(caps) = AIRPORT_NAME.captures(text) else {
            return RuleOutcome::NoMatch;
        };

        let airport_name = caps.get(1).map_or("", |m| m.as_str());
        let airport_code = caps.get(2).map(|m| m.as_str());

        if let Some(city) = caps.get(3).filter(|m| !m.as_str().is_empty()) {
            result.city.merge(city.as_str().trim(), 0.85);
        }
        if let Some(state) = caps.get(4) {
            result.state.merge(state.as_str().to_uppercase(), 0.85);
        }

        if airport_code == Some("BOS") || airport_name.to_lowercase().contains("logan") {
            result.city.set("Boston", 0.95);
            result.state.set("MA", 0.95);
        }
        RuleOutcome::Applied
    }
}

/// Address extraction pass.
pub struct AddressPass;

impl ExtractionPass for AddressPass {
    fn name(&self) -> &'static str {
        "address"
    }

    fn run(&self, input: &LeadText, result: &mut ExtractionResult) {
        if !result.pickup_location.is_empty() {
            let pickup = result.pickup_location.text.clone();
            extract_address_components(&pickup, result);
            if !result.city.is_empty() && !result.state.is_empty() {
                debug!("Address components taken from pickup location");
                return;
            }
        }

        for pattern in ADDRESS_LABEL_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(&input.normalized) {
                let full_address = caps[1].trim().to_string();
                result.address.set(full_address.as_str(), 0.9);
                extract_address_components(&full_address, result);
                return;
            }
        }

        if let Some(line) = input.lines.iter().find(|l| ADDRESS_LINE.is_match(l)) {
            result.address.set(line.trim(), 0.8);
            extract_address_components(line, result);
        }
    }
}
