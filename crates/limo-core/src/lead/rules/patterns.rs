//! Regex patterns for reservation lead extraction.
//!
//! Every list is ordered: the extraction passes take the first pattern that
//! matches, so reordering entries changes observable results.
//!
//! Value captures stop at a line break marker (`[NL]`, see
//! [`crate::lead::text::LINE_BREAK`]) or at the end of the text.
//!
//! Digits and word boundaries are ASCII-only (`[0-9]`, `(?-u:\b)`), so
//! full-width or Arabic-Indic digits in OCR output never count as numbers.

use lazy_static::lazy_static;
use regex::Regex;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
}

lazy_static! {
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    /// Everything up to and including the first colon of a line.
    pub static ref LABEL_PREFIX: Regex = Regex::new(r"^.*?:\s*").unwrap();

    // Names
    pub static ref LABELED_NAME: Regex = Regex::new(
        r"(?i)(?:name|full name|passenger|client|customer)\s*:?\s*([A-Za-z]+)(?:\s+([A-Za-z]+))?"
    ).unwrap();

    pub static ref FIRST_NAME_LABEL: Regex = Regex::new(
        r"(?i)(?:first name|first|given name)\s*:?\s*([A-Za-z]+)"
    ).unwrap();

    pub static ref LAST_NAME_LABEL: Regex = Regex::new(
        r"(?i)(?:last name|last|surname|family name)\s*:?\s*([A-Za-z]+)"
    ).unwrap();

    pub static ref LEADING_NAME: Regex = Regex::new(
        r"^([A-Z][a-z]+)\s+([A-Z][a-z]+)(?:\s|,|\.)"
    ).unwrap();

    pub static ref LEAD_INFO_NAME: Regex = Regex::new(
        r"(?i)here is your lead info!?\s*(?:\n|\[NL\])\s*name:?\s*([A-Za-z]+)\s+([A-Za-z]+)"
    ).unwrap();

    pub static ref GREETING_NAME: Regex = Regex::new(
        r"(?i)(?:dear|hello|hi|to)\s+([A-Z][a-z]+)(?:\s+([A-Z][a-z]+))?(?:\s|,|\.)"
    ).unwrap();

    // Pickup location and destination
    pub static ref PICKUP_LOCATION_PATTERNS: Vec<Regex> = compile(&[
        r"(?i)pick(?:\s|-)up\s+location\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
        r"(?i)from\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
        r"(?i)pickup\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
        r"(?i)pick(?:\s|-)up(?:\s+(?:address|location))?\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
        r"(?i)origin\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
    ]);

    pub static ref DESTINATION_PATTERNS: Vec<Regex> = compile(&[
        r"(?i)destination\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
        r"(?i)to\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
        r"(?i)drop(?:\s|-)off(?:\s+(?:address|location))?\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
    ]);

    pub static ref PICKUP_KEYWORDS: Regex = Regex::new(r"(?i)pick|from|origin|location").unwrap();
    pub static ref PICKUP_DIRECTION: Regex = Regex::new(r"(?i)pick|from|origin").unwrap();
    pub static ref DROP_KEYWORDS: Regex = Regex::new(r"(?i)drop|to|destination").unwrap();

    // Airport fallback
    pub static ref AIRPORT_LINE: Regex = Regex::new(
        r"(?i)(?-u:\b)(?:airport|terminal|international)(?-u:\b)"
    ).unwrap();
    pub static ref AIRPORT_PICKUP_HINT: Regex = Regex::new(r"(?i)pick|from|origin|departure").unwrap();
    pub static ref AIRPORT_DROP_HINT: Regex = Regex::new(r"(?i)drop|to|destination|arrival").unwrap();

    // Pickup time
    pub static ref PICKUP_TIME_PATTERNS: Vec<Regex> = compile(&[
        r"(?i)pick(?:\s|-)up\s+time\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
        r"(?i)(?:pick(?:\s|-)up|departure)\s+(?:at|@)\s*([0-9]{1,2}(?::[0-9]{2})?\s*(?:am|pm|a\.m\.|p\.m\.))",
        r"(?i)time\s*:?\s*([0-9]{1,2}(?::[0-9]{2})?\s*(?:am|pm|a\.m\.|p\.m\.))",
        r"(?i)(?:^|\s)([0-9]{1,2}(?::[0-9]{2})?\s*(?:am|pm|a\.m\.|p\.m\.))(?:\s|$)",
    ]);

    pub static ref TIME_KEYWORDS: Regex = Regex::new(r"(?i)time|pickup|pick up|pick-up").unwrap();

    pub static ref TIME_OF_DAY: Regex = Regex::new(
        r"(?i)([0-9]{1,2}(?::[0-9]{2})?\s*(?:am|pm|a\.m\.|p\.m\.))"
    ).unwrap();

    // Pickup date
    pub static ref PICKUP_DATE_PATTERNS: Vec<Regex> = compile(&[
        r"(?i)(?:date|event\s+date)\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
        r"(?i)on\s+((?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\s+[0-9]{1,2}(?:st|nd|rd|th)?(?:\s*,?\s*[0-9]{2,4})?)",
        r"(?i)([0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4})",
        r"(?i)([0-9]{1,2}-[0-9]{1,2}-[0-9]{2,4})",
        r"(?i)(?:^|\s)((?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\s+[0-9]{1,2}(?:st|nd|rd|th)?(?:\s*,?\s*[0-9]{2,4})?)(?:\s|$)",
    ]);

    pub static ref DATE_KEYWORDS: Regex = Regex::new(r"(?i)date|on|pickup|pick up|pick-up|event").unwrap();

    pub static ref MONTH_NAME_DATE: Regex = Regex::new(
        r"(?i)(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\s+[0-9]{1,2}(?:st|nd|rd|th)?(?:\s*,?\s*[0-9]{2,4})?"
    ).unwrap();

    pub static ref SLASH_DATE: Regex = Regex::new(r"[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}").unwrap();

    // Trip details
    pub static ref PASSENGER_PATTERNS: Vec<Regex> = compile(&[
        r"(?i)(?:number\s+of\s+passengers|passengers)\s*:?\s*([0-9]+)",
        r"(?i)([0-9]+)\s+(?:passenger|person|people|pax)",
        r"(?i)passengers?:?\s*([0-9]+)",
    ]);

    pub static ref HOURS_PATTERNS: Vec<Regex> = compile(&[
        r"(?i)(?:number\s+of\s+hours|hours)\s*:?\s*([0-9]+)",
        r"(?i)hours?:?\s*([0-9]+(?:\.[0-9]+)?)",
    ]);

    pub static ref SERVICE_TYPE_PATTERNS: Vec<Regex> = compile(&[
        r"(?i)(?:type\s+of\s+service|service\s+type)\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
        r"(?i)service\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
    ]);

    pub static ref VEHICLE_TYPE_PATTERNS: Vec<Regex> = compile(&[
        r"(?i)(?:vehicle\s+type|car\s+type)\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
        r"(?i)vehicle\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
        r"(?i)car\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
    ]);

    // Addresses
    pub static ref ADDRESS_LABEL_PATTERNS: Vec<Regex> = compile(&[
        r"(?i)(?:address|location|street|addr)\s*:?\s*(.+?)(?:\n|\[NL\]|$)",
        r"(?i)(?:address|location|street|addr)[:\s]\s*(.+?)(?:\n|\[NL\]|$)",
    ]);

    /// A street-number-like prefix: digits, then a word.
    pub static ref ADDRESS_LINE: Regex = Regex::new(r"^[0-9]+\s+[A-Za-z]").unwrap();

    /// "Barneyville Road, Swansea, MA"
    pub static ref ROAD_CITY_STATE: Regex = Regex::new(
        r"(?i)([^,]+)(?:,\s+([^,]+))(?:,\s+([A-Z]{2}))(?-u:\b)"
    ).unwrap();

    pub static ref ZIP_FOLLOWS: Regex = Regex::new(r"^\s+[0-9]{5}").unwrap();

    /// "123 Main St, Anytown, CA 12345"
    pub static ref FULL_ADDRESS: Regex = Regex::new(
        r"(?i)^(.+),\s*([^,]+),\s*([A-Z]{2})(?:\s+([0-9]{5}(?:-[0-9]{4})?))?$"
    ).unwrap();

    /// "Anytown, CA", "Springfield, Illinois 62701" or "Providence, Rhode Island".
    ///
    /// A second state word is captured when present; the caller falls back to
    /// the first word if the pair is not a state name.
    pub static ref CITY_STATE: Regex = Regex::new(
        r"(?i)([^,]+),\s*([A-Z]{2}(?-u:\b)|[A-Za-z]+(?:[ \t]+[A-Za-z]+)?)(?:\s+([0-9]{5}(?:-[0-9]{4})?))?"
    ).unwrap();

    pub static ref STREET_WORD: Regex = Regex::new(
        r"(?i)road|street|avenue|lane|drive|boulevard|place|plaza"
    ).unwrap();

    pub static ref AIRPORT_MENTION: Regex = Regex::new(r"(?i)airport|terminal").unwrap();

    /// Airport name, optional `(XXX)` code, optional city and state.
    pub static ref AIRPORT_NAME: Regex = Regex::new(
        r"(?i)(.*?)\s*(?:airport|international|terminal)\s*(?:\(([A-Z]{3})\))?(?:[,\s]+([A-Za-z\s]+))?(?:[,\s]+([A-Z]{2}))?"
    ).unwrap();

    pub static ref TWO_LETTER_CODE: Regex = Regex::new(r"(?i)^[a-z]{2}$").unwrap();

    // Phone numbers
    pub static ref PHONE_PATTERNS: Vec<Regex> = compile(&[
        r"(?i)(?:phone|cell|mobile|tel|telephone|number|ph)[:\s]+(\+?1?[\s.\-]?\(?[0-9]{3}\)?[\s.\-]?[0-9]{3}[\s.\-]?[0-9]{4})",
        r"(?-u:\b)(\+?1?[\s.\-]?\(?[0-9]{3}\)?[\s.\-]?[0-9]{3}[\s.\-]?[0-9]{4})(?-u:\b)",
        r"(?-u:\b)\(([0-9]{3})\)[\s.\-]?([0-9]{3})[\s.\-]?([0-9]{4})(?-u:\b)",
        r"(?-u:\b)([0-9]{3})[\s.\-]([0-9]{3})[\s.\-]([0-9]{4})(?-u:\b)",
    ]);

    // Email
    pub static ref EMAIL: Regex = Regex::new(
        r"(?-u:\b)([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})(?-u:\b)"
    ).unwrap();

    pub static ref LABELED_EMAIL: Regex = Regex::new(
        r"(?i)(?:email|e-mail|mail):\s*([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})"
    ).unwrap();

    // Dates as values
    pub static ref US_DATE_MDY: Regex = Regex::new(r"([0-9]{1,2})/([0-9]{1,2})/([0-9]{4}|[0-9]{2})(?-u:\b)").unwrap();
    pub static ref ISO_DATE: Regex = Regex::new(r"([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})").unwrap();
    pub static ref US_DATE_MDY_DASH: Regex = Regex::new(r"([0-9]{1,2})-([0-9]{1,2})-([0-9]{4}|[0-9]{2})(?-u:\b)").unwrap();
    pub static ref MONTH_DAY_YEAR: Regex = Regex::new(
        r"(?i)(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|oct|nov|dec)\s+([0-9]{1,2})(?:st|nd|rd|th)?(?:[,\s]+)?([0-9]{4})?"
    ).unwrap();
}
