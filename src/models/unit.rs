//! Organizational units ("schools") an entry is attributed to.

/// Catch-all unit. Used when no unit is given, always rendered first.
pub const GENERAL_UNIT: &str = "Allgemein";

/// Stored in place of a ticket number when none is given.
pub const NO_TICKET: &str = "Keine";

/// Unit codes offered by default.
pub const KNOWN_UNITS: [&str; 18] = [
    GENERAL_UNIT,
    "FVM",
    "ODL",
    "RSU",
    "RSP",
    "GRG",
    "VIS",
    "GOL",
    "GPU",
    "MBG",
    "CSG",
    "GGZ",
    "BSF",
    "LWS",
    "FBF",
    "FOG",
    "PES",
    "EPS",
];

pub fn is_general(unit: &str) -> bool {
    unit == GENERAL_UNIT
}

/// Unit as stored: blank input is filed under [`GENERAL_UNIT`].
pub fn stored_unit(input: &str) -> &str {
    match input.trim() {
        "" => GENERAL_UNIT,
        u => u,
    }
}

/// Default unit list, as owned strings (config default).
pub fn default_units() -> Vec<String> {
    KNOWN_UNITS.iter().map(|u| u.to_string()).collect()
}

/// Match user input against the known unit list, case-insensitively.
/// Returns the canonical spelling from `known`.
pub fn canonical(input: &str, known: &[String]) -> Option<String> {
    let needle = input.trim();
    known
        .iter()
        .find(|u| u.eq_ignore_ascii_case(needle))
        .cloned()
}
