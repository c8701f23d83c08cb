//! Static EU membership lookup used to gate VAT accrual.

/// ISO 3166-1 alpha-2 codes of the 27 EU member states, lowercase, sorted.
const EU_MEMBERS: [&str; 27] = [
    "at", "be", "bg", "cy", "cz", "de", "dk", "ee", "es", "fi", "fr", "gr", "hr", "hu", "ie",
    "it", "lt", "lu", "lv", "mt", "nl", "pl", "pt", "ro", "se", "si", "sk",
];

/// Returns `true` if the (lowercase) country code belongs to an EU member
/// state.
pub fn is_eu_member(code: &str) -> bool {
    EU_MEMBERS.binary_search(&code).is_ok()
}
