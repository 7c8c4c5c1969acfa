use std::collections::HashMap;
use lazy_static::lazy_static;

/// ICAO 3-letter codes and the country names reported for them.
/// Order matters: free-text matching takes the first entry found on a line.
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("VNM", "VIETNAM"),
    ("USA", "UNITED STATES"),
    ("CHN", "CHINA"),
    ("IND", "INDIA"),
    ("GBR", "UNITED KINGDOM"),
    ("FRA", "FRANCE"),
    ("DEU", "GERMANY"),
    ("JPN", "JAPAN"),
    ("KOR", "SOUTH KOREA"),
    ("THA", "THAILAND"),
    ("MNG", "MONGOLIA"),
];

lazy_static! {
    static ref COUNTRY_INDEX: HashMap<&'static str, &'static str> =
        COUNTRY_CODES.iter().copied().collect();
}

pub struct CountryTable;

impl CountryTable {
    /// Exact, case-sensitive lookup of a 3-letter code
    pub fn name_for_code(code: &str) -> Option<&'static str> {
        COUNTRY_INDEX.get(code).copied()
    }

    pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
        COUNTRY_CODES.iter().copied()
    }

    /// First table entry whose name or code occurs anywhere in `text`.
    pub fn find_in_text(text: &str) -> Option<&'static str> {
        Self::entries()
            .find(|(code, name)| text.contains(name) || text.contains(code))
            .map(|(_, name)| name)
    }
}
