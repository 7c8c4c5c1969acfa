// Fallback extraction from the human-readable part of the page.
// Fills only fields that MRZ decoding left empty.
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::models::{CountryTable, Field, ParsedRecord};
use crate::processing::mrz::expand_year;

lazy_static! {
    static ref PASSPORT_NUMBER: Regex = Regex::new(r"\bE[-\s]*([0-9]{7,9})").unwrap();
    static ref MALE_TOKEN: Regex = Regex::new(r"\bM\b").unwrap();
    static ref FEMALE_TOKEN: Regex = Regex::new(r"\bF\b").unwrap();
    static ref TEXT_DATE: Regex = Regex::new(
        r"([0-9]{1,2})\s*(JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)\s*([0-9]{2})"
    ).unwrap();
}

const MONTHS: [(&str, &str); 12] = [
    ("JAN", "01"), ("FEB", "02"), ("MAR", "03"), ("APR", "04"),
    ("MAY", "05"), ("JUN", "06"), ("JUL", "07"), ("AUG", "08"),
    ("SEP", "09"), ("OCT", "10"), ("NOV", "11"), ("DEC", "12"),
];

/// A date found in running text, e.g. `1 JAN 85`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDate {
    /// The two-digit year as printed
    pub year_value: u32,
    /// `DD/MM/YYYY`
    pub formatted: String,
}

impl TextDate {
    /// Which field a date most likely belongs to, judged by its year alone.
    /// Birth years sit in the 80s and 90s, issue years in 2020-2025 and
    /// expiry years in 2030-2040; anything else is dropped.
    pub fn field(&self) -> Option<Field> {
        match self.year_value {
            81..=99 => Some(Field::DateOfBirth),
            20..=25 => Some(Field::IssueDate),
            30..=40 => Some(Field::ExpiryDate),
            _ => None,
        }
    }
}

pub struct FreeTextExtractor;

impl FreeTextExtractor {
    /// Scans every line in order and sets fields of `record` that are still
    /// absent. Values already present are never replaced.
    pub fn fill<S: AsRef<str>>(lines: &[S], record: &mut ParsedRecord) {
        for line in lines {
            let line: &str = line.as_ref();
            let upper = line.to_uppercase();

            if record.is_absent(Field::PassportNumber) {
                if let Some(number) = extract_passport_number(&upper) {
                    record.set_if_absent(Field::PassportNumber, number);
                }
            }

            if record.is_absent(Field::Nationality) {
                if let Some(country) = extract_nationality(&upper) {
                    record.set_if_absent(Field::Nationality, country);
                }
            }

            if record.is_absent(Field::Gender) {
                if let Some(gender) = extract_gender(&upper) {
                    record.set_if_absent(Field::Gender, gender);
                }
            }

            for date in extract_dates(&upper) {
                match date.field() {
                    Some(field) => {
                        if record.set_if_absent(field, date.formatted.clone()) {
                            trace!("Free text: {} = {}", field.key(), date.formatted);
                        }
                    }
                    None => trace!("Free text: no field for {}", date.formatted),
                }
            }
        }
    }
}

/// `E` at a word boundary, optional `-`/space separators, 7-9 digits
pub fn extract_passport_number(line: &str) -> Option<String> {
    PASSPORT_NUMBER
        .captures(line)
        .map(|caps| format!("E{}", &caps[1]))
}

pub fn extract_nationality(line: &str) -> Option<String> {
    CountryTable::find_in_text(line).map(str::to_string)
}

/// Female is tested first so that `FEMALE` is not taken for its `MALE` suffix
pub fn extract_gender(line: &str) -> Option<String> {
    if line.contains("FEMALE") || FEMALE_TOKEN.is_match(line) {
        Some("Female".to_string())
    } else if line.contains("MALE") || MALE_TOKEN.is_match(line) {
        Some("Male".to_string())
    } else {
        None
    }
}

/// Every `D[D] MON YY` date on the line, in order of appearance
pub fn extract_dates(line: &str) -> Vec<TextDate> {
    TEXT_DATE
        .captures_iter(line)
        .filter_map(|caps| {
            let day: u32 = caps[1].parse().ok()?;
            let month = month_number(&caps[2])?;
            let year_value: u32 = caps[3].parse().ok()?;
            Some(TextDate {
                year_value,
                formatted: format!("{:02}/{}/{}", day, month, expand_year(year_value)),
            })
        })
        .collect()
}

fn month_number(abbrev: &str) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(name, _)| *name == abbrev)
        .map(|(_, number)| *number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passport_number_separators() {
        assert_eq!(extract_passport_number("NO. E-1234567").as_deref(), Some("E1234567"));
        assert_eq!(extract_passport_number("E 123456789").as_deref(), Some("E123456789"));
        assert_eq!(extract_passport_number("PASSPORT E12345678").as_deref(), Some("E12345678"));
    }

    #[test]
    fn test_passport_number_needs_word_boundary() {
        assert_eq!(extract_passport_number("CODE1234567"), None);
        assert_eq!(extract_passport_number("E123456"), None);
    }

    #[test]
    fn test_gender_precedence() {
        assert_eq!(extract_gender("SEX: FEMALE").as_deref(), Some("Female"));
        assert_eq!(extract_gender("SEX: MALE").as_deref(), Some("Male"));
        assert_eq!(extract_gender("SEX / F").as_deref(), Some("Female"));
        assert_eq!(extract_gender("SEX / M").as_deref(), Some("Male"));
        assert_eq!(extract_gender("MARRIED"), None);
    }

    #[test]
    fn test_dates_expand_and_pad() {
        let dates = extract_dates("1 JAN 85 / 15MAR22 / 14 MAR 32");
        let formatted: Vec<&str> = dates.iter().map(|d| d.formatted.as_str()).collect();
        assert_eq!(formatted, vec!["01/01/1985", "15/03/2022", "14/03/2032"]);
    }

    #[test]
    fn test_date_fields_by_year() {
        let field = |line: &str| extract_dates(line)[0].field();
        assert_eq!(field("01 JAN 80"), None);
        assert_eq!(field("01 JAN 81"), Some(Field::DateOfBirth));
        assert_eq!(field("01 JAN 99"), Some(Field::DateOfBirth));
        assert_eq!(field("01 JAN 20"), Some(Field::IssueDate));
        assert_eq!(field("01 JAN 25"), Some(Field::IssueDate));
        assert_eq!(field("01 JAN 26"), None);
        assert_eq!(field("01 JAN 30"), Some(Field::ExpiryDate));
        assert_eq!(field("01 JAN 40"), Some(Field::ExpiryDate));
        assert_eq!(field("01 JAN 45"), None);
    }

    #[test]
    fn test_fill_first_match_wins() {
        let lines = [
            "Date of birth 12 AUG 91",
            "Date of issue 03 MAY 21",
            "Date of expiry 03 MAY 31",
            "Previous passport 04 APR 20 - 04 APR 30",
            "Sex M",
            "Nationality MONGOLIA",
        ];
        let mut record = ParsedRecord::new();
        FreeTextExtractor::fill(&lines, &mut record);

        assert_eq!(record.date_of_birth.as_deref(), Some("12/08/1991"));
        assert_eq!(record.issue_date.as_deref(), Some("03/05/2021"));
        assert_eq!(record.expiry_date.as_deref(), Some("03/05/2031"));
        assert_eq!(record.gender.as_deref(), Some("Male"));
        assert_eq!(record.nationality.as_deref(), Some("MONGOLIA"));
    }

    #[test]
    fn test_fill_never_overwrites() {
        let mut record = ParsedRecord::new();
        record.set_if_absent(Field::Gender, "Female".to_string());
        record.set_if_absent(Field::PassportNumber, "E012345678".to_string());
        record.set_if_absent(Field::DateOfBirth, "01/01/1980".to_string());

        FreeTextExtractor::fill(&["SEX: MALE  E 7654321  DOB 05 JUN 88"], &mut record);

        assert_eq!(record.gender.as_deref(), Some("Female"));
        assert_eq!(record.passport_number.as_deref(), Some("E012345678"));
        assert_eq!(record.date_of_birth.as_deref(), Some("01/01/1980"));
    }
}
