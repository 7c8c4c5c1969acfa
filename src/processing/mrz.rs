// Field extraction from the two leading MRZ candidate lines.
// Each extractor works on its own; a miss in one never blocks the others.
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::models::{CountryTable, Field, ParsedRecord};
use crate::processing::classifier::FILLER;

/// Issuer prefixes stripped from the name line before splitting
pub const NAME_LINE_PREFIXES: &[&str] = &["PEMNG", "P<MNG"];

/// Tokens left behind when OCR misreads filler runs
const NAME_ARTIFACTS: &[&str] = &["Z", "L"];

/// Two-digit years above this belong to the 1900s
pub const CENTURY_PIVOT: u32 = 50;

lazy_static! {
    static ref PASSPORT_NUMBER: Regex = Regex::new(r"E<?([0-9]{8,9})").unwrap();
    static ref NATIONALITY_CODE: Regex = Regex::new(r"[0-9]{8,9}([A-Z]{3})").unwrap();
    static ref BIRTH_DATE: Regex = Regex::new(r"[A-Z]{3}([0-9]{6})").unwrap();
    // Birth date plus its check digit; the leading boundary keeps the
    // document number run from being read as a date
    static ref SEX_MARKER: Regex = Regex::new(r"(?:^|[^0-9])[0-9]{6}[0-9]([MF])").unwrap();
    static ref EXPIRY_DATE: Regex = Regex::new(r"[MF]([0-9]{6})").unwrap();
}

pub struct MrzDecoder;

impl MrzDecoder {
    /// Decodes the first two candidate lines. Fewer than two lines yields an
    /// empty record; extra lines are ignored.
    pub fn decode<S: AsRef<str>>(candidates: &[S]) -> ParsedRecord {
        let mut record = ParsedRecord::new();
        let (line1, line2): (&str, &str) = match candidates {
            [first, second, ..] => (first.as_ref(), second.as_ref()),
            _ => return record,
        };

        if let Some(name) = extract_name(line1) {
            record.set_if_absent(Field::FullName, name);
        }

        if is_document_number_line(line2) {
            let extracted = [
                (Field::PassportNumber, extract_passport_number(line2)),
                (Field::Nationality, extract_nationality(line2)),
                (Field::DateOfBirth, extract_date_of_birth(line2)),
                (Field::Gender, extract_gender(line2)),
                (Field::ExpiryDate, extract_expiry_date(line2)),
            ];
            for (field, value) in extracted {
                match value {
                    Some(value) => {
                        record.set_if_absent(field, value);
                    }
                    None => trace!("MRZ: no {} in {}", field.key(), line2),
                }
            }
        }

        record
    }
}

/// The data line starts with the document number, `E` or `E<`
pub fn is_document_number_line(line: &str) -> bool {
    line.starts_with('E')
}

/// `SURNAME<<GIVEN` becomes `GIVEN SURNAME`
pub fn extract_name(line: &str) -> Option<String> {
    if !line.contains(FILLER) {
        return None;
    }

    let names = NAME_LINE_PREFIXES
        .iter()
        .find_map(|prefix| line.strip_prefix(prefix))
        .unwrap_or(line);

    let mut parts = names
        .split(FILLER)
        .filter(|part| !part.is_empty() && !NAME_ARTIFACTS.contains(part));

    let surname = parts.next()?;
    let given = parts.next()?;
    Some(format!("{} {}", given, surname))
}

pub fn extract_passport_number(line: &str) -> Option<String> {
    PASSPORT_NUMBER
        .captures(line)
        .map(|caps| format!("E{}", &caps[1]))
}

/// Only codes present in the country table are accepted
pub fn extract_nationality(line: &str) -> Option<String> {
    let caps = NATIONALITY_CODE.captures(line)?;
    CountryTable::name_for_code(&caps[1]).map(str::to_string)
}

pub fn extract_date_of_birth(line: &str) -> Option<String> {
    let caps = BIRTH_DATE.captures(line)?;
    format_mrz_date(&caps[1])
}

pub fn extract_gender(line: &str) -> Option<String> {
    let caps = SEX_MARKER.captures(line)?;
    match &caps[1] {
        "M" => Some("Male".to_string()),
        "F" => Some("Female".to_string()),
        _ => None,
    }
}

pub fn extract_expiry_date(line: &str) -> Option<String> {
    let caps = EXPIRY_DATE.captures(line)?;
    format_mrz_date(&caps[1])
}

/// Maps a two-digit year onto a full year using [`CENTURY_PIVOT`]
pub fn expand_year(yy: u32) -> u32 {
    if yy > CENTURY_PIVOT {
        1900 + yy
    } else {
        2000 + yy
    }
}

/// `YYMMDD` to `DD/MM/YYYY`. Anything but six ASCII digits is rejected.
pub fn format_mrz_date(date: &str) -> Option<String> {
    if date.len() != 6 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let yy: u32 = date[0..2].parse().ok()?;
    let month = &date[2..4];
    let day = &date[4..6];
    Some(format!("{}/{}/{}", day, month, expand_year(yy)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MALE_LINE1: &str = "P<MNGDOE<<JOHN<<<<<<<<<<<<<<<<<<<<<<";
    const MALE_LINE2: &str = "E<012345678MNG8001011M2501012<<<<<<<<<<<<<<04";
    const FEMALE_LINE2: &str = "E<987654321MNG8502022F3002023<<<<<<<<<<<<<<08";

    #[test]
    fn test_century_pivot() {
        for yy in 0..=50 {
            assert_eq!(expand_year(yy), 2000 + yy);
        }
        for yy in 51..=99 {
            assert_eq!(expand_year(yy), 1900 + yy);
        }
    }

    #[test]
    fn test_format_mrz_date() {
        assert_eq!(format_mrz_date("800101").as_deref(), Some("01/01/1980"));
        assert_eq!(format_mrz_date("500615").as_deref(), Some("15/06/2050"));
        assert_eq!(format_mrz_date("510615").as_deref(), Some("15/06/1951"));
        assert_eq!(format_mrz_date("80010"), None);
        assert_eq!(format_mrz_date("8O0101"), None);
    }

    #[test]
    fn test_name_with_known_prefix() {
        assert_eq!(extract_name(MALE_LINE1).as_deref(), Some("JOHN DOE"));
        assert_eq!(extract_name("PEMNGSMITH<<JANE<<<<").as_deref(), Some("JANE SMITH"));
    }

    #[test]
    fn test_name_skips_artifacts() {
        assert_eq!(extract_name("P<MNGBAT<Z<L<DORJ<<<").as_deref(), Some("DORJ BAT"));
    }

    #[test]
    fn test_name_needs_two_parts() {
        assert_eq!(extract_name("P<MNGDOE<<<<<<<"), None);
        assert_eq!(extract_name("PMNGDOEJOHN"), None);
    }

    #[test]
    fn test_name_without_prefix_keeps_leading_segment() {
        assert_eq!(extract_name("P<UTODEMO<<ALPHA<<").as_deref(), Some("UTODEMO P"));
    }

    #[test]
    fn test_passport_number() {
        assert_eq!(extract_passport_number(MALE_LINE2).as_deref(), Some("E012345678"));
        assert_eq!(extract_passport_number("E12345678MNG").as_deref(), Some("E12345678"));
        assert_eq!(extract_passport_number("E<1234567MNG"), None);
    }

    #[test]
    fn test_nationality_requires_known_code() {
        assert_eq!(extract_nationality(MALE_LINE2).as_deref(), Some("MONGOLIA"));
        assert_eq!(extract_nationality("E<012345678UTO8001011M"), None);
    }

    #[test]
    fn test_gender_and_dates() {
        assert_eq!(extract_date_of_birth(MALE_LINE2).as_deref(), Some("01/01/1980"));
        assert_eq!(extract_gender(MALE_LINE2).as_deref(), Some("Male"));
        assert_eq!(extract_expiry_date(MALE_LINE2).as_deref(), Some("01/01/2025"));

        assert_eq!(extract_date_of_birth(FEMALE_LINE2).as_deref(), Some("02/02/1985"));
        assert_eq!(extract_gender(FEMALE_LINE2).as_deref(), Some("Female"));
        assert_eq!(extract_expiry_date(FEMALE_LINE2).as_deref(), Some("02/02/2030"));
    }

    #[test]
    fn test_gender_ignores_document_number_digits() {
        // 987654321 followed by MNG must not read as a birth date and sex marker
        assert_eq!(extract_gender("E<987654321MNG"), None);
        assert_eq!(extract_gender("E<987654321MNG850202<F"), None);
    }

    #[test]
    fn test_decode_needs_two_lines() {
        assert_eq!(MrzDecoder::decode(&[MALE_LINE1]), ParsedRecord::new());
        assert_eq!(MrzDecoder::decode::<&str>(&[]), ParsedRecord::new());
    }

    #[test]
    fn test_decode_ignores_data_line_without_document_number() {
        let record = MrzDecoder::decode(&[MALE_LINE1, "X<012345678MNG8001011M2501012"]);
        assert_eq!(record.full_name.as_deref(), Some("JOHN DOE"));
        assert_eq!(record.passport_number, None);
        assert_eq!(record.date_of_birth, None);
    }

    #[test]
    fn test_decode_uses_first_two_lines_only() {
        let record = MrzDecoder::decode(&[MALE_LINE1, MALE_LINE2, FEMALE_LINE2]);
        assert_eq!(record.passport_number.as_deref(), Some("E012345678"));
        assert_eq!(record.gender.as_deref(), Some("Male"));
        assert_eq!(record.issue_date, None);
        assert!(record.mrz_lines.is_empty());
    }
}
