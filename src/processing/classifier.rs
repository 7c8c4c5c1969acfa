// MRZ line detection over raw OCR text
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

pub const FILLER: char = '<';

/// A named structural test applied to a cleaned line
pub type LineRule = (&'static str, fn(&str) -> bool);

lazy_static! {
    static ref DOCUMENT_TYPE_LINE: Regex = Regex::new(r"^P[A-Z<]").unwrap();
    static ref DOCUMENT_NUMBER_LINE: Regex = Regex::new(r"^E<[0-9]").unwrap();
    static ref LONG_MRZ_RUN: Regex = Regex::new(r"[A-Z0-9<]{40,}").unwrap();
}

pub const MRZ_LINE_RULES: &[LineRule] = &[
    ("filler_run", has_filler_run),
    ("classifier_artifact", has_classifier_artifact),
    ("document_type", is_document_type_line),
    ("document_number", is_document_number_line),
    ("issuer_with_filler", has_issuer_and_filler),
    ("long_mrz_run", has_long_mrz_run),
];

pub struct LineClassifier;

impl LineClassifier {
    /// Returns the candidate MRZ lines of `raw_text`, cleaned, in source order
    pub fn classify(raw_text: &str) -> Vec<String> {
        Self::classify_lines(&split_lines(raw_text))
    }

    pub fn classify_lines(lines: &[&str]) -> Vec<String> {
        lines
            .iter()
            .map(|line| clean_line(line))
            .filter(|line| Self::is_mrz_candidate(line))
            .collect()
    }

    /// `line` must already be cleaned with [`clean_line`]
    pub fn is_mrz_candidate(line: &str) -> bool {
        match MRZ_LINE_RULES.iter().find(|(_, rule)| rule(line)) {
            Some((name, _)) => {
                trace!("MRZ candidate ({}): {}", name, line);
                true
            }
            None => false,
        }
    }
}

/// Splits on newlines, trims, and drops empty lines
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Removes all whitespace and uppercases
pub fn clean_line(line: &str) -> String {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

pub fn has_filler_run(line: &str) -> bool {
    line.contains("<<")
}

/// `<Z<` and `<L` are how OCR tends to misread long filler runs
pub fn has_classifier_artifact(line: &str) -> bool {
    line.contains("<Z<") || line.contains("<L")
}

pub fn is_document_type_line(line: &str) -> bool {
    DOCUMENT_TYPE_LINE.is_match(line)
}

pub fn is_document_number_line(line: &str) -> bool {
    DOCUMENT_NUMBER_LINE.is_match(line)
}

pub fn has_issuer_and_filler(line: &str) -> bool {
    line.contains("MNG") && line.contains(FILLER)
}

pub fn has_long_mrz_run(line: &str) -> bool {
    line.chars().count() > 40 && LONG_MRZ_RUN.is_match(line)
}
