use log::debug;

use crate::models::{OcrOutput, ParsedRecord};
use crate::processing::classifier::split_lines;
use crate::processing::{FreeTextExtractor, LineClassifier, MrzDecoder};

/// Turns OCR text into a [`ParsedRecord`].
///
/// Parsing holds no state between calls and never fails: input with nothing
/// recognisable gives a record with every field absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassportParser;

impl PassportParser {
    pub fn new() -> Self {
        PassportParser
    }

    // Main parse function that orchestrates the whole process
    pub fn parse_text(&self, text: &str) -> ParsedRecord {
        // Step 1: Split into non-empty trimmed lines
        let lines = split_lines(text);

        // Step 2: Find MRZ candidates
        let mrz_lines = LineClassifier::classify_lines(&lines);
        debug!("Found MRZ lines: {:?}", mrz_lines);

        // Step 3: Decode the first two candidates
        let mut record = MrzDecoder::decode(&mrz_lines);
        record.mrz_lines = mrz_lines;

        // Step 4: Fill the gaps from the free text
        FreeTextExtractor::fill(&lines, &mut record);

        debug!("Extracted data: {:?}", record);
        record
    }

    pub fn parse_ocr(&self, ocr: &OcrOutput) -> ParsedRecord {
        self.parse_text(&ocr.text)
    }
}
