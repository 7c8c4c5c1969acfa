use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::models::{Field, OcrOutput, ParsedRecord};
use crate::utils::PassportError;

pub const DEFAULT_PLACEHOLDER: &str = "Not detected";

/// Field values as shown to the user, absent ones replaced by a placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedData {
    pub full_name: String,
    pub passport_number: String,
    pub nationality: String,
    pub date_of_birth: String,
    pub gender: String,
    pub issue_date: String,
    pub expiry_date: String,
}

impl ExtractedData {
    pub fn from_record(record: &ParsedRecord, placeholder: &str) -> Self {
        let render = |field: Field| record.get(field).unwrap_or(placeholder).to_string();
        ExtractedData {
            full_name: render(Field::FullName),
            passport_number: render(Field::PassportNumber),
            nationality: render(Field::Nationality),
            date_of_birth: render(Field::DateOfBirth),
            gender: render(Field::Gender),
            issue_date: render(Field::IssueDate),
            expiry_date: render(Field::ExpiryDate),
        }
    }
}

/// Exportable summary of one processed document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    pub extracted_data: ExtractedData,
    pub raw_text: String,
    pub mrz_lines: Vec<String>,
    pub processing_time: String,
    pub confidence: String,
    pub timestamp: String,
    #[serde(skip)]
    generated_at: DateTime<Utc>,
}

impl ExtractionReport {
    pub fn new(ocr: &OcrOutput, record: &ParsedRecord, placeholder: &str) -> Self {
        Self::generated_at(ocr, record, placeholder, Utc::now())
    }

    pub fn generated_at(
        ocr: &OcrOutput,
        record: &ParsedRecord,
        placeholder: &str,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let processing_time = ocr
            .processing_time
            .map(|secs| format!("{:.2}s", secs))
            .unwrap_or_else(|| placeholder.to_string());
        let confidence = ocr
            .confidence
            .map(|c| format!("{}%", c.round() as i64))
            .unwrap_or_else(|| placeholder.to_string());

        ExtractionReport {
            extracted_data: ExtractedData::from_record(record, placeholder),
            raw_text: ocr.text.clone(),
            mrz_lines: record.mrz_lines.clone(),
            processing_time,
            confidence,
            timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            generated_at,
        }
    }

    /// `passport_data_{unix millis}.json`
    pub fn default_file_name(&self) -> String {
        format!("passport_data_{}.json", self.generated_at.timestamp_millis())
    }

    pub fn to_json_pretty(&self) -> Result<String, PassportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), PassportError> {
        let json = self.to_json_pretty()?;
        fs::write(path.as_ref(), json)?;
        Ok(())
    }

    pub fn render_text(&self) -> String {
        let data = &self.extracted_data;
        let rows = [
            (Field::FullName, &data.full_name),
            (Field::PassportNumber, &data.passport_number),
            (Field::Nationality, &data.nationality),
            (Field::DateOfBirth, &data.date_of_birth),
            (Field::Gender, &data.gender),
            (Field::IssueDate, &data.issue_date),
            (Field::ExpiryDate, &data.expiry_date),
        ];

        let mut out = String::new();
        out.push_str("PASSPORT INFORMATION:\n");
        for (field, value) in rows {
            let _ = writeln!(out, "  {}: {}", field.label(), value);
        }

        out.push_str("\nMRZ DATA:\n");
        if self.mrz_lines.is_empty() {
            out.push_str("  No MRZ data detected\n");
        } else {
            for line in &self.mrz_lines {
                let _ = writeln!(out, "  {}", line);
            }
        }

        out.push_str("\nMETRICS:\n");
        let _ = writeln!(out, "  Processing Time: {}", self.processing_time);
        let _ = writeln!(out, "  Confidence: {}", self.confidence);
        let _ = writeln!(out, "  Generated: {}", self.timestamp);
        out
    }
}
