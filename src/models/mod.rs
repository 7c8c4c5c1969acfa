pub mod country;
pub mod ocr;
pub mod record;
pub mod report;

pub use country::{CountryTable, COUNTRY_CODES};
pub use ocr::{BoundingBox, OcrLine, OcrOutput, OcrWord};
pub use record::{Field, ParsedRecord};
pub use report::{ExtractedData, ExtractionReport, DEFAULT_PLACEHOLDER};
