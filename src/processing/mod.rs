pub mod classifier;
pub mod free_text;
pub mod mrz;
pub mod samples;

pub use classifier::LineClassifier;
pub use free_text::FreeTextExtractor;
pub use mrz::MrzDecoder;
