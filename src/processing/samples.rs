// Synthetic MRZ fixtures for demos and smoke tests.
// UTO is the ICAO test state; none of these identify a real person.
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::utils::PassportError;

pub const SYNTHETIC_MRZ_SAMPLES: [&str; 3] = [
    "P<UTODEMO<<ALPHA<PASSPORT<<<<<<<<<<<<<<<<\nL0000000<0UTO0000000M0000000<<<<<<<<<<<<<<00",
    "P<UTODEMO<<BETA<PASSPORT<<<<<<<<<<<<<<<<<\nL1111111<1UTO1111111F1111111<<<<<<<<<<<<<<00",
    "P<UTODEMO<<GAMMA<PASSPORT<<<<<<<<<<<<<<<<\nL2222222<2UTO2222222M2222222<<<<<<<<<<<<<<00",
];

fn placeholder_svg(text: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"250\">\n  \
         <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n  \
         <text x=\"50%\" y=\"50%\" dominant-baseline=\"middle\" text-anchor=\"middle\" \
         font-family=\"Arial, sans-serif\" font-size=\"24\" fill=\"#888888\">{}</text>\n\
         </svg>\n",
        text
    )
}

/// Writes `sample_{n}.mrz` and `sample_{n}.svg` for every synthetic sample
/// into `dir`, creating it if needed. Returns the written paths.
pub fn write_samples<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, PassportError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(SYNTHETIC_MRZ_SAMPLES.len() * 2);
    for (idx, mrz) in SYNTHETIC_MRZ_SAMPLES.iter().enumerate() {
        let index = idx + 1;

        let mrz_path = dir.join(format!("sample_{}.mrz", index));
        fs::write(&mrz_path, mrz)?;
        written.push(mrz_path);

        let svg_path = dir.join(format!("sample_{}.svg", index));
        fs::write(&svg_path, placeholder_svg("Synthetic Sample"))?;
        written.push(svg_path);
    }

    info!("Generated {} synthetic samples in {}", SYNTHETIC_MRZ_SAMPLES.len(), dir.display());
    Ok(written)
}
