use std::path::PathBuf;

use clap::Parser;
use passport_reader::processing::samples::write_samples;
use passport_reader::utils::PassportError;

#[derive(Debug, Parser)]
#[command(about = "Write synthetic MRZ samples for demos and smoke tests")]
struct Args {
    /// Target directory
    #[arg(default_value = "sample-data")]
    output_dir: PathBuf,
}

fn main() -> Result<(), PassportError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let written = write_samples(&args.output_dir)?;
    for path in &written {
        println!("  {}", path.display());
    }
    Ok(())
}
