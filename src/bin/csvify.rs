use anyhow::Context;
use clap::Parser;
use std::path::Path;

const INPUT_PATH: &str = "hetzner.txt";
const OUTPUT_PATH: &str = "csv.txt";

/// Converts a benchmark log into a CSV table. Reads `hetzner.txt` and
/// overwrites `csv.txt`, both relative to the working directory; there is
/// nothing to configure.
#[derive(Parser, Debug)]
#[command(name = "csvify", version, about = "Benchmark log to CSV table")]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    csvify::convert::convert_file(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH))
        .with_context(|| format!("converting {INPUT_PATH} to {OUTPUT_PATH}"))?;
    Ok(())
}
