//! Entry point for the nc_degc application.
//! Parses the command line, runs the conversion and reports what was written.

use clap::Parser;
use nc_degc::cli::Args;
use nc_degc::pipeline::convert_file;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let options = args.conversion_options();

    println!("📂 Reading '{}' from {}", options.variable, options.input.display());

    let summary = convert_file(&options)?;
    println!("✅ Saved result to {}", summary.output.display());

    if args.verbose {
        let [time_len, lat_len, lon_len] = summary.shape;
        println!("📊 Level {} in degC:", options.level);
        println!("   Shape: ({} × {} × {})", time_len, lat_len, lon_len);
        match (summary.min, summary.max) {
            (Some(min), Some(max)) => {
                println!("   Min: {:.2}", min);
                println!("   Max: {:.2}", max);
            }
            _ => println!("⚠ No valid (finite) data found in output"),
        }
    }

    Ok(())
}
