//! Defines command-line interface options using `clap` for the nc_degc application.

use crate::pipeline::{ConversionOptions, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_VARIABLE};
use clap::Parser;
use std::path::PathBuf;

/// Convert a NetCDF temperature level from Kelvin to degrees Celsius
#[derive(Parser, Debug)]
#[command(
    version,
    name = "nc_degc",
    about = "Writes one level of a NetCDF temperature variable in degrees Celsius"
)]
pub struct Args {
    /// Path to the input NetCDF file
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub file: PathBuf,

    /// Path of the NetCDF file to create. An existing file is replaced.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Name of the 4-D (time, level, lat, lon) temperature variable
    #[arg(long, default_value = DEFAULT_VARIABLE)]
    pub variable: String,

    /// Index along the level dimension to extract
    #[arg(long, default_value_t = 0)]
    pub level: usize,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions {
            input: self.file.clone(),
            output: self.output.clone(),
            variable: self.variable.clone(),
            level: self.level,
        }
    }
}
