//! End-to-end conversion of a NetCDF temperature file
//!
//! The input is read completely and closed before the output path is
//! touched, so a missing or unreadable input never removes an existing
//! output file.

use crate::conversion::extract_celsius_level;
use crate::errors::Result;
use crate::netcdf_io::{NetCDFWriter, OutputDataset, SourceFile};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "rectilinear_grid_3D.nc";
pub const DEFAULT_OUTPUT: &str = "t_degC_py.nc";
pub const DEFAULT_VARIABLE: &str = "t";

pub const TIME: &str = "time";
pub const LAT: &str = "lat";
pub const LON: &str = "lon";

/// Options for a single conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub variable: String,
    pub level: usize,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            variable: DEFAULT_VARIABLE.to_string(),
            level: 0,
        }
    }
}

/// What was written by [`convert_file`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub output: PathBuf,
    /// `(time, lat, lon)` lengths of the written variable
    pub shape: [usize; 3],
    /// Smallest finite value in degrees Celsius
    pub min: Option<f32>,
    /// Largest finite value in degrees Celsius
    pub max: Option<f32>,
}

/// Reads everything the output needs from `options.input`.
pub fn read_dataset(options: &ConversionOptions) -> Result<OutputDataset> {
    let source = SourceFile::open(&options.input)?;

    let data = extract_celsius_level(&source, &options.variable, options.level)?;
    let coordinates = [TIME, LAT, LON]
        .iter()
        .map(|name| source.read_coordinate(name))
        .collect::<Result<Vec<_>>>()?;

    Ok(OutputDataset {
        time_dim: TIME.to_string(),
        lat_dim: source.dimension(LAT)?,
        lon_dim: source.dimension(LON)?,
        coordinates,
        data_name: options.variable.clone(),
        data,
    })
}

/// Converts one level of `options.variable` to degrees Celsius and writes it
/// to `options.output`, replacing any existing file.
pub fn convert_file(options: &ConversionOptions) -> Result<ConversionSummary> {
    let dataset = read_dataset(options)?;

    NetCDFWriter::new(&options.output).write(&dataset)?;

    let (time_len, lat_len, lon_len) = dataset.data.values.dim();
    let finite = || dataset.data.values.iter().copied().filter(|v| v.is_finite());
    Ok(ConversionSummary {
        output: options.output.clone(),
        shape: [time_len, lat_len, lon_len],
        min: finite().reduce(f32::min),
        max: finite().reduce(f32::max),
    })
}
