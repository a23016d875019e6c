//! nc_degc: Kelvin to Celsius conversion for gridded NetCDF temperature data
//!
//! Reads a 4-D `(time, level, lat, lon)` temperature variable from a NetCDF
//! file, keeps one vertical level, converts it to degrees Celsius and writes a
//! new NetCDF file with the `time`, `lat` and `lon` coordinate variables and
//! their attributes copied over.
//!
//! ## Module Organization
//!
//! - [`netcdf_io`]: reading the source file and writing the converted file
//! - [`conversion`]: level selection and unit conversion
//! - [`metadata`]: dimensions and ordered attribute maps
//! - [`pipeline`]: the end-to-end conversion
//! - [`errors`]: centralized error handling
//!
//! ## Usage
//! ```rust,no_run
//! use nc_degc::prelude::*;
//!
//! let options = ConversionOptions {
//!     input: "rectilinear_grid_3D.nc".into(),
//!     output: "t_degC_py.nc".into(),
//!     ..ConversionOptions::default()
//! };
//! let summary = convert_file(&options).unwrap();
//! println!("wrote {:?} to {}", summary.shape, summary.output.display());
//! ```

pub mod cli;
pub mod conversion;
pub mod errors;
pub mod metadata;
pub mod netcdf_io;
pub mod pipeline;

pub use conversion::*;
pub use errors::*;
pub use metadata::*;
pub use netcdf_io::*;
pub use pipeline::*;

pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::conversion::{kelvin_to_celsius, select_level, LevelSlice, KELVIN_OFFSET};
    pub use crate::errors::{NcDegCError, Result};
    pub use crate::netcdf_io::{NetCDFWriter, SourceFile};
    pub use crate::pipeline::{convert_file, ConversionOptions, ConversionSummary};
}
