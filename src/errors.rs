//! Centralized error handling for nc_degc
//!
//! Every stage of the conversion returns [`Result`], so a failure anywhere in
//! reading, converting or writing propagates unchanged to the caller.

use std::fmt;
use std::path::PathBuf;

/// Main error type for nc_degc operations
#[derive(Debug)]
pub enum NcDegCError {
    /// NetCDF library errors, including unrecognized file formats
    NetCDFError(netcdf::Error),

    /// I/O operation errors
    IoError(std::io::Error),

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Input file does not exist
    InputNotFound { path: PathBuf },

    /// Variable not found in NetCDF file
    VariableNotFound { var: String },

    /// Dimension not defined in the file
    MissingDimension { dim: String },

    /// Variable refers to a dimension that is not defined
    DimensionNotFound { var: String, dim: String },

    /// Element type that cannot be copied to the output
    UnsupportedType { var: String, vartype: String },

    /// Variable does not have the expected number of dimensions
    InvalidShape { var: String, message: String },

    /// The level axis has no entries
    EmptyLevelAxis { var: String },

    /// Requested level index is past the end of the level axis
    LevelOutOfRange { level: usize, len: usize },
}

impl fmt::Display for NcDegCError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NcDegCError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            NcDegCError::IoError(e) => write!(f, "I/O error: {}", e),
            NcDegCError::ArrayError(e) => write!(f, "Array error: {}", e),
            NcDegCError::InputNotFound { path } => {
                write!(f, "Input file '{}' not found", path.display())
            }
            NcDegCError::VariableNotFound { var } => {
                write!(f, "Variable '{}' not found in file", var)
            }
            NcDegCError::MissingDimension { dim } => {
                write!(f, "Dimension '{}' not found in file", dim)
            }
            NcDegCError::DimensionNotFound { var, dim } => {
                write!(f, "Dimension '{}' not found in variable '{}'", dim, var)
            }
            NcDegCError::UnsupportedType { var, vartype } => {
                write!(f, "Variable '{}' has unsupported type {}", var, vartype)
            }
            NcDegCError::InvalidShape { var, message } => {
                write!(f, "Invalid shape for variable '{}': {}", var, message)
            }
            NcDegCError::EmptyLevelAxis { var } => {
                write!(f, "Level axis of variable '{}' is empty", var)
            }
            NcDegCError::LevelOutOfRange { level, len } => write!(
                f,
                "Level index {} out of range (level axis length: {})",
                level, len
            ),
        }
    }
}

impl std::error::Error for NcDegCError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NcDegCError::NetCDFError(e) => Some(e),
            NcDegCError::IoError(e) => Some(e),
            NcDegCError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for NcDegCError {
    fn from(error: netcdf::Error) -> Self {
        NcDegCError::NetCDFError(error)
    }
}

impl From<std::io::Error> for NcDegCError {
    fn from(error: std::io::Error) -> Self {
        NcDegCError::IoError(error)
    }
}

impl From<ndarray::ShapeError> for NcDegCError {
    fn from(error: ndarray::ShapeError) -> Self {
        NcDegCError::ArrayError(error)
    }
}

/// Result type alias for nc_degc operations
pub type Result<T> = std::result::Result<T, NcDegCError>;
