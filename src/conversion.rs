//! Level selection and Kelvin to Celsius conversion
//!
//! The source temperature is a 4-D `(time, level, lat, lon)` variable. The
//! conversion keeps a single level and shifts every value by
//! [`KELVIN_OFFSET`].

use crate::errors::{NcDegCError, Result};
use crate::metadata;
use crate::netcdf_io::SourceFile;
use ndarray::{Array3, ArrayD, Axis, Ix3};

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_OFFSET: f32 = 273.15;

/// Position of the vertical level axis in `(time, level, lat, lon)`
pub const LEVEL_AXIS: usize = 1;

/// A single level of the temperature field together with the names of its
/// `(time, lat, lon)` dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSlice {
    pub dimensions: Vec<String>,
    pub values: Array3<f32>,
}

/// Selects index `level` along the level axis of a 4-D array.
///
/// # Errors
///
/// Fails if `data` is not 4-D, if the level axis is empty, or if `level` is
/// past its end.
pub fn select_level(var_name: &str, data: ArrayD<f32>, level: usize) -> Result<Array3<f32>> {
    if data.ndim() != 4 {
        return Err(NcDegCError::InvalidShape {
            var: var_name.to_string(),
            message: format!(
                "expected 4 dimensions (time, level, lat, lon), found {}",
                data.ndim()
            ),
        });
    }

    let len = data.len_of(Axis(LEVEL_AXIS));
    if len == 0 {
        return Err(NcDegCError::EmptyLevelAxis {
            var: var_name.to_string(),
        });
    }
    if level >= len {
        return Err(NcDegCError::LevelOutOfRange { level, len });
    }

    // The slice keeps the 4-D strides; writers need a contiguous C-order array
    let slice = data
        .index_axis_move(Axis(LEVEL_AXIS), level)
        .into_dimensionality::<Ix3>()?;
    Ok(slice.as_standard_layout().into_owned())
}

/// Converts temperatures from Kelvin to degrees Celsius in place.
pub fn kelvin_to_celsius(mut values: Array3<f32>) -> Array3<f32> {
    values.mapv_inplace(|v| v - KELVIN_OFFSET);
    values
}

/// Reads `var_name` from `source`, keeps `level` and converts it to Celsius.
pub fn extract_celsius_level(
    source: &SourceFile,
    var_name: &str,
    level: usize,
) -> Result<LevelSlice> {
    let mut dimensions = metadata::dimension_names(&source.variable(var_name)?);
    let data = source.read_variable_f32(var_name)?;
    let values = kelvin_to_celsius(select_level(var_name, data, level)?);

    dimensions.remove(LEVEL_AXIS);
    Ok(LevelSlice { dimensions, values })
}
