//! NetCDF I/O: reading the source file and writing the converted file
//!
//! [`SourceFile`] wraps an open input file and turns missing names into
//! typed errors. [`NetCDFWriter`] recreates the output file from an
//! [`OutputDataset`], mirroring the source coordinate variables and their
//! attributes.

use crate::conversion::LevelSlice;
use crate::errors::{NcDegCError, Result};
use crate::metadata::{self, AttributeMap, DimensionInfo};
use ndarray::{Array1, ArrayD, Ix1};
use netcdf::types::{FloatType, IntType, NcTypeDescriptor, NcVariableType};
use netcdf::{create, open, File, FileMut, Variable, VariableMut};
use std::collections::HashSet;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Values of a 1-D coordinate variable, kept in their on-disk element type
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateValues {
    I8(Array1<i8>),
    U8(Array1<u8>),
    I16(Array1<i16>),
    U16(Array1<u16>),
    I32(Array1<i32>),
    U32(Array1<u32>),
    I64(Array1<i64>),
    U64(Array1<u64>),
    F32(Array1<f32>),
    F64(Array1<f64>),
}

impl CoordinateValues {
    pub fn len(&self) -> usize {
        match self {
            CoordinateValues::I8(v) => v.len(),
            CoordinateValues::U8(v) => v.len(),
            CoordinateValues::I16(v) => v.len(),
            CoordinateValues::U16(v) => v.len(),
            CoordinateValues::I32(v) => v.len(),
            CoordinateValues::U32(v) => v.len(),
            CoordinateValues::I64(v) => v.len(),
            CoordinateValues::U64(v) => v.len(),
            CoordinateValues::F32(v) => v.len(),
            CoordinateValues::F64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(var: &Variable) -> Result<Self> {
        let values = match var.vartype() {
            NcVariableType::Int(IntType::I8) => CoordinateValues::I8(read_1d(var)?),
            NcVariableType::Int(IntType::U8) => CoordinateValues::U8(read_1d(var)?),
            NcVariableType::Int(IntType::I16) => CoordinateValues::I16(read_1d(var)?),
            NcVariableType::Int(IntType::U16) => CoordinateValues::U16(read_1d(var)?),
            NcVariableType::Int(IntType::I32) => CoordinateValues::I32(read_1d(var)?),
            NcVariableType::Int(IntType::U32) => CoordinateValues::U32(read_1d(var)?),
            NcVariableType::Int(IntType::I64) => CoordinateValues::I64(read_1d(var)?),
            NcVariableType::Int(IntType::U64) => CoordinateValues::U64(read_1d(var)?),
            NcVariableType::Float(FloatType::F32) => CoordinateValues::F32(read_1d(var)?),
            NcVariableType::Float(FloatType::F64) => CoordinateValues::F64(read_1d(var)?),
            other => {
                return Err(NcDegCError::UnsupportedType {
                    var: var.name().to_string(),
                    vartype: format!("{:?}", other).to_lowercase(),
                })
            }
        };
        Ok(values)
    }

    fn define<'f>(
        &self,
        file: &'f mut FileMut,
        name: &str,
        dims: &[&str],
    ) -> Result<VariableMut<'f>> {
        let var = match self {
            CoordinateValues::I8(_) => file.add_variable::<i8>(name, dims)?,
            CoordinateValues::U8(_) => file.add_variable::<u8>(name, dims)?,
            CoordinateValues::I16(_) => file.add_variable::<i16>(name, dims)?,
            CoordinateValues::U16(_) => file.add_variable::<u16>(name, dims)?,
            CoordinateValues::I32(_) => file.add_variable::<i32>(name, dims)?,
            CoordinateValues::U32(_) => file.add_variable::<u32>(name, dims)?,
            CoordinateValues::I64(_) => file.add_variable::<i64>(name, dims)?,
            CoordinateValues::U64(_) => file.add_variable::<u64>(name, dims)?,
            CoordinateValues::F32(_) => file.add_variable::<f32>(name, dims)?,
            CoordinateValues::F64(_) => file.add_variable::<f64>(name, dims)?,
        };
        Ok(var)
    }

    fn put(&self, var: &mut VariableMut) -> Result<()> {
        // Explicit extents so an unlimited dimension grows to the full length
        let extent = 0..self.len();
        match self {
            CoordinateValues::I8(v) => var.put(v.view(), extent)?,
            CoordinateValues::U8(v) => var.put(v.view(), extent)?,
            CoordinateValues::I16(v) => var.put(v.view(), extent)?,
            CoordinateValues::U16(v) => var.put(v.view(), extent)?,
            CoordinateValues::I32(v) => var.put(v.view(), extent)?,
            CoordinateValues::U32(v) => var.put(v.view(), extent)?,
            CoordinateValues::I64(v) => var.put(v.view(), extent)?,
            CoordinateValues::U64(v) => var.put(v.view(), extent)?,
            CoordinateValues::F32(v) => var.put(v.view(), extent)?,
            CoordinateValues::F64(v) => var.put(v.view(), extent)?,
        }
        Ok(())
    }
}

fn read_1d<T>(var: &Variable) -> Result<Array1<T>>
where
    T: NcTypeDescriptor + Copy,
{
    Ok(var.get::<T, _>(..)?.into_dimensionality::<Ix1>()?)
}

/// A coordinate variable read from the source file
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateVariable {
    pub name: String,
    pub dimensions: Vec<String>,
    pub attributes: AttributeMap,
    pub values: CoordinateValues,
}

/// An input NetCDF file opened for reading
pub struct SourceFile {
    path: PathBuf,
    file: File,
}

impl SourceFile {
    /// Opens `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`NcDegCError::InputNotFound`] if the path does not exist and
    /// [`NcDegCError::NetCDFError`] if it is not a readable NetCDF file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(NcDegCError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up a variable by name.
    pub fn variable(&self, var_name: &str) -> Result<Variable<'_>> {
        self.file
            .variable(var_name)
            .ok_or_else(|| NcDegCError::VariableNotFound {
                var: var_name.to_string(),
            })
    }

    /// Looks up a dimension by name.
    pub fn dimension(&self, dim_name: &str) -> Result<DimensionInfo> {
        metadata::file_dimension(&self.file, dim_name)
    }

    /// Reads a whole variable as `f32`.
    pub fn read_variable_f32(&self, var_name: &str) -> Result<ArrayD<f32>> {
        let var = self.variable(var_name)?;
        Ok(var.get::<f32, _>(..)?)
    }

    /// Reads a 1-D coordinate variable with its native element type and all
    /// of its attributes.
    pub fn read_coordinate(&self, var_name: &str) -> Result<CoordinateVariable> {
        let var = self.variable(var_name)?;
        let dimensions = metadata::dimension_names(&var);
        if dimensions.len() != 1 {
            return Err(NcDegCError::InvalidShape {
                var: var_name.to_string(),
                message: format!(
                    "expected a 1-D coordinate variable, found dimensions [{}]",
                    dimensions.join(", ")
                ),
            });
        }

        Ok(CoordinateVariable {
            name: var_name.to_string(),
            attributes: metadata::read_attributes(&var)?,
            values: CoordinateValues::read(&var)?,
            dimensions,
        })
    }
}

/// Everything the writer needs, read from the source before the output is touched
#[derive(Debug, Clone)]
pub struct OutputDataset {
    /// Name of the unlimited (record) dimension
    pub time_dim: String,
    pub lat_dim: DimensionInfo,
    pub lon_dim: DimensionInfo,
    pub coordinates: Vec<CoordinateVariable>,
    pub data_name: String,
    pub data: LevelSlice,
}

/// Writer for the converted temperature file
pub struct NetCDFWriter<'a> {
    output_path: &'a Path,
}

impl<'a> NetCDFWriter<'a> {
    pub const STANDARD_NAME: &'static str = "temperature";
    pub const UNITS: &'static str = "degC";

    pub fn new(output_path: &'a Path) -> Self {
        Self { output_path }
    }

    /// Replaces the output file with `dataset`.
    ///
    /// All dimensions, variables and attributes are defined before any data
    /// is written. The file is closed when the handle goes out of scope at
    /// the end of this call, on success and on error.
    pub fn write(&self, dataset: &OutputDataset) -> Result<()> {
        if self.output_path.exists() {
            fs::remove_file(self.output_path)?;
        }

        let mut file = create(self.output_path)?;

        file.add_unlimited_dimension(&dataset.time_dim)?;
        file.add_dimension(&dataset.lat_dim.name, dataset.lat_dim.length)?;
        file.add_dimension(&dataset.lon_dim.name, dataset.lon_dim.length)?;

        let defined: HashSet<&str> = [
            dataset.time_dim.as_str(),
            dataset.lat_dim.name.as_str(),
            dataset.lon_dim.name.as_str(),
        ]
        .into_iter()
        .collect();

        for coord in &dataset.coordinates {
            let dims = checked_dims(&coord.name, &coord.dimensions, &defined)?;
            let mut var = coord.values.define(&mut file, &coord.name, &dims)?;
            metadata::copy_attributes(&mut var, &coord.attributes)?;
        }

        let data_dims = checked_dims(&dataset.data_name, &dataset.data.dimensions, &defined)?;
        {
            let mut var = file.add_variable::<f32>(&dataset.data_name, &data_dims)?;
            var.put_attribute("standard_name", Self::STANDARD_NAME)?;
            var.put_attribute("units", Self::UNITS)?;
        }

        for coord in &dataset.coordinates {
            let mut var = variable_mut(&mut file, &coord.name)?;
            coord.values.put(&mut var)?;
        }

        let (time_len, lat_len, lon_len) = dataset.data.values.dim();
        let values = dataset.data.values.as_standard_layout();
        let mut var = variable_mut(&mut file, &dataset.data_name)?;
        var.put(values.view(), (0..time_len, 0..lat_len, 0..lon_len))?;

        Ok(())
    }
}

fn checked_dims<'d>(
    var_name: &str,
    dims: &'d [String],
    defined: &HashSet<&str>,
) -> Result<Vec<&'d str>> {
    dims.iter()
        .map(|dim| {
            if defined.contains(dim.as_str()) {
                Ok(dim.as_str())
            } else {
                Err(NcDegCError::DimensionNotFound {
                    var: var_name.to_string(),
                    dim: dim.clone(),
                })
            }
        })
        .collect()
}

fn variable_mut<'f>(file: &'f mut FileMut, var_name: &str) -> Result<VariableMut<'f>> {
    file.variable_mut(var_name)
        .ok_or_else(|| NcDegCError::VariableNotFound {
            var: var_name.to_string(),
        })
}
