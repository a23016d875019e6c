//! NetCDF metadata model: dimensions and variable attributes
//!
//! Attributes are collected into an [`AttributeMap`], an explicit mapping
//! from attribute name to value that iterates in lexicographic key order.
//! Copying attributes from one variable to another is then a plain loop over
//! the map, which gives the same write order on every run.

use crate::errors::{NcDegCError, Result};
use netcdf::{AttributeValue, Dimension, File, Variable, VariableMut};
use std::collections::BTreeMap;

/// Attributes of a variable, ordered by name
pub type AttributeMap = BTreeMap<String, AttributeValue>;

/// Information about a dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionInfo {
    pub name: String,
    pub length: usize,
    pub is_unlimited: bool,
}

impl DimensionInfo {
    pub fn from_dimension(dim: &Dimension) -> Self {
        Self {
            name: dim.name().to_string(),
            length: dim.len(),
            is_unlimited: dim.is_unlimited(),
        }
    }
}

/// Reads every attribute of `var` into an ordered map.
pub fn read_attributes(var: &Variable) -> Result<AttributeMap> {
    let mut attributes = AttributeMap::new();
    for attr in var.attributes() {
        attributes.insert(attr.name().to_string(), attr.value()?);
    }
    Ok(attributes)
}

/// Writes `attributes` onto `var` in sorted key order.
pub fn copy_attributes(var: &mut VariableMut, attributes: &AttributeMap) -> Result<()> {
    for (name, value) in attributes {
        var.put_attribute(name, value.clone())?;
    }
    Ok(())
}

/// Names of the dimensions `var` is defined over, in order.
pub fn dimension_names(var: &Variable) -> Vec<String> {
    var.dimensions()
        .iter()
        .map(|d| d.name().to_string())
        .collect()
}

/// Looks up a dimension defined in `file`.
pub fn file_dimension(file: &File, dim_name: &str) -> Result<DimensionInfo> {
    file.dimension(dim_name)
        .map(|dim| DimensionInfo::from_dimension(&dim))
        .ok_or_else(|| NcDegCError::MissingDimension {
            dim: dim_name.to_string(),
        })
}

/// Returns the attribute value as a string, if it holds one.
pub fn string_attribute(attributes: &AttributeMap, name: &str) -> Option<String> {
    match attributes.get(name)? {
        AttributeValue::Str(value) => Some(value.clone()),
        _ => None,
    }
}
