//! Shared NetCDF fixtures for the integration tests

#![allow(dead_code)]

use ndarray::{Array1, Array4};
use nc_degc::errors::Result;
use netcdf::create;
use std::path::Path;

pub const TIME_LEN: usize = 2;
pub const LEVEL_LEN: usize = 3;
pub const LAT_LEN: usize = 4;
pub const LON_LEN: usize = 5;

/// Temperature in Kelvin at each (time, level, lat, lon) point
pub fn kelvin_values() -> Array4<f32> {
    let n = TIME_LEN * LEVEL_LEN * LAT_LEN * LON_LEN;
    let data: Vec<f32> = (0..n).map(|i| 220.0 + i as f32 * 0.75).collect();
    Array4::from_shape_vec((TIME_LEN, LEVEL_LEN, LAT_LEN, LON_LEN), data)
        .expect("fixture shape matches data")
}

/// Creates a rectilinear grid file like the ones the converter reads:
/// `t(time, level, lat, lon)` in Kelvin plus `time`, `level`, `lat` and
/// `lon` coordinate variables with CF attributes.
pub fn create_source_file(path: &Path) -> Result<()> {
    let mut file = create(path)?;

    file.add_attribute("title", "Test rectilinear grid")?;

    file.add_unlimited_dimension("time")?;
    file.add_dimension("level", LEVEL_LEN)?;
    file.add_dimension("lat", LAT_LEN)?;
    file.add_dimension("lon", LON_LEN)?;

    {
        let mut time_var = file.add_variable::<f64>("time", &["time"])?;
        time_var.put_attribute("units", "hours since 2001-01-01 00:00:00")?;
        time_var.put_attribute("long_name", "time")?;
        time_var.put_attribute("calendar", "standard")?;
        let time_data = Array1::from(vec![0.0f64, 6.0]);
        time_var.put(time_data.view(), 0..TIME_LEN)?;
    }

    {
        let mut level_var = file.add_variable::<f32>("level", &["level"])?;
        level_var.put_attribute("units", "hPa")?;
        level_var.put_attribute("positive", "down")?;
        let level_data = Array1::from(vec![1000.0f32, 850.0, 500.0]);
        level_var.put(level_data.view(), ..)?;
    }

    {
        let mut lat_var = file.add_variable::<f32>("lat", &["lat"])?;
        lat_var.put_attribute("units", "degrees_north")?;
        lat_var.put_attribute("long_name", "latitude")?;
        lat_var.put_attribute("standard_name", "latitude")?;
        lat_var.put_attribute("valid_range", vec![-90.0f32, 90.0])?;
        let lat_data: Array1<f32> = (0..LAT_LEN).map(|i| -45.0 + i as f32 * 30.0).collect();
        lat_var.put(lat_data.view(), ..)?;
    }

    {
        let mut lon_var = file.add_variable::<f32>("lon", &["lon"])?;
        lon_var.put_attribute("units", "degrees_east")?;
        lon_var.put_attribute("long_name", "longitude")?;
        lon_var.put_attribute("axis", "X")?;
        let lon_data: Array1<f32> = (0..LON_LEN).map(|i| i as f32 * 72.0).collect();
        lon_var.put(lon_data.view(), ..)?;
    }

    {
        let mut t_var = file.add_variable::<f32>("t", &["time", "level", "lat", "lon"])?;
        t_var.put_attribute("units", "K")?;
        t_var.put_attribute("long_name", "air temperature")?;
        t_var.put_attribute("standard_name", "air_temperature")?;
        t_var.put(
            kelvin_values().view(),
            (0..TIME_LEN, 0..LEVEL_LEN, 0..LAT_LEN, 0..LON_LEN),
        )?;
    }

    Ok(())
}
