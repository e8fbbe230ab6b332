//! Conversion between geographic coordinates and cells.

pub mod from_h3;
pub mod to_h3;

pub use from_h3::{cell_to_boundary, cell_to_lat_lng};
pub use to_h3::{lat_lng_degs_to_cell, lat_lng_to_cell};
