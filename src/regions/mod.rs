//! Conversion between polygons and cell sets.

pub mod polyfill;
pub mod to_polygon;

pub use polyfill::polygon_to_cells;
pub use to_polygon::cells_to_multi_polygon;
