#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // every error is an H3Error; variants document themselves
#![allow(clippy::cast_possible_truncation)] // grid coordinates and digits are small
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)] // projection tables
#![allow(clippy::similar_names)] // i/j/k heavy math

//! `h3-core` indexes the globe with a hierarchy of hexagonal cells.
//!
//! Cells are identified by 64 bit [`H3Index`] values. Each of the 16
//! resolutions refines the previous one by a factor of about seven; twelve
//! cells per resolution are pentagons. The crate converts between
//! coordinates and cells, walks the grid, moves up and down the hierarchy,
//! and converts between polygons and cell sets.
//!
//! ```
//! use h3_core::{cell_to_parent, grid_disk, lat_lng_degs_to_cell};
//!
//! let cell = lat_lng_degs_to_cell(37.3615593, -122.0553238, 9)?;
//! assert_eq!(grid_disk(cell, 1)?.len(), 7);
//! assert_eq!(cell_to_parent(cell, 8)?.resolution(), 8);
//! # Ok::<(), h3_core::H3Error>(())
//! ```
//!
//! All functions are pure. Diagnostics go through `tracing` at `debug` and
//! `trace` level; install a subscriber to see them.

mod base_cells;
pub mod constants;
mod coords;
pub mod edges;
pub mod error;
pub mod h3_index;
pub mod hierarchy;
pub mod indexing;
pub mod local_ij;
pub mod math;
mod polygon;
pub mod regions;
pub mod traversal;
pub mod types;
pub mod units;

pub use constants::{MAX_CELL_BNDRY_VERTS, MAX_H3_RES};
pub use error::H3Error;
pub use math::great_circle_distance_rads;
pub use types::{CellBoundary, CoordIJ, Direction, GeoPolygon, H3Index, LatLng, MultiPolygon, Polygon, H3_NULL};

pub use edges::{
  cells_to_directed_edge, directed_edge_to_boundary, directed_edge_to_cells, get_directed_edge_destination,
  get_directed_edge_origin, is_valid_directed_edge, origin_to_directed_edges,
};
pub use h3_index::inspection::{
  get_base_cell_number, get_pentagons, get_res0_cells, get_resolution, is_pentagon, is_res_class_iii, is_valid_cell,
};
pub use hierarchy::{cell_to_center_child, cell_to_children, cell_to_parent, compact_cells, uncompact_cells};
pub use indexing::{cell_to_boundary, cell_to_lat_lng, lat_lng_degs_to_cell, lat_lng_to_cell};
pub use local_ij::{cell_to_local_ij, local_ij_to_cell};
pub use regions::{cells_to_multi_polygon, polygon_to_cells};
pub use traversal::{
  are_neighbor_cells, grid_disk, grid_disk_distances, grid_disk_distances_unsafe, grid_disk_unsafe, grid_distance,
  grid_ring_unsafe, max_grid_disk_size,
};
pub use units::{edge_length, hex_area, num_hexagons, AreaUnit, LengthUnit};
