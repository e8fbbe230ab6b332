// demos/cell_tour.rs

use h3_core::{
  cell_to_boundary, cell_to_children, cell_to_lat_lng, cell_to_parent, edge_length, grid_disk_distances, hex_area,
  lat_lng_degs_to_cell, origin_to_directed_edges, AreaUnit, H3Error, LengthUnit,
};

fn main() -> Result<(), H3Error> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  // San Francisco City Hall
  let res = 9;
  let cell = lat_lng_degs_to_cell(37.779265, -122.419277, res)?;
  let center = cell_to_lat_lng(cell);
  println!("cell {cell} at res {res}");
  println!("  center  {:.6}, {:.6}", center.lat_degrees(), center.lng_degrees());
  println!(
    "  average area {:.4} km2, edge {:.1} m",
    hex_area(res, AreaUnit::Km2)?,
    edge_length(res, LengthUnit::M)?
  );

  for v in &cell_to_boundary(cell) {
    println!("  vertex  {:.6}, {:.6}", v.lat_degrees(), v.lng_degrees());
  }

  for (k, ring) in grid_disk_distances(cell, 2)?.iter().enumerate() {
    println!("ring {k}: {} cells", ring.len());
  }

  println!("{} directed edges leave the cell", origin_to_directed_edges(cell).len());

  let parent = cell_to_parent(cell, res - 2)?;
  let siblings = cell_to_children(parent, res)?;
  println!("parent {parent} at res {} holds {} cells at res {res}", res - 2, siblings.len());
  Ok(())
}
