// demos/region_roundtrip.rs

use h3_core::{cells_to_multi_polygon, compact_cells, polygon_to_cells, GeoPolygon, H3Error};

fn main() -> Result<(), H3Error> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
    )
    .init();

  let golden_gate_park = GeoPolygon::from_degrees(
    &[
      (37.7735, -122.5110),
      (37.7713, -122.4548),
      (37.7655, -122.4551),
      (37.7640, -122.5104),
    ],
    &[],
  );

  for res in [7, 9, 10] {
    let cells = polygon_to_cells(&golden_gate_park, res)?;
    let compacted = compact_cells(&cells)?;
    let outline = cells_to_multi_polygon(&cells, true)?;
    let vertices: usize = outline.iter().flat_map(|p| p.loops()).map(Vec::len).sum();
    println!(
      "res {res}: {} cells, {} compacted, {} polygons with {vertices} vertices",
      cells.len(),
      compacted.len(),
      outline.len()
    );
  }
  Ok(())
}
