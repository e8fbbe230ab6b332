use std::collections::HashMap;

use tracing::debug;

use crate::constants::M_180_PI;
use crate::error::H3Error;
use crate::h3_index::inspection::is_valid_cell;
use crate::indexing::cell_to_boundary;
use crate::math::geo_almost_equal;
use crate::polygon::is_clockwise;
use crate::types::{H3Index, LatLng, MultiPolygon, Polygon};

/// One directed boundary segment.
#[derive(Debug, Clone, Copy)]
struct Edge {
  from: LatLng,
  to: LatLng,
}

/// Grid step used to bucket vertices, in radians. Coarser than the vertex
/// matching tolerance, so matching vertices always share or neighbor a
/// bucket.
const VERTEX_QUANTUM: f64 = 1e-9;

type VertexKey = (i64, i64);

fn vertex_key(v: &LatLng) -> VertexKey {
  ((v.lat / VERTEX_QUANTUM).round() as i64, (v.lng / VERTEX_QUANTUM).round() as i64)
}

/// Directed edges in insertion order, indexed by start vertex.
#[derive(Debug, Default)]
struct VertexGraph {
  edges: Vec<Option<Edge>>,
  by_start: HashMap<VertexKey, Vec<usize>>,
  cursor: usize,
  live: usize,
}

impl VertexGraph {
  fn with_capacity(n: usize) -> Self {
    Self {
      edges: Vec::with_capacity(n),
      by_start: HashMap::with_capacity(n),
      ..Self::default()
    }
  }

  /// Slot of a live edge leaving `from` that satisfies `pred`.
  fn find(&self, from: &LatLng, pred: impl Fn(&Edge) -> bool) -> Option<usize> {
    let (lat, lng) = vertex_key(from);
    (-1..=1)
      .flat_map(|dl| (-1..=1).map(move |dg| (lat + dl, lng + dg)))
      .filter_map(|key| self.by_start.get(&key))
      .flatten()
      .copied()
      .find(|&slot| {
        self.edges[slot]
          .as_ref()
          .is_some_and(|e| geo_almost_equal(&e.from, from) && pred(e))
      })
  }

  fn remove(&mut self, slot: usize) -> Option<Edge> {
    let edge = self.edges[slot].take()?;
    if let Some(slots) = self.by_start.get_mut(&vertex_key(&edge.from)) {
      slots.retain(|&s| s != slot);
    }
    self.live -= 1;
    Some(edge)
  }

  /// Adds `from -> to`, or cancels it against an existing `to -> from`.
  fn toggle(&mut self, from: LatLng, to: LatLng) {
    if let Some(slot) = self.find(&to, |e| geo_almost_equal(&e.to, &from)) {
      self.remove(slot);
    } else if self.find(&from, |e| geo_almost_equal(&e.to, &to)).is_none() {
      self.by_start.entry(vertex_key(&from)).or_default().push(self.edges.len());
      self.edges.push(Some(Edge { from, to }));
      self.live += 1;
    }
  }

  fn take_first(&mut self) -> Option<Edge> {
    while self.cursor < self.edges.len() {
      let slot = self.cursor;
      self.cursor += 1;
      if self.edges[slot].is_some() {
        return self.remove(slot);
      }
    }
    None
  }

  fn take_from(&mut self, from: &LatLng) -> Option<Edge> {
    let slot = self.find(from, |_| true)?;
    self.remove(slot)
  }

  /// Follows edges head to tail until every edge belongs to a loop.
  fn into_loops(mut self) -> Vec<Vec<LatLng>> {
    let mut loops = Vec::new();
    while let Some(mut edge) = self.take_first() {
      let mut ring = Vec::new();
      loop {
        ring.push(edge.from);
        match self.take_from(&edge.to) {
          Some(next) => edge = next,
          None => break,
        }
      }
      loops.push(ring);
    }
    debug_assert_eq!(self.live, 0);
    loops
  }
}

fn to_pairs(ring: &[LatLng], geo_json: bool) -> Vec<[f64; 2]> {
  let mut out: Vec<[f64; 2]> = ring
    .iter()
    .map(|v| {
      let (lat, lng) = (v.lat * M_180_PI, v.lng * M_180_PI);
      if geo_json {
        [lat, lng]
      } else {
        [lng, lat]
      }
    })
    .collect();
  if geo_json {
    if let Some(&first) = out.first() {
      out.push(first);
    }
  }
  out
}

/// Traces the outline of a cell set.
///
/// Boundary segments shared by two cells of the set cancel; what is left
/// is walked into loops. All loops land in a single [`Polygon`]: the first
/// counter-clockwise loop is the outer ring and every other loop, in trace
/// order, is a hole. Disjoint clusters are therefore reported as holes of
/// the first cluster.
///
/// With `geo_json` set, pairs are `[lat, lng]` degrees and every ring is
/// closed by repeating its first vertex. Otherwise pairs are `[lng, lat]`
/// and rings are open.
pub fn cells_to_multi_polygon(cells: &[H3Index], geo_json: bool) -> Result<MultiPolygon, H3Error> {
  let Some(first) = cells.first() else {
    return Ok(Vec::new());
  };
  let res = first.resolution();
  for &cell in cells {
    if !is_valid_cell(cell) {
      return Err(H3Error::CellInvalid);
    }
    if cell.resolution() != res {
      return Err(H3Error::ResMismatch);
    }
  }

  let mut graph = VertexGraph::with_capacity(cells.len() * 6);
  for &cell in cells {
    let boundary = cell_to_boundary(cell);
    for (j, from) in boundary.iter().enumerate() {
      graph.toggle(*from, boundary[(j + 1) % boundary.len()]);
    }
  }
  let mut loops = graph.into_loops();
  if loops.is_empty() {
    return Ok(Vec::new());
  }

  let outer = loops.iter().position(|l| !is_clockwise(l)).unwrap_or(0);
  let outer = loops.remove(outer);
  debug!(cells = cells.len(), loops = loops.len() + 1, "traced cell set outline");

  Ok(vec![Polygon {
    outer: to_pairs(&outer, geo_json),
    holes: loops.iter().map(|l| to_pairs(l, geo_json)).collect(),
  }])
}
