//! Parent/child relations and cell set compaction.

pub mod compaction;
pub mod parent_child;

pub use compaction::{compact_cells, uncompact_cells};
pub use parent_child::{cell_to_center_child, cell_to_children, cell_to_parent};
