//! # Mesh Operations
//!
//! - **extrude**: placement of cross-sections along paths and skin stitching

pub mod extrude;
