//! # Core Models Module
//!
//! Data structures representing a molecular-dynamics trajectory and the internal
//! coordinates measured against it.
//!
//! ## Key Components
//!
//! - [`trajectory`] - Ordered Cartesian frames with a consistent atom count
//! - [`topology`] - Bond, angle, and torsion index tuples into a frame's
//!   position array, validated before any geometry pass

pub mod topology;
pub mod trajectory;
