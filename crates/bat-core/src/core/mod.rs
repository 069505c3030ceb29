//! # Core Module
//!
//! This module provides the fundamental building blocks for internal-coordinate
//! trajectory analysis, serving as the data foundation of the library.
//!
//! ## Overview
//!
//! The core module defines the stateless data structures consumed and produced by
//! the analysis layer, together with the file formats they are read from and
//! written to. Nothing in this module performs numerical analysis; it exists so
//! that the computational routines can operate on validated, strongly typed
//! inputs.
//!
//! ## Architecture
//!
//! - **Trajectory & Topology** ([`models`]) - Cartesian frames and the
//!   bond/angle/torsion index tuples measured against them
//! - **Force-Field Association** ([`forcefield`]) - Parameter labels attached to
//!   topology terms and the parameter sets they resolve to
//! - **File I/O** ([`io`]) - XYZ trajectory reading, labeled-topology loading,
//!   and CSV table output

pub mod forcefield;
pub mod io;
pub mod models;
