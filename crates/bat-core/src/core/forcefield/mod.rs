//! # Force-Field Association Module
//!
//! Connects measured topology terms to the force-field parameters that govern
//! them.
//!
//! ## Overview
//!
//! A substructure-matching collaborator assigns each bond, angle, and torsion a
//! parameter label (a SMIRKS pattern string). This module carries those
//! assignments as structured data (atom tuples paired with label strings)
//! rather than re-parsing formatted column names, and provides the parameter-set
//! types the labels resolve to.
//!
//! ## Key Components
//!
//! - [`labels`] - Labeled topology terms and grouping of torsion columns that
//!   share one parameter label
//! - [`params`] - Harmonic bond/angle and periodic torsion parameter sets, with
//!   a TOML loader and an in-memory test fixture factory

pub mod labels;
pub mod params;
