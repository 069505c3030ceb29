//! # batscan Core Library
//!
//! A library for analyzing molecular-dynamics trajectories in internal coordinates:
//! bond lengths, bond angles, and torsion (dihedral) angles ("BAT" coordinates),
//! associated with the force-field parameter labels that govern them,
//! with periodic curve fitting of torsion-angle distributions.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Trajectory`,
//!   `InternalTopology`, force-field parameter sets and labels) and file I/O for
//!   trajectories, topologies, and tabular output.
//!
//! - **[`analysis`]: The Computational Core.** Pure numerical routines: the geometry
//!   extractor converting Cartesian frames into internal-coordinate time series, the
//!   histogramming of angular distributions, the periodic (squared-sine Fourier)
//!   least-squares fit engine, and equilibrium statistics.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It ties
//!   `analysis` and `core` together to execute a complete trajectory scan, from raw
//!   coordinates to per-parameter-label torsion fits, with no import-time side effects.
//!
//! The [`math`] module holds the general-purpose nonlinear least-squares machinery
//! underpinning the fit engine.

pub mod analysis;
pub mod core;
pub mod math;
pub mod workflows;
