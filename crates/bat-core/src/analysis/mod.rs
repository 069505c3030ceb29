//! # Analysis Module
//!
//! The computational core of the library: pure numerical routines over the data
//! models, with no I/O and no shared state.
//!
//! ## Overview
//!
//! Everything in this module is a deterministic function of its inputs. The
//! geometry extractor turns Cartesian frames into internal-coordinate time
//! series; the histogram and statistics routines summarize those series; the
//! fit engine approximates torsion-angle distributions with a periodic model.
//! Per-frame geometry is independent across frames and feature tuples, so the
//! extraction loop is safe to shard by frame range should throughput ever
//! demand it.
//!
//! ## Key Components
//!
//! - [`geometry`] - Bond length, bond angle, and signed dihedral computation
//! - [`histogram`] - Fixed-width binning of angular time series
//! - [`statistics`] - Equilibrium means and uncertainty estimates
//! - [`fit`] - Squared-sine Fourier fitting via nonlinear least squares
//! - [`error`] - Analysis-specific error types

pub mod error;
pub mod fit;
pub mod geometry;
pub mod histogram;
pub mod statistics;
