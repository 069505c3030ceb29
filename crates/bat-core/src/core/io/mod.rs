//! Provides input/output functionality for trajectory analysis.
//!
//! This module contains the readers and writers at the boundary of the library:
//! multi-frame XYZ trajectory parsing, labeled-topology loading from TOML, and
//! CSV output for computed time series and tabular reports. All parsing reports
//! line-accurate errors; nothing here performs unit conversion.

pub mod tables;
pub mod topology;
pub mod xyz;
