//! # Workflows Module
//!
//! High-level entry points that tie the data models and analysis routines
//! together into complete procedures.
//!
//! ## Overview
//!
//! Workflows own the sequencing that a top-level script would otherwise do at
//! import time: validate the inputs, run the geometry extractor, histogram and
//! fit each torsion distribution, and assemble a report. They hold no global
//! state and perform no I/O; collaborators hand in a parsed trajectory and
//! labeled topology and receive plain result structures back.
//!
//! - **Scan Workflow** ([`scan`]) - Full internal-coordinate scan of one
//!   trajectory with per-parameter-label torsion fits
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events

pub mod progress;
pub mod scan;
