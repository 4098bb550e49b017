//! # Core Module
//!
//! The building blocks of bond-vector selection for iRED order-parameter analysis.
//!
//! ## Architecture
//!
//! - **Value Types** ([`models`]) - Residue anchors and labelled bond vectors
//! - **File I/O** ([`io`]) - PDB residue extraction, cpptraj script and CSV output
//! - **Selection Rules** ([`rules`]) - The tagged catalog of per-residue atom-pair tables
//!
//! Everything here is a pure transformation: no logging, no global mutable state.
//! Failures are returned to the caller unchanged.

pub mod io;
pub mod models;
pub mod rules;
