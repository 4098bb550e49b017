//! # Workflows Module
//!
//! High-level entry points that tie the extractor, the rule catalog, and the cpptraj
//! writer together.
//!
//! - **iRED Input** ([`ired`]) - Read a template PDB, select bond vectors by tag, and
//!   assemble the cpptraj script.
//! - **Configuration** ([`config`]) - Validated script settings and their builder.
//! - **Errors** ([`error`]) - The error type shared by every workflow.

pub mod config;
pub mod error;
pub mod ired;
