//! # iredgen Core Library
//!
//! Bond-vector selection for isotropic reorientational eigenmode dynamics (iRED)
//! analysis of MD trajectories, and generation of the matching cpptraj input.
//!
//! ## Architectural Philosophy
//!
//! The library keeps a strict two-layer split:
//!
//! - **[`core`]: The Foundation.** Stateless value types, the PDB residue extractor,
//!   the declarative catalog of bond-vector rules, and the output writers.
//!
//! - **[`workflows`]: The Public API.** Ties `core` together into complete procedures,
//!   such as turning a template PDB and a rule tag into a cpptraj script.
//!
//! ## Example
//!
//! ```no_run
//! use iredgen::workflows::{config::IredScriptConfigBuilder, ired};
//! use std::path::PathBuf;
//!
//! let config = IredScriptConfigBuilder::new()
//!     .topology_path(PathBuf::from("protein.pdb"))
//!     .trajectory(PathBuf::from("production.nc"))
//!     .build()?;
//! let input = ired::run(&config, "nh")?;
//! print!("{input}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod workflows;
