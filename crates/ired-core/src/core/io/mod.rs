//! Provides input/output for the files around an iRED analysis.
//!
//! Structure files are read with [`pdb`], bond vectors leave the library either as a
//! cpptraj input script ([`cpptraj`]) or as a plain CSV table ([`table`]).

pub mod cpptraj;
pub mod pdb;
pub mod table;
