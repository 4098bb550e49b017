use serde::Serialize;
use std::fmt;

/// A named pair of atoms within one residue whose connecting vector is tracked in iRED.
///
/// The [`Display`](fmt::Display) form is the cpptraj mask pair embedded in a
/// `vector` directive, e.g. `:12@CB ired :12@CG1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BondVector {
    pub residue_name: String, // Trimmed residue name (e.g., "VAL")
    pub residue_id: String,   // Residue sequence number exactly as written in the source file
    pub atom1: String,
    pub atom2: String,
}

impl BondVector {
    pub fn new(residue_name: &str, residue_id: &str, atom1: &str, atom2: &str) -> Self {
        Self {
            residue_name: residue_name.to_string(),
            residue_id: residue_id.to_string(),
            atom1: atom1.to_string(),
            atom2: atom2.to_string(),
        }
    }

    /// Returns the cpptraj atom mask of the first atom (`:<id>@<atom1>`).
    pub fn first_mask(&self) -> String {
        format!(":{}@{}", self.residue_id, self.atom1)
    }

    /// Returns the cpptraj atom mask of the second atom (`:<id>@<atom2>`).
    pub fn second_mask(&self) -> String {
        format!(":{}@{}", self.residue_id, self.atom2)
    }
}

impl fmt::Display for BondVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ired {}", self.first_mask(), self.second_mask())
    }
}
