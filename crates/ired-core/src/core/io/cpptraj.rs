use crate::core::models::vector::BondVector;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

/// Settings of the `matrix`/`diagmatrix`/`ired` directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IredAnalysis {
    pub order: u32,            // Legendre polynomial order of the correlation
    pub matrix_name: String,   // Name of the iRED matrix data set
    pub modes_file: String,    // File receiving the eigenmodes from `diagmatrix`
    pub output_prefix: String, // Prefix of the order-parameter and ired output files
}

impl Default for IredAnalysis {
    fn default() -> Self {
        Self {
            order: 2,
            matrix_name: "matired".to_string(),
            modes_file: "ired.vec".to_string(),
            output_prefix: "iredout".to_string(),
        }
    }
}

impl IredAnalysis {
    pub fn order_parameter_file(&self) -> String {
        format!("{}_s2", self.output_prefix)
    }
}

/// A complete cpptraj input script for an iRED analysis.
///
/// Rendering produces, in order: the topology, one `trajin` per trajectory, one
/// `vector v<i>` per bond vector (numbered from 1), the iRED matrix, its
/// diagonalization, and the final `ired` directive.
#[derive(Debug, Clone, PartialEq)]
pub struct CpptrajInput {
    pub topology: PathBuf,
    pub trajectories: Vec<PathBuf>,
    pub analysis: IredAnalysis,
    pub vectors: Vec<BondVector>,
}

impl CpptrajInput {
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()
    }
}

impl fmt::Display for CpptrajInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = &self.analysis;

        writeln!(f, "parm {}", self.topology.display())?;
        for trajectory in &self.trajectories {
            writeln!(f, "trajin {}", trajectory.display())?;
        }
        for (i, vector) in self.vectors.iter().enumerate() {
            writeln!(f, "vector v{} {}", i + 1, vector)?;
        }
        writeln!(
            f,
            "matrix ired name {} order {}",
            analysis.matrix_name, analysis.order
        )?;
        writeln!(
            f,
            "diagmatrix {} vecs {} name {}",
            analysis.matrix_name,
            self.vectors.len(),
            analysis.modes_file
        )?;
        writeln!(
            f,
            "ired order {} modes {} orderparamfile {} out {}",
            analysis.order,
            analysis.modes_file,
            analysis.order_parameter_file(),
            analysis.output_prefix
        )
    }
}
