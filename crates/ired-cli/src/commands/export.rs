use crate::cli::ExportArgs;
use crate::error::{CliError, Result};
use iredgen::core::io::table;
use iredgen::workflows::ired;
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::{info, warn};

pub fn run(args: ExportArgs) -> Result<()> {
    info!("Selecting '{}' vectors from {:?}", args.vectors, &args.pdb);
    let vectors = ired::select_vectors(&args.pdb, &args.vectors)?;
    if vectors.is_empty() {
        warn!(
            "No '{}' bond vectors found in {}.",
            args.vectors,
            args.pdb.display()
        );
    }

    let written = match &args.out_file {
        Some(path) => {
            info!("Writing {} vectors to {:?}", vectors.len(), path);
            table::write_csv(&vectors, BufWriter::new(File::create(path)?))
        }
        None => table::write_csv(&vectors, io::stdout().lock()),
    };
    written.map_err(|e| CliError::Other(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iredgen::workflows::error::WorkflowError;
    use std::fs;
    use tempfile::TempDir;

    const PDB: &str = "\
ATOM      1  N   ASN A   5      -0.677  -1.230  -0.491  1.00  0.00           N
ATOM      2  N   ALA A   6       1.499  -0.110  -0.491  1.00  0.00           N
END
";

    #[test]
    fn writes_selected_vectors_to_file() {
        let dir = TempDir::new().unwrap();
        let pdb = dir.path().join("in.pdb");
        let out = dir.path().join("vectors.csv");
        fs::write(&pdb, PDB).unwrap();

        run(ExportArgs {
            pdb,
            vectors: "dic".to_string(),
            out_file: Some(out.clone()),
        })
        .unwrap();

        assert_eq!(
            fs::read_to_string(out).unwrap(),
            "residue_name,residue_id,atom1,atom2\nASN,5,ND2,HD21\nASN,5,ND2,HD22\n"
        );
    }

    #[test]
    fn unknown_tag_fails() {
        let dir = TempDir::new().unwrap();
        let result = run(ExportArgs {
            pdb: dir.path().join("in.pdb"),
            vectors: "zz".to_string(),
            out_file: None,
        });
        assert!(matches!(
            result,
            Err(CliError::Workflow(WorkflowError::Rule(_)))
        ));
    }
}
