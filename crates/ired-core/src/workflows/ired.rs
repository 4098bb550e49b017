use super::config::IredScriptConfig;
use super::error::WorkflowError;
use crate::core::io::cpptraj::CpptrajInput;
use crate::core::io::pdb;
use crate::core::models::vector::BondVector;
use crate::core::rules;
use std::path::Path;

/// Selects the bond vectors of rule `tag` from the PDB file at `path`.
///
/// The tag is resolved before the file is opened, so an unknown tag is reported even
/// when the path is bad.
///
/// # Errors
///
/// Returns [`WorkflowError::Rule`] for an unknown tag and [`WorkflowError::Structure`]
/// when the file cannot be read or holds a malformed backbone nitrogen record.
pub fn select_vectors(path: &Path, tag: &str) -> Result<Vec<BondVector>, WorkflowError> {
    let rule = rules::get_rule(tag)?;
    let records = pdb::read_from_path(path)?;
    Ok(rule.apply(&records))
}

/// Builds the cpptraj iRED input for `config` using the vectors of rule `tag`.
///
/// The topology file of the configuration is both the template the vectors are read
/// from and the `parm` of the generated script.
pub fn run(config: &IredScriptConfig, tag: &str) -> Result<CpptrajInput, WorkflowError> {
    let vectors = select_vectors(&config.topology_path, tag)?;
    Ok(CpptrajInput {
        topology: config.topology_path.clone(),
        trajectories: config.trajectories.clone(),
        analysis: config.analysis.clone(),
        vectors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::pdb::PdbError;
    use crate::core::rules::RuleError;
    use crate::workflows::config::IredScriptConfigBuilder;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const PEPTIDE_PDB: &str = "\
ATOM      1  N   ALA A   1      -0.677  -1.230  -0.491  1.00  0.00           N
ATOM      2  CA  ALA A   1      -0.001   0.064  -0.491  1.00  0.00           C
ATOM      3  CB  ALA A   1      -0.509   0.856   0.727  1.00  0.00           C
ATOM      4  N   PRO A   2       1.499  -0.110  -0.491  1.00  0.00           N
ATOM      5  CA  PRO A   2       2.175   1.184  -0.491  1.00  0.00           C
ATOM      6  N   GLY A   3       3.675   1.010  -0.491  1.00  0.00           N
ATOM      7  H   GLY A   3       4.101   0.094  -0.491  1.00  0.00           H
ATOM      8  N   VAL A   4       4.351   2.304  -0.491  1.00  0.00           N
ATOM      9  H   VAL A   4       3.801   3.152  -0.491  1.00  0.00           H
ATOM     10  CB  VAL A   4       5.870   2.130  -0.491  1.00  0.00           C
TER
END
";

    fn write_pdb(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("peptide.pdb");
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        path
    }

    #[test]
    fn select_vectors_follows_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_pdb(&dir, PEPTIDE_PDB);

        let vectors = select_vectors(&path, "nh").unwrap();
        assert_eq!(
            vectors,
            [
                BondVector::new("GLY", "3", "N", "H"),
                BondVector::new("VAL", "4", "N", "H"),
            ]
        );
    }

    #[test]
    fn select_vectors_with_methyl_rule() {
        let dir = TempDir::new().unwrap();
        let path = write_pdb(&dir, PEPTIDE_PDB);

        let rendered: Vec<String> = select_vectors(&path, "me")
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rendered,
            [
                ":1@CA ired :1@CB",
                ":4@CB ired :4@CG1",
                ":4@CB ired :4@CG2"
            ]
        );
    }

    #[test]
    fn unknown_tag_is_reported_before_reading_the_file() {
        let result = select_vectors(Path::new("/nonexistent/protein.pdb"), "zz");
        assert!(matches!(
            result,
            Err(WorkflowError::Rule(RuleError::UnknownRuleTag(tag))) if tag == "zz"
        ));
    }

    #[test]
    fn missing_file_is_reported_as_unreadable() {
        let dir = TempDir::new().unwrap();
        let result = select_vectors(&dir.path().join("missing.pdb"), "nh");
        assert!(matches!(
            result,
            Err(WorkflowError::Structure {
                source: PdbError::UnreadableInput(_)
            })
        ));
    }

    #[test]
    fn malformed_record_aborts_without_partial_output() {
        let dir = TempDir::new().unwrap();
        let content = format!("{}ATOM     11  N   LYS A\n", PEPTIDE_PDB.replace("TER\nEND\n", ""));
        let path = write_pdb(&dir, &content);

        let result = select_vectors(&path, "nh");
        assert!(matches!(
            result,
            Err(WorkflowError::Structure {
                source: PdbError::MalformedRecord { line: 11, .. }
            })
        ));
    }

    #[test]
    fn run_builds_complete_cpptraj_input() {
        let dir = TempDir::new().unwrap();
        let path = write_pdb(&dir, PEPTIDE_PDB);
        let config = IredScriptConfigBuilder::new()
            .topology_path(path.clone())
            .trajectory(PathBuf::from("prod.nc"))
            .build()
            .unwrap();

        let input = run(&config, "nh").unwrap();
        assert_eq!(input.topology, path);
        assert_eq!(input.vectors.len(), 2);

        let text = input.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("parm {}", path.display()));
        assert_eq!(lines[1], "trajin prod.nc");
        assert_eq!(lines[2], "vector v1 :3@N ired :3@H");
        assert_eq!(lines[3], "vector v2 :4@N ired :4@H");
        assert_eq!(lines[5], "diagmatrix matired vecs 2 name ired.vec");
    }

    #[test]
    fn run_is_repeatable() {
        let dir = TempDir::new().unwrap();
        let path = write_pdb(&dir, PEPTIDE_PDB);
        let config = IredScriptConfigBuilder::new()
            .topology_path(path)
            .trajectory(PathBuf::from("prod.nc"))
            .build()
            .unwrap();

        assert_eq!(run(&config, "dic").unwrap(), run(&config, "dic").unwrap());
    }
}
