/// A residue anchor extracted from the backbone nitrogen `ATOM` record of a PDB file.
///
/// One record is produced per residue; everything the selection rules need is carried
/// here so they never have to look at the raw line again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueRecord {
    pub residue_name: String, // Raw 3-character residue name field, untrimmed
    pub residue_id: String,   // Residue sequence number, trimmed, as written in the file
    pub residue_number: i32,  // `residue_id` parsed as an integer
    pub raw_line: String,
    pub line_number: usize, // 1-based line number in the source file
}

impl ResidueRecord {
    /// Returns the residue name with surrounding whitespace removed.
    ///
    /// Selection rules look residues up by this form, never by the raw field.
    pub fn name(&self) -> &str {
        self.residue_name.trim()
    }
}
