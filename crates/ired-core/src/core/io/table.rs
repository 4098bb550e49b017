use crate::core::models::vector::BondVector;
use std::io::Write;

/// Writes bond vectors as CSV with a `residue_name,residue_id,atom1,atom2` header.
pub fn write_csv(vectors: &[BondVector], writer: impl Write) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for vector in vectors {
        writer.serialize(vector)?;
    }
    // A header row is written even when there are no vectors.
    if vectors.is_empty() {
        writer.write_record(["residue_name", "residue_id", "atom1", "atom2"])?;
    }
    writer.flush()?;
    Ok(())
}
