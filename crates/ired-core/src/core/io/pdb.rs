use crate::core::models::record::ResidueRecord;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

const ATOM_RECORD: &[u8] = b"ATOM  ";
const BACKBONE_NITROGEN: &[u8] = b" N  ";

const RECORD_TYPE_COLUMNS: (usize, usize) = (0, 6);
const ATOM_NAME_COLUMNS: (usize, usize) = (12, 16);
const RESIDUE_NAME_COLUMNS: (usize, usize) = (17, 20);
const RESIDUE_ID_COLUMNS: (usize, usize) = (22, 26);

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("Unreadable input: {0}")]
    UnreadableInput(#[from] io::Error),
    #[error("Malformed record on line {line}: {kind}")]
    MalformedRecord { line: usize, kind: RecordErrorKind },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordErrorKind {
    #[error("Line is too short for the residue field in columns {columns}")]
    LineTooShort { columns: &'static str },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: &'static str },
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: &'static str, value: String },
}

// Columns are byte offsets, so a multi-byte character elsewhere on the line never
// moves or splits a field.
fn field(line: &[u8], (start, end): (usize, usize)) -> Option<&[u8]> {
    line.get(start..end)
}

fn is_backbone_nitrogen(line: &[u8]) -> bool {
    field(line, RECORD_TYPE_COLUMNS) == Some(ATOM_RECORD)
        && field(line, ATOM_NAME_COLUMNS) == Some(BACKBONE_NITROGEN)
}

fn parse_record(line: &[u8], line_number: usize) -> Result<ResidueRecord, PdbError> {
    let malformed = |kind| PdbError::MalformedRecord {
        line: line_number,
        kind,
    };

    let residue_name = field(line, RESIDUE_NAME_COLUMNS)
        .ok_or_else(|| malformed(RecordErrorKind::LineTooShort { columns: "18-20" }))?;
    let residue_name = String::from_utf8_lossy(residue_name);
    let residue_id = field(line, RESIDUE_ID_COLUMNS)
        .ok_or_else(|| malformed(RecordErrorKind::LineTooShort { columns: "23-26" }))?;
    let residue_id = String::from_utf8_lossy(residue_id);
    let residue_id = residue_id.trim();

    if residue_id.is_empty() {
        return Err(malformed(RecordErrorKind::MissingRequiredField {
            columns: "23-26",
        }));
    }
    let residue_number: i32 = residue_id.parse().map_err(|_| {
        malformed(RecordErrorKind::InvalidInt {
            columns: "23-26",
            value: residue_id.into(),
        })
    })?;

    Ok(ResidueRecord {
        residue_name: residue_name.to_string(),
        residue_id: residue_id.to_string(),
        residue_number,
        raw_line: String::from_utf8_lossy(line).into_owned(),
        line_number,
    })
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Lazy iterator over the residue anchors of a PDB line stream.
///
/// Yields one [`ResidueRecord`] per backbone nitrogen `ATOM` record, in file order.
/// The first error ends the iteration; nothing is yielded after it.
pub struct ResidueRecords<I> {
    lines: I,
    line_number: usize,
    failed: bool,
}

impl<I, S> Iterator for ResidueRecords<I>
where
    I: Iterator<Item = S>,
    S: AsRef<[u8]>,
{
    type Item = Result<ResidueRecord, PdbError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = strip_line_ending(line.as_ref());
            if !is_backbone_nitrogen(line) {
                continue;
            }
            let result = parse_record(line, self.line_number);
            self.failed = result.is_err();
            return Some(result);
        }
        None
    }
}

/// Scans PDB lines for residue anchors.
///
/// Only `ATOM  ` records whose atom-name field is exactly `" N  "` qualify; every other
/// line, including `HETATM` records and side-chain atoms, is ignored.
///
/// # Arguments
///
/// * `lines` - The lines of the structure file, as text or raw bytes. A trailing
///   `\n` or `\r\n` is ignored. Bytes that are not valid UTF-8 only matter on
///   qualifying lines, where they are replaced with `U+FFFD` in the record.
///
/// # Return
///
/// A lazy iterator of residue records. Call again on the same input to restart.
pub fn extract<I, S>(lines: I) -> ResidueRecords<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    ResidueRecords {
        lines: lines.into_iter(),
        line_number: 0,
        failed: false,
    }
}

/// Collects every residue anchor of `lines`, failing on the first malformed record.
pub fn extract_all<I, S>(lines: I) -> Result<Vec<ResidueRecord>, PdbError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    extract(lines).collect()
}

/// Reads a PDB stream and extracts its residue anchors.
///
/// # Errors
///
/// Returns [`PdbError::UnreadableInput`] if reading fails, or
/// [`PdbError::MalformedRecord`] for a truncated or non-numeric backbone nitrogen record.
/// Lines are read as bytes, so non-UTF-8 text in `REMARK` or other ignored records
/// does not fail the read.
pub fn read_from(reader: &mut impl BufRead) -> Result<Vec<ResidueRecord>, PdbError> {
    let mut lines = Vec::new();
    loop {
        let mut line = Vec::new();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        lines.push(line);
    }
    extract_all(&lines)
}

/// Reads the PDB file at `path` and extracts its residue anchors.
pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ResidueRecord>, PdbError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_from(&mut reader)
}
