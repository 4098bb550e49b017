//! # Bond-Vector Rules
//!
//! A fixed catalog of selection rules that turn residue anchors into the bond vectors
//! analysed by iRED.
//!
//! ## Overview
//!
//! Every rule is a declarative value: which residues it covers, which ones it excludes,
//! and the atom pairs it emits per residue type (see [`tables`]). Rules are identified by
//! a short tag and live in a static, declaration-ordered catalog so that [`list_tags`]
//! is reproducible from run to run.
//!
//! | tag   | vectors                                      |
//! |-------|----------------------------------------------|
//! | `nh`  | backbone N-H, excluding proline and residue 1 |
//! | `me`  | side-chain methyl groups                     |
//! | `ala` | alanine methyl groups                        |
//! | `ar`  | aromatic ring C-H and N-H groups             |
//! | `dic` | Bruschweiler's side-chain dictionary         |
//!
//! ## Usage
//!
//! ```
//! use iredgen::core::io::pdb;
//! use iredgen::core::rules;
//!
//! let pdb = "ATOM      1  N   VAL A  12      11.104   6.134  -6.504  1.00  0.00           N";
//! let records = pdb::extract_all(pdb.lines()).unwrap();
//! let vectors = rules::get_rule("me").unwrap().apply(&records);
//!
//! assert_eq!(vectors[0].to_string(), ":12@CB ired :12@CG1");
//! assert_eq!(vectors[1].to_string(), ":12@CB ired :12@CG2");
//! ```

pub mod tables;

use crate::core::models::record::ResidueRecord;
use crate::core::models::vector::BondVector;
use phf::Map;
use tables::AtomPair;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RuleError {
    #[error("Unknown bond vector tag '{0}'. Available tags: {tags}", tags = list_tags().join(", "))]
    UnknownRuleTag(String),
}

/// Which residues a rule emits pairs for.
#[derive(Debug)]
pub enum Coverage {
    /// The same pairs for every residue.
    Every(&'static [AtomPair]),
    /// Pairs looked up by residue name; unlisted residues are skipped.
    PerResidue(&'static Map<&'static str, &'static [AtomPair]>),
}

/// A named, stateless mapping from residue anchors to bond vectors.
#[derive(Debug)]
pub struct SelectionRule {
    tag: &'static str,
    description: &'static str,
    coverage: Coverage,
    excluded_residues: &'static [&'static str],
    min_residue_number: Option<i32>,
}

impl SelectionRule {
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Returns the atom pairs this rule defines for a residue type, ignoring exclusions.
    pub fn pairs_for(&self, residue_name: &str) -> &'static [AtomPair] {
        match self.coverage {
            Coverage::Every(pairs) => pairs,
            Coverage::PerResidue(table) => table
                .get(residue_name.trim())
                .copied()
                .unwrap_or(&[]),
        }
    }

    fn admits(&self, record: &ResidueRecord) -> bool {
        let name = record.name();
        if self.excluded_residues.iter().any(|&excluded| excluded == name) {
            return false;
        }
        self.min_residue_number
            .is_none_or(|min| record.residue_number >= min)
    }

    /// Applies the rule to residue anchors in file order.
    ///
    /// The output preserves the order of `records`, and within a residue the order of
    /// the rule's table. Unrecognized residues contribute nothing.
    pub fn apply(&self, records: &[ResidueRecord]) -> Vec<BondVector> {
        records
            .iter()
            .filter(|record| self.admits(record))
            .flat_map(|record| {
                self.pairs_for(record.name())
                    .iter()
                    .map(move |(atom1, atom2)| {
                        BondVector::new(record.name(), &record.residue_id, atom1, atom2)
                    })
            })
            .collect()
    }
}

static CATALOG: [SelectionRule; 5] = [
    SelectionRule {
        tag: "nh",
        description: "backbone N-H groups (proline and the first residue excluded)",
        coverage: Coverage::Every(tables::BACKBONE_AMIDE),
        excluded_residues: &["PRO"],
        min_residue_number: Some(2),
    },
    SelectionRule {
        tag: "me",
        description: "side-chain methyl groups",
        coverage: Coverage::PerResidue(&tables::METHYL),
        excluded_residues: &[],
        min_residue_number: None,
    },
    SelectionRule {
        tag: "ala",
        description: "alanine side-chain methyl groups",
        coverage: Coverage::PerResidue(&tables::ALANINE_METHYL),
        excluded_residues: &[],
        min_residue_number: None,
    },
    SelectionRule {
        tag: "ar",
        description: "aromatic ring groups",
        coverage: Coverage::PerResidue(&tables::AROMATIC),
        excluded_residues: &[],
        min_residue_number: None,
    },
    SelectionRule {
        tag: "dic",
        description: "Bruschweiler's dictionary of side-chain vectors",
        coverage: Coverage::PerResidue(&tables::DICTIONARY),
        excluded_residues: &[],
        min_residue_number: None,
    },
];

/// Returns every registered rule, in registration order.
pub fn rules() -> &'static [SelectionRule] {
    &CATALOG
}

/// Returns the tags of every registered rule, in registration order.
pub fn list_tags() -> Vec<&'static str> {
    CATALOG.iter().map(SelectionRule::tag).collect()
}

/// Looks up a rule by its tag.
///
/// # Errors
///
/// Returns [`RuleError::UnknownRuleTag`] if no rule is registered under `tag`.
pub fn get_rule(tag: &str) -> Result<&'static SelectionRule, RuleError> {
    CATALOG
        .iter()
        .find(|rule| rule.tag == tag)
        .ok_or_else(|| RuleError::UnknownRuleTag(tag.to_string()))
}
