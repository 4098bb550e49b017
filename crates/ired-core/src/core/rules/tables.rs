//! Per-residue atom-pair tables for the built-in bond-vector rules.
//!
//! Each entry maps a three-letter residue code to the atom pairs emitted for that
//! residue, in emission order. Atom names follow AMBER nomenclature, which is what
//! cpptraj expects when the masks are resolved against the topology.

use phf::{Map, phf_map};

/// Two atom names whose connecting vector is analysed.
pub type AtomPair = (&'static str, &'static str);

pub const BACKBONE_AMIDE: &[AtomPair] = &[("N", "H")];

const VAL_METHYLS: &[AtomPair] = &[("CB", "CG1"), ("CB", "CG2")];
const THR_METHYL: &[AtomPair] = &[("CB", "CG2")];
const LEU_METHYLS: &[AtomPair] = &[("CG", "CD1"), ("CG", "CD2")];
const ILE_METHYLS: &[AtomPair] = &[("CB", "CG2"), ("CG1", "CD1")];
const MET_METHYL: &[AtomPair] = &[("SD", "CE")];
const ALA_METHYL: &[AtomPair] = &[("CA", "CB")];

#[rustfmt::skip]
pub static METHYL: Map<&'static str, &'static [AtomPair]> = phf_map! {
    "VAL" => VAL_METHYLS,
    "THR" => THR_METHYL,
    "LEU" => LEU_METHYLS,
    "ILE" => ILE_METHYLS,
    "MET" => MET_METHYL,
    "ALA" => ALA_METHYL,
};

pub static ALANINE_METHYL: Map<&'static str, &'static [AtomPair]> = phf_map! {
    "ALA" => ALA_METHYL,
};

const SIX_RING: &[AtomPair] = &[
    ("CD1", "HD1"),
    ("CD2", "HD2"),
    ("CE1", "HE1"),
    ("CE2", "HE2"),
];
const INDOLE: &[AtomPair] = &[
    ("CD1", "HD1"),
    ("NE1", "HE1"),
    ("CZ2", "HZ2"),
    ("CE3", "HE3"),
    ("CZ3", "HZ3"),
    ("CH2", "HH2"),
];
const IMIDAZOLE_DELTA: &[AtomPair] = &[("CD2", "HD2"), ("ND1", "HD1"), ("CE1", "HE1")];
const IMIDAZOLE_EPSILON: &[AtomPair] = &[("CD2", "HD2"), ("CE1", "HE1"), ("NE2", "HE2")];
const IMIDAZOLE_PROTONATED: &[AtomPair] = &[
    ("CD2", "HD2"),
    ("ND1", "HD1"),
    ("CE1", "HE1"),
    ("NE2", "HE2"),
];

// Histidine appears under its protonation-state names (HID, HIE, HIP).
#[rustfmt::skip]
pub static AROMATIC: Map<&'static str, &'static [AtomPair]> = phf_map! {
    "PHE" => SIX_RING,
    "TYR" => SIX_RING,
    "TRP" => INDOLE,
    "HID" => IMIDAZOLE_DELTA,
    "HIE" => IMIDAZOLE_EPSILON,
    "HIP" => IMIDAZOLE_PROTONATED,
};

const BETA_METHYLENE: &[AtomPair] = &[("CB", "HB2"), ("CB", "HB3")];
const GAMMA_METHYLENE: &[AtomPair] = &[("CG", "HG2"), ("CG", "HG3")];
const DIC_ILE: &[AtomPair] = &[("CG1", "CD1")];
const DIC_ASN: &[AtomPair] = &[("ND2", "HD21"), ("ND2", "HD22")];
const DIC_GLN: &[AtomPair] = &[("NE2", "HE21"), ("NE2", "HE22")];
const DIC_RING: &[AtomPair] = &[("CD1", "HD1")];
const DIC_HIS: &[AtomPair] = &[("CD2", "HD2")];
const DIC_LYS: &[AtomPair] = &[
    ("CB", "HB2"),
    ("CB", "HB3"),
    ("CG", "HG2"),
    ("CG", "HG3"),
    ("CD", "HD2"),
    ("CD", "HD3"),
    ("CE", "HE2"),
    ("CE", "HE3"),
];
const DIC_ARG: &[AtomPair] = &[
    ("CB", "HB2"),
    ("CB", "HB3"),
    ("CG", "HG2"),
    ("CG", "HG3"),
    ("CD", "HD2"),
    ("CD", "HD3"),
    ("NE", "HE"),
];

/// Bruschweiler's dictionary of side-chain vectors.
#[rustfmt::skip]
pub static DICTIONARY: Map<&'static str, &'static [AtomPair]> = phf_map! {
    "VAL" => VAL_METHYLS,
    "SER" => BETA_METHYLENE,
    "THR" => THR_METHYL,
    "ILE" => DIC_ILE,
    "LEU" => LEU_METHYLS,
    "MET" => MET_METHYL,
    "ASN" => DIC_ASN,
    "GLN" => DIC_GLN,
    "PHE" => DIC_RING,
    "HID" => DIC_HIS, "HIE" => DIC_HIS, "HIP" => DIC_HIS,
    "TYR" => DIC_RING,
    "PRO" => GAMMA_METHYLENE,
    "LYS" => DIC_LYS,
    "ARG" => DIC_ARG,
    "ASP" => BETA_METHYLENE,
    "GLU" => GAMMA_METHYLENE,
};
