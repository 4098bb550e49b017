//! Value types shared by the extractor, the rule catalog, and the writers.

pub mod record;
pub mod vector;
