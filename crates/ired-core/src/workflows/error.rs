use super::config::ConfigError;
use crate::core::io::pdb::PdbError;
use crate::core::rules::RuleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("Failed to read structure file: {source}")]
    Structure {
        #[from]
        source: PdbError,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
