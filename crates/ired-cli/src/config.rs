pub mod defaults;

use crate::cli::ScriptArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use iredgen::workflows::config::{IredScriptConfig, IredScriptConfigBuilder};
use iredgen::workflows::error::WorkflowError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialScriptConfig {
    vectors: Option<String>,
    topology: Option<PathBuf>,
    #[serde(default)]
    trajectories: Vec<PathBuf>,
    output: Option<String>,
    order: Option<u32>,
    matrix_name: Option<String>,
    modes_file: Option<String>,
}

/// Script settings after the configuration file and the command line were merged.
///
/// The topology and trajectories may still be missing; they are asked for
/// interactively before the core configuration is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptSettings {
    pub vectors: String,
    pub topology: Option<PathBuf>,
    pub trajectories: Vec<PathBuf>,
    output: Option<String>,
    order: Option<u32>,
    matrix_name: Option<String>,
    modes_file: Option<String>,
}

impl PartialScriptConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Command-line values win over the file, the file wins over the defaults.
    pub fn merge_with_cli(self, args: &ScriptArgs) -> ScriptSettings {
        let defaults = DefaultsConfig::default();

        let trajectories = if args.trajectories.is_empty() {
            self.trajectories
        } else {
            args.trajectories.clone()
        };

        ScriptSettings {
            vectors: args
                .vectors
                .clone()
                .or(self.vectors)
                .unwrap_or(defaults.vectors),
            topology: args.pdb.clone().or(self.topology),
            trajectories,
            output: args.output.clone().or(self.output),
            order: args.order.or(self.order),
            matrix_name: self.matrix_name,
            modes_file: self.modes_file,
        }
    }
}

impl ScriptSettings {
    pub fn into_core_config(self) -> Result<IredScriptConfig> {
        let mut builder = IredScriptConfigBuilder::new().trajectories(self.trajectories);
        if let Some(topology) = self.topology {
            builder = builder.topology_path(topology);
        }
        if let Some(output) = self.output {
            builder = builder.output_prefix(output);
        }
        if let Some(order) = self.order {
            builder = builder.order(order);
        }
        if let Some(matrix_name) = self.matrix_name {
            builder = builder.matrix_name(matrix_name);
        }
        if let Some(modes_file) = self.modes_file {
            builder = builder.modes_file(modes_file);
        }
        Ok(builder.build().map_err(WorkflowError::from)?)
    }
}
