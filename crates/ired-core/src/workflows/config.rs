use crate::core::io::cpptraj::IredAnalysis;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("At least one trajectory is required")]
    NoTrajectories,
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct IredScriptConfig {
    pub topology_path: PathBuf, // Template PDB, also used as the cpptraj `parm`
    pub trajectories: Vec<PathBuf>,
    pub analysis: IredAnalysis,
}

#[derive(Default)]
pub struct IredScriptConfigBuilder {
    topology_path: Option<PathBuf>,
    trajectories: Vec<PathBuf>,
    order: Option<u32>,
    matrix_name: Option<String>,
    modes_file: Option<String>,
    output_prefix: Option<String>,
}

impl IredScriptConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topology_path(mut self, path: PathBuf) -> Self {
        self.topology_path = Some(path);
        self
    }
    pub fn trajectory(mut self, path: PathBuf) -> Self {
        self.trajectories.push(path);
        self
    }
    pub fn trajectories(mut self, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.trajectories.extend(paths);
        self
    }
    pub fn order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }
    pub fn matrix_name(mut self, name: String) -> Self {
        self.matrix_name = Some(name);
        self
    }
    pub fn modes_file(mut self, name: String) -> Self {
        self.modes_file = Some(name);
        self
    }
    pub fn output_prefix(mut self, prefix: String) -> Self {
        self.output_prefix = Some(prefix);
        self
    }

    pub fn build(self) -> Result<IredScriptConfig, ConfigError> {
        let topology_path = self
            .topology_path
            .ok_or(ConfigError::MissingParameter("topology_path"))?;
        if self.trajectories.is_empty() {
            return Err(ConfigError::NoTrajectories);
        }

        let defaults = IredAnalysis::default();
        let order = self.order.unwrap_or(defaults.order);
        if order == 0 {
            return Err(ConfigError::InvalidValue {
                parameter: "order",
                reason: "must be a positive integer".to_string(),
            });
        }
        let analysis = IredAnalysis {
            order,
            matrix_name: non_empty("matrix_name", self.matrix_name, defaults.matrix_name)?,
            modes_file: non_empty("modes_file", self.modes_file, defaults.modes_file)?,
            output_prefix: non_empty("output_prefix", self.output_prefix, defaults.output_prefix)?,
        };

        Ok(IredScriptConfig {
            topology_path,
            trajectories: self.trajectories,
            analysis,
        })
    }
}

fn non_empty(
    parameter: &'static str,
    value: Option<String>,
    default: String,
) -> Result<String, ConfigError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ConfigError::InvalidValue {
            parameter,
            reason: "must not be empty".to_string(),
        }),
        Some(v) => Ok(v),
        None => Ok(default),
    }
}
