//! Settings for the formatter and the command-line tool.
//!
//! Settings come from an optional config file followed by `STAMPLINE_*`
//! environment variables, later sources overriding earlier ones:
//!
//! ```toml
//! query = "precision=microseconds"
//! max_precision = 9
//! input = "build/timestamps.jsonl"
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Error;
use crate::output::TimestampsOutput;

/// Prefix for environment overrides, e.g. `STAMPLINE_QUERY`.
pub const ENV_PREFIX: &str = "STAMPLINE";

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Raw query string handed to the precision resolver.
    pub query: String,

    /// Upper bound on resolved precision. Unset means uncapped, where every
    /// requested digit is rendered and held in memory per line.
    pub max_precision: Option<u32>,

    /// Timestamp file to read; stdin when unset.
    pub input: Option<PathBuf>,
}

impl Settings {
    /// Load settings from `path` (if given) and the environment.
    ///
    /// A path that is given but does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self, Error> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let settings = builder.add_source(env).build()?.try_deserialize()?;
        Ok(settings)
    }

    /// The formatter these settings describe.
    pub fn output(&self) -> TimestampsOutput {
        match self.max_precision {
            Some(max) => TimestampsOutput::with_max_precision(max),
            None => TimestampsOutput::new(),
        }
    }
}
