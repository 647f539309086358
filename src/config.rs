use crate::services::engine::Engine;
use anyhow::{Context, Result};
use clap::Parser;
use std::{env, fs, io, path::PathBuf};
use thiserror::Error;

/// Fixture served when no `--data` file is given.
pub const EXAMPLE_DATA: &str = include_str!("../data/example-data.json");

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_file: Option<PathBuf>,
    pub output_example: bool,
    pub debug: bool,
    pub logging: bool,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Fake server for the object storage management API")]
pub struct Args {
    /// Host to bind to (overrides OJS_SERVER_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides OJS_SERVER_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Fake data JSON file (overrides OJS_SERVER_DATA)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Print the example fake data JSON and exit
    #[arg(long)]
    pub output_example: bool,

    /// Log at debug level (or set OJS_SERVER_DEBUG)
    #[arg(long)]
    pub debug: bool,

    /// Log every HTTP request (or set OJS_SERVER_LOGGING)
    #[arg(long)]
    pub logging: bool,
}

/// Failure to turn fixture data into an engine.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("reading fake data file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing fake data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Merge already parsed CLI args with the environment. CLI wins.
    pub fn from_args(args: Args) -> Result<Self> {
        // --- Environment fallback ---
        let env_host = env::var("OJS_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match env::var("OJS_SERVER_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing OJS_SERVER_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 8080,
            Err(err) => return Err(err).context("reading OJS_SERVER_PORT"),
        };
        let env_data = env::var_os("OJS_SERVER_DATA")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        // --- Merge ---
        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            data_file: args.data.or(env_data),
            output_example: args.output_example,
            debug: args.debug || env_flag("OJS_SERVER_DEBUG"),
            logging: args.logging || env_flag("OJS_SERVER_LOGGING"),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the engine from `data_file`, or from [`EXAMPLE_DATA`] when unset.
    pub fn load_engine(&self) -> Result<Engine, DataError> {
        match &self.data_file {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|source| DataError::Read {
                    path: path.clone(),
                    source,
                })?;
                Ok(Engine::from_json(&json)?)
            }
            None => Ok(Engine::from_json(EXAMPLE_DATA)?),
        }
    }
}

/// Any non-empty value turns a flag on.
fn env_flag(name: &str) -> bool {
    env::var_os(name).is_some_and(|v| !v.is_empty())
}
