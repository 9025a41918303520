use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "nested-a11y-ids",
    version,
    about = "Compose and check hierarchical accessibility identifiers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Append composition events as JSON lines to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,

    /// Path to config file (default: nested-a11y-ids.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose one or more fragments onto a prefix
    Compose {
        /// Starting prefix (empty for the root position)
        #[arg(long, default_value = "")]
        prefix: String,

        /// Fragment to compose; repeat to compose several levels in order
        #[arg(long, required = true)]
        fragment: Vec<String>,
    },

    /// Resolve every identifier in a YAML or JSON view tree
    Resolve {
        /// Path to the view tree file
        #[arg(long)]
        tree: String,

        /// Output format: console, yaml, json
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Compare a tree's identifiers against an expected list
    Check {
        /// Path to the view tree file
        #[arg(long)]
        tree: String,

        /// YAML list of identifiers the tree must produce
        #[arg(long)]
        expect: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `nested-a11y-ids.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub resolve: ResolveConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveConfig {
    #[serde(default = "default_console")]
    pub format: String,

    pub output: Option<String>,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            format: default_console(),
            output: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

pub const DEFAULT_CONFIG_PATH: &str = "nested-a11y-ids.yaml";

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolution of effective settings: CLI > config > defaults
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolveSettings {
    pub format: String,
    pub output: Option<String>,
}

pub fn resolve_settings(
    cli_format: Option<&str>,
    cli_output: Option<&str>,
    config: &AppConfig,
) -> ResolveSettings {
    ResolveSettings {
        format: cli_format.unwrap_or(&config.resolve.format).to_string(),
        output: cli_output
            .map(str::to_string)
            .or_else(|| config.resolve.output.clone()),
    }
}

pub fn trace_path<'a>(cli_trace: Option<&'a str>, config: &'a AppConfig) -> Option<&'a str> {
    cli_trace.or(config.trace.path.as_deref())
}
