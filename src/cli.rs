use clap::Parser;
use std::path::PathBuf;
use xpgraph::application::dto::OutputFormat;

/// Inspect the Crossplane resource tree behind a catalog entity
#[derive(Parser, Debug)]
#[command(name = "xpgraph")]
#[command(version)]
#[command(
    about = "Inspect the Crossplane claim / composite / managed resource tree behind a catalog entity",
    long_about = None
)]
pub struct Args {
    /// Catalog entity file (YAML or JSON) carrying the Crossplane annotations
    #[arg(short, long, value_name = "PATH")]
    pub entity: PathBuf,

    /// Config file (defaults to ./xpgraph.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Kubernetes proxy base URL; overrides proxy_url from the config file
    #[arg(long, value_name = "URL")]
    pub proxy_url: Option<String>,

    /// Output format: tree or json
    #[arg(short, long, default_value = "tree")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Show only the roots instead of expanding every composite
    #[arg(long)]
    pub collapsed: bool,

    /// Also print the event log of the resource with this name
    #[arg(long, value_name = "NAME")]
    pub events: Option<String>,

    /// Disable colored tree output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
