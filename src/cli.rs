use clap::Parser;
use std::path::PathBuf;

use npm_depviz::config::DEFAULT_CONFIG_FILENAME;

/// Generate a PlantUML dependency diagram for an npm project
#[derive(Parser, Debug)]
#[command(name = "npm-depviz")]
#[command(version)]
#[command(about = "Generate a PlantUML dependency diagram for an npm project", long_about = None)]
pub struct Args {
    /// Path to the JSON config file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Write the diagram text only, without invoking the renderer
    #[arg(long)]
    pub no_render: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
