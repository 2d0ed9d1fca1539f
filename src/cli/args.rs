use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blockfit")]
#[command(version, about = "Greedy rectangle packer", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Pack blocks into one container and report its fullness
    Pack(PackArgs),
    /// Re-pack the same blocks for several container widths
    Sweep(SweepArgs),
    /// Write a config file with default settings
    Init(InitArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Block files (JSON arrays of {width, height}) or directories of them
    #[arg(required_unless_present = "config")]
    pub input: Vec<PathBuf>,

    /// Load settings from a blockfit config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Container height in cells [default: 764]
    #[arg(long)]
    pub height: Option<u32>,

    /// Print the JSON report to stdout
    #[arg(long)]
    pub json: bool,

    /// Write the JSON report to a file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PackArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Container width in cells [default: 764]
    #[arg(long)]
    pub width: Option<u32>,

    /// Render the packing to a PNG file
    #[arg(long, value_name = "FILE")]
    pub preview: Option<PathBuf>,

    /// Seed for preview colors [default: 0]
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Comma-separated container widths, e.g. 400,600,800
    #[arg(long, value_delimiter = ',')]
    pub widths: Vec<u32>,

    /// Treat widths as viewport widths and scale them by this factor (e.g. 0.8)
    #[arg(long, value_name = "FACTOR")]
    pub viewport_scale: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Config file to create
    #[arg(default_value = "blockfit.json")]
    pub path: PathBuf,

    /// Block files to reference from the config
    #[arg(short, long)]
    pub input: Vec<PathBuf>,

    /// Container width in cells
    #[arg(long)]
    pub width: Option<u32>,

    /// Container height in cells
    #[arg(long)]
    pub height: Option<u32>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
