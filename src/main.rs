use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;

use blockfit::blocks::load_blocks;
use blockfit::cli::{CliArgs, Command, CommonArgs, InitArgs, PackArgs, SweepArgs};
use blockfit::config::{BlockfitConfig, LoadedConfig, make_relative, save_config};
use blockfit::output::{render_preview, report_json, save_preview, write_json};
use blockfit::{Container, PackRun};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // The logger may not be initialized yet when config loading fails
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    match &cli.command {
        Command::Pack(args) => pack(args),
        Command::Sweep(args) => sweep(args),
        Command::Init(args) => {
            init_logging(false);
            init(args)
        }
    }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn pack(args: &PackArgs) -> Result<()> {
    let merged = merge_config_with_args(&args.common)?;
    init_logging(merged.verbose);
    info!("Blockfit v{}", env!("CARGO_PKG_VERSION"));

    let width = args.width.unwrap_or(merged.width);
    let container = Container::new(width, merged.height)?;
    let mut blocks = load_blocks(&merged.input)?;

    let run = blockfit::run(container, &mut blocks)?;
    info!(
        "Fullness: {:.2}% ({} cavity cells)",
        run.occupancy.percent(),
        run.occupancy.cavities
    );

    if let Some(path) = args.preview.clone().or(merged.preview) {
        let seed = args.seed.unwrap_or(merged.seed);
        save_preview(&render_preview(&run.result, seed), &path)?;
        info!("Saved preview {}", path.display());
    }

    emit_report(&[run], merged.json, merged.output.as_deref())
}

fn sweep(args: &SweepArgs) -> Result<()> {
    let merged = merge_config_with_args(&args.common)?;
    init_logging(merged.verbose);
    info!("Blockfit v{}", env!("CARGO_PKG_VERSION"));

    let widths = if !args.widths.is_empty() {
        args.widths.clone()
    } else {
        merged.sweep_widths
    };
    if widths.is_empty() {
        bail!("no container widths given: pass --widths or set sweep_widths in the config file");
    }

    // Viewport widths become container widths the same way a resize does
    let widths = match args.viewport_scale {
        Some(factor) => widths
            .iter()
            .map(|&w| Ok(Container::scaled_width(w, factor, merged.height)?.width()))
            .collect::<Result<Vec<_>>>()?,
        None => widths,
    };

    let blocks = load_blocks(&merged.input)?;
    let runs = blockfit::sweep(&blocks, &widths, merged.height)?;

    for run in &runs {
        info!(
            "width {:>5}: placed {:>4}/{}, fullness {:.2}%",
            run.result.container.width(),
            run.result.placed.len(),
            blocks.len(),
            run.occupancy.percent()
        );
    }

    emit_report(&runs, merged.json, merged.output.as_deref())
}

#[allow(clippy::print_stdout)]
fn emit_report(runs: &[PackRun], json: bool, output: Option<&Path>) -> Result<()> {
    if json {
        println!("{}", report_json(runs)?);
    }

    if let Some(path) = output {
        write_json(runs, path)?;
        info!("Wrote report {}", path.display());
    }

    Ok(())
}

fn init(args: &InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        bail!(
            "{} already exists, pass --force to overwrite it",
            args.path.display()
        );
    }

    let defaults = BlockfitConfig::default();
    let base = args.path.parent().unwrap_or_else(|| Path::new("."));
    let config = BlockfitConfig {
        input: args
            .input
            .iter()
            .map(|input| make_relative(input, base))
            .collect(),
        container_width: args.width.unwrap_or(defaults.container_width),
        container_height: args.height.unwrap_or(defaults.container_height),
        ..defaults
    };

    save_config(&config, &args.path)?;
    info!("Wrote {}", args.path.display());

    Ok(())
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    input: Vec<PathBuf>,
    width: u32,
    height: u32,
    preview: Option<PathBuf>,
    seed: u64,
    sweep_widths: Vec<u32>,
    json: bool,
    output: Option<PathBuf>,
    verbose: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &CommonArgs) -> Result<MergedConfig> {
    let loaded_config = match &args.config {
        Some(config_path) => Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        ),
        None => None,
    };
    let config = loaded_config
        .as_ref()
        .map(|lc| lc.config.clone())
        .unwrap_or_default();

    // Input files: CLI args override config
    let input = if !args.input.is_empty() {
        args.input.clone()
    } else if let Some(ref lc) = loaded_config {
        lc.resolve_inputs()
            .context("failed to resolve block files from config")?
    } else {
        Vec::new()
    };

    Ok(MergedConfig {
        input,
        width: config.container_width,
        height: args.height.unwrap_or(config.container_height),
        preview: loaded_config.as_ref().and_then(LoadedConfig::resolve_preview),
        seed: config.seed,
        sweep_widths: config.sweep_widths,
        json: args.json,
        output: args.output.clone(),
        verbose: args.verbose,
    })
}
