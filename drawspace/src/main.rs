use anyhow::{bail, Context};
use clap::Parser;
use drawspace_rs::script::DrawScript;
use drawspace_rs::{DrawSpaceConfig, ExportFormat};
use std::path::PathBuf;
use std::str::FromStr;

/// drawspace: Render a JSON drawing script to an image file
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to input drawing script
    #[clap(short, long)]
    pub input: PathBuf,

    /// Path to output image file to be created
    #[clap(short, long)]
    pub output: PathBuf,

    /// Output format. Only png is supported
    #[clap(short, long, default_value = "png")]
    pub format: String,

    /// Pixels per inch written to the output image
    #[clap(long, default_value_t = 72.0)]
    pub ppi: f32,

    /// Smallest font size text may shrink to when fitting
    #[clap(long, default_value_t = 1.0)]
    pub min_text_size: f32,

    /// Additional directory to load fonts from
    #[clap(long)]
    pub font_dir: Option<PathBuf>,

    /// Log each drawing operation
    #[clap(short, long)]
    pub verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let format = ExportFormat::from_str(&args.format)?;
    if args.ppi <= 0.0 {
        bail!("ppi must be positive, got {}", args.ppi);
    }
    if !(args.min_text_size.is_finite() && args.min_text_size > 0.0) {
        bail!("min-text-size must be positive, got {}", args.min_text_size);
    }

    // Read input file
    let script_str = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;
    let script = DrawScript::from_json(&script_str)
        .with_context(|| format!("Failed to parse drawing script: {}", args.input.display()))?;

    let mut config = DrawSpaceConfig {
        ppi: args.ppi,
        min_text_size: args.min_text_size,
        ..DrawSpaceConfig::default()
    };
    if let Some(font_dir) = args.font_dir {
        config.font_config.font_dirs.push(font_dir);
    }

    let space = script.render(config).await.context("Drawing failed")?;
    space
        .to_file(format, &args.output)
        .await
        .with_context(|| format!("Failed to write output to {}", args.output.display()))?;
    Ok(())
}
