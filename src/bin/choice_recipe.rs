//! Runs a recipe over a JSONL file and writes the resulting task stream to
//! stdout, one example per line.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use choice_bridge::{
    constants::SINGLE_OR_MULTIPLE_CHOICE_RECIPE,
    recipes::{self, RecipeArgs},
    services::recipe_output::{write_settings, write_stream},
};

#[derive(Debug, Parser)]
#[command(name = "choice_recipe", version, about = "Build a choice annotation task stream")]
struct Cli {
    /// Dataset to save annotations to
    dataset: String,

    /// Path to the JSONL file of examples
    file_path: PathBuf,

    /// Recipe to run
    #[arg(long, default_value = SINGLE_OR_MULTIPLE_CHOICE_RECIPE)]
    recipe: String,

    /// Also write the session settings (dataset, view, config) as JSON
    #[arg(long)]
    config_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    // stdout carries the stream, so logs go to stderr (env_logger's default)
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let recipe = recipes::find(&cli.recipe)?;
    let args = RecipeArgs::new(cli.dataset, cli.file_path);

    log::info!(
        "Running recipe '{}' on {} (dataset '{}')",
        recipe.name(),
        args.file_path.display(),
        args.dataset
    );

    let (stream, settings) = recipe.build(&args)?.into_parts();

    if let Some(path) = &cli.config_out {
        let file = File::create(path)
            .with_context(|| format!("could not create {}", path.display()))?;
        write_settings(&settings, &mut BufWriter::new(file))?;
        log::info!("Wrote session settings to {}", path.display());
    }

    let stdout = io::stdout();
    let count = write_stream(stream, &mut BufWriter::new(stdout.lock()))
        .context("recipe stream failed")?;

    log::info!("Wrote {} examples", count);
    Ok(())
}
