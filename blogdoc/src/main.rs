//! CLI entry point for blogdoc

use anyhow::{Context, Result};
use blogdoc::cli::{Cli, Commands, OutputFormat};
use blogdoc::content_model::{lint, ArticleSource};
use blogdoc::{json_exporter, pipeline};
use clap::Parser;
use std::path::PathBuf;

/// Main entry point for the blogdoc CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            output,
            format,
            verbose,
        } => {
            handle_build_command(input, output, format, verbose)?;
        }

        Commands::Check { input, verbose } => {
            handle_check_command(input, verbose)?;
        }

        Commands::Inspect { article } => {
            handle_inspect_command(article)?;
        }
    }

    Ok(())
}

/// Handle the build command
fn handle_build_command(
    input: PathBuf,
    output: PathBuf,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    println!("Building site...");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());

    // Stage 1: Discover and render articles
    println!("\n[Stage 1/2] Rendering articles...");
    let model = pipeline::parse_sources(&input)
        .with_context(|| format!("Failed to render articles from {}", input.display()))?;

    println!("✓ Rendered {} articles", model.articles.len());
    if verbose {
        println!("  - {} blocks total", model.block_count());
    }

    // Stage 2: Export to output format
    println!(
        "\n[Stage 2/2] Exporting to {}...",
        match format {
            OutputFormat::Html => "HTML",
            OutputFormat::Json => "JSON",
        }
    );

    match format {
        OutputFormat::Html => {
            pipeline::export::to_html_dir(&model, &output)
                .with_context(|| format!("Failed to export HTML to {}", output.display()))?;
        }
        OutputFormat::Json => {
            pipeline::export::to_json_dir(&model, &output)
                .with_context(|| format!("Failed to export JSON to {}", output.display()))?;
        }
    }

    println!("✓ Successfully wrote: {}", output.display());
    println!("\n✓ Build completed successfully!");

    Ok(())
}

/// Handle the check command
fn handle_check_command(input: PathBuf, verbose: bool) -> Result<()> {
    println!("Checking articles...");
    println!("Input: {}", input.display());

    let model = pipeline::parse_sources(&input)
        .with_context(|| format!("Failed to load articles from {}", input.display()))?;

    let mut warning_count = 0;
    for article in &model.articles {
        let warnings = lint(&article.raw_body);
        if warnings.is_empty() {
            if verbose {
                println!("  {} ✓", article.path.display());
            }
            continue;
        }

        for warning in &warnings {
            println!("  {}: {}", article.path.display(), warning);
        }
        warning_count += warnings.len();
    }

    if warning_count > 0 {
        anyhow::bail!(
            "{} warning(s) across {} article(s)",
            warning_count,
            model.articles.len()
        );
    }

    println!("✓ {} articles checked, no warnings", model.articles.len());

    Ok(())
}

/// Handle the inspect command
fn handle_inspect_command(path: PathBuf) -> Result<()> {
    let raw_body = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("article")
        .to_string();

    let mut article = ArticleSource {
        path: path.clone(),
        absolute_path: path,
        slug,
        title: None,
        raw_body,
        blocks: Vec::new(),
    };
    article.render();

    let json = json_exporter::to_json_string(&article)
        .context("Failed to serialize the block tree")?;
    println!("{}", json);

    Ok(())
}
