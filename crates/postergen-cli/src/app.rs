//! CLI application logic.
//!
//! Parses arguments, loads configuration, runs the layout engine and
//! writes the requested artifacts to the output directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use postergen_engine::{Engine, HttpImageCache, PaginateOptions};

use crate::config::Config;

/// Output format for the generated deck
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum RenderFormat {
    /// Self-contained HTML preview
    #[default]
    Html,
    /// JSON deck for downstream tooling
    Json,
}

#[derive(Parser)]
#[command(name = "postergen")]
#[command(author, version, about = "Convert Markdown into fixed-size slide decks", long_about = None)]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output directory (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (html or json)
    #[arg(short, long, value_enum, default_value = "html")]
    format: RenderFormat,

    /// Split oversized lists across slides instead of moving them whole
    #[arg(long)]
    split_lists: bool,
}

/// Run the CLI application
///
/// Parses arguments and executes the single Markdown-to-deck pipeline.
pub fn run_cli() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(output) = cli.output {
        config.output_dir = output;
    }

    build_command(&cli.input, &config, cli.format, cli.split_lists)
}

/// Execute the deck build
pub fn build_command(
    input: &PathBuf,
    config: &Config,
    format: RenderFormat,
    split_lists: bool,
) -> Result<()> {
    println!("postergen v{}", env!("CARGO_PKG_VERSION"));
    println!("Building: {}", input.display());

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let markdown = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    log::debug!("read {} bytes from {}", markdown.len(), input.display());

    let images = HttpImageCache::new(&config.cache_dir)
        .with_context(|| format!("Failed to open image cache: {}", config.cache_dir.display()))?;

    let options = PaginateOptions { split_lists };
    let engine = Engine::with_config(
        config.metrics.clone(),
        config.chrome.clone(),
        options,
        &images,
    );
    let (deck, layout_log) = engine.build(&markdown);

    if deck.is_empty() {
        anyhow::bail!("No slides generated from {}", input.display());
    }

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    let log_path = config.output_dir.join("layout.log");
    layout_log
        .write_to(&log_path)
        .with_context(|| format!("Failed to write layout log: {}", log_path.display()))?;
    println!("  Created: {}", log_path.display());

    match format {
        RenderFormat::Html => {
            let preview_path = postergen_html::write_preview(&deck, &config.output_dir)
                .context("Failed to write HTML preview")?;
            println!("  Created: {}", preview_path.display());
        }
        RenderFormat::Json => {
            let json = serde_json::to_string_pretty(&deck)
                .context("Failed to serialize deck to JSON")?;
            let json_path = config.output_dir.join("slides.json");
            fs::write(&json_path, json)
                .with_context(|| format!("Failed to write deck: {}", json_path.display()))?;
            println!("  Created: {}", json_path.display());
        }
    }

    println!();
    println!("Build complete!");
    println!("  {} slides", deck.len());
    if deck.cover().is_some() {
        println!("  Cover: yes");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_minimal() {
        let args = vec!["postergen", "post.md"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.input, PathBuf::from("post.md"));
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
        assert!(matches!(cli.format, RenderFormat::Html));
        assert!(!cli.split_lists);
    }

    #[test]
    fn test_cli_parse_output_override() {
        let args = vec!["postergen", "post.md", "--output", "dist"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.input, PathBuf::from("post.md"));
        assert_eq!(cli.output, Some(PathBuf::from("dist")));
    }

    #[test]
    fn test_cli_parse_json_format() {
        let args = vec!["postergen", "post.md", "--format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(matches!(cli.format, RenderFormat::Json));
    }

    #[test]
    fn test_cli_parse_split_lists() {
        let args = vec!["postergen", "post.md", "--split-lists"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(cli.split_lists);
    }

    #[test]
    fn test_cli_parse_config_path() {
        let args = vec!["postergen", "post.md", "--config", "custom.toml"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_cli_requires_input() {
        let args = vec!["postergen"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_build_command_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            output_dir: dir.path().join("out"),
            cache_dir: dir.path().join("cache"),
            ..Config::default()
        };
        let missing = dir.path().join("missing.md");
        let result = build_command(&missing, &config, RenderFormat::Html, false);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_command_writes_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("post.md");
        fs::write(
            &input,
            "# My Post\n\nFirst paragraph of the post.\n\n## Section\n\n- one\n- two\n",
        )
        .unwrap();

        let config = Config {
            output_dir: dir.path().join("out"),
            cache_dir: dir.path().join("cache"),
            ..Config::default()
        };

        build_command(&input, &config, RenderFormat::Html, false).unwrap();

        let preview = fs::read_to_string(config.output_dir.join("preview.html")).unwrap();
        assert!(preview.contains("My Post"));

        let log = fs::read_to_string(config.output_dir.join("layout.log")).unwrap();
        assert!(log.starts_with("=== Layout Debug Log ==="));
    }

    #[test]
    fn test_build_command_json_deck() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("post.md");
        fs::write(&input, "# Title\n\nBody text.\n").unwrap();

        let config = Config {
            output_dir: dir.path().join("out"),
            cache_dir: dir.path().join("cache"),
            ..Config::default()
        };

        build_command(&input, &config, RenderFormat::Json, false).unwrap();

        let json = fs::read_to_string(config.output_dir.join("slides.json")).unwrap();
        let deck: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(deck["slides"].as_array().unwrap().len() >= 2);
        assert_eq!(deck["slides"][0]["is_cover"], true);
    }
}
