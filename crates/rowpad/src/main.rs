mod script;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rowpad_config::EditorConfig;
use rowpad_core::{Document, EditorOptions, FileStore, HeadlessRenderer, ScreenSize};
use tracing_subscriber::EnvFilter;

/// Runs a script of editing commands against a text file without a screen.
#[derive(Parser, Debug)]
#[command(name = "rowpad", version, about)]
struct Cli {
    /// File to edit. A missing file starts as an empty document.
    file: Option<PathBuf>,

    /// Command script to run; read from stdin when omitted.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Where to save the result instead of FILE.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `rowpad_core=trace`. Overrides RUST_LOG.
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level: {level}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting rowpad");

    let config_path = cli.config.clone().unwrap_or_else(EditorConfig::config_path);
    let config = EditorConfig::load_or_create(&config_path);
    tracing::debug!(?config, path = %config_path.display(), "loaded config");

    let options = EditorOptions {
        tab_width: config.tab_width,
        history: config.history_config(),
    };
    let renderer = HeadlessRenderer::new(ScreenSize::new(config.screen_width, config.screen_height));
    let render_log = renderer.log();
    let store = FileStore {
        trailing_newline: config.trailing_newline,
    };

    let mut doc = match &cli.file {
        Some(path) => Document::open(path, &store, Box::new(renderer), options)
            .with_context(|| format!("failed to open {}", path.display()))?,
        None => Document::new(Box::new(renderer), options),
    };

    let source = match &cli.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read script from stdin")?;
            buf
        }
    };
    let commands = script::parse_script(&source)?;

    for command in &commands {
        let redraw = doc.execute(*command);
        doc.present(redraw);
    }
    {
        let log = render_log.borrow();
        tracing::info!(
            commands = commands.len(),
            frames = log.frames,
            full_redraws = log.full,
            line_redraws = log.lines,
            "script finished"
        );
    }

    match cli.output.as_ref().or(cli.file.as_ref()) {
        Some(path) => doc.save_to(path, &store)?,
        None => {
            for line in doc.lines() {
                println!("{line}");
            }
        }
    }

    Ok(())
}
