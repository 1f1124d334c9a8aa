//! Atelier command-line inspector.
//!
//! Compiles one configuration the same way the browser bindings do and prints
//! the resulting scene.

mod args;
mod report;

use std::process::ExitCode;

use atelier_scene::{SceneComposer, Theme, ThemeError};
use clap::Parser;
use thiserror::Error;

use args::{Cli, Output, ThemeSource};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error("failed to encode scene: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match render(&cli) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_theme(source: &ThemeSource) -> Result<Theme, ThemeError> {
    match source {
        ThemeSource::Builtin(name) => Theme::builtin(name),
        ThemeSource::File(path) => Theme::load(path),
    }
}

fn render(cli: &Cli) -> Result<String, CliError> {
    let theme = load_theme(&cli.theme_source())?;
    let output = cli.output();
    if output == Output::Theme {
        return Ok(theme.to_json()?);
    }

    let mut composer = SceneComposer::new(theme);
    let name = cli.item.as_deref().unwrap_or_default();
    let model = composer.compose_named(name, &cli.config());
    log::info!("Composed {} with {} parts", model.design, model.part_count());

    match (output, composer.snapshot()) {
        (Output::Summary, Some(snapshot)) => Ok(report::summary(snapshot.theme, snapshot.model)),
        (_, Some(snapshot)) => Ok(serde_json::to_string_pretty(&snapshot)?),
        (_, None) => Ok(String::new()),
    }
}
