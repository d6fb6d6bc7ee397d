//! Skycast CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use skycast::cli::{AppContext, Cli, CommandDispatcher, Commands};
use skycast::config::load_or_default;
use skycast::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// `--debug` beats `RUST_LOG`, which beats the `skycast=warn` default.
/// Everything goes to stderr; `skycast waybar` owns stdout.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("skycast=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skycast=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!(?cli, "parsed arguments");

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    let (config_path, cache_path) =
        AppContext::resolve_paths(cli.config.clone(), cli.cache_file.clone());
    let settings = load_or_default(&config_path);
    tracing::debug!(
        config = %config_path.display(),
        cache = %cache_path.display(),
        "resolved paths"
    );

    // The status bar reads stdout, so never prompt or draw spinners there
    let is_interactive = !matches!(cli.command, Some(Commands::Waybar));
    let mut ui = create_ui(is_interactive, output_mode, cli.no_color);

    let dispatcher = CommandDispatcher::new(AppContext::new(settings, config_path, cache_path));

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code.clamp(0, 255) as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
