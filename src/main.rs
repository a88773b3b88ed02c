//! envlint CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use envlint::cli::{Cli, CommandDispatcher};
use envlint::ui::should_use_colors;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so they never mix with reports on stdout.
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("envlint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("envlint=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("envlint starting with args: {:?}", cli);

    let project_root = std::env::current_dir().unwrap_or_default();
    let color = !cli.no_color && should_use_colors();
    let dispatcher = CommandDispatcher::new(project_root).with_color(color);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = dispatcher.run(&cli, &mut out);
    ExitCode::from(code as u8)
}
