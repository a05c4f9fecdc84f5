//! fibsvc — Fibonacci lookups from the command line.

use fibsvc_cli::{app, config, errors};
use fibsvc_core::constants::exit_codes;

fn main() {
    let config = config::CliConfig::parse();

    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let mut stdout = std::io::stdout().lock();
    let code = match app::run(&config, &mut stdout) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            errors::exit_code(&err)
        }
    };
    drop(stdout);
    std::process::exit(code);
}
