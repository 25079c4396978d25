mod args;
mod commands;
mod config;
mod global;
mod handlers;
mod logging;
mod report;

use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use args::Commands;
use config::Settings;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base64-rfc")]
#[command(version)]
#[command(about = "Encode and decode standard RFC 4648 Base64", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let color = report::should_use_color(cli.global.no_color);
    logging::init(&cli.global, color);

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is::<report::Diagnostic>() {
                eprintln!("{}", e);
            } else {
                eprintln!("{} {}", report::error_label(color), e);
            }
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::load_with_overrides(cli.global.config.as_deref())?;
    if let Some(max_size) = cli.global.max_size {
        settings.max_size = max_size;
    }
    debug!(?settings, "effective settings");

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &settings),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &settings),
        Commands::Config(args) => handlers::config::handle(args, &cli.global, &settings),
    }
}
