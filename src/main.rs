use clap::Parser;
use std::process::ExitCode;

use tally::cli::Args;
use tally::logging::{self, LogTarget};
use tally::script::{self, ReplayMode};
use tally::ui;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.resolve_config()?;

    if let Some(path) = &args.script {
        logging::init_tracing(&config.logging.level, &LogTarget::Stderr)?;
        let steps = script::load_script(path)?;
        let outcome = script::replay(
            config.defaults.initial_state(),
            steps,
            ReplayMode::from_strict(config.replay.strict),
        )?;
        println!("{}", serde_json::to_string_pretty(&outcome.state)?);
        return Ok(());
    }

    let log_file = config
        .logging
        .file
        .clone()
        .unwrap_or_else(logging::default_log_file);
    logging::init_tracing(&config.logging.level, &LogTarget::File(log_file))?;
    ui::runtime::run(&config)?;
    Ok(())
}
