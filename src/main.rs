use autopush::*;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use commands::PushOptions;
use host::GitHubContext;

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();
    host::log::init(cli.verbose);

    if let Err(e) = run(&cli) {
        // on a runner this becomes the step's ::error:: annotation
        tracing::error!("{}", e);
        if let Some(suggestion) = e.suggestion() {
            tracing::info!("{}", suggestion);
        }
        std::process::exit(1);
    }
    Ok(())
}

fn run(cli: &Cli) -> error::Result<()> {
    let inputs = config::load_inputs()?;
    let options = PushOptions::resolve(&inputs, &GitHubContext::from_env());
    tracing::debug!("options: {:?}", options);

    let report = commands::run(&options, &cli.path)?;
    match (report.commit, report.push) {
        (Some(oid), commands::PushOutcome::Pushed) => tracing::info!("committed and pushed {}", oid),
        (Some(oid), commands::PushOutcome::UpToDate) => tracing::info!("committed {}", oid),
        (None, commands::PushOutcome::Pushed) => tracing::info!("pushed without a new commit"),
        (None, commands::PushOutcome::UpToDate) => tracing::info!("nothing to push"),
    }
    Ok(())
}
