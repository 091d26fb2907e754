use clap::Parser;
use radiantkit::{init_logging, run, Cli, Config, Outcome, Prompter};
use std::process::ExitCode;
use tracing::{debug, error};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;
    debug!("radiantkit {} (built {})", radiantkit::VERSION, radiantkit::BUILD_DATE);

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    cli.apply(&mut config);

    let mut prompter = Prompter::stdio();
    match run(&cli, &config, &mut prompter) {
        Ok(Outcome::Generated {
            render_error: Some(_),
            ..
        }) => Ok(ExitCode::from(2)),
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Failed to create layout: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
