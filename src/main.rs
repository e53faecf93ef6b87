use std::process::ExitCode;

use clap::Parser;
use primaze::{
    app::{self, AppError, Args, Job},
    logging,
    settings::Settings,
};

fn main() -> ExitCode {
    let args = Args::parse();

    logging::init(logging::verbosity(log::Level::Warn, args.verbose));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let settings_path = args.config_path();

    if args.reset_config {
        Settings::reset_config(settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    let settings = Settings::load(settings_path)?;

    if args.debug_config {
        println!("{:#?}", settings);
        return Ok(());
    }

    logging::init(logging::verbosity(
        settings.get_log_level().into(),
        args.verbose,
    ));

    better_panic::install();

    let job = Job::from_args(args, &settings)?;
    log::debug!("Running {:?}", job);
    app::run(&job, &settings)?;

    Ok(())
}
