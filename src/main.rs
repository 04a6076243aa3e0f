use std::process::ExitCode;

use subsample_seq::cli::build_cli;
use subsample_seq::config::Config;

fn init_logging(verbose: bool){
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode{
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    match Config::from_matches(&matches).and_then(|config| subsample_seq::run(&config)){
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
