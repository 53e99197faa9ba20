use cidr_merge::config::{init_logging, Config};
use cidr_merge::error::CidrError;
use colored::Colorize;
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = init_logging() {
        eprintln!("{} logging disabled: {e}", "warning:".yellow());
    }
    log::debug!("#Start main()");

    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) if !e.use_stderr() => {
            // --help and --version; ignore: stdout closed
            e.print().ok();
            return ExitCode::SUCCESS;
        }
        Err(e) => return report(&CidrError::Usage(e.render().to_string())),
    };

    let mut out = BufWriter::new(io::stdout().lock());
    match cidr_merge::run(&config, &mut out) {
        Ok(runs) => {
            log::debug!("#End main() {runs} run(s)");
            ExitCode::SUCCESS
        }
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn report(err: &CidrError) -> ExitCode {
    match err {
        CidrError::Usage(usage) => eprint!("{usage}"),
        other => eprintln!("cidr: {} {other}", "error:".red()),
    }
    ExitCode::from(1)
}
