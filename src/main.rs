use std::process::ExitCode;

/// Status reported for every failed run.
const FAILURE_EXIT_CODE: u8 = 255;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let verbose = matches!(
        ghcl::cli::parser::parse_args(&args),
        ghcl::cli::parser::Command::Generate(ref options) if options.verbose
    );
    ghcl::logging::init(verbose);

    match ghcl::run::run(args, None, None).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}
