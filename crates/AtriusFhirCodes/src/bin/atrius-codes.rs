use atrius_fhir_codes::cli::{Args, init_tracing, run_cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Parse arguments first so the log level is known
    let args = Args::parse();
    init_tracing(&args.log_level);

    if !run_cli(args)? {
        std::process::exit(1);
    }
    Ok(())
}
