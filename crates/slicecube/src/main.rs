//! Command-line interface for N×N×N slice rotation cube puzzles.

mod cli;
mod net;
mod settings;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    color_eyre::install()?;

    // Initialize logging. `RUST_LOG` takes precedence over `--verbose`.
    env_logger::builder()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    cli::exec(args)
}
