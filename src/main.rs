use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = sysup::cli::Cli::parse();
    let log = sysup::logging::Logger::new(args.verbose);

    match args.command {
        sysup::cli::Command::Fedora(ref opts) => {
            sysup::commands::fedora::run(&args.global, opts, &log)
        }
        sysup::cli::Command::Debian(ref opts) => {
            sysup::commands::debian::run(&args.global, opts, &log)
        }
    }
}
