// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use greeting_core::hello::hello_world;

mod cli;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    match &args.command {
        Commands::Hello => {
            println!("{}", hello_world());
        }
        Commands::Check { expected } => {
            check(hello_world(), expected)?;
            log::info!("greeting ok");
        }
        Commands::Version => {
            println!(
                "{} {} (greeting_core {})",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                greeting_core::version()
            );
        }
    }

    Ok(())
}

fn check(output: &str, expected: &str) -> Result<()> {
    if output != expected {
        return Err(Error::Mismatch {
            got: output.to_string(),
            expected: expected.to_string(),
        });
    }
    Ok(())
}
