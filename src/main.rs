//! CLI entry point for reprodocs.
//!
//! Prints the product greeting followed by the build-info line. The binary
//! takes no functional arguments; anything passed on the command line is
//! accepted and ignored so wrapper scripts in the archive pipeline can pass
//! their own bookkeeping arguments through.

use anyhow::Result;
use clap::Parser;

use reprodocs::build_info::build_info;
use reprodocs::greeter::Greeter;
use reprodocs::product::VERSION;

#[derive(Parser)]
#[command(name = "reprodocs")]
#[command(version = VERSION)]
#[command(
    about = "Greeter demo exercising reproducible documentation builds",
    long_about = None
)]
struct Cli {
    /// Accepted and ignored
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true
    )]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let _ = Cli::parse().args;

    let greeter = Greeter::new();
    println!("{}", greeter.greeting());
    println!("{}", build_info());

    Ok(())
}
