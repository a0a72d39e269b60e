//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use haven_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported on stderr before exiting"
)]
fn main() {
    haven_cli::init_logging();
    match haven_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("haven: {err}");
            std::process::exit(1);
        }
    }
}
