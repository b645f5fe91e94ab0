//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use surfrank_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on standard error"
)]
fn main() {
    if let Err(err) = surfrank_cli::run() {
        if let CliError::ArgumentParsing(parse) = &err {
            parse.exit();
        }
        eprintln!("surfrank: {err}");
        std::process::exit(1);
    }
}
