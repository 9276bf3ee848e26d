//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = swiftride_cli::init_logging() {
        eprintln!("swiftride: {err}");
    }
    if let Err(err) = swiftride_cli::run() {
        eprintln!("swiftride: {err}");
        std::process::exit(1);
    }
}
