//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = travelverse_cli::init_logging().and_then(|()| travelverse_cli::run()) {
        eprintln!("travelverse: {err}");
        std::process::exit(1);
    }
}
