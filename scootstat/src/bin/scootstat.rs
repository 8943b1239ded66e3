//! batch analysis of e-scooter trip exports. each subcommand reads the outputs of
//! the previous stage, starting from the raw operator exports passed to `clean`.
use clap::Parser;
use scootstat::app::ScootstatApp;

fn main() {
    env_logger::init();
    let args = ScootstatApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
