use clap::Parser;
use geocalc::cli::{logging, Options};
use geocalc::input::Reader;
use geocalc::session::Session;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let options = Options::parse();
    logging::init(options.log_level())?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let reader = Reader::new(stdin.lock(), stdout.lock());

    Session::new(reader).run()?;

    Ok(())
}
