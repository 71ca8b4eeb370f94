use std::process;

use tracing::Level;

use reloaded::{Config, Corrector};

fn main() {
    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) if !e.use_stderr() => {
            // --help / --version
            print!("{}", e);
            return;
        }
        Err(e) => {
            eprint!("{}", e);
            process::exit(1);
        }
    };

    let level = if config.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let corrector = Corrector::new(&config);
    tracing::debug!(stages = ?corrector.stages(), "fases activas");

    if let Err(e) = corrector.correct_file(&config.input_file, &config.output_file) {
        tracing::debug!(path = %e.path().display(), "fallo de entrada/salida");
        eprintln!("{}", e);
        process::exit(1);
    }
}
