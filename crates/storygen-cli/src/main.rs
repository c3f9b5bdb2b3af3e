use storygen_cli::{cli, run, DEFAULT_LOG_FILTER};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("storygen=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run(&matches, &mut out) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
