use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Installs the fmt subscriber on stderr, at most once per process.
pub fn init_logging(verbose: bool) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    INIT.call_once(|| {
        let level = if verbose { Level::DEBUG } else { Level::INFO };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();
    });
}
