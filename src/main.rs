use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use khtrm_dispatch::cli;
use khtrm_dispatch::config::Config;
use khtrm_dispatch::identity::{AccessGuard, DirectoryAuthority, FileTokenStorage, SessionStore};
use khtrm_dispatch::notify::LogNotifier;

fn main() -> anyhow::Result<()> {
    // Init logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    fmt().with_env_filter(filter).init();

    let config = Config::from_env();

    // Startup banner at info level so something always prints at default verbosity
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "<unset>".to_string());
    info!(
        target: "khtrm",
        "KhTRM dispatch console starting: RUST_LOG='{}', session_file='{}', default_route='{}'",
        rust_log,
        config.session_file.display(),
        config.default_route
    );

    let session = Arc::new(SessionStore::new(
        Arc::new(DirectoryAuthority::new()),
        Arc::new(FileTokenStorage::new(config.session_file.clone())),
    ));
    // Pick up a session persisted by a previous run before the first prompt.
    session.restore_session();

    let guard = AccessGuard::new(session.clone());
    let notifier = LogNotifier;

    cli::run(session, &guard, &notifier)
}
