//! Tracing setup.
//!
//! LOG_LEVEL takes full EnvFilter directives ("debug" or
//! "info,codequest_backend=debug,tower_http=info"); LOG_FORMAT selects
//! "json" structured output, anything else gets the pretty formatter.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
        EnvFilter::new("info,codequest_backend=debug,tower_http=info,axum=info")
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
