//! Serve command - run the HTTP API

use workdays::config::ServiceConfig;
use workdays::server::{ServerState, tiny_http};

/// Start the HTTP server and block until the process exits
pub fn serve(config: &ServiceConfig) -> anyhow::Result<()> {
    let calculator = workdays::build_calculator(&config.holidays);
    let state = ServerState::new(calculator, config.validation.profile);

    log::info!(
        "Validation profile: {}, holidays: {}",
        config.validation.profile,
        if config.holidays.offline { "embedded" } else { config.holidays.url.as_str() }
    );

    tiny_http::serve(&config.server.addr(), config.server.workers, &state)
}
