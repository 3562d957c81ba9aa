use tokio::net::TcpListener;
use tracing::info;

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::http;
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::logging::LogFormat;
use crate::infrastructure::config::settings::Config;

/// Resolve the effective configuration: file (or defaults), then flags.
///
/// # Errors
/// Returns an error if the file is malformed or the result fails validation.
pub fn resolve_config(args: &ServeArgs) -> Result<Config> {
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(bind) = &args.bind {
        config.server.bind.clone_from(bind);
    }
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs {
        config.logging.format = LogFormat::Json;
    }
    config.validate()?;
    Ok(config)
}

/// Run `crm-desk serve`: migrate, bind, serve until interrupted.
///
/// # Errors
/// Returns an error if startup fails or the listener dies.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    config.init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "crm-desk starting");

    let addr = config.bind_addr()?;
    let database = config.database.clone();
    let router = tokio::task::spawn_blocking(move || bootstrap::build_app(&database))
        .await
        .map_err(|e| Error::Connection(e.to_string()))??;

    let listener = TcpListener::bind(addr).await?;
    http::serve(listener, router, http::shutdown_signal()).await?;

    info!("crm-desk stopped");
    Ok(())
}
