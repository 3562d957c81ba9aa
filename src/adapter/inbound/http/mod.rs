//! Server-rendered HTML interface.
//!
//! Handlers are generic over the store so the same router runs against
//! SQLite in production and against in-memory doubles in tests.

pub mod error;
pub mod form;
pub mod handler;
mod middleware;
pub mod state;
pub mod view;

use std::future::Future;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::{Error, Result};
use crate::port::{CompanyStore, CustomerStore, EmployeeStore};

pub use state::AppState;

/// Build the application router with every route, the not-found fallback
/// and request tracing.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: CustomerStore + CompanyStore + EmployeeStore + 'static,
{
    use handler::{customer, employee, page};

    Router::new()
        .route("/", get(page::home))
        .route("/about-us", get(page::about_us))
        .route("/contact-us", get(page::contact_us))
        .route("/customers", get(customer::list::<S>))
        .route(
            "/customers/create",
            get(customer::create_form::<S>).post(customer::create::<S>),
        )
        .route(
            "/customers/:id/update",
            get(customer::update_form::<S>).post(customer::update::<S>),
        )
        .route(
            "/customers/:id/delete",
            get(customer::delete_confirm::<S>).post(customer::delete::<S>),
        )
        .route("/employees", get(employee::list::<S>))
        .route(
            "/employees/create",
            get(employee::create_form::<S>).post(employee::create::<S>),
        )
        .fallback(page::not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::request_tracing::<S>,
        ))
        .with_state(state)
}

/// Serve the router on a bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(Error::Io)
}

/// Resolve on SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("Shutdown signal received");
}
