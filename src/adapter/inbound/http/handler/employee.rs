//! Employee routes.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use tracing::{info, warn};

use crate::adapter::inbound::http::error::PageResult;
use crate::adapter::inbound::http::form::FormFields;
use crate::adapter::inbound::http::state::AppState;
use crate::adapter::inbound::http::view;
use crate::domain::EmployeeId;
use crate::error::Result;
use crate::port::EmployeeStore;

/// `GET /employees`
pub async fn list<S>(State(state): State<AppState<S>>) -> PageResult<Html<String>>
where
    S: EmployeeStore,
{
    let employees = state.store().list_employees().await?;
    Ok(Html(view::employee::list(&employees)))
}

/// `GET /employees/create`
pub async fn create_form<S>(State(state): State<AppState<S>>) -> PageResult<Html<String>>
where
    S: EmployeeStore,
{
    let departments = state.store().list_departments().await?;
    Ok(Html(view::employee::create_form(&departments)))
}

async fn create_from<S: EmployeeStore>(store: &S, fields: &FormFields) -> Result<EmployeeId> {
    let draft = fields.employee_submission()?;
    let id = store.create_employee(&draft).await?;
    info!(employee_id = %id, "Employee created");
    Ok(id)
}

/// `POST /employees/create`
///
/// Redirects to the list whether or not the insert went through.
pub async fn create<S>(
    State(state): State<AppState<S>>,
    body: std::result::Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Redirect
where
    S: EmployeeStore,
{
    let fields = FormFields::from_body(body);
    if let Err(e) = create_from(state.store(), &fields).await {
        warn!(error = %e, "Employee create failed");
    }
    Redirect::to("/employees")
}
