//! Customer routes.
//!
//! Failed creates and updates are rolled back by the store and logged here;
//! the browser is sent back to the list either way.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use tracing::{info, warn};

use crate::adapter::inbound::http::error::{PageError, PageResult, DELETE_FAILED_MESSAGE};
use crate::adapter::inbound::http::form::FormFields;
use crate::adapter::inbound::http::state::AppState;
use crate::adapter::inbound::http::view;
use crate::domain::{CustomerFilter, CustomerId};
use crate::error::Result;
use crate::port::{CompanyStore, CustomerStore, EmployeeStore};

const CUSTOMERS: &str = "/customers";

type FormBody = std::result::Result<Form<Vec<(String, String)>>, FormRejection>;

fn customer_id(raw: &str) -> PageResult<CustomerId> {
    raw.parse().map_err(|_| PageError::NotFound)
}

/// `GET /customers`
///
/// The query is read as raw pairs; a repeated name uses its first value.
pub async fn list<S>(
    State(state): State<AppState<S>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> PageResult<Html<String>>
where
    S: CustomerStore,
{
    let search = FormFields::new(pairs);
    let (first_name, last_name) = (search.value("first_name"), search.value("last_name"));
    let filter = CustomerFilter::new(Some(first_name), Some(last_name));
    let customers = state.store().list_customers(&filter).await?;

    Ok(Html(view::customer::list(&customers, first_name, last_name)))
}

/// `GET /customers/create`
pub async fn create_form<S>(State(state): State<AppState<S>>) -> PageResult<Html<String>>
where
    S: CompanyStore + EmployeeStore,
{
    let companies = state.store().list_companies().await?;
    let employees = state.store().list_employee_choices().await?;
    Ok(Html(view::customer::create_form(&companies, &employees)))
}

async fn create_from<S: CustomerStore>(store: &S, fields: &FormFields) -> Result<CustomerId> {
    let (draft, employees) = fields.customer_submission()?;
    let id = store.create_customer(&draft, &employees).await?;
    info!(customer_id = %id, employees = employees.len(), "Customer created");
    Ok(id)
}

async fn update_from<S: CustomerStore>(
    store: &S,
    id: CustomerId,
    fields: &FormFields,
) -> Result<bool> {
    let (draft, employees) = fields.customer_submission()?;
    let updated = store.update_customer(id, &draft, &employees).await?;
    if updated {
        info!(customer_id = %id, employees = employees.len(), "Customer updated");
    }
    Ok(updated)
}

/// `POST /customers/create`
pub async fn create<S>(State(state): State<AppState<S>>, body: FormBody) -> Redirect
where
    S: CustomerStore,
{
    let fields = FormFields::from_body(body);
    if let Err(e) = create_from(state.store(), &fields).await {
        warn!(error = %e, "Customer create rolled back");
    }
    Redirect::to(CUSTOMERS)
}

/// `GET /customers/:id/update`
pub async fn update_form<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> PageResult<Html<String>>
where
    S: CustomerStore + CompanyStore + EmployeeStore,
{
    let id = customer_id(&id)?;
    let customer = state
        .store()
        .get_customer(id)
        .await?
        .ok_or(PageError::NotFound)?;
    let companies = state.store().list_companies().await?;
    let employees = state.store().list_employee_choices().await?;
    let assigned = state.store().assigned_employees(id).await?;

    Ok(Html(view::customer::update_form(
        &customer, &companies, &employees, &assigned,
    )))
}

/// `POST /customers/:id/update`
pub async fn update<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: FormBody,
) -> PageResult<Redirect>
where
    S: CustomerStore,
{
    let id = customer_id(&id)?;
    let fields = FormFields::from_body(body);
    match update_from(state.store(), id, &fields).await {
        Ok(true) => {}
        Ok(false) => warn!(customer_id = %id, "Update of unknown customer ignored"),
        Err(e) => warn!(customer_id = %id, error = %e, "Customer update rolled back"),
    }
    Ok(Redirect::to(CUSTOMERS))
}

/// `GET /customers/:id/delete`
pub async fn delete_confirm<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> PageResult<Html<String>>
where
    S: CustomerStore,
{
    let id = customer_id(&id)?;
    let customer = state
        .store()
        .get_customer(id)
        .await?
        .ok_or(PageError::NotFound)?;
    Ok(Html(view::customer::delete_confirm(&customer)))
}

/// `POST /customers/:id/delete`
pub async fn delete<S>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Response
where
    S: CustomerStore,
{
    let id = match customer_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    match state.store().delete_customer(id).await {
        Ok(deleted) => {
            info!(customer_id = %id, deleted, "Customer delete");
            Redirect::to(CUSTOMERS).into_response()
        }
        Err(e) => {
            warn!(customer_id = %id, error = %e, "Customer delete failed");
            (StatusCode::INTERNAL_SERVER_ERROR, DELETE_FAILED_MESSAGE).into_response()
        }
    }
}
