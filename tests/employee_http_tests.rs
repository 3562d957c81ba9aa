//! Employee pages and static pages over HTTP.

mod harness;

use crm_desk::adapter::inbound::http::{build_router, AppState};
use crm_desk::port::EmployeeStore;
use harness::server::{client, spawn};
use harness::temp_db::TempDb;

async fn start(name: &str) -> (TempDb, String) {
    let db = TempDb::create(name);
    let base = spawn(build_router(AppState::new(db.store()))).await;
    (db, base)
}

#[tokio::test]
async fn list_shows_department_names() {
    let (_db, base) = start("employee-list").await;

    let body = client()
        .get(format!("{base}/employees"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("<td>Grace</td><td>Hopper</td><td>Support</td>"));
    assert!(body.contains("<td>Mary</td><td>Jackson</td><td>Sales</td>"));
}

#[tokio::test]
async fn create_form_offers_departments() {
    let (_db, base) = start("employee-form").await;

    let body = client()
        .get(format!("{base}/employees/create"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("<option value=\"1\">Sales</option>"));
    assert!(body.contains("<option value=\"2\">Support</option>"));
}

#[tokio::test]
async fn create_adds_employee_and_redirects() {
    let (db, base) = start("employee-create").await;

    let resp = client()
        .post(format!("{base}/employees/create"))
        .form(&[
            ("first_name", "Katherine"),
            ("last_name", "Johnson"),
            ("department_id", "2"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["location"], "/employees");

    let employees = db.store().list_employees().await.unwrap();
    let added = employees
        .iter()
        .find(|l| l.employee.last_name == "Johnson")
        .unwrap();
    assert_eq!(added.department_name, "Support");
}

#[tokio::test]
async fn create_with_unknown_department_still_redirects() {
    let (db, base) = start("employee-bad-dept").await;

    let resp = client()
        .post(format!("{base}/employees/create"))
        .form(&[
            ("first_name", "Katherine"),
            ("last_name", "Johnson"),
            ("department_id", "77"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["location"], "/employees");
    assert_eq!(db.store().list_employees().await.unwrap().len(), 3);
}

#[tokio::test]
async fn home_shows_lucky_number() {
    let (_db, base) = start("home").await;

    let body = client()
        .get(format!("{base}/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let start = body.find("<strong id=\"lucky\">").unwrap() + "<strong id=\"lucky\">".len();
    let end = start + body[start..].find("</strong>").unwrap();
    let lucky: u32 = body[start..end].parse().unwrap();
    assert!((1..=1000).contains(&lucky));
}

#[tokio::test]
async fn create_without_form_content_type_still_redirects() {
    let (db, base) = start("employee-no-content-type").await;

    let resp = client()
        .post(format!("{base}/employees/create"))
        .body("first_name=Katherine&last_name=Johnson&department_id=2")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["location"], "/employees");
    assert_eq!(db.store().list_employees().await.unwrap().len(), 3);
}
