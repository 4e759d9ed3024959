//! Integration tests for the OpsDesk backend.

use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::config::Config;
use crate::db::{init_database, Repository};
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_psk(Some("test-api-key".to_string())).await
    }

    async fn with_psk(psk: Option<String>) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        // Initialize database
        let pool = init_database(&db_path).await.expect("Failed to init DB");
        let repo = Arc::new(Repository::new(pool));

        // Create config
        let config = Config {
            api_psk: psk.clone(),
            db_path,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            late_cutoff: "09:30".to_string(),
        };

        let state = AppState {
            repo,
            config: Arc::new(config),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        let mut client_builder = Client::builder();
        if let Some(key) = psk {
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert("x-api-key", key.parse().unwrap());
            client_builder = client_builder.default_headers(headers);
        }

        TestFixture {
            client: client_builder.build().unwrap(),
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn create_employee(&self, name: &str) -> String {
        let resp = self
            .client
            .post(self.url("/api/employees"))
            .json(&json!({
                "displayName": name,
                "email": format!("{}@example.com", name.to_lowercase().replace(' ', "."))
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        body["data"]["id"].as_str().unwrap().to_string()
    }

    async fn create_project(&self, name: &str) -> String {
        let resp = self
            .client
            .post(self.url("/api/projects"))
            .json(&json!({ "name": name }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        body["data"]["id"].as_str().unwrap().to_string()
    }

    async fn assign_employee_projects(&self, id: &str, projects: Value) -> Value {
        let resp = self
            .client
            .put(self.url(&format!("/api/employees/{}/projects", id)))
            .json(&json!({ "projects": projects }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }

    async fn get_employee(&self, id: &str) -> Value {
        let resp = self
            .client
            .get(self.url(&format!("/api/employees/{}", id)))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }
}

fn date_offset_days(offset: i64) -> String {
    let date = chrono::Utc::now().date_naive() + chrono::Duration::days(offset);
    date.format("%Y-%m-%d").to_string()
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_auth_missing_psk() {
    let fixture = TestFixture::new().await;

    // Plain client without the default x-api-key header
    let client = Client::new();
    let resp = client
        .get(fixture.url("/api/employees"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_auth_invalid_psk() {
    let fixture = TestFixture::new().await;

    let client = Client::new();
    let resp = client
        .get(fixture.url("/api/employees"))
        .header("x-api-key", "wrong-key")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_employee_crud() {
    let fixture = TestFixture::new().await;

    // Create
    let create_resp = fixture
        .client
        .post(fixture.url("/api/employees"))
        .json(&json!({
            "displayName": "Test User",
            "email": "test@example.com",
            "loginEmail": "test.user@login.example.com"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(create_resp.status(), 200);
    let create_body: Value = create_resp.json().await.unwrap();
    assert_eq!(create_body["success"], true);
    let employee_id = create_body["data"]["id"].as_str().unwrap();
    assert_eq!(create_body["data"]["displayName"], "Test User");
    assert_eq!(create_body["data"]["role"], "Developer");
    assert_eq!(create_body["data"]["primaryProject"], "Unassigned");
    assert_eq!(create_body["data"]["projects"].as_array().unwrap().len(), 0);

    // Get
    let get_body = fixture.get_employee(employee_id).await;
    assert_eq!(get_body["data"]["displayName"], "Test User");

    // Update
    let update_resp = fixture
        .client
        .put(fixture.url(&format!("/api/employees/{}", employee_id)))
        .json(&json!({ "displayName": "Updated User" }))
        .send()
        .await
        .unwrap();

    assert_eq!(update_resp.status(), 200);
    let update_body: Value = update_resp.json().await.unwrap();
    assert_eq!(update_body["data"]["displayName"], "Updated User");

    // List
    let list_resp = fixture
        .client
        .get(fixture.url("/api/employees"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    assert!(list_body["data"].as_array().unwrap().len() >= 1);

    // Delete
    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/employees/{}", employee_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);

    // Verify deleted
    let get_deleted_resp = fixture
        .client
        .get(fixture.url(&format!("/api/employees/{}", employee_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(get_deleted_resp.status(), 404);
}

#[tokio::test]
async fn test_assign_projects_ordered_list() {
    let fixture = TestFixture::new().await;
    fixture.create_project("Phoenix").await;
    fixture.create_project("Odyssey").await;

    let employee_id = fixture.create_employee("Alice").await;
    let body = fixture
        .assign_employee_projects(&employee_id, json!(["Phoenix", "Odyssey"]))
        .await;

    assert_eq!(body["data"]["primaryProject"], "Phoenix");
    assert_eq!(
        body["data"]["projects"],
        json!(["Phoenix", "Odyssey"])
    );
    assert_eq!(body["data"]["role"], "TeamLead");
}

#[tokio::test]
async fn test_assign_projects_legacy_single_name() {
    let fixture = TestFixture::new().await;
    fixture.create_project("Phoenix").await;

    let employee_id = fixture.create_employee("Bob").await;
    let body = fixture
        .assign_employee_projects(&employee_id, json!("Phoenix"))
        .await;

    assert_eq!(body["data"]["primaryProject"], "Phoenix");
    assert_eq!(body["data"]["projects"], json!(["Phoenix"]));
}

#[tokio::test]
async fn test_team_lead_succession() {
    let fixture = TestFixture::new().await;
    fixture.create_project("Phoenix").await;

    let bob = fixture.create_employee("Bob").await;
    let alice = fixture.create_employee("Alice").await;

    // Bob becomes lead of Phoenix
    fixture
        .assign_employee_projects(&bob, json!(["Phoenix"]))
        .await;
    let bob_body = fixture.get_employee(&bob).await;
    assert_eq!(bob_body["data"]["role"], "TeamLead");

    // Alice takes over: Bob is demoted to the baseline role
    fixture
        .assign_employee_projects(&alice, json!(["Phoenix"]))
        .await;

    let alice_body = fixture.get_employee(&alice).await;
    assert_eq!(alice_body["data"]["role"], "TeamLead");
    let bob_body = fixture.get_employee(&bob).await;
    assert_eq!(bob_body["data"]["role"], "Developer");

    // Exactly one TeamLead for Phoenix
    let list_resp = fixture
        .client
        .get(fixture.url("/api/employees"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    let leads = list_body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["role"] == "TeamLead" && e["primaryProject"] == "Phoenix")
        .count();
    assert_eq!(leads, 1);
}

#[tokio::test]
async fn test_succession_does_not_touch_other_projects() {
    let fixture = TestFixture::new().await;
    fixture.create_project("Phoenix").await;
    fixture.create_project("Odyssey").await;

    let bob = fixture.create_employee("Bob").await;
    let alice = fixture.create_employee("Alice").await;

    fixture
        .assign_employee_projects(&bob, json!(["Odyssey"]))
        .await;
    fixture
        .assign_employee_projects(&alice, json!(["Phoenix", "Odyssey"]))
        .await;

    // Bob leads Odyssey; Alice leads Phoenix and is only a member of Odyssey.
    let bob_body = fixture.get_employee(&bob).await;
    assert_eq!(bob_body["data"]["role"], "TeamLead");
    let alice_body = fixture.get_employee(&alice).await;
    assert_eq!(alice_body["data"]["role"], "TeamLead");
    assert_eq!(alice_body["data"]["primaryProject"], "Phoenix");
}

#[tokio::test]
async fn test_assign_projects_validation() {
    let fixture = TestFixture::new().await;
    let employee_id = fixture.create_employee("Carol").await;

    // Empty list
    let resp = fixture
        .client
        .put(fixture.url(&format!("/api/employees/{}/projects", employee_id)))
        .json(&json!({ "projects": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // Unknown project
    let resp = fixture
        .client
        .put(fixture.url(&format!("/api/employees/{}/projects", employee_id)))
        .json(&json!({ "projects": ["DoesNotExist"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_project_team_displayed_roles() {
    let fixture = TestFixture::new().await;
    let phoenix_id = fixture.create_project("Phoenix").await;
    fixture.create_project("Odyssey").await;

    let alice = fixture.create_employee("Alice").await;
    let bob = fixture.create_employee("Bob").await;

    // Alice: Phoenix primary (lead). Bob: Odyssey primary, Phoenix secondary.
    fixture
        .assign_employee_projects(&alice, json!(["Phoenix"]))
        .await;
    fixture
        .assign_employee_projects(&bob, json!(["Odyssey", "Phoenix"]))
        .await;

    let resp = fixture
        .client
        .get(fixture.url(&format!("/api/projects/{}/team", phoenix_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let team = body["data"].as_array().unwrap();
    assert_eq!(team.len(), 2);

    let alice_entry = team.iter().find(|e| e["personId"] == alice.as_str()).unwrap();
    assert_eq!(alice_entry["displayedRole"], "TeamLead");
    assert_eq!(alice_entry["isPrimary"], true);

    let bob_entry = team.iter().find(|e| e["personId"] == bob.as_str()).unwrap();
    assert_eq!(bob_entry["displayedRole"], "Member");
    assert_eq!(bob_entry["isPrimary"], false);
}

#[tokio::test]
async fn test_project_delete_refused_while_assigned() {
    let fixture = TestFixture::new().await;
    let phoenix_id = fixture.create_project("Phoenix").await;
    let alice = fixture.create_employee("Alice").await;

    fixture
        .assign_employee_projects(&alice, json!(["Phoenix"]))
        .await;

    let resp = fixture
        .client
        .delete(fixture.url(&format!("/api/projects/{}", phoenix_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_duplicate_project_name_conflict() {
    let fixture = TestFixture::new().await;
    fixture.create_project("Phoenix").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/projects"))
        .json(&json!({ "name": "Phoenix" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
}

#[tokio::test]
async fn test_attendance_punch_flow() {
    let fixture = TestFixture::new().await;
    let employee_id = fixture.create_employee("Dana").await;

    // Punch in before the 09:30 cutoff
    let in_resp = fixture
        .client
        .post(fixture.url("/api/attendance/punch-in"))
        .json(&json!({ "employeeId": employee_id, "time": "09:15" }))
        .send()
        .await
        .unwrap();
    assert_eq!(in_resp.status(), 200);
    let in_body: Value = in_resp.json().await.unwrap();
    assert_eq!(in_body["data"]["status"], "Present");
    assert_eq!(in_body["data"]["checkIn"], "09:15");
    assert_eq!(in_body["data"]["totalHours"], "0:00");

    // Duplicate punch-in is a conflict, not a second record
    let dup_resp = fixture
        .client
        .post(fixture.url("/api/attendance/punch-in"))
        .json(&json!({ "employeeId": employee_id, "time": "09:20" }))
        .send()
        .await
        .unwrap();
    assert_eq!(dup_resp.status(), 409);
    let dup_body: Value = dup_resp.json().await.unwrap();
    assert_eq!(dup_body["error"]["code"], "CONFLICT");

    // Punch out
    let out_resp = fixture
        .client
        .post(fixture.url("/api/attendance/punch-out"))
        .json(&json!({ "employeeId": employee_id, "time": "5:45 PM" }))
        .send()
        .await
        .unwrap();
    assert_eq!(out_resp.status(), 200);
    let out_body: Value = out_resp.json().await.unwrap();
    assert_eq!(out_body["data"]["checkOut"], "17:45");
    assert_eq!(out_body["data"]["totalHours"], "8:30");
    assert_eq!(out_body["data"]["totalHoursDecimal"], 8.5);

    // Second punch-out is a conflict
    let again_resp = fixture
        .client
        .post(fixture.url("/api/attendance/punch-out"))
        .json(&json!({ "employeeId": employee_id, "time": "18:00" }))
        .send()
        .await
        .unwrap();
    assert_eq!(again_resp.status(), 409);
}

#[tokio::test]
async fn test_attendance_late_status() {
    let fixture = TestFixture::new().await;
    let employee_id = fixture.create_employee("Erin").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/attendance/punch-in"))
        .json(&json!({ "employeeId": employee_id, "time": "10:05 AM" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["status"], "Late");
    assert_eq!(body["data"]["checkIn"], "10:05");
}

#[tokio::test]
async fn test_punch_out_without_punch_in() {
    let fixture = TestFixture::new().await;
    let employee_id = fixture.create_employee("Frank").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/attendance/punch-out"))
        .json(&json!({ "employeeId": employee_id, "time": "17:00" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_punch_in_unknown_employee() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/attendance/punch-in"))
        .json(&json!({ "employeeId": "no-such-id", "time": "09:00" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_intern_status_derivation() {
    let fixture = TestFixture::new().await;

    // Starts tomorrow: Upcoming
    let upcoming_resp = fixture
        .client
        .post(fixture.url("/api/interns"))
        .json(&json!({
            "displayName": "Upcoming Intern",
            "email": "upcoming@example.com",
            "startDate": date_offset_days(1)
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(upcoming_resp.status(), 200);
    let upcoming_body: Value = upcoming_resp.json().await.unwrap();
    assert_eq!(upcoming_body["data"]["status"], "Upcoming");
    assert_eq!(upcoming_body["data"]["duration"], "Not started");

    // Started ten days ago, open-ended: Active with tiered duration
    let active_resp = fixture
        .client
        .post(fixture.url("/api/interns"))
        .json(&json!({
            "displayName": "Active Intern",
            "email": "active@example.com",
            "startDate": date_offset_days(-10)
        }))
        .send()
        .await
        .unwrap();
    let active_body: Value = active_resp.json().await.unwrap();
    assert_eq!(active_body["data"]["status"], "Active");
    assert_eq!(active_body["data"]["duration"], "1 week, 3 days");

    // Ended yesterday: Completed
    let completed_resp = fixture
        .client
        .post(fixture.url("/api/interns"))
        .json(&json!({
            "displayName": "Completed Intern",
            "email": "done@example.com",
            "startDate": date_offset_days(-400),
            "endDate": date_offset_days(-1)
        }))
        .send()
        .await
        .unwrap();
    let completed_body: Value = completed_resp.json().await.unwrap();
    assert_eq!(completed_body["data"]["status"], "Completed");
}

#[tokio::test]
async fn test_intern_termination_is_sticky() {
    let fixture = TestFixture::new().await;

    // Starts tomorrow, so date derivation alone would say Upcoming
    let create_resp = fixture
        .client
        .post(fixture.url("/api/interns"))
        .json(&json!({
            "displayName": "Terminated Intern",
            "email": "term@example.com",
            "startDate": date_offset_days(1)
        }))
        .send()
        .await
        .unwrap();
    let create_body: Value = create_resp.json().await.unwrap();
    let intern_id = create_body["data"]["id"].as_str().unwrap();

    let term_resp = fixture
        .client
        .post(fixture.url(&format!("/api/interns/{}/terminate", intern_id)))
        .json(&json!({ "reason": "Policy violation" }))
        .send()
        .await
        .unwrap();
    assert_eq!(term_resp.status(), 200);
    let term_body: Value = term_resp.json().await.unwrap();
    assert_eq!(term_body["data"]["status"], "Terminated");
    assert_eq!(term_body["data"]["terminationReason"], "Policy violation");

    // Sticky across subsequent reads despite the future start date
    let get_resp = fixture
        .client
        .get(fixture.url(&format!("/api/interns/{}", intern_id)))
        .send()
        .await
        .unwrap();
    let get_body: Value = get_resp.json().await.unwrap();
    assert_eq!(get_body["data"]["status"], "Terminated");
}

#[tokio::test]
async fn test_intern_succession_shares_lead_invariant() {
    let fixture = TestFixture::new().await;
    fixture.create_project("Phoenix").await;

    let employee = fixture.create_employee("Lead Employee").await;
    fixture
        .assign_employee_projects(&employee, json!(["Phoenix"]))
        .await;

    // An intern taking primary Phoenix demotes the employee lead too
    let intern_resp = fixture
        .client
        .post(fixture.url("/api/interns"))
        .json(&json!({
            "displayName": "Ambitious Intern",
            "email": "intern@example.com",
            "startDate": date_offset_days(-30)
        }))
        .send()
        .await
        .unwrap();
    let intern_body: Value = intern_resp.json().await.unwrap();
    let intern_id = intern_body["data"]["id"].as_str().unwrap();

    let assign_resp = fixture
        .client
        .put(fixture.url(&format!("/api/interns/{}/projects", intern_id)))
        .json(&json!({ "projects": ["Phoenix"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(assign_resp.status(), 200);
    let assign_body: Value = assign_resp.json().await.unwrap();
    assert_eq!(assign_body["data"]["role"], "TeamLead");

    let employee_body = fixture.get_employee(&employee).await;
    assert_eq!(employee_body["data"]["role"], "Developer");
}

#[tokio::test]
async fn test_leave_request_flow() {
    let fixture = TestFixture::new().await;
    let employee_id = fixture.create_employee("Grace").await;

    let create_resp = fixture
        .client
        .post(fixture.url("/api/leave"))
        .json(&json!({
            "employeeId": employee_id,
            "startDate": date_offset_days(7),
            "endDate": date_offset_days(10),
            "reason": "Vacation"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 200);
    let create_body: Value = create_resp.json().await.unwrap();
    assert_eq!(create_body["data"]["status"], "Pending");
    let leave_id = create_body["data"]["id"].as_str().unwrap();

    let approve_resp = fixture
        .client
        .put(fixture.url(&format!("/api/leave/{}/status", leave_id)))
        .json(&json!({ "status": "Approved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(approve_resp.status(), 200);
    let approve_body: Value = approve_resp.json().await.unwrap();
    assert_eq!(approve_body["data"]["status"], "Approved");

    // Filter by status
    let list_resp = fixture
        .client
        .get(fixture.url("/api/leave?status=Approved"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    assert_eq!(list_body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_leave_request_unknown_employee() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/leave"))
        .json(&json!({
            "employeeId": "no-such-id",
            "startDate": date_offset_days(1),
            "endDate": date_offset_days(2)
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_task_crud() {
    let fixture = TestFixture::new().await;
    let employee_id = fixture.create_employee("Henry").await;

    let create_resp = fixture
        .client
        .post(fixture.url("/api/tasks"))
        .json(&json!({
            "title": "Prepare onboarding docs",
            "assigneeId": employee_id,
            "dueDate": date_offset_days(14)
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 200);
    let create_body: Value = create_resp.json().await.unwrap();
    assert_eq!(create_body["data"]["status"], "Todo");
    let task_id = create_body["data"]["id"].as_str().unwrap();

    let update_resp = fixture
        .client
        .put(fixture.url(&format!("/api/tasks/{}", task_id)))
        .json(&json!({ "status": "InProgress" }))
        .send()
        .await
        .unwrap();
    assert_eq!(update_resp.status(), 200);
    let update_body: Value = update_resp.json().await.unwrap();
    assert_eq!(update_body["data"]["status"], "InProgress");

    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/tasks/{}", task_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);
}

#[tokio::test]
async fn test_validation_errors() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/employees"))
        .json(&json!({ "displayName": "", "email": "x@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let resp2 = fixture
        .client
        .post(fixture.url("/api/tasks"))
        .json(&json!({ "title": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp2.status(), 400);
}

#[tokio::test]
async fn test_not_found_errors() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/employees/non-existent-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let resp2 = fixture
        .client
        .get(fixture.url("/api/projects/non-existent-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp2.status(), 404);
}
