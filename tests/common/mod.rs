//! Shared test utilities and fixtures.
//!
//! Wiremock mounts that simulate the job-board backend's wire shape:
//! every payload is wrapped one level deep as `{"data": ...}`.

#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn job_json(id: u64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "location": "Dhaka",
        "vacancy": 2,
        "job_type": "full-time",
        "start_salary": 20000,
        "end_salary": 30000,
        "salary_type": "monthly",
        "description": "Design, build, ship.",
        "expired_at": "2024-04-01T00:00:00Z",
        "company_name": "Acme",
        "company_logo": "https://cdn.example/acme.png",
        "company_website": "https://acme.example",
        "company_email_address": "jobs@acme.example",
        "company_short_description": "A mid-size product company."
    })
}

pub fn application_json(id: u64, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "status": status,
        "createdAt": "2024-03-01T09:30:00Z",
        "job": job_json(id * 10, "Backend Engineer")
    })
}

pub async fn start_backend() -> MockServer {
    MockServer::start().await
}

/// Mount an application-show response with a payload.
pub async fn mount_application_show(server: &MockServer, id: u64, status: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/private/applications/{id}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"data": application_json(id, status)})),
        )
        .mount(server)
        .await;
}

/// Mount a 200 with no payload (the backend's empty condition).
pub async fn mount_empty(server: &MockServer, route_path: &str) {
    Mock::given(method("GET"))
        .and(path(route_path.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": null})))
        .mount(server)
        .await;
}

/// Mount an error status with an HTML body, the way gateways fail.
pub async fn mount_server_error(server: &MockServer, route_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route_path.to_string()))
        .respond_with(ResponseTemplate::new(status).set_body_string("<html>bad gateway</html>"))
        .mount(server)
        .await;
}

pub async fn mount_jobs_index(server: &MockServer, jobs: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": jobs})))
        .mount(server)
        .await;
}
