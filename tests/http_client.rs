//! HttpClient against a mock reporting API served by axum.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use ngo_reporting::dashboard::{self, DashboardState, DashboardView, EMPTY_MESSAGE};
use ngo_reporting::form::{self, ReportForm, SubmitOutcome};
use ngo_reporting::{
    ApiConfig, ApiError, HttpClient, Month, ReportField, ReportingApi, GENERIC_ERROR_MESSAGE,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct MockApi {
    received: Arc<Mutex<Vec<Value>>>,
}

async fn report_handler(State(mock): State<MockApi>, Json(body): Json<Value>) -> impl IntoResponse {
    let duplicate = body["ngo_id"] == "DUP";
    mock.received.lock().unwrap().push(body);

    if duplicate {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": "duplicate report" })))
    } else {
        (StatusCode::CREATED, Json(json!({ "message": "Report submitted successfully" })))
    }
}

async fn dashboard_handler(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    match params.get("month").map(String::as_str) {
        Some("2024-05") => (
            StatusCode::OK,
            Json(json!({
                "total_ngos": 4,
                "total_people": 820,
                "total_events": 12,
                "total_funds": 15320.75
            })),
        )
            .into_response(),
        Some("2024-06") => StatusCode::OK.into_response(),
        Some("1999-01") => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "aggregation failed" })),
        )
            .into_response(),
        _ => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn spawn_mock() -> (String, MockApi) {
    let mock = MockApi::default();
    let app = Router::new()
        .route("/api/report", post(report_handler))
        .route("/api/dashboard", get(dashboard_handler))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), mock)
}

fn client(base_url: &str) -> HttpClient {
    HttpClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: 5,
    })
    .unwrap()
}

fn filled_form(ngo_id: &str) -> ReportForm {
    let mut form = ReportForm::new();
    form.update(ReportField::NgoId, ngo_id);
    form.update(ReportField::Month, "2024-05");
    form.update(ReportField::PeopleHelped, "100");
    form.update(ReportField::EventsConducted, "3");
    form.update(ReportField::FundsUtilized, "250.5");
    form
}

#[tokio::test]
async fn test_submit_posts_report_unchanged() {
    let (base_url, mock) = spawn_mock().await;
    let api = client(&base_url);
    let mut form = filled_form("NGO1");

    let outcome = form::submit(&mut form, &api).await.unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Accepted("Report submitted successfully".to_string())
    );
    assert_eq!(
        *mock.received.lock().unwrap(),
        vec![json!({
            "ngo_id": "NGO1",
            "month": "2024-05",
            "people_helped": 100,
            "events_conducted": 3,
            "funds_utilized": 250.5
        })]
    );
    assert_eq!(form.value(ReportField::NgoId), "");
}

#[tokio::test]
async fn test_submit_api_error_keeps_values() {
    let (base_url, _mock) = spawn_mock().await;
    let api = client(&base_url);
    let mut form = filled_form("DUP");

    let outcome = form::submit(&mut form, &api).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Rejected("duplicate report".to_string()));
    assert_eq!(form.error(), Some("duplicate report"));
    assert_eq!(form.value(ReportField::NgoId), "DUP");
    assert_eq!(form.value(ReportField::FundsUtilized), "250.5");
}

#[tokio::test]
async fn test_invalid_report_not_posted() {
    let (base_url, mock) = spawn_mock().await;
    let api = client(&base_url);
    let mut form = filled_form("NGO1");
    form.update(ReportField::PeopleHelped, "-1");

    assert!(form::submit(&mut form, &api).await.is_err());
    assert_eq!(form.error(), Some("People helped cannot be negative"));
    assert!(mock.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_dashboard_summary() {
    let (base_url, _mock) = spawn_mock().await;
    let api = client(&base_url);
    let mut state = DashboardState::default();

    let view = dashboard::load(&mut state, &api, "2024-05").await;

    let DashboardView::Populated(cards) = view else {
        panic!("expected populated dashboard, got {:?}", view);
    };
    let values: Vec<_> = cards.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, ["4", "820", "12", "$15320.75"]);
}

#[tokio::test]
async fn test_dashboard_no_content() {
    let (base_url, _mock) = spawn_mock().await;
    let api = client(&base_url);

    let month = Month::parse("2024-06").unwrap();
    assert_eq!(api.fetch_dashboard(&month).await.unwrap(), None);

    let month = Month::parse("2030-01").unwrap();
    assert_eq!(api.fetch_dashboard(&month).await.unwrap(), None);

    let mut state = DashboardState::default();
    assert_eq!(dashboard::load(&mut state, &api, "2024-06").await, DashboardView::Empty);
    assert_eq!(EMPTY_MESSAGE, "No data available for this month.");
}

#[tokio::test]
async fn test_dashboard_api_error() {
    let (base_url, _mock) = spawn_mock().await;
    let api = client(&base_url);
    let mut state = DashboardState::default();

    let view = dashboard::load(&mut state, &api, "1999-01").await;
    assert_eq!(view, DashboardView::Error("aggregation failed".to_string()));
}

#[tokio::test]
async fn test_unreachable_api_is_transport_error() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = client(&format!("http://{}", addr));
    let mut form = filled_form("NGO1");

    let outcome = form::submit(&mut form, &api).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Failed(GENERIC_ERROR_MESSAGE.to_string()));
    assert_eq!(form.value(ReportField::NgoId), "NGO1");

    let month = Month::parse("2024-05").unwrap();
    let err = api.fetch_dashboard(&month).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
