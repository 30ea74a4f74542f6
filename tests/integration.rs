//! Integration tests for the Shift Wage Engine HTTP API.
//!
//! This test suite covers:
//! - Plain weekday shifts and break formats
//! - Night window and midnight rollover
//! - Saturday, Sunday and public holiday premiums
//! - The overtime threshold and overtime suppression
//! - History append, replace, remove, clear and rate memory
//! - Export to xlsx, CSV, text and JSON
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use calamine::{Reader, Xlsx, open_workbook_from_rs};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::io::Cursor;
use std::str::FromStr;
use tower::ServiceExt;

use shift_wage_engine::api::{AppState, create_router};
use shift_wage_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/ch").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal field that was serialized as a string.
fn dec_field(value: &Value, pointer: &str) -> Decimal {
    let raw = value
        .pointer(pointer)
        .unwrap_or_else(|| panic!("missing {}", pointer));
    match raw {
        Value::String(s) => decimal(s),
        other => decimal(&other.to_string()),
    }
}

struct TestResponse {
    status: StatusCode,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        content_type,
        body,
    }
}

fn shift(date: &str, start: &str, end: &str, break_duration: &str, rate: &str) -> Value {
    json!({
        "worker_name": "Anna Muster",
        "mission_id": "M-100",
        "date": date,
        "hourly_rate": rate,
        "start_time": start,
        "end_time": end,
        "break_duration": break_duration
    })
}

async fn calculate(router: &Router, body: Value) -> Value {
    let response = send(router, "POST", "/calculate", Some(body)).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text());
    response.json()
}

// =============================================================================
// Weekday
// =============================================================================

#[tokio::test]
async fn test_monday_with_one_hour_break() {
    let router = create_router_for_test();
    let result = calculate(&router, shift("2026-01-12", "08:00", "17:00", "1:00", "25")).await;

    assert_eq!(result["day_name"], "Monday");
    assert_eq!(result["day_kind"], "weekday");
    assert_eq!(dec_field(&result, "/hours/total"), decimal("8"));
    assert_eq!(result["hours_hhmm"]["total"], "8:00");
    assert_eq!(dec_field(&result, "/base_pay"), decimal("200.00"));
    assert_eq!(dec_field(&result, "/gross_pay"), decimal("200.00"));
    assert_eq!(dec_field(&result, "/premiums/night"), Decimal::ZERO);
}

#[tokio::test]
async fn test_break_as_decimal_hours() {
    let router = create_router_for_test();
    let result = calculate(&router, shift("2026-01-13", "08:00", "12:30", "0.5", "30")).await;

    assert_eq!(dec_field(&result, "/break_hours"), decimal("0.5"));
    assert_eq!(dec_field(&result, "/hours/total"), decimal("4"));
    assert_eq!(dec_field(&result, "/gross_pay"), decimal("120.00"));
}

#[tokio::test]
async fn test_empty_break_means_no_break() {
    let router = create_router_for_test();
    let result = calculate(&router, shift("2026-01-14", "09:15", "11:00", "", "24")).await;

    assert_eq!(result["hours_hhmm"]["total"], "1:45");
    assert_eq!(dec_field(&result, "/gross_pay"), decimal("42.00"));
}

// =============================================================================
// Night and rollover
// =============================================================================

#[tokio::test]
async fn test_rollover_splits_night_and_normal() {
    let router = create_router_for_test();
    let result = calculate(&router, shift("2026-01-13", "22:00", "02:00", "", "30")).await;

    assert_eq!(dec_field(&result, "/hours/total"), decimal("4"));
    assert_eq!(dec_field(&result, "/hours/night"), decimal("3"));
    assert_eq!(dec_field(&result, "/hours/normal"), decimal("1"));
    // 3h * 8.40 = 25.20
    assert_eq!(dec_field(&result, "/premiums/night"), decimal("25.20"));
    assert_eq!(dec_field(&result, "/gross_pay"), decimal("145.20"));
}

#[tokio::test]
async fn test_early_morning_night_minutes() {
    let router = create_router_for_test();
    let result = calculate(&router, shift("2026-01-15", "04:30", "08:00", "", "20")).await;

    assert_eq!(dec_field(&result, "/hours/night"), decimal("1.5"));
    assert_eq!(result["hours_hhmm"]["night"], "1:30");
    assert_eq!(dec_field(&result, "/premiums/night"), decimal("12.60"));
}

// =============================================================================
// Weekend and holidays
// =============================================================================

#[tokio::test]
async fn test_saturday_ten_hours_has_no_overtime_premium() {
    let router = create_router_for_test();
    let result = calculate(&router, shift("2026-01-17", "08:00", "18:00", "", "20")).await;

    assert_eq!(result["day_kind"], "saturday");
    assert_eq!(dec_field(&result, "/hours/saturday"), decimal("10"));
    assert_eq!(dec_field(&result, "/premiums/saturday"), decimal("24.00"));
    assert_eq!(dec_field(&result, "/premiums/overtime"), Decimal::ZERO);
    assert_eq!(dec_field(&result, "/gross_pay"), decimal("224.00"));
}

#[tokio::test]
async fn test_sunday_premium() {
    let router = create_router_for_test();
    let result = calculate(&router, shift("2026-01-18", "10:00", "16:00", "0:30", "28")).await;

    assert_eq!(result["day_name"], "Sunday");
    // 5.5h * 4.80 = 26.40
    assert_eq!(dec_field(&result, "/premiums/sunday"), decimal("26.40"));
    assert_eq!(dec_field(&result, "/base_pay"), decimal("154.00"));
    assert_eq!(dec_field(&result, "/gross_pay"), decimal("180.40"));
}

#[tokio::test]
async fn test_holiday_pays_like_sunday() {
    let router = create_router_for_test();
    // Auffahrt (Thursday) and the following Sunday
    let holiday = calculate(&router, shift("2026-05-14", "07:00", "19:00", "0:45", "27.35")).await;
    let sunday = calculate(&router, shift("2026-05-17", "07:00", "19:00", "0:45", "27.35")).await;

    assert_eq!(holiday["day_kind"], "public_holiday");
    assert_eq!(holiday["day_name"], "Thursday");
    assert_eq!(holiday["premiums"], sunday["premiums"]);
    assert_eq!(holiday["gross_pay"], sunday["gross_pay"]);
}

#[tokio::test]
async fn test_holiday_on_saturday_uses_holiday_rate() {
    let router = create_router_for_test();
    // Bundesfeier 2026 falls on a Saturday
    let result = calculate(&router, shift("2026-08-01", "08:00", "16:00", "", "25")).await;

    assert_eq!(result["day_kind"], "public_holiday");
    assert_eq!(dec_field(&result, "/premiums/saturday"), Decimal::ZERO);
    assert_eq!(dec_field(&result, "/premiums/sunday"), decimal("38.40"));
}

// =============================================================================
// Overtime
// =============================================================================

#[tokio::test]
async fn test_exactly_threshold_has_no_overtime() {
    let router = create_router_for_test();
    let result = calculate(&router, shift("2026-01-12", "07:00", "16:30", "", "24")).await;

    assert_eq!(dec_field(&result, "/hours/overtime"), Decimal::ZERO);
    assert_eq!(result["minutes"]["overtime"], 0);
}

#[tokio::test]
async fn test_one_minute_past_threshold() {
    let router = create_router_for_test();
    let result = calculate(&router, shift("2026-01-12", "07:00", "16:31", "", "24")).await;

    assert_eq!(result["minutes"]["overtime"], 1);
    assert_eq!(result["hours_hhmm"]["overtime"], "0:01");
    // 1/60 h * 24 * 0.25 = 0.10
    assert_eq!(dec_field(&result, "/premiums/overtime"), decimal("0.10"));
}

#[tokio::test]
async fn test_weekday_overtime_pays_quarter_rate() {
    let router = create_router_for_test();
    let result = calculate(&router, shift("2026-01-14", "07:00", "18:00", "0:30", "24")).await;

    assert_eq!(dec_field(&result, "/hours/overtime"), decimal("1"));
    assert_eq!(dec_field(&result, "/premiums/overtime"), decimal("6.00"));
    assert_eq!(dec_field(&result, "/base_pay"), decimal("252.00"));
    assert_eq!(dec_field(&result, "/gross_pay"), decimal("258.00"));
    assert_eq!(result["overtime_suppressed"], false);
}

#[tokio::test]
async fn test_night_minutes_suppress_overtime_premium() {
    let router = create_router_for_test();
    let result = calculate(&router, shift("2026-01-14", "13:00", "00:00", "", "20")).await;

    assert_eq!(result["minutes"]["overtime"], 30);
    assert_eq!(result["minutes"]["night"], 60);
    assert_eq!(dec_field(&result, "/premiums/overtime"), Decimal::ZERO);
    assert_eq!(result["overtime_suppressed"], true);
    assert_eq!(dec_field(&result, "/gross_pay"), decimal("228.40"));
}

#[tokio::test]
async fn test_audit_trace_order() {
    let router = create_router_for_test();
    let result = calculate(&router, shift("2026-01-12", "08:00", "17:00", "1:00", "25")).await;

    let rule_ids: Vec<&str> = result["audit_trace"]
        .as_array()
        .unwrap()
        .iter()
        .map(|step| step["rule_id"].as_str().unwrap())
        .collect();
    assert_eq!(
        rule_ids,
        vec![
            "shift_duration",
            "day_kind",
            "minute_classification",
            "overtime_suppression",
            "pay_calculation"
        ]
    );
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn test_break_longer_than_shift_is_rejected() {
    let router = create_router_for_test();
    let response = send(
        &router,
        "POST",
        "/calculate",
        Some(shift("2026-01-12", "08:00", "09:00", "2:00", "25")),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "NEGATIVE_DURATION");
}

#[tokio::test]
async fn test_negative_rate_is_rejected() {
    let router = create_router_for_test();
    let response = send(
        &router,
        "POST",
        "/calculate",
        Some(shift("2026-01-12", "08:00", "09:00", "", "-1")),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "INVALID_RATE");
}

#[tokio::test]
async fn test_bad_date_is_rejected() {
    let router = create_router_for_test();
    let response = send(
        &router,
        "POST",
        "/calculate",
        Some(shift("12.01.2026", "08:00", "09:00", "", "25")),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.json();
    assert_eq!(error["code"], "INVALID_TIME_FORMAT");
    assert!(error["message"].as_str().unwrap().contains("12.01.2026"));
}

#[tokio::test]
async fn test_missing_rate_without_memory_is_rejected() {
    let router = create_router_for_test();
    let mut body = shift("2026-01-12", "08:00", "09:00", "", "25");
    body.as_object_mut().unwrap().remove("hourly_rate");

    let response = send(&router, "POST", "/calculate", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "RATE_NOT_REMEMBERED");
}

// =============================================================================
// History
// =============================================================================

#[tokio::test]
async fn test_history_lifecycle() {
    let router = create_router_for_test();

    let first = send(
        &router,
        "POST",
        "/history",
        Some(shift("2026-01-12", "08:00", "17:00", "1:00", "25")),
    )
    .await;
    assert_eq!(first.status, StatusCode::CREATED);
    let first_id = first.json()["id"].clone();

    let second = send(
        &router,
        "POST",
        "/history",
        Some(shift("2026-01-17", "08:00", "18:00", "", "20")),
    )
    .await;
    assert_eq!(second.status, StatusCode::CREATED);

    let listed = send(&router, "GET", "/history", None).await;
    assert_eq!(listed.json().as_array().unwrap().len(), 2);

    // Replace the first entry: same id, new result
    let replaced = send(
        &router,
        "PUT",
        "/history/0",
        Some(shift("2026-01-12", "08:00", "13:00", "", "25")),
    )
    .await;
    assert_eq!(replaced.status, StatusCode::OK);
    let replaced = replaced.json();
    assert_eq!(replaced["id"], first_id);
    assert_eq!(dec_field(&replaced, "/breakdown/gross_pay"), decimal("125.00"));

    let fetched = send(&router, "GET", "/history/0", None).await;
    assert_eq!(fetched.json()["breakdown"]["end_time"], "13:00");

    let removed = send(&router, "DELETE", "/history/1", None).await;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.json()["breakdown"]["day_name"], "Saturday");

    let listed = send(&router, "GET", "/history", None).await;
    assert_eq!(listed.json().as_array().unwrap().len(), 1);

    let cleared = send(&router, "DELETE", "/history", None).await;
    assert_eq!(cleared.status, StatusCode::NO_CONTENT);

    let listed = send(&router, "GET", "/history", None).await;
    assert!(listed.json().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_replace_unknown_index_is_not_found() {
    let router = create_router_for_test();
    let response = send(
        &router,
        "PUT",
        "/history/0",
        Some(shift("2026-01-12", "08:00", "13:00", "", "25")),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["code"], "HISTORY_ENTRY_NOT_FOUND");
}

#[tokio::test]
async fn test_remembered_rate_fills_missing_rate() {
    let router = create_router_for_test();

    send(
        &router,
        "POST",
        "/history",
        Some(shift("2026-01-12", "08:00", "17:00", "1:00", "31.50")),
    )
    .await;

    let rate = send(&router, "GET", "/rates/Anna%20Muster", None).await;
    assert_eq!(rate.status, StatusCode::OK);
    assert_eq!(dec_field(&rate.json(), "/hourly_rate"), decimal("31.50"));

    let mut body = shift("2026-01-13", "08:00", "10:00", "", "");
    body.as_object_mut().unwrap().remove("hourly_rate");
    let result = calculate(&router, body).await;
    assert_eq!(dec_field(&result, "/gross_pay"), decimal("63.00"));

    // Clearing keeps the remembered rate
    send(&router, "DELETE", "/history", None).await;
    let rate = send(&router, "GET", "/rates/Anna%20Muster", None).await;
    assert_eq!(rate.status, StatusCode::OK);
}

// =============================================================================
// Export
// =============================================================================

async fn router_with_two_entries() -> Router {
    let router = create_router_for_test();
    send(
        &router,
        "POST",
        "/history",
        Some(shift("2026-01-12", "08:00", "17:00", "1:00", "25")),
    )
    .await;
    send(
        &router,
        "POST",
        "/history",
        Some(shift("2026-01-13", "22:00", "02:00", "", "30")),
    )
    .await;
    router
}

#[tokio::test]
async fn test_export_csv() {
    let router = router_with_two_entries().await;
    let response = send(&router, "GET", "/history/export?format=csv", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type.as_deref().unwrap().starts_with("text/csv"));

    let text = response.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Mission,Worker,Date,Day,Start,End"));
    assert!(lines[1].contains("2026-01-12,Monday,08:00,17:00"));
    assert!(lines[2].ends_with("120.00,145.20"));
}

#[tokio::test]
async fn test_export_xlsx() {
    let router = router_with_two_entries().await;
    let response = send(&router, "GET", "/history/export?format=xlsx", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type.clone().unwrap().contains("spreadsheetml"));

    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(response.body)).unwrap();
    let range = workbook.worksheet_range("Wage history").unwrap();
    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][0], "Mission");
    assert_eq!(rows[1][3], "Monday");
    assert_eq!(rows[2].last().unwrap(), "145.20");
}

#[tokio::test]
async fn test_export_defaults_to_xlsx() {
    let router = router_with_two_entries().await;
    let response = send(&router, "GET", "/history/export", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type.unwrap().contains("spreadsheetml"));
}

#[tokio::test]
async fn test_export_text() {
    let router = router_with_two_entries().await;
    let response = send(&router, "GET", "/history/export?format=text", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let text = response.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].chars().all(|c| c == '-' || c == ' '));
    assert!(lines[3].contains("Tuesday"));
}

#[tokio::test]
async fn test_export_json() {
    let router = router_with_two_entries().await;
    let response = send(&router, "GET", "/history/export?format=json", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref().unwrap(), "application/json");
    let records = response.json();
    assert_eq!(records.as_array().unwrap().len(), 2);
    assert_eq!(dec_field(&records, "/1/premiums/night"), decimal("25.20"));
}

#[tokio::test]
async fn test_export_empty_history_has_header_only() {
    let router = create_router_for_test();
    let response = send(&router, "GET", "/history/export?format=csv", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text().lines().count(), 1);
}
