//! API integration tests
//!
//! These run against a live server with a migrated database and an
//! `admin` / `admin123` staff account. Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to get a staff token
async fn get_admin_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": "admin123"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

/// Helper to register a fresh customer and get their token
async fn register_and_login(client: &Client, username: &str) -> String {
    client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "username": username,
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to send register request");

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": username,
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_stations_require_staff_for_writes() {
    let client = Client::new();
    let token = register_and_login(&client, "station_writer").await;

    let response = client
        .post(format!("{}/stations", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "PlayStation 5 - TV 9",
            "station_type": "PS5",
            "price": 50000
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_booking_flow_with_overlap_rejection() {
    let client = Client::new();
    let admin_token = get_admin_token(&client).await;
    let user_token = register_and_login(&client, "booking_flow_user").await;

    // Staff sets up a station at 50000/hour
    let response = client
        .post(format!("{}/stations", BASE_URL))
        .header("Authorization", format!("Bearer {}", admin_token))
        .json(&json!({
            "name": "PlayStation 5 - Flow Test",
            "station_type": "PS5",
            "price": 50000
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let station: Value = response.json().await.expect("Failed to parse station");
    let station_id = station["id"].as_i64().expect("No station id");

    // Two hours at 14:00 costs 100000
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", user_token))
        .json(&json!({
            "station_id": station_id,
            "date": "2030-01-15",
            "start_time": "14:00",
            "duration_hours": 2
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let booking: Value = response.json().await.expect("Failed to parse booking");
    assert_eq!(booking["total_price"], 100000);
    assert_eq!(booking["status"], "confirmed");
    let booking_id = booking["id"].as_i64().expect("No booking id");

    // The span occupies 14:00 and 15:00
    let response = client
        .get(format!("{}/stations/{}/slots?date=2030-01-15", BASE_URL, station_id))
        .header("Authorization", format!("Bearer {}", user_token))
        .send()
        .await
        .expect("Failed to send request");
    let slots: Value = response.json().await.expect("Failed to parse slots");
    let free: Vec<&str> = slots["slots"]
        .as_array()
        .expect("No slots array")
        .iter()
        .filter_map(|s| s.as_str())
        .collect();
    assert!(!free.contains(&"14:00"));
    assert!(!free.contains(&"15:00"));
    assert!(free.contains(&"13:00"));
    assert!(free.contains(&"16:00"));

    // An overlapping request is rejected at commit time
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", user_token))
        .json(&json!({
            "station_id": station_id,
            "date": "2030-01-15",
            "start_time": "15:00",
            "duration_hours": 1
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Cancelling frees the span again
    let response = client
        .put(format!("{}/bookings/{}/status", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", admin_token))
        .json(&json!({ "status": "cancelled" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", user_token))
        .json(&json!({
            "station_id": station_id,
            "date": "2030-01-15",
            "start_time": "15:00",
            "duration_hours": 1
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_status_transitions() {
    let client = Client::new();
    let admin_token = get_admin_token(&client).await;
    let user_token = register_and_login(&client, "transition_user").await;

    let response = client
        .post(format!("{}/stations", BASE_URL))
        .header("Authorization", format!("Bearer {}", admin_token))
        .json(&json!({
            "name": "PC Gaming - Transition Test",
            "station_type": "PC Gaming",
            "price": 60000,
            "specs": {
                "kind": "pc_gaming",
                "cpu": "Ryzen 7 5800X",
                "gpu": "RTX 3070",
                "ram": "32GB",
                "storage": "1TB NVMe"
            }
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let station: Value = response.json().await.expect("Failed to parse station");
    let station_id = station["id"].as_i64().expect("No station id");

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", user_token))
        .json(&json!({
            "station_id": station_id,
            "date": "2030-01-16",
            "start_time": "10:00",
            "duration_hours": 1
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let booking: Value = response.json().await.expect("Failed to parse booking");
    let booking_id = booking["id"].as_i64().expect("No booking id");

    // confirmed -> in-progress -> completed
    for target in ["in-progress", "completed"] {
        let response = client
            .put(format!("{}/bookings/{}/status", BASE_URL, booking_id))
            .header("Authorization", format!("Bearer {}", admin_token))
            .json(&json!({ "status": target }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["status"], target);
    }

    // completed is terminal
    let response = client
        .put(format!("{}/bookings/{}/status", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", admin_token))
        .json(&json!({ "status": "in-progress" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_remaining_is_zero_for_past_bookings() {
    let client = Client::new();
    let admin_token = get_admin_token(&client).await;
    let user_token = register_and_login(&client, "countdown_user").await;

    let response = client
        .post(format!("{}/stations", BASE_URL))
        .header("Authorization", format!("Bearer {}", admin_token))
        .json(&json!({
            "name": "VR Station - Countdown Test",
            "station_type": "VR",
            "price": 75000
        }))
        .send()
        .await
        .expect("Failed to send request");
    let station: Value = response.json().await.expect("Failed to parse station");
    let station_id = station["id"].as_i64().expect("No station id");

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", user_token))
        .json(&json!({
            "station_id": station_id,
            "date": "2020-01-15",
            "start_time": "09:00",
            "duration_hours": 1
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let booking: Value = response.json().await.expect("Failed to parse booking");
    let booking_id = booking["id"].as_i64().expect("No booking id");

    let response = client
        .get(format!("{}/bookings/{}/remaining", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", user_token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["finished"], true);
    assert_eq!(body["display"], "finished");
    assert_eq!(body["remaining"]["hours"], 0);
    assert_eq!(body["remaining"]["minutes"], 0);
    assert_eq!(body["remaining"]["seconds"], 0);
}
