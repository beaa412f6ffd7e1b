use super::*;
use chrono::Utc;
use shared::ReservationStatus;
use uuid::Uuid;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn res(
    date: NaiveDate,
    service: ServiceType,
    guests: u32,
    status: ReservationStatus,
) -> Reservation {
    Reservation {
        id: Uuid::new_v4(),
        date,
        time: "20:00".to_string(),
        service_type: service,
        customer_name: "Mario Rossi".to_string(),
        customer_phone: "3331234567".to_string(),
        customer_email: None,
        num_guests: guests,
        table_id: None,
        status,
        notes: None,
        special_requests: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn thresholds() -> CapacityThresholds {
    CapacityThresholds::default()
}

#[test]
fn test_percentage_and_available() {
    let status = capacity_status(20, 100, &thresholds());
    assert_eq!(status.percentage, 20);
    assert_eq!(status.available, 80);
    assert_eq!(status.total, 100);
    assert_eq!(status.color, CapacityColor::Green);
}

#[test]
fn test_zero_ceiling_reports_zero_percent() {
    let status = capacity_status(0, 0, &thresholds());
    assert_eq!(status.percentage, 0);
    assert_eq!(status.available, 0);

    // Guests against an unset ceiling still must not divide by zero
    let status = capacity_status(35, 0, &thresholds());
    assert_eq!(status.percentage, 0);
    assert_eq!(status.color, CapacityColor::Green);
}

#[test]
fn test_overbooking_clamps_available_not_percentage() {
    let status = capacity_status(120, 100, &thresholds());
    assert_eq!(status.available, 0);
    assert_eq!(status.percentage, 120);
    assert_eq!(status.color, CapacityColor::Red);
}

#[test]
fn test_threshold_boundaries_belong_to_higher_tier() {
    assert_eq!(capacity_status(69, 100, &thresholds()).color, CapacityColor::Green);
    assert_eq!(capacity_status(70, 100, &thresholds()).color, CapacityColor::Yellow);
    assert_eq!(capacity_status(89, 100, &thresholds()).color, CapacityColor::Yellow);
    assert_eq!(capacity_status(90, 100, &thresholds()).color, CapacityColor::Red);
}

#[test]
fn test_percentage_rounds_to_nearest() {
    // 1/3 of 30 seats -> 33.33% -> 33
    assert_eq!(capacity_status(10, 30, &thresholds()).percentage, 33);
    // 2/3 of 30 seats -> 66.67% -> 67
    assert_eq!(capacity_status(20, 30, &thresholds()).percentage, 67);
}

#[test]
fn test_custom_thresholds() {
    let tight = CapacityThresholds { yellow: 50, red: 75 };
    assert_eq!(capacity_status(50, 100, &tight).color, CapacityColor::Yellow);
    assert_eq!(capacity_status(75, 100, &tight).color, CapacityColor::Red);
}

#[test]
fn test_day_service_prefilter() {
    let day = d(2024, 6, 1);
    let all = vec![
        res(day, ServiceType::Dinner, 4, ReservationStatus::Confirmed),
        res(day, ServiceType::Dinner, 6, ReservationStatus::Completed),
        res(day, ServiceType::Lunch, 8, ReservationStatus::Confirmed),
        res(day, ServiceType::Dinner, 50, ReservationStatus::Cancelled),
        res(d(2024, 6, 2), ServiceType::Dinner, 10, ReservationStatus::Confirmed),
    ];

    let selected = reservations_for_day_service(&all, day, ServiceType::Dinner);
    // Different day, different service and the cancelled one are all out
    assert_eq!(selected.len(), 2);
    assert_eq!(selected.iter().map(|r| r.num_guests).sum::<u32>(), 10);
}

#[test]
fn test_compute_capacity_over_selected_set() {
    let day = d(2024, 6, 1);
    let all = vec![
        res(day, ServiceType::Dinner, 4, ReservationStatus::Confirmed),
        res(day, ServiceType::Dinner, 6, ReservationStatus::Confirmed),
        res(day, ServiceType::Dinner, 10, ReservationStatus::Confirmed),
        res(day, ServiceType::Dinner, 50, ReservationStatus::Cancelled),
    ];

    let selected = reservations_for_day_service(&all, day, ServiceType::Dinner);
    let status = compute_capacity(&selected, 100, &thresholds());
    assert_eq!(status.percentage, 20);
    assert_eq!(status.available, 80);
    assert_eq!(status.color, CapacityColor::Green);
}

#[test]
fn test_status_serializes_for_charts() {
    let status = capacity_status(90, 100, &thresholds());
    let json = serde_json::to_value(status).unwrap();
    assert_eq!(json["color"], "red");
    assert_eq!(json["percentage"], 90);
}
