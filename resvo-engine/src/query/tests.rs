use super::*;
use chrono::Utc;
use uuid::Uuid;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn res(name: &str, phone: &str, date: NaiveDate, time: &str) -> Reservation {
    Reservation {
        id: Uuid::new_v4(),
        date,
        time: time.to_string(),
        service_type: ServiceType::Dinner,
        customer_name: name.to_string(),
        customer_phone: phone.to_string(),
        customer_email: None,
        num_guests: 2,
        table_id: None,
        status: ReservationStatus::Confirmed,
        notes: None,
        special_requests: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_search_matches_any_customer_field() {
    let mut by_email = res("Luca Verdi", "3479998877", d(2024, 6, 1), "20:00");
    by_email.customer_email = Some("luca.verdi@example.com".to_string());
    let reservations = vec![
        res("Mario Rossi", "3331234567", d(2024, 6, 1), "19:30"),
        by_email,
    ];

    // Phone substring
    let filters = ReservationFilters {
        search: Some("333".to_string()),
        ..Default::default()
    };
    let found = filter_and_sort(&reservations, &filters, d(2024, 6, 1));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].customer_name, "Mario Rossi");

    // Case-insensitive name substring
    let filters = ReservationFilters {
        search: Some("mario".to_string()),
        ..Default::default()
    };
    assert_eq!(filter_and_sort(&reservations, &filters, d(2024, 6, 1)).len(), 1);

    // Email substring
    let filters = ReservationFilters {
        search: Some("example.com".to_string()),
        ..Default::default()
    };
    let found = filter_and_sort(&reservations, &filters, d(2024, 6, 1));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].customer_name, "Luca Verdi");
}

#[test]
fn test_filters_are_and_combined() {
    let mut lunch = res("Mario Rossi", "3331234567", d(2024, 6, 1), "13:00");
    lunch.service_type = ServiceType::Lunch;
    let reservations = vec![
        lunch,
        res("Mario Rossi", "3331234567", d(2024, 6, 1), "20:00"),
    ];

    let filters = ReservationFilters {
        search: Some("mario".to_string()),
        service_type: Some(ServiceType::Lunch),
        ..Default::default()
    };
    let found = filter_and_sort(&reservations, &filters, d(2024, 6, 1));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].service_type, ServiceType::Lunch);
}

#[test]
fn test_cancelled_reservations_stay_visible() {
    let mut cancelled = res("Anna Bianchi", "3390000000", d(2024, 6, 1), "20:00");
    cancelled.status = ReservationStatus::Cancelled;
    let reservations = vec![
        res("Mario Rossi", "3331234567", d(2024, 6, 1), "19:30"),
        cancelled,
    ];

    // Browsing shows all statuses unless one is asked for explicitly
    let all = filter_and_sort(&reservations, &ReservationFilters::default(), d(2024, 6, 1));
    assert_eq!(all.len(), 2);

    let filters = ReservationFilters {
        status: Some(ReservationStatus::Cancelled),
        ..Default::default()
    };
    let found = filter_and_sort(&reservations, &filters, d(2024, 6, 1));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].customer_name, "Anna Bianchi");
}

#[test]
fn test_sort_by_date_then_time() {
    let reservations = vec![
        res("C", "3330000003", d(2024, 6, 2), "12:30"),
        res("B", "3330000002", d(2024, 6, 1), "21:00"),
        res("A", "3330000001", d(2024, 6, 1), "19:30"),
    ];

    let sorted = filter_and_sort(&reservations, &ReservationFilters::default(), d(2024, 6, 1));
    let names: Vec<&str> = sorted.iter().map(|r| r.customer_name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_named_ranges_resolve_from_injected_today() {
    // Wednesday June 5th 2024
    let today = d(2024, 6, 5);

    assert_eq!(DateRange::Today.resolve(today), Some((today, today)));
    assert_eq!(
        DateRange::Tomorrow.resolve(today),
        Some((d(2024, 6, 6), d(2024, 6, 6)))
    );
    // Weekend of the current Monday-anchored week, not the next 48 hours
    assert_eq!(
        DateRange::ThisWeekend.resolve(today),
        Some((d(2024, 6, 8), d(2024, 6, 9)))
    );
    assert_eq!(
        DateRange::ThisWeek.resolve(today),
        Some((d(2024, 6, 3), d(2024, 6, 9)))
    );
    assert_eq!(
        DateRange::ThisMonth.resolve(today),
        Some((d(2024, 6, 1), d(2024, 6, 30)))
    );
    assert_eq!(DateRange::All.resolve(today), None);
}

#[test]
fn test_weekend_filter_selects_saturday_and_sunday() {
    let reservations = vec![
        res("Weekday", "3330000001", d(2024, 6, 5), "20:00"),
        res("Saturday", "3330000002", d(2024, 6, 8), "20:00"),
        res("Sunday", "3330000003", d(2024, 6, 9), "13:00"),
        res("NextWeek", "3330000004", d(2024, 6, 15), "20:00"),
    ];

    let filters = ReservationFilters {
        date_range: DateRange::ThisWeekend,
        ..Default::default()
    };
    let found = filter_and_sort(&reservations, &filters, d(2024, 6, 5));
    let names: Vec<&str> = found.iter().map(|r| r.customer_name.as_str()).collect();
    assert_eq!(names, vec!["Saturday", "Sunday"]);
}

#[test]
fn test_date_range_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_string(&DateRange::ThisWeekend).unwrap(),
        "\"this-weekend\""
    );
}
