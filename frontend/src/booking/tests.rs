use super::*;
use roomstay_shared::Role;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn fields(check_in: &str, check_out: &str, guests: u32, rooms: u32) -> BookingFields {
    BookingFields {
        check_in: parse_input_date(check_in),
        check_out: parse_input_date(check_out),
        guests,
        rooms,
        special_requests: String::new(),
    }
}

fn user(username: &str) -> User {
    User {
        id: 7,
        username: username.to_string(),
        email: "jane@example.com".to_string(),
        first_name: None,
        last_name: None,
        phone_number: None,
        role: Role::User,
    }
}

// =========================================================
// 价格推算
// =========================================================

#[test]
fn total_price_is_nights_times_price_times_rooms() {
    // 2024-06-01 → 2024-06-04, 单价 50000, 2 间 → 300000
    let f = fields("2024-06-01", "2024-06-04", 2, 2);
    assert_eq!(total_price(&f, 50000.0), 300000.0);

    let f = fields("2024-06-01", "2024-06-02", 1, 1);
    assert_eq!(total_price(&f, 75.5), 75.5);
}

#[test]
fn total_price_is_zero_for_missing_or_inverted_dates() {
    let f = fields("", "2024-06-04", 2, 2);
    assert_eq!(total_price(&f, 50000.0), 0.0);

    let f = fields("2024-06-04", "2024-06-01", 2, 2);
    assert_eq!(total_price(&f, 50000.0), 0.0);

    // 同日往返同样显示 0
    let f = fields("2024-06-01", "2024-06-01", 2, 2);
    assert_eq!(total_price(&f, 50000.0), 0.0);
}

// =========================================================
// 校验
// =========================================================

#[test]
fn valid_booking_passes_validation() {
    let f = fields("2024-06-01", "2024-06-04", 2, 2);
    assert!(validate(&f, 4).is_empty());
}

#[test]
fn checkout_must_be_strictly_after_checkin() {
    let f = fields("2024-06-04", "2024-06-01", 1, 1);
    assert!(validate(&f, 2).check_out.is_some());

    let f = fields("2024-06-01", "2024-06-01", 1, 1);
    assert!(validate(&f, 2).check_out.is_some());
}

#[test]
fn missing_dates_are_flagged() {
    let f = fields("", "", 1, 1);
    let errors = validate(&f, 2);
    assert!(errors.check_in.is_some());

    let f = fields("2024-06-01", "", 1, 1);
    let errors = validate(&f, 2);
    assert!(errors.check_in.is_none());
    assert!(errors.check_out.is_some());
}

#[test]
fn guest_count_bounded_by_capacity() {
    let f = fields("2024-06-01", "2024-06-04", 0, 1);
    assert!(validate(&f, 2).guests.is_some());

    let f = fields("2024-06-01", "2024-06-04", 3, 1);
    assert!(validate(&f, 2).guests.is_some());

    let f = fields("2024-06-01", "2024-06-04", 2, 1);
    assert!(validate(&f, 2).guests.is_none());
}

#[test]
fn room_count_bounded_by_fixed_upper_limit() {
    let f = fields("2024-06-01", "2024-06-04", 1, 0);
    assert!(validate(&f, 2).rooms.is_some());

    let f = fields("2024-06-01", "2024-06-04", 1, MAX_ROOMS_PER_BOOKING + 1);
    assert!(validate(&f, 2).rooms.is_some());

    let f = fields("2024-06-01", "2024-06-04", 1, MAX_ROOMS_PER_BOOKING);
    assert!(validate(&f, 2).rooms.is_none());
}

// =========================================================
// 首次建档的默认值推导
// =========================================================

#[test]
fn guest_defaults_derive_from_profile_names() {
    let mut u = user("jane.doe");
    u.first_name = Some("Jane".into());
    u.last_name = Some("Doe".into());
    let req = guest_request_for(&u);
    assert_eq!(req.first_name, "Jane");
    assert_eq!(req.last_name, "Doe");
    assert_eq!(req.user_id, Some(7));
}

#[test]
fn guest_defaults_fall_back_to_username_split() {
    let req = guest_request_for(&user("jane.doe"));
    assert_eq!(req.first_name, "jane");
    assert_eq!(req.last_name, "doe");
}

#[test]
fn guest_defaults_bottom_out_on_placeholders() {
    // 用户名没有 `.` 分段，姓氏退到占位值
    let req = guest_request_for(&user("admin"));
    assert_eq!(req.first_name, "admin");
    assert_eq!(req.last_name, "User");
    assert_eq!(req.phone_number, PLACEHOLDER_PHONE);
    assert_eq!(req.address.as_deref(), Some(PLACEHOLDER_ADDRESS));
}

#[test]
fn guest_defaults_prefer_registered_phone() {
    let mut u = user("jane.doe");
    u.phone_number = Some("+33-600-0000".into());
    let req = guest_request_for(&u);
    assert_eq!(req.phone_number, "+33-600-0000");
}

// =========================================================
// 请求构造
// =========================================================

#[test]
fn reservation_request_carries_all_fields() {
    let mut f = fields("2024-06-01", "2024-06-04", 2, 2);
    f.special_requests = "  late check-in  ".to_string();
    let req = to_reservation_request(&f, 11, 22).unwrap();
    assert_eq!(req.guest_id, 11);
    assert_eq!(req.room_id, 22);
    assert_eq!(req.check_in_date, d("2024-06-01"));
    assert_eq!(req.check_out_date, d("2024-06-04"));
    assert_eq!(req.number_of_guests, 2);
    assert_eq!(req.number_of_rooms, 2);
    assert_eq!(req.special_requests.as_deref(), Some("late check-in"));
}

#[test]
fn reservation_request_requires_both_dates() {
    let f = fields("2024-06-01", "", 2, 2);
    assert!(to_reservation_request(&f, 11, 22).is_none());

    let mut f = fields("2024-06-01", "2024-06-04", 2, 2);
    f.special_requests = "   ".to_string();
    let req = to_reservation_request(&f, 11, 22).unwrap();
    assert!(req.special_requests.is_none());
}
