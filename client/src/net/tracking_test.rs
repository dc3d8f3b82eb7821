use super::*;

#[test]
fn delivered_record_has_five_completed_steps() {
    let record = find_record("UAE123456").expect("known code");
    assert_eq!(record.status, TrackingStatus::Delivered);
    assert_eq!(record.timeline.len(), 5);
    assert!(record.timeline.iter().all(|event| event.completed));
    assert_eq!(record.timeline[4].location, "Dubai - Marina");
}

#[test]
fn in_transit_record_has_pending_last_step() {
    let record = find_record("UAE789012").expect("known code");
    assert_eq!(record.status, TrackingStatus::InTransit);
    assert_eq!(record.timeline.len(), 4);
    assert_eq!(record.completed_steps(), 3);
    assert!(!record.timeline[3].completed);
    assert_eq!(record.actual_delivery, None);
}

#[test]
fn lookup_is_exact_match() {
    assert_eq!(find_record("DOES-NOT-EXIST"), Err(TrackingError::NotFound));
    assert_eq!(find_record("uae123456"), Err(TrackingError::NotFound));
    assert_eq!(find_record(" UAE123456"), Err(TrackingError::NotFound));
}

#[test]
fn normalize_rejects_blank_input() {
    assert_eq!(normalize_code(""), Err(TrackingError::MissingNumber));
    assert_eq!(normalize_code("   \t"), Err(TrackingError::MissingNumber));
    assert_eq!(normalize_code("  UAE789012 "), Ok("UAE789012"));
}

#[test]
fn error_text_is_user_facing() {
    assert_eq!(TrackingError::MissingNumber.to_string(), "Please enter a tracking number");
    assert_eq!(
        TrackingError::NotFound.to_string(),
        "Tracking number not found. Please check and try again."
    );
}

#[test]
fn demo_codes_resolve() {
    for (code, _) in DEMO_CODES {
        assert!(find_record(code).is_ok(), "{code}");
    }
    assert_eq!(records().len(), DEMO_CODES.len());
}

#[test]
fn tracking_numbers_are_unique() {
    let mut codes: Vec<_> = records().iter().map(|r| r.tracking_number).collect();
    codes.dedup();
    assert_eq!(codes.len(), records().len());
}
