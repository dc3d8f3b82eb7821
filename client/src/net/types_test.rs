use super::*;

fn event(status: TrackingStatus, completed: bool) -> TimelineEvent {
    TimelineEvent { status, time: "t", location: "l", description: "d", completed }
}

fn record(status: TrackingStatus, actual: Option<&'static str>) -> TrackingRecord {
    TrackingRecord {
        tracking_number: "X1",
        status,
        sender: "s",
        recipient: "r",
        service: "Express Delivery",
        estimated_delivery: "2024-01-16 14:00",
        actual_delivery: actual,
        timeline: &[],
    }
}

#[test]
fn status_serializes_kebab_case() {
    let json = serde_json::to_string(&TrackingStatus::OutForDelivery).expect("serialize");
    assert_eq!(json, "\"out-for-delivery\"");
}

#[test]
fn badge_colours_follow_status() {
    assert_eq!(TrackingStatus::Delivered.badge_class(), "text-green-600 bg-green-100");
    assert_eq!(TrackingStatus::InTransit.badge_class(), "text-yellow-600 bg-yellow-100");
    assert_eq!(TrackingStatus::PickedUp.badge_class(), "text-blue-600 bg-blue-100");
    assert_eq!(TrackingStatus::OrderPlaced.badge_class(), "text-gray-600 bg-gray-100");
}

#[test]
fn completed_steps_always_show_check() {
    for status in [TrackingStatus::OrderPlaced, TrackingStatus::InTransit, TrackingStatus::OutForDelivery] {
        assert_eq!(event(status, true).icon(), (StepIcon::Check, "text-green-500"));
    }
}

#[test]
fn pending_steps_use_status_icon() {
    assert_eq!(event(TrackingStatus::OrderPlaced, false).icon(), (StepIcon::Package, "text-gray-400"));
    assert_eq!(event(TrackingStatus::PickedUp, false).icon(), (StepIcon::Package, "text-blue-500"));
    assert_eq!(event(TrackingStatus::InTransit, false).icon(), (StepIcon::Truck, "text-yellow-500"));
    assert_eq!(event(TrackingStatus::OutForDelivery, false).icon(), (StepIcon::Truck, "text-orange-500"));
}

#[test]
fn delivery_summary_prefers_actual_time() {
    let delivered = record(TrackingStatus::Delivered, Some("2024-01-15 17:45"));
    assert_eq!(delivered.delivery_summary(), ("Delivered: ", "2024-01-15 17:45"));
    let moving = record(TrackingStatus::InTransit, None);
    assert_eq!(moving.delivery_summary(), ("Est. Delivery: ", "2024-01-16 14:00"));
}
