//! Mock shipment tracking lookup.
//!
//! There is no tracking backend. Lookups match against two compiled-in
//! records after a fixed delay that stands in for a network round trip.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "tracking_test.rs"]
mod tracking_test;

use thiserror::Error;

use super::types::{TimelineEvent, TrackingRecord, TrackingStatus};

/// Simulated round-trip time of a lookup.
pub const LOOKUP_DELAY_MS: u32 = 1000;

/// Lookup failures. `Display` is the banner text shown to the user.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TrackingError {
    #[error("Please enter a tracking number")]
    MissingNumber,
    #[error("Tracking number not found. Please check and try again.")]
    NotFound,
}

static RECORDS: [TrackingRecord; 2] = [
    TrackingRecord {
        tracking_number: "UAE123456",
        status: TrackingStatus::Delivered,
        sender: "John Doe",
        recipient: "Jane Smith",
        service: "Same Day Delivery",
        estimated_delivery: "2024-01-15 18:00",
        actual_delivery: Some("2024-01-15 17:45"),
        timeline: &[
            TimelineEvent {
                status: TrackingStatus::OrderPlaced,
                time: "2024-01-15 10:00",
                location: "Dubai",
                description: "Package pickup scheduled",
                completed: true,
            },
            TimelineEvent {
                status: TrackingStatus::PickedUp,
                time: "2024-01-15 12:30",
                location: "Dubai - Business Bay",
                description: "Package collected from sender",
                completed: true,
            },
            TimelineEvent {
                status: TrackingStatus::InTransit,
                time: "2024-01-15 14:15",
                location: "Dubai - Distribution Center",
                description: "Package sorted and dispatched",
                completed: true,
            },
            TimelineEvent {
                status: TrackingStatus::OutForDelivery,
                time: "2024-01-15 16:30",
                location: "Dubai - Delivery Vehicle",
                description: "Package out for final delivery",
                completed: true,
            },
            TimelineEvent {
                status: TrackingStatus::Delivered,
                time: "2024-01-15 17:45",
                location: "Dubai - Marina",
                description: "Package delivered successfully",
                completed: true,
            },
        ],
    },
    TrackingRecord {
        tracking_number: "UAE789012",
        status: TrackingStatus::InTransit,
        sender: "ABC Company",
        recipient: "XYZ Store",
        service: "Express Delivery",
        estimated_delivery: "2024-01-16 14:00",
        actual_delivery: None,
        timeline: &[
            TimelineEvent {
                status: TrackingStatus::OrderPlaced,
                time: "2024-01-15 09:00",
                location: "Abu Dhabi",
                description: "Package pickup scheduled",
                completed: true,
            },
            TimelineEvent {
                status: TrackingStatus::PickedUp,
                time: "2024-01-15 11:00",
                location: "Abu Dhabi - Downtown",
                description: "Package collected from sender",
                completed: true,
            },
            TimelineEvent {
                status: TrackingStatus::InTransit,
                time: "2024-01-15 15:30",
                location: "Dubai - Distribution Center",
                description: "Package in transit to destination",
                completed: true,
            },
            TimelineEvent {
                status: TrackingStatus::OutForDelivery,
                time: "Estimated: 2024-01-16 12:00",
                location: "Dubai",
                description: "Package will be out for delivery",
                completed: false,
            },
        ],
    },
];

/// Sample codes advertised on the track page, with a short description.
pub const DEMO_CODES: [(&str, &str); 2] = [("UAE123456", "Delivered package"), ("UAE789012", "Package in transit")];

/// All known records.
#[must_use]
pub fn records() -> &'static [TrackingRecord] {
    &RECORDS
}

/// Trim user input, rejecting blank codes.
///
/// # Errors
///
/// Returns [`TrackingError::MissingNumber`] when nothing but whitespace was entered.
pub fn normalize_code(input: &str) -> Result<&str, TrackingError> {
    let code = input.trim();
    if code.is_empty() { Err(TrackingError::MissingNumber) } else { Ok(code) }
}

/// Exact, case-sensitive match against the fixture table.
///
/// # Errors
///
/// Returns [`TrackingError::NotFound`] when no record has this code.
pub fn find_record(code: &str) -> Result<&'static TrackingRecord, TrackingError> {
    RECORDS
        .iter()
        .find(|record| record.tracking_number == code)
        .ok_or(TrackingError::NotFound)
}

/// Look up `code` after the simulated network delay.
///
/// # Errors
///
/// Returns [`TrackingError::NotFound`] for unknown codes.
pub async fn lookup_tracking(code: String) -> Result<&'static TrackingRecord, TrackingError> {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(LOOKUP_DELAY_MS).await;
    }
    let outcome = find_record(&code);
    log::debug!("tracking lookup {code}: {}", if outcome.is_ok() { "found" } else { "not found" });
    outcome
}
