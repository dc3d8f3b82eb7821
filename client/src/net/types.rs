//! Tracking record types shared by the lookup and the track page.
//!
//! DESIGN
//! ======
//! Records are compiled-in fixtures, so every text field is `&'static str`
//! and timelines are static slices. The types still serialize with the
//! kebab-case status names used in URLs and logs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;

/// Shipment status as shown on the badge and the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackingStatus {
    OrderPlaced,
    PickedUp,
    InTransit,
    OutForDelivery,
    Delivered,
}

impl TrackingStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TrackingStatus::OrderPlaced => "Order Placed",
            TrackingStatus::PickedUp => "Picked Up",
            TrackingStatus::InTransit => "In Transit",
            TrackingStatus::OutForDelivery => "Out for Delivery",
            TrackingStatus::Delivered => "Delivered",
        }
    }

    /// Colour classes for the status badge.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            TrackingStatus::Delivered => "text-green-600 bg-green-100",
            TrackingStatus::InTransit => "text-yellow-600 bg-yellow-100",
            TrackingStatus::PickedUp => "text-blue-600 bg-blue-100",
            TrackingStatus::OrderPlaced | TrackingStatus::OutForDelivery => "text-gray-600 bg-gray-100",
        }
    }
}

/// Icon shape for a timeline step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepIcon {
    Check,
    Package,
    Truck,
}

/// One step of a shipment's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    pub status: TrackingStatus,
    /// Timestamp, or an estimate for pending steps.
    pub time: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub completed: bool,
}

impl TimelineEvent {
    /// Icon and colour class. Completed steps always show a green check.
    #[must_use]
    pub fn icon(&self) -> (StepIcon, &'static str) {
        if self.completed {
            return (StepIcon::Check, "text-green-500");
        }
        match self.status {
            TrackingStatus::OrderPlaced => (StepIcon::Package, "text-gray-400"),
            TrackingStatus::PickedUp => (StepIcon::Package, "text-blue-500"),
            TrackingStatus::InTransit => (StepIcon::Truck, "text-yellow-500"),
            TrackingStatus::OutForDelivery => (StepIcon::Truck, "text-orange-500"),
            TrackingStatus::Delivered => (StepIcon::Check, "text-green-500"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TrackingRecord {
    pub tracking_number: &'static str,
    pub status: TrackingStatus,
    pub sender: &'static str,
    pub recipient: &'static str,
    pub service: &'static str,
    pub estimated_delivery: &'static str,
    pub actual_delivery: Option<&'static str>,
    pub timeline: &'static [TimelineEvent],
}

impl TrackingRecord {
    /// `("Delivered: ", time)` or `("Est. Delivery: ", time)`, preferring the
    /// actual delivery time when one is recorded.
    #[must_use]
    pub fn delivery_summary(&self) -> (&'static str, &'static str) {
        let label = if self.status == TrackingStatus::Delivered { "Delivered: " } else { "Est. Delivery: " };
        (label, self.actual_delivery.unwrap_or(self.estimated_delivery))
    }

    #[must_use]
    pub fn completed_steps(&self) -> usize {
        self.timeline.iter().filter(|event| event.completed).count()
    }
}
