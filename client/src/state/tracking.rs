//! Track page state: input, pending flag, result, and banner error.

#[cfg(test)]
#[path = "tracking_test.rs"]
mod tracking_test;

use crate::net::tracking::{TrackingError, normalize_code};
use crate::net::types::TrackingRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackState {
    pub input: String,
    pub result: Option<&'static TrackingRecord>,
    pub error: Option<TrackingError>,
    pub loading: bool,
}

impl TrackState {
    /// Validate the input and enter the loading state.
    ///
    /// Returns the trimmed code to look up. Blank input sets the error and
    /// leaves any previous result on screen; a pending lookup makes this a
    /// no-op.
    pub fn begin(&mut self) -> Option<String> {
        if self.loading {
            return None;
        }
        match normalize_code(&self.input) {
            Ok(code) => {
                let code = code.to_owned();
                self.loading = true;
                self.error = None;
                Some(code)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }

    /// Apply a finished lookup. A miss clears the previous result.
    pub fn resolve(&mut self, outcome: Result<&'static TrackingRecord, TrackingError>) {
        match outcome {
            Ok(record) => {
                self.result = Some(record);
                self.error = None;
            }
            Err(err) => {
                self.result = None;
                self.error = Some(err);
            }
        }
        self.loading = false;
    }
}
