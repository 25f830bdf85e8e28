// Time types used by the lock table.
//
// Lock expiries are compared against a timestamp injected through the
// RuntimeContext, never read ambiently inside an operation. The helper
// below uses SystemTime::now() and is only meant for callers that live
// on wall-clock time; tests inject their own timestamps.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// Seconds timestamps used to determine it using its type
pub type TimestampSeconds = u64;

#[inline]
pub fn get_current_time() -> Duration {
    let start = SystemTime::now();

    start
        .duration_since(UNIX_EPOCH)
        .expect("Incorrect time returned from get_current_time")
}

// Return timestamp in seconds
pub fn get_current_time_in_seconds() -> TimestampSeconds {
    get_current_time().as_secs()
}
