//! Collision-resistant street addresses for the add flow
//!
//! Entries are never deleted from the application under test, so every run
//! submits a fresh value: the base street, a random nonce and the wall-clock
//! time, joined with underscores.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Street every generated address starts with.
pub const BASE_STREET: &str = "285 Edgewater Ln";

/// Inclusive upper bound of the random nonce.
pub const MAX_NONCE: u32 = 99_999;

/// Generate a unique street address from [`BASE_STREET`].
pub fn unique_street_address() -> String {
    let nonce = rand::thread_rng().gen_range(1..=MAX_NONCE);
    compose(BASE_STREET, nonce, Utc::now())
}

/// Join base, nonce and timestamp, e.g. `285 Edgewater Ln_4821_1700000000.123456`.
pub fn compose(base: &str, nonce: u32, at: DateTime<Utc>) -> String {
    format!("{}_{}_{}", base, nonce, unix_seconds(at))
}

/// Unix time in seconds with microsecond precision, trailing zeros trimmed.
fn unix_seconds(at: DateTime<Utc>) -> String {
    let secs = at.timestamp();
    let micros = at.timestamp_subsec_micros();
    let frac = format!("{micros:06}");
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        format!("{secs}.0")
    } else {
        format!("{secs}.{frac}")
    }
}
