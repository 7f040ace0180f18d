//! Reachability probe for the application under test
//!
//! The address book runs out of process and is never started by the suite.
//! It is probed once, before any browser session is opened.

use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::error::{E2eError, E2eResult};

/// Delay between probe attempts
const PROBE_INTERVAL: Duration = Duration::from_millis(250);

/// Poll `url` until the server answers with any HTTP status.
///
/// Returns the number of attempts it took.
pub async fn wait_until_reachable(url: &str, timeout: Duration) -> E2eResult<usize> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()?;

    let start = Instant::now();
    let mut attempts = 0;

    loop {
        attempts += 1;

        match client.get(url).send().await {
            Ok(resp) => {
                if !resp.status().is_success() {
                    warn!("{} answered {}", url, resp.status());
                }
                info!("Application reachable at {}", url);
                return Ok(attempts);
            }
            Err(e) => {
                if attempts == 1 {
                    info!("Waiting for application at {}...", url);
                }
                // Connection refused is expected while the server is starting
                if !e.is_connect() {
                    warn!("Probe error: {}", e);
                }
            }
        }

        if start.elapsed() + PROBE_INTERVAL > timeout {
            break;
        }
        sleep(PROBE_INTERVAL).await;
    }

    Err(E2eError::AppUnreachable {
        url: url.to_string(),
        attempts,
    })
}
