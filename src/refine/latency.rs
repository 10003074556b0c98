//! Async refinement boundary with simulated service latency.
//!
//! The wait is the only suspend point. Dropping the future before it
//! resolves discards the result; there is nothing to clean up.

use std::time::Duration;

use rand::Rng;
use tracing::trace;

use super::{Platform, RefinementResult, Refiner};
use crate::config::LatencyConfig;

/// Pick a delay in `base..=base + jitter`.
#[must_use]
pub fn sample_delay(config: &LatencyConfig) -> Duration {
    if !config.enabled {
        return Duration::ZERO;
    }
    let jitter_ms = u64::try_from(config.jitter.as_millis()).unwrap_or(u64::MAX);
    let extra = if jitter_ms == 0 {
        0
    } else {
        rand::rng().random_range(0..=jitter_ms)
    };
    config.base.saturating_add(Duration::from_millis(extra))
}

/// Wait out the simulated latency, then refine.
pub async fn refine_with_latency(
    refiner: Refiner,
    content: &str,
    instruction: &str,
    platform: Platform,
    config: &LatencyConfig,
) -> RefinementResult {
    let delay = sample_delay(config);
    if !delay.is_zero() {
        trace!(delay_ms = delay.as_millis(), "simulating refinement latency");
        tokio::time::sleep(delay).await;
    }
    refiner.refine(content, instruction, platform)
}
