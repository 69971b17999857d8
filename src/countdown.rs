use std::time::Duration;

use tracing::{info, warn};

use crate::clock::Clock;
use crate::panel::PanelClient;

/// Pre-shutdown broadcast schedule: message plus the delay in seconds to
/// wait after sending it. The final step flows straight into the shutdown.
pub const SHUTDOWN_WARNINGS: [(&str, u64); 4] = [
    (
        "say Server powering off in 10 minutes for nightly backup...",
        300,
    ),
    (
        "say Server powering off in 5 minutes for nightly backup...",
        240,
    ),
    (
        "say Server powering off in 1 minute for nightly backup...",
        60,
    ),
    (
        "say Server powering off for nightly backup...server will power on again shortly.",
        0,
    ),
];

/// Walks the full warning schedule for one instance. A failed broadcast is
/// logged and the remaining warnings still go out on schedule.
pub async fn announce_shutdown<C: Clock>(
    client: &PanelClient,
    clock: &C,
    daemon_id: &str,
    instance_id: &str,
) {
    for (message, delay_seconds) in SHUTDOWN_WARNINGS {
        if let Err(e) = client.send_command(daemon_id, instance_id, message).await {
            warn!("Countdown warning failed for instance {}: {}", instance_id, e);
        }

        info!("Waiting {} seconds before next warning...", delay_seconds);
        clock.sleep(Duration::from_secs(delay_seconds)).await;
    }
}
