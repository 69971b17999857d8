use tokio::process::Command;
use tracing::{error, info};

/// Runs the external backup executable to completion and classifies its
/// exit status. The workflow never branches on the outcome: success and
/// failure are both only logged, and the caller proceeds either way.
pub async fn run_backup(backup_command: &str) {
    info!("Starting backup process...");

    let output = match Command::new(backup_command).output().await {
        Ok(output) => output,
        Err(e) => {
            error!("Backup failed to start ({}): {}", backup_command, e);
            return;
        }
    };

    if output.status.success() {
        info!("Backup completed successfully.");
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        error!("Backup failed: {}", stderr.trim());
    }
}
