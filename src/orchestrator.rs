use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::backup;
use crate::clock::Clock;
use crate::config::Config;
use crate::constants::{pacing, paging};
use crate::countdown;
use crate::panel::{Daemon, Instance, PanelClient};

/// Drives every known instance through a full warn, save, stop, backup,
/// start cycle, once per invocation. Strictly sequential: instances and
/// daemons are processed one at a time, in the order the panel returns them.
pub struct NightlyRunner<C: Clock> {
    config: Arc<Config>,
    client: PanelClient,
    clock: C,
}

impl<C: Clock> NightlyRunner<C> {
    pub fn new(config: Arc<Config>, client: PanelClient, clock: C) -> Self {
        Self {
            config,
            client,
            clock,
        }
    }

    /// One full pass over the fleet. Every collaborator failure is soft: an
    /// absent daemon list ends the run, an absent instance list skips that
    /// daemon, and anything else is logged and stepped over.
    pub async fn run(&self) {
        let run_id = Uuid::new_v4();
        info!("Nightly maintenance run {} starting", run_id);

        let daemons = match self.client.list_daemons().await {
            Ok(daemons) => daemons,
            Err(e) => {
                error!("Failed to retrieve daemon data: {}. Exiting.", e);
                return;
            }
        };

        for daemon in &daemons {
            self.process_daemon(daemon).await;
        }

        info!("Nightly maintenance run {} finished", run_id);
    }

    async fn process_daemon(&self, daemon: &Daemon) {
        let instances = match self
            .client
            .list_instances(
                &daemon.uuid,
                paging::INSTANCE_PAGE,
                paging::INSTANCE_PAGE_SIZE,
                &daemon.remarks,
                "",
            )
            .await
        {
            Ok(instances) => instances,
            Err(e) => {
                warn!(
                    "No instances found for daemon {}: {}. Skipping.",
                    daemon.remarks, e
                );
                return;
            }
        };

        for instance in &instances {
            self.process_instance(daemon, instance).await;
        }
    }

    async fn process_instance(&self, daemon: &Daemon, instance: &Instance) {
        let instance_id = &instance.instance_uuid;
        info!(
            "Starting backup cycle for instance {} on daemon {}",
            instance_id, daemon.remarks
        );

        countdown::announce_shutdown(&self.client, &self.clock, &daemon.uuid, instance_id).await;

        if let Err(e) = self
            .client
            .send_command(&daemon.uuid, instance_id, "save-all")
            .await
        {
            warn!("Save command failed for instance {}: {}", instance_id, e);
        }
        self.clock.sleep(pacing::SAVE_GRACE).await;

        if let Err(e) = self.client.stop_instance(&daemon.uuid, instance_id).await {
            warn!("Stop failed for instance {}: {}", instance_id, e);
        }
        self.clock.sleep(pacing::STOP_GRACE).await;

        backup::run_backup(&self.config.backup_command).await;

        if let Err(e) = self.client.start_instance(&daemon.uuid, instance_id).await {
            warn!("Start failed for instance {}: {}", instance_id, e);
        }

        info!("Backup cycle finished for instance {}", instance_id);
    }
}
