use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::actors::GymService;
use crate::app_system::GymConfig;
use crate::clients::GymClient;
use crate::clock::{Clock, SystemClock};
use crate::error::{GymError, GymResult};
use crate::store::{load_or_seed, AppStore, JsonFileStore};

/// Starts the gym service, hands out its client, and joins it on shutdown.
pub struct GymSystem {
    pub client: GymClient,
    handle: JoinHandle<()>,
}

impl GymSystem {
    /// Starts against the JSON file store in `config.data_dir` and the system clock.
    pub fn new(config: &GymConfig) -> GymResult<Self> {
        let store = JsonFileStore::new(config.data_dir.clone());
        Self::start(Box::new(store), Arc::new(SystemClock), config)
    }

    /// Loads the stored snapshot (or seeds a fresh one) and spawns the service.
    pub fn start(store: Box<dyn AppStore>, clock: Arc<dyn Clock>, config: &GymConfig) -> GymResult<Self> {
        let data = load_or_seed(store.as_ref(), &config.storage_key)?;

        let (service, client) = GymService::new(config.channel_buffer, data, store, config.storage_key.clone(), clock);
        let handle = tokio::spawn(service.run());

        info!(key = %config.storage_key, "Gym system started");
        Ok(Self { client, handle })
    }

    pub async fn shutdown(self) -> GymResult<()> {
        info!("Shutting down system...");

        self.client.shutdown().await?;

        if let Err(e) = self.handle.await {
            error!("Service task failed: {:?}", e);
            return Err(GymError::ActorCommunication(format!("Service task failed: {:?}", e)));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
