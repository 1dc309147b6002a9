use std::sync::Arc;

use tracing::{error, info};

use crate::backend::{BackendConfig, BackendError, HttpBackend, OrderingBackend};
use crate::session::{SessionActor, SessionClient};

/// The runtime orchestrator for the storefront client.
///
/// `Storefront` is responsible for:
/// - **Lifecycle Management**: starting and stopping the session actor
/// - **Dependency Wiring**: building the backend gateway and injecting it
///   into the actor's run loop
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::connect(BackendConfig::from_env())?;
/// let snapshot = storefront.session.load().await?;
///
/// // ... drive the session ...
///
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    /// Client for driving the ordering session.
    pub session: SessionClient,

    /// Task handle for the running session actor (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl Storefront {
    const CHANNEL_BUFFER: usize = 32;

    /// Connects to the configured backend over HTTP and starts the session.
    pub fn connect(config: BackendConfig) -> Result<Self, BackendError> {
        info!(base_url = %config.base_url, "Connecting storefront");
        let backend = HttpBackend::new(config)?;
        Ok(Self::with_backend(Arc::new(backend)))
    }

    /// Starts the session against any backend implementation. Tests pass a
    /// [`MockBackend`](crate::backend::MockBackend) here.
    pub fn with_backend(backend: Arc<dyn OrderingBackend>) -> Self {
        let (actor, session) = SessionActor::new(Self::CHANNEL_BUFFER);
        let handle = tokio::spawn(actor.run(backend));
        Self { session, handle }
    }

    /// Gracefully shuts down the session.
    ///
    /// Dropping the client closes the actor's channel; the actor drains its
    /// loop and exits. Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");
        drop(self.session);

        if let Err(e) = self.handle.await {
            error!("Session task failed: {:?}", e);
            return Err(format!("Session task failed: {:?}", e));
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
