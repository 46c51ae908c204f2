use std::sync::Arc;

use twilight_http::Client;

use anibot_mal::MalClient;
use anibot_utils::pagination::{DiscordPageSink, SessionManager};

/// Process configuration loaded once at startup.
pub mod config;

pub use config::Config;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub mal: Arc<MalClient>,
    pub sessions: SessionManager,
}

impl Context {
    /// Create a new application context.
    ///
    /// Pagination sessions deliver their pages through the same HTTP client.
    pub fn new(http: Arc<Client>, mal: MalClient) -> Self {
        let sink = Arc::new(DiscordPageSink::new(Arc::clone(&http)));
        Self {
            http,
            mal: Arc::new(mal),
            sessions: SessionManager::new(sink),
        }
    }
}
