//! Data service client using the OnceCell pattern.

use store::{Repository, RestStore};
use tokio::sync::OnceCell;

use crate::config::AppConfig;

pub type Repo = Repository<RestStore>;

static REPOSITORY: OnceCell<Repo> = OnceCell::const_new();

/// Get or initialize the shared repository.
/// Uses DATA_API_URL and DATA_API_KEY from the environment.
pub async fn get_repository() -> &'static Repo {
    REPOSITORY
        .get_or_init(|| async {
            let config = AppConfig::from_env();
            tracing::info!(url = %config.data_api_url, "connecting to data service");
            Repository::new(RestStore::new(config.data_api_url, config.data_api_key))
        })
        .await
}
