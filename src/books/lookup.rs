pub mod http_lookup_client;
pub mod local_lookup_client;

use async_trait::async_trait;
use crate::books::domain::model::BookRecord;
use crate::core::platform::PlatformResult;

// Port onto the external bibliographic catalog. NotFound and transport
// failures are distinct here; the orchestrator collapses them into one
// caller-visible outcome.
#[async_trait]
pub(crate) trait BookLookupClient: Sync + Send {
    async fn find_by_isbn(&self, isbn: &str) -> PlatformResult<BookRecord>;
}
