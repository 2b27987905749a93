use crate::articles;
use crate::books;
use crate::core::domain::Configuration;
use crate::core::platform::ClientStore;
use crate::share::domain::service::ShareServiceImpl;
use crate::share::domain::ShareService;

pub(crate) async fn create_share_service(config: &Configuration, store: ClientStore,
                                         http: &reqwest::Client) -> Box<dyn ShareService> {
    let lookup_client = books::factory::create_lookup_client(config, store, http).await;
    let submission_client = articles::factory::create_submission_client(config, store, http).await;
    Box::new(ShareServiceImpl::new(config, lookup_client, submission_client))
}
