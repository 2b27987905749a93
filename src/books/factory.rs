use crate::books::lookup::BookLookupClient;
use crate::books::lookup::http_lookup_client::HttpBookLookupClient;
use crate::books::lookup::local_lookup_client::LocalBookLookupClient;
use crate::core::domain::Configuration;
use crate::core::platform::ClientStore;

pub(crate) async fn create_lookup_client(config: &Configuration, store: ClientStore,
                                         http: &reqwest::Client) -> Box<dyn BookLookupClient> {
    match store {
        ClientStore::Http => {
            Box::new(HttpBookLookupClient::new(http.clone(), config.catalog_url.as_str()))
        }
        ClientStore::Local => {
            Box::new(LocalBookLookupClient::seeded())
        }
    }
}
