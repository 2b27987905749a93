use async_trait::async_trait;
use serde::Deserialize;
use crate::books::domain::model::BookRecord;
use crate::books::lookup::BookLookupClient;
use crate::core::platform::{PlatformError, PlatformResult};

// Queries a Douban style catalog API: GET {base}/v2/book/isbn/{isbn}
#[derive(Debug)]
pub struct HttpBookLookupClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBookLookupClient {
    pub(crate) fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl BookLookupClient for HttpBookLookupClient {
    async fn find_by_isbn(&self, isbn: &str) -> PlatformResult<BookRecord> {
        let url = format!("{}/v2/book/isbn/{}", self.base_url, isbn);
        let response = self.client
            .get(url.as_str())
            .send()
            .await
            .map_err(|err| PlatformError::lookup(
                format!("catalog request failed {:?}", err).as_str(),
                None, err.is_timeout() || err.is_connect()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PlatformError::not_found(
                format!("no catalog record for isbn {}", isbn).as_str()));
        }
        if !status.is_success() {
            return Err(PlatformError::lookup(
                format!("catalog returned {} for isbn {}", status, isbn).as_str(),
                Some(status.as_u16().to_string()), status.is_server_error()));
        }

        let catalog_book = response
            .json::<CatalogBook>()
            .await
            .map_err(|err| PlatformError::lookup(
                format!("catalog response parsing failed {:?}", err).as_str(), None, false))?;
        Ok(BookRecord::from(&catalog_book))
    }
}

// Wire shape of the catalog response; every field is optional on the wire and
// defaults to blank/empty in the record.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CatalogBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub origin_title: String,
    #[serde(default)]
    pub series: Option<CatalogSeries>,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub pubdate: String,
    #[serde(default)]
    pub pages: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub binding: String,
    #[serde(default)]
    pub isbn13: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub catalog: String,
    #[serde(default)]
    pub author: Vec<String>,
    #[serde(default)]
    pub translator: Vec<String>,
    #[serde(default)]
    pub author_intro: String,
    #[serde(default)]
    pub tags: Vec<CatalogTag>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CatalogSeries {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CatalogTag {
    #[serde(default)]
    pub name: String,
}

impl From<&CatalogBook> for BookRecord {
    fn from(other: &CatalogBook) -> Self {
        Self {
            title: other.title.to_string(),
            sub_title: other.subtitle.to_string(),
            original_title: other.origin_title.to_string(),
            series: other.series.as_ref().map(|s| s.title.to_string()).unwrap_or_default(),
            publisher: other.publisher.to_string(),
            publish_date: other.pubdate.to_string(),
            pages: other.pages.to_string(),
            price: other.price.to_string(),
            binding: other.binding.to_string(),
            isbn13: other.isbn13.to_string(),
            img_url: other.image.to_string(),
            summary: other.summary.to_string(),
            catalog: other.catalog.to_string(),
            author: other.author.clone(),
            translator: other.translator.clone(),
            author_intro: other.author_intro.to_string(),
            tags: other.tags.iter().map(|t| t.name.to_string()).collect::<Vec<_>>().join(","),
        }
    }
}
