use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookRecord;

// BookDto is the representation of a book embedded in share/info responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub title: String,
    pub sub_title: String,
    pub original_title: String,
    pub series: String,
    pub publisher: String,
    pub publish_date: String,
    pub pages: String,
    pub price: String,
    pub binding: String,
    pub isbn13: String,
    pub img_url: String,
    pub summary: String,
    pub catalog: String,
    pub author: Vec<String>,
    pub translator: Vec<String>,
    pub author_intro: String,
    pub tags: String,
}

impl From<&BookRecord> for BookDto {
    fn from(other: &BookRecord) -> Self {
        Self {
            title: other.title.to_string(),
            sub_title: other.sub_title.to_string(),
            original_title: other.original_title.to_string(),
            series: other.series.to_string(),
            publisher: other.publisher.to_string(),
            publish_date: other.publish_date.to_string(),
            pages: other.pages.to_string(),
            price: other.price.to_string(),
            binding: other.binding.to_string(),
            isbn13: other.isbn13.to_string(),
            img_url: other.img_url.to_string(),
            summary: other.summary.to_string(),
            catalog: other.catalog.to_string(),
            author: other.author.clone(),
            translator: other.translator.clone(),
            author_intro: other.author_intro.to_string(),
            tags: other.tags.to_string(),
        }
    }
}
