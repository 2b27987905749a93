use serde::{Deserialize, Serialize};

// BookRecord abstracts the bibliographic metadata returned by the external
// catalog for one ISBN. Records are read-only once fetched; the composer and
// orchestrator never mutate them. All scalar fields are kept as the catalog's
// display strings (publish dates such as "2017-1" are not parseable dates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookRecord {
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
    // ordered, non-empty upstream
    pub author: Vec<String>,
    // ordered, possibly empty
    pub translator: Vec<String>,
    pub author_intro: String,
    // comma separated catalog tags
    pub tags: String,
}

impl BookRecord {
    pub fn new(isbn13: &str, title: &str) -> Self {
        Self {
            title: title.to_string(),
            sub_title: String::new(),
            original_title: String::new(),
            series: String::new(),
            publisher: String::new(),
            publish_date: String::new(),
            pages: String::new(),
            price: String::new(),
            binding: String::new(),
            isbn13: isbn13.to_string(),
            img_url: String::new(),
            summary: String::new(),
            catalog: String::new(),
            author: vec![],
            translator: vec![],
            author_intro: String::new(),
            tags: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookRecord;

    #[tokio::test]
    async fn test_should_build_book_record() {
        let book = BookRecord::new("9787111544937", "示例书");
        assert_eq!("9787111544937", book.isbn13.as_str());
        assert_eq!("示例书", book.title.as_str());
        assert!(book.author.is_empty());
        assert!(book.translator.is_empty());
    }
}
