use std::collections::HashMap;
use async_trait::async_trait;
use crate::books::domain::model::BookRecord;
use crate::books::lookup::BookLookupClient;
use crate::core::platform::{PlatformError, PlatformResult};

// In-memory catalog used in dev mode and tests.
#[derive(Debug)]
pub struct LocalBookLookupClient {
    books: HashMap<String, BookRecord>,
}

impl LocalBookLookupClient {
    pub(crate) fn new(records: Vec<BookRecord>) -> Self {
        Self {
            books: records.into_iter().map(|b| (b.isbn13.to_string(), b)).collect(),
        }
    }

    pub(crate) fn seeded() -> Self {
        Self::new(vec![sample_book(), translated_book()])
    }
}

#[async_trait]
impl BookLookupClient for LocalBookLookupClient {
    async fn find_by_isbn(&self, isbn: &str) -> PlatformResult<BookRecord> {
        self.books.get(isbn).cloned().ok_or_else(|| PlatformError::not_found(
            format!("no catalog record for isbn {}", isbn).as_str()))
    }
}

pub(crate) fn sample_book() -> BookRecord {
    let mut book = BookRecord::new("9787111544937", "示例书");
    book.publisher = "示例出版社".to_string();
    book.publish_date = "2017-1".to_string();
    book.pages = "320".to_string();
    book.price = "59.00元".to_string();
    book.binding = "平装".to_string();
    book.img_url = "https://img.example.com/sample.jpg".to_string();
    book.summary = "一本示例图书。".to_string();
    book.catalog = "第1章 引言".to_string();
    book.author = vec!["张三".to_string()];
    book.author_intro = "张三是一位作者。".to_string();
    book.tags = "编程,示例".to_string();
    book
}

pub(crate) fn translated_book() -> BookRecord {
    let mut book = BookRecord::new("9787111407010", "代码大全");
    book.sub_title = "第2版".to_string();
    book.original_title = "Code Complete".to_string();
    book.series = "软件开发丛书".to_string();
    book.publisher = "电子工业出版社".to_string();
    book.publish_date = "2006-3".to_string();
    book.pages = "944".to_string();
    book.price = "128.00元".to_string();
    book.binding = "平装".to_string();
    book.img_url = "https://img.example.com/cc2e.jpg".to_string();
    book.summary = "软件构建的百科全书。".to_string();
    book.catalog = "第1章 欢迎进入软件构建的世界".to_string();
    book.author = vec!["史蒂夫·迈克康奈尔".to_string()];
    book.translator = vec!["金戈".to_string(), "汤凌".to_string()];
    book.author_intro = "知名软件工程作家。".to_string();
    book.tags = "软件工程,编程".to_string();
    book
}

#[cfg(test)]
mod tests {
    use crate::books::lookup::local_lookup_client::LocalBookLookupClient;
    use crate::books::lookup::BookLookupClient;
    use crate::core::platform::PlatformError;

    #[tokio::test]
    async fn test_should_find_seeded_book() {
        let client = LocalBookLookupClient::seeded();
        let book = client.find_by_isbn("9787111544937").await.expect("should return book");
        assert_eq!("示例书", book.title.as_str());
        assert_eq!("示例出版社", book.publisher.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_unknown_isbn() {
        let client = LocalBookLookupClient::seeded();
        let res = client.find_by_isbn("0000000000").await;
        assert!(matches!(res, Err(PlatformError::NotFound { message: _ })));
    }
}
