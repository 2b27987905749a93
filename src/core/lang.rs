use std::collections::HashMap;

// The single label key shared by every failure branch of the share and info
// operations. Validation, lookup and submission failures are deliberately
// indistinguishable to the caller.
pub(crate) const BOOK_QUERY_FAILED_LABEL: &str = "bookQueryFailedLabel";

// LangProps resolves localization keys to display messages. Callers always
// receive resolved text, never the raw key, unless the key is unknown.
#[derive(Debug, Clone)]
pub(crate) struct LangProps {
    labels: HashMap<String, String>,
}

impl LangProps {
    pub fn new() -> Self {
        let mut labels = HashMap::new();
        labels.insert(BOOK_QUERY_FAILED_LABEL.to_string(), "查询图书失败".to_string());
        LangProps { labels }
    }

    pub fn get(&self, key: &str) -> String {
        self.labels.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

impl Default for LangProps {
    fn default() -> Self {
        LangProps::new()
    }
}
