use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::controller::UserContext;
use crate::utils::date::serializer;

// Plain Markdown editor, the only editor the share flow produces content for.
pub(crate) const EDITOR_TYPE_MARKDOWN: i32 = 0;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ArticleType {
    Normal,
    Book,
}

impl Display for ArticleType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ArticleType::Normal => write!(f, "normal"),
            ArticleType::Book => write!(f, "book"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum AnonymousView {
    Allow,
    Deny,
}

impl Display for AnonymousView {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AnonymousView::Allow => write!(f, "allow"),
            AnonymousView::Deny => write!(f, "deny"),
        }
    }
}

// ArticleEntity is the fully populated article-creation request handed to the
// submission client. It is created, submitted and discarded within one share
// request; there is no partially populated state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ArticleEntity {
    pub title: String,
    // comma joined tag list
    pub tags: String,
    pub content: String,
    pub author_id: String,
    pub author_email: String,
    pub editor_type: i32,
    pub user_agent: String,
    pub article_type: ArticleType,
    pub anonymous_view: AnonymousView,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl ArticleEntity {
    pub fn new(title: &str, tags: &str, content: &str,
               user: &UserContext, user_agent: &str) -> Self {
        Self {
            title: title.to_string(),
            tags: tags.to_string(),
            content: content.to_string(),
            author_id: user.user_id.to_string(),
            author_email: user.user_email.to_string(),
            editor_type: EDITOR_TYPE_MARKDOWN,
            user_agent: user_agent.to_string(),
            article_type: ArticleType::Book,
            anonymous_view: AnonymousView::Allow,
            created_at: Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::articles::domain::model::{AnonymousView, ArticleEntity, ArticleType, EDITOR_TYPE_MARKDOWN};
    use crate::core::controller::UserContext;

    #[tokio::test]
    async fn test_should_build_article() {
        let user = UserContext::new("user-1", "user-1@test.io");
        let article = ArticleEntity::new("title", "书单,编程", "content", &user, "test-agent");
        assert_eq!("title", article.title.as_str());
        assert_eq!("书单,编程", article.tags.as_str());
        assert_eq!("user-1", article.author_id.as_str());
        assert_eq!("user-1@test.io", article.author_email.as_str());
        assert_eq!(EDITOR_TYPE_MARKDOWN, article.editor_type);
        assert_eq!(ArticleType::Book, article.article_type);
        assert_eq!(AnonymousView::Allow, article.anonymous_view);
    }

    #[tokio::test]
    async fn test_should_serialize_type_tags() {
        assert_eq!("book", ArticleType::Book.to_string());
        assert_eq!("allow", AnonymousView::Allow.to_string());
        assert_eq!("\"book\"", serde_json::to_string(&ArticleType::Book).expect("should serialize"));
    }
}
