use serde::{Deserialize, Serialize};

/// A single comment on a ticket, as returned by the comments endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: u64,
}

/// Body of `GET /api/v2/tickets/{id}/comments`
///
/// Only the first page is read; `next_page` is ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CommentsPage {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Comment {
    pub fn contains(&self, snippet: &str) -> bool {
        self.body.contains(snippet)
    }
}
