use serde::{Deserialize, Serialize};

/// A post as returned by the remote posts endpoint.
///
/// Only `id`, `title` and `body` are kept; any other field in the payload
/// (such as `userId`) is ignored during decoding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}
