use serde::{Deserialize, Serialize};

/// Post entity - a scraped torrent-tracker listing.
///
/// `id` is assigned by the database and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub rutracker_id: String,
    pub link: String,
    pub title: String,
    pub seeds: i32,
    pub leaches: i32,
    pub size: String,
}

/// Every post field except `id`.
///
/// Used both for creation and for full-replacement updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub rutracker_id: String,
    pub link: String,
    pub title: String,
    pub seeds: i32,
    pub leaches: i32,
    pub size: String,
}

impl Post {
    /// Attach a database-assigned id to a set of post fields.
    pub fn from_parts(id: i32, fields: NewPost) -> Self {
        Self {
            id,
            rutracker_id: fields.rutracker_id,
            link: fields.link,
            title: fields.title,
            seeds: fields.seeds,
            leaches: fields.leaches,
            size: fields.size,
        }
    }

    /// Human-readable message sent to the chat.
    pub fn notification_text(&self) -> String {
        format!(
            "{}\nSeeds: {} | Leaches: {}\nSize: {}\n{}",
            self.title, self.seeds, self.leaches, self.size, self.link
        )
    }
}

impl From<Post> for NewPost {
    fn from(post: Post) -> Self {
        Self {
            rutracker_id: post.rutracker_id,
            link: post.link,
            title: post.title,
            seeds: post.seeds,
            leaches: post.leaches,
            size: post.size,
        }
    }
}
