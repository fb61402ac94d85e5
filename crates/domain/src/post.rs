// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tour::EntityId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A comment on a feed post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier for this comment.
    pub id: EntityId,
    /// The commenting user.
    pub author: String,
    /// The comment text.
    pub body: String,
}

/// A feed post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier for this post.
    pub id: EntityId,
    /// The posting user.
    pub author: String,
    /// The post text.
    pub body: String,
    /// When the post was created.
    pub created_at: Option<NaiveDateTime>,
    /// Ids of users who have liked this post.
    pub likes: Vec<String>,
    /// Comments on this post.
    pub comments: Vec<Comment>,
}

impl Post {
    /// Creates a new post with a generated id and no reactions.
    #[must_use]
    pub fn new(author: String, body: String) -> Self {
        Self {
            id: EntityId::generate(),
            author,
            body,
            created_at: None,
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Returns the number of likes on this post.
    #[must_use]
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    /// Flips a user's like on this post.
    ///
    /// Toggling twice restores the original like set.
    pub fn toggle_like(&mut self, user_id: &str) {
        if let Some(pos) = self.likes.iter().position(|u| u == user_id) {
            self.likes.swap_remove(pos);
        } else {
            self.likes.push(user_id.to_string());
        }
    }

    /// Appends a comment to this post.
    pub fn add_comment(&mut self, author: String, body: String) {
        self.comments.push(Comment {
            id: EntityId::generate(),
            author,
            body,
        });
    }
}
