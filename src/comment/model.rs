use crate::utils::json::to_bson_date;
use crate::utils::validation::{Required, ValidationError};
use chrono::{DateTime, Utc};
use mongodb::bson::{Document, doc, oid::ObjectId};
use serde::Deserialize;
use serde_json::Value;

pub const COMMENTS: &str = "comments";

#[derive(Debug, Default, Deserialize, Clone)]
pub struct NewComment {
    pub name: Option<String>,
    pub email: Option<String>,
    pub text: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub movie_id: Option<String>,
}

/// Stored shape of a comment; `movie_id` keeps the native id type so
/// listing by movie is a plain equality filter.
#[derive(Debug, Clone)]
pub struct Comment {
    pub name: String,
    pub email: String,
    pub text: String,
    pub date: DateTime<Utc>,
    pub movie_id: ObjectId,
}

/// PUT body for a comment. Unknown keys are rejected at extraction;
/// `movie_id` is read only so the service can refuse it.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct CommentUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub text: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub movie_id: Option<Value>,
}

impl NewComment {
    pub fn validate(&self) -> Result<(), ValidationError> {
        Required::new()
            .text("name", self.name.as_deref())
            .text("email", self.email.as_deref())
            .text("text", self.text.as_deref())
            .present("date", self.date.as_ref())
            .text("movie_id", self.movie_id.as_deref())
            .finish()
    }

    /// Validates and binds the comment to `movie_id`.
    pub fn into_comment(self, movie_id: ObjectId) -> Result<Comment, ValidationError> {
        self.validate()?;
        // validate() guarantees every field below is present
        Ok(Comment {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            text: self.text.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            movie_id,
        })
    }
}

impl Comment {
    pub fn to_document(&self) -> Document {
        doc! {
            "name": self.name.as_str(),
            "email": self.email.as_str(),
            "text": self.text.as_str(),
            "date": to_bson_date(self.date),
            "movie_id": self.movie_id,
        }
    }
}

impl CommentUpdate {
    /// Only the supplied fields; `movie_id` is never written.
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        let texts = [
            ("name", &self.name),
            ("email", &self.email),
            ("text", &self.text),
        ];
        for (key, value) in texts {
            if let Some(value) = value {
                document.insert(key, value.as_str());
            }
        }
        if let Some(date) = self.date {
            document.insert("date", to_bson_date(date));
        }
        document
    }
}
