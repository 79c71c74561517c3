use crate::utils::json::{convert_dates, json_to_bson};
use crate::utils::validation::{InvalidDate, Required, ValidationError};
use mongodb::bson::Document;
use serde::Deserialize;
use serde_json::{Map, Value};

pub const MOVIES: &str = "movies";

/// Date attributes stored as BSON dates, addressed by dotted path.
pub const MOVIE_DATES: &[&str] = &["released", "lastupdated", "tomatoes.lastUpdated"];

/// Movie payload accepted on create and update. Only `title` is checked;
/// every other attribute (`genres`, `imdb`, `writers`, `tomatoes.critic`,
/// ...) is carried through as submitted, so the same shape serves inserts
/// and partial updates.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct Movie {
    pub title: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Movie {
    /// A new movie needs a non-blank title.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Required::new().text("title", self.title.as_deref()).finish()
    }

    /// The supplied fields, ready to insert or `$set`. `_id` is dropped and
    /// the date attributes become BSON dates.
    pub fn to_document(&self) -> Result<Document, InvalidDate> {
        let mut document = Document::new();
        if let Some(title) = &self.title {
            document.insert("title", title.as_str());
        }
        for (key, value) in &self.fields {
            if key != "_id" {
                document.insert(key.as_str(), json_to_bson(value.clone()));
            }
        }

        convert_dates(&mut document, MOVIE_DATES)?;
        Ok(document)
    }
}
