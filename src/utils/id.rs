use crate::utils::error::ApiError;
use mongodb::bson::oid::ObjectId;

/// Parses a path segment into a store identifier. `what` names the entity
/// in the 400 message ("movie", "comment").
pub fn parse_object_id(raw: &str, what: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("Invalid {} id", what)))
}
