pub mod config;
pub mod error;
pub mod id;
pub mod json;
pub mod validation;
