//! Document shapes as stored in MongoDB.

pub mod answer;
pub mod area;
pub mod template;
pub mod user;
