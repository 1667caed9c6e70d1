//! Request bodies accepted from clients and the JSON returned to them.

pub mod answer;
pub mod area;
pub mod seed;
pub mod template;
pub mod user;
