mod bson;
mod collection;

pub use bson::{hex_id, now, Id};
pub use collection::{Coll, MongoCollection};
