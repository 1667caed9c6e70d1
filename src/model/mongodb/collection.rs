use std::ops::Deref;

use mongodb::{bson::Document, Collection, Database};
use rocket::{
    futures::TryStreamExt,
    request::{self, FromRequest, Request},
    State,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;
use crate::model::db::{answer::Answer, area::Area, template::Template, user::User};

use super::bson::Id;

/// A type that can be directly inserted/read to/from the database.
pub trait MongoCollection {
    /// The name of the collection.
    const NAME: &'static str;
}

/// A database collection of the given type.
pub struct Coll<T>(Collection<T>);

impl<T> Coll<T>
where
    T: MongoCollection,
{
    /// Get a handle on this collection in the given database.
    pub fn from_db(db: &Database) -> Self {
        Self(db.collection(T::NAME))
    }
}

impl<T> Coll<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    /// Insert a document, handing it back on success.
    pub async fn create(&self, doc: T) -> Result<T> {
        self.insert_one(&doc, None).await?;
        Ok(doc)
    }

    /// Every document in the collection, in natural order.
    pub async fn list_all(&self) -> Result<Vec<T>> {
        self.list_matching(None).await
    }

    /// Every document matching the filter, in natural order.
    pub async fn list_matching(&self, filter: impl Into<Option<Document>>) -> Result<Vec<T>> {
        let docs = self.find(filter, None).await?.try_collect().await?;
        Ok(docs)
    }

    /// The document with the given ID, if any.
    pub async fn get_by_id(&self, id: Id) -> Result<Option<T>> {
        let doc = self.find_one(id.as_doc(), None).await?;
        Ok(doc)
    }

    /// Delete the document with the given ID, returning it if it existed.
    pub async fn delete_by_id(&self, id: Id) -> Result<Option<T>> {
        let doc = self.find_one_and_delete(id.as_doc(), None).await?;
        Ok(doc)
    }
}

// `Derive(Clone)` would only derive if `T: Clone`, but we don't need that bound.
impl<T> Clone for Coll<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Deref for Coll<T> {
    type Target = Collection<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r, T> FromRequest<'r> for Coll<T>
where
    T: MongoCollection,
{
    type Error = ();

    /// Get the database connection from the managed state and wrap it in a collection.
    ///
    /// Fails with a 500 iff the [`Database`] is not managed by [`rocket::Rocket`].
    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        req.guard::<&State<Database>>()
            .await
            .map(|db| Coll::from_db(db))
    }
}

impl MongoCollection for User {
    const NAME: &'static str = "users";
}

impl MongoCollection for Area {
    const NAME: &'static str = "areas";
}

impl MongoCollection for Template {
    const NAME: &'static str = "templates";
}

impl MongoCollection for Answer {
    const NAME: &'static str = "answers";
}
