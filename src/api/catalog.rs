use std::marker::PhantomData;

use entity::Entity;
use reqwest::Method;

use crate::{
    api::ApiClient,
    error::{validation::ValidationError, Error},
    model::api::Ack,
};

/// Typed CRUD access to the collection of one entity kind.
pub struct CatalogClient<E> {
    api: ApiClient,
    _kind: PhantomData<fn() -> E>,
}

impl<E> Clone for CatalogClient<E> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            _kind: PhantomData,
        }
    }
}

impl<E: Entity> CatalogClient<E> {
    /// Creates a new instance of [`CatalogClient`]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _kind: PhantomData,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    fn path() -> &'static str {
        E::KIND.schema().path
    }

    /// `GET /<path>`, returned in backend order.
    pub async fn list(&self) -> Result<Vec<E>, Error> {
        self.api.get(&[Self::path()]).await
    }

    /// `GET /<path>/{id}`
    pub async fn get(&self, id: &str) -> Result<E, Error> {
        let id = non_empty(id)?;

        self.api.get(&[Self::path(), id]).await
    }

    /// `POST /<path>` with the full record, primary key included.
    pub async fn create(&self, record: &E) -> Result<Ack, Error> {
        self.api
            .send_json(Method::POST, &[Self::path()], Some(record))
            .await
    }

    /// `PUT /<path>/{id}` with the full record.
    pub async fn update(&self, id: &str, record: &E) -> Result<Ack, Error> {
        let id = non_empty(id)?;

        self.api
            .send_json(Method::PUT, &[Self::path(), id], Some(record))
            .await
    }

    /// `DELETE /<path>/{id}`
    pub async fn delete(&self, id: &str) -> Result<Ack, Error> {
        let id = non_empty(id)?;

        self.api
            .send_json::<(), _>(Method::DELETE, &[Self::path(), id], None)
            .await
    }
}

fn non_empty(id: &str) -> Result<&str, ValidationError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ValidationError::EmptyId);
    }
    Ok(id)
}
