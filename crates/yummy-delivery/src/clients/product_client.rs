//! # Product Client
//!
//! Catalog access: admin-side create/update and the read-only lookup carts use when adding an
//! item.
use crate::model::{Product, ProductCreate, ProductId, ProductQuery, ProductUpdate};
use crate::product_actor::ProductError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<ProductError>()
            .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string()))
    }
}

impl ProductClient {
    #[instrument(skip(self, params))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!(?params, "create_product called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// The product as it is right now, or `NotFound`.
    #[instrument(skip(self))]
    pub async fn lookup(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id).await?.ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        self.inner.update(id, update).await.map_err(|e| match e {
            FrameworkError::NotFound(_) => ProductError::NotFound(id),
            other => Self::map_error(other),
        })
    }

    /// Matching products, ordered by id.
    #[instrument(skip(self))]
    pub async fn catalog(&self, query: ProductQuery) -> Result<Vec<Product>, ProductError> {
        let mut products = self.query(query).await?;
        products.sort_by_key(|product| product.id);
        Ok(products)
    }
}
