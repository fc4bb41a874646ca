//! # Address Client
//!
//! The address book as seen by one owner at a time: every read, update and delete is checked
//! against the owner, and a foreign address looks exactly like a missing one.
use crate::address_actor::AddressError;
use crate::model::{
    Address, AddressCreate, AddressDetails, AddressId, AddressQuery, AddressUpdate, UserId,
};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Address actor.
#[derive(Clone)]
pub struct AddressClient {
    inner: ResourceClient<Address>,
}

impl AddressClient {
    pub fn new(inner: ResourceClient<Address>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Address> for AddressClient {
    type Error = AddressError;

    fn inner(&self) -> &ResourceClient<Address> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<AddressError>()
            .unwrap_or_else(|e| AddressError::ActorCommunicationError(e.to_string()))
    }
}

impl AddressClient {
    #[instrument(skip(self, details))]
    pub async fn add_address(
        &self,
        owner: UserId,
        details: AddressDetails,
    ) -> Result<AddressId, AddressError> {
        debug!(?details, "add_address called");
        self.inner
            .create(AddressCreate { owner, details })
            .await
            .map_err(Self::map_error)
    }

    /// The address, provided it exists and belongs to `owner`.
    #[instrument(skip(self))]
    pub async fn resolve(&self, id: AddressId, owner: UserId) -> Result<Address, AddressError> {
        match self.get(id).await? {
            Some(address) if address.owner == owner => Ok(address),
            _ => Err(AddressError::NotFound(id)),
        }
    }

    /// Every address of `owner`, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_for(&self, owner: UserId) -> Result<Vec<Address>, AddressError> {
        let mut addresses = self.query(AddressQuery::OwnedBy(owner)).await?;
        addresses.sort_by_key(|address| address.id);
        Ok(addresses)
    }

    /// Replaces the details of one of `owner`'s addresses.
    #[instrument(skip(self, details))]
    pub async fn update(
        &self,
        id: AddressId,
        owner: UserId,
        details: AddressDetails,
    ) -> Result<Address, AddressError> {
        self.inner
            .update(id, AddressUpdate { owner, details })
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(_) => AddressError::NotFound(id),
                other => Self::map_error(other),
            })
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: AddressId, owner: UserId) -> Result<(), AddressError> {
        self.resolve(id, owner).await?;
        self.inner.delete(id).await.map_err(|e| match e {
            FrameworkError::NotFound(_) => AddressError::NotFound(id),
            other => Self::map_error(other),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;

    fn address(id: u32, owner: u32) -> Address {
        Address {
            id: AddressId(id),
            owner: UserId(owner),
            city: "Kharkiv".into(),
            street_name: "Sumska".into(),
            street_number: "10".into(),
            phone_number: "+380671112233".into(),
        }
    }

    #[tokio::test]
    async fn foreign_address_resolves_as_not_found() {
        let mut mock = MockClient::<Address>::new();
        mock.expect_get(AddressId(7)).return_ok(Some(address(7, 2)));
        mock.expect_get(AddressId(7)).return_ok(Some(address(7, 2)));

        let client = AddressClient::new(mock.client());
        assert_eq!(
            client.resolve(AddressId(7), UserId(1)).await.unwrap_err(),
            AddressError::NotFound(AddressId(7))
        );
        assert_eq!(client.resolve(AddressId(7), UserId(2)).await.unwrap().city, "Kharkiv");
        mock.verify();
    }

    #[tokio::test]
    async fn remove_checks_owner_before_deleting() {
        let mut mock = MockClient::<Address>::new();
        mock.expect_get(AddressId(3)).return_ok(Some(address(3, 1)));

        let client = AddressClient::new(mock.client());
        let err = client.remove(AddressId(3), UserId(5)).await.unwrap_err();
        assert_eq!(err, AddressError::NotFound(AddressId(3)));
        // No delete expectation: the mock would record one as unexpected.
        mock.verify();
    }

    #[tokio::test]
    async fn update_of_unknown_address_is_not_found() {
        let mut mock = MockClient::<Address>::new();
        mock.expect_update(AddressId(4))
            .return_err(FrameworkError::NotFound("address_4".into()));

        let client = AddressClient::new(mock.client());
        let details = AddressDetails {
            city: "Kharkiv".into(),
            street_name: "Sumska".into(),
            street_number: "12".into(),
            phone_number: "12345".into(),
        };
        let err = client.update(AddressId(4), UserId(1), details).await.unwrap_err();
        assert_eq!(err, AddressError::NotFound(AddressId(4)));
        mock.verify();
    }
}
