use super::AddressError;
use crate::model::{Address, AddressCreate, AddressDetails, AddressId, AddressQuery, AddressUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

const TEXT_CHARS: std::ops::RangeInclusive<usize> = 2..=25;
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 5..=20;

#[async_trait]
impl ActorEntity for Address {
    type Id = AddressId;
    type Create = AddressCreate;
    type Update = AddressUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Query = AddressQuery;
    type Context = ();
    type Error = AddressError;

    fn from_create_params(id: AddressId, params: AddressCreate) -> Result<Self, Self::Error> {
        validate(&params.details)?;
        let AddressDetails {
            city,
            street_name,
            street_number,
            phone_number,
        } = params.details;
        Ok(Self {
            id,
            owner: params.owner,
            city,
            street_name,
            street_number,
            phone_number,
        })
    }

    /// A foreign owner gets `NotFound`, same as for a missing address.
    async fn on_update(&mut self, update: AddressUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if update.owner != self.owner {
            return Err(AddressError::NotFound(self.id));
        }
        validate(&update.details)?;
        let AddressDetails {
            city,
            street_name,
            street_number,
            phone_number,
        } = update.details;
        self.city = city;
        self.street_name = street_name;
        self.street_number = street_number;
        self.phone_number = phone_number;
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }

    fn matches(&self, query: &AddressQuery) -> bool {
        match query {
            AddressQuery::OwnedBy(owner) => self.owner == *owner,
        }
    }
}

fn validate(details: &AddressDetails) -> Result<(), AddressError> {
    check_text("city", &details.city)?;
    check_text("street name", &details.street_name)?;
    if details.street_number.trim().is_empty() {
        return Err(AddressError::MissingStreetNumber);
    }
    if !is_phone_number(&details.phone_number) {
        return Err(AddressError::InvalidPhone(details.phone_number.clone()));
    }
    Ok(())
}

fn check_text(field: &'static str, value: &str) -> Result<(), AddressError> {
    if TEXT_CHARS.contains(&value.trim().chars().count()) {
        Ok(())
    } else {
        Err(AddressError::InvalidText {
            field,
            value: value.to_string(),
        })
    }
}

/// An optional leading `+` followed by 5 to 20 ASCII digits.
fn is_phone_number(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    PHONE_DIGITS.contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}
