//! Scalars referring to back-office `User`s.
//!
//! `User`s are managed by the identity provider, so only their IDs surface
//! in this API.

use derive_more::{Display, From, Into};
use juniper::GraphQLScalar;
use service::domain;
use uuid::Uuid;

/// Unique identifier of a back-office `User`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::user::Id)]
#[into(domain::user::Id)]
#[graphql(name = "UserId", transparent)]
pub struct Id(Uuid);
