//! GraphQL API definitions.

pub mod calculation;
pub mod catalog;
pub mod color_variant;
pub mod leasing_variant;
mod mutation;
pub mod offer;
pub mod optional_equipment;
mod query;
pub mod scalar;
pub mod user;

use crate::{define_error, Context};

pub use self::{
    calculation::Calculation,
    color_variant::ColorVariant,
    leasing_variant::LeasingVariant,
    mutation::Mutation,
    offer::{Offer, OfferValue},
    optional_equipment::OptionalEquipment,
    query::Query,
};

/// GraphQL schema.
pub type Schema =
    juniper::RootNode<'static, Query, Mutation, juniper::EmptySubscription<Context>>;

define_error! {
    enum PermissionError {
        #[code = "NOT_PERMITTED"]
        #[status = FORBIDDEN]
        #[message = "Authenticated `User` is not permitted to perform this \
                     action"]
        Action,
    }
}

define_error! {
    enum PaginationError {
        #[code = "INVALID_PAGINATION_ARGUMENTS"]
        #[status = BAD_REQUEST]
        #[message = "Invalid pagination arguments"]
        Invalid,
    }
}
