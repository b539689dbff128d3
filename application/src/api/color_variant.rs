//! [`ColorVariant`]-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{
    api::{catalog, offer, scalar},
    Context,
};

/// Exterior and interior color combination of an `Offer`.
#[derive(Clone, Debug, From)]
pub struct ColorVariant(domain::ColorVariant);

/// Exterior and interior color combination of an `Offer`.
#[graphql_object(context = Context)]
impl ColorVariant {
    /// Unique identifier of this `ColorVariant`.
    fn id(&self) -> Id {
        self.0.id.into()
    }

    /// `Offer` this `ColorVariant` belongs to.
    fn offer_id(&self) -> offer::Id {
        self.0.offer_id.into()
    }

    /// Exterior color of this `ColorVariant`.
    fn exterior_color_id(&self) -> catalog::ColorId {
        self.0.exterior_color_id.into()
    }

    /// Interior color of this `ColorVariant`.
    fn interior_color_id(&self) -> Option<catalog::ColorId> {
        self.0.interior_color_id.map(Into::into)
    }

    /// Human-readable name of this `ColorVariant`.
    fn name(&self) -> DisplayName {
        self.0.name.clone().into()
    }

    /// Indicator whether this `ColorVariant` is the default one of its
    /// `Offer`.
    fn is_default(&self) -> bool {
        self.0.is_default
    }

    /// Image gallery of this `ColorVariant`.
    fn gallery_id(&self) -> Option<catalog::GalleryId> {
        self.0.gallery_id.map(Into::into)
    }

    /// `DateTime` when this `ColorVariant` was created.
    fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of a `ColorVariant`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::color_variant::Id)]
#[into(domain::color_variant::Id)]
#[graphql(name = "ColorVariantId", transparent)]
pub struct Id(Uuid);

/// Human-readable name of a `ColorVariant`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ColorVariantName",
    with = scalar::Via::<domain::color_variant::DisplayName>,
)]
pub struct DisplayName(domain::color_variant::DisplayName);
