//! [`Calculation`]-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::{domain, read};
use uuid::Uuid;

use crate::{
    api::{catalog, offer, scalar},
    Context,
};

/// Detailed configuration worked out for an individual `Offer` quote.
#[derive(Clone, Debug, From)]
pub struct Calculation(read::calculation::WithFeatures);

impl From<domain::Calculation> for Calculation {
    fn from(calculation: domain::Calculation) -> Self {
        Self(read::calculation::WithFeatures {
            calculation,
            features: Vec::new(),
        })
    }
}

/// Detailed configuration worked out for an individual `Offer` quote.
#[graphql_object(context = Context)]
impl Calculation {
    /// Unique identifier of this `Calculation`.
    fn id(&self) -> Id {
        self.0.calculation.id.into()
    }

    /// `Offer` this `Calculation` belongs to.
    fn offer_id(&self) -> offer::Id {
        self.0.calculation.offer_id.into()
    }

    /// Availability of the vehicle this `Calculation` is about.
    fn availability(&self) -> Availability {
        self.0.calculation.availability.into()
    }

    /// Exterior color of the calculated configuration.
    fn exterior_color_id(&self) -> Option<catalog::ColorId> {
        self.0.calculation.exterior_color_id.map(Into::into)
    }

    /// Interior color of the calculated configuration.
    fn interior_color_id(&self) -> Option<catalog::ColorId> {
        self.0.calculation.interior_color_id.map(Into::into)
    }

    /// Features of the calculated configuration, ordered by name.
    fn features(&self) -> Vec<Feature> {
        self.0.features.iter().cloned().map(Into::into).collect()
    }

    /// `DateTime` when this `Calculation` was created.
    fn created_at(&self) -> DateTime {
        self.0.calculation.created_at.coerce()
    }
}

/// Feature of a calculated configuration.
#[derive(Clone, Debug, From)]
pub struct Feature(domain::calculation::Feature);

/// Feature of a calculated configuration.
#[graphql_object(name = "CalculationFeature", context = Context)]
impl Feature {
    /// Unique identifier of this `CalculationFeature`.
    fn id(&self) -> FeatureId {
        self.0.id.into()
    }

    /// Name of this `CalculationFeature`.
    fn name(&self) -> FeatureName {
        self.0.name.clone().into()
    }

    /// Description of this `CalculationFeature`.
    fn description(&self) -> Option<offer::Description> {
        self.0.description.clone().map(Into::into)
    }
}

/// Unique identifier of a `Calculation`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::calculation::Id)]
#[into(domain::calculation::Id)]
#[graphql(name = "CalculationId", transparent)]
pub struct Id(Uuid);

/// Unique identifier of a `CalculationFeature`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::calculation::FeatureId)]
#[into(domain::calculation::FeatureId)]
#[graphql(name = "CalculationFeatureId", transparent)]
pub struct FeatureId(Uuid);

/// Name of a `CalculationFeature`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "CalculationFeatureName",
    with = scalar::Via::<domain::calculation::FeatureName>,
)]
pub struct FeatureName(domain::calculation::FeatureName);

/// Availability of the vehicle a `Calculation` is about.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "CalculationAvailability")]
pub enum Availability {
    /// Vehicle is in stock.
    InStock,

    /// Vehicle is not available.
    NotAvailable,

    /// Vehicle can be ordered from the manufacturer.
    OnOrder,
}

impl From<domain::calculation::Availability> for Availability {
    fn from(availability: domain::calculation::Availability) -> Self {
        use domain::calculation::Availability as A;

        match availability {
            A::InStock => Self::InStock,
            A::NotAvailable => Self::NotAvailable,
            A::OnOrder => Self::OnOrder,
        }
    }
}

impl From<Availability> for domain::calculation::Availability {
    fn from(availability: Availability) -> Self {
        match availability {
            Availability::InStock => Self::InStock,
            Availability::NotAvailable => Self::NotAvailable,
            Availability::OnOrder => Self::OnOrder,
        }
    }
}
