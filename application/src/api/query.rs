//! GraphQL [`Query`]s definitions.

use common::{Money, Slice};
use juniper::{graphql_object, GraphQLInputObject};
use service::{query, read, Query as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the `Offer` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `OFFER_NOT_EXISTS` - the `Offer` with the specified ID does not
    ///                        exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "offer",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn offer(
        id: api::offer::Id,
        ctx: &Context,
    ) -> Result<api::OfferValue, Error> {
        _ = ctx.current_session().await?;
        ctx.service()
            .execute(query::offer::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| OfferError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Offer` with the specified slug.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `OFFER_NOT_EXISTS` - the `Offer` with the specified slug does not
    ///                        exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "offerBySlug",
            otel.name = Self::SPAN_NAME,
            slug = %slug,
        ),
    )]
    pub async fn offer_by_slug(
        slug: api::offer::Slug,
        ctx: &Context,
    ) -> Result<api::OfferValue, Error> {
        _ = ctx.current_session().await?;
        ctx.service()
            .execute(query::offer::BySlug::by(slug.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| OfferError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches the page of `Offer`s for the back office.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_PAGINATION_ARGUMENTS` - `limit` or `offset` is negative.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "offers",
            limit = ?limit,
            offset = ?offset,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn offers(
        filter: Option<OffersFilter>,
        limit: Option<i32>,
        offset: Option<i32>,
        ctx: &Context,
    ) -> Result<Vec<api::OfferValue>, Error> {
        _ = ctx.current_session().await?;
        ctx.service()
            .execute(query::offers::List::by(read::offer::list::Selector {
                filter: filter.map(Into::into).unwrap_or_default(),
                slice: slice(limit, offset).map_err(ctx.error())?,
            }))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|page| page.into_iter().map(Into::into).collect())
    }

    /// Fetches the page of `Offer`s for the public catalog.
    ///
    /// Only active, publicly visible `Offer`s are returned. Requires no
    /// authentication.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_PAGINATION_ARGUMENTS` - `limit` or `offset` is negative.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "publicOffers",
            limit = ?limit,
            offset = ?offset,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn public_offers(
        filter: Option<OffersFilter>,
        limit: Option<i32>,
        offset: Option<i32>,
        ctx: &Context,
    ) -> Result<Vec<api::OfferValue>, Error> {
        ctx.service()
            .execute(query::offers::PublicList::by(read::offer::Public(
                read::offer::list::Selector {
                    filter: filter.map(Into::into).unwrap_or_default(),
                    slice: slice(limit, offset).map_err(ctx.error())?,
                },
            )))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|page| page.into_iter().map(Into::into).collect())
    }

    /// Returns all `LeasingVariant`s of the specified `Offer`.
    ///
    /// The default one comes first, then the best offer, then the rest
    /// ordered by ascending price with VAT.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "leasingVariants",
            offer_id = %offer_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn leasing_variants(
        offer_id: api::offer::Id,
        ctx: &Context,
    ) -> Result<Vec<api::LeasingVariant>, Error> {
        _ = ctx.current_session().await?;
        ctx.service()
            .execute(query::leasing_variants::ByOffer::by(offer_id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|variants| variants.into_iter().map(Into::into).collect())
    }

    /// Returns all `ColorVariant`s of the specified `Offer`.
    ///
    /// The default one comes first, then the rest in creation order.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "colorVariants",
            offer_id = %offer_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn color_variants(
        offer_id: api::offer::Id,
        ctx: &Context,
    ) -> Result<Vec<api::ColorVariant>, Error> {
        _ = ctx.current_session().await?;
        ctx.service()
            .execute(query::color_variants::ByOffer::by(offer_id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|variants| variants.into_iter().map(Into::into).collect())
    }

    /// Returns `OptionalEquipment` of the specified `Offer`.
    ///
    /// With `onlyAvailable` set, unorderable `OptionalEquipment` is left out.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "optionalEquipment",
            offer_id = %offer_id,
            only_available = ?only_available,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn optional_equipment(
        offer_id: api::offer::Id,
        only_available: Option<bool>,
        ctx: &Context,
    ) -> Result<Vec<api::OptionalEquipment>, Error> {
        _ = ctx.current_session().await?;
        if only_available.unwrap_or_default() {
            ctx.service()
                .execute(query::optional_equipment::AvailableByOffer::by(
                    offer_id.into(),
                ))
                .await
                .map_err(AsError::into_error)
                .map_err(ctx.error())
                .map(|page| {
                    page.into_iter().map(|av| av.0.into()).collect()
                })
        } else {
            ctx.service()
                .execute(query::optional_equipment::ByOffer::by(
                    offer_id.into(),
                ))
                .await
                .map_err(AsError::into_error)
                .map_err(ctx.error())
                .map(|page| page.into_iter().map(Into::into).collect())
        }
    }

    /// Returns all `Calculation`s of the specified `Offer` with their
    /// features, newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "calculations",
            offer_id = %offer_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn calculations(
        offer_id: api::offer::Id,
        ctx: &Context,
    ) -> Result<Vec<api::Calculation>, Error> {
        _ = ctx.current_session().await?;
        ctx.service()
            .execute(query::calculations::ByOffer::by(offer_id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|page| page.into_iter().map(Into::into).collect())
    }
}

/// Filter of `Offer` listings.
///
/// Conditions are combined with `AND`, omitted ones meaning "any".
#[derive(Clone, Debug, GraphQLInputObject)]
pub struct OffersFilter {
    /// Kind of the `Offer`s to select.
    pub kind: Option<api::offer::Kind>,

    /// Model generation the selected `Offer`s must be about.
    pub generation_id: Option<api::catalog::GenerationId>,

    /// Vehicle brand the selected `Offer`s must be about.
    pub brand_id: Option<api::catalog::BrandId>,

    /// Vehicle model the selected `Offer`s must be about.
    pub model_id: Option<api::catalog::ModelId>,

    /// Required `isActive` value of the selected `Offer`s.
    pub is_active: Option<bool>,

    /// Required `isPublic` value of the selected `Offer`s.
    pub is_public: Option<bool>,

    /// Lower bound of the total price of the selected `Offer`s.
    pub min_total_price: Option<Money>,

    /// Upper bound of the total price of the selected `Offer`s.
    pub max_total_price: Option<Money>,

    /// Status the selected individual `Offer`s must be in.
    pub status: Option<api::offer::Status>,

    /// Customer the selected individual `Offer`s must belong to.
    pub customer_id: Option<api::catalog::CustomerId>,

    /// Assignee the selected individual `Offer`s must have.
    pub assignee_id: Option<api::user::Id>,
}

impl From<OffersFilter> for read::offer::list::Filter {
    fn from(filter: OffersFilter) -> Self {
        Self {
            kind: filter.kind.map(Into::into),
            generation_id: filter.generation_id.map(Into::into),
            brand_id: filter.brand_id.map(Into::into),
            model_id: filter.model_id.map(Into::into),
            is_active: filter.is_active,
            is_public: filter.is_public,
            min_total_price: filter.min_total_price,
            max_total_price: filter.max_total_price,
            status: filter.status.map(Into::into),
            customer_id: filter.customer_id.map(Into::into),
            assignee_id: filter.assignee_id.map(Into::into),
        }
    }
}

/// Builds a [`Slice`] out of the raw pagination arguments.
fn slice(limit: Option<i32>, offset: Option<i32>) -> Result<Slice, Error> {
    let limit = limit
        .map(usize::try_from)
        .transpose()
        .map_err(|_| api::PaginationError::Invalid)?;
    let offset = offset
        .map(usize::try_from)
        .transpose()
        .map_err(|_| api::PaginationError::Invalid)?;
    Ok(Slice::new(limit, offset))
}

define_error! {
    enum OfferError {
        #[code = "OFFER_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Offer` with the specified ID or slug does not exist"]
        NotExists,
    }
}
