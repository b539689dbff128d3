//! GraphQL [`Mutation`]s definitions.

use common::{DateTime, Money, Percent};
use juniper::{graphql_object, GraphQLInputObject};
use service::{command, domain, Command as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Creates a new operational leasing `Offer`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NEGATIVE_TOTAL_PRICE` - the provided `totalPrice` is negative;
    /// - `INVALID_DURATION_MONTHS` - the provided `durationMonths` are out of
    ///                               bounds;
    /// - `INVALID_MILEAGE_LIMIT` - the provided `annualMileageLimit` is out
    ///                             of bounds;
    /// - `OFFER_SLUG_OCCUPIED` - the provided `slug` is occupied by another
    ///                           `Offer`;
    /// - `OFFER_PUBLIC_ID_OCCUPIED` - the provided `publicId` is occupied by
    ///                                another `Offer`.
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    #[tracing::instrument(
        skip_all,
        fields(
            generation_id = %generation_id,
            gql.name = "createOperationalLeasingOffer",
            otel.name = Self::SPAN_NAME,
            slug = ?slug.as_ref().map(ToString::to_string),
        ),
    )]
    pub async fn create_operational_leasing_offer(
        slug: Option<api::offer::Slug>,
        public_id: Option<api::offer::PublicId>,
        generation_id: api::catalog::GenerationId,
        brand_id: Option<api::catalog::BrandId>,
        model_id: Option<api::catalog::ModelId>,
        engine_id: Option<api::catalog::EngineId>,
        file_id: Option<api::catalog::FileId>,
        total_price: Money,
        description: Option<api::offer::Description>,
        note: Option<api::offer::Note>,
        #[graphql(default = true)] is_active: bool,
        #[graphql(default = false)] is_promoted: bool,
        #[graphql(default = false)] is_featured: bool,
        #[graphql(default = false)] is_discounted: bool,
        duration_months: Option<i32>,
        monthly_payment: Option<Money>,
        annual_mileage_limit: Option<i32>,
        ctx: &Context,
    ) -> Result<api::OfferValue, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::CreateOperationalLeasingOffer {
                actor,
                slug: slug.map(Into::into),
                public_id: public_id.map(Into::into),
                generation_id: generation_id.into(),
                brand_id: brand_id.map(Into::into),
                model_id: model_id.map(Into::into),
                engine_id: engine_id.map(Into::into),
                file_id: file_id.map(Into::into),
                total_price: total_price_of(total_price)
                    .map_err(ctx.error())?,
                description: description.map(Into::into),
                note: note.map(Into::into),
                is_active,
                is_promoted,
                is_featured,
                is_discounted,
                duration_months: duration_months
                    .map(duration_months_of)
                    .transpose()
                    .map_err(ctx.error())?,
                monthly_payment,
                annual_mileage_limit: annual_mileage_limit
                    .map(mileage_limit_of)
                    .transpose()
                    .map_err(ctx.error())?,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new direct purchase `Offer`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NEGATIVE_TOTAL_PRICE` - the provided `totalPrice` is negative;
    /// - `INVALID_WARRANTY_YEARS` - the provided `warrantyYears` are out of
    ///                              bounds;
    /// - `OFFER_SLUG_OCCUPIED` - the provided `slug` is occupied by another
    ///                           `Offer`;
    /// - `OFFER_PUBLIC_ID_OCCUPIED` - the provided `publicId` is occupied by
    ///                                another `Offer`.
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    #[tracing::instrument(
        skip_all,
        fields(
            generation_id = %generation_id,
            gql.name = "createDirectPurchaseOffer",
            otel.name = Self::SPAN_NAME,
            slug = ?slug.as_ref().map(ToString::to_string),
        ),
    )]
    pub async fn create_direct_purchase_offer(
        slug: Option<api::offer::Slug>,
        public_id: Option<api::offer::PublicId>,
        generation_id: api::catalog::GenerationId,
        brand_id: Option<api::catalog::BrandId>,
        model_id: Option<api::catalog::ModelId>,
        engine_id: Option<api::catalog::EngineId>,
        file_id: Option<api::catalog::FileId>,
        total_price: Money,
        description: Option<api::offer::Description>,
        note: Option<api::offer::Note>,
        #[graphql(default = true)] is_active: bool,
        #[graphql(default = false)] is_promoted: bool,
        #[graphql(default = false)] is_featured: bool,
        #[graphql(default = false)] is_discounted: bool,
        discount: Option<Money>,
        warranty_years: Option<i32>,
        ctx: &Context,
    ) -> Result<api::OfferValue, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::CreateDirectPurchaseOffer {
                actor,
                slug: slug.map(Into::into),
                public_id: public_id.map(Into::into),
                generation_id: generation_id.into(),
                brand_id: brand_id.map(Into::into),
                model_id: model_id.map(Into::into),
                engine_id: engine_id.map(Into::into),
                file_id: file_id.map(Into::into),
                total_price: total_price_of(total_price)
                    .map_err(ctx.error())?,
                description: description.map(Into::into),
                note: note.map(Into::into),
                is_active,
                is_promoted,
                is_featured,
                is_discounted,
                discount,
                warranty_years: warranty_years
                    .map(warranty_years_of)
                    .transpose()
                    .map_err(ctx.error())?,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new individual `Offer` for the specified customer.
    ///
    /// Individual `Offer`s are never publicly visible.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NEGATIVE_TOTAL_PRICE` - the provided `totalPrice` is negative;
    /// - `OFFER_SLUG_OCCUPIED` - the provided `slug` is occupied by another
    ///                           `Offer`;
    /// - `OFFER_PUBLIC_ID_OCCUPIED` - the provided `publicId` is occupied by
    ///                                another `Offer`.
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    #[tracing::instrument(
        skip_all,
        fields(
            customer_id = %customer_id,
            generation_id = %generation_id,
            gql.name = "createIndividualOffer",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_individual_offer(
        slug: Option<api::offer::Slug>,
        public_id: Option<api::offer::PublicId>,
        generation_id: api::catalog::GenerationId,
        brand_id: Option<api::catalog::BrandId>,
        model_id: Option<api::catalog::ModelId>,
        engine_id: Option<api::catalog::EngineId>,
        file_id: Option<api::catalog::FileId>,
        total_price: Money,
        description: Option<api::offer::Description>,
        note: Option<api::offer::Note>,
        #[graphql(default = true)] is_active: bool,
        customer_id: api::catalog::CustomerId,
        assignee_id: Option<api::user::Id>,
        internal_notes: Option<api::offer::Note>,
        response_deadline: Option<DateTime>,
        ctx: &Context,
    ) -> Result<api::OfferValue, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::CreateIndividualOffer {
                actor,
                slug: slug.map(Into::into),
                public_id: public_id.map(Into::into),
                generation_id: generation_id.into(),
                brand_id: brand_id.map(Into::into),
                model_id: model_id.map(Into::into),
                engine_id: engine_id.map(Into::into),
                file_id: file_id.map(Into::into),
                total_price: total_price_of(total_price)
                    .map_err(ctx.error())?,
                description: description.map(Into::into),
                note: note.map(Into::into),
                is_active,
                customer_id: customer_id.into(),
                assignee_id: assignee_id.map(Into::into),
                internal_notes: internal_notes.map(Into::into),
                response_deadline: response_deadline.map(|d| d.coerce()),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the specified `Offer`.
    ///
    /// Omitted arguments leave the corresponding fields untouched. The
    /// kind-specific arguments must match the kind of the `Offer`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `OFFER_NOT_EXISTS` - the `Offer` with the specified ID does not
    ///                        exist;
    /// - `OFFER_KIND_MISMATCH` - the kind-specific arguments do not match
    ///                           the kind of the `Offer`;
    /// - `NEGATIVE_TOTAL_PRICE` - the provided `totalPrice` is negative;
    /// - `OFFER_SLUG_OCCUPIED` - the provided `slug` is occupied by another
    ///                           `Offer`;
    /// - `OFFER_PUBLIC_ID_OCCUPIED` - the provided `publicId` is occupied by
    ///                                another `Offer`.
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "updateOffer",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_offer(
        id: api::offer::Id,
        slug: Option<api::offer::Slug>,
        public_id: Option<api::offer::PublicId>,
        generation_id: Option<api::catalog::GenerationId>,
        brand_id: Option<api::catalog::BrandId>,
        model_id: Option<api::catalog::ModelId>,
        engine_id: Option<api::catalog::EngineId>,
        file_id: Option<api::catalog::FileId>,
        total_price: Option<Money>,
        description: Option<api::offer::Description>,
        note: Option<api::offer::Note>,
        is_active: Option<bool>,
        is_promoted: Option<bool>,
        is_featured: Option<bool>,
        is_discounted: Option<bool>,
        operational_leasing: Option<UpdateOperationalLeasingFields>,
        direct_purchase: Option<UpdateDirectPurchaseFields>,
        individual: Option<UpdateIndividualFields>,
        ctx: &Context,
    ) -> Result<api::OfferValue, Error> {
        let actor = ctx.current_session().await?.actor;
        let operational_leasing = operational_leasing
            .map(UpdateOperationalLeasingFields::try_into_fields)
            .transpose()
            .map_err(ctx.error())?;
        ctx.service()
            .execute(command::UpdateOffer {
                actor,
                id: id.into(),
                fields: command::update_offer::Fields {
                    slug: slug.map(|s| Some(s.into())),
                    public_id: public_id.map(|p| Some(p.into())),
                    generation_id: generation_id.map(Into::into),
                    brand_id: brand_id.map(|b| Some(b.into())),
                    model_id: model_id.map(|m| Some(m.into())),
                    engine_id: engine_id.map(|e| Some(e.into())),
                    file_id: file_id.map(|f| Some(f.into())),
                    total_price: total_price
                        .map(total_price_of)
                        .transpose()
                        .map_err(ctx.error())?,
                    description: description.map(|d| Some(d.into())),
                    note: note.map(|n| Some(n.into())),
                    is_active,
                    is_promoted,
                    is_featured,
                    is_discounted,
                    operational_leasing,
                    direct_purchase: direct_purchase
                        .map(UpdateDirectPurchaseFields::try_into_fields)
                        .transpose()
                        .map_err(ctx.error())?,
                    individual: individual.map(Into::into),
                },
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Moves the specified individual `Offer` into the provided status.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `OFFER_NOT_EXISTS` - the `Offer` with the specified ID does not
    ///                        exist;
    /// - `OFFER_NOT_INDIVIDUAL` - the `Offer` with the specified ID is not
    ///                            an individual one.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "updateIndividualOfferStatus",
            otel.name = Self::SPAN_NAME,
            status = ?status,
        ),
    )]
    pub async fn update_individual_offer_status(
        id: api::offer::Id,
        status: api::offer::Status,
        ctx: &Context,
    ) -> Result<api::OfferValue, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::UpdateIndividualOfferStatus {
                actor,
                id: id.into(),
                status: status.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the specified `Offer` with everything attached to it.
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
            gql.name = "deleteOffer",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_offer(
        id: api::offer::Id,
        ctx: &Context,
    ) -> Result<api::OfferValue, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::DeleteOffer {
                actor,
                id: id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new `LeasingVariant` of the specified operational leasing
    /// `Offer`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `OFFER_NOT_EXISTS` - the `Offer` with the specified ID does not
    ///                        exist;
    /// - `OFFER_NOT_OPERATIONAL_LEASING` - the `Offer` with the specified ID
    ///                                     is not an operational leasing one;
    /// - `INVALID_DURATION_MONTHS` - the provided `duration` is out of
    ///                               bounds;
    /// - `INVALID_MILEAGE_LIMIT` - the provided `annualMileageLimit` or
    ///                             `freeMileageBuffer` is out of bounds;
    /// - `LEASING_VARIANT_SLUG_OCCUPIED` - the provided `slug` is occupied by
    ///                                     another `LeasingVariant` of this
    ///                                     `Offer`.
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createLeasingVariant",
            offer_id = %offer_id,
            otel.name = Self::SPAN_NAME,
            slug = %slug,
        ),
    )]
    pub async fn create_leasing_variant(
        offer_id: api::offer::Id,
        slug: api::leasing_variant::Slug,
        duration: i32,
        annual_mileage_limit: i32,
        vat_rate: Percent,
        price_with_vat: Money,
        price_without_vat: Money,
        original_price_with_vat: Option<Money>,
        original_price_without_vat: Option<Money>,
        down_payment: Option<Money>,
        deposit: Option<Money>,
        setup_fee: Option<Money>,
        valid_from: Option<DateTime>,
        valid_until: Option<DateTime>,
        services: Option<api::leasing_variant::IncludedServicesInput>,
        wear_tolerance: Option<Percent>,
        free_mileage_buffer: Option<i32>,
        #[graphql(default = true)] is_active: bool,
        #[graphql(default = false)] is_default: bool,
        #[graphql(default = false)] is_best_offer: bool,
        leasing_company_id: Option<api::catalog::LeasingCompanyId>,
        ctx: &Context,
    ) -> Result<api::LeasingVariant, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::CreateLeasingVariant {
                actor,
                offer_id: offer_id.into(),
                slug: slug.into(),
                duration: duration_months_of(duration)
                    .map_err(ctx.error())?,
                annual_mileage_limit: mileage_limit_of(annual_mileage_limit)
                    .map_err(ctx.error())?,
                vat_rate,
                price_with_vat,
                price_without_vat,
                original_price_with_vat,
                original_price_without_vat,
                down_payment,
                deposit,
                setup_fee,
                valid_from: valid_from.map(|d| d.coerce()),
                valid_until: valid_until.map(|d| d.coerce()),
                services: services.map(Into::into).unwrap_or_default(),
                wear_tolerance,
                free_mileage_buffer: free_mileage_buffer
                    .map(mileage_limit_of)
                    .transpose()
                    .map_err(ctx.error())?,
                is_active,
                is_default,
                is_best_offer,
                leasing_company_id: leasing_company_id.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the specified `LeasingVariant`.
    ///
    /// Omitted arguments leave the corresponding fields untouched.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LEASING_VARIANT_NOT_EXISTS` - the `LeasingVariant` with the
    ///                                  specified ID does not exist;
    /// - `INVALID_DURATION_MONTHS` - the provided `duration` is out of
    ///                               bounds;
    /// - `INVALID_MILEAGE_LIMIT` - the provided `annualMileageLimit` or
    ///                             `freeMileageBuffer` is out of bounds;
    /// - `LEASING_VARIANT_SLUG_OCCUPIED` - the provided `slug` is occupied by
    ///                                     another `LeasingVariant` of this
    ///                                     `Offer`.
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "updateLeasingVariant",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_leasing_variant(
        id: api::leasing_variant::Id,
        slug: Option<api::leasing_variant::Slug>,
        duration: Option<i32>,
        annual_mileage_limit: Option<i32>,
        vat_rate: Option<Percent>,
        price_with_vat: Option<Money>,
        price_without_vat: Option<Money>,
        original_price_with_vat: Option<Money>,
        original_price_without_vat: Option<Money>,
        down_payment: Option<Money>,
        deposit: Option<Money>,
        setup_fee: Option<Money>,
        valid_from: Option<DateTime>,
        valid_until: Option<DateTime>,
        services: Option<api::leasing_variant::IncludedServicesInput>,
        wear_tolerance: Option<Percent>,
        free_mileage_buffer: Option<i32>,
        is_active: Option<bool>,
        is_default: Option<bool>,
        is_best_offer: Option<bool>,
        leasing_company_id: Option<api::catalog::LeasingCompanyId>,
        ctx: &Context,
    ) -> Result<api::LeasingVariant, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::UpdateLeasingVariant {
                actor,
                id: id.into(),
                fields: command::update_leasing_variant::Fields {
                    slug: slug.map(Into::into),
                    duration: duration
                        .map(duration_months_of)
                        .transpose()
                        .map_err(ctx.error())?,
                    annual_mileage_limit: annual_mileage_limit
                        .map(mileage_limit_of)
                        .transpose()
                        .map_err(ctx.error())?,
                    vat_rate,
                    price_with_vat,
                    price_without_vat,
                    original_price_with_vat: original_price_with_vat
                        .map(Some),
                    original_price_without_vat: original_price_without_vat
                        .map(Some),
                    down_payment: down_payment.map(Some),
                    deposit: deposit.map(Some),
                    setup_fee: setup_fee.map(Some),
                    valid_from: valid_from.map(|d| Some(d.coerce())),
                    valid_until: valid_until.map(|d| Some(d.coerce())),
                    services: services.map(Into::into),
                    wear_tolerance: wear_tolerance.map(Some),
                    free_mileage_buffer: free_mileage_buffer
                        .map(|b| mileage_limit_of(b).map(Some))
                        .transpose()
                        .map_err(ctx.error())?,
                    is_active,
                    is_default,
                    is_best_offer,
                    leasing_company_id: leasing_company_id
                        .map(|c| Some(c.into())),
                },
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the specified `LeasingVariant`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LEASING_VARIANT_NOT_EXISTS` - the `LeasingVariant` with the
    ///                                  specified ID does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "deleteLeasingVariant",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_leasing_variant(
        id: api::leasing_variant::Id,
        ctx: &Context,
    ) -> Result<api::LeasingVariant, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::DeleteLeasingVariant {
                actor,
                id: id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new `ColorVariant` of the specified operational leasing
    /// `Offer`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `OFFER_NOT_EXISTS` - the `Offer` with the specified ID does not
    ///                        exist;
    /// - `OFFER_NOT_OPERATIONAL_LEASING` - the `Offer` with the specified ID
    ///                                     is not an operational leasing one;
    /// - `COLOR_PAIR_OCCUPIED` - another `ColorVariant` of this `Offer`
    ///                           already uses the provided color pair.
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    #[tracing::instrument(
        skip_all,
        fields(
            exterior_color_id = %exterior_color_id,
            gql.name = "createColorVariant",
            offer_id = %offer_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_color_variant(
        offer_id: api::offer::Id,
        exterior_color_id: api::catalog::ColorId,
        interior_color_id: Option<api::catalog::ColorId>,
        name: api::color_variant::DisplayName,
        #[graphql(default = false)] is_default: bool,
        gallery_id: Option<api::catalog::GalleryId>,
        ctx: &Context,
    ) -> Result<api::ColorVariant, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::CreateColorVariant {
                actor,
                offer_id: offer_id.into(),
                exterior_color_id: exterior_color_id.into(),
                interior_color_id: interior_color_id.map(Into::into),
                name: name.into(),
                is_default,
                gallery_id: gallery_id.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the specified `ColorVariant`.
    ///
    /// Omitted arguments leave the corresponding fields untouched.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `COLOR_VARIANT_NOT_EXISTS` - the `ColorVariant` with the specified
    ///                                ID does not exist;
    /// - `COLOR_PAIR_OCCUPIED` - another `ColorVariant` of this `Offer`
    ///                           already uses the provided color pair.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "updateColorVariant",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_color_variant(
        id: api::color_variant::Id,
        exterior_color_id: Option<api::catalog::ColorId>,
        interior_color_id: Option<api::catalog::ColorId>,
        name: Option<api::color_variant::DisplayName>,
        is_default: Option<bool>,
        gallery_id: Option<api::catalog::GalleryId>,
        ctx: &Context,
    ) -> Result<api::ColorVariant, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::UpdateColorVariant {
                actor,
                id: id.into(),
                fields: command::update_color_variant::Fields {
                    exterior_color_id: exterior_color_id.map(Into::into),
                    interior_color_id: interior_color_id
                        .map(|c| Some(c.into())),
                    name: name.map(Into::into),
                    is_default,
                    gallery_id: gallery_id.map(|g| Some(g.into())),
                },
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the specified `ColorVariant`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `COLOR_VARIANT_NOT_EXISTS` - the `ColorVariant` with the specified
    ///                                ID does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "deleteColorVariant",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_color_variant(
        id: api::color_variant::Id,
        ctx: &Context,
    ) -> Result<api::ColorVariant, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::DeleteColorVariant {
                actor,
                id: id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Attaches a new `OptionalEquipment` item to the specified operational
    /// leasing `Offer`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `OFFER_NOT_EXISTS` - the `Offer` with the specified ID does not
    ///                        exist;
    /// - `OFFER_NOT_OPERATIONAL_LEASING` - the `Offer` with the specified ID
    ///                                     is not an operational leasing one;
    /// - `OPTIONAL_EQUIPMENT_OCCUPIED` - the specified equipment item is
    ///                                   already attached to this `Offer`.
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    #[tracing::instrument(
        skip_all,
        fields(
            equipment_item_id = %equipment_item_id,
            gql.name = "createOptionalEquipment",
            offer_id = %offer_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_optional_equipment(
        offer_id: api::offer::Id,
        equipment_item_id: api::catalog::EquipmentItemId,
        additional_price: Money,
        price_period: api::optional_equipment::PricePeriod,
        #[graphql(default = false)] is_default_selected: bool,
        #[graphql(default = true)] is_available: bool,
        ctx: &Context,
    ) -> Result<api::OptionalEquipment, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::CreateOptionalEquipment {
                actor,
                offer_id: offer_id.into(),
                equipment_item_id: equipment_item_id.into(),
                additional_price,
                price_period: price_period.into(),
                is_default_selected,
                is_available,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the specified `OptionalEquipment`.
    ///
    /// Omitted arguments leave the corresponding fields untouched. The
    /// equipment item itself cannot be changed.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `OPTIONAL_EQUIPMENT_NOT_EXISTS` - the `OptionalEquipment` with the
    ///                                     specified ID does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "updateOptionalEquipment",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_optional_equipment(
        id: api::optional_equipment::Id,
        additional_price: Option<Money>,
        price_period: Option<api::optional_equipment::PricePeriod>,
        is_default_selected: Option<bool>,
        is_available: Option<bool>,
        ctx: &Context,
    ) -> Result<api::OptionalEquipment, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::UpdateOptionalEquipment {
                actor,
                id: id.into(),
                fields: command::update_optional_equipment::Fields {
                    additional_price,
                    price_period: price_period.map(Into::into),
                    is_default_selected,
                    is_available,
                },
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Detaches the specified `OptionalEquipment` from its `Offer`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `OPTIONAL_EQUIPMENT_NOT_EXISTS` - the `OptionalEquipment` with the
    ///                                     specified ID does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "deleteOptionalEquipment",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_optional_equipment(
        id: api::optional_equipment::Id,
        ctx: &Context,
    ) -> Result<api::OptionalEquipment, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::DeleteOptionalEquipment {
                actor,
                id: id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new `Calculation` for the specified individual `Offer`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `OFFER_NOT_EXISTS` - the `Offer` with the specified ID does not
    ///                        exist;
    /// - `OFFER_NOT_INDIVIDUAL` - the `Offer` with the specified ID is not
    ///                            an individual one.
    #[tracing::instrument(
        skip_all,
        fields(
            availability = ?availability,
            gql.name = "createCalculation",
            offer_id = %offer_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_calculation(
        offer_id: api::offer::Id,
        availability: api::calculation::Availability,
        exterior_color_id: Option<api::catalog::ColorId>,
        interior_color_id: Option<api::catalog::ColorId>,
        ctx: &Context,
    ) -> Result<api::Calculation, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::CreateCalculation {
                actor,
                offer_id: offer_id.into(),
                availability: availability.into(),
                exterior_color_id: exterior_color_id.map(Into::into),
                interior_color_id: interior_color_id.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Adds a new `CalculationFeature` to the specified `Calculation`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `CALCULATION_NOT_EXISTS` - the `Calculation` with the specified ID
    ///                              does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            calculation_id = %calculation_id,
            gql.name = "addCalculationFeature",
            name = %name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn add_calculation_feature(
        calculation_id: api::calculation::Id,
        name: api::calculation::FeatureName,
        description: Option<api::offer::Description>,
        ctx: &Context,
    ) -> Result<api::calculation::Feature, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::AddCalculationFeature {
                actor,
                calculation_id: calculation_id.into(),
                name: name.into(),
                description: description.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the specified `Calculation` with all its features.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `CALCULATION_NOT_EXISTS` - the `Calculation` with the specified ID
    ///                              does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "deleteCalculation",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_calculation(
        id: api::calculation::Id,
        ctx: &Context,
    ) -> Result<api::Calculation, Error> {
        let actor = ctx.current_session().await?.actor;
        ctx.service()
            .execute(command::DeleteCalculation {
                actor,
                id: id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

/// Update of the operational leasing fields of an `Offer`.
///
/// Omitted fields are left untouched.
#[derive(Clone, Debug, GraphQLInputObject)]
pub struct UpdateOperationalLeasingFields {
    /// New headline leasing duration, in months.
    pub duration_months: Option<i32>,

    /// New headline monthly payment.
    pub monthly_payment: Option<Money>,

    /// New headline annual mileage limit, in kilometers.
    pub annual_mileage_limit: Option<i32>,
}

impl UpdateOperationalLeasingFields {
    /// Validates these fields into the command representation.
    fn try_into_fields(
        self,
    ) -> Result<command::update_offer::OperationalLeasingFields, Error> {
        Ok(command::update_offer::OperationalLeasingFields {
            duration_months: self
                .duration_months
                .map(|m| duration_months_of(m).map(Some))
                .transpose()?,
            monthly_payment: self.monthly_payment.map(Some),
            annual_mileage_limit: self
                .annual_mileage_limit
                .map(|l| mileage_limit_of(l).map(Some))
                .transpose()?,
        })
    }
}

/// Update of the direct purchase fields of an `Offer`.
///
/// Omitted fields are left untouched.
#[derive(Clone, Debug, GraphQLInputObject)]
pub struct UpdateDirectPurchaseFields {
    /// New discount off the total price.
    pub discount: Option<Money>,

    /// New manufacturer warranty, in years.
    pub warranty_years: Option<i32>,
}

impl UpdateDirectPurchaseFields {
    /// Validates these fields into the command representation.
    fn try_into_fields(
        self,
    ) -> Result<command::update_offer::DirectPurchaseFields, Error> {
        Ok(command::update_offer::DirectPurchaseFields {
            discount: self.discount.map(Some),
            warranty_years: self
                .warranty_years
                .map(|y| warranty_years_of(y).map(Some))
                .transpose()?,
        })
    }
}

/// Update of the individual fields of an `Offer`.
///
/// Omitted fields are left untouched.
#[derive(Clone, Debug, GraphQLInputObject)]
pub struct UpdateIndividualFields {
    /// New customer the `Offer` is prepared for.
    pub customer_id: Option<api::catalog::CustomerId>,

    /// New manager working on the `Offer`.
    pub assignee_id: Option<api::user::Id>,

    /// New internal notes about the negotiation.
    pub internal_notes: Option<api::offer::Note>,

    /// New deadline for responding to the customer.
    pub response_deadline: Option<DateTime>,
}

impl From<UpdateIndividualFields> for command::update_offer::IndividualFields {
    fn from(fields: UpdateIndividualFields) -> Self {
        Self {
            customer_id: fields.customer_id.map(Into::into),
            assignee_id: fields.assignee_id.map(|a| Some(a.into())),
            internal_notes: fields.internal_notes.map(|n| Some(n.into())),
            response_deadline: fields
                .response_deadline
                .map(|d| Some(d.coerce())),
        }
    }
}

/// Validates the provided [`Money`] as an `Offer`'s total price.
fn total_price_of(price: Money) -> Result<domain::offer::TotalPrice, Error> {
    domain::offer::TotalPrice::new(price)
        .ok_or_else(|| PriceError::NegativeTotalPrice.into())
}

/// Validates the provided months as a leasing duration.
fn duration_months_of(
    months: i32,
) -> Result<domain::leasing_variant::DurationMonths, Error> {
    i16::try_from(months)
        .ok()
        .and_then(domain::leasing_variant::DurationMonths::new)
        .ok_or_else(|| TermsError::InvalidDurationMonths.into())
}

/// Validates the provided kilometers as a mileage limit.
fn mileage_limit_of(
    kilometers: i32,
) -> Result<domain::leasing_variant::MileageLimit, Error> {
    domain::leasing_variant::MileageLimit::new(kilometers)
        .ok_or_else(|| TermsError::InvalidMileageLimit.into())
}

/// Validates the provided years as a manufacturer warranty.
fn warranty_years_of(
    years: i32,
) -> Result<domain::offer::direct_purchase::WarrantyYears, Error> {
    i16::try_from(years)
        .ok()
        .and_then(domain::offer::direct_purchase::WarrantyYears::new)
        .ok_or_else(|| TermsError::InvalidWarrantyYears.into())
}

define_error! {
    enum PriceError {
        #[code = "NEGATIVE_TOTAL_PRICE"]
        #[status = BAD_REQUEST]
        #[message = "`Offer` total price cannot be negative"]
        NegativeTotalPrice,
    }
}

define_error! {
    enum TermsError {
        #[code = "INVALID_DURATION_MONTHS"]
        #[status = BAD_REQUEST]
        #[message = "Leasing duration must be between 12 and 60 months"]
        InvalidDurationMonths,

        #[code = "INVALID_MILEAGE_LIMIT"]
        #[status = BAD_REQUEST]
        #[message = "Mileage limit must be between 5000 and 100000 \
                     kilometers"]
        InvalidMileageLimit,

        #[code = "INVALID_WARRANTY_YEARS"]
        #[status = BAD_REQUEST]
        #[message = "Manufacturer warranty must be between 1 and 10 years"]
        InvalidWarrantyYears,
    }
}

impl AsError for command::create_operational_leasing_offer::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "OFFER_SLUG_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "`OfferSlug` is occupied by another `Offer`"]
                SlugOccupied,

                #[code = "OFFER_PUBLIC_ID_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "`OfferPublicId` is occupied by another `Offer`"]
                PublicIdOccupied,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::SlugOccupied(_) => Some(Error::SlugOccupied.into()),
            Self::PublicIdOccupied(_) => Some(Error::PublicIdOccupied.into()),
        }
    }
}

impl AsError for command::create_direct_purchase_offer::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "OFFER_SLUG_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "`OfferSlug` is occupied by another `Offer`"]
                SlugOccupied,

                #[code = "OFFER_PUBLIC_ID_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "`OfferPublicId` is occupied by another `Offer`"]
                PublicIdOccupied,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::SlugOccupied(_) => Some(Error::SlugOccupied.into()),
            Self::PublicIdOccupied(_) => Some(Error::PublicIdOccupied.into()),
        }
    }
}

impl AsError for command::create_individual_offer::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "OFFER_SLUG_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "`OfferSlug` is occupied by another `Offer`"]
                SlugOccupied,

                #[code = "OFFER_PUBLIC_ID_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "`OfferPublicId` is occupied by another `Offer`"]
                PublicIdOccupied,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::SlugOccupied(_) => Some(Error::SlugOccupied.into()),
            Self::PublicIdOccupied(_) => Some(Error::PublicIdOccupied.into()),
        }
    }
}

impl AsError for command::update_offer::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "OFFER_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Offer` with the specified ID does not exist"]
                NotExists,

                #[code = "OFFER_KIND_MISMATCH"]
                #[status = CONFLICT]
                #[message = "Kind-specific arguments do not match the kind \
                             of the `Offer`"]
                KindMismatch,

                #[code = "OFFER_SLUG_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "`OfferSlug` is occupied by another `Offer`"]
                SlugOccupied,

                #[code = "OFFER_PUBLIC_ID_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "`OfferPublicId` is occupied by another `Offer`"]
                PublicIdOccupied,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::OfferNotExists(_) => Some(Error::NotExists.into()),
            Self::KindMismatch(_) => Some(Error::KindMismatch.into()),
            Self::SlugOccupied(_) => Some(Error::SlugOccupied.into()),
            Self::PublicIdOccupied(_) => Some(Error::PublicIdOccupied.into()),
        }
    }
}

impl AsError for command::update_individual_offer_status::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "OFFER_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Offer` with the specified ID does not exist"]
                NotExists,

                #[code = "OFFER_NOT_INDIVIDUAL"]
                #[status = CONFLICT]
                #[message = "`Offer` with the specified ID is not an \
                             individual one"]
                NotIndividual,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::OfferNotExists(_) => Some(Error::NotExists.into()),
            Self::NotIndividual(_) => Some(Error::NotIndividual.into()),
        }
    }
}

impl AsError for command::delete_offer::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "OFFER_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Offer` with the specified ID does not exist"]
                NotExists,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::OfferNotExists(_) => Some(Error::NotExists.into()),
        }
    }
}

impl AsError for command::create_leasing_variant::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "OFFER_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Offer` with the specified ID does not exist"]
                OfferNotExists,

                #[code = "OFFER_NOT_OPERATIONAL_LEASING"]
                #[status = CONFLICT]
                #[message = "`Offer` with the specified ID is not an \
                             operational leasing one"]
                NotOperationalLeasing,

                #[code = "LEASING_VARIANT_SLUG_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "`LeasingVariantSlug` is occupied by another \
                             `LeasingVariant` of this `Offer`"]
                SlugOccupied,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::OfferNotExists(_) => Some(Error::OfferNotExists.into()),
            Self::NotOperationalLeasing(_) => {
                Some(Error::NotOperationalLeasing.into())
            }
            Self::SlugOccupied(_) => Some(Error::SlugOccupied.into()),
        }
    }
}

impl AsError for command::update_leasing_variant::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "LEASING_VARIANT_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`LeasingVariant` with the specified ID does not \
                             exist"]
                NotExists,

                #[code = "LEASING_VARIANT_SLUG_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "`LeasingVariantSlug` is occupied by another \
                             `LeasingVariant` of this `Offer`"]
                SlugOccupied,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::VariantNotExists(_) => Some(Error::NotExists.into()),
            Self::SlugOccupied(_) => Some(Error::SlugOccupied.into()),
        }
    }
}

impl AsError for command::delete_leasing_variant::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "LEASING_VARIANT_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`LeasingVariant` with the specified ID does not \
                             exist"]
                NotExists,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::VariantNotExists(_) => Some(Error::NotExists.into()),
        }
    }
}

impl AsError for command::create_color_variant::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "OFFER_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Offer` with the specified ID does not exist"]
                OfferNotExists,

                #[code = "OFFER_NOT_OPERATIONAL_LEASING"]
                #[status = CONFLICT]
                #[message = "`Offer` with the specified ID is not an \
                             operational leasing one"]
                NotOperationalLeasing,

                #[code = "COLOR_PAIR_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "Another `ColorVariant` of this `Offer` already \
                             uses the provided color pair"]
                ColorPairOccupied,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::OfferNotExists(_) => Some(Error::OfferNotExists.into()),
            Self::NotOperationalLeasing(_) => {
                Some(Error::NotOperationalLeasing.into())
            }
            Self::ColorPairOccupied(_) => {
                Some(Error::ColorPairOccupied.into())
            }
        }
    }
}

impl AsError for command::update_color_variant::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "COLOR_VARIANT_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`ColorVariant` with the specified ID does not \
                             exist"]
                NotExists,

                #[code = "COLOR_PAIR_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "Another `ColorVariant` of this `Offer` already \
                             uses the provided color pair"]
                ColorPairOccupied,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::VariantNotExists(_) => Some(Error::NotExists.into()),
            Self::ColorPairOccupied(_) => {
                Some(Error::ColorPairOccupied.into())
            }
        }
    }
}

impl AsError for command::delete_color_variant::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "COLOR_VARIANT_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`ColorVariant` with the specified ID does not \
                             exist"]
                NotExists,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::VariantNotExists(_) => Some(Error::NotExists.into()),
        }
    }
}

impl AsError for command::create_optional_equipment::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "OFFER_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Offer` with the specified ID does not exist"]
                OfferNotExists,

                #[code = "OFFER_NOT_OPERATIONAL_LEASING"]
                #[status = CONFLICT]
                #[message = "`Offer` with the specified ID is not an \
                             operational leasing one"]
                NotOperationalLeasing,

                #[code = "OPTIONAL_EQUIPMENT_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "The specified equipment item is already \
                             attached to this `Offer`"]
                EquipmentOccupied,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::OfferNotExists(_) => Some(Error::OfferNotExists.into()),
            Self::NotOperationalLeasing(_) => {
                Some(Error::NotOperationalLeasing.into())
            }
            Self::EquipmentOccupied(_) => {
                Some(Error::EquipmentOccupied.into())
            }
        }
    }
}

impl AsError for command::update_optional_equipment::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "OPTIONAL_EQUIPMENT_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`OptionalEquipment` with the specified ID does \
                             not exist"]
                NotExists,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::EquipmentNotExists(_) => Some(Error::NotExists.into()),
        }
    }
}

impl AsError for command::delete_optional_equipment::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "OPTIONAL_EQUIPMENT_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`OptionalEquipment` with the specified ID does \
                             not exist"]
                NotExists,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::EquipmentNotExists(_) => Some(Error::NotExists.into()),
        }
    }
}

impl AsError for command::create_calculation::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "OFFER_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Offer` with the specified ID does not exist"]
                OfferNotExists,

                #[code = "OFFER_NOT_INDIVIDUAL"]
                #[status = CONFLICT]
                #[message = "`Offer` with the specified ID is not an \
                             individual one"]
                NotIndividual,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::OfferNotExists(_) => Some(Error::OfferNotExists.into()),
            Self::NotIndividual(_) => Some(Error::NotIndividual.into()),
        }
    }
}

impl AsError for command::add_calculation_feature::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "CALCULATION_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Calculation` with the specified ID does not \
                             exist"]
                NotExists,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::CalculationNotExists(_) => Some(Error::NotExists.into()),
        }
    }
}

impl AsError for command::delete_calculation::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "CALCULATION_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Calculation` with the specified ID does not \
                             exist"]
                NotExists,
            }
        }

        match self {
            Self::Access(e) => e.try_as_error(),
            Self::Db(e) => e.try_as_error(),
            Self::Forbidden(_) => Some(api::PermissionError::Action.into()),
            Self::CalculationNotExists(_) => Some(Error::NotExists.into()),
        }
    }
}
