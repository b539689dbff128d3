//! [`Command`] for creating a new [`LeasingVariant`].

use common::{
    operations::{By, Commit, Insert, Lock, Select, Transact, Transacted, Update},
    DateTime, Money, Percent,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    access::{self, Actor, Granted, Permission},
    domain::{
        catalog::leasing_company, leasing_variant, offer, user, LeasingVariant,
        Offer,
    },
    infra::{database, Database},
    read::leasing_variant::{NoBestOffer, NoDefault},
    Access, Service,
};

use super::Command;

/// [`Command`] for creating a new [`LeasingVariant`] of an
/// [`offer::OperationalLeasing`].
///
/// If the new [`LeasingVariant`] is marked default or best offer, the flag
/// is first cleared on all its siblings, keeping at most one holder per
/// [`Offer`].
#[derive(Clone, Debug)]
pub struct CreateLeasingVariant {
    /// [`Actor`] creating the [`LeasingVariant`].
    pub actor: Actor,

    /// ID of the [`Offer`] to create the [`LeasingVariant`] of.
    pub offer_id: offer::Id,

    /// URL [`Slug`] of the new [`LeasingVariant`], unique per [`Offer`].
    ///
    /// [`Slug`]: leasing_variant::Slug
    pub slug: leasing_variant::Slug,

    /// Leasing duration, in months.
    pub duration: leasing_variant::DurationMonths,

    /// Annual mileage limit, in kilometers.
    pub annual_mileage_limit: leasing_variant::MileageLimit,

    /// VAT rate applied to the prices.
    pub vat_rate: Percent,

    /// Monthly price with VAT included.
    pub price_with_vat: Money,

    /// Monthly price without VAT.
    pub price_without_vat: Money,

    /// Monthly price with VAT before a discount, if any.
    pub original_price_with_vat: Option<Money>,

    /// Monthly price without VAT before a discount, if any.
    pub original_price_without_vat: Option<Money>,

    /// One-time down payment.
    pub down_payment: Option<Money>,

    /// Refundable deposit.
    pub deposit: Option<Money>,

    /// One-time setup fee.
    pub setup_fee: Option<Money>,

    /// [`DateTime`] the new [`LeasingVariant`] is valid from.
    pub valid_from: Option<leasing_variant::ValidityDateTime>,

    /// [`DateTime`] the new [`LeasingVariant`] is valid until.
    pub valid_until: Option<leasing_variant::ValidityDateTime>,

    /// Services included in the monthly price.
    pub services: leasing_variant::IncludedServices,

    /// Tolerated vehicle wear on return.
    pub wear_tolerance: Option<Percent>,

    /// Mileage overrun not billed on return, in kilometers.
    pub free_mileage_buffer: Option<leasing_variant::MileageLimit>,

    /// Indicator whether the new [`LeasingVariant`] is active.
    pub is_active: bool,

    /// Indicator whether the new [`LeasingVariant`] is the default one of
    /// its [`Offer`].
    pub is_default: bool,

    /// Indicator whether the new [`LeasingVariant`] is the best offer of its
    /// [`Offer`].
    pub is_best_offer: bool,

    /// ID of the leasing company providing the terms.
    pub leasing_company_id: Option<leasing_company::Id>,
}

impl<Db, Acl> Command<CreateLeasingVariant> for Service<Db, Acl>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Acl: Access<Granted, Ok = bool, Err = Traced<access::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Offer>, offer::Id>>,
            Ok = Option<Offer>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<LeasingVariant>, (offer::Id, leasing_variant::Slug)>>,
            Ok = Option<LeasingVariant>,
            Err = Traced<database::Error>,
        > + Database<Lock<By<Offer, offer::Id>>, Err = Traced<database::Error>>
        + Database<Update<By<NoDefault, offer::Id>>, Err = Traced<database::Error>>
        + Database<Update<By<NoBestOffer, offer::Id>>, Err = Traced<database::Error>>
        + Database<Insert<LeasingVariant>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = LeasingVariant;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateLeasingVariant,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateLeasingVariant {
            actor,
            offer_id,
            slug,
            duration,
            annual_mileage_limit,
            vat_rate,
            price_with_vat,
            price_without_vat,
            original_price_with_vat,
            original_price_without_vat,
            down_payment,
            deposit,
            setup_fee,
            valid_from,
            valid_until,
            services,
            wear_tolerance,
            free_mileage_buffer,
            is_active,
            is_default,
            is_best_offer,
            leasing_company_id,
        } = cmd;

        let actor_id = actor.id;
        let granted = self
            .acl()
            .execute(Granted {
                actor,
                permission: Permission::ManageLeasingVariants,
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !granted {
            return Err(tracerr::new!(E::Forbidden(actor_id)));
        }

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid concurrent actions upon the same `Offer`.
        tx.execute(Lock(By::new(offer_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let offer = tx
            .execute(Select(By::<Option<Offer>, offer::Id>::new(offer_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::OfferNotExists(offer_id))
            .map_err(tracerr::wrap!())?;
        if offer.kind() != offer::Kind::OperationalLeasing {
            return Err(tracerr::new!(E::NotOperationalLeasing(offer_id)));
        }

        let occupied = tx
            .execute(Select(By::<Option<LeasingVariant>, _>::new((
                offer_id,
                slug.clone(),
            ))))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if occupied.is_some() {
            return Err(tracerr::new!(E::SlugOccupied(slug)));
        }

        if is_default {
            tx.execute(Update(By::<NoDefault, _>::new(offer_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
        }
        if is_best_offer {
            tx.execute(Update(By::<NoBestOffer, _>::new(offer_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
        }

        let variant = LeasingVariant {
            id: leasing_variant::Id::new(),
            offer_id,
            slug,
            duration,
            annual_mileage_limit,
            vat_rate,
            price_with_vat,
            price_without_vat,
            original_price_with_vat,
            original_price_without_vat,
            down_payment,
            deposit,
            setup_fee,
            valid_from,
            valid_until,
            services,
            wear_tolerance,
            free_mileage_buffer,
            is_active,
            is_default,
            is_best_offer,
            leasing_company_id,
            created_at: DateTime::now().coerce(),
        };
        tx.execute(Insert(variant.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(variant)
    }
}

/// Error of [`CreateLeasingVariant`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Access`] decision failed.
    ///
    /// [`Access`]: crate::Access
    #[display("`Access` decision failed: {_0}")]
    #[from]
    Access(access::Error),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Actor`] is not permitted to manage [`LeasingVariant`]s.
    #[display("`User(id: {_0})` is not permitted to manage `LeasingVariant`s")]
    Forbidden(#[error(not(source))] user::Id),

    /// [`Offer`] with the provided ID does not exist.
    #[display("`Offer(id: {_0})` does not exist")]
    OfferNotExists(#[error(not(source))] offer::Id),

    /// [`Offer`] with the provided ID is not an
    /// [`offer::OperationalLeasing`].
    #[display("`Offer(id: {_0})` is not an operational leasing offer")]
    NotOperationalLeasing(#[error(not(source))] offer::Id),

    /// Another [`LeasingVariant`] of the [`Offer`] already uses the provided
    /// [`leasing_variant::Slug`].
    #[display("`LeasingVariant(slug: {_0})` already exists for the `Offer`")]
    SlugOccupied(#[error(not(source))] leasing_variant::Slug),
}
