//! [`Command`] for updating an existing [`LeasingVariant`].

use common::{
    operations::{By, Commit, Lock, Select, Transact, Transacted, Update},
    Money, Percent,
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

/// [`Command`] for updating an existing [`LeasingVariant`].
///
/// Setting `is_default` or `is_best_offer` first clears the flag on all the
/// siblings, keeping at most one holder per [`Offer`].
///
/// [`Offer`]: crate::domain::Offer
#[derive(Clone, Debug)]
pub struct UpdateLeasingVariant {
    /// [`Actor`] updating the [`LeasingVariant`].
    pub actor: Actor,

    /// ID of the [`LeasingVariant`] to update.
    pub id: leasing_variant::Id,

    /// [`Fields`] to update.
    pub fields: Fields,
}

/// Fields of a [`LeasingVariant`] to update.
///
/// The outer [`Option`] means "leave untouched" when [`None`], the inner one
/// (where present) carries the new nullable value.
#[derive(Clone, Debug, Default)]
pub struct Fields {
    /// New URL [`Slug`] of the [`LeasingVariant`].
    ///
    /// [`Slug`]: leasing_variant::Slug
    pub slug: Option<leasing_variant::Slug>,

    /// New leasing duration.
    pub duration: Option<leasing_variant::DurationMonths>,

    /// New annual mileage limit.
    pub annual_mileage_limit: Option<leasing_variant::MileageLimit>,

    /// New VAT rate.
    pub vat_rate: Option<Percent>,

    /// New monthly price with VAT.
    pub price_with_vat: Option<Money>,

    /// New monthly price without VAT.
    pub price_without_vat: Option<Money>,

    /// New pre-discount monthly price with VAT.
    pub original_price_with_vat: Option<Option<Money>>,

    /// New pre-discount monthly price without VAT.
    pub original_price_without_vat: Option<Option<Money>>,

    /// New one-time down payment.
    pub down_payment: Option<Option<Money>>,

    /// New refundable deposit.
    pub deposit: Option<Option<Money>>,

    /// New one-time setup fee.
    pub setup_fee: Option<Option<Money>>,

    /// New [`DateTime`] the [`LeasingVariant`] is valid from.
    ///
    /// [`DateTime`]: common::DateTime
    pub valid_from: Option<Option<leasing_variant::ValidityDateTime>>,

    /// New [`DateTime`] the [`LeasingVariant`] is valid until.
    ///
    /// [`DateTime`]: common::DateTime
    pub valid_until: Option<Option<leasing_variant::ValidityDateTime>>,

    /// New set of services included in the monthly price.
    pub services: Option<leasing_variant::IncludedServices>,

    /// New tolerated vehicle wear on return.
    pub wear_tolerance: Option<Option<Percent>>,

    /// New mileage overrun not billed on return.
    pub free_mileage_buffer: Option<Option<leasing_variant::MileageLimit>>,

    /// New `is_active` value of the [`LeasingVariant`].
    pub is_active: Option<bool>,

    /// New `is_default` value of the [`LeasingVariant`].
    pub is_default: Option<bool>,

    /// New `is_best_offer` value of the [`LeasingVariant`].
    pub is_best_offer: Option<bool>,

    /// New leasing company providing the terms.
    pub leasing_company_id: Option<Option<leasing_company::Id>>,
}

impl<Db, Acl> Command<UpdateLeasingVariant> for Service<Db, Acl>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<LeasingVariant>, leasing_variant::Id>>,
            Ok = Option<LeasingVariant>,
            Err = Traced<database::Error>,
        >,
    Acl: Access<Granted, Ok = bool, Err = Traced<access::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<LeasingVariant>, leasing_variant::Id>>,
            Ok = Option<LeasingVariant>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<LeasingVariant>, (offer::Id, leasing_variant::Slug)>>,
            Ok = Option<LeasingVariant>,
            Err = Traced<database::Error>,
        > + Database<Lock<By<Offer, offer::Id>>, Err = Traced<database::Error>>
        + Database<Update<By<NoDefault, offer::Id>>, Err = Traced<database::Error>>
        + Database<Update<By<NoBestOffer, offer::Id>>, Err = Traced<database::Error>>
        + Database<Update<LeasingVariant>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = LeasingVariant;
    type Err = Traced<ExecutionError>;

    #[expect(clippy::too_many_lines, reason = "field-by-field application")]
    async fn execute(
        &self,
        cmd: UpdateLeasingVariant,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateLeasingVariant { actor, id, fields } = cmd;

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

        let offer_id = self
            .database()
            .execute(Select(By::<Option<LeasingVariant>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::VariantNotExists(id))
            .map_err(tracerr::wrap!())?
            .offer_id;

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

        let mut variant = tx
            .execute(Select(By::<Option<LeasingVariant>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::VariantNotExists(id))
            .map_err(tracerr::wrap!())?;

        if let Some(new_slug) = &fields.slug {
            if variant.slug != *new_slug {
                let occupied = tx
                    .execute(Select(By::<Option<LeasingVariant>, _>::new((
                        offer_id,
                        new_slug.clone(),
                    ))))
                    .await
                    .map_err(tracerr::map_from_and_wrap!(=> E))?;
                if occupied.is_some_and(|v| v.id != id) {
                    return Err(tracerr::new!(E::SlugOccupied(
                        new_slug.clone()
                    )));
                }
            }
        }

        if fields.is_default == Some(true) {
            tx.execute(Update(By::<NoDefault, _>::new(offer_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
        }
        if fields.is_best_offer == Some(true) {
            tx.execute(Update(By::<NoBestOffer, _>::new(offer_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
        }

        let Fields {
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
        } = fields;

        if let Some(v) = slug {
            variant.slug = v;
        }
        if let Some(v) = duration {
            variant.duration = v;
        }
        if let Some(v) = annual_mileage_limit {
            variant.annual_mileage_limit = v;
        }
        if let Some(v) = vat_rate {
            variant.vat_rate = v;
        }
        if let Some(v) = price_with_vat {
            variant.price_with_vat = v;
        }
        if let Some(v) = price_without_vat {
            variant.price_without_vat = v;
        }
        if let Some(v) = original_price_with_vat {
            variant.original_price_with_vat = v;
        }
        if let Some(v) = original_price_without_vat {
            variant.original_price_without_vat = v;
        }
        if let Some(v) = down_payment {
            variant.down_payment = v;
        }
        if let Some(v) = deposit {
            variant.deposit = v;
        }
        if let Some(v) = setup_fee {
            variant.setup_fee = v;
        }
        if let Some(v) = valid_from {
            variant.valid_from = v;
        }
        if let Some(v) = valid_until {
            variant.valid_until = v;
        }
        if let Some(v) = services {
            variant.services = v;
        }
        if let Some(v) = wear_tolerance {
            variant.wear_tolerance = v;
        }
        if let Some(v) = free_mileage_buffer {
            variant.free_mileage_buffer = v;
        }
        if let Some(v) = is_active {
            variant.is_active = v;
        }
        if let Some(v) = is_default {
            variant.is_default = v;
        }
        if let Some(v) = is_best_offer {
            variant.is_best_offer = v;
        }
        if let Some(v) = leasing_company_id {
            variant.leasing_company_id = v;
        }

        tx.execute(Update(variant.clone()))
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

/// Error of [`UpdateLeasingVariant`] [`Command`] execution.
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

    /// [`LeasingVariant`] with the provided ID does not exist.
    #[display("`LeasingVariant(id: {_0})` does not exist")]
    VariantNotExists(#[error(not(source))] leasing_variant::Id),

    /// Another [`LeasingVariant`] of the [`Offer`] already uses the provided
    /// [`leasing_variant::Slug`].
    ///
    /// [`Offer`]: crate::domain::Offer
    #[display("`LeasingVariant(slug: {_0})` already exists for the `Offer`")]
    SlugOccupied(#[error(not(source))] leasing_variant::Slug),
}
