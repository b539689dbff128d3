//! [`Command`] for updating an existing [`Offer`].

use common::{
    operations::{By, Commit, Lock, Select, Transact, Transacted, Update},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    access::{self, Actor, Granted, Permission},
    domain::{
        catalog::{brand, customer, engine, file, generation, model},
        leasing_variant,
        offer::{self, direct_purchase, individual},
        user, Offer,
    },
    infra::{database, Database},
    Access, Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Offer`].
///
/// The [`offer::Kind`] of an [`Offer`] never changes: [`Fields`] carrying a
/// payload for a different kind are rejected as a whole.
#[derive(Clone, Debug)]
pub struct UpdateOffer {
    /// [`Actor`] updating the [`Offer`].
    pub actor: Actor,

    /// ID of the [`Offer`] to update.
    pub id: offer::Id,

    /// [`Fields`] to update.
    pub fields: Fields,
}

/// Fields of an [`Offer`] to update.
///
/// The outer [`Option`] means "leave untouched" when [`None`], the inner one
/// (where present) carries the new nullable value.
#[derive(Clone, Debug, Default)]
pub struct Fields {
    /// New URL [`Slug`] of the [`Offer`].
    ///
    /// [`Slug`]: offer::Slug
    pub slug: Option<Option<offer::Slug>>,

    /// New legacy system ID of the [`Offer`].
    pub public_id: Option<Option<offer::PublicId>>,

    /// New model generation of the [`Offer`].
    pub generation_id: Option<generation::Id>,

    /// New vehicle brand of the [`Offer`].
    pub brand_id: Option<Option<brand::Id>>,

    /// New vehicle model of the [`Offer`].
    pub model_id: Option<Option<model::Id>>,

    /// New engine of the [`Offer`].
    pub engine_id: Option<Option<engine::Id>>,

    /// New main image file of the [`Offer`].
    pub file_id: Option<Option<file::Id>>,

    /// New [`TotalPrice`] of the [`Offer`].
    ///
    /// [`TotalPrice`]: offer::TotalPrice
    pub total_price: Option<offer::TotalPrice>,

    /// New [`Description`] of the [`Offer`].
    ///
    /// [`Description`]: offer::Description
    pub description: Option<Option<offer::Description>>,

    /// New internal [`Note`] about the [`Offer`].
    ///
    /// [`Note`]: offer::Note
    pub note: Option<Option<offer::Note>>,

    /// New `is_active` value of the [`Offer`].
    pub is_active: Option<bool>,

    /// New `is_promoted` value of the [`Offer`].
    pub is_promoted: Option<bool>,

    /// New `is_featured` value of the [`Offer`].
    pub is_featured: Option<bool>,

    /// New `is_discounted` value of the [`Offer`].
    pub is_discounted: Option<bool>,

    /// Fields specific to an [`offer::OperationalLeasing`].
    pub operational_leasing: Option<OperationalLeasingFields>,

    /// Fields specific to an [`offer::DirectPurchase`].
    pub direct_purchase: Option<DirectPurchaseFields>,

    /// Fields specific to an [`offer::Individual`].
    pub individual: Option<IndividualFields>,
}

/// [`Fields`] specific to an [`offer::OperationalLeasing`].
#[derive(Clone, Debug, Default)]
pub struct OperationalLeasingFields {
    /// New indicative leasing duration.
    pub duration_months: Option<Option<leasing_variant::DurationMonths>>,

    /// New indicative monthly payment.
    pub monthly_payment: Option<Option<Money>>,

    /// New indicative annual mileage limit.
    pub annual_mileage_limit: Option<Option<leasing_variant::MileageLimit>>,
}

/// [`Fields`] specific to an [`offer::DirectPurchase`].
#[derive(Clone, Debug, Default)]
pub struct DirectPurchaseFields {
    /// New discount applied to the total price.
    pub discount: Option<Option<Money>>,

    /// New warranty length offered with the purchase.
    pub warranty_years: Option<Option<direct_purchase::WarrantyYears>>,
}

/// [`Fields`] specific to an [`offer::Individual`].
#[derive(Clone, Debug, Default)]
pub struct IndividualFields {
    /// New customer the quote is prepared for.
    pub customer_id: Option<customer::Id>,

    /// New back-office user working on the quote.
    pub assignee_id: Option<Option<user::Id>>,

    /// New internal notes on the processing of the quote.
    pub internal_notes: Option<Option<offer::Note>>,

    /// New [`DateTime`] the customer should be responded by.
    pub response_deadline: Option<Option<individual::ResponseDeadline>>,
}

impl<Db, Acl> Command<UpdateOffer> for Service<Db, Acl>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Acl: Access<Granted, Ok = bool, Err = Traced<access::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Offer>, offer::Id>>,
            Ok = Option<Offer>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Offer>, offer::Slug>>,
            Ok = Option<Offer>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Offer>, offer::PublicId>>,
            Ok = Option<Offer>,
            Err = Traced<database::Error>,
        > + Database<Lock<By<Offer, offer::Id>>, Err = Traced<database::Error>>
        + Database<Update<Offer>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Offer;
    type Err = Traced<ExecutionError>;

    #[expect(clippy::too_many_lines, reason = "field-by-field application")]
    async fn execute(&self, cmd: UpdateOffer) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateOffer { actor, id, fields } = cmd;

        let actor_id = actor.id;
        let granted = self
            .acl()
            .execute(Granted {
                actor,
                permission: Permission::UpdateOffer,
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
        tx.execute(Lock(By::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let mut offer = tx
            .execute(Select(By::<Option<Offer>, offer::Id>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::OfferNotExists(id))
            .map_err(tracerr::wrap!())?;

        if let Some(Some(new_slug)) = &fields.slug {
            if offer.slug() != Some(new_slug) {
                let occupied = tx
                    .execute(Select(By::<Option<Offer>, _>::new(
                        new_slug.clone(),
                    )))
                    .await
                    .map_err(tracerr::map_from_and_wrap!(=> E))?;
                if occupied.is_some_and(|o| o.id() != id) {
                    return Err(tracerr::new!(E::SlugOccupied(
                        new_slug.clone()
                    )));
                }
            }
        }
        if let Some(Some(new_public_id)) = &fields.public_id {
            if offer.public_id() != Some(new_public_id) {
                let occupied = tx
                    .execute(Select(By::<Option<Offer>, _>::new(
                        new_public_id.clone(),
                    )))
                    .await
                    .map_err(tracerr::map_from_and_wrap!(=> E))?;
                if occupied.is_some_and(|o| o.id() != id) {
                    return Err(tracerr::new!(E::PublicIdOccupied(
                        new_public_id.clone()
                    )));
                }
            }
        }

        let kind = offer.kind();
        if (fields.operational_leasing.is_some()
            && kind != offer::Kind::OperationalLeasing)
            || (fields.direct_purchase.is_some()
                && kind != offer::Kind::DirectPurchase)
            || (fields.individual.is_some() && kind != offer::Kind::Individual)
        {
            return Err(tracerr::new!(E::KindMismatch(kind)));
        }

        let Fields {
            slug,
            public_id,
            generation_id,
            brand_id,
            model_id,
            engine_id,
            file_id,
            total_price,
            description,
            note,
            is_active,
            is_promoted,
            is_featured,
            is_discounted,
            operational_leasing,
            direct_purchase,
            individual,
        } = fields;

        macro_rules! apply_shared {
            ($o:expr) => {{
                let o = $o;
                if let Some(v) = slug {
                    o.slug = v;
                }
                if let Some(v) = public_id {
                    o.public_id = v;
                }
                if let Some(v) = generation_id {
                    o.generation_id = v;
                }
                if let Some(v) = brand_id {
                    o.brand_id = v;
                }
                if let Some(v) = model_id {
                    o.model_id = v;
                }
                if let Some(v) = engine_id {
                    o.engine_id = v;
                }
                if let Some(v) = file_id {
                    o.file_id = v;
                }
                if let Some(v) = total_price {
                    o.total_price = v;
                }
                if let Some(v) = description {
                    o.description = v;
                }
                if let Some(v) = note {
                    o.note = v;
                }
                if let Some(v) = is_active {
                    o.is_active = v;
                }
                if let Some(v) = is_promoted {
                    o.is_promoted = v;
                }
                if let Some(v) = is_featured {
                    o.is_featured = v;
                }
                if let Some(v) = is_discounted {
                    o.is_discounted = v;
                }
                o.is_public = kind.forces_public();
                o.updated_at = DateTime::now().coerce();
            }};
        }

        match &mut offer {
            Offer::OperationalLeasing(o) => {
                apply_shared!(&mut *o);
                if let Some(f) = operational_leasing {
                    if let Some(v) = f.duration_months {
                        o.duration_months = v;
                    }
                    if let Some(v) = f.monthly_payment {
                        o.monthly_payment = v;
                    }
                    if let Some(v) = f.annual_mileage_limit {
                        o.annual_mileage_limit = v;
                    }
                }
            }
            Offer::DirectPurchase(o) => {
                apply_shared!(&mut *o);
                if let Some(f) = direct_purchase {
                    if let Some(v) = f.discount {
                        o.discount = v;
                    }
                    if let Some(v) = f.warranty_years {
                        o.warranty_years = v;
                    }
                }
            }
            Offer::Individual(o) => {
                apply_shared!(&mut *o);
                if let Some(f) = individual {
                    if let Some(v) = f.customer_id {
                        o.customer_id = v;
                    }
                    if let Some(v) = f.assignee_id {
                        o.assignee_id = v;
                    }
                    if let Some(v) = f.internal_notes {
                        o.internal_notes = v;
                    }
                    if let Some(v) = f.response_deadline {
                        o.response_deadline = v;
                    }
                }
            }
        }

        tx.execute(Update(offer.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(offer)
    }
}

/// Error of [`UpdateOffer`] [`Command`] execution.
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

    /// [`Actor`] is not permitted to update [`Offer`]s.
    #[display("`User(id: {_0})` is not permitted to update `Offer`s")]
    Forbidden(#[error(not(source))] user::Id),

    /// [`Offer`] with the provided ID does not exist.
    #[display("`Offer(id: {_0})` does not exist")]
    OfferNotExists(#[error(not(source))] offer::Id),

    /// Provided [`Fields`] carry a payload for a different [`offer::Kind`].
    #[display("payload doesn't match the `Offer(kind: {_0})`")]
    KindMismatch(#[error(not(source))] offer::Kind),

    /// Another [`Offer`] already uses the provided [`offer::Slug`].
    #[display("`Offer(slug: {_0})` already exists")]
    SlugOccupied(#[error(not(source))] offer::Slug),

    /// Another [`Offer`] already uses the provided [`offer::PublicId`].
    #[display("`Offer(public_id: {_0})` already exists")]
    PublicIdOccupied(#[error(not(source))] offer::PublicId),
}
