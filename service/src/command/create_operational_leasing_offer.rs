//! [`Command`] for creating a new [`offer::OperationalLeasing`].

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    access::{self, Actor, Granted, Permission},
    domain::{
        catalog::{brand, engine, file, generation, model},
        leasing_variant, offer, user, Offer,
    },
    infra::{database, Database},
    Access, Service,
};

use super::Command;

/// [`Command`] for creating a new [`offer::OperationalLeasing`].
#[derive(Clone, Debug)]
pub struct CreateOperationalLeasingOffer {
    /// [`Actor`] creating the [`Offer`].
    pub actor: Actor,

    /// URL [`Slug`] of the new [`Offer`].
    ///
    /// [`Slug`]: offer::Slug
    pub slug: Option<offer::Slug>,

    /// Legacy system ID of the new [`Offer`].
    pub public_id: Option<offer::PublicId>,

    /// ID of the model generation the new [`Offer`] is about.
    pub generation_id: generation::Id,

    /// ID of the vehicle brand, denormalized for filtering.
    pub brand_id: Option<brand::Id>,

    /// ID of the vehicle model, denormalized for filtering.
    pub model_id: Option<model::Id>,

    /// ID of the engine the new [`Offer`] is configured with.
    pub engine_id: Option<engine::Id>,

    /// ID of the main image file of the new [`Offer`].
    pub file_id: Option<file::Id>,

    /// [`TotalPrice`] of the offered vehicle.
    ///
    /// [`TotalPrice`]: offer::TotalPrice
    pub total_price: offer::TotalPrice,

    /// [`Description`] of the new [`Offer`].
    ///
    /// [`Description`]: offer::Description
    pub description: Option<offer::Description>,

    /// Internal [`Note`] about the new [`Offer`].
    ///
    /// [`Note`]: offer::Note
    pub note: Option<offer::Note>,

    /// Indicator whether the new [`Offer`] is active.
    pub is_active: bool,

    /// Indicator whether the new [`Offer`] is promoted.
    pub is_promoted: bool,

    /// Indicator whether the new [`Offer`] is featured.
    pub is_featured: bool,

    /// Indicator whether the new [`Offer`] is discounted.
    pub is_discounted: bool,

    /// Indicative leasing duration, in months.
    pub duration_months: Option<leasing_variant::DurationMonths>,

    /// Indicative monthly payment.
    pub monthly_payment: Option<Money>,

    /// Indicative annual mileage limit, in kilometers.
    pub annual_mileage_limit: Option<leasing_variant::MileageLimit>,
}

impl<Db, Acl> Command<CreateOperationalLeasingOffer> for Service<Db, Acl>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Acl: Access<Granted, Ok = bool, Err = Traced<access::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Offer>, offer::Slug>>,
            Ok = Option<Offer>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Offer>, offer::PublicId>>,
            Ok = Option<Offer>,
            Err = Traced<database::Error>,
        > + Database<Insert<Offer>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Offer;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateOperationalLeasingOffer,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateOperationalLeasingOffer {
            actor,
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
            duration_months,
            monthly_payment,
            annual_mileage_limit,
        } = cmd;

        let actor_id = actor.id;
        let granted = self
            .acl()
            .execute(Granted {
                actor,
                permission: Permission::CreateOffer,
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

        if let Some(slug) = &slug {
            let occupied = tx
                .execute(Select(By::<Option<Offer>, _>::new(slug.clone())))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            if occupied.is_some() {
                return Err(tracerr::new!(E::SlugOccupied(slug.clone())));
            }
        }
        if let Some(public_id) = &public_id {
            let occupied = tx
                .execute(Select(
                    By::<Option<Offer>, _>::new(public_id.clone()),
                ))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            if occupied.is_some() {
                return Err(tracerr::new!(E::PublicIdOccupied(
                    public_id.clone()
                )));
            }
        }

        let now = DateTime::now();
        let offer = Offer::from(offer::OperationalLeasing {
            id: offer::Id::new(),
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
            is_public: offer::Kind::OperationalLeasing.forces_public(),
            is_active,
            is_promoted,
            is_featured,
            is_discounted,
            duration_months,
            monthly_payment,
            annual_mileage_limit,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        });
        tx.execute(Insert(offer.clone()))
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

/// Error of [`CreateOperationalLeasingOffer`] [`Command`] execution.
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

    /// [`Actor`] is not permitted to create [`Offer`]s.
    #[display("`User(id: {_0})` is not permitted to create `Offer`s")]
    Forbidden(#[error(not(source))] user::Id),

    /// Another [`Offer`] already uses the provided [`offer::Slug`].
    #[display("`Offer(slug: {_0})` already exists")]
    SlugOccupied(#[error(not(source))] offer::Slug),

    /// Another [`Offer`] already uses the provided [`offer::PublicId`].
    #[display("`Offer(public_id: {_0})` already exists")]
    PublicIdOccupied(#[error(not(source))] offer::PublicId),
}
