//! [`Command`] for creating a new [`ColorVariant`].

use common::{
    operations::{By, Commit, Insert, Lock, Select, Transact, Transacted, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    access::{self, Actor, Granted, Permission},
    domain::{
        catalog::{color, gallery},
        color_variant, offer, user, ColorVariant, Offer,
    },
    infra::{database, Database},
    read::color_variant::{NoDefault, Pair},
    Access, Service,
};

use super::Command;

/// [`Command`] for creating a new [`ColorVariant`] of an
/// [`offer::OperationalLeasing`].
///
/// If the new [`ColorVariant`] is marked default, the flag is first cleared
/// on all its siblings, keeping at most one holder per [`Offer`].
#[derive(Clone, Debug)]
pub struct CreateColorVariant {
    /// [`Actor`] creating the [`ColorVariant`].
    pub actor: Actor,

    /// ID of the [`Offer`] to create the [`ColorVariant`] of.
    pub offer_id: offer::Id,

    /// ID of the exterior color.
    pub exterior_color_id: color::Id,

    /// ID of the interior color, if specified.
    pub interior_color_id: Option<color::Id>,

    /// Display name of the new [`ColorVariant`].
    pub name: color_variant::DisplayName,

    /// Indicator whether the new [`ColorVariant`] is the default one of its
    /// [`Offer`].
    pub is_default: bool,

    /// ID of the image gallery showing the new [`ColorVariant`].
    pub gallery_id: Option<gallery::Id>,
}

impl<Db, Acl> Command<CreateColorVariant> for Service<Db, Acl>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Acl: Access<Granted, Ok = bool, Err = Traced<access::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Offer>, offer::Id>>,
            Ok = Option<Offer>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<ColorVariant>, (offer::Id, Pair)>>,
            Ok = Option<ColorVariant>,
            Err = Traced<database::Error>,
        > + Database<Lock<By<Offer, offer::Id>>, Err = Traced<database::Error>>
        + Database<Update<By<NoDefault, offer::Id>>, Err = Traced<database::Error>>
        + Database<Insert<ColorVariant>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = ColorVariant;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateColorVariant,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateColorVariant {
            actor,
            offer_id,
            exterior_color_id,
            interior_color_id,
            name,
            is_default,
            gallery_id,
        } = cmd;

        let actor_id = actor.id;
        let granted = self
            .acl()
            .execute(Granted {
                actor,
                permission: Permission::ManageColorVariants,
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

        let pair = Pair {
            exterior_color_id,
            interior_color_id,
        };
        let occupied = tx
            .execute(Select(By::<Option<ColorVariant>, _>::new((
                offer_id, pair,
            ))))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if occupied.is_some() {
            return Err(tracerr::new!(E::ColorPairOccupied(pair)));
        }

        if is_default {
            tx.execute(Update(By::<NoDefault, _>::new(offer_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
        }

        let variant = ColorVariant {
            id: color_variant::Id::new(),
            offer_id,
            exterior_color_id,
            interior_color_id,
            name,
            is_default,
            gallery_id,
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

/// Error of [`CreateColorVariant`] [`Command`] execution.
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

    /// [`Actor`] is not permitted to manage [`ColorVariant`]s.
    #[display("`User(id: {_0})` is not permitted to manage `ColorVariant`s")]
    Forbidden(#[error(not(source))] user::Id),

    /// [`Offer`] with the provided ID does not exist.
    #[display("`Offer(id: {_0})` does not exist")]
    OfferNotExists(#[error(not(source))] offer::Id),

    /// [`Offer`] with the provided ID is not an
    /// [`offer::OperationalLeasing`].
    #[display("`Offer(id: {_0})` is not an operational leasing offer")]
    NotOperationalLeasing(#[error(not(source))] offer::Id),

    /// Another [`ColorVariant`] of the [`Offer`] already uses the provided
    /// color [`Pair`].
    #[display("`ColorVariant` with the same color pair already exists")]
    ColorPairOccupied(#[error(not(source))] Pair),
}
