//! [`Command`] for updating an existing [`ColorVariant`].

use common::operations::{
    By, Commit, Lock, Select, Transact, Transacted, Update,
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

/// [`Command`] for updating an existing [`ColorVariant`].
///
/// The color pair uniqueness is skipped only when the new pair equals the
/// [`ColorVariant`]'s own current one.
#[derive(Clone, Debug)]
pub struct UpdateColorVariant {
    /// [`Actor`] updating the [`ColorVariant`].
    pub actor: Actor,

    /// ID of the [`ColorVariant`] to update.
    pub id: color_variant::Id,

    /// [`Fields`] to update.
    pub fields: Fields,
}

/// Fields of a [`ColorVariant`] to update.
///
/// The outer [`Option`] means "leave untouched" when [`None`], the inner one
/// (where present) carries the new nullable value.
#[derive(Clone, Debug, Default)]
pub struct Fields {
    /// New exterior color of the [`ColorVariant`].
    pub exterior_color_id: Option<color::Id>,

    /// New interior color of the [`ColorVariant`].
    pub interior_color_id: Option<Option<color::Id>>,

    /// New display name of the [`ColorVariant`].
    pub name: Option<color_variant::DisplayName>,

    /// New `is_default` value of the [`ColorVariant`].
    pub is_default: Option<bool>,

    /// New image gallery of the [`ColorVariant`].
    pub gallery_id: Option<Option<gallery::Id>>,
}

impl<Db, Acl> Command<UpdateColorVariant> for Service<Db, Acl>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<ColorVariant>, color_variant::Id>>,
            Ok = Option<ColorVariant>,
            Err = Traced<database::Error>,
        >,
    Acl: Access<Granted, Ok = bool, Err = Traced<access::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<ColorVariant>, color_variant::Id>>,
            Ok = Option<ColorVariant>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<ColorVariant>, (offer::Id, Pair)>>,
            Ok = Option<ColorVariant>,
            Err = Traced<database::Error>,
        > + Database<Lock<By<Offer, offer::Id>>, Err = Traced<database::Error>>
        + Database<Update<By<NoDefault, offer::Id>>, Err = Traced<database::Error>>
        + Database<Update<ColorVariant>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = ColorVariant;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateColorVariant,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateColorVariant { actor, id, fields } = cmd;

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

        let offer_id = self
            .database()
            .execute(Select(By::<Option<ColorVariant>, _>::new(id)))
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
            .execute(Select(By::<Option<ColorVariant>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::VariantNotExists(id))
            .map_err(tracerr::wrap!())?;

        let Fields {
            exterior_color_id,
            interior_color_id,
            name,
            is_default,
            gallery_id,
        } = fields;

        let new_pair = Pair {
            exterior_color_id: exterior_color_id
                .unwrap_or(variant.exterior_color_id),
            interior_color_id: interior_color_id
                .unwrap_or(variant.interior_color_id),
        };
        let current_pair = Pair {
            exterior_color_id: variant.exterior_color_id,
            interior_color_id: variant.interior_color_id,
        };
        if new_pair != current_pair {
            let occupied = tx
                .execute(Select(By::<Option<ColorVariant>, _>::new((
                    offer_id, new_pair,
                ))))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            if occupied.is_some_and(|v| v.id != id) {
                return Err(tracerr::new!(E::ColorPairOccupied(new_pair)));
            }
        }

        if is_default == Some(true) {
            tx.execute(Update(By::<NoDefault, _>::new(offer_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
        }

        variant.exterior_color_id = new_pair.exterior_color_id;
        variant.interior_color_id = new_pair.interior_color_id;
        if let Some(v) = name {
            variant.name = v;
        }
        if let Some(v) = is_default {
            variant.is_default = v;
        }
        if let Some(v) = gallery_id {
            variant.gallery_id = v;
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

/// Error of [`UpdateColorVariant`] [`Command`] execution.
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

    /// [`ColorVariant`] with the provided ID does not exist.
    #[display("`ColorVariant(id: {_0})` does not exist")]
    VariantNotExists(#[error(not(source))] color_variant::Id),

    /// Another [`ColorVariant`] of the [`Offer`] already uses the provided
    /// color [`Pair`].
    ///
    /// [`Offer`]: crate::domain::Offer
    #[display("`ColorVariant` with the same color pair already exists")]
    ColorPairOccupied(#[error(not(source))] Pair),
}
