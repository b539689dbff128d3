//! [`Command`] for deleting a [`ColorVariant`].

use common::operations::{
    By, Commit, Delete, Lock, Select, Transact, Transacted,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    access::{self, Actor, Granted, Permission},
    domain::{color_variant, offer, user, ColorVariant, Offer},
    infra::{database, Database},
    Access, Service,
};

use super::Command;

/// [`Command`] for deleting a [`ColorVariant`].
#[derive(Clone, Debug)]
pub struct DeleteColorVariant {
    /// [`Actor`] deleting the [`ColorVariant`].
    pub actor: Actor,

    /// ID of the [`ColorVariant`] to delete.
    pub id: color_variant::Id,
}

impl<Db, Acl> Command<DeleteColorVariant> for Service<Db, Acl>
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
        > + Database<Lock<By<Offer, offer::Id>>, Err = Traced<database::Error>>
        + Database<
            Delete<By<ColorVariant, color_variant::Id>>,
            Err = Traced<database::Error>,
        > + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = ColorVariant;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteColorVariant,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteColorVariant { actor, id } = cmd;

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

        let variant = tx
            .execute(Select(By::<Option<ColorVariant>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::VariantNotExists(id))
            .map_err(tracerr::wrap!())?;

        tx.execute(Delete(By::<ColorVariant, _>::new(id)))
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

/// Error of [`DeleteColorVariant`] [`Command`] execution.
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
}
