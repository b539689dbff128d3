//! [`Command`] for deleting an [`Offer`].

use common::operations::{
    By, Commit, Delete, Lock, Select, Transact, Transacted,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    access::{self, Actor, Granted, Permission},
    domain::{offer, user, Offer},
    infra::{database, Database},
    Access, Service,
};

use super::Command;

/// [`Command`] for deleting an [`Offer`].
///
/// All children of the [`Offer`] are deleted along with it.
#[derive(Clone, Debug)]
pub struct DeleteOffer {
    /// [`Actor`] deleting the [`Offer`].
    pub actor: Actor,

    /// ID of the [`Offer`] to delete.
    pub id: offer::Id,
}

impl<Db, Acl> Command<DeleteOffer> for Service<Db, Acl>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Acl: Access<Granted, Ok = bool, Err = Traced<access::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Offer>, offer::Id>>,
            Ok = Option<Offer>,
            Err = Traced<database::Error>,
        > + Database<Lock<By<Offer, offer::Id>>, Err = Traced<database::Error>>
        + Database<Delete<By<Offer, offer::Id>>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Offer;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteOffer) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteOffer { actor, id } = cmd;

        let actor_id = actor.id;
        let granted = self
            .acl()
            .execute(Granted {
                actor,
                permission: Permission::DeleteOffer,
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

        let offer = tx
            .execute(Select(By::<Option<Offer>, offer::Id>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::OfferNotExists(id))
            .map_err(tracerr::wrap!())?;

        tx.execute(Delete(By::<Offer, _>::new(id)))
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

/// Error of [`DeleteOffer`] [`Command`] execution.
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

    /// [`Actor`] is not permitted to delete [`Offer`]s.
    #[display("`User(id: {_0})` is not permitted to delete `Offer`s")]
    Forbidden(#[error(not(source))] user::Id),

    /// [`Offer`] with the provided ID does not exist.
    #[display("`Offer(id: {_0})` does not exist")]
    OfferNotExists(#[error(not(source))] offer::Id),
}
