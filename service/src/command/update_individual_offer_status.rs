//! [`Command`] for updating the status of an [`offer::Individual`].

use common::{
    operations::{By, Commit, Lock, Select, Transact, Transacted, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    access::{self, Actor, Granted, Permission},
    domain::{
        offer::{self, individual},
        user, Offer,
    },
    infra::{database, Database},
    Access, Service,
};

use super::Command;

/// [`Command`] for updating the [`individual::Status`] of an
/// [`offer::Individual`] quote.
///
/// Any [`individual::Status`] may replace any other one.
#[derive(Clone, Debug)]
pub struct UpdateIndividualOfferStatus {
    /// [`Actor`] updating the [`Offer`].
    pub actor: Actor,

    /// ID of the [`Offer`] to update.
    pub id: offer::Id,

    /// [`individual::Status`] to set.
    pub status: individual::Status,
}

impl<Db, Acl> Command<UpdateIndividualOfferStatus> for Service<Db, Acl>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Acl: Access<Granted, Ok = bool, Err = Traced<access::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Offer>, offer::Id>>,
            Ok = Option<Offer>,
            Err = Traced<database::Error>,
        > + Database<Lock<By<Offer, offer::Id>>, Err = Traced<database::Error>>
        + Database<Update<Offer>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Offer;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateIndividualOfferStatus,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateIndividualOfferStatus { actor, id, status } = cmd;

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

        let Offer::Individual(quote) = &mut offer else {
            return Err(tracerr::new!(E::NotIndividual(id)));
        };
        quote.status = status;
        quote.updated_at = DateTime::now().coerce();

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

/// Error of [`UpdateIndividualOfferStatus`] [`Command`] execution.
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

    /// [`Offer`] with the provided ID is not an [`offer::Individual`] quote.
    #[display("`Offer(id: {_0})` is not an individual quote")]
    NotIndividual(#[error(not(source))] offer::Id),
}
