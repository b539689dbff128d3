//! [`Command`] for deleting a [`Calculation`].

use common::operations::{
    By, Commit, Delete, Lock, Select, Transact, Transacted,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    access::{self, Actor, Granted, Permission},
    domain::{calculation, offer, user, Calculation, Offer},
    infra::{database, Database},
    Access, Service,
};

use super::Command;

/// [`Command`] for deleting a [`Calculation`].
///
/// All [`calculation::Feature`]s of the [`Calculation`] are deleted along
/// with it.
#[derive(Clone, Debug)]
pub struct DeleteCalculation {
    /// [`Actor`] deleting the [`Calculation`].
    pub actor: Actor,

    /// ID of the [`Calculation`] to delete.
    pub id: calculation::Id,
}

impl<Db, Acl> Command<DeleteCalculation> for Service<Db, Acl>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<Calculation>, calculation::Id>>,
            Ok = Option<Calculation>,
            Err = Traced<database::Error>,
        >,
    Acl: Access<Granted, Ok = bool, Err = Traced<access::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Calculation>, calculation::Id>>,
            Ok = Option<Calculation>,
            Err = Traced<database::Error>,
        > + Database<Lock<By<Offer, offer::Id>>, Err = Traced<database::Error>>
        + Database<
            Delete<By<Calculation, calculation::Id>>,
            Err = Traced<database::Error>,
        > + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Calculation;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteCalculation,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteCalculation { actor, id } = cmd;

        let actor_id = actor.id;
        let granted = self
            .acl()
            .execute(Granted {
                actor,
                permission: Permission::ManageCalculations,
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !granted {
            return Err(tracerr::new!(E::Forbidden(actor_id)));
        }

        let offer_id = self
            .database()
            .execute(Select(By::<Option<Calculation>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CalculationNotExists(id))
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

        let calculation = tx
            .execute(Select(By::<Option<Calculation>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CalculationNotExists(id))
            .map_err(tracerr::wrap!())?;

        tx.execute(Delete(By::<Calculation, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(calculation)
    }
}

/// Error of [`DeleteCalculation`] [`Command`] execution.
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

    /// [`Actor`] is not permitted to manage [`Calculation`]s.
    #[display("`User(id: {_0})` is not permitted to manage `Calculation`s")]
    Forbidden(#[error(not(source))] user::Id),

    /// [`Calculation`] with the provided ID does not exist.
    #[display("`Calculation(id: {_0})` does not exist")]
    CalculationNotExists(#[error(not(source))] calculation::Id),
}
