//! [`Command`] for deleting an [`OptionalEquipment`].

use common::operations::{
    By, Commit, Delete, Lock, Select, Transact, Transacted,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    access::{self, Actor, Granted, Permission},
    domain::{offer, optional_equipment, user, Offer, OptionalEquipment},
    infra::{database, Database},
    Access, Service,
};

use super::Command;

/// [`Command`] for deleting an [`OptionalEquipment`].
#[derive(Clone, Debug)]
pub struct DeleteOptionalEquipment {
    /// [`Actor`] deleting the [`OptionalEquipment`].
    pub actor: Actor,

    /// ID of the [`OptionalEquipment`] to delete.
    pub id: optional_equipment::Id,
}

impl<Db, Acl> Command<DeleteOptionalEquipment> for Service<Db, Acl>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<OptionalEquipment>, optional_equipment::Id>>,
            Ok = Option<OptionalEquipment>,
            Err = Traced<database::Error>,
        >,
    Acl: Access<Granted, Ok = bool, Err = Traced<access::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<OptionalEquipment>, optional_equipment::Id>>,
            Ok = Option<OptionalEquipment>,
            Err = Traced<database::Error>,
        > + Database<Lock<By<Offer, offer::Id>>, Err = Traced<database::Error>>
        + Database<
            Delete<By<OptionalEquipment, optional_equipment::Id>>,
            Err = Traced<database::Error>,
        > + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = OptionalEquipment;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteOptionalEquipment,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteOptionalEquipment { actor, id } = cmd;

        let actor_id = actor.id;
        let granted = self
            .acl()
            .execute(Granted {
                actor,
                permission: Permission::ManageOptionalEquipment,
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !granted {
            return Err(tracerr::new!(E::Forbidden(actor_id)));
        }

        let offer_id = self
            .database()
            .execute(Select(By::<Option<OptionalEquipment>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EquipmentNotExists(id))
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

        let equipment = tx
            .execute(Select(By::<Option<OptionalEquipment>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EquipmentNotExists(id))
            .map_err(tracerr::wrap!())?;

        tx.execute(Delete(By::<OptionalEquipment, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(equipment)
    }
}

/// Error of [`DeleteOptionalEquipment`] [`Command`] execution.
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

    /// [`Actor`] is not permitted to manage [`OptionalEquipment`].
    #[display("`User(id: {_0})` is not permitted to manage `OptionalEquipment`")]
    Forbidden(#[error(not(source))] user::Id),

    /// [`OptionalEquipment`] with the provided ID does not exist.
    #[display("`OptionalEquipment(id: {_0})` does not exist")]
    EquipmentNotExists(#[error(not(source))] optional_equipment::Id),
}
