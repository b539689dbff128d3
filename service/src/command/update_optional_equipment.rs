//! [`Command`] for updating an existing [`OptionalEquipment`].

use common::{
    operations::{By, Commit, Lock, Select, Transact, Transacted, Update},
    Money,
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

/// [`Command`] for updating an existing [`OptionalEquipment`].
///
/// The offered equipment item itself never changes: delete and recreate the
/// [`OptionalEquipment`] to offer a different one.
#[derive(Clone, Debug)]
pub struct UpdateOptionalEquipment {
    /// [`Actor`] updating the [`OptionalEquipment`].
    pub actor: Actor,

    /// ID of the [`OptionalEquipment`] to update.
    pub id: optional_equipment::Id,

    /// [`Fields`] to update.
    pub fields: Fields,
}

/// Fields of an [`OptionalEquipment`] to update.
#[derive(Clone, Debug, Default)]
pub struct Fields {
    /// New additional price of the [`OptionalEquipment`].
    pub additional_price: Option<Money>,

    /// New [`PricePeriod`] the additional price is charged over.
    ///
    /// [`PricePeriod`]: optional_equipment::PricePeriod
    pub price_period: Option<optional_equipment::PricePeriod>,

    /// New `is_default_selected` value of the [`OptionalEquipment`].
    pub is_default_selected: Option<bool>,

    /// New `is_available` value of the [`OptionalEquipment`].
    pub is_available: Option<bool>,
}

impl<Db, Acl> Command<UpdateOptionalEquipment> for Service<Db, Acl>
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
        + Database<Update<OptionalEquipment>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = OptionalEquipment;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateOptionalEquipment,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateOptionalEquipment { actor, id, fields } = cmd;

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

        let mut equipment = tx
            .execute(Select(By::<Option<OptionalEquipment>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EquipmentNotExists(id))
            .map_err(tracerr::wrap!())?;

        let Fields {
            additional_price,
            price_period,
            is_default_selected,
            is_available,
        } = fields;

        if let Some(v) = additional_price {
            equipment.additional_price = v;
        }
        if let Some(v) = price_period {
            equipment.price_period = v;
        }
        if let Some(v) = is_default_selected {
            equipment.is_default_selected = v;
        }
        if let Some(v) = is_available {
            equipment.is_available = v;
        }

        tx.execute(Update(equipment.clone()))
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

/// Error of [`UpdateOptionalEquipment`] [`Command`] execution.
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
