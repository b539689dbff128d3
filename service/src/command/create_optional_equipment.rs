//! [`Command`] for creating a new [`OptionalEquipment`].

use common::{
    operations::{By, Commit, Insert, Lock, Select, Transact, Transacted},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    access::{self, Actor, Granted, Permission},
    domain::{
        catalog::equipment_item, offer, optional_equipment, user, Offer,
        OptionalEquipment,
    },
    infra::{database, Database},
    Access, Service,
};

use super::Command;

/// [`Command`] for creating a new [`OptionalEquipment`] of an
/// [`offer::OperationalLeasing`].
#[derive(Clone, Debug)]
pub struct CreateOptionalEquipment {
    /// [`Actor`] creating the [`OptionalEquipment`].
    pub actor: Actor,

    /// ID of the [`Offer`] to create the [`OptionalEquipment`] of.
    pub offer_id: offer::Id,

    /// ID of the catalog equipment item being offered.
    pub equipment_item_id: equipment_item::Id,

    /// Additional price of the new [`OptionalEquipment`].
    pub additional_price: Money,

    /// [`PricePeriod`] the additional price is charged over.
    ///
    /// [`PricePeriod`]: optional_equipment::PricePeriod
    pub price_period: optional_equipment::PricePeriod,

    /// Indicator whether the new [`OptionalEquipment`] is pre-selected in
    /// the configurator.
    pub is_default_selected: bool,

    /// Indicator whether the new [`OptionalEquipment`] is currently
    /// orderable.
    pub is_available: bool,
}

impl<Db, Acl> Command<CreateOptionalEquipment> for Service<Db, Acl>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Acl: Access<Granted, Ok = bool, Err = Traced<access::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Offer>, offer::Id>>,
            Ok = Option<Offer>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<OptionalEquipment>, (offer::Id, equipment_item::Id)>>,
            Ok = Option<OptionalEquipment>,
            Err = Traced<database::Error>,
        > + Database<Lock<By<Offer, offer::Id>>, Err = Traced<database::Error>>
        + Database<Insert<OptionalEquipment>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = OptionalEquipment;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateOptionalEquipment,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateOptionalEquipment {
            actor,
            offer_id,
            equipment_item_id,
            additional_price,
            price_period,
            is_default_selected,
            is_available,
        } = cmd;

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

        let occupied = tx
            .execute(Select(By::<Option<OptionalEquipment>, _>::new((
                offer_id,
                equipment_item_id,
            ))))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if occupied.is_some() {
            return Err(tracerr::new!(E::EquipmentOccupied(
                equipment_item_id
            )));
        }

        let equipment = OptionalEquipment {
            id: optional_equipment::Id::new(),
            offer_id,
            equipment_item_id,
            additional_price,
            price_period,
            is_default_selected,
            is_available,
            created_at: DateTime::now().coerce(),
        };
        tx.execute(Insert(equipment.clone()))
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

/// Error of [`CreateOptionalEquipment`] [`Command`] execution.
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

    /// [`Offer`] with the provided ID does not exist.
    #[display("`Offer(id: {_0})` does not exist")]
    OfferNotExists(#[error(not(source))] offer::Id),

    /// [`Offer`] with the provided ID is not an
    /// [`offer::OperationalLeasing`].
    #[display("`Offer(id: {_0})` is not an operational leasing offer")]
    NotOperationalLeasing(#[error(not(source))] offer::Id),

    /// The equipment item is already offered with the [`Offer`].
    #[display("`EquipmentItem(id: {_0})` is already offered with the `Offer`")]
    EquipmentOccupied(#[error(not(source))] equipment_item::Id),
}
