//! [`Command`] for creating a new [`Calculation`].

use common::{
    operations::{By, Commit, Insert, Lock, Select, Transact, Transacted},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    access::{self, Actor, Granted, Permission},
    domain::{calculation, catalog::color, offer, user, Calculation, Offer},
    infra::{database, Database},
    Access, Service,
};

use super::Command;

/// [`Command`] for creating a new [`Calculation`] of an
/// [`offer::Individual`] quote.
#[derive(Clone, Debug)]
pub struct CreateCalculation {
    /// [`Actor`] creating the [`Calculation`].
    pub actor: Actor,

    /// ID of the [`Offer`] to create the [`Calculation`] of.
    pub offer_id: offer::Id,

    /// [`Availability`] of the calculated vehicle.
    ///
    /// [`Availability`]: calculation::Availability
    pub availability: calculation::Availability,

    /// ID of the exterior color, if specified.
    pub exterior_color_id: Option<color::Id>,

    /// ID of the interior color, if specified.
    pub interior_color_id: Option<color::Id>,
}

impl<Db, Acl> Command<CreateCalculation> for Service<Db, Acl>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Acl: Access<Granted, Ok = bool, Err = Traced<access::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Offer>, offer::Id>>,
            Ok = Option<Offer>,
            Err = Traced<database::Error>,
        > + Database<Lock<By<Offer, offer::Id>>, Err = Traced<database::Error>>
        + Database<Insert<Calculation>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Calculation;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateCalculation,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateCalculation {
            actor,
            offer_id,
            availability,
            exterior_color_id,
            interior_color_id,
        } = cmd;

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
        if offer.kind() != offer::Kind::Individual {
            return Err(tracerr::new!(E::NotIndividual(offer_id)));
        }

        let calculation = Calculation {
            id: calculation::Id::new(),
            offer_id,
            availability,
            exterior_color_id,
            interior_color_id,
            created_at: DateTime::now().coerce(),
        };
        tx.execute(Insert(calculation.clone()))
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

/// Error of [`CreateCalculation`] [`Command`] execution.
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

    /// [`Offer`] with the provided ID does not exist.
    #[display("`Offer(id: {_0})` does not exist")]
    OfferNotExists(#[error(not(source))] offer::Id),

    /// [`Offer`] with the provided ID is not an [`offer::Individual`] quote.
    #[display("`Offer(id: {_0})` is not an individual quote")]
    NotIndividual(#[error(not(source))] offer::Id),
}
