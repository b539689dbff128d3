//! [`Command`] for adding a [`calculation::Feature`].

use common::operations::{
    By, Commit, Insert, Lock, Select, Transact, Transacted,
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

/// [`Command`] for adding a [`calculation::Feature`] to an existing
/// [`Calculation`].
#[derive(Clone, Debug)]
pub struct AddCalculationFeature {
    /// [`Actor`] adding the [`calculation::Feature`].
    pub actor: Actor,

    /// ID of the [`Calculation`] to add the [`calculation::Feature`] to.
    pub calculation_id: calculation::Id,

    /// Name of the new [`calculation::Feature`].
    pub name: calculation::FeatureName,

    /// Free-form description of the new [`calculation::Feature`].
    pub description: Option<offer::Description>,
}

impl<Db, Acl> Command<AddCalculationFeature> for Service<Db, Acl>
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
        + Database<Insert<calculation::Feature>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = calculation::Feature;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AddCalculationFeature,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddCalculationFeature {
            actor,
            calculation_id,
            name,
            description,
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

        let offer_id = self
            .database()
            .execute(Select(By::<Option<Calculation>, _>::new(calculation_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CalculationNotExists(calculation_id))
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

        tx.execute(Select(By::<Option<Calculation>, _>::new(calculation_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CalculationNotExists(calculation_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let feature = calculation::Feature {
            id: calculation::FeatureId::new(),
            calculation_id,
            name,
            description,
        };
        tx.execute(Insert(feature.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(feature)
    }
}

/// Error of [`AddCalculationFeature`] [`Command`] execution.
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
