//! [`Calculation`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::operations::{By, Delete, Insert, Select};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{calculation, offer, Calculation},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read::calculation::WithFeatures,
};

/// Hydrates a [`Calculation`] out of the provided [`Row`].
fn from_row(row: &Row) -> Calculation {
    Calculation {
        id: row.get("id"),
        offer_id: row.get("offer_id"),
        availability: row.get("availability"),
        exterior_color_id: row.get("exterior_color_id"),
        interior_color_id: row.get("interior_color_id"),
        created_at: row.get("created_at"),
    }
}

/// Columns of the `calculations` table, in hydration order.
const COLUMNS: &str = "\
    id, offer_id, availability, \
    exterior_color_id, interior_color_id, \
    created_at";

impl<C> Database<Select<By<Option<Calculation>, calculation::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Calculation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Calculation>, calculation::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: calculation::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM calculations \
             WHERE id = $1::UUID \
             LIMIT 1",
        );
        self.query_opt(&sql, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| row.as_ref().map(from_row))
    }
}

impl<C> Database<Select<By<Vec<WithFeatures>, offer::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<WithFeatures>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<WithFeatures>, offer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let offer_id: offer::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM calculations \
             WHERE offer_id = $1::UUID \
             ORDER BY created_at DESC, \
                      id ASC",
        );
        let calculations = self
            .query(&sql, &[&offer_id])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect::<Vec<_>>();
        if calculations.is_empty() {
            return Ok(Vec::new());
        }

        let calculation_ids =
            calculations.iter().map(|c| c.id).collect::<Vec<_>>();
        let limit = i32::try_from(calculation_ids.len()).unwrap();

        #[expect(clippy::items_after_statements, reason = "more readable")]
        const FEATURES_SQL: &str = "\
            SELECT id, calculation_id, name, description \
            FROM calculation_features \
            WHERE calculation_id IN \
                  (SELECT unnest($1::UUID[]) LIMIT $2::INT4) \
            ORDER BY name ASC, \
                     id ASC";
        let mut features: HashMap<calculation::Id, Vec<calculation::Feature>> =
            HashMap::new();
        for row in self
            .query(FEATURES_SQL, &[&calculation_ids.as_slice(), &limit])
            .await
            .map_err(tracerr::wrap!())?
        {
            let feature = calculation::Feature {
                id: row.get("id"),
                calculation_id: row.get("calculation_id"),
                name: row.get("name"),
                description: row.get("description"),
            };
            features.entry(feature.calculation_id).or_default().push(feature);
        }

        Ok(calculations
            .into_iter()
            .map(|calculation| {
                let features =
                    features.remove(&calculation.id).unwrap_or_default();
                WithFeatures {
                    calculation,
                    features,
                }
            })
            .collect())
    }
}

impl<C> Database<Insert<Calculation>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(calculation): Insert<Calculation>,
    ) -> Result<Self::Ok, Self::Err> {
        let Calculation {
            id,
            offer_id,
            availability,
            exterior_color_id,
            interior_color_id,
            created_at,
        } = calculation;

        const SQL: &str = "\
            INSERT INTO calculations (\
                id, offer_id, availability, \
                exterior_color_id, interior_color_id, \
                created_at\
            ) VALUES (\
                $1::UUID, $2::UUID, $3::INT2, \
                $4::UUID, $5::UUID, \
                $6::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET offer_id = EXCLUDED.offer_id, \
                availability = EXCLUDED.availability, \
                exterior_color_id = EXCLUDED.exterior_color_id, \
                interior_color_id = EXCLUDED.interior_color_id, \
                created_at = EXCLUDED.created_at";
        self.exec(
            SQL,
            &[
                &id,
                &offer_id,
                &availability,
                &exterior_color_id,
                &interior_color_id,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Insert<calculation::Feature>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(feature): Insert<calculation::Feature>,
    ) -> Result<Self::Ok, Self::Err> {
        let calculation::Feature {
            id,
            calculation_id,
            name,
            description,
        } = feature;

        const SQL: &str = "\
            INSERT INTO calculation_features (\
                id, calculation_id, name, description\
            ) VALUES (\
                $1::UUID, $2::UUID, $3::VARCHAR, $4::VARCHAR\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET calculation_id = EXCLUDED.calculation_id, \
                name = EXCLUDED.name, \
                description = EXCLUDED.description";
        self.exec(SQL, &[&id, &calculation_id, &name, &description])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Delete<By<Calculation, calculation::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Calculation, calculation::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: calculation::Id = by.into_inner();

        // `calculation_features` rows go away via `ON DELETE CASCADE`.
        const SQL: &str = "\
            DELETE FROM calculations \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
