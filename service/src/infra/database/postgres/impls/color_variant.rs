//! [`ColorVariant`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{color_variant, offer, ColorVariant},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read::color_variant::{NoDefault, Pair},
};

/// Hydrates a [`ColorVariant`] out of the provided [`Row`].
fn from_row(row: &Row) -> ColorVariant {
    ColorVariant {
        id: row.get("id"),
        offer_id: row.get("offer_id"),
        exterior_color_id: row.get("exterior_color_id"),
        interior_color_id: row.get("interior_color_id"),
        name: row.get("name"),
        is_default: row.get("is_default"),
        gallery_id: row.get("gallery_id"),
        created_at: row.get("created_at"),
    }
}

/// Columns of the `color_variants` table, in hydration order.
const COLUMNS: &str = "\
    id, offer_id, \
    exterior_color_id, interior_color_id, \
    name, is_default, gallery_id, \
    created_at";

impl<C> Database<Select<By<Option<ColorVariant>, color_variant::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<ColorVariant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<ColorVariant>, color_variant::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: color_variant::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM color_variants \
             WHERE id = $1::UUID \
             LIMIT 1",
        );
        self.query_opt(&sql, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| row.as_ref().map(from_row))
    }
}

impl<C> Database<Select<By<Option<ColorVariant>, (offer::Id, Pair)>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<ColorVariant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<ColorVariant>, (offer::Id, Pair)>>,
    ) -> Result<Self::Ok, Self::Err> {
        let (offer_id, pair) = by.into_inner();

        // `IS NOT DISTINCT FROM` treats two `NULL` interiors as the same
        // combination.
        let sql = format!(
            "SELECT {COLUMNS} \
             FROM color_variants \
             WHERE offer_id = $1::UUID \
               AND exterior_color_id = $2::UUID \
               AND interior_color_id IS NOT DISTINCT FROM $3::UUID \
             LIMIT 1",
        );
        self.query_opt(
            &sql,
            &[&offer_id, &pair.exterior_color_id, &pair.interior_color_id],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(|row| row.as_ref().map(from_row))
    }
}

impl<C> Database<Select<By<Vec<ColorVariant>, offer::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<ColorVariant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<ColorVariant>, offer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let offer_id: offer::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM color_variants \
             WHERE offer_id = $1::UUID \
             ORDER BY is_default DESC, \
                      created_at ASC, \
                      id ASC",
        );
        self.query(&sql, &[&offer_id])
            .await
            .map_err(tracerr::wrap!())
            .map(|rows| rows.iter().map(from_row).collect())
    }
}

impl<C> Database<Insert<ColorVariant>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Update<ColorVariant>,
        Ok = (),
        Err = Traced<database::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(variant): Insert<ColorVariant>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(variant))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<ColorVariant>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(variant): Update<ColorVariant>,
    ) -> Result<Self::Ok, Self::Err> {
        let ColorVariant {
            id,
            offer_id,
            exterior_color_id,
            interior_color_id,
            name,
            is_default,
            gallery_id,
            created_at,
        } = variant;

        const SQL: &str = "\
            INSERT INTO color_variants (\
                id, offer_id, \
                exterior_color_id, interior_color_id, \
                name, is_default, gallery_id, \
                created_at\
            ) VALUES (\
                $1::UUID, $2::UUID, \
                $3::UUID, $4::UUID, \
                $5::VARCHAR, $6::BOOLEAN, $7::UUID, \
                $8::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET offer_id = EXCLUDED.offer_id, \
                exterior_color_id = EXCLUDED.exterior_color_id, \
                interior_color_id = EXCLUDED.interior_color_id, \
                name = EXCLUDED.name, \
                is_default = EXCLUDED.is_default, \
                gallery_id = EXCLUDED.gallery_id, \
                created_at = EXCLUDED.created_at";
        self.exec(
            SQL,
            &[
                &id,
                &offer_id,
                &exterior_color_id,
                &interior_color_id,
                &name,
                &is_default,
                &gallery_id,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Update<By<NoDefault, offer::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<NoDefault, offer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let offer_id: offer::Id = by.into_inner();

        const SQL: &str = "\
            UPDATE color_variants \
            SET is_default = FALSE \
            WHERE offer_id = $1::UUID \
              AND is_default";
        self.exec(SQL, &[&offer_id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Delete<By<ColorVariant, color_variant::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<ColorVariant, color_variant::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: color_variant::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM color_variants \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
