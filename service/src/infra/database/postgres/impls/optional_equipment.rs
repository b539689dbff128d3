//! [`OptionalEquipment`]-related [`Database`] implementations.

use common::{
    operations::{By, Delete, Insert, Select, Update},
    Money,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{
        catalog::equipment_item, offer, optional_equipment, OptionalEquipment,
    },
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read::optional_equipment::Available,
};

/// Hydrates an [`OptionalEquipment`] out of the provided [`Row`].
fn from_row(row: &Row) -> OptionalEquipment {
    OptionalEquipment {
        id: row.get("id"),
        offer_id: row.get("offer_id"),
        equipment_item_id: row.get("equipment_item_id"),
        additional_price: Money {
            amount: row.get("additional_price"),
            currency: row.get("additional_price_currency"),
        },
        price_period: row.get("price_period"),
        is_default_selected: row.get("is_default_selected"),
        is_available: row.get("is_available"),
        created_at: row.get("created_at"),
    }
}

/// Columns of the `optional_equipment` table, in hydration order.
const COLUMNS: &str = "\
    id, offer_id, equipment_item_id, \
    additional_price, additional_price_currency, \
    price_period, \
    is_default_selected, is_available, \
    created_at";

impl<C> Database<Select<By<Option<OptionalEquipment>, optional_equipment::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<OptionalEquipment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Option<OptionalEquipment>, optional_equipment::Id>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: optional_equipment::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM optional_equipment \
             WHERE id = $1::UUID \
             LIMIT 1",
        );
        self.query_opt(&sql, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| row.as_ref().map(from_row))
    }
}

impl<C>
    Database<
        Select<By<Option<OptionalEquipment>, (offer::Id, equipment_item::Id)>>,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<OptionalEquipment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Option<OptionalEquipment>, (offer::Id, equipment_item::Id)>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let (offer_id, equipment_item_id) = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM optional_equipment \
             WHERE offer_id = $1::UUID \
               AND equipment_item_id = $2::UUID \
             LIMIT 1",
        );
        self.query_opt(&sql, &[&offer_id, &equipment_item_id])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| row.as_ref().map(from_row))
    }
}

impl<C> Database<Select<By<Vec<OptionalEquipment>, offer::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<OptionalEquipment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<OptionalEquipment>, offer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let offer_id: offer::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM optional_equipment \
             WHERE offer_id = $1::UUID \
             ORDER BY created_at ASC, \
                      id ASC",
        );
        self.query(&sql, &[&offer_id])
            .await
            .map_err(tracerr::wrap!())
            .map(|rows| rows.iter().map(from_row).collect())
    }
}

impl<C> Database<Select<By<Vec<Available<OptionalEquipment>>, offer::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Available<OptionalEquipment>>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Available<OptionalEquipment>>, offer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let offer_id: offer::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM optional_equipment \
             WHERE offer_id = $1::UUID \
               AND is_available \
             ORDER BY created_at ASC, \
                      id ASC",
        );
        self.query(&sql, &[&offer_id])
            .await
            .map_err(tracerr::wrap!())
            .map(|rows| {
                rows.iter().map(|row| Available(from_row(row))).collect()
            })
    }
}

impl<C> Database<Insert<OptionalEquipment>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Update<OptionalEquipment>,
        Ok = (),
        Err = Traced<database::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(equipment): Insert<OptionalEquipment>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(equipment))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<OptionalEquipment>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(equipment): Update<OptionalEquipment>,
    ) -> Result<Self::Ok, Self::Err> {
        let OptionalEquipment {
            id,
            offer_id,
            equipment_item_id,
            additional_price,
            price_period,
            is_default_selected,
            is_available,
            created_at,
        } = equipment;

        const SQL: &str = "\
            INSERT INTO optional_equipment (\
                id, offer_id, equipment_item_id, \
                additional_price, additional_price_currency, \
                price_period, \
                is_default_selected, is_available, \
                created_at\
            ) VALUES (\
                $1::UUID, $2::UUID, $3::UUID, \
                $4::NUMERIC, $5::INT2, \
                $6::INT2, \
                $7::BOOLEAN, $8::BOOLEAN, \
                $9::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET offer_id = EXCLUDED.offer_id, \
                equipment_item_id = EXCLUDED.equipment_item_id, \
                additional_price = EXCLUDED.additional_price, \
                additional_price_currency = \
                    EXCLUDED.additional_price_currency, \
                price_period = EXCLUDED.price_period, \
                is_default_selected = EXCLUDED.is_default_selected, \
                is_available = EXCLUDED.is_available, \
                created_at = EXCLUDED.created_at";
        self.exec(
            SQL,
            &[
                &id,
                &offer_id,
                &equipment_item_id,
                &additional_price.amount,
                &additional_price.currency,
                &price_period,
                &is_default_selected,
                &is_available,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Delete<By<OptionalEquipment, optional_equipment::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<OptionalEquipment, optional_equipment::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: optional_equipment::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM optional_equipment \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
