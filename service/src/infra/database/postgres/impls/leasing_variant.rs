//! [`LeasingVariant`]-related [`Database`] implementations.

use common::{
    operations::{By, Delete, Insert, Select, Update},
    Money,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{
        leasing_variant::{self, IncludedServices},
        offer, LeasingVariant,
    },
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read::leasing_variant::{NoBestOffer, NoDefault},
};

/// Hydrates a [`LeasingVariant`] out of the provided [`Row`].
fn from_row(row: &Row) -> LeasingVariant {
    LeasingVariant {
        id: row.get("id"),
        offer_id: row.get("offer_id"),
        slug: row.get("slug"),
        duration: row.get("duration"),
        annual_mileage_limit: row.get("annual_mileage_limit"),
        vat_rate: row.get("vat_rate"),
        price_with_vat: Money {
            amount: row.get("price_with_vat"),
            currency: row.get("price_with_vat_currency"),
        },
        price_without_vat: Money {
            amount: row.get("price_without_vat"),
            currency: row.get("price_without_vat_currency"),
        },
        original_price_with_vat: row
            .get::<_, Option<_>>("original_price_with_vat")
            .map(|amount| Money {
                amount,
                currency: row.get("original_price_with_vat_currency"),
            }),
        original_price_without_vat: row
            .get::<_, Option<_>>("original_price_without_vat")
            .map(|amount| Money {
                amount,
                currency: row.get("original_price_without_vat_currency"),
            }),
        down_payment: row.get::<_, Option<_>>("down_payment").map(|amount| {
            Money {
                amount,
                currency: row.get("down_payment_currency"),
            }
        }),
        deposit: row.get::<_, Option<_>>("deposit").map(|amount| Money {
            amount,
            currency: row.get("deposit_currency"),
        }),
        setup_fee: row.get::<_, Option<_>>("setup_fee").map(|amount| Money {
            amount,
            currency: row.get("setup_fee_currency"),
        }),
        valid_from: row.get("valid_from"),
        valid_until: row.get("valid_until"),
        services: IncludedServices {
            winter_tyres: row.get("winter_tyres"),
            servicing: row.get("servicing"),
            insurance: row.get("insurance"),
            road_assistance: row.get("road_assistance"),
            replacement_vehicle: row.get("replacement_vehicle"),
            highway_toll: row.get("highway_toll"),
        },
        wear_tolerance: row.get("wear_tolerance"),
        free_mileage_buffer: row.get("free_mileage_buffer"),
        is_active: row.get("is_active"),
        is_default: row.get("is_default"),
        is_best_offer: row.get("is_best_offer"),
        leasing_company_id: row.get("leasing_company_id"),
        created_at: row.get("created_at"),
    }
}

/// Columns of the `leasing_variants` table, in hydration order.
const COLUMNS: &str = "\
    id, offer_id, slug, \
    duration, annual_mileage_limit, vat_rate, \
    price_with_vat, price_with_vat_currency, \
    price_without_vat, price_without_vat_currency, \
    original_price_with_vat, original_price_with_vat_currency, \
    original_price_without_vat, original_price_without_vat_currency, \
    down_payment, down_payment_currency, \
    deposit, deposit_currency, \
    setup_fee, setup_fee_currency, \
    valid_from, valid_until, \
    winter_tyres, servicing, insurance, \
    road_assistance, replacement_vehicle, highway_toll, \
    wear_tolerance, free_mileage_buffer, \
    is_active, is_default, is_best_offer, \
    leasing_company_id, \
    created_at";

impl<C> Database<Select<By<Option<LeasingVariant>, leasing_variant::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<LeasingVariant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<LeasingVariant>, leasing_variant::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: leasing_variant::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM leasing_variants \
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
        Select<
            By<Option<LeasingVariant>, (offer::Id, leasing_variant::Slug)>,
        >,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<LeasingVariant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Option<LeasingVariant>, (offer::Id, leasing_variant::Slug)>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let (offer_id, slug) = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM leasing_variants \
             WHERE offer_id = $1::UUID \
               AND slug = $2::VARCHAR \
             LIMIT 1",
        );
        self.query_opt(&sql, &[&offer_id, &slug])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| row.as_ref().map(from_row))
    }
}

impl<C> Database<Select<By<Vec<LeasingVariant>, offer::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<LeasingVariant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<LeasingVariant>, offer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let offer_id: offer::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM leasing_variants \
             WHERE offer_id = $1::UUID \
             ORDER BY is_default DESC, \
                      is_best_offer DESC, \
                      price_with_vat ASC, \
                      id ASC",
        );
        self.query(&sql, &[&offer_id])
            .await
            .map_err(tracerr::wrap!())
            .map(|rows| rows.iter().map(from_row).collect())
    }
}

impl<C> Database<Insert<LeasingVariant>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Update<LeasingVariant>,
        Ok = (),
        Err = Traced<database::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(variant): Insert<LeasingVariant>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(variant))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<LeasingVariant>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(variant): Update<LeasingVariant>,
    ) -> Result<Self::Ok, Self::Err> {
        let LeasingVariant {
            id,
            offer_id,
            slug,
            duration,
            annual_mileage_limit,
            vat_rate,
            price_with_vat,
            price_without_vat,
            original_price_with_vat,
            original_price_without_vat,
            down_payment,
            deposit,
            setup_fee,
            valid_from,
            valid_until,
            services:
                IncludedServices {
                    winter_tyres,
                    servicing,
                    insurance,
                    road_assistance,
                    replacement_vehicle,
                    highway_toll,
                },
            wear_tolerance,
            free_mileage_buffer,
            is_active,
            is_default,
            is_best_offer,
            leasing_company_id,
            created_at,
        } = variant;

        const SQL: &str = "\
            INSERT INTO leasing_variants (\
                id, offer_id, slug, \
                duration, annual_mileage_limit, vat_rate, \
                price_with_vat, price_with_vat_currency, \
                price_without_vat, price_without_vat_currency, \
                original_price_with_vat, original_price_with_vat_currency, \
                original_price_without_vat, \
                original_price_without_vat_currency, \
                down_payment, down_payment_currency, \
                deposit, deposit_currency, \
                setup_fee, setup_fee_currency, \
                valid_from, valid_until, \
                winter_tyres, servicing, insurance, \
                road_assistance, replacement_vehicle, highway_toll, \
                wear_tolerance, free_mileage_buffer, \
                is_active, is_default, is_best_offer, \
                leasing_company_id, \
                created_at\
            ) VALUES (\
                $1::UUID, $2::UUID, $3::VARCHAR, \
                $4::INT2, $5::INT4, $6::NUMERIC, \
                $7::NUMERIC, $8::INT2, \
                $9::NUMERIC, $10::INT2, \
                $11::NUMERIC, $12::INT2, \
                $13::NUMERIC, $14::INT2, \
                $15::NUMERIC, $16::INT2, \
                $17::NUMERIC, $18::INT2, \
                $19::NUMERIC, $20::INT2, \
                $21::TIMESTAMPTZ, $22::TIMESTAMPTZ, \
                $23::BOOLEAN, $24::BOOLEAN, $25::BOOLEAN, \
                $26::BOOLEAN, $27::BOOLEAN, $28::BOOLEAN, \
                $29::NUMERIC, $30::INT4, \
                $31::BOOLEAN, $32::BOOLEAN, $33::BOOLEAN, \
                $34::UUID, \
                $35::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET offer_id = EXCLUDED.offer_id, \
                slug = EXCLUDED.slug, \
                duration = EXCLUDED.duration, \
                annual_mileage_limit = EXCLUDED.annual_mileage_limit, \
                vat_rate = EXCLUDED.vat_rate, \
                price_with_vat = EXCLUDED.price_with_vat, \
                price_with_vat_currency = EXCLUDED.price_with_vat_currency, \
                price_without_vat = EXCLUDED.price_without_vat, \
                price_without_vat_currency = \
                    EXCLUDED.price_without_vat_currency, \
                original_price_with_vat = EXCLUDED.original_price_with_vat, \
                original_price_with_vat_currency = \
                    EXCLUDED.original_price_with_vat_currency, \
                original_price_without_vat = \
                    EXCLUDED.original_price_without_vat, \
                original_price_without_vat_currency = \
                    EXCLUDED.original_price_without_vat_currency, \
                down_payment = EXCLUDED.down_payment, \
                down_payment_currency = EXCLUDED.down_payment_currency, \
                deposit = EXCLUDED.deposit, \
                deposit_currency = EXCLUDED.deposit_currency, \
                setup_fee = EXCLUDED.setup_fee, \
                setup_fee_currency = EXCLUDED.setup_fee_currency, \
                valid_from = EXCLUDED.valid_from, \
                valid_until = EXCLUDED.valid_until, \
                winter_tyres = EXCLUDED.winter_tyres, \
                servicing = EXCLUDED.servicing, \
                insurance = EXCLUDED.insurance, \
                road_assistance = EXCLUDED.road_assistance, \
                replacement_vehicle = EXCLUDED.replacement_vehicle, \
                highway_toll = EXCLUDED.highway_toll, \
                wear_tolerance = EXCLUDED.wear_tolerance, \
                free_mileage_buffer = EXCLUDED.free_mileage_buffer, \
                is_active = EXCLUDED.is_active, \
                is_default = EXCLUDED.is_default, \
                is_best_offer = EXCLUDED.is_best_offer, \
                leasing_company_id = EXCLUDED.leasing_company_id, \
                created_at = EXCLUDED.created_at";
        self.exec(
            SQL,
            &[
                &id,
                &offer_id,
                &slug,
                &duration,
                &annual_mileage_limit,
                &vat_rate,
                &price_with_vat.amount,
                &price_with_vat.currency,
                &price_without_vat.amount,
                &price_without_vat.currency,
                &original_price_with_vat.map(|p| p.amount),
                &original_price_with_vat.map(|p| p.currency),
                &original_price_without_vat.map(|p| p.amount),
                &original_price_without_vat.map(|p| p.currency),
                &down_payment.map(|p| p.amount),
                &down_payment.map(|p| p.currency),
                &deposit.map(|p| p.amount),
                &deposit.map(|p| p.currency),
                &setup_fee.map(|p| p.amount),
                &setup_fee.map(|p| p.currency),
                &valid_from,
                &valid_until,
                &winter_tyres,
                &servicing,
                &insurance,
                &road_assistance,
                &replacement_vehicle,
                &highway_toll,
                &wear_tolerance,
                &free_mileage_buffer,
                &is_active,
                &is_default,
                &is_best_offer,
                &leasing_company_id,
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
            UPDATE leasing_variants \
            SET is_default = FALSE \
            WHERE offer_id = $1::UUID \
              AND is_default";
        self.exec(SQL, &[&offer_id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Update<By<NoBestOffer, offer::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<NoBestOffer, offer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let offer_id: offer::Id = by.into_inner();

        const SQL: &str = "\
            UPDATE leasing_variants \
            SET is_best_offer = FALSE \
            WHERE offer_id = $1::UUID \
              AND is_best_offer";
        self.exec(SQL, &[&offer_id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Delete<By<LeasingVariant, leasing_variant::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<LeasingVariant, leasing_variant::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: leasing_variant::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM leasing_variants \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
