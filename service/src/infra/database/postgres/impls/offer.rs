//! [`Offer`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::{
    money,
    operations::{By, Delete, Insert, Lock, Select, Update},
    Money,
};
use itertools::Itertools as _;
use postgres_types::ToSql;
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{
        catalog::{brand, customer, engine, file, generation, model},
        leasing_variant::{DurationMonths, MileageLimit},
        offer::{self, direct_purchase, individual},
        user, Offer,
    },
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read::{self, offer::Public},
};

impl<C, IDs> Database<Select<By<HashMap<offer::Id, Offer>, IDs>>>
    for Postgres<C>
where
    C: Connection,
    IDs: AsRef<[offer::Id]>,
{
    type Ok = HashMap<offer::Id, Offer>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<HashMap<offer::Id, Offer>, IDs>>,
    ) -> Result<Self::Ok, Self::Err> {
        let ids = by.into_inner();
        // Avoid subtle change for SQL.
        let ids: &[offer::Id] = ids.as_ref();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let limit = i32::try_from(ids.len()).unwrap();

        #[expect(clippy::items_after_statements, reason = "more readable")]
        const SQL: &str = "\
            SELECT id, kind, \
                   slug, public_id, \
                   generation_id, brand_id, model_id, engine_id, file_id, \
                   total_price, total_price_currency, \
                   description, note, \
                   is_public, is_active, \
                   is_promoted, is_featured, is_discounted, \
                   duration_months, \
                   monthly_payment, monthly_payment_currency, \
                   annual_mileage_limit, \
                   discount, discount_currency, \
                   warranty_years, \
                   customer_id, assignee_id, status, \
                   internal_notes, response_deadline, \
                   created_at, updated_at \
            FROM offers \
            WHERE id IN (SELECT unnest($1::UUID[]) LIMIT $2::INT4) \
            LIMIT $2::INT4";
        Ok(self
            .query(SQL, &[&ids, &limit])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| {
                let id = row.get("id");
                let slug = row.get("slug");
                let public_id = row.get("public_id");
                let generation_id = row.get("generation_id");
                let brand_id = row.get("brand_id");
                let model_id = row.get("model_id");
                let engine_id = row.get("engine_id");
                let file_id = row.get("file_id");
                let total_price = {
                    let price = Money {
                        amount: row.get("total_price"),
                        currency: row.get("total_price_currency"),
                    };
                    #[expect(unsafe_code, reason = "validated on write")]
                    unsafe {
                        offer::TotalPrice::new_unchecked(price)
                    }
                };
                let description = row.get("description");
                let note = row.get("note");
                let is_public = row.get("is_public");
                let is_active = row.get("is_active");
                let is_promoted = row.get("is_promoted");
                let is_featured = row.get("is_featured");
                let is_discounted = row.get("is_discounted");
                let created_at = row.get("created_at");
                let updated_at = row.get("updated_at");
                let offer = match row.get("kind") {
                    offer::Kind::OperationalLeasing => {
                        offer::OperationalLeasing {
                            id,
                            slug,
                            public_id,
                            generation_id,
                            brand_id,
                            model_id,
                            engine_id,
                            file_id,
                            total_price,
                            description,
                            note,
                            is_public,
                            is_active,
                            is_promoted,
                            is_featured,
                            is_discounted,
                            duration_months: row.get("duration_months"),
                            monthly_payment: row
                                .get::<_, Option<_>>("monthly_payment")
                                .map(|amount| Money {
                                    amount,
                                    currency: row
                                        .get("monthly_payment_currency"),
                                }),
                            annual_mileage_limit: row
                                .get("annual_mileage_limit"),
                            created_at,
                            updated_at,
                        }
                        .into()
                    }
                    offer::Kind::DirectPurchase => offer::DirectPurchase {
                        id,
                        slug,
                        public_id,
                        generation_id,
                        brand_id,
                        model_id,
                        engine_id,
                        file_id,
                        total_price,
                        description,
                        note,
                        is_public,
                        is_active,
                        is_promoted,
                        is_featured,
                        is_discounted,
                        discount: row.get::<_, Option<_>>("discount").map(
                            |amount| Money {
                                amount,
                                currency: row.get("discount_currency"),
                            },
                        ),
                        warranty_years: row.get("warranty_years"),
                        created_at,
                        updated_at,
                    }
                    .into(),
                    offer::Kind::Individual => offer::Individual {
                        id,
                        slug,
                        public_id,
                        generation_id,
                        brand_id,
                        model_id,
                        engine_id,
                        file_id,
                        total_price,
                        description,
                        note,
                        is_public,
                        is_active,
                        is_promoted,
                        is_featured,
                        is_discounted,
                        customer_id: row.get("customer_id"),
                        assignee_id: row.get("assignee_id"),
                        status: row.get("status"),
                        internal_notes: row.get("internal_notes"),
                        response_deadline: row.get("response_deadline"),
                        created_at,
                        updated_at,
                    }
                    .into(),
                };
                (id, offer)
            })
            .collect())
    }
}

impl<C> Database<Select<By<Option<Offer>, offer::Id>>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Select<By<HashMap<offer::Id, Offer>, [offer::Id; 1]>>,
        Ok = HashMap<offer::Id, Offer>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Offer>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Offer>, offer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .execute(Select(By::new([id])))
            .await
            .map_err(tracerr::wrap!())?
            .remove(&id))
    }
}

impl<C> Database<Select<By<Option<Offer>, offer::Slug>>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Select<By<Option<Offer>, offer::Id>>,
        Ok = Option<Offer>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Offer>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Offer>, offer::Slug>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let slug: offer::Slug = by.into_inner();

        const SQL: &str = "\
            SELECT id \
            FROM offers \
            WHERE slug = $1::VARCHAR \
            LIMIT 1";
        let Some(row) = self
            .query_opt(SQL, &[&slug])
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };

        self.execute(Select(By::new(row.get("id"))))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Select<By<Option<Offer>, offer::PublicId>>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Select<By<Option<Offer>, offer::Id>>,
        Ok = Option<Offer>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Offer>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Offer>, offer::PublicId>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let public_id: offer::PublicId = by.into_inner();

        const SQL: &str = "\
            SELECT id \
            FROM offers \
            WHERE public_id = $1::VARCHAR \
            LIMIT 1";
        let Some(row) = self
            .query_opt(SQL, &[&public_id])
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };

        self.execute(Select(By::new(row.get("id"))))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Insert<Offer>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Offer>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(offer): Insert<Offer>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(offer)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Offer>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(offer): Update<Offer>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        #[expect(clippy::type_complexity, reason = "still readable")]
        let (
            id,
            kind,
            slug,
            public_id,
            generation_id,
            brand_id,
            model_id,
            engine_id,
            file_id,
            total_price,
            total_price_currency,
            description,
            note,
            is_public,
            is_active,
            is_promoted,
            is_featured,
            is_discounted,
            duration_months,
            monthly_payment,
            monthly_payment_currency,
            annual_mileage_limit,
            discount,
            discount_currency,
            warranty_years,
            customer_id,
            assignee_id,
            status,
            internal_notes,
            response_deadline,
            created_at,
            updated_at,
        ): (
            offer::Id,
            offer::Kind,
            Option<offer::Slug>,
            Option<offer::PublicId>,
            generation::Id,
            Option<brand::Id>,
            Option<model::Id>,
            Option<engine::Id>,
            Option<file::Id>,
            Decimal,
            money::Currency,
            Option<offer::Description>,
            Option<offer::Note>,
            bool,
            bool,
            bool,
            bool,
            bool,
            Option<DurationMonths>,
            Option<Decimal>,
            Option<money::Currency>,
            Option<MileageLimit>,
            Option<Decimal>,
            Option<money::Currency>,
            Option<direct_purchase::WarrantyYears>,
            Option<customer::Id>,
            Option<user::Id>,
            Option<individual::Status>,
            Option<offer::Note>,
            Option<individual::ResponseDeadline>,
            offer::CreationDateTime,
            offer::ModificationDateTime,
        ) = match offer {
            Offer::OperationalLeasing(o) => (
                o.id,
                offer::Kind::OperationalLeasing,
                o.slug,
                o.public_id,
                o.generation_id,
                o.brand_id,
                o.model_id,
                o.engine_id,
                o.file_id,
                o.total_price.money().amount,
                o.total_price.money().currency,
                o.description,
                o.note,
                o.is_public,
                o.is_active,
                o.is_promoted,
                o.is_featured,
                o.is_discounted,
                o.duration_months,
                o.monthly_payment.map(|p| p.amount),
                o.monthly_payment.map(|p| p.currency),
                o.annual_mileage_limit,
                None,
                None,
                None,
                None,
                None,
                None,
                None,
                None,
                o.created_at,
                o.updated_at,
            ),
            Offer::DirectPurchase(o) => (
                o.id,
                offer::Kind::DirectPurchase,
                o.slug,
                o.public_id,
                o.generation_id,
                o.brand_id,
                o.model_id,
                o.engine_id,
                o.file_id,
                o.total_price.money().amount,
                o.total_price.money().currency,
                o.description,
                o.note,
                o.is_public,
                o.is_active,
                o.is_promoted,
                o.is_featured,
                o.is_discounted,
                None,
                None,
                None,
                None,
                o.discount.map(|d| d.amount),
                o.discount.map(|d| d.currency),
                o.warranty_years,
                None,
                None,
                None,
                None,
                None,
                o.created_at,
                o.updated_at,
            ),
            Offer::Individual(o) => (
                o.id,
                offer::Kind::Individual,
                o.slug,
                o.public_id,
                o.generation_id,
                o.brand_id,
                o.model_id,
                o.engine_id,
                o.file_id,
                o.total_price.money().amount,
                o.total_price.money().currency,
                o.description,
                o.note,
                o.is_public,
                o.is_active,
                o.is_promoted,
                o.is_featured,
                o.is_discounted,
                None,
                None,
                None,
                None,
                None,
                None,
                None,
                Some(o.customer_id),
                o.assignee_id,
                Some(o.status),
                o.internal_notes,
                o.response_deadline,
                o.created_at,
                o.updated_at,
            ),
        };

        const SQL: &str = "\
            INSERT INTO offers (\
                id, kind, \
                slug, public_id, \
                generation_id, brand_id, model_id, engine_id, file_id, \
                total_price, total_price_currency, \
                description, note, \
                is_public, is_active, \
                is_promoted, is_featured, is_discounted, \
                duration_months, \
                monthly_payment, monthly_payment_currency, \
                annual_mileage_limit, \
                discount, discount_currency, \
                warranty_years, \
                customer_id, assignee_id, status, \
                internal_notes, response_deadline, \
                created_at, updated_at\
            ) VALUES (\
                $1::UUID, $2::INT2, \
                $3::VARCHAR, $4::VARCHAR, \
                $5::UUID, $6::UUID, $7::UUID, $8::UUID, $9::UUID, \
                $10::NUMERIC, $11::INT2, \
                $12::VARCHAR, $13::VARCHAR, \
                $14::BOOLEAN, $15::BOOLEAN, \
                $16::BOOLEAN, $17::BOOLEAN, $18::BOOLEAN, \
                $19::INT2, \
                $20::NUMERIC, $21::INT2, \
                $22::INT4, \
                $23::NUMERIC, $24::INT2, \
                $25::INT2, \
                $26::UUID, $27::UUID, $28::INT2, \
                $29::VARCHAR, $30::TIMESTAMPTZ, \
                $31::TIMESTAMPTZ, $32::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET kind = EXCLUDED.kind, \
                slug = EXCLUDED.slug, \
                public_id = EXCLUDED.public_id, \
                generation_id = EXCLUDED.generation_id, \
                brand_id = EXCLUDED.brand_id, \
                model_id = EXCLUDED.model_id, \
                engine_id = EXCLUDED.engine_id, \
                file_id = EXCLUDED.file_id, \
                total_price = EXCLUDED.total_price, \
                total_price_currency = EXCLUDED.total_price_currency, \
                description = EXCLUDED.description, \
                note = EXCLUDED.note, \
                is_public = EXCLUDED.is_public, \
                is_active = EXCLUDED.is_active, \
                is_promoted = EXCLUDED.is_promoted, \
                is_featured = EXCLUDED.is_featured, \
                is_discounted = EXCLUDED.is_discounted, \
                duration_months = EXCLUDED.duration_months, \
                monthly_payment = EXCLUDED.monthly_payment, \
                monthly_payment_currency = \
                    EXCLUDED.monthly_payment_currency, \
                annual_mileage_limit = EXCLUDED.annual_mileage_limit, \
                discount = EXCLUDED.discount, \
                discount_currency = EXCLUDED.discount_currency, \
                warranty_years = EXCLUDED.warranty_years, \
                customer_id = EXCLUDED.customer_id, \
                assignee_id = EXCLUDED.assignee_id, \
                status = EXCLUDED.status, \
                internal_notes = EXCLUDED.internal_notes, \
                response_deadline = EXCLUDED.response_deadline, \
                created_at = EXCLUDED.created_at, \
                updated_at = EXCLUDED.updated_at";
        self.exec(
            SQL,
            &[
                &id,
                &kind,
                &slug,
                &public_id,
                &generation_id,
                &brand_id,
                &model_id,
                &engine_id,
                &file_id,
                &total_price,
                &total_price_currency,
                &description,
                &note,
                &is_public,
                &is_active,
                &is_promoted,
                &is_featured,
                &is_discounted,
                &duration_months,
                &monthly_payment,
                &monthly_payment_currency,
                &annual_mileage_limit,
                &discount,
                &discount_currency,
                &warranty_years,
                &customer_id,
                &assignee_id,
                &status,
                &internal_notes,
                &response_deadline,
                &created_at,
                &updated_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Delete<By<Offer, offer::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Offer, offer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: offer::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM offers \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)?;

        const LOCK_SQL: &str = "\
            DELETE FROM offers_lock \
            WHERE id = $1::UUID";
        self.exec(LOCK_SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Lock<By<Offer, offer::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<Offer, offer::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: offer::Id = by.into_inner();

        const SQL: &str = "\
            INSERT INTO offers_lock \
            VALUES ($1::UUID) \
            ON CONFLICT (id) DO NOTHING";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C>
    Database<Select<By<read::offer::list::Page, read::offer::list::Selector>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = read::offer::list::Page;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::offer::list::Page, read::offer::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        select_page(self, by.into_inner(), false)
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C>
    Database<
        Select<
            By<read::offer::list::Page, Public<read::offer::list::Selector>>,
        >,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = read::offer::list::Page;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::offer::list::Page, Public<read::offer::list::Selector>>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let Public(selector) = by.into_inner();
        select_page(self, selector, true)
            .await
            .map_err(tracerr::wrap!())
    }
}

/// Selects a page of [`Offer`]s matching the provided
/// [`read::offer::list::Selector`].
///
/// `public_only` additionally restricts the page to active, publicly visible
/// [`Offer`]s of a public [`offer::Kind`].
async fn select_page<C>(
    db: &Postgres<C>,
    selector: read::offer::list::Selector,
    public_only: bool,
) -> Result<read::offer::list::Page, Traced<database::Error>>
where
    C: Connection,
{
    let read::offer::list::Selector {
        filter:
            read::offer::list::Filter {
                kind,
                generation_id,
                brand_id,
                model_id,
                is_active,
                is_public,
                min_total_price,
                max_total_price,
                status,
                customer_id,
                assignee_id,
            },
        slice,
    } = selector;

    let limit = i64::try_from(slice.limit()).unwrap();
    let offset = i64::try_from(slice.offset()).unwrap();

    let mut ps: Vec<&(dyn ToSql + Sync)> = vec![&limit, &offset];

    let kind_idx = kind.as_ref().map(|k| {
        ps.push(k);
        ps.len()
    });
    let generation_idx = generation_id.as_ref().map(|id| {
        ps.push(id);
        ps.len()
    });
    let brand_idx = brand_id.as_ref().map(|id| {
        ps.push(id);
        ps.len()
    });
    let model_idx = model_id.as_ref().map(|id| {
        ps.push(id);
        ps.len()
    });
    let is_active_idx = is_active.as_ref().map(|v| {
        ps.push(v);
        ps.len()
    });
    let is_public_idx = is_public.as_ref().map(|v| {
        ps.push(v);
        ps.len()
    });
    let min_price = min_total_price.map(|p| p.amount);
    let min_price_idx = min_price.as_ref().map(|p| {
        ps.push(p);
        ps.len()
    });
    let max_price = max_total_price.map(|p| p.amount);
    let max_price_idx = max_price.as_ref().map(|p| {
        ps.push(p);
        ps.len()
    });
    let status_idx = status.as_ref().map(|s| {
        ps.push(s);
        ps.len()
    });
    let customer_idx = customer_id.as_ref().map(|id| {
        ps.push(id);
        ps.len()
    });
    let assignee_idx = assignee_id.as_ref().map(|id| {
        ps.push(id);
        ps.len()
    });

    let non_public_kind = offer::Kind::Individual;
    let public_idx = public_only.then(|| {
        ps.push(&non_public_kind);
        ps.len()
    });

    let sql = format!(
        "SELECT id \
         FROM offers \
         WHERE true \
               {kind} {generation} {brand} {model} \
               {active} {visible} \
               {min_price} {max_price} \
               {status} {customer} {assignee} \
               {public} \
         ORDER BY created_at DESC, \
                  id ASC \
         LIMIT $1::INT8 OFFSET $2::INT8",
        kind = kind_idx.into_iter().format_with("", |idx, f| {
            f(&format_args!("AND kind = ${idx}::INT2"))
        }),
        generation = generation_idx.into_iter().format_with("", |idx, f| {
            f(&format_args!("AND generation_id = ${idx}::UUID"))
        }),
        brand = brand_idx.into_iter().format_with("", |idx, f| {
            f(&format_args!("AND brand_id = ${idx}::UUID"))
        }),
        model = model_idx.into_iter().format_with("", |idx, f| {
            f(&format_args!("AND model_id = ${idx}::UUID"))
        }),
        active = is_active_idx.into_iter().format_with("", |idx, f| {
            f(&format_args!("AND is_active = ${idx}::BOOLEAN"))
        }),
        visible = is_public_idx.into_iter().format_with("", |idx, f| {
            f(&format_args!("AND is_public = ${idx}::BOOLEAN"))
        }),
        min_price = min_price_idx.into_iter().format_with("", |idx, f| {
            f(&format_args!("AND total_price >= ${idx}::NUMERIC"))
        }),
        max_price = max_price_idx.into_iter().format_with("", |idx, f| {
            f(&format_args!("AND total_price <= ${idx}::NUMERIC"))
        }),
        status = status_idx.into_iter().format_with("", |idx, f| {
            f(&format_args!("AND status = ${idx}::INT2"))
        }),
        customer = customer_idx.into_iter().format_with("", |idx, f| {
            f(&format_args!("AND customer_id = ${idx}::UUID"))
        }),
        assignee = assignee_idx.into_iter().format_with("", |idx, f| {
            f(&format_args!("AND assignee_id = ${idx}::UUID"))
        }),
        public = public_idx.into_iter().format_with("", |idx, f| {
            f(&format_args!(
                "AND is_public AND is_active AND kind <> ${idx}::INT2"
            ))
        }),
    );
    let ids = db
        .query(&sql, ps.as_slice())
        .await
        .map_err(tracerr::wrap!())?
        .into_iter()
        .map(|row| row.get("id"))
        .collect::<Vec<offer::Id>>();

    let mut offers = db
        .execute(Select(By::<HashMap<offer::Id, Offer>, _>::new(ids.clone())))
        .await
        .map_err(tracerr::wrap!())?;

    Ok(ids.into_iter().filter_map(|id| offers.remove(&id)).collect())
}
