//! [`Command`] execution against an in-memory [`Database`] double.
//!
//! [`Command`]: service::Command
//! [`Database`]: service::infra::Database

use std::sync::{Arc, Mutex};

use common::{
    money::Currency,
    operations::{By, Commit, Delete, Insert, Lock, Select, Transact, Update},
    Money, Percent,
};
use rust_decimal::Decimal;
use service::{
    access::Actor,
    command,
    domain::{
        calculation,
        catalog::{color, customer, equipment_item, generation},
        color_variant, leasing_variant,
        offer::{self, individual},
        optional_equipment, user, Calculation, ColorVariant, LeasingVariant,
        Offer, OptionalEquipment,
    },
    infra::{database, Database, RoleGrants},
    query,
    read::{
        self,
        color_variant::Pair,
        offer::{list, Public},
    },
    Command as _, Query as _, Service,
};
use tracerr::Traced;

/// In-memory [`Database`] double backing [`Command`] executions.
///
/// Transactions are modelled as clones sharing the same state, so a
/// "transaction" is never rolled back. That is enough for driving the
/// happy and conflict paths of commands.
///
/// [`Command`]: service::Command
#[derive(Clone, Debug, Default)]
struct MockDb(Arc<Mutex<State>>);

#[derive(Debug, Default)]
struct State {
    offers: Vec<Offer>,
    leasing_variants: Vec<LeasingVariant>,
    color_variants: Vec<ColorVariant>,
    optional_equipment: Vec<OptionalEquipment>,
    calculations: Vec<Calculation>,
    features: Vec<calculation::Feature>,
}

type DbResult<T> = Result<T, Traced<database::Error>>;

impl Database<Transact> for MockDb {
    type Ok = Self;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> DbResult<Self::Ok> {
        Ok(self.clone())
    }
}

impl Database<Commit> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Commit) -> DbResult<Self::Ok> {
        Ok(())
    }
}

impl Database<Lock<By<Offer, offer::Id>>> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Lock<By<Offer, offer::Id>>) -> DbResult<()> {
        Ok(())
    }
}

impl Database<Select<By<Option<Offer>, offer::Id>>> for MockDb {
    type Ok = Option<Offer>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Offer>, offer::Id>>,
    ) -> DbResult<Self::Ok> {
        let id = by.into_inner();
        Ok(self
            .0
            .lock()
            .unwrap()
            .offers
            .iter()
            .find(|o| o.id() == id)
            .cloned())
    }
}

impl Database<Select<By<Option<Offer>, offer::Slug>>> for MockDb {
    type Ok = Option<Offer>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Offer>, offer::Slug>>,
    ) -> DbResult<Self::Ok> {
        let slug = by.into_inner();
        Ok(self
            .0
            .lock()
            .unwrap()
            .offers
            .iter()
            .find(|o| o.slug() == Some(&slug))
            .cloned())
    }
}

impl Database<Select<By<Option<Offer>, offer::PublicId>>> for MockDb {
    type Ok = Option<Offer>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Offer>, offer::PublicId>>,
    ) -> DbResult<Self::Ok> {
        let public_id = by.into_inner();
        Ok(self
            .0
            .lock()
            .unwrap()
            .offers
            .iter()
            .find(|o| o.public_id() == Some(&public_id))
            .cloned())
    }
}

impl Database<Select<By<Option<LeasingVariant>, leasing_variant::Id>>>
    for MockDb
{
    type Ok = Option<LeasingVariant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<LeasingVariant>, leasing_variant::Id>>,
    ) -> DbResult<Self::Ok> {
        let id = by.into_inner();
        Ok(self
            .0
            .lock()
            .unwrap()
            .leasing_variants
            .iter()
            .find(|v| v.id == id)
            .cloned())
    }
}

impl
    Database<
        Select<By<Option<LeasingVariant>, (offer::Id, leasing_variant::Slug)>>,
    > for MockDb
{
    type Ok = Option<LeasingVariant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Option<LeasingVariant>, (offer::Id, leasing_variant::Slug)>,
        >,
    ) -> DbResult<Self::Ok> {
        let (offer_id, slug) = by.into_inner();
        Ok(self
            .0
            .lock()
            .unwrap()
            .leasing_variants
            .iter()
            .find(|v| v.offer_id == offer_id && v.slug == slug)
            .cloned())
    }
}

impl Database<Select<By<Option<ColorVariant>, color_variant::Id>>> for MockDb {
    type Ok = Option<ColorVariant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<ColorVariant>, color_variant::Id>>,
    ) -> DbResult<Self::Ok> {
        let id = by.into_inner();
        Ok(self
            .0
            .lock()
            .unwrap()
            .color_variants
            .iter()
            .find(|v| v.id == id)
            .cloned())
    }
}

impl Database<Select<By<Option<ColorVariant>, (offer::Id, Pair)>>> for MockDb {
    type Ok = Option<ColorVariant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<ColorVariant>, (offer::Id, Pair)>>,
    ) -> DbResult<Self::Ok> {
        let (offer_id, pair) = by.into_inner();
        Ok(self
            .0
            .lock()
            .unwrap()
            .color_variants
            .iter()
            .find(|v| {
                v.offer_id == offer_id
                    && v.exterior_color_id == pair.exterior_color_id
                    && v.interior_color_id == pair.interior_color_id
            })
            .cloned())
    }
}

impl Database<Select<By<Option<OptionalEquipment>, optional_equipment::Id>>>
    for MockDb
{
    type Ok = Option<OptionalEquipment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Option<OptionalEquipment>, optional_equipment::Id>,
        >,
    ) -> DbResult<Self::Ok> {
        let id = by.into_inner();
        Ok(self
            .0
            .lock()
            .unwrap()
            .optional_equipment
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }
}

impl
    Database<
        Select<By<Option<OptionalEquipment>, (offer::Id, equipment_item::Id)>>,
    > for MockDb
{
    type Ok = Option<OptionalEquipment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Option<OptionalEquipment>, (offer::Id, equipment_item::Id)>,
        >,
    ) -> DbResult<Self::Ok> {
        let (offer_id, item_id) = by.into_inner();
        Ok(self
            .0
            .lock()
            .unwrap()
            .optional_equipment
            .iter()
            .find(|e| e.offer_id == offer_id && e.equipment_item_id == item_id)
            .cloned())
    }
}

impl Database<Select<By<Option<Calculation>, calculation::Id>>> for MockDb {
    type Ok = Option<Calculation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Calculation>, calculation::Id>>,
    ) -> DbResult<Self::Ok> {
        let id = by.into_inner();
        Ok(self
            .0
            .lock()
            .unwrap()
            .calculations
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }
}

impl Database<Select<By<list::Page, list::Selector>>> for MockDb {
    type Ok = list::Page;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<list::Page, list::Selector>>,
    ) -> DbResult<Self::Ok> {
        Ok(self.select_page(by.into_inner(), false))
    }
}

impl Database<Select<By<list::Page, Public<list::Selector>>>> for MockDb {
    type Ok = list::Page;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<list::Page, Public<list::Selector>>>,
    ) -> DbResult<Self::Ok> {
        let Public(selector) = by.into_inner();
        Ok(self.select_page(selector, true))
    }
}

impl MockDb {
    fn select_page(
        &self,
        selector: list::Selector,
        public_only: bool,
    ) -> list::Page {
        let list::Selector { filter, slice } = selector;
        self.0
            .lock()
            .unwrap()
            .offers
            .iter()
            .filter(|o| {
                (!public_only
                    || (o.is_active()
                        && o.is_public()
                        && o.kind() != offer::Kind::Individual))
                    && filter.kind.map_or(true, |k| o.kind() == k)
                    && filter
                        .generation_id
                        .map_or(true, |g| o.generation_id() == g)
                    && filter.is_active.map_or(true, |a| o.is_active() == a)
                    && filter.is_public.map_or(true, |p| o.is_public() == p)
            })
            .skip(slice.offset())
            .take(slice.limit())
            .cloned()
            .collect()
    }
}

impl Database<Insert<Offer>> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, Insert(offer): Insert<Offer>) -> DbResult<()> {
        self.0.lock().unwrap().offers.push(offer);
        Ok(())
    }
}

impl Database<Insert<LeasingVariant>> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(variant): Insert<LeasingVariant>,
    ) -> DbResult<()> {
        self.0.lock().unwrap().leasing_variants.push(variant);
        Ok(())
    }
}

impl Database<Insert<ColorVariant>> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(variant): Insert<ColorVariant>,
    ) -> DbResult<()> {
        self.0.lock().unwrap().color_variants.push(variant);
        Ok(())
    }
}

impl Database<Insert<OptionalEquipment>> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(equipment): Insert<OptionalEquipment>,
    ) -> DbResult<()> {
        self.0.lock().unwrap().optional_equipment.push(equipment);
        Ok(())
    }
}

impl Database<Insert<Calculation>> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(calculation): Insert<Calculation>,
    ) -> DbResult<()> {
        self.0.lock().unwrap().calculations.push(calculation);
        Ok(())
    }
}

impl Database<Insert<calculation::Feature>> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(feature): Insert<calculation::Feature>,
    ) -> DbResult<()> {
        self.0.lock().unwrap().features.push(feature);
        Ok(())
    }
}

impl Database<Update<Offer>> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, Update(offer): Update<Offer>) -> DbResult<()> {
        let mut state = self.0.lock().unwrap();
        if let Some(o) =
            state.offers.iter_mut().find(|o| o.id() == offer.id())
        {
            *o = offer;
        }
        Ok(())
    }
}

impl Database<Update<LeasingVariant>> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(variant): Update<LeasingVariant>,
    ) -> DbResult<()> {
        let mut state = self.0.lock().unwrap();
        if let Some(v) = state
            .leasing_variants
            .iter_mut()
            .find(|v| v.id == variant.id)
        {
            *v = variant;
        }
        Ok(())
    }
}

impl Database<Update<ColorVariant>> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(variant): Update<ColorVariant>,
    ) -> DbResult<()> {
        let mut state = self.0.lock().unwrap();
        if let Some(v) =
            state.color_variants.iter_mut().find(|v| v.id == variant.id)
        {
            *v = variant;
        }
        Ok(())
    }
}

impl Database<Update<OptionalEquipment>> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(equipment): Update<OptionalEquipment>,
    ) -> DbResult<()> {
        let mut state = self.0.lock().unwrap();
        if let Some(e) = state
            .optional_equipment
            .iter_mut()
            .find(|e| e.id == equipment.id)
        {
            *e = equipment;
        }
        Ok(())
    }
}

impl Database<Update<By<read::leasing_variant::NoDefault, offer::Id>>>
    for MockDb
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<read::leasing_variant::NoDefault, offer::Id>>,
    ) -> DbResult<()> {
        let offer_id = by.into_inner();
        for v in &mut self.0.lock().unwrap().leasing_variants {
            if v.offer_id == offer_id {
                v.is_default = false;
            }
        }
        Ok(())
    }
}

impl Database<Update<By<read::leasing_variant::NoBestOffer, offer::Id>>>
    for MockDb
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<read::leasing_variant::NoBestOffer, offer::Id>>,
    ) -> DbResult<()> {
        let offer_id = by.into_inner();
        for v in &mut self.0.lock().unwrap().leasing_variants {
            if v.offer_id == offer_id {
                v.is_best_offer = false;
            }
        }
        Ok(())
    }
}

impl Database<Update<By<read::color_variant::NoDefault, offer::Id>>>
    for MockDb
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<read::color_variant::NoDefault, offer::Id>>,
    ) -> DbResult<()> {
        let offer_id = by.into_inner();
        for v in &mut self.0.lock().unwrap().color_variants {
            if v.offer_id == offer_id {
                v.is_default = false;
            }
        }
        Ok(())
    }
}

impl Database<Delete<By<Offer, offer::Id>>> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Offer, offer::Id>>,
    ) -> DbResult<()> {
        let id = by.into_inner();
        let mut state = self.0.lock().unwrap();
        state.offers.retain(|o| o.id() != id);
        // Emulates `ON DELETE CASCADE` of the real schema.
        state.leasing_variants.retain(|v| v.offer_id != id);
        state.color_variants.retain(|v| v.offer_id != id);
        state.optional_equipment.retain(|e| e.offer_id != id);
        let calculation_ids: Vec<_> = state
            .calculations
            .iter()
            .filter(|c| c.offer_id == id)
            .map(|c| c.id)
            .collect();
        state.calculations.retain(|c| c.offer_id != id);
        state
            .features
            .retain(|f| !calculation_ids.contains(&f.calculation_id));
        Ok(())
    }
}

impl Database<Delete<By<LeasingVariant, leasing_variant::Id>>> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<LeasingVariant, leasing_variant::Id>>,
    ) -> DbResult<()> {
        let id = by.into_inner();
        self.0.lock().unwrap().leasing_variants.retain(|v| v.id != id);
        Ok(())
    }
}

impl Database<Delete<By<ColorVariant, color_variant::Id>>> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<ColorVariant, color_variant::Id>>,
    ) -> DbResult<()> {
        let id = by.into_inner();
        self.0.lock().unwrap().color_variants.retain(|v| v.id != id);
        Ok(())
    }
}

impl Database<Delete<By<OptionalEquipment, optional_equipment::Id>>>
    for MockDb
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<OptionalEquipment, optional_equipment::Id>>,
    ) -> DbResult<()> {
        let id = by.into_inner();
        self.0
            .lock()
            .unwrap()
            .optional_equipment
            .retain(|e| e.id != id);
        Ok(())
    }
}

impl Database<Delete<By<Calculation, calculation::Id>>> for MockDb {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Calculation, calculation::Id>>,
    ) -> DbResult<()> {
        let id = by.into_inner();
        let mut state = self.0.lock().unwrap();
        state.calculations.retain(|c| c.id != id);
        state.features.retain(|f| f.calculation_id != id);
        Ok(())
    }
}

fn service() -> (Service<MockDb, RoleGrants>, MockDb) {
    let db = MockDb::default();
    (Service::new(db.clone(), RoleGrants), db)
}

fn manager() -> Actor {
    Actor {
        id: user::Id::new(),
        roles: vec![user::Role::Manager],
    }
}

fn editor() -> Actor {
    Actor {
        id: user::Id::new(),
        roles: vec![user::Role::Editor],
    }
}

fn viewer() -> Actor {
    Actor {
        id: user::Id::new(),
        roles: vec![user::Role::Viewer],
    }
}

fn czk(amount: i64) -> Money {
    Money {
        amount: Decimal::from(amount),
        currency: Currency::Czk,
    }
}

fn leasing_offer_cmd(
    slug: Option<&str>,
) -> command::CreateOperationalLeasingOffer {
    command::CreateOperationalLeasingOffer {
        actor: manager(),
        slug: slug.map(|s| s.parse().unwrap()),
        public_id: None,
        generation_id: generation::Id::new(),
        brand_id: None,
        model_id: None,
        engine_id: None,
        file_id: None,
        total_price: offer::TotalPrice::new(czk(850_000)).unwrap(),
        description: None,
        note: None,
        is_active: true,
        is_promoted: false,
        is_featured: false,
        is_discounted: false,
        duration_months: None,
        monthly_payment: None,
        annual_mileage_limit: None,
    }
}

fn purchase_offer_cmd(
    slug: Option<&str>,
) -> command::CreateDirectPurchaseOffer {
    command::CreateDirectPurchaseOffer {
        actor: manager(),
        slug: slug.map(|s| s.parse().unwrap()),
        public_id: None,
        generation_id: generation::Id::new(),
        brand_id: None,
        model_id: None,
        engine_id: None,
        file_id: None,
        total_price: offer::TotalPrice::new(czk(1_200_000)).unwrap(),
        description: None,
        note: None,
        is_active: true,
        is_promoted: false,
        is_featured: false,
        is_discounted: false,
        discount: None,
        warranty_years: None,
    }
}

fn individual_offer_cmd() -> command::CreateIndividualOffer {
    command::CreateIndividualOffer {
        actor: manager(),
        slug: None,
        public_id: None,
        generation_id: generation::Id::new(),
        brand_id: None,
        model_id: None,
        engine_id: None,
        file_id: None,
        total_price: offer::TotalPrice::new(czk(2_000_000)).unwrap(),
        description: None,
        note: None,
        is_active: true,
        customer_id: customer::Id::new(),
        assignee_id: None,
        internal_notes: None,
        response_deadline: None,
    }
}

fn variant_cmd(
    offer_id: offer::Id,
    slug: &str,
    is_default: bool,
    is_best_offer: bool,
) -> command::CreateLeasingVariant {
    command::CreateLeasingVariant {
        actor: manager(),
        offer_id,
        slug: slug.parse().unwrap(),
        duration: leasing_variant::DurationMonths::new(36).unwrap(),
        annual_mileage_limit: leasing_variant::MileageLimit::new(15_000)
            .unwrap(),
        vat_rate: Percent::new(Decimal::from(21)).unwrap(),
        price_with_vat: czk(12_100),
        price_without_vat: czk(10_000),
        original_price_with_vat: None,
        original_price_without_vat: None,
        down_payment: None,
        deposit: None,
        setup_fee: None,
        valid_from: None,
        valid_until: None,
        services: leasing_variant::IncludedServices::default(),
        wear_tolerance: None,
        free_mileage_buffer: None,
        is_active: true,
        is_default,
        is_best_offer,
        leasing_company_id: None,
    }
}

fn color_variant_cmd(
    offer_id: offer::Id,
    exterior_color_id: color::Id,
    interior_color_id: Option<color::Id>,
    is_default: bool,
) -> command::CreateColorVariant {
    command::CreateColorVariant {
        actor: manager(),
        offer_id,
        exterior_color_id,
        interior_color_id,
        name: "Alpine White / Black".parse().unwrap(),
        is_default,
        gallery_id: None,
    }
}

#[tokio::test]
async fn operational_leasing_offer_is_forced_public() {
    let (svc, _) = service();

    let offer = svc.execute(leasing_offer_cmd(Some("bmw-x3"))).await.unwrap();

    assert_eq!(offer.kind(), offer::Kind::OperationalLeasing);
    assert!(offer.is_public());
    assert!(offer.is_active());
}

#[tokio::test]
async fn individual_offer_is_never_public() {
    let (svc, _) = service();

    let offer = svc.execute(individual_offer_cmd()).await.unwrap();

    assert_eq!(offer.kind(), offer::Kind::Individual);
    assert!(!offer.is_public());
    match offer {
        Offer::Individual(o) => {
            assert_eq!(o.status, individual::Status::New);
        }
        Offer::OperationalLeasing(_) | Offer::DirectPurchase(_) => {
            panic!("wrong `Offer` kind")
        }
    }
}

#[tokio::test]
async fn occupied_offer_slug_is_rejected() {
    let (svc, _) = service();

    _ = svc.execute(leasing_offer_cmd(Some("audi-q5"))).await.unwrap();
    let err = svc
        .execute(purchase_offer_cmd(Some("audi-q5")))
        .await
        .unwrap_err();

    assert!(matches!(
        err.as_ref(),
        command::create_direct_purchase_offer::ExecutionError::SlugOccupied(_),
    ));
}

#[tokio::test]
async fn occupied_public_id_is_rejected() {
    let (svc, _) = service();

    let mut first = leasing_offer_cmd(None);
    first.public_id = Some("LEGACY-42".parse().unwrap());
    _ = svc.execute(first).await.unwrap();

    let mut second = leasing_offer_cmd(None);
    second.public_id = Some("LEGACY-42".parse().unwrap());
    let err = svc.execute(second).await.unwrap_err();

    assert!(matches!(
        err.as_ref(),
        command::create_operational_leasing_offer::ExecutionError
            ::PublicIdOccupied(_),
    ));
}

#[tokio::test]
async fn viewer_is_forbidden_to_create_offers() {
    let (svc, db) = service();

    let mut cmd = leasing_offer_cmd(None);
    cmd.actor = viewer();
    let err = svc.execute(cmd).await.unwrap_err();

    assert!(matches!(
        err.as_ref(),
        command::create_operational_leasing_offer::ExecutionError
            ::Forbidden(_),
    ));
    assert!(db.0.lock().unwrap().offers.is_empty());
}

#[tokio::test]
async fn editor_is_forbidden_to_delete_offers() {
    let (svc, _) = service();

    let offer = svc.execute(leasing_offer_cmd(None)).await.unwrap();
    let err = svc
        .execute(command::DeleteOffer {
            actor: editor(),
            id: offer.id(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.as_ref(),
        command::delete_offer::ExecutionError::Forbidden(_),
    ));
}

#[tokio::test]
async fn status_update_rejects_non_individual_offers() {
    let (svc, _) = service();

    let offer = svc.execute(leasing_offer_cmd(None)).await.unwrap();
    let err = svc
        .execute(command::UpdateIndividualOfferStatus {
            actor: manager(),
            id: offer.id(),
            status: individual::Status::Completed,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.as_ref(),
        command::update_individual_offer_status::ExecutionError
            ::NotIndividual(_),
    ));
}

#[tokio::test]
async fn status_moves_freely_between_values() {
    let (svc, _) = service();

    let offer = svc.execute(individual_offer_cmd()).await.unwrap();

    for status in [
        individual::Status::Completed,
        individual::Status::InProgress,
        individual::Status::Cancelled,
        individual::Status::New,
    ] {
        let updated = svc
            .execute(command::UpdateIndividualOfferStatus {
                actor: manager(),
                id: offer.id(),
                status,
            })
            .await
            .unwrap();
        match updated {
            Offer::Individual(o) => assert_eq!(o.status, status),
            Offer::OperationalLeasing(_) | Offer::DirectPurchase(_) => {
                panic!("wrong `Offer` kind")
            }
        }
    }
}

#[tokio::test]
async fn leasing_variant_requires_operational_leasing_offer() {
    let (svc, _) = service();

    let offer = svc.execute(purchase_offer_cmd(None)).await.unwrap();
    let err = svc
        .execute(variant_cmd(offer.id(), "36m-15k", false, false))
        .await
        .unwrap_err();

    assert!(matches!(
        err.as_ref(),
        command::create_leasing_variant::ExecutionError
            ::NotOperationalLeasing(_),
    ));
}

#[tokio::test]
async fn default_leasing_variant_is_exclusive() {
    let (svc, db) = service();

    let offer = svc.execute(leasing_offer_cmd(None)).await.unwrap();
    let first = svc
        .execute(variant_cmd(offer.id(), "36m-15k", true, false))
        .await
        .unwrap();
    assert!(first.is_default);

    let second = svc
        .execute(variant_cmd(offer.id(), "48m-20k", true, false))
        .await
        .unwrap();
    assert!(second.is_default);

    let state = db.0.lock().unwrap();
    let defaults: Vec<_> = state
        .leasing_variants
        .iter()
        .filter(|v| v.is_default)
        .collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].id, second.id);
}

#[tokio::test]
async fn best_offer_flag_is_exclusive() {
    let (svc, db) = service();

    let offer = svc.execute(leasing_offer_cmd(None)).await.unwrap();
    let first = svc
        .execute(variant_cmd(offer.id(), "36m-15k", false, true))
        .await
        .unwrap();
    let second = svc
        .execute(variant_cmd(offer.id(), "48m-20k", false, true))
        .await
        .unwrap();
    assert_ne!(first.id, second.id);

    let state = db.0.lock().unwrap();
    let best: Vec<_> = state
        .leasing_variants
        .iter()
        .filter(|v| v.is_best_offer)
        .collect();
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].id, second.id);
}

#[tokio::test]
async fn variant_slug_is_unique_per_offer_only() {
    let (svc, _) = service();

    let offer = svc.execute(leasing_offer_cmd(None)).await.unwrap();
    let other = svc.execute(leasing_offer_cmd(None)).await.unwrap();

    _ = svc
        .execute(variant_cmd(offer.id(), "36m-15k", false, false))
        .await
        .unwrap();
    let err = svc
        .execute(variant_cmd(offer.id(), "36m-15k", false, false))
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::create_leasing_variant::ExecutionError::SlugOccupied(_),
    ));

    // The same slug under another `Offer` is fine.
    _ = svc
        .execute(variant_cmd(other.id(), "36m-15k", false, false))
        .await
        .unwrap();
}

#[tokio::test]
async fn default_color_variant_is_exclusive() {
    let (svc, db) = service();

    let offer = svc.execute(leasing_offer_cmd(None)).await.unwrap();
    _ = svc
        .execute(color_variant_cmd(offer.id(), color::Id::new(), None, true))
        .await
        .unwrap();
    let second = svc
        .execute(color_variant_cmd(offer.id(), color::Id::new(), None, true))
        .await
        .unwrap();

    let state = db.0.lock().unwrap();
    let defaults: Vec<_> = state
        .color_variants
        .iter()
        .filter(|v| v.is_default)
        .collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].id, second.id);
}

#[tokio::test]
async fn color_pair_is_unique_per_offer() {
    let (svc, _) = service();

    let offer = svc.execute(leasing_offer_cmd(None)).await.unwrap();
    let exterior = color::Id::new();
    let interior = color::Id::new();

    _ = svc
        .execute(color_variant_cmd(
            offer.id(),
            exterior,
            Some(interior),
            false,
        ))
        .await
        .unwrap();
    let err = svc
        .execute(color_variant_cmd(
            offer.id(),
            exterior,
            Some(interior),
            false,
        ))
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::create_color_variant::ExecutionError::ColorPairOccupied(_),
    ));

    // A missing interior color is a key of its own, not a wildcard.
    _ = svc
        .execute(color_variant_cmd(offer.id(), exterior, None, false))
        .await
        .unwrap();
}

#[tokio::test]
async fn equipment_item_is_attached_once() {
    let (svc, _) = service();

    let offer = svc.execute(leasing_offer_cmd(None)).await.unwrap();
    let item_id = equipment_item::Id::new();
    let cmd = || command::CreateOptionalEquipment {
        actor: manager(),
        offer_id: offer.id(),
        equipment_item_id: item_id,
        additional_price: czk(500),
        price_period: optional_equipment::PricePeriod::Monthly,
        is_default_selected: false,
        is_available: true,
    };

    _ = svc.execute(cmd()).await.unwrap();
    let err = svc.execute(cmd()).await.unwrap_err();

    assert!(matches!(
        err.as_ref(),
        command::create_optional_equipment::ExecutionError
            ::EquipmentOccupied(_),
    ));
}

#[tokio::test]
async fn calculation_requires_individual_offer() {
    let (svc, _) = service();

    let offer = svc.execute(leasing_offer_cmd(None)).await.unwrap();
    let err = svc
        .execute(command::CreateCalculation {
            actor: manager(),
            offer_id: offer.id(),
            availability: calculation::Availability::InStock,
            exterior_color_id: None,
            interior_color_id: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.as_ref(),
        command::create_calculation::ExecutionError::NotIndividual(_),
    ));
}

#[tokio::test]
async fn deleting_offer_cascades_to_children() {
    let (svc, db) = service();

    let offer = svc.execute(leasing_offer_cmd(None)).await.unwrap();
    _ = svc
        .execute(variant_cmd(offer.id(), "36m-15k", true, false))
        .await
        .unwrap();
    _ = svc
        .execute(color_variant_cmd(offer.id(), color::Id::new(), None, true))
        .await
        .unwrap();

    let deleted = svc
        .execute(command::DeleteOffer {
            actor: manager(),
            id: offer.id(),
        })
        .await
        .unwrap();
    assert_eq!(deleted.id(), offer.id());

    {
        let state = db.0.lock().unwrap();
        assert!(state.offers.is_empty());
        assert!(state.leasing_variants.is_empty());
        assert!(state.color_variants.is_empty());
    }

    let err = svc
        .execute(command::DeleteOffer {
            actor: manager(),
            id: offer.id(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::delete_offer::ExecutionError::OfferNotExists(_),
    ));
}

#[tokio::test]
async fn kind_specific_update_fields_must_match() {
    let (svc, _) = service();

    let offer = svc.execute(purchase_offer_cmd(None)).await.unwrap();
    let err = svc
        .execute(command::UpdateOffer {
            actor: manager(),
            id: offer.id(),
            fields: command::update_offer::Fields {
                operational_leasing: Some(
                    command::update_offer::OperationalLeasingFields {
                        duration_months: None,
                        monthly_payment: Some(Some(czk(9_900))),
                        annual_mileage_limit: None,
                    },
                ),
                ..command::update_offer::Fields::default()
            },
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.as_ref(),
        command::update_offer::ExecutionError::KindMismatch(
            offer::Kind::DirectPurchase,
        ),
    ));
}

#[tokio::test]
async fn updated_offer_slug_is_rechecked_against_other_offers() {
    let (svc, _) = service();

    _ = svc.execute(leasing_offer_cmd(Some("first"))).await.unwrap();
    let second = svc.execute(leasing_offer_cmd(Some("second"))).await.unwrap();

    let update = |slug: &str| command::UpdateOffer {
        actor: manager(),
        id: second.id(),
        fields: command::update_offer::Fields {
            slug: Some(Some(slug.parse().unwrap())),
            ..command::update_offer::Fields::default()
        },
    };

    let err = svc.execute(update("first")).await.unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::update_offer::ExecutionError::SlugOccupied(_),
    ));

    // Re-submitting the own slug is not a conflict.
    let updated = svc.execute(update("second")).await.unwrap();
    assert_eq!(updated.slug(), Some(&"second".parse().unwrap()));
}

#[tokio::test]
async fn updated_variant_slug_is_rechecked_against_siblings() {
    let (svc, _) = service();

    let offer = svc.execute(leasing_offer_cmd(None)).await.unwrap();
    _ = svc
        .execute(variant_cmd(offer.id(), "36m-15k", false, false))
        .await
        .unwrap();
    let second = svc
        .execute(variant_cmd(offer.id(), "48m-20k", false, false))
        .await
        .unwrap();

    let update = |slug: &str| command::UpdateLeasingVariant {
        actor: manager(),
        id: second.id,
        fields: command::update_leasing_variant::Fields {
            slug: Some(slug.parse().unwrap()),
            ..command::update_leasing_variant::Fields::default()
        },
    };

    let err = svc.execute(update("36m-15k")).await.unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::update_leasing_variant::ExecutionError::SlugOccupied(_),
    ));

    let updated = svc.execute(update("48m-20k")).await.unwrap();
    assert_eq!(updated.slug, "48m-20k".parse().unwrap());
}

#[tokio::test]
async fn exclusive_variant_flags_move_on_update() {
    let (svc, db) = service();

    let offer = svc.execute(leasing_offer_cmd(None)).await.unwrap();
    let first = svc
        .execute(variant_cmd(offer.id(), "36m-15k", true, true))
        .await
        .unwrap();
    let second = svc
        .execute(variant_cmd(offer.id(), "48m-20k", false, false))
        .await
        .unwrap();

    let updated = svc
        .execute(command::UpdateLeasingVariant {
            actor: manager(),
            id: second.id,
            fields: command::update_leasing_variant::Fields {
                is_default: Some(true),
                is_best_offer: Some(true),
                ..command::update_leasing_variant::Fields::default()
            },
        })
        .await
        .unwrap();
    assert!(updated.is_default);
    assert!(updated.is_best_offer);

    let state = db.0.lock().unwrap();
    let demoted = state
        .leasing_variants
        .iter()
        .find(|v| v.id == first.id)
        .unwrap();
    assert!(!demoted.is_default);
    assert!(!demoted.is_best_offer);
    assert_eq!(
        state.leasing_variants.iter().filter(|v| v.is_default).count(),
        1,
    );
    assert_eq!(
        state.leasing_variants.iter().filter(|v| v.is_best_offer).count(),
        1,
    );
}

#[tokio::test]
async fn default_color_variant_moves_on_update() {
    let (svc, db) = service();

    let offer = svc.execute(leasing_offer_cmd(None)).await.unwrap();
    let first = svc
        .execute(color_variant_cmd(offer.id(), color::Id::new(), None, true))
        .await
        .unwrap();
    let second = svc
        .execute(color_variant_cmd(offer.id(), color::Id::new(), None, false))
        .await
        .unwrap();

    let updated = svc
        .execute(command::UpdateColorVariant {
            actor: manager(),
            id: second.id,
            fields: command::update_color_variant::Fields {
                is_default: Some(true),
                ..command::update_color_variant::Fields::default()
            },
        })
        .await
        .unwrap();
    assert!(updated.is_default);

    let state = db.0.lock().unwrap();
    assert!(!state
        .color_variants
        .iter()
        .find(|v| v.id == first.id)
        .unwrap()
        .is_default);
    assert_eq!(
        state.color_variants.iter().filter(|v| v.is_default).count(),
        1,
    );
}

#[tokio::test]
async fn updated_color_pair_skips_the_own_pair() {
    let (svc, _) = service();

    let offer = svc.execute(leasing_offer_cmd(None)).await.unwrap();
    let exterior = color::Id::new();
    let interior = color::Id::new();
    let taken = svc
        .execute(color_variant_cmd(
            offer.id(),
            exterior,
            Some(interior),
            false,
        ))
        .await
        .unwrap();
    let other = svc
        .execute(color_variant_cmd(
            offer.id(),
            color::Id::new(),
            None,
            false,
        ))
        .await
        .unwrap();

    // Touching only the name keeps the pair and must not conflict with
    // the variant itself.
    let renamed = svc
        .execute(command::UpdateColorVariant {
            actor: manager(),
            id: taken.id,
            fields: command::update_color_variant::Fields {
                name: Some("Sapphire Blue / Beige".parse().unwrap()),
                ..command::update_color_variant::Fields::default()
            },
        })
        .await
        .unwrap();
    assert_eq!(renamed.exterior_color_id, exterior);

    // Moving onto a sibling's pair is still a conflict.
    let err = svc
        .execute(command::UpdateColorVariant {
            actor: manager(),
            id: other.id,
            fields: command::update_color_variant::Fields {
                exterior_color_id: Some(exterior),
                interior_color_id: Some(Some(interior)),
                ..command::update_color_variant::Fields::default()
            },
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::update_color_variant::ExecutionError::ColorPairOccupied(_),
    ));
}

#[tokio::test]
async fn adding_feature_requires_existing_calculation() {
    let (svc, db) = service();

    let feature_cmd = |calculation_id| command::AddCalculationFeature {
        actor: manager(),
        calculation_id,
        name: "Panoramic roof".parse().unwrap(),
        description: None,
    };

    let err = svc
        .execute(feature_cmd(calculation::Id::new()))
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::add_calculation_feature::ExecutionError
            ::CalculationNotExists(_),
    ));

    let offer = svc.execute(individual_offer_cmd()).await.unwrap();
    let created = svc
        .execute(command::CreateCalculation {
            actor: manager(),
            offer_id: offer.id(),
            availability: calculation::Availability::OnOrder,
            exterior_color_id: None,
            interior_color_id: None,
        })
        .await
        .unwrap();

    let feature = svc.execute(feature_cmd(created.id)).await.unwrap();
    assert_eq!(feature.calculation_id, created.id);
    assert_eq!(db.0.lock().unwrap().features.len(), 1);
}

#[tokio::test]
async fn public_listing_excludes_individual_and_inactive_offers() {
    let (svc, _) = service();

    let public = svc.execute(leasing_offer_cmd(Some("visible"))).await.unwrap();
    _ = svc.execute(individual_offer_cmd()).await.unwrap();
    let mut inactive = leasing_offer_cmd(Some("hidden"));
    inactive.is_active = false;
    _ = svc.execute(inactive).await.unwrap();

    let page = svc
        .execute(query::offers::PublicList::by(Public(
            list::Selector::default(),
        )))
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id(), public.id());

    // The back-office listing still sees everything.
    let page = svc
        .execute(query::offers::List::by(list::Selector::default()))
        .await
        .unwrap();
    assert_eq!(page.len(), 3);
}
