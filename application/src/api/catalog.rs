//! Scalars referring to the vehicle catalog.
//!
//! The catalog itself lives in another system, so these IDs are plain
//! references without any GraphQL object behind them.

use derive_more::{Display, From, Into};
use juniper::GraphQLScalar;
use service::domain::catalog;
use uuid::Uuid;

/// Unique identifier of a vehicle `Brand`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(catalog::brand::Id)]
#[into(catalog::brand::Id)]
#[graphql(name = "BrandId", transparent)]
pub struct BrandId(Uuid);

/// Unique identifier of a vehicle `Model`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(catalog::model::Id)]
#[into(catalog::model::Id)]
#[graphql(name = "ModelId", transparent)]
pub struct ModelId(Uuid);

/// Unique identifier of a vehicle model `Generation`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(catalog::generation::Id)]
#[into(catalog::generation::Id)]
#[graphql(name = "GenerationId", transparent)]
pub struct GenerationId(Uuid);

/// Unique identifier of an `Engine`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(catalog::engine::Id)]
#[into(catalog::engine::Id)]
#[graphql(name = "EngineId", transparent)]
pub struct EngineId(Uuid);

/// Unique identifier of a `Color`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(catalog::color::Id)]
#[into(catalog::color::Id)]
#[graphql(name = "ColorId", transparent)]
pub struct ColorId(Uuid);

/// Unique identifier of an `EquipmentItem`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(catalog::equipment_item::Id)]
#[into(catalog::equipment_item::Id)]
#[graphql(name = "EquipmentItemId", transparent)]
pub struct EquipmentItemId(Uuid);

/// Unique identifier of a `LeasingCompany`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(catalog::leasing_company::Id)]
#[into(catalog::leasing_company::Id)]
#[graphql(name = "LeasingCompanyId", transparent)]
pub struct LeasingCompanyId(Uuid);

/// Unique identifier of a stored `File`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(catalog::file::Id)]
#[into(catalog::file::Id)]
#[graphql(name = "FileId", transparent)]
pub struct FileId(Uuid);

/// Unique identifier of a `Gallery`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(catalog::gallery::Id)]
#[into(catalog::gallery::Id)]
#[graphql(name = "GalleryId", transparent)]
pub struct GalleryId(Uuid);

/// Unique identifier of a `Customer`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(catalog::customer::Id)]
#[into(catalog::customer::Id)]
#[graphql(name = "CustomerId", transparent)]
pub struct CustomerId(Uuid);
