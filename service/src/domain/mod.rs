//! Domain definitions.

pub mod calculation;
pub mod catalog;
pub mod color_variant;
pub mod leasing_variant;
pub mod offer;
pub mod optional_equipment;
pub mod user;

pub use self::{
    calculation::Calculation, color_variant::ColorVariant,
    leasing_variant::LeasingVariant, offer::Offer,
    optional_equipment::OptionalEquipment,
};
