//! [`Command`] definition.

pub mod add_calculation_feature;
pub mod create_calculation;
pub mod create_color_variant;
pub mod create_direct_purchase_offer;
pub mod create_individual_offer;
pub mod create_leasing_variant;
pub mod create_operational_leasing_offer;
pub mod create_optional_equipment;
pub mod delete_calculation;
pub mod delete_color_variant;
pub mod delete_leasing_variant;
pub mod delete_offer;
pub mod delete_optional_equipment;
pub mod update_color_variant;
pub mod update_individual_offer_status;
pub mod update_leasing_variant;
pub mod update_offer;
pub mod update_optional_equipment;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_calculation_feature::AddCalculationFeature,
    create_calculation::CreateCalculation,
    create_color_variant::CreateColorVariant,
    create_direct_purchase_offer::CreateDirectPurchaseOffer,
    create_individual_offer::CreateIndividualOffer,
    create_leasing_variant::CreateLeasingVariant,
    create_operational_leasing_offer::CreateOperationalLeasingOffer,
    create_optional_equipment::CreateOptionalEquipment,
    delete_calculation::DeleteCalculation,
    delete_color_variant::DeleteColorVariant,
    delete_leasing_variant::DeleteLeasingVariant, delete_offer::DeleteOffer,
    delete_optional_equipment::DeleteOptionalEquipment,
    update_color_variant::UpdateColorVariant,
    update_individual_offer_status::UpdateIndividualOfferStatus,
    update_leasing_variant::UpdateLeasingVariant, update_offer::UpdateOffer,
    update_optional_equipment::UpdateOptionalEquipment,
};
