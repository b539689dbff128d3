//! Read entities definitions.

pub mod calculation;
pub mod color_variant;
pub mod leasing_variant;
pub mod offer;
pub mod optional_equipment;
