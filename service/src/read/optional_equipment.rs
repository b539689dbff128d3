//! [`OptionalEquipment`] read model definition.
//!
//! [`OptionalEquipment`]: crate::domain::OptionalEquipment

#[cfg(doc)]
use crate::domain::OptionalEquipment;

/// Wrapper around [`OptionalEquipment`] indicating that it `is_available`.
#[derive(Clone, Copy, Debug)]
pub struct Available<T>(pub T);
