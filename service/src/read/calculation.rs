//! [`Calculation`] read model definition.
//!
//! [`Calculation`]: crate::domain::Calculation

use crate::domain::{calculation, Calculation};

/// [`Calculation`] along with all its [`Feature`]s.
///
/// [`Feature`]: calculation::Feature
#[derive(Clone, Debug)]
pub struct WithFeatures {
    /// The [`Calculation`] itself.
    pub calculation: Calculation,

    /// [`Feature`]s of the [`Calculation`].
    ///
    /// [`Feature`]: calculation::Feature
    pub features: Vec<calculation::Feature>,
}
