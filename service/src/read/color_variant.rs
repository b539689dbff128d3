//! [`ColorVariant`] read model definition.
//!
//! [`ColorVariant`]: crate::domain::ColorVariant

use crate::domain::catalog::color;
#[cfg(doc)]
use crate::domain::{ColorVariant, Offer};

/// Projection clearing the `is_default` flag of every [`ColorVariant`] of an
/// [`Offer`].
#[derive(Clone, Copy, Debug)]
pub struct NoDefault;

/// Color pair of a [`ColorVariant`], unique per [`Offer`].
///
/// A missing interior color is a distinct key of its own, not a wildcard.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Pair {
    /// ID of the exterior color.
    pub exterior_color_id: color::Id,

    /// ID of the interior color, if specified.
    pub interior_color_id: Option<color::Id>,
}
