//! [`Query`] collection related to multiple [`Offer`]s.
//!
//! [`Offer`]: crate::domain::Offer

use common::operations::By;

use crate::read::offer::{list, Public};
#[cfg(doc)]
use crate::{domain::Offer, Query};

use super::DatabaseQuery;

/// Queries a page of [`Offer`]s for the back office.
pub type List = DatabaseQuery<By<list::Page, list::Selector>>;

/// Queries a page of [`Offer`]s for the public catalog.
///
/// Only active, publicly visible [`Offer`]s of a public kind are returned,
/// whatever the [`list::Filter`] says.
pub type PublicList = DatabaseQuery<By<list::Page, Public<list::Selector>>>;
