//! [`Offer`] read model definition.
//!
//! [`Offer`]: crate::domain::Offer

/// Wrapper around a selector restricting it to the public catalog.
///
/// Selecting through [`Public`] unconditionally keeps only active, publicly
/// visible [`Offer`]s of a public kind, no matter what the wrapped selector
/// asks for.
///
/// [`Offer`]: crate::domain::Offer
#[derive(Clone, Copy, Debug)]
pub struct Public<T>(pub T);

pub mod list {
    //! [`Offer`]s list definitions.

    use common::{Money, Slice};

    use crate::domain::{
        catalog::{brand, customer, generation, model},
        offer::{self, individual},
        user,
    };
    #[cfg(doc)]
    use crate::domain::Offer;

    /// Selector of a page of [`Offer`]s.
    #[derive(Clone, Debug, Default)]
    pub struct Selector {
        /// [`Filter`] to select [`Offer`]s by.
        pub filter: Filter,

        /// [`Slice`] of the filtered [`Offer`]s to select.
        pub slice: Slice,
    }

    /// Page of [`Offer`]s matching a [`Selector`].
    pub type Page = Vec<crate::domain::Offer>;

    /// Filter for a [`Selector`].
    ///
    /// Conditions are combined with `AND`, [`None`] meaning "any".
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// [`offer::Kind`] to select [`Offer`]s of.
        pub kind: Option<offer::Kind>,

        /// Model generation to select [`Offer`]s about.
        pub generation_id: Option<generation::Id>,

        /// Vehicle brand to select [`Offer`]s about.
        pub brand_id: Option<brand::Id>,

        /// Vehicle model to select [`Offer`]s about.
        pub model_id: Option<model::Id>,

        /// Required `is_active` value of the selected [`Offer`]s.
        pub is_active: Option<bool>,

        /// Required `is_public` value of the selected [`Offer`]s.
        pub is_public: Option<bool>,

        /// Lower bound of the total price of the selected [`Offer`]s.
        pub min_total_price: Option<Money>,

        /// Upper bound of the total price of the selected [`Offer`]s.
        pub max_total_price: Option<Money>,

        /// [`individual::Status`] to select individual [`Offer`]s in.
        pub status: Option<individual::Status>,

        /// Customer to select individual [`Offer`]s of.
        pub customer_id: Option<customer::Id>,

        /// Assignee to select individual [`Offer`]s of.
        pub assignee_id: Option<user::Id>,
    }
}
