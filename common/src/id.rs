//! Macros for defining ID newtypes.

/// Macro for defining an [UUID]-backed ID newtype.
///
/// # Example
///
/// ```rust
/// # use crate::common::define_id;
///
/// define_id! {
///     #[doc = "ID of an `Engine`."]
///     Id
/// }
/// ```
///
/// [UUID]: https://wikipedia.org/wiki/Universally_unique_identifier
#[macro_export]
macro_rules! define_id {
    (
        #[doc = $doc:literal]
        $name:ident
    ) => {
        #[doc = $doc]
        #[derive(
            Clone,
            Copy,
            Debug,
            Eq,
            Hash,
            PartialEq,
            $crate::private::derive_more::Display,
            $crate::private::derive_more::From,
            $crate::private::derive_more::FromStr,
            $crate::private::derive_more::Into,
        )]
        #[cfg_attr(
            feature = "serde",
            derive(
                $crate::private::serde::Deserialize,
                $crate::private::serde::Serialize,
            ),
            serde(transparent),
        )]
        #[cfg_attr(
            feature = "postgres",
            derive(
                $crate::private::postgres_types::ToSql,
                $crate::private::postgres_types::FromSql,
            ),
            postgres(transparent),
        )]
        pub struct $name($crate::private::uuid::Uuid);

        impl $name {
            /// Creates a new random ID.
            #[must_use]
            pub fn new() -> Self {
                Self($crate::private::uuid::Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
