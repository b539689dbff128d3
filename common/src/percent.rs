//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use rust_decimal::Decimal;

/// Percentage with decimal precision, within `0..=100`.
///
/// Used for rates applied to prices, such as a VAT rate or a wear tolerance.
#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] if the provided `rate` lies within
    /// `0..=100`.
    #[must_use]
    pub fn new(rate: Decimal) -> Option<Self> {
        if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
            None
        } else {
            #[expect(
                clippy::allow_attributes,
                reason = "TODO: Remove once clippy is fixed"
            )]
            #[allow(unsafe_code, reason = "invariants checked already")]
            Some(unsafe { Self::new_unchecked(rate) })
        }
    }

    /// Creates a new [`Percent`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided `rate` must lie within `0..=100`.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(rate: Decimal) -> Self {
        Self(rate)
    }

    /// Returns the rate of this [`Percent`].
    #[must_use]
    pub const fn rate(self) -> Decimal {
        self.0
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Percentage with decimal precision, within `0..=100`.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Percent = super::Percent;

    impl Percent {
        fn to_output<S: ScalarValue>(p: &Percent) -> Value<S> {
            Value::scalar(p.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Percent` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Percent` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::Percent;

    #[test]
    fn accepts_whole_range_inclusively() {
        for rate in [0, 21, 100] {
            let rate = Decimal::from(rate);
            assert_eq!(Percent::new(rate).map(Percent::rate), Some(rate));
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Percent::new(Decimal::from(-1)), None);
        assert_eq!(Percent::new(Decimal::from(101)), None);
        assert!("100.5".parse::<Percent>().is_err());
    }
}
