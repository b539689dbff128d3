//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Checks whether this [`Money`] amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        if amount.is_integer() {
            write!(f, "{}{currency}", amount.to_i128().expect("integer"))
        } else {
            write!(f, "{amount}{currency}")
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 {
            return Err("too short");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "Czech Koruna."]
        Czk = 1,

        #[doc = "Euro."]
        Eur = 2,

        #[doc = "US Dollar."]
        Usd = 3,
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Money in `{major}.{minor}{currency}` format, where:
    /// - `major` is an integer;
    /// - `minor` is an optional integer;
    /// - `currency` is a three-letter currency code.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Money = super::Money;

    impl Money {
        fn to_output<S: ScalarValue>(m: &Money) -> Value<S> {
            Value::scalar(m.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Money` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Money` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("8999.90CZK").unwrap(),
            Money {
                amount: decimal("8999.90"),
                currency: Currency::Czk,
            },
        );

        assert_eq!(
            Money::from_str("349.99EUR").unwrap(),
            Money {
                amount: decimal("349.99"),
                currency: Currency::Eur,
            },
        );

        assert_eq!(
            Money::from_str("349.99USD").unwrap(),
            Money {
                amount: decimal("349.99"),
                currency: Currency::Usd,
            },
        );

        assert!(Money::from_str("349.99").is_err());
        assert!(Money::from_str("349.99Cz").is_err());
        assert!(Money::from_str("349.99Koruna").is_err());

        assert!(Money::from_str("349.00CZK").is_ok());
        assert!(Money::from_str("349.0CZK").is_ok());
        assert!(Money::from_str("349CZK").is_ok());
    }

    #[test]
    fn to_string() {
        assert_eq!(
            Money {
                amount: decimal("8999.90"),
                currency: Currency::Czk,
            }
            .to_string(),
            "8999.90CZK",
        );

        assert_eq!(
            Money {
                amount: decimal("349.99"),
                currency: Currency::Eur,
            }
            .to_string(),
            "349.99EUR",
        );

        assert_eq!(
            Money {
                amount: decimal("349.00"),
                currency: Currency::Czk,
            }
            .to_string(),
            "349CZK",
        );
        assert_eq!(
            Money {
                amount: decimal("349"),
                currency: Currency::Usd,
            }
            .to_string(),
            "349USD",
        );
    }

    #[test]
    fn is_negative() {
        assert!(Money::from_str("-1CZK").unwrap().is_negative());
        assert!(!Money::from_str("0CZK").unwrap().is_negative());
        assert!(!Money::from_str("-0CZK").unwrap().is_negative());
        assert!(!Money::from_str("15.5CZK").unwrap().is_negative());
    }
}
