use std::{
    fmt,
    ops::{Add, AddAssign, Mul},
};

use serde_json::Value;

/// Price amount represented as **integer cents**.
///
/// Use this type for **all** monetary values in the engine (item prices,
/// per-category contributions, vacation totals) to avoid floating-point
/// drift.
///
/// # Examples
///
/// ```rust
/// use engine::PriceCents;
///
/// let amount = PriceCents::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "$12.34");
/// ```
///
/// Item fields arrive as free-form JSON (numbers or form strings). Anything
/// that is not a finite number resolves to zero instead of failing:
///
/// ```rust
/// use engine::PriceCents;
/// use serde_json::json;
///
/// assert_eq!(PriceCents::from_field(&json!(100)).cents(), 10_000);
/// assert_eq!(PriceCents::from_field(&json!("50")).cents(), 5_000);
/// assert_eq!(PriceCents::from_field(&json!("cheap")).cents(), 0);
/// assert_eq!(PriceCents::from_field(&json!(null)).cents(), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PriceCents(i64);

impl PriceCents {
    pub const ZERO: PriceCents = PriceCents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Converts a JSON field value into cents.
    ///
    /// - numbers are taken as major units (`100` → `10000` cents)
    /// - strings are parsed as decimal major units (`"50"`, `"12.5"`)
    /// - everything else (missing, null, arrays, non-numeric text) is zero
    #[must_use]
    pub fn from_field(value: &Value) -> Self {
        match value {
            Value::Number(number) => number.as_f64().map(Self::from_major).unwrap_or(Self::ZERO),
            Value::String(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .map(Self::from_major)
                .unwrap_or(Self::ZERO),
            _ => Self::ZERO,
        }
    }

    fn from_major(value: f64) -> Self {
        if value.is_finite() {
            Self((value * 100.0).round() as i64)
        } else {
            Self::ZERO
        }
    }
}

impl fmt::Display for PriceCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let major = abs / 100;
        let cents = abs % 100;
        write!(f, "{sign}${major}.{cents:02}")
    }
}

impl From<i64> for PriceCents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<PriceCents> for i64 {
    fn from(value: PriceCents) -> Self {
        value.0
    }
}

impl Add for PriceCents {
    type Output = PriceCents;

    fn add(self, rhs: PriceCents) -> Self::Output {
        PriceCents(self.0 + rhs.0)
    }
}

impl AddAssign for PriceCents {
    fn add_assign(&mut self, rhs: PriceCents) {
        self.0 += rhs.0;
    }
}

impl Mul<i64> for PriceCents {
    type Output = PriceCents;

    fn mul(self, rhs: i64) -> Self::Output {
        PriceCents(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn display_formats_dollars() {
        assert_eq!(PriceCents::new(0).to_string(), "$0.00");
        assert_eq!(PriceCents::new(1).to_string(), "$0.01");
        assert_eq!(PriceCents::new(1050).to_string(), "$10.50");
        assert_eq!(PriceCents::new(-1050).to_string(), "-$10.50");
    }

    #[test]
    fn field_accepts_numbers_and_decimal_strings() {
        assert_eq!(PriceCents::from_field(&json!(100)).cents(), 10_000);
        assert_eq!(PriceCents::from_field(&json!(12.5)).cents(), 1_250);
        assert_eq!(PriceCents::from_field(&json!("50")).cents(), 5_000);
        assert_eq!(PriceCents::from_field(&json!("  2.30 ")).cents(), 230);
    }

    #[test]
    fn malformed_fields_resolve_to_zero() {
        assert_eq!(PriceCents::from_field(&json!("cheap")).cents(), 0);
        assert_eq!(PriceCents::from_field(&json!("")).cents(), 0);
        assert_eq!(PriceCents::from_field(&json!(null)).cents(), 0);
        assert_eq!(PriceCents::from_field(&json!(["120"])).cents(), 0);
    }
}
