use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The lookback windows offered to users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookbackWindow {
    SixMonths,
    OneYear,
    ThreeYears,
}

impl LookbackWindow {
    pub const ALL: [LookbackWindow; 3] = [Self::SixMonths, Self::OneYear, Self::ThreeYears];

    pub fn days(self) -> i64 {
        match self {
            Self::SixMonths => 180,
            Self::OneYear => 365,
            Self::ThreeYears => 1095,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SixMonths => "6 months",
            Self::OneYear => "1 year",
            Self::ThreeYears => "3 years",
        }
    }

    /// Recognized window for a day count; other counts are still valid lookbacks
    pub fn from_days(days: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.days() == days)
    }
}

impl fmt::Display for LookbackWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LookbackWindow {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "6m" | "6mo" | "6months" => Ok(Self::SixMonths),
            "1y" | "1yr" | "1year" => Ok(Self::OneYear),
            "3y" | "3yr" | "3years" => Ok(Self::ThreeYears),
            other => Err(format!("unknown lookback window '{other}' (expected 6m, 1y or 3y)")),
        }
    }
}

/// The raw `days` value of a request, before integer coercion.
///
/// Clients send it either as a JSON number or as the string value of a
/// form control, so both are accepted here (booleans count as 0 and 1) and coerced by [`LookbackDays::to_days`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookbackDays(pub Value);

impl LookbackDays {
    pub fn to_days(&self) -> Result<i64> {
        match &self.0 {
            Value::Number(n) => {
                if let Some(days) = n.as_i64() {
                    return Ok(days);
                }
                // Fractional values truncate toward zero
                match n.as_f64().map(f64::trunc) {
                    Some(f) if f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
                    _ => Err(Error::InputCoercion {
                        msg: format!("days is out of range: {n}"),
                    }),
                }
            }
            Value::String(s) => s.trim().parse::<i64>().map_err(|_| Error::InputCoercion {
                msg: format!("days must be an integer, got {s:?}"),
            }),
            Value::Bool(b) => Ok(i64::from(*b)),
            Value::Null => Err(Error::InputCoercion {
                msg: "days is required".to_string(),
            }),
            other => Err(Error::InputCoercion {
                msg: format!("days must be an integer, got {other}"),
            }),
        }
    }
}

impl From<i64> for LookbackDays {
    fn from(days: i64) -> Self {
        Self(Value::from(days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_and_numeric_string_coerce() {
        assert_eq!(LookbackDays(json!(365)).to_days().unwrap(), 365);
        assert_eq!(LookbackDays(json!("1095")).to_days().unwrap(), 1095);
        assert_eq!(LookbackDays(json!(" 180 ")).to_days().unwrap(), 180);
        assert_eq!(LookbackDays(json!(30.9)).to_days().unwrap(), 30);
        assert_eq!(LookbackDays(json!(true)).to_days().unwrap(), 1);
        assert_eq!(LookbackDays(json!(false)).to_days().unwrap(), 0);
    }

    #[test]
    fn test_non_numeric_values_fail() {
        for value in [json!("abc"), json!(""), json!("3.5"), json!(null), json!([1])] {
            let result = LookbackDays(value.clone()).to_days();
            assert!(
                matches!(result, Err(Error::InputCoercion { .. })),
                "expected coercion failure for {value}"
            );
        }
    }

    #[test]
    fn test_unrecognized_positive_counts_are_accepted() {
        assert_eq!(LookbackDays(json!(7)).to_days().unwrap(), 7);
        assert_eq!(LookbackWindow::from_days(7), None);
    }

    #[test]
    fn test_window_labels() {
        assert_eq!(LookbackWindow::from_days(180), Some(LookbackWindow::SixMonths));
        assert_eq!(LookbackWindow::from_days(365).unwrap().label(), "1 year");
        assert_eq!(LookbackWindow::ThreeYears.days(), 1095);
        assert_eq!("3y".parse::<LookbackWindow>().unwrap(), LookbackWindow::ThreeYears);
        assert!("2w".parse::<LookbackWindow>().is_err());
    }
}
