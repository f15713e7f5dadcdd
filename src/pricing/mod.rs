use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Platform cut taken on every booking, in basis points (500 = 5%)
pub const SERVICE_FEE_BPS: i64 = 500;

const BPS_DENOMINATOR: i64 = 10_000;

/// Rental-duration option chosen at checkout.
///
/// Each term carries a fixed number of billed months applied to the monthly
/// rent. Parsing an unknown value fails loudly; there is no fallback term.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LeaseTerm {
    /// One semester, billed as 6 months
    ShortTerm,
    /// Full academic year, billed as 12 months
    StandardTerm,
    /// Month-to-month, billed one month at a time
    Flexible,
}

impl LeaseTerm {
    /// Number of months billed up front for this term
    pub fn months(&self) -> i64 {
        match self {
            LeaseTerm::ShortTerm => 6,
            LeaseTerm::StandardTerm => 12,
            LeaseTerm::Flexible => 1,
        }
    }
}

impl fmt::Display for LeaseTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LeaseTerm::ShortTerm => "short-term",
            LeaseTerm::StandardTerm => "standard-term",
            LeaseTerm::Flexible => "flexible",
        };
        f.write_str(s)
    }
}

/// Raised when a lease-term string from outside the type system (a form
/// value, a persisted record) names no known term.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized lease term '{0}'")]
pub struct InvalidLeaseTerm(pub String);

impl FromStr for LeaseTerm {
    type Err = InvalidLeaseTerm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short-term" => Ok(LeaseTerm::ShortTerm),
            "standard-term" => Ok(LeaseTerm::StandardTerm),
            "flexible" => Ok(LeaseTerm::Flexible),
            other => Err(InvalidLeaseTerm(other.to_string())),
        }
    }
}

/// Amounts due at checkout for one listing and lease term.
/// Derived on demand, never stored as state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBreakdown {
    /// Rent for the full term: monthly price times billed months
    pub base: i64,
    /// Platform fee, rounded half-up to the nearest whole unit
    pub service_fee: i64,
    /// `base + service_fee`
    pub total: i64,
}

/// Compute the checkout amounts for a monthly price and lease term.
///
/// Pure and deterministic: identical inputs always yield identical output.
/// The fee is computed in integer basis-point arithmetic; adding half the
/// denominator before dividing rounds half-up for the non-negative amounts
/// the domain produces.
pub fn price_breakdown(price_per_month: i64, term: LeaseTerm) -> PriceBreakdown {
    let base = price_per_month * term.months();
    let service_fee = (base * SERVICE_FEE_BPS + BPS_DENOMINATOR / 2) / BPS_DENOMINATOR;
    PriceBreakdown {
        base,
        service_fee,
        total: base + service_fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_term_breakdown() {
        let b = price_breakdown(150_000, LeaseTerm::StandardTerm);
        assert_eq!(b.base, 1_800_000);
        assert_eq!(b.service_fee, 90_000);
        assert_eq!(b.total, 1_890_000);
    }

    #[test]
    fn short_term_breakdown() {
        let b = price_breakdown(150_000, LeaseTerm::ShortTerm);
        assert_eq!(b.base, 900_000);
        assert_eq!(b.service_fee, 45_000);
        assert_eq!(b.total, 945_000);
    }

    #[test]
    fn flexible_bills_a_single_month() {
        let b = price_breakdown(120_000, LeaseTerm::Flexible);
        assert_eq!(b.base, 120_000);
        assert_eq!(b.service_fee, 6_000);
        assert_eq!(b.total, 126_000);
    }

    #[test]
    fn fee_rounds_half_up() {
        // 5% of 10 is 0.5, which rounds to 1, not 0
        let b = price_breakdown(10, LeaseTerm::Flexible);
        assert_eq!(b.service_fee, 1);
        assert_eq!(b.total, 11);

        // 5% of 29 is 1.45, which rounds down to 1
        let b = price_breakdown(29, LeaseTerm::Flexible);
        assert_eq!(b.service_fee, 1);
    }

    #[test]
    fn breakdown_is_deterministic() {
        let a = price_breakdown(165_000, LeaseTerm::ShortTerm);
        let b = price_breakdown(165_000, LeaseTerm::ShortTerm);
        assert_eq!(a, b);
    }

    #[test]
    fn parses_known_terms() {
        assert_eq!("short-term".parse(), Ok(LeaseTerm::ShortTerm));
        assert_eq!("standard-term".parse(), Ok(LeaseTerm::StandardTerm));
        assert_eq!("flexible".parse(), Ok(LeaseTerm::Flexible));
    }

    #[test]
    fn rejects_unknown_term() {
        let err = "quarterly".parse::<LeaseTerm>().unwrap_err();
        assert_eq!(err, InvalidLeaseTerm("quarterly".to_string()));
    }

    #[test]
    fn term_serde_round_trips_kebab_case() {
        let json = serde_json::to_string(&LeaseTerm::StandardTerm).unwrap();
        assert_eq!(json, "\"standard-term\"");
        let back: LeaseTerm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LeaseTerm::StandardTerm);
    }
}
