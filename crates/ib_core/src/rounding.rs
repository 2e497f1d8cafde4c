//! Integer-first ratio type and helpers.
//!
//! Threshold decisions compare cross-multiplied integers; nothing on a
//! decision path goes through floating point.

use core::cmp::Ordering;

use crate::errors::CoreError;
use crate::variables::Pct;

/// Exact non-negative ratio with a positive denominator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ratio {
    pub num: u64,
    pub den: u64,
}

fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    if a == 0 { 1 } else { a }
}

/// Construct a ratio reduced by GCD; `den == 0` is rejected.
pub fn new_ratio_checked(num: u64, den: u64) -> Result<Ratio, CoreError> {
    if den == 0 {
        return Err(CoreError::InvalidRatio);
    }
    let g = gcd_u64(num, den);
    Ok(Ratio {
        num: num / g,
        den: den / g,
    })
}

impl Ratio {
    /// Exact comparison against an integer percentage.
    pub fn cmp_pct(&self, pct: Pct) -> Ordering {
        let lhs = (self.num as u128) * 100;
        let rhs = (pct.as_u8() as u128) * (self.den as u128);
        lhs.cmp(&rhs)
    }

    #[inline]
    pub fn at_most_pct(&self, pct: Pct) -> bool {
        self.cmp_pct(pct) != Ordering::Greater
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(v: u8) -> Pct {
        Pct::new(v).unwrap()
    }

    #[test]
    fn zero_denominator_rejected() {
        assert_eq!(new_ratio_checked(1, 0), Err(CoreError::InvalidRatio));
    }

    #[test]
    fn ratio_is_reduced() {
        assert_eq!(new_ratio_checked(4, 10).unwrap(), Ratio { num: 2, den: 5 });
        assert_eq!(new_ratio_checked(0, 7).unwrap(), Ratio { num: 0, den: 1 });
    }

    #[test]
    fn boundary_is_inclusive() {
        // 1/5 == 20% exactly
        assert!(new_ratio_checked(1, 5).unwrap().at_most_pct(pct(20)));
        assert!(!new_ratio_checked(2, 9).unwrap().at_most_pct(pct(20)));
        assert!(new_ratio_checked(0, 3).unwrap().at_most_pct(pct(0)));
    }
}
