use crate::error::{Error, Result};

/// Number of ranks whose discount is computed up front
pub const NUM_PRECOMPUTED_DISCOUNTS: usize = 100;

/// DCG style discount of a 0-based rank: ln(base) / ln(base + rank).
///
/// Equals 1 at rank 0 and decreases with rank for any base above 1.
#[inline]
pub fn discount(rank: usize, base: f64) -> f64 {
    base.ln() / (base + rank as f64).ln()
}

#[derive(Debug, Clone, PartialEq)]
/// Discounts for the top ranks, computed once per loss.
///
/// Ranks past the table are evaluated on demand and not stored, so large
/// groups don't grow the table.
pub struct DiscountTable {
    /// Base of the logarithm
    base: f64,
    /// discount(rank) for rank < NUM_PRECOMPUTED_DISCOUNTS
    precomputed: Vec<f64>,
}

impl DiscountTable {
    /// Builds the table, rejecting bases for which the discount is undefined
    pub fn new(base: f64) -> Result<Self> {
        if !(base.is_finite() && base > 1.) {
            return Err(Error::InvalidDcgBase(base));
        }

        let precomputed = (0..NUM_PRECOMPUTED_DISCOUNTS)
            .map(|rank| discount(rank, base))
            .collect();
        Ok(DiscountTable {
            base: base,
            precomputed: precomputed,
        })
    }

    /// Base of the logarithm
    pub fn base(&self) -> f64 {
        self.base
    }

    #[inline]
    /// Discount for `rank`
    pub fn lookup(&self, rank: usize) -> f64 {
        match self.precomputed.get(rank) {
            Some(d) => *d,
            None => discount(rank, self.base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount() {
        assert_eq!(discount(0, 2.), 1.);
        assert!((discount(2, 2.) - 0.5).abs() < 1e-12);
        // ln(10) / ln(100)
        assert!((discount(90, 10.) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_table_matches_formula() {
        for &base in &[1.01, 2., std::f64::consts::E, 10., 1000.] {
            let table = DiscountTable::new(base).expect("valid base");
            assert_eq!(table.base(), base);
            assert_eq!(table.lookup(0), 1.);
            for rank in 0..(2 * NUM_PRECOMPUTED_DISCOUNTS) {
                assert_eq!(table.lookup(rank), discount(rank, base));
            }
        }
    }

    #[test]
    fn test_table_decreasing() {
        let table = DiscountTable::new(2.).expect("valid base");
        let mut last = table.lookup(0);
        for rank in 1..1000 {
            let d = table.lookup(rank);
            assert!(d < last, "discount({}) = {} >= {}", rank, d, last);
            last = d;
        }
    }

    #[test]
    fn test_sharper_decay_for_smaller_base() {
        let sharp = DiscountTable::new(1.5).expect("valid base");
        let flat = DiscountTable::new(20.).expect("valid base");
        for rank in 1..50 {
            assert!(sharp.lookup(rank) < flat.lookup(rank));
        }
    }

    #[test]
    fn test_invalid_base() {
        for &base in &[1., 0.5, 0., -2., std::f64::NAN, std::f64::INFINITY] {
            match DiscountTable::new(base) {
                Err(Error::InvalidDcgBase(_)) => {}
                other => panic!("base {} should be rejected, got {:?}", base, other),
            }
        }
    }
}
