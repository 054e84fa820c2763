use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::algebra::algebraerror::AlgebraError;
use crate::algebra::term::Term;
use crate::math::exactarithmetic::{
    exact_add,
    exact_div,
    exact_mul,
    exact_sub
};

/// Terms keyed by order, at most one per order.
///
/// Storage is ascending by order; display walks it in descending order.
/// Terms whose merged coefficient is zero stay in the map and are only
/// skipped when rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    terms: BTreeMap<Decimal, Term>
}

impl Polynomial {
    /// Builds a polynomial, merging terms that share an order in input order.
    pub fn new<I>(terms: I) -> Result<Polynomial, AlgebraError>
        where I: IntoIterator<Item = Term> {
        let mut map: BTreeMap<Decimal, Term> = BTreeMap::new();
        for term in terms {
            match map.entry(term.order()) {
                Entry::Occupied(mut entry) => {
                    let merged = entry.get().add(&term)?;
                    debug!(order = %term.order(), coefficient = %merged.coefficient(), "merged like terms");
                    entry.insert(merged);
                },
                Entry::Vacant(entry) => {
                    entry.insert(term);
                }
            }
        }
        Ok(Polynomial { terms: map })
    }

    pub fn terms(&self) -> impl DoubleEndedIterator<Item = &Term> {
        self.terms.values()
    }

    pub fn terms_descending(&self) -> impl Iterator<Item = &Term> {
        self.terms.values().rev()
    }

    pub fn term(&self, order: &Decimal) -> Option<&Term> {
        self.terms.get(order)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// First derivative. Constant terms contribute nothing.
    pub fn differentiate(&self) -> Result<Polynomial, AlgebraError> {
        let mut derived = Vec::with_capacity(self.terms.len());
        for term in self.terms.values() {
            if term.order().is_zero() {
                continue;
            }
            let coefficient = exact_mul(term.coefficient(), term.order())?;
            let order = exact_sub(term.order(), Decimal::ONE)?;
            derived.push(Term::new(coefficient, term.variable().clone(), order));
        }
        debug!(terms = derived.len(), "differentiated polynomial");
        Polynomial::new(derived)
    }

    /// Antiderivative without a constant of integration.
    ///
    /// Negative orders are rejected, as are coefficients whose quotient by
    /// `order + 1` has no exact decimal form.
    pub fn integrate(&self) -> Result<Polynomial, AlgebraError> {
        let mut integrated = Vec::with_capacity(self.terms.len());
        for term in self.terms.values() {
            if term.order() < Decimal::ZERO {
                warn!(order = %term.order(), "integration of negative order rejected");
                return Err(AlgebraError::UnsupportedIntegration { order: term.order() });
            }
            let order = exact_add(term.order(), Decimal::ONE)?;
            let coefficient = exact_div(term.coefficient(), order).inspect_err(|error| {
                warn!(%error, "integration rejected");
            })?;
            integrated.push(Term::new(coefficient, term.variable().clone(), order));
        }
        debug!(terms = integrated.len(), "integrated polynomial");
        Polynomial::new(integrated)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut emitted = false;
        for term in self.terms_descending() {
            let coefficient = term.coefficient();
            if coefficient.is_zero() {
                continue;
            }
            if emitted {
                let separator = if coefficient > Decimal::ZERO { " +" } else { " " };
                write!(f, "{}", separator)?;
            }
            write!(f, "{}", term)?;
            emitted = true;
        }
        if !emitted {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::algebra::variable::Variable;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn quadratic(x: &Variable) -> Polynomial {
        Polynomial::new(vec![
            Term::from_integers(3, x.clone(), 2),
            Term::from_integers(2, x.clone(), 1),
            Term::from_integers(5, x.clone(), 0)
        ]).unwrap()
    }

    #[test]
    fn merge_is_order_independent() {
        let x = Variable::new("x");
        let a = Polynomial::new(vec![Term::from_integers(3, x.clone(), 2), Term::from_integers(4, x.clone(), 2)]).unwrap();
        let b = Polynomial::new(vec![Term::from_integers(4, x.clone(), 2), Term::from_integers(3, x.clone(), 2)]).unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a.to_string(), "7x^2");
        assert_eq!(b.to_string(), "7x^2");
        assert_eq!(a, b);
    }

    #[test]
    fn numerically_equal_orders_share_a_key() {
        let x = Variable::new("x");
        let p = Polynomial::new(vec![
            Term::new(Decimal::ONE, x.clone(), dec("2")),
            Term::new(Decimal::ONE, x.clone(), dec("2.0"))
        ]).unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.term(&dec("2")).unwrap().coefficient(), dec("2"));
    }

    #[test]
    fn merge_propagates_mismatched_variable() {
        let x = Variable::new("x");
        let y = Variable::new("y");
        let result = Polynomial::new(vec![Term::from_integers(1, x, 2), Term::from_integers(1, y, 2)]);
        assert_eq!(result, Err(AlgebraError::MismatchedVariable));
    }

    #[test]
    fn cancelled_terms_are_kept_but_not_rendered() {
        let x = Variable::new("x");
        let p = Polynomial::new(vec![
            Term::from_integers(2, x.clone(), 3),
            Term::from_integers(1, x.clone(), 1),
            Term::from_integers(-2, x.clone(), 3)
        ]).unwrap();
        assert_eq!(p.len(), 2);
        assert!(p.term(&Decimal::from(3)).unwrap().coefficient().is_zero());
        assert_eq!(p.to_string(), "1x");
    }

    #[test]
    fn render_separators() {
        let x = Variable::new("x");
        let p = Polynomial::new(vec![
            Term::from_integers(5, x.clone(), 0),
            Term::from_integers(-2, x.clone(), 1),
            Term::from_integers(3, x.clone(), 2)
        ]).unwrap();
        assert_eq!(p.to_string(), "3x^2 -2x +5");
    }

    #[test]
    fn render_leading_negative() {
        let x = Variable::new("x");
        let p = Polynomial::new(vec![Term::from_integers(-1, x.clone(), 4), Term::from_integers(7, x.clone(), 0)]).unwrap();
        assert_eq!(p.to_string(), "-1x^4 +7");
    }

    #[test]
    fn merge_that_would_round_is_an_error() {
        let x = Variable::new("x");
        let result = Polynomial::new(vec![
            Term::new(dec("10000000000000000000000000000"), x.clone(), Decimal::ONE),
            Term::new(dec("0.1"), x, Decimal::ONE)
        ]);
        assert_eq!(result, Err(AlgebraError::PrecisionLoss));
    }

    #[test]
    fn scaled_zero_is_skipped_when_rendering() {
        let x = Variable::new("x");
        let p = Polynomial::new(vec![
            Term::new(dec("1.5"), x.clone(), dec("2")),
            Term::from_integers(2, x.clone(), 1),
            Term::new(dec("-1.5"), x, dec("2.0"))
        ]).unwrap();
        let merged = p.term(&dec("2")).unwrap().coefficient();
        assert!(merged.is_zero());
        assert_eq!(merged.scale(), 1);
        assert_eq!(p.to_string(), "2x");
    }

    #[test]
    fn render_empty_and_all_zero() {
        let x = Variable::new("x");
        assert_eq!(Polynomial::new(Vec::new()).unwrap().to_string(), "0");
        let p = Polynomial::new(vec![Term::from_integers(0, x.clone(), 2), Term::from_integers(0, x, 0)]).unwrap();
        assert_eq!(p.to_string(), "0");
    }

    #[test]
    fn terms_are_stored_ascending() {
        let x = Variable::new("x");
        let orders: Vec<Decimal> = quadratic(&x).terms().map(|t| t.order()).collect();
        assert_eq!(orders, vec![Decimal::from(0), Decimal::from(1), Decimal::from(2)]);
        let orders: Vec<Decimal> = quadratic(&x).terms_descending().map(|t| t.order()).collect();
        assert_eq!(orders, vec![Decimal::from(2), Decimal::from(1), Decimal::from(0)]);
    }

    #[test]
    fn differentiate_quadratic() {
        let x = Variable::new("x");
        assert_eq!(quadratic(&x).differentiate().unwrap().to_string(), "6x +2");
    }

    #[test]
    fn differentiate_constant_drops_the_term() {
        let x = Variable::new("x");
        let derived = Polynomial::new(vec![Term::from_integers(5, x, 0)]).unwrap().differentiate().unwrap();
        assert!(derived.is_empty());
        assert_eq!(derived.to_string(), "0");
    }

    #[test]
    fn differentiate_fractional_order() {
        let x = Variable::new("x");
        let p = Polynomial::new(vec![Term::new(dec("4"), x, dec("0.5"))]).unwrap();
        assert_eq!(p.differentiate().unwrap().to_string(), "2.0x^-0.5");
    }

    #[test]
    fn differentiate_that_would_round_is_an_error() {
        let x = Variable::new("x");
        let p = Polynomial::new(vec![Term::new(dec("0.000000000000001"), x, dec("1.000000000000001"))]).unwrap();
        assert_eq!(p.differentiate(), Err(AlgebraError::PrecisionLoss));
    }

    #[test]
    fn differentiate_leaves_original_untouched() {
        let x = Variable::new("x");
        let p = quadratic(&x);
        let _ = p.differentiate().unwrap();
        assert_eq!(p.to_string(), "3x^2 +2x +5");
    }

    #[test]
    fn integrate_linear() {
        let x = Variable::new("x");
        let p = Polynomial::new(vec![Term::from_integers(6, x.clone(), 1), Term::from_integers(2, x, 0)]).unwrap();
        assert_eq!(p.integrate().unwrap().to_string(), "3x^2 +2x");
    }

    #[test]
    fn integrate_negative_order_fails() {
        let x = Variable::new("x");
        let p = Polynomial::new(vec![Term::from_integers(1, x, -1)]).unwrap();
        assert_eq!(p.integrate(), Err(AlgebraError::UnsupportedIntegration { order: Decimal::from(-1) }));
    }

    #[test]
    fn integrate_negative_order_fails_even_with_other_terms() {
        let x = Variable::new("x");
        let p = Polynomial::new(vec![Term::from_integers(3, x.clone(), 2), Term::from_integers(1, x, -2)]).unwrap();
        assert!(matches!(p.integrate(), Err(AlgebraError::UnsupportedIntegration { .. })));
    }

    #[test]
    fn integrate_inexact_quotient_fails() {
        let x = Variable::new("x");
        let p = Polynomial::new(vec![Term::from_integers(1, x, 2)]).unwrap();
        assert_eq!(
            p.integrate(),
            Err(AlgebraError::InexactDivision { dividend: Decimal::ONE, divisor: Decimal::from(3) })
        );
    }

    #[test]
    fn integrate_halves() {
        let x = Variable::new("x");
        let p = Polynomial::new(vec![Term::from_integers(1, x, 1)]).unwrap();
        assert_eq!(p.integrate().unwrap().to_string(), "0.5x^2");
    }
}
