use std::fmt;

use rust_decimal::Decimal;

use crate::algebra::algebraerror::AlgebraError;
use crate::algebra::variable::Variable;
use crate::math::exactarithmetic::exact_add;

/// A single term `a·x^n`. Coefficient and order are stored exactly as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    coefficient: Decimal,
    variable: Variable,
    order: Decimal
}

impl Term {
    pub fn new(coefficient: Decimal, variable: Variable, order: Decimal) -> Term {
        Term { coefficient, variable, order }
    }

    pub fn from_integers(coefficient: i64, variable: Variable, order: i64) -> Term {
        Term::new(Decimal::from(coefficient), variable, Decimal::from(order))
    }

    pub fn coefficient(&self) -> Decimal {
        self.coefficient
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn order(&self) -> Decimal {
        self.order
    }

    /// Sums two like terms. The variable is checked before the order.
    pub fn add(&self, other: &Term) -> Result<Term, AlgebraError> {
        if self.variable != other.variable {
            return Err(AlgebraError::MismatchedVariable);
        }
        if self.order != other.order {
            return Err(AlgebraError::MismatchedOrder);
        }
        let coefficient = exact_add(self.coefficient, other.coefficient)?;
        Ok(Term::new(coefficient, self.variable.clone(), self.order))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.order.is_zero() {
            write!(f, "{}", self.coefficient)
        } else if self.order == Decimal::ONE {
            write!(f, "{}{}", self.coefficient, self.variable)
        } else {
            write!(f, "{}{}^{}", self.coefficient, self.variable, self.order)
        }
    }
}
