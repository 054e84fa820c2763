use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    #[error("terms not in the same variable")]
    MismatchedVariable,
    #[error("terms not of the same order")]
    MismatchedOrder,
    #[error("integration of x^n for n < 0 is not supported (order {order})")]
    UnsupportedIntegration { order: Decimal },
    #[error("{dividend} / {divisor} has no exact decimal representation")]
    InexactDivision { dividend: Decimal, divisor: Decimal },
    #[error("exact result needs more than 28 decimal digits")]
    PrecisionLoss,
    #[error("decimal arithmetic overflow")]
    Overflow
}
