use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Bn256Error {
    // Arithmetic Errors
    #[error("Inverse of zero")]
    ZeroInversion,

    // Input Errors
    #[error("Coordinate is not reduced modulo the field prime")]
    CoordinateOutOfRange,
    #[error("Point is not on the curve")]
    PointNotOnCurve,
    #[error("Point is not in the prime-order subgroup")]
    PointNotInSubgroup,
}
