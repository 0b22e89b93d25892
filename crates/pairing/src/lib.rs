//! Arithmetic and pairings on the BN256 curve, also known as alt_bn128 or BN254.
//!
//! The tower is Fq2 = Fq[i]/(i² + 1), Fq6 = Fq2[τ]/(τ³ - ξ) with ξ = i + 9, and
//! Fq12 = Fq6[ω]/(ω² - τ). G1 lives on E(Fq): y² = x³ + 3, G2 on the sextic twist over Fq2.
//! Elements are `num::BigInt` based and carry no constant-time guarantees.

// Tower and group elements expose `add`, `mul`, `neg`, ... as methods taking references.
#![allow(clippy::should_implement_trait)]

mod constants;
pub mod decimal;
mod error;
pub mod fq;
mod fq12;
mod fq2;
mod fq6;
mod g1;
mod g2;
mod pairing;

pub use constants::{params, Bn256Params, SIX_U_PLUS_2_NAF, U};
pub use error::Bn256Error;
pub use fq::Fq;
pub use fq12::Fq12;
pub use fq2::Fq2;
pub use fq6::Fq6;
pub use g1::{CurvePoint, G1Affine};
pub use g2::{G2Affine, TwistPoint};
pub use pairing::{
    final_exponentiation, line_func_add, line_func_double, miller, miller_affine, mul_line, pair,
    pair_check, pair_check_p2, pair_check_p4, pair_check_p4_precomputed,
    pair_check_with_precomputed, LineFuncRes,
};

#[cfg(test)]
mod test_utils;
