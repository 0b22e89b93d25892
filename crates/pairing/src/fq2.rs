//! Quadratic extension Fq2 = Fq[i]/(i² + 1).

use num::{BigInt, One, Zero};
use serde::{Deserialize, Serialize};

use crate::{
    error::Bn256Error,
    fq::{self, reduce, Fq},
};

/// The element `x·i + y`. Every operation returns reduced coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fq2 {
    #[serde(with = "crate::decimal")]
    pub x: Fq,
    #[serde(with = "crate::decimal")]
    pub y: Fq,
}

impl Fq2 {
    pub fn new(x: Fq, y: Fq) -> Self {
        Self { x, y }
    }

    /// Builds `c0 + c1·i`, the (real, imaginary) order used by most encodings.
    pub fn from_c0_c1(c0: Fq, c1: Fq) -> Self {
        Self { x: c1, y: c0 }
    }

    /// The real part.
    pub fn c0(&self) -> &Fq {
        &self.y
    }

    /// The imaginary part.
    pub fn c1(&self) -> &Fq {
        &self.x
    }

    pub fn zero() -> Self {
        Self::new(BigInt::zero(), BigInt::zero())
    }

    pub fn one() -> Self {
        Self::new(BigInt::zero(), BigInt::one())
    }

    pub fn is_zero(&self) -> bool {
        fq::is_zero(&self.x) && fq::is_zero(&self.y)
    }

    pub fn is_one(&self) -> bool {
        fq::is_zero(&self.x) && reduce(&self.y).is_one()
    }

    pub fn mod_reduce(&self) -> Self {
        Self::new(reduce(&self.x), reduce(&self.y))
    }

    pub fn add(&self, rhs: &Self) -> Self {
        Self::new(reduce(&(&self.x + &rhs.x)), reduce(&(&self.y + &rhs.y)))
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        Self::new(reduce(&(&self.x - &rhs.x)), reduce(&(&self.y - &rhs.y)))
    }

    pub fn neg(&self) -> Self {
        Self::new(reduce(&-&self.x), reduce(&-&self.y))
    }

    /// `-x·i + y`, the image of the p-power Frobenius map.
    pub fn conjugate(&self) -> Self {
        Self::new(reduce(&-&self.x), reduce(&self.y))
    }

    pub fn double(&self) -> Self {
        Self::new(reduce(&(&self.x << 1)), reduce(&(&self.y << 1)))
    }

    pub fn mul_scalar(&self, k: &Fq) -> Self {
        Self::new(reduce(&(&self.x * k)), reduce(&(&self.y * k)))
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        // (a·i + b)(c·i + d) = (ad + bc)·i + (bd - ac), with ad + bc = (a + b)(c + d) - ac - bd
        let ac = &self.x * &rhs.x;
        let bd = &self.y * &rhs.y;
        let cross = (&self.x + &self.y) * (&rhs.x + &rhs.y);
        Self::new(reduce(&(cross - &ac - &bd)), reduce(&(bd - ac)))
    }

    pub fn square(&self) -> Self {
        // (a·i + b)² = 2ab·i + (b - a)(b + a)
        let cross = (&self.x * &self.y) << 1;
        let real = (&self.y - &self.x) * (&self.y + &self.x);
        Self::new(reduce(&cross), reduce(&real))
    }

    /// Multiplies by ξ = i + 9.
    pub fn mul_xi(&self) -> Self {
        // (a·i + b)(i + 9) = (9a + b)·i + (9b - a)
        let x = &self.x * 9u32 + &self.y;
        let y = &self.y * 9u32 - &self.x;
        Self::new(reduce(&x), reduce(&y))
    }

    pub fn invert(&self) -> Result<Self, Bn256Error> {
        // (a·i + b)⁻¹ = (-a·i + b) / (a² + b²)
        let norm = &self.x * &self.x + &self.y * &self.y;
        let inv = fq::inverse(&norm)?;
        Ok(Self::new(reduce(&(-&self.x * &inv)), reduce(&(&self.y * &inv))))
    }
}
