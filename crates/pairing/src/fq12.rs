//! Quadratic extension Fq12 = Fq6[ω]/(ω² - τ), the field holding GT.

use num::BigUint;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{params, U},
    error::Bn256Error,
    fq6::Fq6,
};

/// The element `x·ω + y`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fq12 {
    pub x: Fq6,
    pub y: Fq6,
}

impl Fq12 {
    pub fn new(x: Fq6, y: Fq6) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(Fq6::zero(), Fq6::zero())
    }

    pub fn one() -> Self {
        Self::new(Fq6::zero(), Fq6::one())
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.x.is_zero() && self.y.is_one()
    }

    pub fn mod_reduce(&self) -> Self {
        Self::new(self.x.mod_reduce(), self.y.mod_reduce())
    }

    pub fn add(&self, rhs: &Self) -> Self {
        Self::new(self.x.add(&rhs.x), self.y.add(&rhs.y))
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        Self::new(self.x.sub(&rhs.x), self.y.sub(&rhs.y))
    }

    pub fn neg(&self) -> Self {
        Self::new(self.x.neg(), self.y.neg())
    }

    pub fn double(&self) -> Self {
        Self::new(self.x.double(), self.y.double())
    }

    /// `-x·ω + y`. On the cyclotomic subgroup this is the inverse.
    pub fn conjugate(&self) -> Self {
        Self::new(self.x.neg(), self.y.clone())
    }

    pub fn mul_scalar(&self, k: &Fq6) -> Self {
        Self::new(self.x.mul(k), self.y.mul(k))
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        let tx = self.x.mul(&rhs.y).add(&rhs.x.mul(&self.y));
        let ty = self.y.mul(&rhs.y).add(&self.x.mul(&rhs.x).mul_tau());
        Self::new(tx, ty)
    }

    pub fn square(&self) -> Self {
        // Complex squaring: (xω + y)² = 2xy·ω + (x + y)(τx + y) - xy - τxy
        let v0 = self.x.mul(&self.y);
        let t = self.x.mul_tau().add(&self.y);
        let ty = self.x.add(&self.y).mul(&t).sub(&v0).sub(&v0.mul_tau());
        Self::new(v0.double(), ty)
    }

    pub fn invert(&self) -> Result<Self, Bn256Error> {
        // (xω + y)⁻¹ = (-xω + y) / (y² - τx²)
        let norm = self.y.square().sub(&self.x.square().mul_tau());
        let inv = norm.invert()?;
        Ok(Self::new(self.x.neg().mul(&inv), self.y.mul(&inv)))
    }

    pub fn frobenius(&self) -> Self {
        let coeff = &params().xi_to_p_minus_1_over_6;
        Self::new(self.x.frobenius().mul_scalar(coeff), self.y.frobenius())
    }

    pub fn frobenius_p2(&self) -> Self {
        let coeff = &params().xi_to_p_squared_minus_1_over_6;
        Self::new(self.x.frobenius_p2().mul_gfp(coeff), self.y.frobenius_p2())
    }

    /// `self^power` by left-to-right square-and-multiply.
    pub fn pow(&self, power: &BigUint) -> Self {
        let mut sum = Self::one();
        for i in (0..power.bits()).rev() {
            sum = sum.square();
            if power.bit(i) {
                sum = sum.mul(self);
            }
        }
        sum
    }

    /// `self^u` for the curve parameter u, walking its bits from the top.
    pub fn exp_u(&self) -> Self {
        let mut sum = self.clone();
        for i in (0..u64::BITS - U.leading_zeros() - 1).rev() {
            sum = sum.square();
            if (U >> i) & 1 == 1 {
                sum = sum.mul(self);
            }
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use num::BigUint;
    use rand::thread_rng;

    use super::*;
    use crate::test_utils::{golden, random_fq12};

    #[test]
    fn test_golden_vectors() {
        let a: Fq12 = golden("fq12.a");
        let b: Fq12 = golden("fq12.b");
        assert_eq!(a.mul(&b), golden("fq12.mul"));
        assert_eq!(a.square(), golden("fq12.square"));
        assert_eq!(a.invert().unwrap(), golden("fq12.inverse"));
        assert_eq!(a.frobenius(), golden("fq12.frobenius"));
        assert_eq!(a.frobenius_p2(), golden("fq12.frobenius_p2"));
        assert_eq!(a.exp_u(), golden("fq12.exp_u"));
    }

    #[test]
    fn test_field_properties() {
        let mut rng = thread_rng();
        for _ in 0..3 {
            let a = random_fq12(&mut rng);
            let b = random_fq12(&mut rng);
            assert_eq!(a.square(), a.mul(&a));
            assert_eq!(a.mul(&b), b.mul(&a));
            assert!(a.mul(&a.invert().unwrap()).is_one());
        }
    }

    #[test]
    fn test_exp_u_matches_pow() {
        let a = random_fq12(&mut thread_rng());
        assert_eq!(a.exp_u(), a.pow(&BigUint::from(U)));
    }

    #[test]
    fn test_frobenius_is_p_power() {
        let a = random_fq12(&mut thread_rng());
        assert_eq!(a.pow(params().p.magnitude()), a.frobenius());
        assert_eq!(a.frobenius().frobenius(), a.frobenius_p2());
    }

    #[test]
    fn test_pow_small_exponents() {
        let a = random_fq12(&mut thread_rng());
        assert!(a.pow(&BigUint::from(0u32)).is_one());
        assert_eq!(a.pow(&BigUint::from(1u32)), a);
        assert_eq!(a.pow(&BigUint::from(3u32)), a.square().mul(&a));
    }

    #[test]
    fn test_invert_zero() {
        assert_eq!(Fq12::zero().invert(), Err(Bn256Error::ZeroInversion));
    }
}
