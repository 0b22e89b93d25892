//! Cubic extension Fq6 = Fq2[τ]/(τ³ - ξ).

use serde::{Deserialize, Serialize};

use crate::{constants::params, error::Bn256Error, fq::Fq, fq2::Fq2};

/// The element `x·τ² + y·τ + z`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fq6 {
    pub x: Fq2,
    pub y: Fq2,
    pub z: Fq2,
}

impl Fq6 {
    pub fn new(x: Fq2, y: Fq2, z: Fq2) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(Fq2::zero(), Fq2::zero(), Fq2::zero())
    }

    pub fn one() -> Self {
        Self::new(Fq2::zero(), Fq2::zero(), Fq2::one())
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_one()
    }

    pub fn mod_reduce(&self) -> Self {
        Self::new(self.x.mod_reduce(), self.y.mod_reduce(), self.z.mod_reduce())
    }

    pub fn add(&self, rhs: &Self) -> Self {
        Self::new(self.x.add(&rhs.x), self.y.add(&rhs.y), self.z.add(&rhs.z))
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        Self::new(self.x.sub(&rhs.x), self.y.sub(&rhs.y), self.z.sub(&rhs.z))
    }

    pub fn neg(&self) -> Self {
        Self::new(self.x.neg(), self.y.neg(), self.z.neg())
    }

    pub fn double(&self) -> Self {
        Self::new(self.x.double(), self.y.double(), self.z.double())
    }

    pub fn mul_scalar(&self, k: &Fq2) -> Self {
        Self::new(self.x.mul(k), self.y.mul(k), self.z.mul(k))
    }

    pub fn mul_gfp(&self, k: &Fq) -> Self {
        Self::new(self.x.mul_scalar(k), self.y.mul_scalar(k), self.z.mul_scalar(k))
    }

    /// Multiplies by τ: `x·τ² + y·τ + z -> y·τ² + z·τ + ξx`.
    pub fn mul_tau(&self) -> Self {
        Self::new(self.y.clone(), self.z.clone(), self.x.mul_xi())
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        // Karatsuba, "Multiplication and Squaring on Pairing-Friendly Fields", Devegili et al.
        let v0 = self.z.mul(&rhs.z);
        let v1 = self.y.mul(&rhs.y);
        let v2 = self.x.mul(&rhs.x);

        let tz = self.x.add(&self.y).mul(&rhs.x.add(&rhs.y)).sub(&v1).sub(&v2).mul_xi().add(&v0);
        let ty = self.y.add(&self.z).mul(&rhs.y.add(&rhs.z)).sub(&v0).sub(&v1).add(&v2.mul_xi());
        let tx = self.x.add(&self.z).mul(&rhs.x.add(&rhs.z)).sub(&v0).add(&v1).sub(&v2);

        Self::new(tx, ty, tz)
    }

    pub fn square(&self) -> Self {
        let v0 = self.z.square();
        let v1 = self.y.square();
        let v2 = self.x.square();

        let c0 = self.x.add(&self.y).square().sub(&v1).sub(&v2).mul_xi().add(&v0);
        let c1 = self.y.add(&self.z).square().sub(&v0).sub(&v1).add(&v2.mul_xi());
        let c2 = self.x.add(&self.z).square().sub(&v0).add(&v1).sub(&v2);

        Self::new(c2, c1, c0)
    }

    pub fn invert(&self) -> Result<Self, Bn256Error> {
        // Scott, "Implementing cryptographic pairings", Algorithm 17.
        let a = self.z.square().sub(&self.x.mul(&self.y).mul_xi());
        let b = self.x.square().mul_xi().sub(&self.y.mul(&self.z));
        let c = self.y.square().sub(&self.x.mul(&self.z));

        let f = c.mul(&self.y).mul_xi().add(&a.mul(&self.z)).add(&b.mul(&self.x).mul_xi());
        let f = f.invert()?;

        Ok(Self::new(c.mul(&f), b.mul(&f), a.mul(&f)))
    }

    pub fn frobenius(&self) -> Self {
        let params = params();
        Self::new(
            self.x.conjugate().mul(&params.xi_to_2p_minus_2_over_3),
            self.y.conjugate().mul(&params.xi_to_p_minus_1_over_3),
            self.z.conjugate(),
        )
    }

    pub fn frobenius_p2(&self) -> Self {
        let params = params();
        Self::new(
            self.x.mul_scalar(&params.xi_to_2p_squared_minus_2_over_3),
            self.y.mul_scalar(&params.xi_to_p_squared_minus_1_over_3),
            self.z.clone(),
        )
    }
}
