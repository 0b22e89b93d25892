//! The group G1 of points on E(Fq): y² = x³ + 3.

use std::hash::{Hash, Hasher};

use num::{BigInt, One, Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{params, REDUCE_INTERVAL, SCALAR_BITS},
    error::Bn256Error,
    fq::{self, mod_reduce, reduce, Fq},
};

/// Affine point. `(0, 0)` encodes the identity. Equality and hashing look at the coordinates
/// modulo p.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct G1Affine {
    #[serde(with = "crate::decimal")]
    pub x: Fq,
    #[serde(with = "crate::decimal")]
    pub y: Fq,
}

/// Jacobian point `(x/z², y/z³)`; `t` carries `z²`. `z = 0` is the identity.
///
/// Coordinates may be unreduced or negative between operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    #[serde(with = "crate::decimal")]
    pub x: Fq,
    #[serde(with = "crate::decimal")]
    pub y: Fq,
    #[serde(with = "crate::decimal")]
    pub z: Fq,
    #[serde(with = "crate::decimal")]
    pub t: Fq,
}

impl CurvePoint {
    pub fn identity() -> Self {
        Self { x: BigInt::zero(), y: BigInt::one(), z: BigInt::zero(), t: BigInt::zero() }
    }

    pub fn from_affine(p: &G1Affine) -> Self {
        if p.is_identity() {
            return Self::identity();
        }
        Self { x: p.x.clone(), y: p.y.clone(), z: BigInt::one(), t: BigInt::one() }
    }

    pub fn is_infinity(&self) -> bool {
        fq::is_zero(&self.z)
    }

    pub fn mod_reduce(&self) -> Self {
        Self { x: reduce(&self.x), y: reduce(&self.y), z: reduce(&self.z), t: reduce(&self.t) }
    }

    pub fn neg(&self) -> Self {
        Self { x: self.x.clone(), y: reduce(&-&self.y), z: self.z.clone(), t: self.t.clone() }
    }

    pub fn double(&self) -> Self {
        // http://hyperelliptic.org/EFD/g1p/auto-code/shortw/jacobian-0/doubling/dbl-2009-l.op3
        let a = reduce(&(&self.x * &self.x));
        let b = reduce(&(&self.y * &self.y));
        let c = reduce(&(&b * &b));

        let xb = &self.x + &b;
        let d = reduce(&((&xb * &xb - &a - &c) << 1));
        let e = &a * 3u32;
        let f = reduce(&(&e * &e));

        let x = &f - (&d << 1);
        let y = reduce(&(&e * (&d - &x))) - (&c << 3);
        let z = reduce(&(&self.y * &self.z)) << 1;
        let t = reduce(&(&z * &z));

        Self { x, y, z, t }
    }

    pub fn add(&self, rhs: &Self) -> Self {
        if self.is_infinity() {
            return rhs.clone();
        }
        if rhs.is_infinity() {
            return self.clone();
        }

        // http://hyperelliptic.org/EFD/g1p/auto-code/shortw/jacobian-0/addition/add-2007-bl.op3
        let z12 = reduce(&(&self.z * &self.z));
        let z22 = reduce(&(&rhs.z * &rhs.z));
        let u1 = reduce(&(&self.x * &z22));
        let u2 = reduce(&(&rhs.x * &z12));
        let s1 = reduce(&(&self.y * reduce(&(&rhs.z * &z22))));
        let s2 = reduce(&(&rhs.y * reduce(&(&self.z * &z12))));

        let h = &u2 - &u1;
        let r = &s2 - &s1;
        if h.is_zero() {
            return if r.is_zero() { self.double() } else { Self::identity() };
        }

        let h2 = &h << 1;
        let i = reduce(&(&h2 * &h2));
        let j = reduce(&(&h * &i));
        let r = r << 1;
        let v = reduce(&(&u1 * &i));

        let x = reduce(&(&r * &r)) - &j - (&v << 1);
        let y = reduce(&(&r * (&v - &x))) - reduce(&((&s1 * &j) << 1));
        let zs = &self.z + &rhs.z;
        let z = reduce(&((&zs * &zs - &z12 - &z22) * &h));
        let t = reduce(&(&z * &z));

        Self { x, y, z, t }
    }

    /// Multiplies by `scalar mod r` over a fixed number of bits.
    pub fn mul(&self, scalar: &BigInt) -> Self {
        let k = mod_reduce(scalar, &params().order);
        let bits = k.magnitude();

        let mut sum = Self::identity();
        let mut seen_one = false;
        for i in (0..SCALAR_BITS).rev() {
            if seen_one {
                sum = sum.double();
            }
            if bits.bit(i) {
                sum = if seen_one { sum.add(self) } else { self.clone() };
                seen_one = true;
            }
            if i % REDUCE_INTERVAL == 0 {
                sum = sum.mod_reduce();
            }
        }
        sum
    }

    pub fn to_affine(&self) -> G1Affine {
        let Ok(z_inv) = fq::inverse(&self.z) else {
            return G1Affine::identity();
        };
        let z_inv2 = reduce(&(&z_inv * &z_inv));
        G1Affine {
            x: reduce(&(&self.x * &z_inv2)),
            y: reduce(&(&self.y * &z_inv2 * &z_inv)),
        }
    }

    /// Rescales to `z = 1`, or to the canonical identity.
    pub fn make_affine(&self) -> Self {
        Self::from_affine(&self.to_affine())
    }
}

impl PartialEq for G1Affine {
    fn eq(&self, other: &Self) -> bool {
        reduce(&self.x) == reduce(&other.x) && reduce(&self.y) == reduce(&other.y)
    }
}

impl Eq for G1Affine {}

impl Hash for G1Affine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        reduce(&self.x).hash(state);
        reduce(&self.y).hash(state);
    }
}

impl G1Affine {
    pub fn new(x: Fq, y: Fq) -> Self {
        Self { x, y }
    }

    pub fn identity() -> Self {
        Self::new(BigInt::zero(), BigInt::zero())
    }

    pub fn generator() -> Self {
        params().g1.clone()
    }

    pub fn is_identity(&self) -> bool {
        fq::is_zero(&self.x) && fq::is_zero(&self.y)
    }

    pub fn add(&self, rhs: &Self) -> Self {
        CurvePoint::from_affine(self).add(&CurvePoint::from_affine(rhs)).to_affine()
    }

    pub fn double(&self) -> Self {
        CurvePoint::from_affine(self).double().to_affine()
    }

    pub fn mul(&self, scalar: &BigInt) -> Self {
        CurvePoint::from_affine(self).mul(scalar).to_affine()
    }

    pub fn neg(&self) -> Self {
        Self::new(reduce(&self.x), reduce(&-&self.y))
    }

    /// Whether the point satisfies `y² = x³ + 3`. The identity counts as on the curve.
    pub fn is_on_curve(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        reduce(&(&self.y * &self.y)) == reduce(&(&self.x * &self.x * &self.x + 3))
    }

    /// Checks that both coordinates are reduced and the point is on the curve.
    pub fn validate(&self) -> Result<(), Bn256Error> {
        let p = &params().p;
        for c in [&self.x, &self.y] {
            if c.is_negative() || c >= p {
                return Err(Bn256Error::CoordinateOutOfRange);
            }
        }
        if !self.is_on_curve() {
            return Err(Bn256Error::PointNotOnCurve);
        }
        Ok(())
    }
}
