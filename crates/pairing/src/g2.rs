//! The group G2, represented on the sextic twist E'(Fq2): y² = x³ + 3/ξ.

use std::hash::{Hash, Hasher};

use num::{BigInt, BigUint, Signed};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{params, SCALAR_BITS},
    error::Bn256Error,
    fq::mod_reduce,
    fq2::Fq2,
};

/// Affine point on the twist. `(0, 0)` encodes the identity. Equality and hashing look at the
/// coordinates modulo p.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct G2Affine {
    pub x: Fq2,
    pub y: Fq2,
}

/// Jacobian point on the twist; `t` carries `z²`. `z = 0` is the identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwistPoint {
    pub x: Fq2,
    pub y: Fq2,
    pub z: Fq2,
    pub t: Fq2,
}

impl TwistPoint {
    pub fn identity() -> Self {
        Self { x: Fq2::zero(), y: Fq2::one(), z: Fq2::zero(), t: Fq2::zero() }
    }

    pub fn from_affine(p: &G2Affine) -> Self {
        if p.is_identity() {
            return Self::identity();
        }
        Self { x: p.x.clone(), y: p.y.clone(), z: Fq2::one(), t: Fq2::one() }
    }

    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn mod_reduce(&self) -> Self {
        Self {
            x: self.x.mod_reduce(),
            y: self.y.mod_reduce(),
            z: self.z.mod_reduce(),
            t: self.t.mod_reduce(),
        }
    }

    pub fn neg(&self) -> Self {
        Self { x: self.x.clone(), y: self.y.neg(), z: self.z.clone(), t: self.t.clone() }
    }

    pub fn double(&self) -> Self {
        // See http://hyperelliptic.org/EFD/g1p/auto-code/shortw/jacobian-0/doubling/dbl-2009-l.op3
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();

        let d = self.x.add(&b).square().sub(&a).sub(&c).double();
        let e = a.double().add(&a);
        let f = e.square();

        let x = f.sub(&d.double());
        let y = e.mul(&d.sub(&x)).sub(&c.double().double().double());
        let z = self.y.mul(&self.z).double();
        let t = z.square();

        Self { x, y, z, t }
    }

    pub fn add(&self, rhs: &Self) -> Self {
        if self.is_infinity() {
            return rhs.clone();
        }
        if rhs.is_infinity() {
            return self.clone();
        }

        // See http://hyperelliptic.org/EFD/g1p/auto-code/shortw/jacobian-0/addition/add-2007-bl.op3
        let z12 = self.z.square();
        let z22 = rhs.z.square();
        let u1 = self.x.mul(&z22);
        let u2 = rhs.x.mul(&z12);
        let s1 = self.y.mul(&rhs.z.mul(&z22));
        let s2 = rhs.y.mul(&self.z.mul(&z12));

        let h = u2.sub(&u1);
        let r = s2.sub(&s1);
        if h.is_zero() {
            return if r.is_zero() { self.double() } else { Self::identity() };
        }

        let i = h.double().square();
        let j = h.mul(&i);
        let r = r.double();
        let v = u1.mul(&i);

        let x = r.square().sub(&j).sub(&v.double());
        let y = r.mul(&v.sub(&x)).sub(&s1.mul(&j).double());
        let z = self.z.add(&rhs.z).square().sub(&z12).sub(&z22).mul(&h);
        let t = z.square();

        Self { x, y, z, t }
    }

    /// Multiplies by `scalar mod r` over a fixed number of bits. Only meaningful for points in
    /// the order-r subgroup; see [`G2Affine::is_in_subgroup`].
    pub fn mul(&self, scalar: &BigInt) -> Self {
        self.mul_unreduced(mod_reduce(scalar, &params().order).magnitude())
    }

    /// Multiplies by the exact integer `bits`, without reducing it modulo r.
    pub fn mul_unreduced(&self, bits: &BigUint) -> Self {
        let mut sum = Self::identity();
        let mut seen_one = false;
        for i in (0..SCALAR_BITS.max(bits.bits())).rev() {
            if seen_one {
                sum = sum.double();
            }
            if bits.bit(i) {
                sum = if seen_one { sum.add(self) } else { self.clone() };
                seen_one = true;
            }
        }
        sum
    }

    pub fn to_affine(&self) -> G2Affine {
        let Ok(z_inv) = self.z.invert() else {
            return G2Affine::identity();
        };
        let z_inv2 = z_inv.square();
        G2Affine { x: self.x.mul(&z_inv2), y: self.y.mul(&z_inv2).mul(&z_inv) }
    }

    /// Rescales to `z = 1`, or to the canonical identity.
    pub fn make_affine(&self) -> Self {
        Self::from_affine(&self.to_affine())
    }
}

impl PartialEq for G2Affine {
    fn eq(&self, other: &Self) -> bool {
        self.x.mod_reduce() == other.x.mod_reduce() && self.y.mod_reduce() == other.y.mod_reduce()
    }
}

impl Eq for G2Affine {}

impl Hash for G2Affine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.mod_reduce().hash(state);
        self.y.mod_reduce().hash(state);
    }
}

impl G2Affine {
    pub fn new(x: Fq2, y: Fq2) -> Self {
        Self { x, y }
    }

    /// Builds a point from coordinates given as (real, imaginary) pairs.
    pub fn from_c0_c1(x_c0: BigInt, x_c1: BigInt, y_c0: BigInt, y_c1: BigInt) -> Self {
        Self::new(Fq2::from_c0_c1(x_c0, x_c1), Fq2::from_c0_c1(y_c0, y_c1))
    }

    pub fn identity() -> Self {
        Self::new(Fq2::zero(), Fq2::zero())
    }

    pub fn generator() -> Self {
        params().g2.clone()
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn add(&self, rhs: &Self) -> Self {
        TwistPoint::from_affine(self).add(&TwistPoint::from_affine(rhs)).to_affine()
    }

    pub fn double(&self) -> Self {
        TwistPoint::from_affine(self).double().to_affine()
    }

    pub fn mul(&self, scalar: &BigInt) -> Self {
        TwistPoint::from_affine(self).mul(scalar).to_affine()
    }

    pub fn neg(&self) -> Self {
        Self::new(self.x.mod_reduce(), self.y.neg())
    }

    /// Whether the point satisfies `y² = x³ + b'`. The identity counts as on the curve.
    pub fn is_on_curve(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        self.y.square() == self.x.square().mul(&self.x).add(&params().twist_b)
    }

    /// Whether `r·P` is the identity. The twist has a large cofactor, so points on the curve
    /// can still fall outside G2.
    pub fn is_in_subgroup(&self) -> bool {
        TwistPoint::from_affine(self).mul_unreduced(params().order.magnitude()).is_infinity()
    }

    /// Checks that all four coordinates are reduced and the point is on the twist, in the
    /// order-r subgroup.
    pub fn validate(&self) -> Result<(), Bn256Error> {
        let p = &params().p;
        for c in [&self.x.x, &self.x.y, &self.y.x, &self.y.y] {
            if c.is_negative() || c >= p {
                return Err(Bn256Error::CoordinateOutOfRange);
            }
        }
        if !self.is_on_curve() {
            return Err(Bn256Error::PointNotOnCurve);
        }
        if !self.is_in_subgroup() {
            return Err(Bn256Error::PointNotInSubgroup);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use num::{One, Zero};
    use rand::thread_rng;

    use super::*;
    use crate::test_utils::{golden, golden_scalar, random_scalar};

    #[test]
    fn test_golden_vectors() {
        let g = G2Affine::generator();
        assert_eq!(g.double(), golden("g2.double"));
        assert_eq!(g.double().add(&g), golden("g2.triple"));
        assert_eq!(g.mul(&golden_scalar("g2.scalar")), golden("g2.mul"));
    }

    #[test]
    fn test_twist_coefficient() {
        // b' · ξ = 3
        let xi = Fq2::new(BigInt::one(), BigInt::from(9));
        assert_eq!(params().twist_b.mul(&xi), Fq2::new(BigInt::zero(), BigInt::from(3)));
    }

    #[test]
    fn test_group_law() {
        let mut rng = thread_rng();
        let p = G2Affine::generator().mul(&random_scalar(&mut rng));
        let q = G2Affine::generator().mul(&random_scalar(&mut rng));

        assert!(G2Affine::generator().is_on_curve());
        assert!(p.is_on_curve());
        assert_eq!(p.double(), p.add(&p));
        assert_eq!(p.add(&q), q.add(&p));
        assert_eq!(p.add(&G2Affine::identity()), p);
        assert!(p.add(&p.neg()).is_identity());
    }

    #[test]
    fn test_scalar_mul() {
        let g = G2Affine::generator();
        assert!(g.mul(&params().order).is_identity());
        assert!(g.mul(&BigInt::zero()).is_identity());
        assert_eq!(g.mul(&BigInt::from(-1)), g.neg());
        assert_eq!(g.mul(&BigInt::from(3)), g.double().add(&g));
    }

    #[test]
    fn test_affine_round_trip() {
        let p = G2Affine::generator().double();
        assert_eq!(TwistPoint::from_affine(&p).to_affine(), p);
        assert_eq!(
            TwistPoint::from_affine(&G2Affine::identity()).to_affine(),
            G2Affine::identity()
        );
        assert!(TwistPoint::identity().is_infinity());
    }

    #[test]
    fn test_from_c0_c1() {
        let g = G2Affine::generator();
        let swapped = G2Affine::from_c0_c1(
            g.x.y.clone(),
            g.x.x.clone(),
            g.y.y.clone(),
            g.y.x.clone(),
        );
        assert_eq!(swapped, g);
    }

    /// On the twist with `x = 1`, but of order not dividing r.
    fn point_outside_subgroup() -> G2Affine {
        G2Affine::new(
            Fq2::from_c0_c1(BigInt::one(), BigInt::zero()),
            Fq2::from_c0_c1(
                BigInt::parse_bytes(
                    b"18278151005453108793778860132295291098363647455926340152056652516292830556603",
                    10,
                )
                .unwrap(),
                BigInt::parse_bytes(
                    b"5912654199736721486680175016176231956195085055698687135131307249486702594212",
                    10,
                )
                .unwrap(),
            ),
        )
    }

    #[test]
    fn test_subgroup_membership() {
        assert!(G2Affine::generator().is_in_subgroup());
        assert!(G2Affine::identity().is_in_subgroup());
        assert!(G2Affine::generator().double().is_in_subgroup());

        let p = point_outside_subgroup();
        assert!(p.is_on_curve());
        assert!(!p.is_in_subgroup());
        assert!(!TwistPoint::from_affine(&p)
            .mul_unreduced(params().order.magnitude())
            .is_infinity());
        assert_eq!(p.validate(), Err(Bn256Error::PointNotInSubgroup));
    }

    #[test]
    fn test_equality_is_modulo_p() {
        let g = G2Affine::generator();
        let mut shifted = g.clone();
        shifted.x.x += &params().p;
        shifted.y.y -= &params().p;
        assert_eq!(shifted, g);

        let hash_of = |p: &G2Affine| {
            let mut hasher = DefaultHasher::new();
            p.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash_of(&shifted), hash_of(&g));
        assert!(g.double() != g);
    }

    #[test]
    fn test_validate() {
        let g = G2Affine::generator();
        assert_eq!(g.validate(), Ok(()));
        assert_eq!(G2Affine::identity().validate(), Ok(()));

        let mut off_curve = g.clone();
        off_curve.y.y += 1;
        assert_eq!(off_curve.validate(), Err(Bn256Error::PointNotOnCurve));

        let mut out_of_range = g;
        out_of_range.x.x += &params().p;
        assert_eq!(out_of_range.validate(), Err(Bn256Error::CoordinateOutOfRange));
    }
}
