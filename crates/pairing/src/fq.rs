//! The base prime field, represented directly as `num::BigInt`.
//!
//! Values may be unreduced or negative between operations; `reduce` brings them back into
//! `[0, p)` and every comparison goes through it.

use num::{BigInt, Integer, One, Zero};

use crate::{constants::params, error::Bn256Error};

/// An element of the base field.
pub type Fq = BigInt;

/// `x mod m`, always in `[0, m)` even for negative `x`.
pub fn mod_reduce(x: &BigInt, m: &BigInt) -> BigInt {
    x.mod_floor(m)
}

/// `x mod p`.
pub fn reduce(x: &Fq) -> Fq {
    mod_reduce(x, &params().p)
}

pub fn is_zero(x: &Fq) -> bool {
    reduce(x).is_zero()
}

/// Multiplicative inverse modulo p, by the extended Euclidean algorithm.
pub fn inverse(x: &Fq) -> Result<Fq, Bn256Error> {
    let p = &params().p;
    let x = reduce(x);
    if x.is_zero() {
        return Err(Bn256Error::ZeroInversion);
    }

    let (mut t, mut new_t) = (BigInt::zero(), BigInt::one());
    let (mut r, mut new_r) = (p.clone(), x);
    while !new_r.is_zero() {
        let quotient = &r / &new_r;
        let next_t = &t - &quotient * &new_t;
        t = std::mem::replace(&mut new_t, next_t);
        let next_r = &r - &quotient * &new_r;
        r = std::mem::replace(&mut new_r, next_r);
    }
    debug_assert!(r.is_one());

    Ok(mod_reduce(&t, p))
}

#[cfg(test)]
mod tests {
    use num::bigint::RandBigInt;
    use rand::thread_rng;

    use super::*;

    #[test]
    fn test_mod_reduce() {
        assert_eq!(mod_reduce(&BigInt::from(372193), &BigInt::from(3462)), BigInt::from(1759));
        assert_eq!(mod_reduce(&BigInt::from(-3128731), &BigInt::from(324)), BigInt::from(137));
    }

    #[test]
    fn test_reduce_is_canonical() {
        let p = &params().p;
        assert_eq!(reduce(p), BigInt::zero());
        assert_eq!(reduce(&(p + 5)), BigInt::from(5));
        assert_eq!(reduce(&BigInt::from(-1)), p - 1);
    }

    #[test]
    fn test_inverse() {
        let mut rng = thread_rng();
        let p = &params().p;
        for _ in 0..20 {
            let x = rng.gen_bigint_range(&BigInt::one(), p);
            let inv = inverse(&x).unwrap();
            assert_eq!(reduce(&(&x * &inv)), BigInt::one());
            assert_eq!(inv, x.modpow(&(p - 2), p));
        }
    }

    #[test]
    fn test_inverse_of_negative() {
        let inv = inverse(&BigInt::from(-2)).unwrap();
        assert_eq!(reduce(&(inv * -2)), BigInt::one());
    }

    #[test]
    fn test_inverse_of_zero() {
        assert_eq!(inverse(&BigInt::zero()), Err(Bn256Error::ZeroInversion));
        assert_eq!(inverse(&params().p), Err(Bn256Error::ZeroInversion));
    }
}
