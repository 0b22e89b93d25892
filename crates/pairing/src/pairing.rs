//! The optimal ate pairing e: G1 × G2 → GT ⊂ Fq12.
//!
//! Line functions follow "Faster Computation of the Tate Pairing" (Arene et al.) adapted to the
//! sextic twist; the final exponentiation is the BN hard part of Scott et al.,
//! "On the final exponentiation for calculating pairings on ordinary elliptic curves".

use tracing::{debug, debug_span, trace};

use crate::{
    constants::{params, SIX_U_PLUS_2_NAF},
    error::Bn256Error,
    fq12::Fq12,
    fq2::Fq2,
    fq6::Fq6,
    g1::{CurvePoint, G1Affine},
    g2::{G2Affine, TwistPoint},
};

/// Coefficients of one line, as the sparse Fq12 element `(aτ + b)ω + c`, and the updated point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineFuncRes {
    pub a: Fq2,
    pub b: Fq2,
    pub c: Fq2,
    pub r_out: TwistPoint,
}

/// Line through `r` and the affine twist point `p`, evaluated at the affine curve point `q`.
///
/// `r2` is `p.y²`, passed in so the loop can reuse it.
pub fn line_func_add(r: &TwistPoint, p: &TwistPoint, q: &CurvePoint, r2: &Fq2) -> LineFuncRes {
    let b = p.x.mul(&r.t);
    let d = p.y.add(&r.z).square().sub(r2).sub(&r.t).mul(&r.t);

    let h = b.sub(&r.x);
    let i = h.square();
    let e = i.double().double();
    let j = h.mul(&e);

    let l1 = d.sub(&r.y).sub(&r.y);
    let v = r.x.mul(&e);

    let x = l1.square().sub(&j).sub(&v).sub(&v);
    let z = r.z.add(&h).square().sub(&r.t).sub(&i);
    let y = v.sub(&x).mul(&l1).sub(&r.y.mul(&j).double());
    let t = z.square();

    let t2 = p.y.add(&z).square().sub(r2).sub(&t);
    let a = l1.mul(&p.x).double().sub(&t2);
    let c = z.mul_scalar(&q.y).double();
    let b = l1.neg().mul_scalar(&q.x).double();

    LineFuncRes { a, b, c, r_out: TwistPoint { x, y, z, t } }
}

/// Tangent line at `r`, evaluated at the affine curve point `q`.
pub fn line_func_double(r: &TwistPoint, q: &CurvePoint) -> LineFuncRes {
    let a = r.x.square();
    let b = r.y.square();
    let c = b.square();

    let d = r.x.add(&b).square().sub(&a).sub(&c).double();
    let e = a.double().add(&a);
    let g = e.square();

    let x = g.sub(&d).sub(&d);
    let z = r.y.add(&r.z).square().sub(&b).sub(&r.t);
    let y = d.sub(&x).mul(&e).sub(&c.double().double().double());
    let t = z.square();

    let line_b = e.mul(&r.t).double().neg().mul_scalar(&q.x);
    let line_a = r.x.add(&e).square().sub(&a).sub(&g).sub(&b.double().double());
    let line_c = z.mul(&r.t).double().mul_scalar(&q.y);

    LineFuncRes { a: line_a, b: line_b, c: line_c, r_out: TwistPoint { x, y, z, t } }
}

/// `ret · ((aτ + b)ω + c)`, cheaper than a dense Fq12 multiplication.
pub fn mul_line(ret: &Fq12, a: &Fq2, b: &Fq2, c: &Fq2) -> Fq12 {
    let a2 = Fq6::new(Fq2::zero(), a.clone(), b.clone()).mul(&ret.x);
    let t3 = ret.y.mul_scalar(c);

    let t2 = Fq6::new(Fq2::zero(), a.clone(), b.add(c));
    let x = ret.x.add(&ret.y).mul(&t2).sub(&a2).sub(&t3);
    let y = t3.add(&a2.mul_tau());

    Fq12::new(x, y)
}

/// The Miller loop of the optimal ate pairing over the NAF of 6u+2.
pub fn miller(q: &TwistPoint, p: &CurvePoint) -> Fq12 {
    let a_affine = q.make_affine();
    let b_affine = p.make_affine();
    let minus_a = a_affine.neg();

    let mut ret = Fq12::one();
    let mut r = a_affine.clone();
    let r2 = a_affine.y.square();

    let top = SIX_U_PLUS_2_NAF.len() - 1;
    for i in (1..=top).rev() {
        let line = line_func_double(&r, &b_affine);
        if i != top {
            ret = ret.square();
        }
        ret = mul_line(&ret, &line.a, &line.b, &line.c);
        r = line.r_out;

        let line = match SIX_U_PLUS_2_NAF[i - 1] {
            1 => line_func_add(&r, &a_affine, &b_affine, &r2),
            -1 => line_func_add(&r, &minus_a, &b_affine, &r2),
            _ => continue,
        };
        ret = mul_line(&ret, &line.a, &line.b, &line.c);
        r = line.r_out;
    }

    // Q1 = π(Q) and -Q2 = -π²(Q), untwisted with the Frobenius coefficients.
    let params = params();
    let q1 = TwistPoint {
        x: a_affine.x.conjugate().mul(&params.xi_to_p_minus_1_over_3),
        y: a_affine.y.conjugate().mul(&params.xi_to_p_minus_1_over_2),
        z: Fq2::one(),
        t: Fq2::one(),
    };
    let minus_q2 = TwistPoint {
        x: a_affine.x.mul_scalar(&params.xi_to_p_squared_minus_1_over_3),
        y: a_affine.y.clone(),
        z: Fq2::one(),
        t: Fq2::one(),
    };

    let r2 = q1.y.square();
    let line = line_func_add(&r, &q1, &b_affine, &r2);
    ret = mul_line(&ret, &line.a, &line.b, &line.c);
    r = line.r_out;

    let r2 = minus_q2.y.square();
    let line = line_func_add(&r, &minus_q2, &b_affine, &r2);
    ret = mul_line(&ret, &line.a, &line.b, &line.c);

    ret.mod_reduce()
}

/// Raises a Miller loop output to `(p¹² - 1)/r`.
pub fn final_exponentiation(input: &Fq12) -> Result<Fq12, Bn256Error> {
    // Easy part: (p⁶ - 1)(p² + 1).
    let t1 = input.conjugate().mul(&input.invert()?);
    let t1 = t1.mul(&t1.frobenius_p2());

    let fp = t1.frobenius();
    let fp2 = t1.frobenius_p2();
    let fp3 = fp2.frobenius();

    let fu = t1.exp_u();
    let fu2 = fu.exp_u();
    let fu3 = fu2.exp_u();

    let y3 = fu.frobenius();
    let fu2p = fu2.frobenius();
    let fu3p = fu3.frobenius();
    let y2 = fu2.frobenius_p2();

    let y0 = fp.mul(&fp2).mul(&fp3);
    let y1 = t1.conjugate();
    let y5 = fu2.conjugate();
    let y3 = y3.conjugate();
    let y4 = fu.mul(&fu2p).conjugate();
    let y6 = fu3.mul(&fu3p).conjugate();

    let t0 = y6.square().mul(&y4).mul(&y5);
    let t1 = y3.mul(&y5).mul(&t0);
    let t0 = t0.mul(&y2);
    let t1 = t1.square().mul(&t0).square();
    let t0 = t1.mul(&y1);
    let t1 = t1.mul(&y0);
    let t0 = t0.square().mul(&t1);

    Ok(t0)
}

/// e(g1, g2). An identity operand gives 1.
pub fn pair(g1: &G1Affine, g2: &G2Affine) -> Result<Fq12, Bn256Error> {
    if g1.is_identity() || g2.is_identity() {
        return Ok(Fq12::one());
    }
    final_exponentiation(&miller(&TwistPoint::from_affine(g2), &CurvePoint::from_affine(g1)))
}

fn miller_product(pairs: &[(G1Affine, G2Affine)], init: Fq12) -> Fq12 {
    let mut acc = init;
    let mut skipped = 0usize;
    for (i, (p, q)) in pairs.iter().enumerate() {
        if p.is_identity() || q.is_identity() {
            skipped += 1;
            continue;
        }
        trace!(pair = i, "miller loop");
        acc = acc.mul(&miller(&TwistPoint::from_affine(q), &CurvePoint::from_affine(p)));
    }
    if skipped > 0 {
        debug!(skipped, "identity pairs contribute 1");
    }
    acc
}

/// Whether `precomputed · ∏ miller(qᵢ, pᵢ)` lands on 1 after the final exponentiation.
///
/// `precomputed` is a Miller loop value computed ahead of time, such as `miller(β, α)` in a
/// Groth16 verifying key.
pub fn pair_check_with_precomputed(
    pairs: &[(G1Affine, G2Affine)],
    precomputed: &Fq12,
) -> Result<bool, Bn256Error> {
    let acc = debug_span!("miller loop", pairs = pairs.len())
        .in_scope(|| miller_product(pairs, precomputed.clone()));
    let result = debug_span!("final exponentiation").in_scope(|| final_exponentiation(&acc))?;

    let valid = result.is_one();
    debug!(valid, "pairing check");
    Ok(valid)
}

/// Whether `∏ e(pᵢ, qᵢ) = 1`.
pub fn pair_check(pairs: &[(G1Affine, G2Affine)]) -> Result<bool, Bn256Error> {
    pair_check_with_precomputed(pairs, &Fq12::one())
}

/// Whether `e(p1, q1) · e(p2, q2) = 1`.
pub fn pair_check_p2(
    p1: &G1Affine,
    q1: &G2Affine,
    p2: &G1Affine,
    q2: &G2Affine,
) -> Result<bool, Bn256Error> {
    pair_check(&[(p1.clone(), q1.clone()), (p2.clone(), q2.clone())])
}

/// Whether `e(p1, q1) · e(p2, q2) · e(p3, q3) · e(p4, q4) = 1`.
#[allow(clippy::too_many_arguments)]
pub fn pair_check_p4(
    p1: &G1Affine,
    q1: &G2Affine,
    p2: &G1Affine,
    q2: &G2Affine,
    p3: &G1Affine,
    q3: &G2Affine,
    p4: &G1Affine,
    q4: &G2Affine,
) -> Result<bool, Bn256Error> {
    pair_check(&[
        (p1.clone(), q1.clone()),
        (p2.clone(), q2.clone()),
        (p3.clone(), q3.clone()),
        (p4.clone(), q4.clone()),
    ])
}

/// Four-term check where the second pairing is given by its Miller loop value.
pub fn pair_check_p4_precomputed(
    p1: &G1Affine,
    q1: &G2Affine,
    miller2: &Fq12,
    p3: &G1Affine,
    q3: &G2Affine,
    p4: &G1Affine,
    q4: &G2Affine,
) -> Result<bool, Bn256Error> {
    pair_check_with_precomputed(
        &[(p1.clone(), q1.clone()), (p3.clone(), q3.clone()), (p4.clone(), q4.clone())],
        miller2,
    )
}

/// Miller loop of a single affine pair, in the form a verifying key stores it.
pub fn miller_affine(p: &G1Affine, q: &G2Affine) -> Fq12 {
    if p.is_identity() || q.is_identity() {
        return Fq12::one();
    }
    miller(&TwistPoint::from_affine(q), &CurvePoint::from_affine(p))
}
