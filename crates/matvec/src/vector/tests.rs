use super::*;
use ::rand::{rngs::StdRng, SeedableRng};
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

#[test]
fn basis_cross_dot_and_angle() {
    let u = Vector::unit_i();
    let v = Vector::unit_j();
    assert_eq!(u.cross(&v), Vector::unit_k());
    assert_eq!(v.cross(&u), Vector::new(0.0, 0.0, -1.0));
    assert_eq!(u.dot(&v), 0.0);
    assert!((Vector::angle(&u, &v) - FRAC_PI_2).abs() < 1e-12);
    assert!(Vector::angle(&u, &u).abs() < 1e-12);
}

#[test]
fn new_2d_defaults_z() {
    let v = Vector::new_2d(1.0, 2.0);
    assert_eq!(v, Vector::new(1.0, 2.0, 0.0));
    assert_eq!(Vector::default(), Vector::zero());
}

#[test]
fn in_place_arithmetic() {
    let mut a = Vector::new(1.0, 2.0, 3.0);
    a.add(&Vector::new(1.0, 1.0, 1.0));
    assert_eq!(a, Vector::new(2.0, 3.0, 4.0));
    a.sub(&Vector::new(2.0, 2.0, 2.0));
    assert_eq!(a, Vector::new(0.0, 1.0, 2.0));
    a.mult(-2.0);
    assert_eq!(a, Vector::new(-0.0, -2.0, -4.0));
}

#[test]
fn associated_sum_and_difference_leave_inputs_untouched() {
    let a = Vector::new(1.0, 2.0, 3.0);
    let b = Vector::new(4.0, 5.0, 6.0);
    assert_eq!(Vector::sum(&a, &b), Vector::new(5.0, 7.0, 9.0));
    assert_eq!(Vector::difference(&b, &a), Vector::new(3.0, 3.0, 3.0));
    assert_eq!(a, Vector::new(1.0, 2.0, 3.0));
    assert_eq!(b, Vector::new(4.0, 5.0, 6.0));
    // operator forms agree
    assert_eq!(a + b, Vector::sum(&a, &b));
    assert_eq!(b - a, Vector::difference(&b, &a));
    assert_eq!(-a, a.reverse());
    assert_eq!(a * 2.0, Vector::new(2.0, 4.0, 6.0));
}

#[test]
fn distance_uses_matching_axes() {
    let p = Vector::new(1.0, 2.0, 3.0);
    let q = Vector::new(4.0, 6.0, 3.0);
    assert!((Vector::distance(&p, &q) - 5.0).abs() < 1e-12);
    assert!((Vector::distance(&q, &p) - 5.0).abs() < 1e-12);
}

#[test]
fn unit_and_zero_vector_degradation() {
    let v = Vector::new(3.0, 4.0, 0.0).unit();
    assert!(v.approx_eq(&Vector::new(0.6, 0.8, 0.0), 1e-12));
    assert!((v.magnitude() - 1.0).abs() < 1e-12);

    let z = Vector::zero().unit();
    assert!(z.x.is_nan() && z.y.is_nan() && z.z.is_nan());
    assert!(Vector::zero().angle(&Vector::unit_i()).is_nan());
}

#[test]
fn scalar_projection_both_forms() {
    let a = Vector::new(3.0, 4.0, 0.0);
    let b = Vector::unit_i();
    // divisor is |a|, not |b|
    assert!((a.scalar_projection(&b, None) - 0.6).abs() < 1e-12);
    assert!((a.scalar_projection(&b, Some(0.0)) - 5.0).abs() < 1e-12);
    assert!((a.scalar_projection(&b, Some(FRAC_PI_3)) - 2.5).abs() < 1e-12);
}

#[test]
fn vector_projection_onto_direction() {
    let a = Vector::new(3.0, 4.0, 0.0);
    let b = Vector::new(2.0, 0.0, 0.0);
    let p = a.vector_projection(&b, None);
    assert!(p.approx_eq_default(&Vector::new(3.0, 0.0, 0.0)));

    let q = a.vector_projection(&b, Some(FRAC_PI_3));
    assert!(q.approx_eq_default(&Vector::new(2.5, 0.0, 0.0)));

    // residual is orthogonal to b
    let r = a - p;
    assert!(r.dot(&b).abs() < 1e-12);
}

#[test]
fn angle_of_parallel_vectors_is_zero_not_nan() {
    for i in 1..200 {
        let v = Vector::new(0.1 * i as f64, 0.3, 0.7);
        for w in [v, v * 3.0] {
            let a = Vector::angle(&v, &w);
            assert!(!a.is_nan(), "NaN angle for {v} vs {w}");
            assert!(a.abs() < 1e-6);
        }
        let back = Vector::angle(&v, &v.reverse());
        assert!((back - std::f64::consts::PI).abs() < 1e-6);
    }
}

#[test]
fn reverse_and_copy_semantics() {
    let a = Vector::new(1.0, -2.0, 3.0);
    let mut b = a;
    b.mult(10.0);
    assert_eq!(a, Vector::new(1.0, -2.0, 3.0));
    assert_eq!(a.reverse(), Vector::new(-1.0, 2.0, -3.0));
}

#[test]
fn display_component_form() {
    assert_eq!(Vector::new(1.0, -2.5, 0.0).to_string(), "1i + -2.5j + 0k");
}

#[test]
fn from_angle_constructors() {
    let v = Vector::from_angle_2d(FRAC_PI_2, 2.0);
    assert!(v.approx_eq(&Vector::new(0.0, 2.0, 0.0), 1e-12));
    assert!(Vector::from_angle_2d(0.0, 1.0).approx_eq(&Vector::unit_i(), 1e-12));

    assert!(Vector::from_angle_3d(0.0, 0.0, 3.0).approx_eq(&Vector::new(3.0, 0.0, 0.0), 1e-12));
    assert!(Vector::from_angle_3d(FRAC_PI_2, 0.0, 1.0).approx_eq(&Vector::unit_k(), 1e-12));
    assert!(Vector::from_angle_3d(0.0, FRAC_PI_2, 1.0).approx_eq(&Vector::unit_j(), 1e-12));
}

#[test]
fn random_vectors_in_unit_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let a = Vector::random_2d_with(&mut rng);
        assert_eq!(a.z, 0.0);
        assert!((0.0..1.0).contains(&a.x) && (0.0..1.0).contains(&a.y));
        let b = Vector::random_3d_with(&mut rng);
        assert!([b.x, b.y, b.z].iter().all(|c| (0.0..1.0).contains(c)));
    }
    let mut r1 = StdRng::seed_from_u64(9);
    let mut r2 = StdRng::seed_from_u64(9);
    assert_eq!(Vector::random_3d_with(&mut r1), Vector::random_3d_with(&mut r2));

    assert_eq!(Vector::random_2d().z, 0.0);
    let t = Vector::random_3d();
    assert!([t.x, t.y, t.z].iter().all(|c| (0.0..1.0).contains(c)));
}

#[test]
fn nalgebra_cross_check() {
    let a = Vector::new(1.5, -2.0, 0.25);
    let b = Vector::new(-3.0, 0.5, 4.0);
    let na: Vector3<f64> = a.into();
    let nb: Vector3<f64> = b.into();
    assert!(a.cross(&b).approx_eq(&Vector::from(na.cross(&nb)), 1e-12));
    assert!((a.dot(&b) - na.dot(&nb)).abs() < 1e-12);
    assert!((a.magnitude() - na.norm()).abs() < 1e-12);
}

fn any_vector() -> impl Strategy<Value = Vector> {
    (-50.0f64..50.0, -50.0f64..50.0, -50.0f64..50.0).prop_map(|(x, y, z)| Vector::new(x, y, z))
}

proptest! {
    #[test]
    fn magnitude_matches_self_dot(v in any_vector()) {
        let expected = Vector::dot(&v, &v).powf(0.5);
        prop_assert!((v.magnitude() - expected).abs() <= 1e-12 * (1.0 + expected));
    }

    #[test]
    fn cross_is_orthogonal_to_operands(a in any_vector(), b in any_vector()) {
        let c = a.cross(&b);
        let scale = 1.0 + a.magnitude() * b.magnitude() * (a.magnitude() + b.magnitude());
        prop_assert!(c.dot(&a).abs() <= 1e-9 * scale);
        prop_assert!(c.dot(&b).abs() <= 1e-9 * scale);
    }

    #[test]
    fn angle_with_positive_multiple_is_zero(v in any_vector(), k in 0.01f64..100.0) {
        prop_assume!(v.magnitude() > 1e-6);
        let a = v.angle(&(v * k));
        prop_assert!(!a.is_nan());
        prop_assert!(a.abs() < 1e-6);
    }

    #[test]
    fn from_angle_3d_has_requested_magnitude(
        theta in -6.3f64..6.3,
        alpha in -1.5f64..1.5,
        mag in 0.0f64..10.0
    ) {
        let v = Vector::from_angle_3d(theta, alpha, mag);
        prop_assert!((v.magnitude() - mag).abs() < 1e-9);
    }
}
