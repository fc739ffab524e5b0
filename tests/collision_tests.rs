use recoil::{
    Body, CollisionConfig, RestitutionMode, Stepper, advance, elastic_velocities, is_touching,
    resolve_collision, shared_velocity,
};

const MASSES: [f64; 5] = [1.0, 2.5, 10.0, 15.0, 50.0];
const VELOCITIES: [f64; 5] = [-20.0, -3.0, 0.0, 4.5, 17.0];

fn momentum(m1: f64, v1: f64, m2: f64, v2: f64) -> f64 {
    m1 * v1 + m2 * v2
}

fn energy(m1: f64, v1: f64, m2: f64, v2: f64) -> f64 {
    0.5 * m1 * v1 * v1 + 0.5 * m2 * v2 * v2
}

#[test]
fn raw_elastic_exchange_conserves_momentum() {
    for &m1 in &MASSES {
        for &m2 in &MASSES {
            for &v1 in &VELOCITIES {
                for &v2 in &VELOCITIES {
                    let (v1f, v2f) = elastic_velocities(m1, v1, m2, v2);
                    let before = momentum(m1, v1, m2, v2);
                    let after = momentum(m1, v1f, m2, v2f);
                    assert!(
                        (before - after).abs() < 1e-9,
                        "m1={} v1={} m2={} v2={}: p {} -> {}",
                        m1, v1, m2, v2, before, after,
                    );
                }
            }
        }
    }
}

#[test]
fn raw_elastic_exchange_conserves_energy() {
    for &m1 in &MASSES {
        for &m2 in &MASSES {
            for &v1 in &VELOCITIES {
                for &v2 in &VELOCITIES {
                    let (v1f, v2f) = elastic_velocities(m1, v1, m2, v2);
                    let before = energy(m1, v1, m2, v2);
                    let after = energy(m1, v1f, m2, v2f);
                    assert!(
                        (before - after).abs() < 1e-6 * before.max(1.0),
                        "m1={} v1={} m2={} v2={}: KE {} -> {}",
                        m1, v1, m2, v2, before, after,
                    );
                }
            }
        }
    }
}

#[test]
fn unit_restitution_conserves_energy_through_stepper() {
    let stepper = Stepper::new(RestitutionMode::Elastic)
        .with_collision(CollisionConfig::new().with_elastic_restitution(1.0));
    let a = Body::new(10.0f64, 5.0, 0.0, 40.0);
    let b = Body::new(15.0f64, -3.0, 95.0, 50.0);
    let (a2, b2) = stepper.advance(a, b);
    let before = energy(10.0, 5.0, 15.0, -3.0);
    let after = energy(a2.mass, a2.velocity, b2.mass, b2.velocity);
    assert!((before - after).abs() < 1e-9, "KE {} -> {}", before, after);
}

#[test]
fn equal_mass_head_on_swaps_damped_velocities() {
    // After integration the centres sit exactly one diameter apart.
    let a = Body::new(10.0f64, 5.0, 0.0, 10.0);
    let b = Body::new(10.0f64, -5.0, 30.0, 10.0);
    let (a2, b2) = advance(a, b, RestitutionMode::Elastic);
    assert!((a2.velocity - -4.75).abs() < 1e-12, "v1' = {}", a2.velocity);
    assert!((b2.velocity - 4.75).abs() < 1e-12, "v2' = {}", b2.velocity);
    assert_eq!(a2.position, 5.0);
    assert_eq!(b2.position, 25.0);
}

#[test]
fn inelastic_bodies_stick_at_centre_of_mass_velocity() {
    let a = Body::new(10.0f64, 5.0, 0.0, 40.0);
    let b = Body::new(15.0f64, -3.0, 95.0, 50.0);
    let (a2, b2) = advance(a, b, RestitutionMode::Inelastic);

    let expected = shared_velocity(10.0, 5.0, 15.0, -3.0);
    assert_eq!(a2.velocity, expected);
    assert_eq!(b2.velocity, expected);
    assert!((expected - 0.2).abs() < 1e-12, "shared velocity = {}", expected);
}

#[test]
fn inelastic_sticking_holds_for_any_masses() {
    for &m1 in &MASSES {
        for &m2 in &MASSES {
            let a = Body::new(m1, 6.0f64, 0.0, 20.0);
            let b = Body::new(m2, -2.0f64, 30.0, 20.0);
            let (a2, b2) = resolve_collision(a, b, RestitutionMode::Inelastic);
            let expected = (m1 * 6.0 + m2 * -2.0) / (m1 + m2);
            assert_eq!(a2.velocity, b2.velocity);
            assert_eq!(a2.velocity, expected);
        }
    }
}

#[test]
fn resolution_leaves_no_interpenetration() {
    let cases = [
        (0.0, 10.0, 15.0, 10.0),
        (0.0, 40.0, 1.0, 50.0),
        (100.0, 20.0, 100.0, 20.0),
        (52.0, 30.0, 10.0, 25.0),
    ];
    for &(x1, r1, x2, r2) in &cases {
        for mode in [RestitutionMode::Elastic, RestitutionMode::Inelastic] {
            let a = Body::new(3.0f64, 2.0, x1, r1);
            let b = Body::new(7.0f64, -1.0, x2, r2);
            let (a2, b2) = resolve_collision(a, b, mode);
            let gap = (b2.position - a2.position).abs();
            assert!(
                gap >= r1 + r2 - 1e-9,
                "x1={} x2={} {:?}: gap {} < {}",
                x1, x2, mode, gap, r1 + r2,
            );
        }
    }
}

#[test]
fn separation_is_symmetric() {
    let a = Body::new(1.0f64, 0.0, 0.0, 10.0);
    let b = Body::new(50.0f64, 0.0, 14.0, 10.0);
    let (a2, b2) = resolve_collision(a, b, RestitutionMode::Elastic);
    assert!((a2.position - -3.0).abs() < 1e-12);
    assert!((b2.position - 17.0).abs() < 1e-12);
}

#[test]
fn non_colliding_step_only_moves_positions() {
    let a = Body::new(10.0f64, 5.0, 200.0, 40.0).with_height(175.0);
    let b = Body::new(15.0f64, -3.0, 600.0, 50.0).with_height(175.0);
    assert!(!is_touching(&a, &b));

    for mode in [RestitutionMode::Elastic, RestitutionMode::Inelastic] {
        let outcome = Stepper::new(mode).step(a, b);
        assert!(!outcome.collided());
        assert_eq!(outcome.a, Body { position: 205.0, ..a });
        assert_eq!(outcome.b, Body { position: 597.0, ..b });
    }
}

#[test]
fn contact_reports_before_and_after() {
    let a = Body::new(10.0f64, 5.0, 0.0, 40.0);
    let b = Body::new(15.0f64, -3.0, 95.0, 50.0);
    let outcome = Stepper::new(RestitutionMode::Elastic).step(a, b);
    let contact = outcome.contact.expect("bodies overlap after integration");
    assert_eq!(contact.velocities_before, (5.0, -3.0));
    assert!(!contact.stuck);
    assert!((contact.overlap - 3.0).abs() < 1e-12);
    assert!((contact.velocities_after.0 - -4.6 * 0.95).abs() < 1e-12);
    assert!((contact.velocities_after.1 - 3.4 * 0.95).abs() < 1e-12);
}

#[test]
fn stepper_is_generic_over_f32() {
    let a: Body<f32> = Body::new(10.0, 5.0, 0.0, 10.0);
    let b: Body<f32> = Body::new(10.0, -5.0, 30.0, 10.0);
    let (a2, b2) = advance(a, b, RestitutionMode::Elastic);
    assert!((a2.velocity + 4.75).abs() < 1e-5);
    assert!((b2.velocity - 4.75).abs() < 1e-5);
}
