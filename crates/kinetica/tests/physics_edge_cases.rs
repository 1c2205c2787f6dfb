#![allow(clippy::doc_markdown)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::cast_precision_loss)]

//! Edge-case tests for the kinetica simulation: long-duration stability,
//! damping behavior, reflection at extreme parameters, and the documented
//! NaN-propagation semantics for malformed input.

use kinetica::{Ball, BallParams, Bounds, Engine};

// =============================================================================
// Long-duration stability
// =============================================================================

#[test]
fn gravity_scene_settles_on_the_floor() {
    // The original default scene: gravity-like ay with elasticity 0.9 and
    // friction 0.99 loses energy every bounce and every frame, so after a
    // long run the ball rests at the bottom of the surface.
    let params = [BallParams {
        x: 100.0,
        y: 100.0,
        ay: 0.5,
        radius: 20.0,
        ..BallParams::default()
    }];
    let mut engine = Engine::new(Bounds::new(800.0, 600.0), &params);

    for _ in 0..20_000 {
        engine.step();
        let p = engine.balls()[0].position();
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    let ball = &engine.balls()[0];
    assert!(
        (ball.position().y - 580.0).abs() < 2.0,
        "ball should rest near height - radius, got y={}",
        ball.position().y
    );
}

#[test]
fn frictionless_elastic_ball_keeps_bouncing() {
    let params = [BallParams {
        x: 50.0,
        y: 50.0,
        vx: 7.0,
        vy: 3.0,
        elasticity: 1.0,
        friction: 1.0,
        radius: 10.0,
        ..BallParams::default()
    }];
    let mut engine = Engine::new(Bounds::new(200.0, 200.0), &params);

    for _ in 0..10_000 {
        engine.step();
    }

    let speed = engine.balls()[0].velocity().magnitude();
    let expected = (7.0f64 * 7.0 + 3.0 * 3.0).sqrt();
    assert!(
        (speed - expected).abs() < 1e-6,
        "perfectly elastic, frictionless ball should conserve speed, got {speed}"
    );
}

#[test]
fn ball_stays_inside_bounds_forever() {
    let params = [BallParams {
        x: 30.0,
        y: 170.0,
        vx: 13.0,
        vy: -11.0,
        ay: 0.5,
        radius: 15.0,
        ..BallParams::default()
    }];
    let bounds = Bounds::new(200.0, 200.0);
    let mut engine = Engine::new(bounds, &params);

    for _ in 0..5_000 {
        engine.step();
        let p = engine.balls()[0].position();
        assert!(p.x >= 15.0 - 1e-9 && p.x <= 185.0 + 1e-9, "x escaped: {}", p.x);
        assert!(p.y >= 15.0 - 1e-9 && p.y <= 185.0 + 1e-9, "y escaped: {}", p.y);
    }
}

// =============================================================================
// Extreme parameters
// =============================================================================

#[test]
fn zero_elasticity_kills_normal_velocity_on_impact() {
    let params = [BallParams {
        x: 75.0,
        y: 50.0,
        vx: 30.0,
        radius: 20.0,
        elasticity: 0.0,
        friction: 1.0,
        ..BallParams::default()
    }];
    let mut engine = Engine::new(Bounds::new(100.0, 100.0), &params);

    engine.step();

    let ball = &engine.balls()[0];
    assert_eq!(ball.velocity().x, 0.0);
    assert_eq!(ball.position().x, 80.0);
}

#[test]
fn huge_velocity_is_clamped_not_tunneled() {
    // One frame can jump far past the wall; the clamp still pins the ball
    // inside the surface rather than letting it tunnel out.
    let params = [BallParams {
        x: 50.0,
        y: 50.0,
        vx: 1e6,
        radius: 10.0,
        friction: 1.0,
        ..BallParams::default()
    }];
    let mut engine = Engine::new(Bounds::new(100.0, 100.0), &params);

    engine.step();

    assert_eq!(engine.balls()[0].position().x, 90.0);
}

#[test]
fn zero_friction_stops_ball_after_one_frame() {
    let mut ball = Ball::from(&BallParams {
        x: 500.0,
        y: 500.0,
        vx: 25.0,
        vy: -25.0,
        friction: 0.0,
        ..BallParams::default()
    });

    ball.step(Bounds::new(1000.0, 1000.0));

    // The frame's motion happened, then friction zeroed the velocity.
    assert_eq!(ball.position().x, 525.0);
    assert_eq!(ball.velocity().x, 0.0);
    assert_eq!(ball.velocity().y, 0.0);
}

// =============================================================================
// Malformed input: undefined numeric behavior, not a reported failure
// =============================================================================

#[test]
fn nan_parameters_propagate_without_panicking() {
    let params = [BallParams {
        x: f64::NAN,
        vx: 5.0,
        ..BallParams::default()
    }];
    let mut engine = Engine::new(Bounds::new(100.0, 100.0), &params);

    for _ in 0..10 {
        engine.step();
    }

    assert!(engine.balls()[0].position().x.is_nan());
}
