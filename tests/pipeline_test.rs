//! End-to-end pipeline verification.
//!
//! Drives the full generate → rotate → rasterize → map-to-glyphs pipeline
//! and checks the invariants a frame must uphold regardless of parameters.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use torviz::prelude::*;

fn simulation(cells_x: usize, cells_y: usize) -> Simulation {
    let mut sim = Simulation::new(&Config::default()).expect("default config is valid");
    sim.grid_mut()
        .set_window_cells(cells_x, cells_y)
        .expect("grid allocation");
    sim
}

#[test]
fn every_frame_glyph_is_ramp_or_blank() {
    let mut sim = simulation(60, 20);
    for _ in 0..20 {
        sim.step(16.0);
        for row in 0..sim.grid().cells_y() {
            for &c in sim.grid().row(row).expect("row in range") {
                assert!(
                    c == BLANK || GLYPH_RAMP.contains(&c),
                    "glyph {c:?} is neither ramp nor blank"
                );
            }
        }
    }
}

#[test]
fn torus_stays_centered_while_rotating() {
    // A torus centered on the origin must keep lighting cells near the
    // grid center through arbitrary rotation.
    let mut sim = simulation(40, 40);
    for _ in 0..30 {
        sim.step(16.0);
        let mid = sim.grid().cells_y() / 2;
        let lit = sim
            .grid()
            .row(mid)
            .expect("row in range")
            .iter()
            .filter(|&&c| c != BLANK)
            .count();
        assert!(lit > 0, "equator row went dark mid-rotation");
    }
}

#[test]
fn depth_plane_and_glyph_plane_stay_in_lockstep() {
    let mut sim = simulation(32, 32);
    sim.step(16.0);
    let cells_x = sim.grid().cells_x();
    for row in 0..sim.grid().cells_y() {
        let glyphs = sim.grid().row(row).expect("row in range");
        for (col, &c) in glyphs.iter().enumerate() {
            let z = sim.grid().depths()[row * cells_x + col];
            if !z.is_finite() {
                assert_eq!(c, BLANK, "cell ({row},{col}) lit with no sample");
            } else if c != BLANK {
                assert!(
                    z.abs() <= sim.cloud().z_extent() / 2.0 + 1e-9,
                    "cell ({row},{col}) depth {z} outside representable range"
                );
            }
        }
    }
}

#[test]
fn resize_preserves_point_count_and_recovers() {
    let mut sim = simulation(60, 20);
    let points = sim.cloud().len();
    sim.step(16.0);

    sim.grid_mut().set_window_cells(10, 4).expect("shrink");
    sim.step(16.0);
    sim.grid_mut().set_window_cells(60, 20).expect("grow");
    sim.step(16.0);

    assert_eq!(sim.cloud().len(), points);
    assert_eq!(sim.grid().cells_x(), 60);
    let lit: usize = (0..20)
        .map(|r| {
            sim.grid()
                .row(r)
                .expect("row in range")
                .iter()
                .filter(|&&c| c != BLANK)
                .count()
        })
        .sum();
    assert!(lit > 0);
}

#[test]
fn layout_and_fit_agree_for_common_terminal_sizes() {
    for (w, h) in [(80u16, 24u16), (120, 40), (200, 50), (40, 12)] {
        let (cx, cy) = layout::fit_cells(w, h, 1, 1);
        if cx == 0 {
            continue;
        }
        let pad = layout::center(w, h, 1, 1, cx, cy).expect("fitted grid must center");
        assert_eq!(pad.left + pad.right + cx, w);
        assert_eq!(pad.top + pad.bottom + cy, h);
        assert!(pad.left >= 1 && pad.top >= 1);
    }
}

#[test]
fn full_revolution_returns_to_start_through_the_stepper() {
    let config = Config {
        x_step_angle: std::f64::consts::TAU / 100.0,
        y_step_angle: 0.0,
        z_step_angle: 0.0,
        ..Config::default()
    };
    let mut sim = Simulation::new(&config).expect("valid config");
    sim.grid_mut().set_window_cells(20, 20).expect("grid");
    let before = sim.cloud().points().to_vec();

    // 100 steps of TAU/100 about a single axis complete one revolution.
    for _ in 0..100 {
        sim.step(config.step_ms);
    }

    for (p, q) in sim.cloud().points().iter().zip(&before) {
        assert_abs_diff_eq!(p.x, q.x, epsilon = 1e-7);
        assert_abs_diff_eq!(p.y, q.y, epsilon = 1e-7);
        assert_abs_diff_eq!(p.z, q.z, epsilon = 1e-7);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_no_frame_ever_panics_or_leaks_glyphs(
        major_steps in 1u32..40,
        minor_steps in 1u32..40,
        cells_x in 1usize..80,
        cells_y in 1usize..40,
        elapsed in 0.0f64..200.0,
    ) {
        let config = Config {
            major_steps,
            minor_steps,
            ..Config::default()
        };
        let mut sim = Simulation::new(&config).expect("steps >= 1");
        sim.grid_mut().set_window_cells(cells_x, cells_y).expect("grid");
        sim.step(elapsed);
        for row in 0..cells_y {
            for &c in sim.grid().row(row).expect("row in range") {
                prop_assert!(c == BLANK || GLYPH_RAMP.contains(&c));
            }
        }
    }
}
