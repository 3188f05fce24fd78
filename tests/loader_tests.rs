// Host-side tests for the loading screen mesh and timeline.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod device {
    include!("../src/core/device.rs");
}
mod pointer {
    include!("../src/core/pointer.rs");
}
mod surface {
    include!("../src/core/surface.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod mesh {
    include!("../src/core/mesh.rs");
}
mod loader {
    include!("../src/core/loader.rs");
}
mod common;

use common::{Op, Recorder};
use config::LoaderConfig;
use device::DeviceClass;
use glam::Vec2;
use loader::*;
use mesh::*;
use pointer::PointerState;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::{Scene, Step};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn points(coords: &[(f32, f32)]) -> Vec<MeshPoint> {
    coords
        .iter()
        .enumerate()
        .map(|(id, &(x, y))| MeshPoint {
            id,
            pos: Vec2::new(x, y),
        })
        .collect()
}

#[test]
fn progress_steps_every_tick() {
    let mut t = LoaderTimeline::new(&LoaderConfig::default());
    assert_eq!(t.progress(), 0);
    t.advance(ms(59));
    assert_eq!(t.progress(), 0);
    t.advance(ms(1));
    assert_eq!(t.progress(), 2);
    t.advance(ms(1_440));
    assert_eq!(t.progress(), 50);
    t.advance(ms(10_000));
    assert_eq!(t.progress(), 100);
}

#[test]
fn completion_fires_once_after_full_progress() {
    let mut t = LoaderTimeline::new(&LoaderConfig::default());
    assert_eq!(t.full_at(), ms(3_000));
    assert_eq!(t.complete_at(), ms(3_500));

    let mut fired = 0;
    for _ in 0..100 {
        if t.advance(ms(50)) {
            fired += 1;
            assert!(t.elapsed() >= ms(3_500));
            assert_eq!(t.progress(), 100);
        }
    }
    assert_eq!(fired, 1);
    assert!(t.is_complete());
}

#[test]
fn mesh_appears_after_delay() {
    let mut t = LoaderTimeline::new(&LoaderConfig::default());
    t.advance(ms(799));
    assert!(!t.mesh_visible());
    assert_eq!(t.mesh_elapsed(), None);
    t.advance(ms(1));
    assert!(t.mesh_visible());
    assert_eq!(t.mesh_elapsed(), Some(Duration::ZERO));
}

#[test]
fn generated_mesh_keeps_short_edges_only() {
    let config = LoaderConfig::default();
    for seed in 0..10 {
        let mesh = Mesh::generate(&config, &mut StdRng::seed_from_u64(seed));
        assert_eq!(mesh.points.len(), 25);
        assert!(mesh.triangles.len() <= 40);
        for p in &mesh.points {
            assert!((0.0..=800.0).contains(&p.pos.x) && (0.0..=600.0).contains(&p.pos.y));
        }
        let mut prev: Option<(usize, usize, usize)> = None;
        for tri in &mesh.triangles {
            assert!(tri.a < tri.b && tri.b < tri.c);
            let [a, b, c] = mesh.vertices(tri);
            assert!(a.distance(b) < 150.0 && b.distance(c) < 150.0 && c.distance(a) < 150.0);
            let key = (tri.a, tri.b, tri.c);
            if let Some(p) = prev {
                assert!(p < key, "triangles out of order");
            }
            prev = Some(key);
        }
    }
}

#[test]
fn triangle_selection_by_edge_length() {
    let h = 100.0 * 3f32.sqrt() / 2.0;
    let small = Mesh::from_points(points(&[(0.0, 0.0), (100.0, 0.0), (50.0, h)]), 150.0, 40);
    assert_eq!(small.triangles.len(), 1);
    assert_eq!(small.triangles[0].key(), "0-1-2");

    let wide = Mesh::from_points(points(&[(0.0, 0.0), (200.0, 0.0), (100.0, 2.0 * h)]), 150.0, 40);
    assert!(wide.triangles.is_empty());

    let too_few = Mesh::from_points(points(&[(0.0, 0.0), (1.0, 0.0)]), 150.0, 40);
    assert!(too_few.triangles.is_empty());
}

#[test]
fn triangle_cap_keeps_lexicographic_prefix() {
    let cluster = points(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (0.0, 10.0),
        (10.0, 10.0),
        (5.0, 5.0),
        (5.0, 0.0),
    ]);
    let all = Mesh::from_points(cluster.clone(), 150.0, 100);
    assert_eq!(all.triangles.len(), 20);

    let capped = Mesh::from_points(cluster, 150.0, 5);
    let keys: Vec<String> = capped.triangles.iter().map(Triangle::key).collect();
    assert_eq!(keys, ["0-1-2", "0-1-3", "0-1-4", "0-1-5", "0-2-3"]);
}

#[test]
fn pulse_oscillates_between_bounds() {
    assert_eq!(pulse(0.0, 2.0, 0.0, 0.2, 0.6), 0.2);
    assert!((pulse(1.0, 2.0, 0.0, 0.2, 0.6) - 0.6).abs() < 1e-6);
    assert!((pulse(2.0, 2.0, 0.0, 0.2, 0.6) - 0.2).abs() < 1e-6);
    // delayed element rests at its low value
    assert_eq!(pulse(0.3, 2.0, 0.5, 0.2, 0.6), 0.2);
    assert!((pulse(1.5, 2.0, 0.5, 0.2, 0.6) - 0.6).abs() < 1e-6);
    for i in 0..100 {
        let v = pulse(i as f32 * 0.037, 3.0, 0.1, 0.3, 0.7);
        assert!(v >= 0.3 - 1e-6 && v <= 0.7 + 1e-6, "pulse out of range: {v}");
    }
}

#[test]
fn view_box_fits_and_centres() {
    let view = Vec2::new(800.0, 600.0);
    let exact = ViewFit::new(view, Vec2::new(1600.0, 1200.0));
    assert_eq!(exact.scale, 2.0);
    assert_eq!(exact.offset, Vec2::ZERO);

    let wide = ViewFit::new(view, Vec2::new(1600.0, 600.0));
    assert_eq!(wide.scale, 1.0);
    assert_eq!(wide.offset, Vec2::new(400.0, 0.0));
    assert_eq!(wide.map(Vec2::new(800.0, 600.0)), Vec2::new(1200.0, 600.0));
}

#[test]
fn scene_paints_mesh_only_once_visible() {
    let mut scene = LoaderScene::new(LoaderConfig::default(), &mut StdRng::seed_from_u64(21));
    scene.resize(1600.0, 1200.0, DeviceClass::Desktop);
    let idle = PointerState::default();
    assert!(!scene.tracks_pointer());

    let mut early = Recorder::default();
    scene.draw(&mut early, &idle);
    assert_eq!(early.ops, vec![Op::Clear(1600.0, 1200.0)]);

    assert_eq!(scene.update(ms(1_000), &idle), Step::Continue);
    let mut shown = Recorder::default();
    scene.draw(&mut shown, &idle);
    let triangles = scene.mesh().triangles.len();
    assert_eq!(shown.triangles(), triangles);
    assert_eq!(shown.lines(), triangles * 3);
    assert_eq!(shown.circles(), 25);
    for (_, alpha) in shown.draw_alphas() {
        assert!(alpha > 0.0 && alpha <= 0.2);
    }
    assert_eq!(shown.ops.last(), Some(&Op::Alpha(1.0)));
}

#[test]
fn scene_finishes_exactly_once() {
    let mut scene = LoaderScene::new(LoaderConfig::default(), &mut StdRng::seed_from_u64(22));
    let idle = PointerState::default();
    let mut finished = 0;
    for _ in 0..300 {
        if scene.update(ms(16), &idle) == Step::Finished {
            finished += 1;
        }
    }
    assert_eq!(finished, 1);
    assert_eq!(scene.progress(), 100);
}
