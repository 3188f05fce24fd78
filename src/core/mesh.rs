use super::config::LoaderConfig;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct MeshPoint {
    pub id: usize,
    pub pos: Vec2,
}

/// Three point indices, `a < b < c`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    /// Stable key in the `"i-j-k"` form.
    pub fn key(&self) -> String {
        format!("{}-{}-{}", self.a, self.b, self.c)
    }
}

/// Random point cloud plus the short-edged triangles between its points.
///
/// This is not a Delaunay triangulation: any triple whose sides are all
/// shorter than the edge limit qualifies, so triangles may overlap.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub points: Vec<MeshPoint>,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn generate<R: Rng + ?Sized>(config: &LoaderConfig, rng: &mut R) -> Self {
        let points = (0..config.point_count)
            .map(|id| MeshPoint {
                id,
                pos: Vec2::new(
                    rng.gen::<f32>() * config.view_width,
                    rng.gen::<f32>() * config.view_height,
                ),
            })
            .collect();
        Self::from_points(points, config.max_edge, config.max_triangles)
    }

    /// Triangles are enumerated in lexicographic `(i, j, k)` order and cut
    /// off after `max_triangles`.
    pub fn from_points(points: Vec<MeshPoint>, max_edge: f32, max_triangles: usize) -> Self {
        let n = points.len();
        let mut triangles = Vec::new();
        'outer: for i in 0..n.saturating_sub(2) {
            for j in i + 1..n.saturating_sub(1) {
                let ij = points[i].pos.distance(points[j].pos);
                if ij >= max_edge {
                    continue;
                }
                for k in j + 1..n {
                    if triangles.len() == max_triangles {
                        break 'outer;
                    }
                    let jk = points[j].pos.distance(points[k].pos);
                    let ki = points[k].pos.distance(points[i].pos);
                    if jk < max_edge && ki < max_edge {
                        triangles.push(Triangle { a: i, b: j, c: k });
                    }
                }
            }
        }
        Self { points, triangles }
    }

    #[inline]
    pub fn vertices(&self, t: &Triangle) -> [Vec2; 3] {
        [self.points[t.a].pos, self.points[t.b].pos, self.points[t.c].pos]
    }
}

/// Eased oscillation between `lo` (at the start and end of each period) and
/// `hi` (mid-period). Before `delay` the value rests at `lo`.
pub fn pulse(t_sec: f32, period: f32, delay: f32, lo: f32, hi: f32) -> f32 {
    let local = t_sec - delay;
    if local < 0.0 || period <= 0.0 {
        return lo;
    }
    let phase = (local / period).fract();
    let tri = 1.0 - (2.0 * phase - 1.0).abs();
    let eased = tri * tri * (3.0 - 2.0 * tri);
    lo + (hi - lo) * eased
}

/// Uniform "meet" fit of a view box into a surface, centred.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewFit {
    pub scale: f32,
    pub offset: Vec2,
}

impl ViewFit {
    pub fn new(view: Vec2, surface: Vec2) -> Self {
        if view.x <= 0.0 || view.y <= 0.0 {
            return Self {
                scale: 0.0,
                offset: Vec2::ZERO,
            };
        }
        let scale = (surface.x / view.x).min(surface.y / view.y).max(0.0);
        let offset = (surface - view * scale) * 0.5;
        Self { scale, offset }
    }

    #[inline]
    pub fn map(&self, p: Vec2) -> Vec2 {
        self.offset + p * self.scale
    }
}
