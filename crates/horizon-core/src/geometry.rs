//! Subdivided planes and their wireframe edge lists.

use glam::Vec3;

/// A flat `width` x `height` plane in its local XY plane, centered on the
/// origin, split into `segments_x` x `segments_y` quads.
///
/// Vertices are laid out row-major starting at the top-left corner
/// (`-w/2, +h/2`), with y decreasing row by row.
#[derive(Clone, Debug)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
    pub segments_x: u32,
    pub segments_y: u32,
    positions: Vec<Vec3>,
}

impl PlaneGeometry {
    pub fn new(width: f32, height: f32, segments_x: u32, segments_y: u32) -> Self {
        let sx = segments_x.max(1);
        let sy = segments_y.max(1);
        let half_w = width * 0.5;
        let half_h = height * 0.5;
        let mut positions = Vec::with_capacity(((sx + 1) * (sy + 1)) as usize);
        for iy in 0..=sy {
            // Fractions first so the outer edges land exactly on +-half.
            let y = iy as f32 / sy as f32 * height - half_h;
            for ix in 0..=sx {
                let x = ix as f32 / sx as f32 * width - half_w;
                positions.push(Vec3::new(x, -y, 0.0));
            }
        }
        Self {
            width,
            height,
            segments_x: sx,
            segments_y: sy,
            positions,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    #[inline]
    fn index(&self, ix: u32, iy: u32) -> u32 {
        iy * (self.segments_x + 1) + ix
    }

    /// Line-list indices for the triangle edges of the plane, each edge once.
    ///
    /// Every quad `a(ix,iy) b(ix,iy+1) c(ix+1,iy+1) d(ix+1,iy)` is split into
    /// triangles `abd` and `bcd`, so besides the row and column edges each
    /// quad contributes its `b-d` diagonal.
    pub fn wireframe_indices(&self) -> Vec<u32> {
        let (sx, sy) = (self.segments_x, self.segments_y);
        let edges = sx * (sy + 1) + sy * (sx + 1) + sx * sy;
        let mut out = Vec::with_capacity((edges * 2) as usize);
        for iy in 0..=sy {
            for ix in 0..sx {
                out.push(self.index(ix, iy));
                out.push(self.index(ix + 1, iy));
            }
        }
        for iy in 0..sy {
            for ix in 0..=sx {
                out.push(self.index(ix, iy));
                out.push(self.index(ix, iy + 1));
            }
        }
        for iy in 0..sy {
            for ix in 0..sx {
                out.push(self.index(ix, iy + 1));
                out.push(self.index(ix + 1, iy));
            }
        }
        out
    }
}

/// Flattens positions into the `[x, y, z]` layout uploaded to vertex buffers.
pub fn pack_positions(positions: &[Vec3]) -> Vec<[f32; 3]> {
    positions.iter().map(|p| p.to_array()).collect()
}
