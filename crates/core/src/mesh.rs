use crate::camera::FRUSTUM_HEIGHT;

/// Geometry descriptor consumed by the GPU backend: flat position and
/// normal arrays plus a triangle index list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Build the backdrop plane: a single quad facing +Z, sized to nearly fill
/// the frustum at the given aspect ratio.
pub fn plane_mesh(aspect: f32) -> MeshData {
    let hw = (FRUSTUM_HEIGHT * aspect - 0.2) / 2.0;
    let hh = 2.8 / 2.0;
    let n = [0.0, 0.0, 1.0];
    MeshData {
        positions: vec![
            [-hw, -hh, 0.0],
            [hw, -hh, 0.0],
            [hw, hh, 0.0],
            [-hw, hh, 0.0],
        ],
        normals: vec![n; 4],
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_is_one_quad() {
        let m = plane_mesh(4.0 / 3.0);
        assert_eq!(m.vertex_count(), 4);
        assert_eq!(m.triangle_count(), 2);
        assert_eq!(m.normals.len(), m.positions.len());
    }

    #[test]
    fn plane_tracks_aspect() {
        let aspect = 800.0 / 600.0;
        let m = plane_mesh(aspect);
        let width = m.positions[1][0] - m.positions[0][0];
        assert!((width - (FRUSTUM_HEIGHT * aspect - 0.2)).abs() < 1e-5);
        let height = m.positions[2][1] - m.positions[1][1];
        assert!((height - 2.8).abs() < 1e-5);
    }

    #[test]
    fn plane_sits_inside_the_frustum_height() {
        let m = plane_mesh(1.0);
        for p in &m.positions {
            assert!(p[1].abs() <= FRUSTUM_HEIGHT / 2.0);
        }
    }
}
