use glam::{Mat4, Vec2, Vec3};

/// Fixed world-space height of the orthographic frustum.
pub const FRUSTUM_HEIGHT: f32 = 3.0;

/// Orthographic camera: no foreshortening, frustum sized by a fixed height
/// scaled by the surface aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoCamera {
    pub aspect: f32,
    pub position: Vec3,
    pub near: f32,
    pub far: f32,
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self {
            aspect: 16.0 / 9.0,
            position: Vec3::new(0.0, 0.0, 2.0),
            near: -1000.0,
            far: 2000.0,
        }
    }
}

impl OrthoCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            aspect,
            ..Default::default()
        }
    }

    /// Half width/height of the frustum in world units.
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(
            FRUSTUM_HEIGHT * self.aspect / 2.0,
            FRUSTUM_HEIGHT / 2.0,
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let h = self.half_extents();
        Mat4::orthographic_rh(-h.x, h.x, -h.y, h.y, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Ray through a clip-space point. Orthographic projection, so the
    /// direction is always -Z and only the origin varies.
    pub fn pick_ray(&self, clip: Vec2) -> Ray {
        let h = self.half_extents();
        Ray {
            origin: Vec3::new(clip.x * h.x, clip.y * h.y, self.position.z),
            direction: -Vec3::Z,
        }
    }
}

/// A world-space ray, as produced by [`OrthoCamera::pick_ray`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frustum_scales_with_aspect() {
        let cam = OrthoCamera::new(800.0 / 600.0);
        let h = cam.half_extents();
        assert_eq!(h.y, FRUSTUM_HEIGHT / 2.0);
        assert!((h.x - FRUSTUM_HEIGHT * (800.0 / 600.0) / 2.0).abs() < 1e-6);
    }

    #[test]
    fn view_projection_is_finite() {
        let cam = OrthoCamera::new(1.5);
        let vp = cam.view_projection();
        assert!(vp.is_finite());
    }

    #[test]
    fn frustum_corners_map_to_clip_extremes() {
        let cam = OrthoCamera::new(2.0);
        let h = cam.half_extents();
        let vp = cam.view_projection();
        let corner = vp.project_point3(Vec3::new(h.x, h.y, 0.0));
        assert!((corner.x - 1.0).abs() < 1e-5);
        assert!((corner.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn pick_ray_points_into_the_scene() {
        let cam = OrthoCamera::new(1.0);
        let ray = cam.pick_ray(Vec2::new(0.5, -0.5));
        assert_eq!(ray.direction, -Vec3::Z);
        assert_eq!(ray.origin.z, cam.position.z);
        let h = cam.half_extents();
        assert!((ray.origin.x - 0.5 * h.x).abs() < 1e-6);
        assert!((ray.origin.y + 0.5 * h.y).abs() < 1e-6);
    }
}
