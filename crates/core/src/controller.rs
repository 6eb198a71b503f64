use crate::camera::{OrthoCamera, Ray};
use crate::mesh::{plane_mesh, MeshData};
use crate::pointer::PointerState;
use crate::settings::Settings;
use glam::Vec3;
use std::collections::BTreeMap;

/// Fixed time increment per tick.
pub const TIME_STEP: f32 = 0.05;

/// Keys for the fixed set of drawables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ObjectKey {
    Plane,
    Text,
}

/// A drawable: geometry plus its transform.
///
/// There is no per-object material; all objects share the single stripe
/// shader and the controller-owned frame uniforms.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub mesh: MeshData,
    pub position: Vec3,
    /// Euler rotation in radians (XYZ order).
    pub rotation: Vec3,
}

impl SceneObject {
    pub fn new(mesh: MeshData) -> Self {
        Self {
            mesh,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }
}

/// Uniform values handed to the shading stage each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub time: f32,
    pub rotation: f32,
    pub repeat: f32,
    pub line_width: f32,
    pub resolution: [f32; 4],
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self {
            time: 0.0,
            rotation: 0.0,
            repeat: 0.0,
            line_width: 0.0,
            resolution: [0.0; 4],
        }
    }
}

/// The demo's single component.
///
/// Owns the camera, the scene-object map, the pointer tracker and the
/// settings record. The windowing layer feeds it events (`resize`,
/// `pointer_moved`, `pause`/`play`) and calls [`SceneController::tick`]
/// once per animation frame; the GPU backend then reads `uniforms()` and
/// `objects()` to draw.
pub struct SceneController {
    pub settings: Settings,
    pub camera: OrthoCamera,
    pointer: PointerState,
    objects: BTreeMap<ObjectKey, SceneObject>,
    uniforms: FrameUniforms,
    width: f32,
    height: f32,
    time: f32,
    paused: bool,
    /// Computed from the pointer but never consumed; retained for future
    /// picking.
    last_pick_ray: Option<Ray>,
}

impl SceneController {
    /// Create a controller for a surface of the given pixel size, insert
    /// the plane, and run the initial resize pass.
    pub fn new(width: f32, height: f32) -> Self {
        let aspect = width / height;
        let mut objects = BTreeMap::new();
        objects.insert(ObjectKey::Plane, SceneObject::new(plane_mesh(aspect)));

        let mut controller = Self {
            settings: Settings::default(),
            camera: OrthoCamera::new(aspect),
            pointer: PointerState::default(),
            objects,
            uniforms: FrameUniforms::default(),
            width,
            height,
            time: 0.0,
            paused: false,
            last_pick_ray: None,
        };
        controller.resize(width, height);
        controller
    }

    /// Advance one animation frame. No-op while paused.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        self.time += TIME_STEP;
        self.pointer.smooth_step();

        if let Some(text) = self.objects.get_mut(&ObjectKey::Text) {
            text.rotation.y = self.pointer.smoothed.x / 4.0;
            text.rotation.x = self.pointer.smoothed.y / 4.0;
        }

        self.uniforms.time = self.time;
        self.uniforms.rotation = self.settings.rotation;
        self.uniforms.repeat = self.settings.repeat;
        self.uniforms.line_width = self.settings.line_width;
    }

    /// Surface size changed: update the camera aspect and the resolution
    /// uniform. The z,w components stay at 1,1.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.camera.aspect = width / height;
        self.uniforms.resolution = [width, height, 1.0, 1.0];
    }

    /// Record a pointer sample in window-pixel coordinates.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.raw = PointerState::normalize(x, y, self.width, self.height);
        let clip = PointerState::to_clip(x, y, self.width, self.height);
        self.last_pick_ray = Some(self.camera.pick_ray(clip));
    }

    /// Insert the text mesh once the font build has completed. Until this
    /// is called, the tick skips the text object.
    pub fn insert_text(&mut self, mesh: MeshData) {
        tracing::info!(
            "text mesh inserted: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        let mut object = SceneObject::new(mesh);
        object.position.z = 0.5;
        self.objects.insert(ObjectKey::Text, object);
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn play(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn uniforms(&self) -> &FrameUniforms {
        &self.uniforms
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn objects(&self) -> &BTreeMap<ObjectKey, SceneObject> {
        &self.objects
    }

    pub fn object(&self, key: ObjectKey) -> Option<&SceneObject> {
        self.objects.get(&key)
    }

    pub fn last_pick_ray(&self) -> Option<Ray> {
        self.last_pick_ray
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> MeshData {
        plane_mesh(1.0)
    }

    #[test]
    fn construction_inserts_the_plane_only() {
        let c = SceneController::new(800.0, 600.0);
        assert!(c.object(ObjectKey::Plane).is_some());
        assert!(c.object(ObjectKey::Text).is_none());
        assert!((c.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn initial_resize_fills_the_resolution_uniform() {
        let c = SceneController::new(800.0, 600.0);
        assert_eq!(c.uniforms().resolution, [800.0, 600.0, 1.0, 1.0]);
    }

    #[test]
    fn resize_updates_aspect_and_resolution() {
        let mut c = SceneController::new(800.0, 600.0);
        c.resize(400.0, 300.0);
        assert!((c.camera.aspect - 400.0 / 300.0).abs() < 1e-6);
        assert_eq!(c.uniforms().resolution, [400.0, 300.0, 1.0, 1.0]);
    }

    #[test]
    fn resolution_zw_stay_one_for_any_size() {
        let mut c = SceneController::new(1.0, 1.0);
        for (w, h) in [(1920.0, 1080.0), (17.0, 1021.0), (3.0, 3.0)] {
            c.resize(w, h);
            let r = c.uniforms().resolution;
            assert_eq!((r[2], r[3]), (1.0, 1.0));
            assert!((c.camera.aspect - w / h).abs() < 1e-6);
        }
    }

    #[test]
    fn tick_advances_time_and_copies_settings() {
        let mut c = SceneController::new(640.0, 480.0);
        c.settings.rotation = 1.0;
        c.settings.repeat = 25.0;
        c.settings.line_width = 0.5;
        c.tick();
        let u = c.uniforms();
        assert!((u.time - TIME_STEP).abs() < 1e-6);
        assert_eq!(u.rotation, 1.0);
        assert_eq!(u.repeat, 25.0);
        assert_eq!(u.line_width, 0.5);
    }

    #[test]
    fn tick_skips_text_before_insertion() {
        let mut c = SceneController::new(640.0, 480.0);
        c.pointer_moved(640.0, 0.0); // raw = (1, 1)
        for _ in 0..10 {
            c.tick();
        }
        assert!(c.object(ObjectKey::Text).is_none());

        c.insert_text(square());
        let inserted = c.object(ObjectKey::Text).unwrap();
        assert_eq!(inserted.rotation, Vec3::ZERO);
        assert_eq!(inserted.position.z, 0.5);

        c.tick();
        let text = c.object(ObjectKey::Text).unwrap();
        assert!(text.rotation.y > 0.0);
        assert!(text.rotation.x > 0.0);
    }

    #[test]
    fn text_rotation_follows_smoothed_pointer_quartered() {
        let mut c = SceneController::new(400.0, 400.0);
        c.insert_text(square());
        c.pointer_moved(400.0, 0.0); // raw = (1, 1)
        c.tick();
        let smoothed = c.pointer().smoothed;
        let text = c.object(ObjectKey::Text).unwrap();
        assert!((text.rotation.y - smoothed.x / 4.0).abs() < 1e-6);
        assert!((text.rotation.x - smoothed.y / 4.0).abs() < 1e-6);
    }

    #[test]
    fn pause_freezes_time_and_uniforms() {
        let mut c = SceneController::new(640.0, 480.0);
        c.tick();
        c.tick();
        let before = *c.uniforms();
        let time_before = c.time();

        c.pause();
        c.pointer_moved(10.0, 10.0);
        for _ in 0..50 {
            c.tick();
        }
        assert_eq!(c.time(), time_before);
        assert_eq!(*c.uniforms(), before);

        c.play();
        c.tick();
        assert!((c.time() - (time_before + TIME_STEP)).abs() < 1e-6);
    }

    #[test]
    fn pointer_move_records_a_pick_ray() {
        let mut c = SceneController::new(800.0, 600.0);
        assert!(c.last_pick_ray().is_none());
        c.pointer_moved(400.0, 300.0);
        let ray = c.last_pick_ray().unwrap();
        assert_eq!(ray.direction, -Vec3::Z);
        assert!(ray.origin.x.abs() < 1e-6);
        assert!(ray.origin.y.abs() < 1e-6);
    }

    #[test]
    fn scenario_resize_800x600_to_400x300() {
        let mut c = SceneController::new(800.0, 600.0);
        assert!((c.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        c.resize(400.0, 300.0);
        assert!((c.camera.aspect - 400.0 / 300.0).abs() < 1e-6);
        assert_eq!(c.uniforms().resolution, [400.0, 300.0, 1.0, 1.0]);
    }
}
