//! Scene controller state for the stripe demo.
//!
//! Everything here is platform-independent: the controller advances time,
//! smooths pointer input, and fills the frame uniforms, while the windowing
//! layer feeds it events and the GPU backend reads it once per frame.
//!
//! # Invariants
//! - All drawables share one shader program; the frame uniforms are the sole
//!   per-frame channel into it.
//! - The tick tolerates the text mesh not having been inserted yet.
//! - While paused, a tick changes nothing.

mod camera;
mod controller;
mod mesh;
mod pointer;
mod settings;

pub use camera::{OrthoCamera, Ray, FRUSTUM_HEIGHT};
pub use controller::{FrameUniforms, ObjectKey, SceneController, SceneObject, TIME_STEP};
pub use mesh::{plane_mesh, MeshData};
pub use pointer::{PointerState, SMOOTHING};
pub use settings::{
    Settings, LINE_WIDTH_RANGE, REPEAT_RANGE, ROTATION_RANGE, SLIDER_STEP,
};
