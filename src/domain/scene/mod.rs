//! Scene Module - Mock 3D scene composition.
//!
//! Places analysis elements into a fixed layout and describes the
//! placeholder assets a render would produce. No geometry is generated.
//!
//! # Components
//!
//! - `SceneComposition` - Positioned elements, camera rig and lighting
//! - `SceneComposer` - Deterministic layout of characters and props
//! - `GenerationResult` - Synthetic asset references for a composition
//! - `SceneError` - Lookup and render failures

mod composer;
mod composition;
mod errors;
mod generation;

pub use composer::{SceneComposer, CHARACTER_SLOTS, MAX_PROPS};
pub use composition::{
    CameraAngle, ElementKind, Lighting, SceneComposition, SceneElement, Vec3,
};
pub use errors::SceneError;
pub use generation::{
    GenerationResult, RenderSettings, COST_PER_ELEMENT, MODEL_FORMAT, POLYS_PER_ELEMENT,
};
