//! Render Adapters
//!
//! Implementations of the SceneRenderer port.

mod mock_renderer;

pub use mock_renderer::MockSceneRenderer;
