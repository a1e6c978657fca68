//! Scene command and query handlers.

mod generate_scene;
mod get_scene;

pub use generate_scene::{GenerateSceneCommand, GenerateSceneHandler, GenerateSceneResult};
pub use get_scene::{GetSceneHandler, GetSceneQuery};
