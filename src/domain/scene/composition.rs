//! Scene composition value objects.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SceneId;

/// A point or scale factor in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ORIGIN: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Same factor on all three axes.
    pub const fn uniform(factor: f64) -> Self {
        Self::new(factor, factor, factor)
    }
}

/// Role of an element within the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Character,
    Prop,
}

/// A positioned character or prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub name: String,
    pub description: String,
    pub position: Vec3,
    pub scale: Vec3,
}

/// A camera placement looking at a target point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraAngle {
    pub position: Vec3,
    pub target: Vec3,
}

/// Lighting rig descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    #[serde(rename = "type")]
    pub kind: String,
    pub mood: String,
    pub intensity: f64,
}

/// Concrete spatial arrangement of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneComposition {
    pub scene_id: SceneId,
    pub elements: Vec<SceneElement>,
    pub camera_angles: Vec<CameraAngle>,
    pub lighting: Lighting,
}

impl SceneComposition {
    /// Elements of the given kind, in layout order.
    pub fn elements_of(&self, kind: ElementKind) -> impl Iterator<Item = &SceneElement> {
        self.elements.iter().filter(move |e| e.kind == kind)
    }
}
