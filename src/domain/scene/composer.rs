//! SceneComposer - deterministic layout of an analysis.

use crate::domain::analysis::StoryAnalysis;
use crate::domain::foundation::SceneId;

use super::{CameraAngle, ElementKind, Lighting, SceneComposition, SceneElement, Vec3};

/// Preset character positions; characters beyond these are dropped.
pub const CHARACTER_SLOTS: [Vec3; 3] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(3.0, 0.0, 2.0),
    Vec3::new(-2.0, 0.0, 1.0),
];

/// Props beyond this count are dropped.
pub const MAX_PROPS: usize = 5;

const CHARACTER_SCALE: Vec3 = Vec3::uniform(1.0);
const PROP_SCALE: Vec3 = Vec3::uniform(0.5);

/// Lays out analysis elements into a composition.
pub struct SceneComposer;

impl SceneComposer {
    /// Builds the composition for `analysis` under `scene_id`.
    ///
    /// # Layout
    /// - Characters: first three, at `CHARACTER_SLOTS`.
    /// - Props: first five, at `x = i * 1.5 - 3, y = 0, z = (i mod 2) * 2`.
    /// - Two fixed cameras aimed at the origin.
    /// - Three-point lighting carrying the analysis mood verbatim.
    pub fn compose(scene_id: SceneId, analysis: &StoryAnalysis) -> SceneComposition {
        let characters = analysis
            .characters
            .iter()
            .zip(CHARACTER_SLOTS)
            .map(|(name, position)| SceneElement {
                kind: ElementKind::Character,
                name: name.clone(),
                description: format!("Main character: {}", name),
                position,
                scale: CHARACTER_SCALE,
            });

        let props = analysis
            .objects
            .iter()
            .take(MAX_PROPS)
            .enumerate()
            .map(|(i, name)| SceneElement {
                kind: ElementKind::Prop,
                name: name.clone(),
                description: format!("Interactive object: {}", name),
                position: prop_position(i),
                scale: PROP_SCALE,
            });

        SceneComposition {
            scene_id,
            elements: characters.chain(props).collect(),
            camera_angles: camera_rig(),
            lighting: Lighting {
                kind: "three_point".to_string(),
                mood: analysis.mood.clone(),
                intensity: 1.0,
            },
        }
    }
}

fn prop_position(index: usize) -> Vec3 {
    Vec3::new(index as f64 * 1.5 - 3.0, 0.0, (index % 2) as f64 * 2.0)
}

fn camera_rig() -> Vec<CameraAngle> {
    vec![
        CameraAngle {
            position: Vec3::new(0.0, -5.0, 3.0),
            target: Vec3::ORIGIN,
        },
        CameraAngle {
            position: Vec3::new(5.0, 0.0, 2.0),
            target: Vec3::ORIGIN,
        },
    ]
}
