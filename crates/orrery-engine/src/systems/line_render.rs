use glam::Vec2;

use crate::components::entity::Entity;
use crate::renderer::camera::Camera3D;
use crate::systems::vector::VectorState;

/// Project every entity outline to the screen and tessellate it into `vectors`.
///
/// Outline points are relative to the entity position. An outline with any
/// point behind the camera is skipped whole, since a partial closed loop
/// would draw a chord across the screen.
pub fn build_line_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    camera: &Camera3D,
    vectors: &mut VectorState,
) {
    let mut screen: Vec<Vec2> = Vec::new();
    for entity in entities {
        if !entity.active {
            continue;
        }
        let outline = match &entity.outline {
            Some(o) => o,
            None => continue,
        };

        screen.clear();
        let projected = outline
            .points
            .iter()
            .map(|p| camera.project(entity.pos + *p).map(|proj| proj.pos));
        let mut culled = false;
        for p in projected {
            match p {
                Some(pos) => screen.push(pos),
                None => {
                    culled = true;
                    break;
                }
            }
        }
        if culled {
            continue;
        }

        vectors.stroke_polygon(&screen, outline.width, outline.color);
    }
}
