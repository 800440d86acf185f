use crate::fan::RayFan;
use crate::geometry::{distance, point_on_segment, segments_intersect};
use crate::wall::WallSet;

/// Clip every ray of the fan against every wall edge.
///
/// Each ray is first stretched back to its full length along its current
/// direction, then shortened to the nearest crossing. The candidate segment
/// is re-read after every accepted hit, so the ray only ever shrinks and
/// the result does not depend on wall order.
pub fn raycast(fan: &mut RayFan, walls: &WallSet) {
    let origin = fan.origin();

    for ray in &mut fan.rays {
        ray.refresh_direction(origin);
        ray.reset(origin);

        for edge in walls.segments() {
            // Origin sitting on the wall would clip the ray to nothing
            if point_on_segment(origin, &edge) {
                continue;
            }

            if let Some(hit) = segments_intersect(&ray.segment(origin), &edge) {
                if distance(origin, hit) < distance(origin, ray.endpoint) {
                    ray.endpoint = hit;
                }
            }
        }
    }
}
