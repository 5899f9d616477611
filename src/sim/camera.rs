//! Vertical camera scroll

use crate::config::CameraConfig;

/// Scroll offset that keeps the vehicle centered, clamped so the view never
/// runs more than `overscan` past the crest or the base.
///
/// Single-screen variants (`camera == None`) never scroll.
pub fn camera_offset(vehicle_y: f32, world_height: f32, camera: Option<&CameraConfig>) -> f32 {
    let Some(camera) = camera else {
        return 0.0;
    };
    let lo = -camera.overscan;
    let hi = world_height - camera.viewport_height + camera.overscan;
    // max/min rather than clamp: clamp panics if a bad config inverts the range
    (vehicle_y - camera.viewport_height / 2.0).max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WORLD_HEIGHT: f32 = 4000.0;

    fn camera() -> CameraConfig {
        CameraConfig::default()
    }

    #[test]
    fn test_centers_vehicle_mid_world() {
        assert_eq!(camera_offset(2000.0, WORLD_HEIGHT, Some(&camera())), 1700.0);
    }

    #[test]
    fn test_clamps_at_crest_and_base() {
        assert_eq!(camera_offset(0.0, WORLD_HEIGHT, Some(&camera())), -50.0);
        assert_eq!(camera_offset(WORLD_HEIGHT, WORLD_HEIGHT, Some(&camera())), 3450.0);
    }

    #[test]
    fn test_no_camera_never_scrolls() {
        assert_eq!(camera_offset(123.0, 600.0, None), 0.0);
    }

    proptest! {
        #[test]
        fn prop_offset_within_scroll_range(y in 0.0f32..=WORLD_HEIGHT) {
            let cam = camera();
            let offset = camera_offset(y, WORLD_HEIGHT, Some(&cam));
            prop_assert!(offset >= -cam.overscan);
            prop_assert!(offset <= WORLD_HEIGHT - cam.viewport_height + cam.overscan);
        }
    }
}
