//! Thumbnail Cam demo
//!
//! Simulates an avatar upload in an in-memory scene: the upload camera
//! appears after a few frames, the operator moves the sliders, and the
//! session keeps the camera framed on the thumbnail plane.

use thumbnail_cam::glam::Vec3;
use thumbnail_cam::thumbcam::{Result, Runtime};
use thumbnail_cam::thumbcam::log::LogSeverity;
use thumbnail_cam::thumbcam::framing::{CameraIntrinsics, FramingParams, PlaneExtents};
use thumbnail_cam::thumbcam::session::{
    AlignSession, MemorySceneHost, SessionConfig, TickOutcome, DEFAULT_CAMERA_PATH,
};

const SOURCE: &str = "thumbcam::Demo";

/// Slider positions per frame, applied before the tick.
fn slider_script(frame: u32) -> Option<(f32, f32, f32)> {
    match frame {
        6 => Some((25.0, 0.0, 0.0)),
        8 => Some((25.0, 60.0, 0.0)),
        10 => Some((50.0, 60.0, -100.0)),
        12 => Some((99.0, -100.0, 100.0)),
        _ => None,
    }
}

fn main() -> Result<()> {
    Runtime::initialize()?;
    Runtime::create_target_registry()?;

    let mut host = MemorySceneHost::new();
    // Built-in 10x10 plane scaled to hold a 16:9 picture
    let plane = host.add_surface(PlaneExtents::from_mesh_bounds(
        Vec3::new(0.32, 1.0, 0.18),
        Vec3::new(5.0, 0.0, 5.0),
    ));

    let mut session = AlignSession::with_runtime_registry("Thumbnail Plane", plane, SessionConfig::default())?;
    session.start(&host)?;

    for frame in 0..15 {
        if frame == 3 {
            host.add_camera(DEFAULT_CAMERA_PATH, CameraIntrinsics::new(60.0)?);
            Runtime::log(LogSeverity::Info, SOURCE, format!("frame {}: upload camera spawned", frame));
        }
        if let Some((zoom, shift_v, shift_h)) = slider_script(frame) {
            session.set_params(FramingParams::new(zoom, shift_v, shift_h)?);
        }

        match session.tick(&mut host) {
            Ok(TickOutcome::Applied(placement)) => Runtime::log(
                LogSeverity::Info,
                SOURCE,
                format!(
                    "frame {}: zoom {:>4} shift ({:>5}, {:>5}) -> offset ({:.4}, {:.4}, {:.4}) clip [{:.4}, {:.4}]",
                    frame,
                    session.params().zoom_in(),
                    session.params().shift_vertical(),
                    session.params().shift_horizontal(),
                    placement.translation_offset.x,
                    placement.translation_offset.y,
                    placement.translation_offset.z,
                    placement.near_clip,
                    placement.far_clip,
                ),
            ),
            Ok(outcome) => Runtime::log(LogSeverity::Debug, SOURCE, format!("frame {}: {:?}", frame, outcome)),
            Err(error) if error.is_transient() => {
                Runtime::log(LogSeverity::Warn, SOURCE, format!("frame {}: {}", frame, error))
            }
            Err(error) => return Err(error),
        }
    }

    session.teardown()?;
    drop(session);
    Runtime::shutdown();
    Ok(())
}
