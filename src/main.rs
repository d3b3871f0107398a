//! ndrender - headless N-dimensional shape animator
//!
//! Builds the configured shape, spins it through the rotation schedule and
//! produces renderer-ready buffers every frame. No window is opened; frame
//! statistics are logged instead.

use std::time::Duration;

use ndrender::config::AppConfig;
use ndrender::systems::AnimationSystem;

fn main() {
    // Load configuration before logging so the configured level applies
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting ndrender");

    let preset = match config.preset() {
        Ok(preset) => preset,
        Err(e) => {
            log::error!("Failed to load preset: {}", e);
            std::process::exit(1);
        }
    };

    let mut session = match preset.create_session() {
        Ok(session) => session,
        Err(e) => {
            log::error!("Failed to build '{}': {}", preset.name, e);
            std::process::exit(1);
        }
    };

    let shape = session.shape();
    log::info!(
        "{}D {}: {} vertices, {} faces, projection constant {}",
        shape.dimensions(),
        shape.name(),
        shape.vertex_count(),
        shape.face_count(),
        shape.projection_constant()
    );

    let interval = Duration::from_millis(config.animation.frame_interval_ms);
    let mut animation = AnimationSystem::new();
    let mut skipped = 0u64;
    let mut uploaded = 0usize;

    for frame in 0..config.animation.frames {
        std::thread::sleep(interval);
        match animation.tick(&mut session) {
            Ok(result) => {
                uploaded += result.upload_bytes;
                log::trace!(
                    "Frame {}: dt {:.4}s, {} triangles",
                    frame,
                    result.dt,
                    result.triangle_count
                );
            }
            Err(e) => {
                // The previous frame's buffers stay valid; skip this one
                skipped += 1;
                log::warn!("Skipping frame {}: {}", frame, e);
            }
        }
    }

    log::info!(
        "Rendered {} frames over {:.2}s ({} skipped, {} KiB produced)",
        session.frames(),
        session.elapsed(),
        skipped,
        uploaded / 1024
    );
}
