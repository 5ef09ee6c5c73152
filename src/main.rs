//! Wavify entry point
//!
//! On the web this only sets up logging; pages call `mount` or build a
//! `WasmWave` themselves. Natively it simulates one second at 60 fps and
//! prints the final frame's path data.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wavify::platform::init_logging();
    log::info!("Wavify ready");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use wavify::{WaveAnimator, WaveConfig};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const WIDTH: f64 = 800.0;
    const HEIGHT: f64 = 200.0;

    env_logger::init();
    log::info!("Wavify (native) starting...");

    let mut animator = match WaveAnimator::new(WaveConfig::default()) {
        Ok(animator) => animator,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut path = animator.frame(0.0, WIDTH, HEIGHT);
    for frame in 1..=60 {
        path = animator.frame(frame as f64 * FRAME_MS, WIDTH, HEIGHT);
    }
    log::info!(
        "Rendered {} frames, step={:.4}",
        animator.frame_count(),
        animator.clock().step()
    );
    println!("{}", path);
}
