//! Browser driver
//!
//! Mounts a wave onto an existing SVG `<path>` element and redraws it every
//! animation frame, sized to its container. Hosts that run their own loop
//! can use [`WasmWave`] directly instead.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::animator::WaveAnimator;
use crate::settings::{ConfigError, WaveConfig};

/// Install the panic hook and console logger. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("Wavify logging initialized");
    }
}

fn config_error(err: ConfigError) -> JsValue {
    log::error!("Wave config rejected: {}", err);
    JsValue::from_str(&err.to_string())
}

fn parse_config(config_json: &str) -> Result<WaveConfig, JsValue> {
    if config_json.trim().is_empty() {
        return Ok(WaveConfig::default());
    }
    WaveConfig::from_json(config_json).map_err(config_error)
}

/// Wave animator driven by a JS-owned loop
#[wasm_bindgen]
pub struct WasmWave {
    animator: WaveAnimator,
}

#[wasm_bindgen]
impl WasmWave {
    /// `config_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmWave, JsValue> {
        let config = parse_config(config_json)?;
        let animator = WaveAnimator::new(config).map_err(config_error)?;
        Ok(Self { animator })
    }

    /// Path data for the frame at host time `now_ms`
    pub fn frame(&mut self, now_ms: f64, width: f64, height: f64) -> String {
        self.animator.frame(now_ms, width, height).to_string()
    }

    pub fn pause(&mut self) {
        self.animator.pause();
    }

    pub fn resume(&mut self) {
        self.animator.resume();
    }

    #[wasm_bindgen(js_name = isPaused)]
    pub fn is_paused(&self) -> bool {
        self.animator.is_paused()
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

struct MountedWave {
    animator: WaveAnimator,
    container: HtmlElement,
    path: Element,
    frame_id: Option<i32>,
}

impl MountedWave {
    fn redraw(&mut self, time: f64) {
        let width = self.container.offset_width() as f64;
        let height = self.container.offset_height() as f64;
        let d = self.animator.frame(time, width, height).to_string();
        if let Err(e) = self.path.set_attribute("d", &d) {
            log::warn!("Failed to update wave path: {:?}", e);
        }
    }
}

/// Control handle for a mounted wave
///
/// The frame callback lives in `callback` and captures both cells, so the
/// mounted wave stays alive while animating. `stop` drops the callback,
/// which releases the animator and the DOM handles.
#[wasm_bindgen]
pub struct WaveHandle {
    inner: Rc<RefCell<MountedWave>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

#[wasm_bindgen]
impl WaveHandle {
    pub fn pause(&self) {
        self.inner.borrow_mut().animator.pause();
    }

    pub fn resume(&self) {
        self.inner.borrow_mut().animator.resume();
    }

    #[wasm_bindgen(js_name = isPaused)]
    pub fn is_paused(&self) -> bool {
        self.inner.borrow().animator.is_paused()
    }

    /// Whether frames are still being scheduled
    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.callback.borrow().is_some()
    }

    /// Cancel the pending frame and release the frame callback
    pub fn stop(&self) {
        let Some(callback) = self.callback.borrow_mut().take() else {
            return;
        };
        let mut mounted = self.inner.borrow_mut();
        if let (Some(id), Some(window)) = (mounted.frame_id.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        log::info!("Wave stopped after {} frames", mounted.animator.frame_count());
        drop(mounted);
        drop(callback);
    }
}

/// Animate the `<path id=path_id>` to fill `<… id=container_id>`.
#[wasm_bindgen]
pub fn mount(container_id: &str, path_id: &str, config_json: &str) -> Result<WaveHandle, JsValue> {
    let config = parse_config(config_json)?;
    let animator = WaveAnimator::new(config).map_err(config_error)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let container: HtmlElement = document
        .get_element_by_id(container_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{}", container_id)))?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an HTML element", container_id)))?;
    let path = document
        .get_element_by_id(path_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{}", path_id)))?;

    log::info!("Mounting wave on #{} -> #{}", container_id, path_id);

    let inner = Rc::new(RefCell::new(MountedWave {
        animator,
        container,
        path,
        frame_id: None,
    }));
    let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

    let closure = {
        let inner = inner.clone();
        let callback = callback.clone();
        Closure::<dyn FnMut(_)>::new(move |time: f64| {
            inner.borrow_mut().redraw(time);
            request_animation_frame(&inner, &callback);
        })
    };
    *callback.borrow_mut() = Some(closure);

    request_animation_frame(&inner, &callback);
    Ok(WaveHandle { inner, callback })
}

fn request_animation_frame(
    wave: &Rc<RefCell<MountedWave>>,
    callback: &Rc<RefCell<Option<FrameCallback>>>,
) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = callback.borrow();
    // Stopped
    let Some(closure) = callback.as_ref() else {
        return;
    };
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => wave.borrow_mut().frame_id = Some(id),
        Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
    }
}
