//! Browser bindings
//!
//! [`WasmDesktop`] wraps a [`DesktopEngine`] for the host page. Views cross
//! the boundary as JSON strings; the page parses them and renders.

use wasm_bindgen::prelude::*;

use crate::config::DesktopConfig;
use crate::desktop::DesktopIcon;
use crate::engine::DesktopEngine;
use crate::error::{DesktopError, DesktopResult};
use crate::input::InputResult;
use crate::math::Vec2;
use crate::session::SessionStore;
use crate::types::WindowId;
use crate::window::WindowDescriptor;

fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

fn to_js(err: DesktopError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js(e.into()))
}

/// `window.localStorage` as a session store
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> DesktopResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| DesktopError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|_| DesktopError::Storage("localStorage access denied".to_string()))?
            .ok_or_else(|| DesktopError::Storage("localStorage unavailable".to_string()))
    }
}

impl SessionStore for LocalStorageStore {
    fn load(&self, key: &str) -> DesktopResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| DesktopError::Storage(format!("failed to read {}", key)))
    }

    fn save(&self, key: &str, value: &str) -> DesktopResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| DesktopError::Storage(format!("failed to write {}", key)))
    }

    fn remove(&self, key: &str) -> DesktopResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| DesktopError::Storage(format!("failed to remove {}", key)))
    }
}

/// The desktop as seen from JavaScript
#[wasm_bindgen]
pub struct WasmDesktop {
    engine: DesktopEngine,
}

#[wasm_bindgen]
impl WasmDesktop {
    /// Create a desktop for a viewport of `width` x `height`.
    ///
    /// `config_json` may be empty; otherwise it is a partial
    /// `DesktopConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, config_json: &str) -> Result<WasmDesktop, JsValue> {
        let config = if config_json.trim().is_empty() {
            DesktopConfig::default()
        } else {
            DesktopConfig::from_json(config_json).map_err(to_js)?
        };
        let engine = DesktopEngine::new(config.with_viewport(width, height), LocalStorageStore);
        log(&format!("[desktop] ready at {}x{}", width, height));
        Ok(Self { engine })
    }

    /// Register a JSON array of window descriptors
    #[wasm_bindgen]
    pub fn register_windows(&mut self, catalog_json: &str) -> Result<usize, JsValue> {
        self.engine.register_json(catalog_json).map_err(to_js)
    }

    /// Register a single window descriptor given as JSON
    #[wasm_bindgen]
    pub fn register_window(&mut self, descriptor_json: &str) -> Result<(), JsValue> {
        let descriptor: WindowDescriptor = serde_json::from_str(descriptor_json)
            .map_err(|e| to_js(e.into()))?;
        self.engine.register(descriptor);
        Ok(())
    }

    /// Place a desktop icon given as JSON
    #[wasm_bindgen]
    pub fn add_icon(&mut self, icon_json: &str) -> Result<(), JsValue> {
        let icon: DesktopIcon =
            serde_json::from_str(icon_json).map_err(|e| to_js(e.into()))?;
        self.engine.add_icon(icon);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn activate_icon(&mut self, icon_id: &str) -> Result<(), JsValue> {
        self.engine.activate_icon(icon_id).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn open(&mut self, id: &str) -> Result<(), JsValue> {
        self.engine.open_window(&WindowId::from(id)).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn close(&mut self, id: &str) {
        self.engine.close_window(&WindowId::from(id));
    }

    #[wasm_bindgen]
    pub fn activate(&mut self, id: &str) {
        self.engine.activate_window(&WindowId::from(id));
    }

    #[wasm_bindgen]
    pub fn minimize(&mut self, id: &str) {
        self.engine.minimize_window(&WindowId::from(id));
    }

    #[wasm_bindgen]
    pub fn toggle_maximize(&mut self, id: &str) {
        self.engine.toggle_maximize(&WindowId::from(id));
    }

    #[wasm_bindgen]
    pub fn taskbar_click(&mut self, id: &str) {
        self.engine.taskbar_click(&WindowId::from(id));
    }

    #[wasm_bindgen]
    pub fn toggle_start_menu(&mut self) {
        self.engine.toggle_start_menu();
    }

    #[wasm_bindgen]
    pub fn close_start_menu(&mut self) {
        self.engine.close_start_menu();
    }

    #[wasm_bindgen]
    pub fn is_start_menu_open(&self) -> bool {
        self.engine.is_start_menu_open()
    }

    // =========================================================================
    // Pointer input; each returns an InputResult as JSON
    // =========================================================================

    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Result<String, JsValue> {
        let result = self.engine.pointer_down(Vec2::new(x, y));
        json(&result)
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Result<String, JsValue> {
        let result = self.engine.pointer_move(Vec2::new(x, y));
        json(&result)
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> Result<String, JsValue> {
        let result = self.engine.pointer_up();
        json(&result)
    }

    #[wasm_bindgen]
    pub fn double_click(&mut self, x: f32, y: f32) -> Result<String, JsValue> {
        let result: InputResult = self.engine.double_click(Vec2::new(x, y));
        json(&result)
    }

    #[wasm_bindgen]
    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }

    #[wasm_bindgen]
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        self.engine.resize_viewport(width, height);
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Open windows bottom to top, as JSON
    #[wasm_bindgen]
    pub fn windows_json(&self) -> Result<String, JsValue> {
        json(&self.engine.snapshots())
    }

    #[wasm_bindgen]
    pub fn taskbar_json(&self) -> Result<String, JsValue> {
        json(&self.engine.taskbar())
    }

    #[wasm_bindgen]
    pub fn icons_json(&self) -> Result<String, JsValue> {
        json(self.engine.icons())
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Resume a stored login; returns whether one was found
    #[wasm_bindgen]
    pub fn restore_session(&mut self) -> Result<bool, JsValue> {
        self.engine.restore_session().map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn login(&mut self, username: &str) -> Result<(), JsValue> {
        self.engine.login(username).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn logout(&mut self) -> Result<(), JsValue> {
        self.engine.logout().map_err(to_js)?;
        log("[desktop] logged out");
        Ok(())
    }

    #[wasm_bindgen]
    pub fn username(&self) -> Option<String> {
        self.engine.username().map(str::to_string)
    }
}
