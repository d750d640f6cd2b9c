//! Window manager for a retro desktop shell
//!
//! This crate provides the state behind a browser-hosted 98-style desktop:
//! - Floating windows that can be dragged, resized from eight handles,
//!   maximized and restored
//! - Stacking order, focus and minimize, surfaced through a taskbar view
//! - Desktop icons that open windows or log out
//! - A login session persisted under a single storage key
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`)
//! - [`window`]: Per-window geometry and gesture state machine
//! - [`host`]: Open set, z-order, focus and taskbar entries
//! - [`input`]: Pointer results and capture
//! - [`session`]: Username persistence behind a storage trait
//! - [`desktop`]: Desktop icons
//! - [`config`]: Tunables and frame metrics
//!
//! ## Example
//!
//! ```rust
//! use retro_desktop::{DesktopConfig, DesktopEngine, MemoryStore, Vec2, WindowDescriptor, WindowId};
//!
//! let mut engine = DesktopEngine::new(DesktopConfig::default(), MemoryStore::new());
//! engine.register(
//!     WindowDescriptor::new("notepad", "Notepad")
//!         .at(100.0, 100.0)
//!         .sized(300.0, 200.0),
//! );
//!
//! let id = WindowId::from("notepad");
//! engine.open_window(&id).unwrap();
//!
//! // Drag by the title bar
//! engine.pointer_down(Vec2::new(150.0, 110.0));
//! engine.pointer_move(Vec2::new(250.0, 160.0));
//! engine.pointer_up();
//!
//! assert_eq!(engine.window(&id).unwrap().position(), Vec2::new(200.0, 150.0));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **One Owner Per Fact**: Windows own geometry, the host owns order and focus
//! 3. **Minimal Dependencies**: Core types have no browser dependencies

pub mod config;
pub mod desktop;
pub mod error;
pub mod host;
pub mod input;
pub mod math;
pub mod session;
pub mod window;

mod engine;
mod types;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use config::{DesktopConfig, FrameStyle, FRAME_STYLE, TASKBAR_HEIGHT};
pub use desktop::{DesktopIcon, IconAction};
pub use error::{DesktopError, DesktopResult};
pub use host::{TaskbarEntry, WindowHost};
pub use input::{InputResult, PointerCapture};
pub use math::{Rect, Size, Vec2};
pub use session::{MemoryStore, Session, SessionStore};
pub use types::WindowId;
pub use window::{
    ResizeEdge, Window, WindowDescriptor, WindowEvent, WindowMode, WindowRegion, WorkArea,
};

pub use engine::{DesktopEngine, WindowSnapshot};
