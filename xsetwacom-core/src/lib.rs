//! xsetwacom-core - Area mapping, device control and settings for Wacom
//! tablets on X11.
//!
//! This library holds everything behind the xsetwacom-gui window: the
//! tablet/monitor data model, conversion between physical areas and the
//! normalized anchors edited on screen, the `xsetwacom`/`xrandr` backends,
//! and settings persistence.
//!
//! # Example
//!
//! ```no_run
//! use xsetwacom_core::{config, run_headless, Xrandr, Xsetwacom};
//!
//! let outcome = run_headless(
//!     &config::device_settings_path(),
//!     &Xsetwacom::default(),
//!     &Xrandr::default(),
//! )
//! .unwrap();
//! println!("{:?}", outcome);
//! ```

pub mod config;
pub mod error;
pub mod localisation;
pub mod mapping;
pub mod model;
pub mod service;
pub mod session;
pub mod settings;
pub mod transform;

// Re-exports for convenience
pub use error::{Error, ErrorKind, Result};
pub use localisation::{available_languages, Localisation, Message};
pub use mapping::{References, RegionMapping};
pub use model::{Anchor, Anchors, Area, Corner, Device, DeviceKind, Monitor, Pressure};
pub use service::{DeviceService, DisplayService, Xrandr, Xsetwacom};
pub use session::{
    apply_settings, resolve_startup, run_headless, save_and_apply, HeadlessOutcome, Notice,
    NoticeLevel, Startup,
};
pub use settings::{available_fonts, ApplicationSettings, DeviceSettings, Side, Theme};
pub use transform::{drag_anchor, RegionConstraints};
