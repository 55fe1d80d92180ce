//! # fob-svgstore
//!
//! Collects the SVG icons each output bundle imported through the sprite
//! loader, merges them into one hidden sprite sheet, and prepends a small
//! bootstrap script that mounts the sprite into `<body>` at runtime.
//!
//! This crate is host independent: it works on [`ModuleRecord`]s and an
//! [`AssetSink`]. `fob-plugin-svgstore` wires it into Rolldown.
//!
//! ## Example
//!
//! ```no_run
//! use fob_svgstore::{SvgModule, SvgstoreInjector, SvgstoreOptions};
//! use indexmap::IndexMap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let modules = vec![
//!     SvgModule::new("svgstore-mini-loader/index.js!/app/icons/home.svg", "/app/icons/home.svg")
//!         .with_output("main.js"),
//! ];
//!
//! let mut assets = IndexMap::new();
//! assets.insert("main.js".to_string(), "console.log(1);".to_string());
//!
//! let report = SvgstoreInjector::new(SvgstoreOptions::new().with_prefix("icon-"))
//!     .inject(&modules, &mut assets)?;
//! assert_eq!(report.injected, vec!["main.js".to_string()]);
//! # Ok(()) }
//! ```

pub mod assets;
pub mod error;
pub mod injector;
pub mod module;
pub mod options;
pub mod payload;
pub mod requirements;
pub mod sprite;

#[cfg(feature = "logging")]
pub mod logging;

pub use assets::AssetSink;
pub use error::{Result, SvgstoreError};
pub use injector::{EmitReport, SvgstoreInjector, compute_injections};
pub use module::{LOADER_MARKER, ModuleRecord, SvgModule, is_script_output, is_sprite_request};
pub use options::SvgstoreOptions;
pub use payload::bootstrap_snippet;
pub use requirements::{
    GroupedRequirements, SvgRequirement, collect_requirements, group_by_output, group_for_target,
};
pub use sprite::{SpriteIcon, SpriteMerge, SymbolSprite, icon_id};
