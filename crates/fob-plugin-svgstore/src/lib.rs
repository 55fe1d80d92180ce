//! Rolldown plugin that injects SVG sprite sheets into output chunks
//!
//! Icons imported through the sprite loader end up as modules whose id carries
//! the loader marker. Once Rolldown has rendered every chunk, this plugin
//! collects those icons per chunk, merges them into a hidden sprite sheet and
//! prepends a bootstrap script that mounts the sheet into `<body>`.
//!
//! ## Architecture
//!
//! ```text
//! generate_bundle → chunk module ids → fob-svgstore grouping → sprite payload
//!                                                                   ↓
//!                                             prepend to chunk / emit `fileName` asset
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fob_plugin_svgstore::FobSvgstorePlugin;
//! use fob_svgstore::SvgstoreOptions;
//! use std::sync::Arc;
//!
//! // Use with your Rolldown bundler configuration
//! let plugin = Arc::new(FobSvgstorePlugin::with_options(
//!     SvgstoreOptions::new().with_prefix("icon-"),
//! ));
//! ```

use anyhow::Context;
use fob_svgstore::{EmitReport, SpriteMerge, SvgstoreInjector, SvgstoreOptions};
use rolldown_common::{LogWithoutPlugin, Output};
use rolldown_plugin::{HookGenerateBundleArgs, HookNoopReturn, HookUsage, Plugin, PluginContext};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

mod bundle;

pub use bundle::{BundleAssets, bundle_modules, output_file_name, resolved_path};

const PLUGIN_NAME: &str = "fob-svgstore";

/// Rolldown plugin that prepends SVG sprite sheets to the chunks using them
#[derive(Debug, Clone, Default)]
pub struct FobSvgstorePlugin {
    injector: SvgstoreInjector,
}

impl FobSvgstorePlugin {
    /// Create a plugin with default options
    ///
    /// # Example
    ///
    /// ```rust
    /// use fob_plugin_svgstore::FobSvgstorePlugin;
    ///
    /// let plugin = FobSvgstorePlugin::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SvgstoreOptions) -> Self {
        Self {
            injector: SvgstoreInjector::new(options),
        }
    }

    /// Create a plugin from the `config` value of a plugin entry
    ///
    /// Unknown keys are ignored and invalid values fall back to defaults.
    pub fn from_config(config: &Value) -> Self {
        Self::with_options(SvgstoreOptions::from_value(config))
    }

    /// Use a different sprite serializer
    pub fn with_merger(mut self, merger: Arc<dyn SpriteMerge>) -> Self {
        self.injector = self.injector.with_merger(merger);
        self
    }

    pub fn options(&self) -> &SvgstoreOptions {
        self.injector.options()
    }

    /// Inject sprites into a finished bundle
    ///
    /// Missing target assets are returned in the report; read failures abort.
    pub fn process_bundle(&self, bundle: &mut Vec<Output>) -> fob_svgstore::Result<EmitReport> {
        let modules = bundle_modules(bundle);
        debug!(
            "[fob-svgstore] Scanning {} modules across {} outputs",
            modules.len(),
            bundle.len()
        );

        let mut assets = BundleAssets::new(bundle);
        self.injector.inject(&modules, &mut assets)
    }
}

impl Plugin for FobSvgstorePlugin {
    fn name(&self) -> Cow<'static, str> {
        PLUGIN_NAME.into()
    }

    fn register_hook_usage(&self) -> HookUsage {
        HookUsage::GenerateBundle
    }

    /// Runs once per build after every chunk has been rendered
    fn generate_bundle(
        &self,
        ctx: &PluginContext,
        args: &mut HookGenerateBundleArgs<'_>,
    ) -> impl std::future::Future<Output = HookNoopReturn> + Send {
        let outcome = self.process_bundle(args.bundle).map(|report| {
            for err in &report.errors {
                ctx.warn(LogWithoutPlugin {
                    message: format!("{PLUGIN_NAME}: {err}"),
                    ..Default::default()
                });
            }
            report
        });

        async move {
            outcome.context("Failed to inject SVG sprites")?;
            Ok(())
        }
    }
}
