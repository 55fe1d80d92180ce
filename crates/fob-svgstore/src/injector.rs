//! Sprite injection for one emit pass
//!
//! ## Architecture
//!
//! ```text
//! modules → group requirements → read SVGs → SpriteMerge → bootstrap snippet
//!                                                               ↓
//!                                     existing asset: prepend │ fileName: create │ else: error
//! ```
//!
//! Missing target assets are collected in the [`EmitReport`] and do not stop
//! the remaining outputs. Read and serialization failures abort the pass.

use indexmap::IndexMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::assets::AssetSink;
use crate::error::{Result, SvgstoreError};
use crate::module::ModuleRecord;
use crate::options::SvgstoreOptions;
use crate::payload::bootstrap_snippet;
use crate::requirements::{GroupedRequirements, collect_requirements, group_by_output, group_for_target};
use crate::sprite::{SpriteIcon, SpriteMerge, SymbolSprite, icon_id};

/// Outcome of a successful emit pass
#[derive(Debug, Default)]
pub struct EmitReport {
    /// Existing assets that received a payload
    pub injected: Vec<String>,
    /// Assets created to hold a payload
    pub created: Vec<String>,
    /// Outputs that could not be updated
    pub errors: Vec<SvgstoreError>,
}

impl EmitReport {
    pub fn is_empty(&self) -> bool {
        self.injected.is_empty() && self.created.is_empty() && self.errors.is_empty()
    }
}

/// Builds sprite payloads and merges them into build assets
#[derive(Debug, Clone)]
pub struct SvgstoreInjector {
    options: SvgstoreOptions,
    merger: Arc<dyn SpriteMerge>,
}

impl SvgstoreInjector {
    pub fn new(options: SvgstoreOptions) -> Self {
        Self {
            options,
            merger: Arc::new(SymbolSprite::default()),
        }
    }

    /// Replace the default `<symbol>` serializer
    pub fn with_merger(mut self, merger: Arc<dyn SpriteMerge>) -> Self {
        self.merger = merger;
        self
    }

    pub fn options(&self) -> &SvgstoreOptions {
        &self.options
    }

    /// Work out which SVGs go into which output
    pub fn group<'a, M, I>(&self, modules: I) -> GroupedRequirements
    where
        M: ModuleRecord + ?Sized + 'a,
        I: IntoIterator<Item = &'a M>,
    {
        match &self.options.file_name {
            Some(file_name) => group_for_target(modules, file_name),
            None => group_by_output(&collect_requirements(modules)),
        }
    }

    /// Build the full payload for one group of SVG files
    pub fn payload<'a, I>(&self, svg_file_paths: I) -> Result<String>
    where
        I: IntoIterator<Item = &'a PathBuf>,
    {
        let icons = svg_file_paths
            .into_iter()
            .map(|path| {
                let content = std::fs::read_to_string(path)
                    .map_err(|source| SvgstoreError::read_svg(path, source))?;
                Ok(SpriteIcon::new(icon_id(&self.options.prefix, path), content))
            })
            .collect::<Result<Vec<_>>>()?;

        let sprite = self.merger.merge(&icons)?;
        bootstrap_snippet(&sprite)
    }

    /// Run one emit pass against `assets`
    pub fn inject<'a, M, I, A>(&self, modules: I, assets: &mut A) -> Result<EmitReport>
    where
        M: ModuleRecord + ?Sized + 'a,
        I: IntoIterator<Item = &'a M>,
        A: AssetSink + ?Sized,
    {
        let grouped = self.group(modules);
        let mut report = EmitReport::default();

        for (file_name, svg_file_paths) in &grouped {
            debug!(
                "[fob-svgstore] Building sprite for {} ({} icons)",
                file_name,
                svg_file_paths.len()
            );

            let payload = self.payload(svg_file_paths)?;

            if assets.has_asset(file_name) {
                assets.prepend(file_name, &payload);
                info!("[fob-svgstore] Injected sprite into {}", file_name);
                report.injected.push(file_name.clone());
            } else if self.options.file_name.as_deref() == Some(file_name.as_str()) {
                assets.create(file_name, payload);
                info!("[fob-svgstore] Created sprite asset {}", file_name);
                report.created.push(file_name.clone());
            } else {
                let err = SvgstoreError::asset_not_found(file_name.as_str());
                error!("[fob-svgstore] {}", err);
                report.errors.push(err);
            }
        }

        Ok(report)
    }
}

impl Default for SvgstoreInjector {
    fn default() -> Self {
        Self::new(SvgstoreOptions::default())
    }
}

/// Pure form of an emit pass over an in-memory asset map
///
/// Returns the updated assets and the recoverable errors.
///
/// # Example
///
/// ```
/// use fob_svgstore::{SvgModule, SvgstoreOptions, compute_injections};
/// use indexmap::IndexMap;
///
/// let modules = vec![SvgModule::new("/app/main.js", "/app/main.js").with_output("main.js")];
/// let mut assets = IndexMap::new();
/// assets.insert("main.js".to_string(), "X".to_string());
///
/// let (assets, errors) = compute_injections(&modules, assets, &SvgstoreOptions::default()).unwrap();
/// assert_eq!(assets["main.js"], "X");
/// assert!(errors.is_empty());
/// ```
pub fn compute_injections<'a, M, I>(
    modules: I,
    mut assets: IndexMap<String, String>,
    options: &SvgstoreOptions,
) -> Result<(IndexMap<String, String>, Vec<SvgstoreError>)>
where
    M: ModuleRecord + ?Sized + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let report = SvgstoreInjector::new(options.clone()).inject(modules, &mut assets)?;
    Ok((assets, report.errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::SvgModule;
    use std::fs;
    use tempfile::TempDir;

    const LOADER: &str = "/app/node_modules/svgstore-mini-loader/index.js!";

    fn write_icon(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, format!(r#"<svg viewBox="0 0 8 8"><g id="{name}"/></svg>"#)).unwrap();
        path
    }

    fn icon_module(path: &PathBuf) -> SvgModule {
        SvgModule::new(format!("{LOADER}{}", path.display()), path.clone())
    }

    #[test]
    fn payload_uses_prefixed_ids() {
        let dir = TempDir::new().unwrap();
        let a = write_icon(&dir, "a.svg");

        let injector = SvgstoreInjector::new(SvgstoreOptions::new().with_prefix("ico-"));
        let payload = injector.payload([&a]).unwrap();

        assert!(payload.contains(r#"<symbol id=\"ico-a\" viewBox=\"0 0 8 8\">"#));
    }

    #[test]
    fn missing_svg_aborts() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.svg");
        let modules = vec![icon_module(&missing).with_output("main.js")];

        let mut assets = IndexMap::new();
        assets.insert("main.js".to_string(), "X".to_string());

        let err = SvgstoreInjector::default()
            .inject(&modules, &mut assets)
            .unwrap_err();
        assert!(matches!(err, SvgstoreError::ReadSvg { .. }));
        assert_eq!(assets["main.js"], "X");
    }

    #[test]
    fn report_lists_outcomes() {
        let dir = TempDir::new().unwrap();
        let a = write_icon(&dir, "a.svg");
        let modules = vec![
            icon_module(&a).with_output("main.js"),
            icon_module(&a).with_output("missing.js"),
        ];

        let mut assets = IndexMap::new();
        assets.insert("main.js".to_string(), "X".to_string());

        let report = SvgstoreInjector::default()
            .inject(&modules, &mut assets)
            .unwrap();
        assert_eq!(report.injected, vec!["main.js".to_string()]);
        assert!(report.created.is_empty());
        assert_eq!(report.errors.len(), 1);
        assert!(!report.is_empty());
    }

    #[derive(Debug)]
    struct NamesOnly;

    impl SpriteMerge for NamesOnly {
        fn merge(&self, icons: &[SpriteIcon]) -> Result<String> {
            Ok(icons
                .iter()
                .map(|icon| icon.id.as_str())
                .collect::<Vec<_>>()
                .join(","))
        }
    }

    #[test]
    fn custom_merger() {
        let dir = TempDir::new().unwrap();
        let b = write_icon(&dir, "b.svg");
        let a = write_icon(&dir, "a.svg");

        let injector = SvgstoreInjector::default().with_merger(Arc::new(NamesOnly));
        let payload = injector.payload([&b, &a]).unwrap();
        assert!(payload.contains(r#"("afterbegin","b,a")"#));
    }
}
