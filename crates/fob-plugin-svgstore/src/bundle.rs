//! Views over a Rolldown bundle
//!
//! Rolldown hands the `generate_bundle` hook the finished outputs. Module
//! records are recovered from each chunk's module ids, and the output list
//! itself serves as the asset sink.

use fob_svgstore::{AssetSink, SvgModule};
use indexmap::IndexMap;
use rolldown_common::{Output, OutputAsset, StrOrBytes};
use std::path::PathBuf;
use std::sync::Arc;

/// File name of a bundle output
pub fn output_file_name(output: &Output) -> &str {
    match output {
        Output::Chunk(chunk) => chunk.filename.as_str(),
        Output::Asset(asset) => asset.filename.as_str(),
    }
}

/// Resolved file behind a module id
///
/// Loader chains put the file after the last `!`; queries and the virtual
/// module prefix are dropped.
pub fn resolved_path(module_id: &str) -> PathBuf {
    let resource = module_id.rsplit('!').next().unwrap_or(module_id);
    let resource = resource.trim_start_matches('\0');
    let resource = resource.split('?').next().unwrap_or(resource);
    PathBuf::from(resource)
}

/// Module records for every module in the bundle's chunks
///
/// A module split across several chunks yields one record listing all of
/// their file names. Records keep the order modules were first seen in.
pub fn bundle_modules(bundle: &[Output]) -> Vec<SvgModule> {
    let mut modules: IndexMap<String, SvgModule> = IndexMap::new();

    for output in bundle {
        let Output::Chunk(chunk) = output else {
            continue;
        };

        for module_id in &chunk.module_ids {
            let request = module_id.to_string();
            let module = modules
                .entry(request.clone())
                .or_insert_with(|| SvgModule::new(request.as_str(), resolved_path(&request)));

            let file_name = chunk.filename.to_string();
            if !module.output_files.contains(&file_name) {
                module.output_files.push(file_name);
            }
        }
    }

    modules.into_values().collect()
}

/// Asset sink over the outputs passed to `generate_bundle`
pub struct BundleAssets<'a> {
    bundle: &'a mut Vec<Output>,
}

impl<'a> BundleAssets<'a> {
    pub fn new(bundle: &'a mut Vec<Output>) -> Self {
        Self { bundle }
    }
}

impl AssetSink for BundleAssets<'_> {
    fn has_asset(&self, file_name: &str) -> bool {
        self.bundle
            .iter()
            .any(|output| output_file_name(output) == file_name)
    }

    fn prepend(&mut self, file_name: &str, payload: &str) {
        let Some(output) = self
            .bundle
            .iter_mut()
            .find(|output| output_file_name(output) == file_name)
        else {
            return;
        };

        match output {
            Output::Chunk(chunk) => Arc::make_mut(chunk).code.insert_str(0, payload),
            Output::Asset(asset) => match &mut Arc::make_mut(asset).source {
                StrOrBytes::Str(source) => source.insert_str(0, payload),
                StrOrBytes::Bytes(source) => {
                    source.splice(0..0, payload.bytes());
                }
            },
        }
    }

    fn create(&mut self, file_name: &str, payload: String) {
        self.bundle.push(Output::Asset(Arc::new(OutputAsset {
            names: vec![],
            original_file_names: vec![],
            filename: file_name.to_string().into(),
            source: payload.into(),
        })));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_path_strips_loader_chain() {
        assert_eq!(
            resolved_path("/app/node_modules/svgstore-mini-loader/index.js!/app/icons/a.svg"),
            PathBuf::from("/app/icons/a.svg")
        );
        assert_eq!(
            resolved_path("a!b!/icons/b.svg?inline"),
            PathBuf::from("/icons/b.svg")
        );
        assert_eq!(resolved_path("/icons/c.svg"), PathBuf::from("/icons/c.svg"));
        assert_eq!(resolved_path("\0loader!\0/icons/d.svg"), PathBuf::from("/icons/d.svg"));
    }

    #[test]
    fn created_asset_is_found() {
        let mut bundle = Vec::new();
        let mut assets = BundleAssets::new(&mut bundle);
        assert!(!assets.has_asset("sprite.js"));

        assets.create("sprite.js", "P".to_string());
        assert!(assets.has_asset("sprite.js"));

        assets.prepend("sprite.js", "Q");
        match &bundle[0] {
            Output::Asset(asset) => match &asset.source {
                StrOrBytes::Str(source) => assert_eq!(source, "QP"),
                StrOrBytes::Bytes(_) => panic!("expected string source"),
            },
            Output::Chunk(_) => panic!("expected asset"),
        }
    }
}
