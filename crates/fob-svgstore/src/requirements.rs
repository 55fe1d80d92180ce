//! Grouping of SVG requirements by the output that needs them
//!
//! ```text
//! modules → marker filter → (svg, output) pairs → dedup → group by output
//! ```
//!
//! Every stage keeps first-seen order so the icons of a sprite always come out
//! in the order the bundler listed the modules.

use indexmap::{IndexMap, IndexSet};
use std::path::PathBuf;

use crate::module::{ModuleRecord, is_script_output, is_sprite_request};

/// One SVG needed by one output file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SvgRequirement {
    pub svg_file_path: PathBuf,
    pub output_file_name: String,
}

impl SvgRequirement {
    pub fn new(svg_file_path: impl Into<PathBuf>, output_file_name: impl Into<String>) -> Self {
        Self {
            svg_file_path: svg_file_path.into(),
            output_file_name: output_file_name.into(),
        }
    }
}

/// Output file name → distinct SVG paths, both in first-seen order
pub type GroupedRequirements = IndexMap<String, IndexSet<PathBuf>>;

/// Build the deduplicated list of (svg, output) pairs for all loader modules
pub fn collect_requirements<'a, M, I>(modules: I) -> Vec<SvgRequirement>
where
    M: ModuleRecord + ?Sized + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let mut requirements = IndexSet::new();

    for module in modules {
        if !is_sprite_request(module.request()) {
            continue;
        }

        for file_name in module.output_files() {
            if !is_script_output(&file_name) {
                continue;
            }
            requirements.insert(SvgRequirement::new(module.resolved_path(), file_name));
        }
    }

    requirements.into_iter().collect()
}

/// Group pairs by output file name
pub fn group_by_output<'a, I>(requirements: I) -> GroupedRequirements
where
    I: IntoIterator<Item = &'a SvgRequirement>,
{
    let mut grouped = GroupedRequirements::new();

    for requirement in requirements {
        grouped
            .entry(requirement.output_file_name.clone())
            .or_default()
            .insert(requirement.svg_file_path.clone());
    }

    grouped
}

/// Put every loader module's SVG under one explicitly named asset
///
/// Chunk membership is ignored here; a path appears once however many modules
/// resolved to it.
pub fn group_for_target<'a, M, I>(modules: I, file_name: &str) -> GroupedRequirements
where
    M: ModuleRecord + ?Sized + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let paths: IndexSet<PathBuf> = modules
        .into_iter()
        .filter(|module| is_sprite_request(module.request()))
        .map(|module| module.resolved_path().to_path_buf())
        .collect();

    let mut grouped = GroupedRequirements::new();
    if !paths.is_empty() {
        grouped.insert(file_name.to_string(), paths);
    }
    grouped
}
