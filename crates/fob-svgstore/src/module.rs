//! Module records handed over by the host bundler

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Loader token that tags a request as an SVG sprite icon
pub const LOADER_MARKER: &str = "svgstore-mini-loader";

static LOADER_REQUEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){}.+!", regex::escape(LOADER_MARKER)))
        .expect("loader marker pattern is valid")
});

/// A resolved module as seen by the host bundler
pub trait ModuleRecord {
    /// Raw request, possibly carrying a loader chain
    fn request(&self) -> &str;

    /// Absolute path of the resolved file
    fn resolved_path(&self) -> &Path;

    /// File names emitted by the chunks this module belongs to
    fn output_files(&self) -> Vec<String>;
}

/// Whether a request went through the sprite loader
pub fn is_sprite_request(request: &str) -> bool {
    LOADER_REQUEST.is_match(request)
}

/// Only script outputs can run the bootstrap snippet
pub fn is_script_output(file_name: &str) -> bool {
    file_name.ends_with(".js")
}

/// Plain owned module record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgModule {
    pub request: String,
    pub resolved_path: PathBuf,
    pub output_files: Vec<String>,
}

impl SvgModule {
    pub fn new(request: impl Into<String>, resolved_path: impl Into<PathBuf>) -> Self {
        Self {
            request: request.into(),
            resolved_path: resolved_path.into(),
            output_files: Vec::new(),
        }
    }

    pub fn with_output(mut self, file_name: impl Into<String>) -> Self {
        self.output_files.push(file_name.into());
        self
    }
}

impl ModuleRecord for SvgModule {
    fn request(&self) -> &str {
        &self.request
    }

    fn resolved_path(&self) -> &Path {
        &self.resolved_path
    }

    fn output_files(&self) -> Vec<String> {
        self.output_files.clone()
    }
}
