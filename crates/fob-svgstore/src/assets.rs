//! Output assets that receive sprite payloads

use indexmap::IndexMap;

/// Named build outputs that payloads are merged into
pub trait AssetSink {
    fn has_asset(&self, file_name: &str) -> bool;

    /// Put `payload` in front of the existing content of `file_name`
    fn prepend(&mut self, file_name: &str, payload: &str);

    /// Add a new asset holding only `payload`
    fn create(&mut self, file_name: &str, payload: String);
}

impl AssetSink for IndexMap<String, String> {
    fn has_asset(&self, file_name: &str) -> bool {
        self.contains_key(file_name)
    }

    fn prepend(&mut self, file_name: &str, payload: &str) {
        if let Some(content) = self.get_mut(file_name) {
            content.insert_str(0, payload);
        }
    }

    fn create(&mut self, file_name: &str, payload: String) {
        self.insert(file_name.to_string(), payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepend_keeps_existing_content_last() {
        let mut assets = IndexMap::new();
        assets.insert("main.js".to_string(), "X".to_string());

        assets.prepend("main.js", "P");
        assert_eq!(assets["main.js"], "PX");
    }

    #[test]
    fn prepend_ignores_unknown_assets() {
        let mut assets: IndexMap<String, String> = IndexMap::new();
        assets.prepend("main.js", "P");
        assert!(!assets.has_asset("main.js"));
    }

    #[test]
    fn create_adds_asset() {
        let mut assets: IndexMap<String, String> = IndexMap::new();
        assets.create("sprite.js", "P".to_string());
        assert!(assets.has_asset("sprite.js"));
        assert_eq!(assets["sprite.js"], "P");
    }
}
