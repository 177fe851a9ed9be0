//! Pointing the extension manifest at the generated PNG icons
//!
//! Rewrites `icons` and `action.default_icon` so each size maps to its file
//! under the output directory. All other keys keep their values and order.

use std::fs;

use sakura_icons_config::IconSetConfig;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::IconError;

/// Size-to-path map in generation order, e.g. `"16": "public/icons/icon16.png"`
pub fn icon_entries(config: &IconSetConfig) -> Map<String, Value> {
    config
        .sizes
        .iter()
        .map(|&size| (size.to_string(), Value::String(config.manifest_icon_path(size))))
        .collect()
}

/// Replace the icon maps of a parsed manifest
///
/// Creates `action` when it is missing. Fails with a reason when the manifest
/// or its `action` is not a JSON object.
pub fn apply_icon_entries(manifest: &mut Value, entries: &Map<String, Value>) -> Result<(), String> {
    let root = manifest
        .as_object_mut()
        .ok_or_else(|| "top level is not an object".to_string())?;

    root.insert("icons".to_string(), Value::Object(entries.clone()));

    let action = root
        .entry("action")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| "\"action\" is not an object".to_string())?;
    action.insert("default_icon".to_string(), Value::Object(entries.clone()));

    Ok(())
}

/// Update the manifest at `config.manifest_path` in place
pub fn update_icon_entries(config: &IconSetConfig) -> Result<(), IconError> {
    let path = &config.manifest_path;

    let text = fs::read_to_string(path).map_err(|source| IconError::ReadManifest {
        path: path.clone(),
        source,
    })?;
    let mut manifest: Value =
        serde_json::from_str(&text).map_err(|source| IconError::ParseManifest {
            path: path.clone(),
            source,
        })?;

    apply_icon_entries(&mut manifest, &icon_entries(config)).map_err(|reason| {
        IconError::ManifestShape {
            path: path.clone(),
            reason,
        }
    })?;

    let text = serde_json::to_string_pretty(&manifest).map_err(|source| {
        IconError::SerializeManifest {
            path: path.clone(),
            source,
        }
    })?;
    fs::write(path, text).map_err(|source| IconError::WriteManifest {
        path: path.clone(),
        source,
    })?;

    debug!("update_icon_entries: rewrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;

    fn config_for(dir: &Path) -> IconSetConfig {
        IconSetConfig {
            manifest_path: dir.join("manifest.json"),
            ..IconSetConfig::with_output_dir(dir.join("public").join("icons"))
        }
    }

    #[test]
    fn test_icon_entries_order() {
        let config = IconSetConfig::default();
        let entries = icon_entries(&config);
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["16", "32", "48", "128"]);
        assert_eq!(entries["48"], json!("public/icons/icon48.png"));
    }

    #[test]
    fn test_update_preserves_other_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_for(tmp.path());
        fs::write(
            &config.manifest_path,
            r#"{"manifest_version": 3, "name": "Sakura", "icons": {"16": "old.svg"}, "action": {"default_popup": "popup.html"}}"#,
        )
        .unwrap();

        update_icon_entries(&config).unwrap();

        let text = fs::read_to_string(&config.manifest_path).unwrap();
        let manifest: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(manifest["manifest_version"], json!(3));
        assert_eq!(manifest["name"], json!("Sakura"));
        assert_eq!(manifest["action"]["default_popup"], json!("popup.html"));
        assert_eq!(manifest["icons"]["16"], json!("public/icons/icon16.png"));
        assert_eq!(manifest["icons"]["128"], json!("public/icons/icon128.png"));
        assert_eq!(manifest["action"]["default_icon"], manifest["icons"]);

        // Key order survives the rewrite
        let keys: Vec<&str> = manifest
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["manifest_version", "name", "icons", "action"]);
        assert!(text.contains("\n  \"name\""));
    }

    #[test]
    fn test_missing_action_is_created() {
        let mut manifest = json!({"name": "Sakura"});
        let entries = icon_entries(&IconSetConfig::default());
        apply_icon_entries(&mut manifest, &entries).unwrap();
        assert_eq!(manifest["action"]["default_icon"]["32"], json!("public/icons/icon32.png"));
    }

    #[test]
    fn test_non_object_action_rejected() {
        let mut manifest = json!({"action": "popup"});
        let entries = icon_entries(&IconSetConfig::default());
        assert!(apply_icon_entries(&mut manifest, &entries).is_err());
    }

    #[test]
    fn test_missing_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        let err = update_icon_entries(&config_for(tmp.path())).unwrap_err();
        assert!(matches!(err, IconError::ReadManifest { .. }));
    }

    #[test]
    fn test_malformed_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_for(tmp.path());
        fs::write(&config.manifest_path, "{ not json").unwrap();
        let err = update_icon_entries(&config).unwrap_err();
        assert!(matches!(err, IconError::ParseManifest { .. }));
    }
}
