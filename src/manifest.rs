use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use serde::Deserialize;
use std::fs;

/// File name of the module manifest
pub const MANIFEST_FILE: &str = "module.json";

/// Raw module.json fields consumed by the packager. Module manifests carry
/// many more fields; everything else is ignored here.
#[derive(Debug, Deserialize)]
pub struct ModuleJson {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

/// Parsed and processed manifest information
#[derive(Debug)]
pub struct Manifest {
    pub id: String,
    pub version: String,
    /// Archive file stem, `<id>-<version>`
    pub filename: String,
}

impl Manifest {
    /// Load and parse the manifest from module.json
    pub fn load(ctx: &Context) -> Result<Self> {
        let content = fs::read_to_string(&ctx.manifest_path)?;
        let module: ModuleJson = serde_json::from_str(&content)?;

        let id = module
            .id
            .ok_or_else(|| Error::InvalidManifest("missing required field `id`".to_string()))?;

        let version = module.version.ok_or_else(|| {
            Error::InvalidManifest("missing required field `version`".to_string())
        })?;

        let filename = format!("{}-{}", id, version);

        Ok(Manifest {
            id,
            version,
            filename,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with_manifest(content: &str) -> (tempfile::TempDir, Context) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), content).unwrap();
        let ctx = Context::locate(Some(dir.path()), false).unwrap();
        (dir, ctx)
    }

    #[test]
    fn parses_id_and_version() {
        let (_dir, ctx) =
            ctx_with_manifest(r#"{"id": "foo", "version": "1.2.3", "title": "Foo Module"}"#);

        let manifest = Manifest::load(&ctx).unwrap();
        assert_eq!(manifest.id, "foo");
        assert_eq!(manifest.version, "1.2.3");
        assert_eq!(manifest.filename, "foo-1.2.3");
    }

    #[test]
    fn rejects_missing_id() {
        let (_dir, ctx) = ctx_with_manifest(r#"{"version": "1.2.3"}"#);

        let err = Manifest::load(&ctx).unwrap_err();
        assert!(matches!(err, Error::InvalidManifest(_)));
    }

    #[test]
    fn rejects_missing_version() {
        let (_dir, ctx) = ctx_with_manifest(r#"{"id": "foo"}"#);

        let err = Manifest::load(&ctx).unwrap_err();
        assert!(matches!(err, Error::InvalidManifest(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let (_dir, ctx) = ctx_with_manifest("not json at all");

        assert!(matches!(
            Manifest::load(&ctx).unwrap_err(),
            Error::Json(_)
        ));
    }
}
