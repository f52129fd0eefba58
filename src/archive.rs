use crate::context::Context;
use crate::error::Error;
use crate::manifest::Manifest;
use crate::result::Result;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Build artifacts expected under dist/
const DIST_FILES: [&str; 2] = ["main.js", "styles.css"];

/// Metadata and documentation taken from the module root
const ROOT_FILES: [&str; 4] = ["module.json", "README.md", "LICENSE", "CHANGELOG.md"];

/// Directory the produced archives are placed in
const PACKAGES_DIR: &str = "packages";

/// Extension of template files picked up from templates/
const TEMPLATE_EXT: &str = "hbs";

/// Package the module into `packages/<id>-<version>.zip` and return the
/// archive path. Source files are optional; whichever of them exist are
/// archived, the rest are skipped.
pub fn create_package(ctx: &Context, manifest: &Manifest) -> Result<PathBuf> {
    let packages_dir = ctx.base_dir.join(PACKAGES_DIR);
    ensure_dir(&packages_dir)?;

    let archive_filename = format!("{}.zip", manifest.filename);
    let archive_path = packages_dir.join(&archive_filename);

    // A failed run must not leave a half-written archive behind
    if let Err(e) = write_archive(ctx, &archive_path) {
        let _ = fs::remove_file(&archive_path);
        return Err(e);
    }

    Ok(archive_path)
}

fn write_archive(ctx: &Context, archive_path: &Path) -> Result<()> {
    // File::create truncates, so a previous archive never bleeds into this one
    let file = File::create(archive_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    // Built files, kept under their dist/ prefix
    let dist_dir = ctx.base_dir.join("dist");
    for filename in DIST_FILES {
        let src = dist_dir.join(filename);
        if src.exists() {
            add_file(ctx, &mut zip, &src, &format!("dist/{filename}"), options)?;
        }
    }

    // Root module files, stored without a prefix
    for filename in ROOT_FILES {
        let src = ctx.base_dir.join(filename);
        if src.exists() {
            add_file(ctx, &mut zip, &src, filename, options)?;
        }
    }

    // Handlebars templates, flat under templates/
    let templates_dir = ctx.base_dir.join("templates");
    if templates_dir.is_dir() {
        let walkdir = WalkDir::new(&templates_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walkdir.into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != TEMPLATE_EXT) {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            add_file(ctx, &mut zip, path, &format!("templates/{name}"), options)?;
        }
    }

    zip.finish()?;
    Ok(())
}

fn add_file(
    ctx: &Context,
    zip: &mut ZipWriter<File>,
    src: &Path,
    entry_name: &str,
    options: SimpleFileOptions,
) -> Result<()> {
    if ctx.verbose {
        println!("Adding {} as {}", src.display(), entry_name);
    }

    zip.start_file(entry_name, options)?;

    let mut f = File::open(src).map_err(|e| Error::ReadSource {
        path: src.display().to_string(),
        source: e,
    })?;
    let mut buffer = Vec::new();
    f.read_to_end(&mut buffer).map_err(|e| Error::ReadSource {
        path: src.display().to_string(),
        source: e,
    })?;
    zip.write_all(&buffer)?;

    Ok(())
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::CreateDir {
        path: path.display().to_string(),
        source: e,
    })
}
