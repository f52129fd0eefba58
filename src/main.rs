mod archive;
mod args;
mod context;
mod error;
mod manifest;
mod result;

use args::Args;
use context::Context;
use manifest::Manifest;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args { verbose, path } = Args::parse();

    // Resolve module.json before touching anything else
    let ctx = Context::locate(path.as_deref(), verbose)?;

    // Use cliclack for nice UI
    cliclack::intro("module-pack")?;

    // Load manifest
    let manifest = {
        let spinner = cliclack::spinner();
        spinner.start("Loading manifest...");
        match Manifest::load(&ctx) {
            Ok(m) => {
                spinner.stop(format!("Loaded manifest for {} {}", m.id, m.version));
                m
            }
            Err(e) => {
                spinner.error("Failed to load manifest");
                return Err(e);
            }
        }
    };

    // Create the distribution package
    let archive_path = {
        let spinner = cliclack::spinner();
        spinner.start("Packaging module...");
        match archive::create_package(&ctx, &manifest) {
            Ok(path) => {
                spinner.stop(format!("Packaged {}", manifest.filename));
                path
            }
            Err(e) => {
                spinner.error("Failed to create package");
                return Err(e);
            }
        }
    };

    cliclack::outro("Package created successfully!")?;

    // Machine-readable result: the package path, one line on stdout
    println!("{}", archive_path.display());

    Ok(())
}
