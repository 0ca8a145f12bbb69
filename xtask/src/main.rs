use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// Copy every regular file directly under `from` into `to`.
fn copy_dir_files(from: &Path, to: &Path) -> Result<usize, String> {
    fs::create_dir_all(to).map_err(|e| format!("create {}: {e}", to.display()))?;
    let mut copied = 0;
    let entries = fs::read_dir(from).map_err(|e| format!("read {}: {e}", from.display()))?;
    for entry in entries {
        let entry = entry.map_err(|e| format!("read {}: {e}", from.display()))?;
        let src = entry.path();
        if !src.is_file() {
            continue;
        }
        let name = entry.file_name();
        fs::copy(&src, to.join(&name)).map_err(|e| format!("copy {}: {e}", src.display()))?;
        copied += 1;
    }
    Ok(copied)
}

/// Assemble the distributable layout: browser assets under `dist/public/`,
/// page templates under `dist/templates/`.
fn bundle_assets(root: &Path) -> Result<(), String> {
    let server = root.join("crates/kable-ui-server");
    let dist = root.join("dist");
    let steps = [
        (server.join("assets/js"), dist.join("public/js")),
        (server.join("assets/css"), dist.join("public/css")),
        (server.join("assets/img"), dist.join("public/img")),
        (server.join("templates"), dist.join("templates")),
    ];
    for (from, to) in &steps {
        let copied = copy_dir_files(from, to)?;
        println!("{} -> {} ({copied} files)", from.display(), to.display());
    }
    Ok(())
}

fn clean_dist(root: &Path) -> Result<(), String> {
    let dist = root.join("dist");
    if dist.exists() {
        fs::remove_dir_all(&dist).map_err(|e| format!("remove {}: {e}", dist.display()))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let arg = env::args().nth(1).unwrap_or_else(|| "help".to_string());
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("workspace root");

    let result = match arg.as_str() {
        "bundle-assets" => bundle_assets(root),
        "clean-dist" => clean_dist(root),
        "help" | "--help" | "-h" => {
            eprintln!("xtask commands:");
            eprintln!("  bundle-assets");
            eprintln!("  clean-dist");
            Ok(())
        }
        _ => Err(format!(
            "unknown xtask command: {arg} (try `cargo run --manifest-path xtask/Cargo.toml -- help`)"
        )),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
