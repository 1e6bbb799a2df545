use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Кладёт `config.toml` из корня workspace рядом с бинарником
/// (target/debug или target/release). Любая неудача не ломает сборку:
/// без файла бэкенд стартует на встроенном конфиге.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let Some(target_dir) = profile_dir() else {
        println!("cargo:warning=cannot resolve target profile directory, config.toml not copied");
        return;
    };

    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source.exists() {
        println!("cargo:warning=config.toml not found at {}, embedded default will be used", source.display());
        return;
    }

    if let Err(e) = fs::copy(&source, target_dir.join("config.toml")) {
        println!("cargo:warning=failed to copy config.toml: {}", e);
    }
}

/// OUT_DIR = target/<profile>/build/<pkg>-<hash>/out, нужен target/<profile>
fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR")?);
    let profile = env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|name| name == profile.as_str()))
        .map(Path::to_path_buf)
}
