use std::path::{Path, PathBuf};

/// Returns `dir/stem.extension`, or the first free `dir/stem_N.extension`, creating
/// `dir` if it is missing.
pub fn unique_path(dir: impl AsRef<Path>, stem: &str, extension: &str) -> std::io::Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let mut candidate = dir.join(format!("{}.{}", stem, extension));
    let mut counter: u32 = 1;

    while candidate.try_exists()? {
        candidate = dir.join(format!("{}_{}.{}", stem, counter, extension));
        counter += 1;
    }

    Ok(candidate)
}
