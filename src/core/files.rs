//! File system helpers for the league data directory

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

/// Default data directory: `<platform data dir>/f1-fantasy`, e.g.
/// `~/.local/share/f1-fantasy` on Linux.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
        .map(|base| base.join("f1-fantasy"))
}

/// Try to read a file into a String. A missing file is `Ok(None)`; every
/// other failure, including contents that are not UTF-8, is an error.
pub fn try_read_to_string(path: &Path) -> io::Result<Option<String>> {
    let mut f = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    let mut s = String::new();

    f.read_to_string(&mut s)?;

    Ok(Some(s))
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
