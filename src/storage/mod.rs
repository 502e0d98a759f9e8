pub mod config;
pub mod todos;

use std::io;
use std::path::PathBuf;

/// 获取 ~/.sprig/ 目录路径
pub fn sprig_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Cannot find home directory")
        .join(".sprig")
}

/// 确保 ~/.sprig/ 目录存在
pub fn ensure_sprig_dir() -> io::Result<PathBuf> {
    let path = sprig_dir();
    std::fs::create_dir_all(&path)?;
    Ok(path)
}
