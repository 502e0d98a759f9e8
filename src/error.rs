//! Sprig 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// Sprig 错误类型
#[derive(Debug, Error)]
pub enum SprigError {
    /// I/O 错误（文件读写、目录操作等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON 序列化/解析错误（todos.json）
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML 序列化错误（config.toml）
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Sprig Result 类型别名
pub type Result<T> = std::result::Result<T, SprigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let sprig_err: SprigError = io_err.into();
        assert!(matches!(sprig_err, SprigError::Io(_)));
    }

    #[test]
    fn test_error_display() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: SprigError = io_err.into();
        assert!(err.to_string().starts_with("I/O error:"));
    }
}
