//! エラーハンドリングシステム
//!
//! textmill 全体で使用される統一されたエラー型とユーティリティを定義。
//! ファイル操作の失敗はすべてユーザーに説明可能なカテゴリへ写像する。

use std::io;
use std::path::Path;
use thiserror::Error;

/// アプリケーション全体のエラー型
///
/// 表示はそのままユーザー向けメッセージになるため、各カテゴリの
/// メッセージへ透過的に委譲する。
#[derive(Error, Debug, Clone)]
pub enum TextmillError {
    /// ファイル操作エラー
    #[error(transparent)]
    File(#[from] FileError),

    /// テキスト処理エラー
    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// ファイル操作固有のエラー
///
/// 読み書きで発生し得る失敗の全カテゴリ。メッセージは完結した文で、
/// 対象パスを必ず含める。
#[derive(Error, Debug, Clone)]
pub enum FileError {
    #[error("File '{path}' does not exist")]
    NotFound { path: String },

    #[error("'{path}' is a directory, not a file")]
    IsADirectory { path: String },

    #[error("Permission denied for '{path}'")]
    PermissionDenied { path: String },

    #[error("Unable to decode '{path}' with any supported encoding")]
    Encoding { path: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl FileError {
    /// `std::io::Error` をパス情報付きでカテゴリへ写像する
    pub fn from_io(path: &Path, error: &io::Error) -> Self {
        let path = path.display().to_string();
        match error.kind() {
            io::ErrorKind::NotFound => FileError::NotFound { path },
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied { path },
            _ => FileError::Io {
                message: format!("{}: {}", path, error),
            },
        }
    }
}

/// テキスト処理固有のエラー
#[derive(Error, Debug, Clone)]
pub enum ProcessError {
    #[error("Unsupported operation: '{name}'")]
    UnsupportedOperation { name: String },
}

// パス情報を持たない入出力エラー（標準入出力など）の変換
impl From<io::Error> for TextmillError {
    fn from(error: io::Error) -> Self {
        TextmillError::File(FileError::Io {
            message: error.to_string(),
        })
    }
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, TextmillError>;
