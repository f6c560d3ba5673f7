//! ファイル書き込み処理
//!
//! 上書き時のバックアップ作成、親ディレクトリ作成、
//! 一時ファイル経由のアトミック書き込み

use crate::error::{FileError, Result};
use std::path::{Path, PathBuf};

/// バックアップ接尾辞（拡張子を置き換えず、ファイル名全体に付加する）
pub const BACKUP_SUFFIX: &str = ".backup";

/// ファイル書き込み用デバッグマクロ
macro_rules! write_debug_log {
    ($self:expr, $($arg:tt)*) => {
        if $self.debug_mode {
            eprintln!("DEBUG FileWriter: {}", format!($($arg)*));
        }
    };
}

/// バックアップの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupStatus {
    /// 上書きではないため不要
    NotNeeded,
    /// 作成済み
    Created(PathBuf),
    /// 失敗（警告扱いで書き込みは続行する）
    Failed(String),
}

/// 書き込み結果
#[derive(Debug, Clone)]
pub struct WriteReport {
    pub path: PathBuf,
    pub backup: BackupStatus,
}

/// ファイル書き込み処理
pub struct FileWriter {
    backup: bool,
    debug_mode: bool,
}

impl FileWriter {
    pub fn new() -> Self {
        Self {
            backup: true,
            debug_mode: std::env::var("TEXTMILL_DEBUG").is_ok(),
        }
    }

    /// バックアップを作成しない設定で構築
    pub fn without_backup() -> Self {
        Self {
            backup: false,
            ..Self::new()
        }
    }

    /// ファイルを書き込み
    ///
    /// 手順: 既存ファイルのバックアップ → 親ディレクトリ作成 →
    /// アトミック書き込み。バックアップ失敗は `WriteReport` で
    /// 報告するのみで書き込み自体は続行する。
    pub fn write_file(&self, path: &Path, content: &str) -> Result<WriteReport> {
        write_debug_log!(self, "write_file called with path: {}", path.display());
        write_debug_log!(self, "content length: {}", content.len());

        let backup = if self.backup {
            self.create_backup(path)
        } else {
            BackupStatus::NotNeeded
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                write_debug_log!(self, "creating parent directory: {}", parent.display());
                std::fs::create_dir_all(parent).map_err(|e| FileError::from_io(parent, &e))?;
            }
        }

        self.atomic_write(path, content)?;
        write_debug_log!(self, "write operation completed successfully");

        Ok(WriteReport {
            path: path.to_path_buf(),
            backup,
        })
    }

    /// 上書き対象のバックアップを作成
    fn create_backup(&self, path: &Path) -> BackupStatus {
        if !path.is_file() {
            return BackupStatus::NotNeeded;
        }

        let backup_path = generate_backup_path(path);
        write_debug_log!(self, "creating backup: {}", backup_path.display());

        match std::fs::copy(path, &backup_path) {
            Ok(_) => BackupStatus::Created(backup_path),
            Err(e) => {
                log::warn!("Backup of {} failed: {}", path.display(), e);
                BackupStatus::Failed(e.to_string())
            }
        }
    }

    /// アトミック書き込み（一時ファイル経由）
    fn atomic_write(&self, path: &Path, content: &str) -> Result<()> {
        let temp_path = self.generate_temp_path(path)?;
        write_debug_log!(self, "atomic write: temp path: {}", temp_path.display());

        std::fs::write(&temp_path, content.as_bytes()).map_err(|e| {
            write_debug_log!(self, "atomic write: write to temp failed: {}", e);
            FileError::from_io(path, &e)
        })?;

        std::fs::rename(&temp_path, path).map_err(|e| {
            write_debug_log!(self, "atomic write: rename failed: {}", e);
            // 一時ファイル削除を試行
            let _ = std::fs::remove_file(&temp_path);
            FileError::from_io(path, &e)
        })?;

        Ok(())
    }

    fn generate_temp_path(&self, original: &Path) -> Result<PathBuf> {
        let filename = original.file_name().ok_or_else(|| FileError::Io {
            message: format!("Invalid target path: {}", original.display()),
        })?;

        let parent = original.parent().unwrap_or_else(|| Path::new(""));
        let temp_name = format!(".{}_{}", filename.to_string_lossy(), std::process::id());

        Ok(parent.join(temp_name))
    }
}

impl Default for FileWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// バックアップファイルのパスを導出する
///
/// `out.txt` → `out.txt.backup`（同一ディレクトリ内）
pub fn generate_backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}
