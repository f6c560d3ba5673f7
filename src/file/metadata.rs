//! ファイルメタデータ管理
//!
//! 読み込み前の事前チェックと改行コードの正規化

use crate::error::{FileError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// ファイル情報
///
/// 読み込み前の事前チェック結果。シンボリックリンクはリンク先を辿って
/// 判定する。`is_readable` は通常ファイルに対してのみ成立する。
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
    pub exists: bool,
    pub is_file: bool,
    pub is_dir: bool,
    pub is_readable: bool,
}

impl FileInfo {
    /// ファイル情報を分析
    pub fn analyze(path: &Path) -> Result<Self> {
        let metadata = match path.metadata() {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // 未作成ファイル（壊れたシンボリックリンクも同じ扱い）
                return Ok(FileInfo {
                    path: path.to_path_buf(),
                    exists: false,
                    is_file: false,
                    is_dir: false,
                    is_readable: false,
                });
            }
            Err(e) => return Err(FileError::from_io(path, &e).into()),
        };

        let is_file = metadata.is_file();

        Ok(FileInfo {
            path: path.to_path_buf(),
            exists: true,
            is_file,
            is_dir: metadata.is_dir(),
            // FIFO 等の特殊ファイルは open がブロックし得るため、
            // 通常ファイルに限って開いて確かめる
            is_readable: is_file && Self::test_readable(path),
        })
    }

    /// 読み取り権限テスト
    pub fn test_readable(path: &Path) -> bool {
        std::fs::File::open(path).is_ok()
    }
}

/// 改行コード処理
pub struct LineEndingProcessor;

impl LineEndingProcessor {
    /// 改行コードをLFに統一
    pub fn normalize_to_lf(content: &str) -> String {
        // CRLF (\r\n) を LF (\n) に変換
        let step1 = content.replace("\r\n", "\n");

        // 残りの CR (\r) を LF (\n) に変換
        step1.replace('\r', "\n")
    }
}
