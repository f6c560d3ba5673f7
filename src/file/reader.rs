//! ファイル読み込み処理
//!
//! 事前チェック、フォールバックデコード、正規化を行う読み込みパイプライン

use crate::error::{FileError, Result};
use crate::file::encoding::{self, TextEncoding, ENCODING_CANDIDATES};
use crate::file::metadata::{FileInfo, LineEndingProcessor};
use std::path::Path;

/// 読み込み結果
///
/// デコード済みテキストと、実際に成功したエンコーディング。
/// テキストはBOM除去・LF統一済み。
#[derive(Debug, Clone)]
pub struct FileContent {
    pub text: String,
    pub encoding: TextEncoding,
}

/// ファイル読み込み処理
pub struct FileReader;

impl FileReader {
    pub fn new() -> Self {
        Self
    }

    /// ファイル内容を読み込み
    ///
    /// バイト列を読む前に存在・種別・権限を確認し、その後
    /// `ENCODING_CANDIDATES` の順で厳密デコードを試みる。
    pub fn read_file(&self, path: &Path) -> Result<FileContent> {
        let file_info = FileInfo::analyze(path)?;

        // 存在チェック
        if !file_info.exists {
            return Err(FileError::NotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        // ファイル種別チェック
        if file_info.is_dir {
            return Err(FileError::IsADirectory {
                path: path.display().to_string(),
            }
            .into());
        }
        if !file_info.is_file {
            return Err(FileError::Io {
                message: format!("Not a regular file: {}", path.display()),
            }
            .into());
        }

        // 権限チェック
        if !file_info.is_readable {
            return Err(FileError::PermissionDenied {
                path: path.display().to_string(),
            }
            .into());
        }

        // 全バイト読み込み
        let bytes = std::fs::read(path).map_err(|e| FileError::from_io(path, &e))?;

        // フォールバックデコード
        let (decoded, detected) = encoding::decode_with_candidates(&bytes, &ENCODING_CANDIDATES)
            .ok_or_else(|| FileError::Encoding {
                path: path.display().to_string(),
            })?;

        // BOM除去と改行コード統一
        let without_bom = encoding::remove_bom(&decoded);
        let text = LineEndingProcessor::normalize_to_lf(without_bom);

        self.validate_content(&text);

        Ok(FileContent {
            text,
            encoding: detected,
        })
    }

    /// ファイル内容の検証
    fn validate_content(&self, content: &str) {
        // 制御文字チェック（タブと改行以外）
        for (pos, ch) in content.char_indices() {
            if ch.is_control() && ch != '\t' && ch != '\n' {
                log::warn!("Control character found at position {}: {:?}", pos, ch);
            }
        }
    }
}

impl Default for FileReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TextmillError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reports_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.txt");

        let reader = FileReader::new();
        match reader.read_file(&missing) {
            Err(TextmillError::File(FileError::NotFound { path })) => {
                assert!(path.contains("nope.txt"));
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_reports_is_a_directory() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileReader::new();
        match reader.read_file(temp_dir.path()) {
            Err(TextmillError::File(FileError::IsADirectory { .. })) => {}
            other => panic!("Expected IsADirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_utf8_file_with_normalization() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("test.txt");
        fs::write(&test_file, "hello\r\nworld\rtest").unwrap();

        let reader = FileReader::new();
        let content = reader.read_file(&test_file).unwrap();

        // 改行コードがLFに統一されている
        assert_eq!(content.text, "hello\nworld\ntest");
        assert_eq!(content.encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("bom.txt");
        fs::write(&test_file, [0xEF, 0xBB, 0xBF, b'h', b'i']).unwrap();

        let reader = FileReader::new();
        let content = reader.read_file(&test_file).unwrap();
        assert_eq!(content.text, "hi");
        assert_eq!(content.encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_utf16_file_is_detected() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("wide.txt");
        fs::write(&test_file, [0xFF, 0xFE, 0x61, 0x00, 0x0A, 0x00, 0x62, 0x00]).unwrap();

        let reader = FileReader::new();
        let content = reader.read_file(&test_file).unwrap();
        assert_eq!(content.text, "a\nb");
        assert_eq!(content.encoding, TextEncoding::Utf16);
    }

    #[test]
    fn test_latin1_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("legacy.txt");
        // "café" を ISO-8859-1 で書いたバイト列
        fs::write(&test_file, [0x63, 0x61, 0x66, 0xE9]).unwrap();

        let reader = FileReader::new();
        let content = reader.read_file(&test_file).unwrap();
        assert_eq!(content.text, "café");
        assert_eq!(content.encoding, TextEncoding::Latin1);
    }

    #[test]
    fn test_empty_file_is_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("empty.txt");
        fs::write(&test_file, "").unwrap();

        let reader = FileReader::new();
        let content = reader.read_file(&test_file).unwrap();
        assert_eq!(content.text, "");
        assert_eq!(content.encoding, TextEncoding::Utf8);
    }

    #[cfg(unix)]
    #[test]
    fn test_fifo_is_rejected_as_not_regular() {
        use std::sync::mpsc;
        use std::time::Duration;

        let temp_dir = TempDir::new().unwrap();
        let fifo = temp_dir.path().join("pipe");
        let status = std::process::Command::new("mkfifo")
            .arg(&fifo)
            .status()
            .unwrap();
        assert!(status.success());

        // 書き手のいない FIFO は open でブロックする。
        // 事前チェックだけで弾けること
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let reader = FileReader::new();
            let _ = tx.send(reader.read_file(&fifo));
        });

        match rx.recv_timeout(Duration::from_secs(2)) {
            Ok(Err(TextmillError::File(FileError::Io { message }))) => {
                assert!(message.contains("Not a regular file"));
            }
            Ok(other) => panic!("Expected Io error, got {:?}", other),
            Err(_) => panic!("read_file blocked on the fifo"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_reports_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("locked.txt");
        fs::write(&test_file, "secret").unwrap();
        fs::set_permissions(&test_file, fs::Permissions::from_mode(0o000)).unwrap();

        // root は権限ビットを無視するためその場合はスキップ
        if fs::File::open(&test_file).is_ok() {
            return;
        }

        let reader = FileReader::new();
        match reader.read_file(&test_file) {
            Err(TextmillError::File(FileError::PermissionDenied { .. })) => {}
            other => panic!("Expected PermissionDenied, got {:?}", other),
        }

        fs::set_permissions(&test_file, fs::Permissions::from_mode(0o644)).unwrap();
    }
}
