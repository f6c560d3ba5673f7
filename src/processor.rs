//! ファイル処理ファサード
//!
//! 読み込み・変換・書き込みの3操作をひとつの窓口にまとめる。
//! 対話シェルはこの型だけを相手にする。

use crate::error::Result;
use crate::file::{FileContent, FileReader, FileWriter, WriteReport};
use crate::transform::{self, Operation, ProcessingResult};
use std::path::Path;

/// ファイル処理の統合窓口
pub struct FileProcessor {
    reader: FileReader,
    writer: FileWriter,
}

impl FileProcessor {
    pub fn new() -> Self {
        Self {
            reader: FileReader::new(),
            writer: FileWriter::new(),
        }
    }

    /// ファイルを読み込む
    pub fn read_file(&self, path: &Path) -> Result<FileContent> {
        self.reader.read_file(path)
    }

    /// テキストへオペレーションを適用する
    pub fn process_text(&self, text: &str, operation: Operation) -> ProcessingResult {
        transform::process(text, operation)
    }

    /// バックアップ付きでファイルを書き込む
    pub fn write_file(&self, path: &Path, content: &str) -> Result<WriteReport> {
        self.writer.write_file(path, content)
    }

    /// バックアップなしでファイルを書き込む（サンプル作成用）
    pub fn write_file_without_backup(&self, path: &Path, content: &str) -> Result<WriteReport> {
        FileWriter::without_backup().write_file(path, content)
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::{generate_backup_path, BackupStatus, TextEncoding};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn facade_runs_the_full_pipeline() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.txt");
        let output = temp_dir.path().join("output.txt");
        fs::write(&input, "beta\nalpha\n").unwrap();

        let processor = FileProcessor::new();

        let content = processor.read_file(&input).unwrap();
        assert_eq!(content.encoding, TextEncoding::Utf8);

        let result = processor.process_text(&content.text, Operation::ReverseLines);
        assert_eq!(result.text, "\nalpha\nbeta");

        let report = processor.write_file(&output, &result.rendered()).unwrap();
        assert_eq!(report.backup, BackupStatus::NotNeeded);

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "=== CONTENT WITH REVERSED LINE ORDER ===\n\nalpha\nbeta"
        );
    }

    #[test]
    fn sample_writes_never_create_backups() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("sample.txt");
        fs::write(&target, "old sample").unwrap();

        let processor = FileProcessor::new();
        let report = processor
            .write_file_without_backup(&target, "new sample")
            .unwrap();

        assert_eq!(report.backup, BackupStatus::NotNeeded);
        assert!(!generate_backup_path(&target).exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "new sample");
    }
}
