//! セッション統計
//!
//! 対話セッション中の処理件数とエラー履歴。プロセス終了で破棄され、
//! どこにも永続化しない。

/// セッション統計
///
/// カウンタは単調増加。`processed` は書き込みに成功したファイル名、
/// `failures` は発生したエラーメッセージをそのまま保持する。
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    files_read: usize,
    files_written: usize,
    errors: usize,
    processed: Vec<String>,
    failures: Vec<String>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// 読み込み成功を記録
    pub fn record_read(&mut self) {
        self.files_read += 1;
    }

    /// 書き込み成功を記録
    pub fn record_written(&mut self, name: impl Into<String>) {
        self.files_written += 1;
        self.processed.push(name.into());
    }

    /// エラーを記録
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.errors += 1;
        self.failures.push(message.into());
    }

    pub fn files_read(&self) -> usize {
        self.files_read
    }

    pub fn files_written(&self) -> usize {
        self.files_written
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn processed(&self) -> &[String] {
        &self.processed
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_at_zero() {
        let session = SessionStats::new();
        assert_eq!(session.files_read(), 0);
        assert_eq!(session.files_written(), 0);
        assert_eq!(session.errors(), 0);
        assert!(session.processed().is_empty());
        assert!(session.failures().is_empty());
    }

    #[test]
    fn records_accumulate_in_order() {
        let mut session = SessionStats::new();
        session.record_read();
        session.record_read();
        session.record_written("out1.txt");
        session.record_error("File 'a.txt' does not exist");
        session.record_written("out2.txt");

        assert_eq!(session.files_read(), 2);
        assert_eq!(session.files_written(), 2);
        assert_eq!(session.errors(), 1);
        assert_eq!(session.processed().to_vec(), vec!["out1.txt", "out2.txt"]);
        assert_eq!(
            session.failures().to_vec(),
            vec!["File 'a.txt' does not exist"]
        );
    }
}
