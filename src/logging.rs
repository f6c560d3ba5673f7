//! ロギングシステム
//!
//! 開発者向けの診断出力。ユーザー向けメッセージは対話シェルが標準出力へ
//! 書くため、ここでは stderr のみを扱う。

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// ロガー
///
/// レベルでフィルタした1行メッセージを stderr へ出力する。
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
    output_stderr: bool,
}

impl Logger {
    /// デフォルト構築
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            output_stderr: true,
        }
    }

    /// 開発者向けロガー
    pub fn for_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    /// ログレベルを取得
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// ログレベルを変更
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// 標準エラー出力を無効化（テスト向け）
    #[cfg(test)]
    pub fn without_stderr(mut self) -> Self {
        self.output_stderr = false;
        self
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    fn write_line(&self, message: &str) {
        if self.output_stderr {
            eprintln!("{}", message);
        }
    }

    /// 任意のログレベルでメッセージを出力
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if self.should_log(level) {
            self.write_line(&format!("{}: {}", level.tag(), message.as_ref()));
        }
    }

    /// コンテキスト付きでログを出力
    pub fn log_with_context(
        &self,
        level: LogLevel,
        context: Option<&str>,
        message: impl AsRef<str>,
    ) {
        let context_info = context.unwrap_or("unknown");
        self.log(level, format!("{} in {}", message.as_ref(), context_info));
    }

    /// 情報ログ
    pub fn log_info(&self, message: impl AsRef<str>, context: Option<&str>) {
        self.log_with_context(LogLevel::Info, context, message);
    }

    /// 警告ログ
    pub fn log_warning(&self, message: impl AsRef<str>, context: Option<&str>) {
        self.log_with_context(LogLevel::Warning, context, message);
    }

    /// エラーログ
    pub fn log_error_message(&self, message: impl AsRef<str>, context: Option<&str>) {
        self.log_with_context(LogLevel::Error, context, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::for_development()
    }
}
