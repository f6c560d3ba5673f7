//! メインアプリケーション構造体
//!
//! 対話メニューの状態管理とメインループを実装

use crate::error::{Result, TextmillError};
use crate::file::path::{default_output_name, expand_input_path};
use crate::file::BackupStatus;
use crate::logging::Logger;
use crate::processor::FileProcessor;
use crate::session::SessionStats;
use crate::shell::menu::{operation_menu_text, MAIN_MENU};
use crate::shell::{Console, MenuChoice};
use crate::transform::Operation;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

/// サンプルファイルの既定ファイル名
const DEFAULT_SAMPLE_NAME: &str = "sample.txt";

/// サンプルファイルの内容
///
/// 全オペレーションを試せるよう複数行・空行・記号を含む固定テキスト。
const SAMPLE_TEXT: &str = "\
Welcome to the File Processing Lab!
This is a sample text file for trying out the processing operations.

This file contains multiple lines for testing:
- Line processing
- Word counting
- Character analysis
- Error handling

Rust makes file handling safe and robust!
Remember to always handle errors gracefully.

Happy processing! 🦀
";

/// メインアプリケーション構造体
///
/// 対話コンソール・ファイル処理・セッション集計を束ね、
/// メニューループのライフサイクルを管理する。
pub struct App<R: BufRead, W: Write> {
    /// 対話入出力
    console: Console<R, W>,
    /// 読み込み・変換・書き込みのパイプライン
    processor: FileProcessor,
    /// セッション集計
    session: SessionStats,
    /// 動作ログ
    logger: Logger,
    /// アプリケーション実行状態
    running: bool,
}

impl App<BufReader<Stdin>, Stdout> {
    /// 標準入出力に接続したアプリケーションを作成
    pub fn new() -> Self {
        Self::with_console(Console::stdio())
    }
}

impl Default for App<BufReader<Stdin>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> App<R, W> {
    /// 任意の入出力に接続したアプリケーションを作成
    pub fn with_console(console: Console<R, W>) -> Self {
        App {
            console,
            processor: FileProcessor::new(),
            session: SessionStats::new(),
            logger: Logger::for_development(),
            running: true,
        }
    }

    /// メインメニューループを実行
    ///
    /// 入力の終端（EOF）は明示的な終了と同じ扱いで、挨拶を出して
    /// 正常終了する。個々のファイル操作の失敗ではループは止まらない。
    pub fn run(&mut self) -> Result<()> {
        self.console.line("🖋️  FILE READ & WRITE PROCESSING LAB")?;
        self.console.line("=".repeat(60))?;
        self.logger.log_info("interactive session started", Some("app"));

        while self.running {
            self.console.blank()?;
            self.console.line(MAIN_MENU)?;

            match self.console.prompt_required("\nEnter your choice (1-4): ")? {
                Some(choice) => self.dispatch(&choice)?,
                None => self.running = false,
            }
        }

        self.console.blank()?;
        self.console
            .line("👋 Thank you for using the File Processing Lab!")?;
        self.logger.log_info("interactive session finished", Some("app"));
        Ok(())
    }

    /// メニュー選択に応じた処理へ振り分ける
    fn dispatch(&mut self, choice: &str) -> Result<()> {
        match MenuChoice::parse(choice) {
            Some(MenuChoice::ReadAndProcess) => self.handle_read_and_process(),
            Some(MenuChoice::CreateSample) => self.handle_create_sample(),
            Some(MenuChoice::ViewSummary) => self.print_summary(),
            Some(MenuChoice::Exit) => self.request_shutdown(),
            None => self.console.line("❌ Invalid choice. Please enter 1-4."),
        }
    }

    /// 読み込み→変換→書き込みの対話フロー
    fn handle_read_and_process(&mut self) -> Result<()> {
        let Some(input_name) = self.console.prompt_required("📁 Enter filename to read: ")? else {
            return self.request_shutdown();
        };
        let input_path = expand_input_path(&input_name);

        self.console.blank()?;
        self.console
            .line(format!("🔄 Attempting to read '{}'...", input_name))?;

        let content = match self.processor.read_file(&input_path) {
            Ok(content) => content,
            Err(err) => return self.report_failure("read_file", &err),
        };
        self.session.record_read();
        self.console.line(format!(
            "✅ Successfully read '{}' using {} encoding",
            input_name,
            content.encoding.label()
        ))?;

        self.console.blank()?;
        self.console.line(operation_menu_text())?;
        let Some(operation_key) = self.console.prompt_required("Enter operation (1-4): ")? else {
            return self.request_shutdown();
        };
        let operation = Operation::from_menu_key(&operation_key);
        let result = self.processor.process_text(&content.text, operation);

        let default_output = default_output_name(&input_name);
        let output_prompt = format!("💾 Output filename (default: {}): ", default_output);
        let Some(output_name) = self
            .console
            .prompt_with_default(&output_prompt, &default_output)?
        else {
            return self.request_shutdown();
        };
        let output_path = expand_input_path(&output_name);

        self.console.blank()?;
        self.console
            .line(format!("🔄 Writing processed content to '{}'...", output_name))?;

        let report = match self.processor.write_file(&output_path, &result.rendered()) {
            Ok(report) => report,
            Err(err) => return self.report_failure("write_file", &err),
        };

        match &report.backup {
            BackupStatus::Created(path) => {
                self.console
                    .line(format!("📄 Created backup: {}", path.display()))?;
            }
            BackupStatus::Failed(reason) => {
                self.console
                    .line(format!("⚠️ Warning: Could not create backup: {}", reason))?;
            }
            BackupStatus::NotNeeded => {}
        }

        self.session.record_written(output_name.as_str());
        self.console
            .line(format!("✅ Successfully wrote to '{}'", output_name))?;
        self.console.line("🎉 File processing completed successfully!")?;
        Ok(())
    }

    /// サンプルファイル作成の対話フロー
    ///
    /// 既存ファイルを上書きしてもバックアップは取らない。
    fn handle_create_sample(&mut self) -> Result<()> {
        self.console.blank()?;
        self.console.line("📝 Creating a sample file for testing...")?;

        let prompt = format!(
            "📁 Enter filename for sample file (default: {}): ",
            DEFAULT_SAMPLE_NAME
        );
        let Some(name) = self
            .console
            .prompt_with_default(&prompt, DEFAULT_SAMPLE_NAME)?
        else {
            return self.request_shutdown();
        };
        let path = expand_input_path(&name);

        match self.processor.write_file_without_backup(&path, SAMPLE_TEXT) {
            Ok(_) => {
                self.session.record_written(name.as_str());
                self.console
                    .line(format!("✅ Sample file '{}' created successfully!", name))?;
                Ok(())
            }
            Err(err) => self.report_failure("write_file", &err),
        }
    }

    /// セッション集計を表示
    fn print_summary(&mut self) -> Result<()> {
        self.console.blank()?;
        self.console.line("📈 PROCESSING SUMMARY:")?;
        self.console.line("=".repeat(40))?;
        self.console
            .line(format!("Files read:    {}", self.session.files_read()))?;
        self.console
            .line(format!("Files written: {}", self.session.files_written()))?;
        self.console
            .line(format!("Errors:        {}", self.session.errors()))?;

        self.console.blank()?;
        if self.session.processed().is_empty() {
            self.console.line("No files processed yet.")?;
        } else {
            self.console.line("✅ Successfully processed files:")?;
            for name in self.session.processed() {
                self.console.line(format!("   • {}", name))?;
            }
        }

        self.console.blank()?;
        if self.session.failures().is_empty() {
            self.console.line("✅ No errors encountered!")?;
        } else {
            self.console.line("❌ Errors encountered:")?;
            for message in self.session.failures() {
                self.console.line(format!("   • {}", message))?;
            }
        }
        Ok(())
    }

    /// 次のループ先頭で終了する
    fn request_shutdown(&mut self) -> Result<()> {
        self.running = false;
        Ok(())
    }

    /// 失敗をセッションへ記録し、利用者へ表示する
    fn report_failure(&mut self, context: &str, err: &TextmillError) -> Result<()> {
        let message = err.to_string();
        self.logger.log_error_message(&message, Some(context));
        self.session.record_error(message.as_str());
        self.console.line(format!("❌ {}", message))?;
        Ok(())
    }
}
