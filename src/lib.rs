//! textmill - 対話型テキストファイル処理ツール
//!
//! 複数エンコーディング対応の読み込み、4種類のテキスト変換、
//! バックアップ付き書き込みをメニュー形式で提供する。

// コアモジュール
pub mod app;
pub mod error;
pub mod logging;

// ファイル層
pub mod file;

// 処理層
pub mod processor;
pub mod session;
pub mod transform;

// 対話層
pub mod shell;

// 公開API
pub use app::App;
pub use error::{FileError, ProcessError, Result, TextmillError};
pub use file::{FileContent, TextEncoding};
pub use processor::FileProcessor;
pub use session::SessionStats;
pub use transform::{Operation, ProcessingResult, TextStats};
