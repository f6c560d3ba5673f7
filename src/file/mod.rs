//! ファイル操作モジュール
//!
//! 読み込み、書き込み、エンコーディング判定、パス処理

pub mod encoding;
pub mod metadata;
pub mod path;
pub mod reader;
pub mod writer;

// 主要APIの再エクスポート
pub use encoding::{TextEncoding, ENCODING_CANDIDATES};
pub use metadata::{FileInfo, LineEndingProcessor};
pub use reader::{FileContent, FileReader};
pub use writer::{generate_backup_path, BackupStatus, FileWriter, WriteReport, BACKUP_SUFFIX};
