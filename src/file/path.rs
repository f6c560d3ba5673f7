//! パス処理ユーティリティ
//!
//! ユーザー入力パスの展開と出力ファイル名の導出

use std::path::{Path, PathBuf};

/// ユーザー入力のパスを展開する（~ → ホームディレクトリ）
///
/// ホームディレクトリが取得できない場合は入力をそのまま返す。
pub fn expand_input_path(input: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(input).as_ref())
}

/// ファイル名（拡張子なし）を取得
pub fn file_stem<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|s| s.to_string())
}

/// 既定の出力ファイル名を導出する
///
/// 入力 `data.txt` に対して `processed_data.txt` を返す。
/// カレントディレクトリ相対の名前になる。
pub fn default_output_name<P: AsRef<Path>>(input: P) -> String {
    let stem = file_stem(input).unwrap_or_else(|| "output".to_string());
    format!("processed_{}.txt", stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_expand_home() {
        // テスト環境でのホームディレクトリ設定
        env::set_var("HOME", "/home/testuser");

        let expanded = expand_input_path("~/documents/file.txt");
        assert_eq!(expanded, PathBuf::from("/home/testuser/documents/file.txt"));
    }

    #[test]
    fn test_plain_paths_pass_through() {
        assert_eq!(expand_input_path("notes.txt"), PathBuf::from("notes.txt"));
        assert_eq!(
            expand_input_path("/var/log/syslog"),
            PathBuf::from("/var/log/syslog")
        );
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("file.txt"), Some("file".to_string()));
        assert_eq!(file_stem("path/to/file.txt"), Some("file".to_string()));
        assert_eq!(file_stem("file"), Some("file".to_string()));
    }

    #[test]
    fn test_default_output_name() {
        assert_eq!(default_output_name("data.txt"), "processed_data.txt");
        assert_eq!(default_output_name("dir/notes.md"), "processed_notes.txt");
        assert_eq!(default_output_name("plain"), "processed_plain.txt");
        assert_eq!(
            default_output_name("archive.tar.gz"),
            "processed_archive.tar.txt"
        );
    }
}
