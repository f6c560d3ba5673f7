//! メインメニュー
//!
//! メニュー選択肢の定義と入力の解釈

use crate::transform::Operation;

/// メインメニューの表示文字列
pub const MAIN_MENU: &str = "📋 MENU:\n\
     1. Read and process a file\n\
     2. Create a sample file for testing\n\
     3. View processing summary\n\
     4. Exit";

/// メニュー選択肢
///
/// 対話ループの状態にそのまま対応する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ReadAndProcess,
    CreateSample,
    ViewSummary,
    Exit,
}

impl MenuChoice {
    /// 入力文字列からの変換（1〜4以外は None）
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim() {
            "1" => Some(MenuChoice::ReadAndProcess),
            "2" => Some(MenuChoice::CreateSample),
            "3" => Some(MenuChoice::ViewSummary),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// 処理オペレーション選択メニューの表示文字列
pub fn operation_menu_text() -> String {
    let mut text = String::from("📊 Choose processing operation:");
    for (index, operation) in Operation::ALL.iter().enumerate() {
        text.push_str(&format!("\n{}. {}", index + 1, operation.description()));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_keys_map_to_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::ReadAndProcess));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::CreateSample));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::ViewSummary));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
    }

    #[test]
    fn invalid_keys_are_rejected() {
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Exit));
    }

    #[test]
    fn operation_menu_lists_all_operations() {
        let text = operation_menu_text();
        assert!(text.contains("1. Word/Line/Character count"));
        assert!(text.contains("2. Add line numbers"));
        assert!(text.contains("3. Reverse line order"));
        assert!(text.contains("4. Convert to uppercase"));
    }
}
