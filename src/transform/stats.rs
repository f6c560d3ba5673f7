//! テキスト統計

/// テキスト統計
///
/// 行数は `str::lines()` の規則に従う: 末尾の改行は空行を生まず、
/// 改行で終わらない最終行も1行と数える。文字数は改行を含む。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
    pub chars_no_spaces: usize,
}

impl TextStats {
    /// テキストを計測する
    pub fn measure(text: &str) -> Self {
        let chars = text.chars().count();
        // 除外するのはASCIIスペースのみ（タブ・改行は文字数に残す）
        let spaces = text.chars().filter(|&c| c == ' ').count();

        Self {
            lines: text.lines().count(),
            words: text.split_whitespace().count(),
            chars,
            chars_no_spaces: chars - spaces,
        }
    }
}
