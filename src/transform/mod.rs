//! テキスト処理
//!
//! 4種類の純粋なテキスト変換と、出力ファイル用の整形。
//! 変換はI/Oを伴わず、同じ入力に対して常に同じ結果を返す。

pub mod operation;
pub mod stats;

pub use operation::Operation;
pub use stats::TextStats;

/// 行番号の最小桁数（ゼロ詰め）
///
/// これを超える行数では自然に桁が増える。
pub const LINE_NUMBER_WIDTH: usize = 3;

/// 処理結果
///
/// `text` は純粋な変換結果。word_count では入力がそのまま入り、
/// 計測値は `stats` に入る。
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    pub operation: Operation,
    pub text: String,
    pub stats: Option<TextStats>,
}

impl ProcessingResult {
    /// 出力ファイル用にセクション見出し付きで整形する
    ///
    /// word_count の枠のみ本文の後ろに改行を1つ足す。
    pub fn rendered(&self) -> String {
        match self.operation {
            Operation::WordCount => {
                let stats = self
                    .stats
                    .unwrap_or_else(|| TextStats::measure(&self.text));
                format!(
                    "=== FILE STATISTICS ===\n\
                     Lines: {}\n\
                     Words: {}\n\
                     Characters: {}\n\
                     Characters (no spaces): {}\n\
                     \n\
                     === ORIGINAL CONTENT ===\n\
                     {}\n",
                    stats.lines, stats.words, stats.chars, stats.chars_no_spaces, self.text
                )
            }
            Operation::LineNumbers => {
                format!("=== CONTENT WITH LINE NUMBERS ===\n{}", self.text)
            }
            Operation::ReverseLines => {
                format!("=== CONTENT WITH REVERSED LINE ORDER ===\n{}", self.text)
            }
            Operation::Uppercase => {
                format!("=== CONTENT IN UPPERCASE ===\n{}", self.text)
            }
        }
    }
}

/// テキストへオペレーションを適用する
pub fn process(text: &str, operation: Operation) -> ProcessingResult {
    let (text, stats) = match operation {
        Operation::WordCount => (text.to_string(), Some(TextStats::measure(text))),
        Operation::LineNumbers => (add_line_numbers(text), None),
        Operation::ReverseLines => (reverse_lines(text), None),
        Operation::Uppercase => (text.to_uppercase(), None),
    };

    ProcessingResult {
        operation,
        text,
        stats,
    }
}

/// 各行の先頭に1始まりの行番号を付ける
///
/// `LINE_NUMBER_WIDTH` 桁にゼロ詰めし、`: ` で区切る。
/// 入力末尾の改行は保持する。
pub fn add_line_numbers(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let numbered: Vec<String> = text
        .lines()
        .enumerate()
        .map(|(i, line)| format!("{:0width$}: {}", i + 1, line, width = LINE_NUMBER_WIDTH))
        .collect();

    let mut result = numbered.join("\n");
    if text.ends_with('\n') {
        result.push('\n');
    }
    result
}

/// 行の順序を反転する
///
/// `\n` 区切りの区間を反転して `\n` で結合する。2回適用すると
/// 任意の入力で元に戻る。入力末尾の改行は出力では先頭の空行になる。
pub fn reverse_lines(text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.reverse();
    lines.join("\n")
}
