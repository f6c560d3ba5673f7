//! 処理オペレーション
//!
//! オペレーションの列挙と、正準名・メニュー選択からの変換

use crate::error::ProcessError;
use std::fmt;
use std::str::FromStr;

/// テキスト処理オペレーション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    WordCount,
    LineNumbers,
    ReverseLines,
    Uppercase,
}

impl Operation {
    /// 全オペレーション（メニュー表示順）
    pub const ALL: [Operation; 4] = [
        Operation::WordCount,
        Operation::LineNumbers,
        Operation::ReverseLines,
        Operation::Uppercase,
    ];

    /// 正準名
    pub fn name(self) -> &'static str {
        match self {
            Operation::WordCount => "word_count",
            Operation::LineNumbers => "line_numbers",
            Operation::ReverseLines => "reverse_lines",
            Operation::Uppercase => "uppercase",
        }
    }

    /// メニュー項目の説明文
    pub fn description(self) -> &'static str {
        match self {
            Operation::WordCount => "Word/Line/Character count",
            Operation::LineNumbers => "Add line numbers",
            Operation::ReverseLines => "Reverse line order",
            Operation::Uppercase => "Convert to uppercase",
        }
    }

    /// メニュー選択（1〜4）からの変換
    ///
    /// 範囲外の入力は word_count にフォールバックする。
    pub fn from_menu_key(input: &str) -> Operation {
        match input.trim() {
            "1" => Operation::WordCount,
            "2" => Operation::LineNumbers,
            "3" => Operation::ReverseLines,
            "4" => Operation::Uppercase,
            _ => Operation::WordCount,
        }
    }
}

impl FromStr for Operation {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word_count" => Ok(Operation::WordCount),
            "line_numbers" => Ok(Operation::LineNumbers),
            "reverse_lines" => Ok(Operation::ReverseLines),
            "uppercase" => Ok(Operation::Uppercase),
            other => Err(ProcessError::UnsupportedOperation {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
