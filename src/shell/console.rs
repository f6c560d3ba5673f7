//! 対話コンソール
//!
//! プロンプト表示と行単位入力。入出力をジェネリクスで受けることで、
//! 本番は標準入出力、テストはメモリ上のバッファで同じコードを動かす。

use crate::error::Result;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

/// 対話コンソール
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// 標準入出力に接続したコンソール
    pub fn stdio() -> Self {
        Self {
            input: BufReader::new(std::io::stdin()),
            output: std::io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 1行出力
    pub fn line(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// 空行出力
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// 必須入力プロンプト
    ///
    /// 空入力は受け付けず、エラー行を挟んで再入力を促す。
    /// EOF に達したら `None` を返す。
    pub fn prompt_required(&mut self, message: &str) -> Result<Option<String>> {
        loop {
            write!(self.output, "{}", message)?;
            self.output.flush()?;

            match self.read_line()? {
                None => return Ok(None),
                Some(value) if value.is_empty() => {
                    writeln!(self.output, "❌ Input cannot be empty. Please try again.")?;
                }
                Some(value) => return Ok(Some(value)),
            }
        }
    }

    /// 既定値付きプロンプト
    ///
    /// 空入力で既定値を採用する。EOF に達したら `None` を返す。
    pub fn prompt_with_default(&mut self, message: &str, default: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        match self.read_line()? {
            None => Ok(None),
            Some(value) if value.is_empty() => Ok(Some(default.to_string())),
            Some(value) => Ok(Some(value)),
        }
    }

    /// 出力側を取り出す（テストでの検証用）
    pub fn into_output(self) -> W {
        self.output
    }

    /// 1行読み込み（EOF で None、前後の空白は除去）
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
