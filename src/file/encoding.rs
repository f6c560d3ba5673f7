//! 文字エンコーディング処理
//!
//! 読み込んだバイト列を固定候補リストの順で厳密にデコードする。
//! 置換文字による損失デコードは行わず、全候補が失敗した場合のみ
//! エンコーディングエラーとする。

/// デコード候補
///
/// `ENCODING_CANDIDATES` の並び順がそのままフォールバック優先度になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16,
    Latin1,
    Windows1252,
}

/// フォールバック候補リスト（先頭から順に試行する）
pub const ENCODING_CANDIDATES: [TextEncoding; 4] = [
    TextEncoding::Utf8,
    TextEncoding::Utf16,
    TextEncoding::Latin1,
    TextEncoding::Windows1252,
];

impl TextEncoding {
    /// ユーザー向け表示名
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf16 => "utf-16",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Windows1252 => "cp1252",
        }
    }

    /// バイト列を厳密にデコードする（失敗時は `None`）
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            TextEncoding::Utf16 => decode_utf16(bytes),
            TextEncoding::Latin1 => Some(decode_latin1(bytes)),
            TextEncoding::Windows1252 => encoding_rs::WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|cow| cow.into_owned()),
        }
    }
}

/// UTF-16デコード
///
/// BOMがあれば消費してエンディアンを決定し、なければ
/// リトルエンディアンとして全体をデコードする。奇数長や
/// 不正なサロゲートは失敗となる。
fn decode_utf16(bytes: &[u8]) -> Option<String> {
    let (codec, payload) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (encoding_rs::UTF_16LE, rest),
        [0xFE, 0xFF, rest @ ..] => (encoding_rs::UTF_16BE, rest),
        _ => (encoding_rs::UTF_16LE, bytes),
    };
    codec
        .decode_without_bom_handling_and_without_replacement(payload)
        .map(|cow| cow.into_owned())
}

// ISO-8859-1 はバイト値がそのままUnicodeコードポイントになる。
// encoding_rs の "latin1" はWHATWG準拠で windows-1252 の別名のため、
// 真の ISO-8859-1 はここで手動変換する。全バイトが有効なので失敗しない。
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// 候補リストの先頭から順にデコードを試み、最初に成功した結果を返す
pub fn decode_with_candidates(
    bytes: &[u8],
    candidates: &[TextEncoding],
) -> Option<(String, TextEncoding)> {
    candidates
        .iter()
        .find_map(|&encoding| encoding.decode(bytes).map(|text| (text, encoding)))
}

/// 既定の候補リストでデコードする
pub fn decode_bytes(bytes: &[u8]) -> Option<(String, TextEncoding)> {
    decode_with_candidates(bytes, &ENCODING_CANDIDATES)
}

/// 先頭のBOM（U+FEFF）を除去する
///
/// UTF-16のBOMはデコード時に消費されるが、UTF-8のBOMは厳密デコードを
/// 通過してテキスト先頭に残るためここで取り除く。
pub fn remove_bom(content: &str) -> &str {
    content.strip_prefix('\u{FEFF}').unwrap_or(content)
}
