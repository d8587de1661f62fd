//! 分词与片段组装
//!
//! - 拉丁模式：按单个空格切分，每个 token 拆成 前缀标点 / 词干 / 后缀标点
//! - CJK 模式：按词边界（由外部分词器提供）或逐字切分

use super::bold_policy::{cjk_bold_len, latin_bold_len};
use super::script::{is_cjk, is_word_char};
use super::{Segment, Strength};

/// 将 token 拆成 (前缀, 词干, 后缀)
///
/// 等价于 `^(非词字符*)(词字符+)(非词字符*)$`；词干为空或后缀里还夹着词字符
/// （如 `e.g.`）时返回 None。词干首尾的 `'`、`-` 归入前缀/后缀，
/// 只有夹在词中间时（`don't`、`well-known`）才算词干。
pub fn split_token(token: &str) -> Option<(&str, &str, &str)> {
    let core_start = token
        .char_indices()
        .find(|&(_, ch)| is_word_char(ch))
        .map(|(pos, _)| pos)?;

    let core_end = token[core_start..]
        .char_indices()
        .find(|&(_, ch)| !is_word_char(ch))
        .map(|(pos, _)| core_start + pos)
        .unwrap_or(token.len());

    if token[core_end..].chars().any(is_word_char) {
        return None;
    }

    let core = &token[core_start..core_end];
    let start = core_end - core.trim_start_matches(is_connector).len();
    let end = core_start + core.trim_end_matches(is_connector).len();
    if start >= end {
        return None;
    }

    Some((&token[..start], &token[start..end], &token[end..]))
}

#[inline]
fn is_connector(ch: char) -> bool {
    matches!(ch, '\'' | '-')
}

/// 拉丁模式：每个空格分隔的 token 恰好产生一个片段（连续空格产生空片段）
pub fn tokenize_latin(paragraph: &str, strength: Strength) -> Vec<Segment> {
    paragraph
        .split(' ')
        .map(|token| match split_token(token) {
            Some((leading, core, trailing)) => {
                let bold_len = latin_bold_len(core.chars().count(), strength);
                Segment::word(leading, core, bold_len, trailing)
            }
            None => Segment::passthrough(token),
        })
        .collect()
}

/// CJK 模式下判断片段是否可加粗：含 ASCII 词字符或 CJK 字符
#[inline]
fn is_annotatable(piece: &str) -> bool {
    piece
        .chars()
        .any(|ch| ch.is_ascii_alphanumeric() || ch == '_' || is_cjk(ch))
}

/// CJK 模式：把分词结果逐个转成片段
pub fn tokenize_cjk<S: AsRef<str>>(pieces: &[S], strength: Strength) -> Vec<Segment> {
    pieces
        .iter()
        .map(|piece| {
            let piece = piece.as_ref();
            if piece.chars().all(char::is_whitespace) || !is_annotatable(piece) {
                Segment::passthrough(piece)
            } else {
                let bold_len = cjk_bold_len(piece.chars().count(), strength);
                Segment::word("", piece, bold_len, "")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_token_plain() {
        assert_eq!(split_token("Hello"), Some(("", "Hello", "")));
    }

    #[test]
    fn test_split_token_punctuation() {
        assert_eq!(split_token("world."), Some(("", "world", ".")));
        assert_eq!(split_token("(\"quoted\"),"), Some(("(\"", "quoted", "\"),")));
    }

    #[test]
    fn test_split_token_contractions_and_hyphens() {
        assert_eq!(split_token("don't"), Some(("", "don't", "")));
        assert_eq!(split_token("well-known!"), Some(("", "well-known", "!")));
        assert_eq!(split_token("café"), Some(("", "café", "")));
    }

    #[test]
    fn test_split_token_edge_quotes_and_dashes() {
        assert_eq!(split_token("'hello'"), Some(("'", "hello", "'")));
        assert_eq!(split_token("-well"), Some(("-", "well", "")));
        assert_eq!(split_token("\"'tis-"), Some(("\"'", "tis", "-")));
        assert_eq!(split_token("rock-'n'-roll'."), Some(("", "rock-'n'-roll", "'.")));
    }

    #[test]
    fn test_split_token_no_match() {
        assert_eq!(split_token(""), None);
        assert_eq!(split_token("..."), None);
        assert_eq!(split_token("e.g."), None);
        assert_eq!(split_token("a/b"), None);
        assert_eq!(split_token("--"), None);
        assert_eq!(split_token("'"), None);
    }

    #[test]
    fn test_tokenize_latin_segments() {
        let segments = tokenize_latin("Hello world.", Strength::MEDIUM);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].bold, "Hel");
        assert_eq!(segments[0].normal, "lo");
        assert_eq!(segments[1].bold, "wor");
        assert_eq!(segments[1].normal, "ld");
        assert_eq!(segments[1].trailing, ".");
    }

    #[test]
    fn test_tokenize_latin_keeps_empty_tokens() {
        let segments = tokenize_latin("a  b", Strength::MEDIUM);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1], Segment::passthrough(""));
    }

    #[test]
    fn test_tokenize_latin_quoted_words() {
        let segments = tokenize_latin("'hello' -well", Strength::MEDIUM);
        assert_eq!(segments[0].leading, "'");
        assert_eq!(segments[0].bold, "hel");
        assert_eq!(segments[0].normal, "lo");
        assert_eq!(segments[0].trailing, "'");
        assert_eq!(segments[1].leading, "-");
        assert_eq!(segments[1].bold, "we");
        assert_eq!(segments[1].normal, "ll");
        assert_eq!(segments[1].text(), "-well");
    }

    #[test]
    fn test_tokenize_latin_passthrough() {
        let segments = tokenize_latin("-- e.g.", Strength::LIGHT);
        assert_eq!(segments[0], Segment::passthrough("--"));
        assert_eq!(segments[1], Segment::passthrough("e.g."));
        assert_eq!(segments[1].bold_len(), 0);
    }

    #[test]
    fn test_tokenize_cjk_words_and_symbols() {
        let pieces = ["你好", "世界", "。", " ", "AI"];
        let segments = tokenize_cjk(&pieces, Strength::MEDIUM);

        assert_eq!(segments[0].bold, "你");
        assert_eq!(segments[0].normal, "好");
        assert_eq!(segments[1].bold, "世");
        assert_eq!(segments[2], Segment::passthrough("。"));
        assert_eq!(segments[3], Segment::passthrough(" "));
        assert_eq!(segments[4].bold, "A");
    }

    #[test]
    fn test_tokenize_cjk_accented_latin_is_symbol() {
        // CJK 模式只认 ASCII 词字符与 CJK 字符
        let segments = tokenize_cjk(&["é"], Strength::MEDIUM);
        assert_eq!(segments[0], Segment::passthrough("é"));
    }

    #[test]
    fn test_tokenize_cjk_strong() {
        let segments = tokenize_cjk(&["中华人民"], Strength::STRONG);
        assert_eq!(segments[0].bold, "中华人");
        assert_eq!(segments[0].normal, "民");
    }
}
