//! 标注引擎 - 入口
//!
//! 纯函数：同样的输入总是得到同样的输出，不持有任何跨调用状态，不做 I/O。

use super::paragraph::split_paragraphs;
use super::script::classify_paragraph;
use super::segmenter::{segment_chars, WordSegmenter};
use super::tokenizer::{tokenize_cjk, tokenize_latin};
use super::{Paragraph, ScriptMode, Segment, Strength};

/// CJK 分词使用的语言标签
pub const CJK_LOCALE: &str = "zh";

/// 对文本做仿生阅读标注
///
/// - `enabled == false`：只分段，每段一个与原文相同的直通片段
/// - `segmenter == None`：CJK 段落逐字切分
pub fn annotate(
    text: &str,
    enabled: bool,
    strength: Strength,
    segmenter: Option<&dyn WordSegmenter>,
) -> Vec<Paragraph> {
    split_paragraphs(text)
        .map(|paragraph| {
            let mode = classify_paragraph(paragraph);
            let segments = if !enabled {
                vec![Segment::passthrough(paragraph)]
            } else {
                match mode {
                    ScriptMode::Latin => tokenize_latin(paragraph, strength),
                    ScriptMode::Cjk => {
                        tokenize_cjk(&segment_cjk(paragraph, segmenter), strength)
                    }
                }
            };
            Paragraph::from_parts(mode, segments)
        })
        .collect()
}

/// 调用分词器；结果不能完整覆盖原文时退回逐字切分
fn segment_cjk(paragraph: &str, segmenter: Option<&dyn WordSegmenter>) -> Vec<String> {
    let Some(segmenter) = segmenter else {
        return segment_chars(paragraph);
    };

    let pieces = segmenter.segment(paragraph, CJK_LOCALE);
    if covers(&pieces, paragraph) {
        pieces
    } else {
        tracing::warn!(
            pieces = pieces.len(),
            paragraph_len = paragraph.len(),
            "Word segmenter output does not cover paragraph, falling back to per-char"
        );
        segment_chars(paragraph)
    }
}

/// 片段按顺序拼接是否恰好等于原文
fn covers(pieces: &[String], text: &str) -> bool {
    let mut rest = text;
    for piece in pieces {
        match rest.strip_prefix(piece.as_str()) {
            Some(tail) => rest = tail,
            None => return false,
        }
    }
    rest.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::DictionaryWordSegmenter;

    /// 两字一组的简单分词器
    struct PairSegmenter;

    impl WordSegmenter for PairSegmenter {
        fn segment(&self, text: &str, locale: &str) -> Vec<String> {
            assert_eq!(locale, CJK_LOCALE);
            let chars: Vec<char> = text.chars().collect();
            chars.chunks(2).map(|c| c.iter().collect()).collect()
        }
    }

    /// 丢字的分词器
    struct LossySegmenter;

    impl WordSegmenter for LossySegmenter {
        fn segment(&self, text: &str, _locale: &str) -> Vec<String> {
            text.chars().skip(1).map(String::from).collect()
        }
    }

    fn s(v: i64) -> Strength {
        Strength::new(v).unwrap()
    }

    fn sample_texts() -> Vec<&'static str> {
        vec![
            "",
            "Hello world.",
            "Hello world.\n你好世界。",
            "  leading and  double  spaces ",
            "e.g. (parenthesised) don't-stop \"quotes\"!",
            "\n\n\nonly\n\n\nblank\n\n",
            "   \n\t\n",
            "Rust 是一门系统编程语言，速度快、内存安全。",
            "café naïve résumé — über",
            "...!!! ??? ---",
            "line one\r\nline two\r\n",
            "こんにちは 世界",
            "我们今天学习中文。'quoted' -dash",
        ]
    }

    #[test]
    fn test_empty_input() {
        assert!(annotate("", true, s(2), None).is_empty());
        assert!(annotate("", false, s(2), None).is_empty());
    }

    #[test]
    fn test_mixed_language_scenario() {
        let paragraphs = annotate("Hello world.\n你好世界。", true, s(2), Some(&PairSegmenter));
        assert_eq!(paragraphs.len(), 2);

        let latin = &paragraphs[0];
        assert_eq!(latin.mode(), ScriptMode::Latin);
        assert_eq!(latin.segments().len(), 2);
        assert_eq!(latin.segments()[0].bold, "Hel");
        assert_eq!(latin.segments()[0].normal, "lo");
        assert_eq!(latin.segments()[1].bold, "wor");
        assert_eq!(latin.segments()[1].normal, "ld");
        assert_eq!(latin.segments()[1].trailing, ".");

        let cjk = &paragraphs[1];
        assert_eq!(cjk.mode(), ScriptMode::Cjk);
        let texts: Vec<String> = cjk.segments().iter().map(Segment::text).collect();
        assert_eq!(texts, vec!["你好", "世界", "。"]);
        assert_eq!(cjk.segments()[0].bold, "你");
        assert_eq!(cjk.segments()[1].bold, "世");
        assert_eq!(cjk.segments()[2].bold_len(), 0);
    }

    #[test]
    fn test_cjk_without_segmenter_is_per_char() {
        let paragraphs = annotate("你好世界。", true, s(3), None);
        let segments = paragraphs[0].segments();
        assert_eq!(segments.len(), 5);
        assert!(segments[..4].iter().all(|seg| seg.bold_len() == 1));
        assert_eq!(segments[4], Segment::passthrough("。"));
    }

    #[test]
    fn test_lossy_segmenter_falls_back() {
        let with_lossy = annotate("你好世界。", true, s(2), Some(&LossySegmenter));
        let without = annotate("你好世界。", true, s(2), None);
        assert_eq!(with_lossy, without);
    }

    #[test]
    fn test_short_word_strength_two() {
        let paragraphs = annotate("a", true, s(2), None);
        let seg = &paragraphs[0].segments()[0];
        assert_eq!(seg.bold, "a");
        assert_eq!(seg.normal, "");
    }

    #[test]
    fn test_strength_three_override() {
        let paragraphs = annotate("extraordinary", true, s(3), None);
        let seg = &paragraphs[0].segments()[0];
        assert_eq!(seg.bold_len(), 8);
        assert_eq!(seg.bold, "extraord");
        assert_eq!(seg.normal, "inary");
    }

    #[test]
    fn test_strength_monotonicity_at_eight() {
        let lens: Vec<usize> = (1..=3)
            .map(|v| annotate("abcdefgh", true, s(v), None)[0].segments()[0].bold_len())
            .collect();
        assert_eq!(lens, vec![4, 4, 5]);
    }

    #[test]
    fn test_disabled_is_plain_paragraphing() {
        for text in sample_texts() {
            for v in 1..=3 {
                let paragraphs = annotate(text, false, s(v), Some(&PairSegmenter));
                let expected: Vec<&str> = split_paragraphs(text).collect();
                assert_eq!(paragraphs.len(), expected.len());
                for (paragraph, raw) in paragraphs.iter().zip(expected) {
                    assert_eq!(paragraph.segments(), &[Segment::passthrough(raw)]);
                }
            }
        }
    }

    #[test]
    fn test_paragraph_count_invariant() {
        for text in sample_texts() {
            let expected = text.split('\n').filter(|p| !p.is_empty()).count();
            assert_eq!(annotate(text, true, s(2), None).len(), expected, "{text:?}");
        }
    }

    #[test]
    fn test_reconstruction() {
        let dictionary = DictionaryWordSegmenter::new();
        let segmenters = [
            None,
            Some(&PairSegmenter as &dyn WordSegmenter),
            Some(&dictionary as &dyn WordSegmenter),
        ];

        for text in sample_texts() {
            let expected: Vec<&str> = split_paragraphs(text).collect();
            for enabled in [true, false] {
                for v in 1..=3 {
                    for segmenter in segmenters {
                        let paragraphs = annotate(text, enabled, s(v), segmenter);
                        assert_eq!(paragraphs.len(), expected.len());
                        for (paragraph, raw) in paragraphs.iter().zip(&expected) {
                            assert_eq!(&paragraph.text(), raw, "{text:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_bold_length_bound() {
        for text in sample_texts() {
            for v in 1..=3 {
                for paragraph in annotate(text, true, s(v), None) {
                    assert!(!paragraph.segments().is_empty());
                    for seg in paragraph.segments() {
                        assert!(seg.bold_len() <= seg.core_len());
                    }
                }
            }
        }
    }

    #[test]
    fn test_japanese_kana_is_latin_mode() {
        let paragraphs = annotate("こんにちは 世界", true, s(2), None);
        assert_eq!(paragraphs[0].mode(), ScriptMode::Cjk);

        let paragraphs = annotate("こんにちは", true, s(2), None);
        assert_eq!(paragraphs[0].mode(), ScriptMode::Latin);
        assert_eq!(paragraphs[0].segments()[0].bold_len(), 0);
    }
}
