//! Annotation Context - Entities

use super::ScriptMode;

/// 标注片段 - 最小标注单位
///
/// `bold + normal` 构成词干；`leading`/`trailing` 是词干前后不加粗的标点。
/// 直通片段（无法提取词干、标点符号等）的全部文本放在 `normal`，`bold` 为空。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub leading: String,
    pub bold: String,
    pub normal: String,
    pub trailing: String,
}

impl Segment {
    /// 创建带词干的片段，按字符数在 `bold_len` 处切分词干
    pub fn word(leading: &str, core: &str, bold_len: usize, trailing: &str) -> Self {
        let split_at = core
            .char_indices()
            .nth(bold_len)
            .map(|(pos, _)| pos)
            .unwrap_or(core.len());
        let (bold, normal) = core.split_at(split_at);

        Self {
            leading: leading.to_string(),
            bold: bold.to_string(),
            normal: normal.to_string(),
            trailing: trailing.to_string(),
        }
    }

    /// 创建不加粗的直通片段
    pub fn passthrough(text: &str) -> Self {
        Self {
            normal: text.to_string(),
            ..Self::default()
        }
    }

    /// 加粗部分的字符数
    pub fn bold_len(&self) -> usize {
        self.bold.chars().count()
    }

    /// 词干字符数
    pub fn core_len(&self) -> usize {
        self.bold_len() + self.normal.chars().count()
    }

    /// 还原片段原文
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(
            self.leading.len() + self.bold.len() + self.normal.len() + self.trailing.len(),
        );
        out.push_str(&self.leading);
        out.push_str(&self.bold);
        out.push_str(&self.normal);
        out.push_str(&self.trailing);
        out
    }
}

/// 段落
///
/// 不变量:
/// - segments 非空且有序
/// - 以 `mode.separator()` 连接各片段原文即得段落原文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    mode: ScriptMode,
    segments: Vec<Segment>,
}

impl Paragraph {
    pub fn new(mode: ScriptMode, segments: Vec<Segment>) -> Result<Self, &'static str> {
        if segments.is_empty() {
            return Err("段落至少包含一个片段");
        }
        Ok(Self { mode, segments })
    }

    /// 引擎内部构造：调用方保证 segments 非空
    pub(super) fn from_parts(mode: ScriptMode, segments: Vec<Segment>) -> Self {
        debug_assert!(!segments.is_empty());
        Self { mode, segments }
    }

    pub fn mode(&self) -> ScriptMode {
        self.mode
    }

    pub fn separator(&self) -> &'static str {
        self.mode.separator()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// 还原段落原文
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(Segment::text)
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}
