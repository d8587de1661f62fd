//! 加粗长度策略
//!
//! 拉丁模式：
//!
//! | L   | S=1       | S=2       | S=3         |
//! |-----|-----------|-----------|-------------|
//! | ≤3  | 1         | 1         | ceil(L*0.6) |
//! | >3  | ceil(L/2) | ceil(L/2) | ceil(L*0.6) |
//!
//! CJK 模式：
//!
//! | L   | S=1 | S=2       | S=3         |
//! |-----|-----|-----------|-------------|
//! | 1   | 1   | 1         | ceil(L*0.7) |
//! | ≥2  | 1   | ceil(L/2) | ceil(L*0.7) |
//!
//! 结果始终截断到 `[0, L]`。比例用整数运算，避免浮点误差让 ceil 多进一位。

use super::Strength;

/// ceil(len * num / den)
#[inline]
fn ceil_ratio(len: usize, num: usize, den: usize) -> usize {
    (len * num).div_ceil(den)
}

/// 拉丁词干的加粗字符数
pub fn latin_bold_len(len: usize, strength: Strength) -> usize {
    if len == 0 {
        return 0;
    }

    let mut bold = if len > 3 { ceil_ratio(len, 1, 2) } else { 1 };

    // 强度 1 只影响短词基线（已经是 1），强度 3 无条件按 0.6 重算
    if len <= 3 && strength >= Strength::MEDIUM {
        bold = 1;
    }
    if strength == Strength::STRONG {
        bold = ceil_ratio(len, 6, 10);
    }

    bold.min(len)
}

/// CJK 词的加粗字符数
pub fn cjk_bold_len(len: usize, strength: Strength) -> usize {
    if len == 0 {
        return 0;
    }

    let mut bold = if len == 1 { 1 } else { ceil_ratio(len, 1, 2) };

    if strength == Strength::LIGHT {
        bold = 1;
    }
    if strength == Strength::STRONG {
        bold = ceil_ratio(len, 7, 10);
    }

    bold.min(len)
}
