//! 德文正寫法的音節估算器
//!
//! 純函式：沒有 I/O、沒有全域狀態，任何字串輸入都會回傳結果。

/// 視為單一音節的雙母音。比對對象是展開變音後的字串，
/// 所以 "äu" 這一項永遠比對不到，保留原樣以維持既有輸出。
const DIPHTHONGS: [&str; 8] = ["eu", "au", "ou", "äu", "ei", "ai", "oi", "ui"];

const VOWEL_CLASS: &[u8] = b"aeiouy";

/// 字尾加音節的規則，依優先順序排列，最多套用一個
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixBonus {
    Er,
    En,
    Le,
}

impl SuffixBonus {
    const PRIORITY: [SuffixBonus; 3] = [SuffixBonus::Er, SuffixBonus::En, SuffixBonus::Le];

    pub fn pattern(self) -> &'static str {
        match self {
            SuffixBonus::Er => "er",
            SuffixBonus::En => "en",
            SuffixBonus::Le => "le",
        }
    }

    /// 找出第一個成立的字尾規則：字尾相符、長度大於 3、倒數第三個字元不是母音
    pub fn detect(word: &str) -> Option<Self> {
        let bytes = word.as_bytes();
        Self::PRIORITY.into_iter().find(|bonus| {
            word.ends_with(bonus.pattern())
                && bytes.len() > 3
                && !is_vowel_class(bytes[bytes.len() - 3])
        })
    }
}

fn is_vowel_class(b: u8) -> bool {
    VOWEL_CLASS.contains(&b)
}

/// 小寫化、過濾非字母字元，並把變音與 ß 展開成雙字母
///
/// 結果只包含 ASCII 小寫字母，可直接當作快取鍵值。
pub fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());

    for c in name.chars().flat_map(char::to_lowercase) {
        match c {
            'a'..='z' => normalized.push(c),
            'ä' => normalized.push_str("ae"),
            'ö' => normalized.push_str("oe"),
            'ü' => normalized.push_str("ue"),
            'ß' => normalized.push_str("ss"),
            _ => {}
        }
    }

    normalized
}

/// 估算名字的音節數
///
/// 沒有任何可用字母時回傳 0，其餘情況至少回傳 1。
pub fn estimate_syllables(name: &str) -> usize {
    count_normalized(&normalize_name(name))
}

/// 對已正規化的字串套用計數規則
pub(crate) fn count_normalized(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    let bytes = word.as_bytes();
    let len = bytes.len();

    let mut diphthongs: usize = DIPHTHONGS.iter().map(|d| word.matches(d).count()).sum();

    // 字尾 ie（Sophie、Marie）額外算作一個雙母音
    if word.ends_with("ie") {
        diphthongs += 1;
    }

    let vowels = bytes.iter().filter(|b| is_vowel_class(**b)).count();
    let mut count = vowels as isize - diphthongs as isize;

    // 子音後的字尾 e 不發音
    if word.ends_with('e') && count > 1 && len > 2 && !is_vowel_class(bytes[len - 2]) {
        count -= 1;
    }

    // 子音後的字尾 y 當作母音
    if word.ends_with('y') && len > 2 && !b"aeiou".contains(&bytes[len - 2]) {
        count += 1;
    }

    if SuffixBonus::detect(word).is_some() {
        count += 1;
    }

    count.max(1) as usize
}
