use crate::core::syllables::{count_normalized, normalize_name};
use std::collections::HashMap;

/// 由呼叫端注入的音節快取，鍵值是正規化後的名字
pub trait SyllableCache {
    fn get(&self, key: &str) -> Option<usize>;
    fn insert(&mut self, key: String, syllables: usize);
}

#[derive(Debug, Default, Clone)]
pub struct HashMapCache {
    entries: HashMap<String, usize>,
    hits: usize,
}

impl HashMapCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// 與 `estimate_syllables_cached` 相同，額外統計命中次數
    pub fn estimate(&mut self, name: &str) -> usize {
        let key = normalize_name(name);
        if let Some(hit) = self.entries.get(&key) {
            self.hits += 1;
            return *hit;
        }

        let syllables = count_normalized(&key);
        self.entries.insert(key, syllables);
        syllables
    }
}

impl SyllableCache for HashMapCache {
    fn get(&self, key: &str) -> Option<usize> {
        self.entries.get(key).copied()
    }

    fn insert(&mut self, key: String, syllables: usize) {
        self.entries.insert(key, syllables);
    }
}

/// 不保存任何結果
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl SyllableCache for NoCache {
    fn get(&self, _key: &str) -> Option<usize> {
        None
    }

    fn insert(&mut self, _key: String, _syllables: usize) {}
}

pub fn estimate_syllables_cached<C: SyllableCache>(name: &str, cache: &mut C) -> usize {
    let key = normalize_name(name);
    if let Some(hit) = cache.get(&key) {
        return hit;
    }

    let syllables = count_normalized(&key);
    cache.insert(key, syllables);
    syllables
}
