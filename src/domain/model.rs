use crate::core::stats::SyllableStats;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const NAME_FIELD: &str = "name";
pub const SYLLABLES_FIELD: &str = "syllables";

/// name 欄位的內容
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NameField<'a> {
    Missing,
    Null,
    Text(&'a str),
    Other(&'a Value),
}

/// 一筆名字資料，保留原始 JSON 物件的所有欄位與順序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameRecord {
    pub data: Map<String, Value>,
}

impl NameRecord {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    pub fn with_name(name: &str) -> Self {
        let mut data = Map::new();
        data.insert(NAME_FIELD.to_string(), Value::String(name.to_string()));
        Self { data }
    }

    /// 只有字串型別的 name 才視為名字
    pub fn name(&self) -> Option<&str> {
        self.data.get(NAME_FIELD).and_then(Value::as_str)
    }

    pub fn name_field(&self) -> NameField<'_> {
        match self.data.get(NAME_FIELD) {
            None => NameField::Missing,
            Some(Value::Null) => NameField::Null,
            Some(Value::String(name)) => NameField::Text(name),
            Some(other) => NameField::Other(other),
        }
    }

    pub fn syllables(&self) -> Option<usize> {
        self.data
            .get(SYLLABLES_FIELD)
            .and_then(Value::as_u64)
            .map(|n| n as usize)
    }

    pub fn set_syllables(&mut self, syllables: usize) {
        self.data
            .insert(SYLLABLES_FIELD.to_string(), Value::from(syllables));
    }
}

#[derive(Debug, Clone)]
pub struct SyllableBatch {
    pub records: Vec<NameRecord>,
    pub updated: usize,
    pub skipped: usize,
    pub stats: Option<SyllableStats>,
}
