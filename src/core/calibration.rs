//! 以人工標註的名字清單檢查估算器的準確率
//!
//! 啟發式規則不保證語言學上的正確性，這份清單記錄已知的誤差範圍。

use crate::core::syllables::estimate_syllables;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceCase {
    pub name: &'static str,
    pub expected: usize,
}

const fn case(name: &'static str, expected: usize) -> ReferenceCase {
    ReferenceCase { name, expected }
}

/// 人工標註的音節數（Paul 重複出現，計算準確率時照算兩次）
pub const REFERENCE_CASES: &[ReferenceCase] = &[
    case("Sophie", 2),
    case("Marie", 2),
    case("Maria", 3),
    case("Emilia", 4),
    case("Noah", 2),
    case("Anna", 2),
    case("Emma", 2),
    case("Liam", 2),
    case("Lucas", 2),
    case("Mia", 2),
    case("Ella", 2),
    case("Lina", 2),
    case("Finn", 1),
    case("Max", 1),
    case("Ben", 1),
    case("Tom", 1),
    case("Leo", 2),
    case("Paul", 1),
    case("Luis", 2),
    case("Henry", 2),
    case("Alexander", 4),
    case("Christopher", 3),
    case("Elizabeth", 4),
    case("Isabella", 4),
    case("Charlotte", 2),
    case("Amelia", 3),
    case("Harper", 2),
    case("Evelyn", 3),
    case("Abigail", 3),
    // 雙母音
    case("Eugen", 2),
    case("Paul", 1),
    case("Heinrich", 2),
    case("Haus", 1),
    case("Freund", 1),
    // 不構成雙母音的母音組合
    case("Julia", 3),
    case("Lukas", 2),
    case("Theo", 2),
];

pub const DEFAULT_MIN_ACCURACY: f64 = 0.8;

#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub name: String,
    pub expected: usize,
    pub estimated: usize,
    pub matched: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalibrationReport {
    pub outcomes: Vec<CaseOutcome>,
    pub correct: usize,
    pub total: usize,
}

impl CalibrationReport {
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }

    pub fn misses(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.matched)
    }

    pub fn meets(&self, min_accuracy: f64) -> bool {
        self.accuracy() >= min_accuracy
    }

    /// 逐行列出每個名字的結果，最後附上準確率
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.outcomes.len() + 1);
        for outcome in &self.outcomes {
            let status = if outcome.matched { "✓" } else { "✗" };
            lines.push(format!(
                "{} {:12} -> {} syllables (expected {})",
                status, outcome.name, outcome.estimated, outcome.expected
            ));
        }
        lines.push(format!(
            "Accuracy: {}/{} ({:.1}%)",
            self.correct,
            self.total,
            self.accuracy() * 100.0
        ));
        lines.join("\n")
    }
}

pub fn run_calibration(cases: &[ReferenceCase]) -> CalibrationReport {
    let outcomes: Vec<CaseOutcome> = cases
        .iter()
        .map(|c| {
            let estimated = estimate_syllables(c.name);
            CaseOutcome {
                name: c.name.to_string(),
                expected: c.expected,
                estimated,
                matched: estimated == c.expected,
            }
        })
        .collect();

    let correct = outcomes.iter().filter(|o| o.matched).count();

    tracing::debug!("Calibration: {}/{} reference names matched", correct, outcomes.len());

    CalibrationReport {
        total: outcomes.len(),
        correct,
        outcomes,
    }
}
