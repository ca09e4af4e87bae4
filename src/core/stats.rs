use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyllableStats {
    pub total: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    /// 音節數 -> 名字數量，依音節數排序
    pub distribution: BTreeMap<usize, usize>,
}

impl SyllableStats {
    pub fn from_counts<I>(counts: I) -> Option<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut distribution = BTreeMap::new();
        let mut total = 0usize;
        let mut sum = 0usize;

        for count in counts {
            *distribution.entry(count).or_insert(0) += 1;
            total += 1;
            sum += count;
        }

        let min = *distribution.keys().next()?;
        let max = *distribution.keys().next_back()?;

        Some(Self {
            total,
            min,
            max,
            mean: sum as f64 / total as f64,
            distribution,
        })
    }

    pub fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            "Syllable statistics:".to_string(),
            format!("  Minimum syllables: {}", self.min),
            format!("  Maximum syllables: {}", self.max),
            format!("  Average syllables: {:.2}", self.mean),
            String::new(),
            "Syllable distribution:".to_string(),
        ];

        for (syllables, count) in &self.distribution {
            let unit = if *syllables == 1 { "syllable" } else { "syllables" };
            lines.push(format!(
                "  {} {}: {} names ({:.1}%)",
                syllables,
                unit,
                count,
                self.percentage(*count)
            ));
        }

        lines.join("\n")
    }
}
