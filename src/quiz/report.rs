use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalReport {
    pub score: usize,
    pub total: usize,
    pub percentage: u8,
}

impl FinalReport {
    pub fn new(score: usize, total: usize) -> Self {
        Self {
            score,
            total,
            percentage: percentage(score, total),
        }
    }

    pub fn tier(&self) -> ResultTier {
        ResultTier::from_percentage(self.percentage)
    }
}

/// `round(100 * score / total)` with halves rounded up, in integer arithmetic.
pub fn percentage(score: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let score = score.min(total);
    ((200 * score + total) / (2 * total)) as u8
}

/// Closing message band shown on the result modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTier {
    Perfect,
    Great,
    Good,
    KeepTrying,
}

impl ResultTier {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            90.. => ResultTier::Perfect,
            70..=89 => ResultTier::Great,
            50..=69 => ResultTier::Good,
            _ => ResultTier::KeepTrying,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            ResultTier::Perfect => "\u{1F3C6}",
            ResultTier::Great => "\u{1F389}",
            ResultTier::Good => "\u{1F44D}",
            ResultTier::KeepTrying => "\u{1F4AA}",
        }
    }

    pub fn message_key(self) -> &'static str {
        match self {
            ResultTier::Perfect => "result.perfect",
            ResultTier::Great => "result.great",
            ResultTier::Good => "result.good",
            ResultTier::KeepTrying => "result.keep_trying",
        }
    }
}
