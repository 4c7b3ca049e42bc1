//! Entry families and their answer templates.

use serde::{Deserialize, Serialize};

/// One of the six templated entry families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    LearningAdvice,
    EfficiencyTip,
    MoodEncouragement,
    HealthReminder,
    Trivia,
    ProgrammingTip,
}

impl Family {
    /// All families in generation order.
    pub const ALL: [Family; 6] = [
        Family::LearningAdvice,
        Family::EfficiencyTip,
        Family::MoodEncouragement,
        Family::HealthReminder,
        Family::Trivia,
        Family::ProgrammingTip,
    ];

    /// Question prefix; the entry index is appended to form the key.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::LearningAdvice => "学习建议",
            Self::EfficiencyTip => "效率技巧",
            Self::MoodEncouragement => "心情鼓励",
            Self::HealthReminder => "健康提醒",
            Self::Trivia => "趣味问答",
            Self::ProgrammingTip => "编程提示",
        }
    }

    /// Number of entries generated under the reference bounds.
    #[must_use]
    pub fn default_count(self) -> u32 {
        match self {
            Self::LearningAdvice => 250,
            Self::EfficiencyTip | Self::MoodEncouragement => 200,
            Self::HealthReminder | Self::Trivia | Self::ProgrammingTip => 150,
        }
    }

    /// Question key for entry `index`.
    #[must_use]
    pub fn question(self, index: u32) -> String {
        format!("{}{index}", self.prefix())
    }

    /// Render the answer text for entry `index`.
    #[must_use]
    pub fn answer(self, index: u32) -> String {
        let prefix = self.prefix();
        match self {
            Self::LearningAdvice => format!(
                "{prefix}{index}：今天完成一个小目标，例如复习 {} 个知识点。",
                index % 5 + 1
            ),
            Self::EfficiencyTip => format!(
                "{prefix}{index}：使用番茄工作法 {} 分钟再休息。",
                25 + index % 15
            ),
            Self::MoodEncouragement => format!("{prefix}{index}：深呼吸一下，你已经做得很好。"),
            Self::HealthReminder => format!("{prefix}{index}：起来走走，喝一口水，活动颈椎。"),
            Self::Trivia => format!(
                "{prefix}{index}：我最喜欢的数字是 {}，你呢？",
                index % 9 + 1
            ),
            Self::ProgrammingTip => format!("{prefix}{index}：调试时先写小例子重现问题。"),
        }
    }
}
