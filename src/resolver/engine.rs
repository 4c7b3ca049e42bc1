//! Ordered first-match-wins evaluation of the reply rules.

use std::sync::Arc;

use rand::Rng;

use crate::knowledge::KnowledgeBase;

use super::{
    default_rules, Clock, ReplyContext, Rule, RuleKind, SystemClock, TimeFormat, Utterance,
    FALLBACKS,
};

/// Outcome of resolving one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Rule that produced the reply.
    pub rule: RuleKind,
    pub reply: String,
}

/// Maps raw chat input to a canned reply.
///
/// Resolution is total: every input yields a non-empty reply. It performs no
/// I/O and never mutates the knowledge base, so one resolver can serve
/// concurrent callers through a shared reference.
#[derive(Debug, Clone)]
pub struct Resolver {
    knowledge: KnowledgeBase,
    rules: Vec<Rule>,
    clock: Arc<dyn Clock>,
    format: TimeFormat,
}

impl Resolver {
    /// Create a resolver with the default rules and the system clock.
    #[must_use]
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self {
            knowledge,
            rules: default_rules(),
            clock: Arc::new(SystemClock),
            format: TimeFormat::default(),
        }
    }

    /// Replace the clock used by time and date replies.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the time and date format.
    #[must_use]
    pub fn with_format(mut self, format: TimeFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Resolve using the thread-local RNG.
    #[must_use]
    pub fn resolve(&self, input: &str) -> String {
        self.resolve_with(input, &mut rand::thread_rng())
    }

    /// Resolve drawing random picks from `rng`.
    pub fn resolve_with<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> String {
        self.resolve_detailed(input, rng).reply
    }

    /// Resolve and report which rule fired.
    pub fn resolve_detailed<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> Resolution {
        let utterance = Utterance::new(input);
        let ctx = ReplyContext {
            knowledge: &self.knowledge,
            now: self.clock.now(),
            format: &self.format,
        };

        for rule in &self.rules {
            if let Some(reply) = rule.fire(&utterance, &ctx, rng) {
                tracing::debug!(rule = ?rule.kind, input = %utterance.raw(), "Resolved local reply");
                return Resolution {
                    rule: rule.kind,
                    reply,
                };
            }
        }

        // Only reached when the rule list lacks a catch-all.
        Resolution {
            rule: RuleKind::Fallback,
            reply: FALLBACKS[rng.gen_range(0..FALLBACKS.len())].to_string(),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(KnowledgeBase::reference())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::resolver::{
        FixedClock, EMPTY_REPLY, FAREWELL_REPLY, GREETINGS, JOKES, MOOD_REPLIES, THANKS_REPLIES,
        WEATHER_REPLIES,
    };

    fn resolver() -> Resolver {
        let now = Local.with_ymd_and_hms(2024, 6, 1, 14, 30, 5).unwrap();
        Resolver::default().with_clock(FixedClock(now))
    }

    fn rule_for(input: &str) -> RuleKind {
        resolver()
            .resolve_detailed(input, &mut StdRng::seed_from_u64(1))
            .rule
    }

    #[test]
    fn test_empty_and_blank_input() {
        let r = resolver();
        assert_eq!(r.resolve(""), EMPTY_REPLY);
        assert_eq!(r.resolve("   "), EMPTY_REPLY);
    }

    #[test]
    fn test_byte_order_mark_counts_as_blank() {
        let r = resolver();
        assert_eq!(r.resolve("\u{FEFF}"), EMPTY_REPLY);
        assert_eq!(r.resolve(" \u{FEFF}\n"), EMPTY_REPLY);
    }

    #[test]
    fn test_exit_words_say_farewell() {
        let r = resolver();
        for word in ["exit", "quit", "bye", "拜拜", "QUIT"] {
            assert_eq!(r.resolve(word), FAREWELL_REPLY);
        }
    }

    #[test]
    fn test_time_reply_uses_clock() {
        let r = resolver();
        assert_eq!(r.resolve("时间"), "现在是 14:30:05 (日期: 2024/6/1)");
        assert_eq!(r.resolve("What TIME is it"), "现在是 14:30:05 (日期: 2024/6/1)");
    }

    #[test]
    fn test_date_reply_uses_clock() {
        let r = resolver();
        assert_eq!(r.resolve("今天日期"), "今天是 2024/6/1");
        assert_eq!(r.resolve("Date?"), "今天是 2024/6/1");
    }

    #[test]
    fn test_custom_format() {
        let r = resolver().with_format(TimeFormat {
            time: "%H:%M".to_string(),
            date: "%Y-%m-%d".to_string(),
        });
        assert_eq!(r.resolve("时间"), "现在是 14:30 (日期: 2024-06-01)");
    }

    #[test]
    fn test_random_picks_stay_in_their_sets() {
        let r = resolver();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert!(WEATHER_REPLIES.contains(&r.resolve_with("天气怎么样", &mut rng).as_str()));
            assert!(JOKES.contains(&r.resolve_with("讲个笑话", &mut rng).as_str()));
            assert!(MOOD_REPLIES.contains(&r.resolve_with("你开心吗", &mut rng).as_str()));
            assert!(THANKS_REPLIES.contains(&r.resolve_with("thanks!", &mut rng).as_str()));
            assert!(GREETINGS.contains(&r.resolve_with("Hello", &mut rng).as_str()));
            assert!(FALLBACKS.contains(&r.resolve_with("量子力学", &mut rng).as_str()));
        }
    }

    #[test]
    fn test_same_seed_gives_same_pick() {
        let r = resolver();
        let a = r.resolve_with("joke", &mut StdRng::seed_from_u64(9));
        let b = r.resolve_with("joke", &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_each_rule_is_reachable() {
        assert_eq!(rule_for(""), RuleKind::Empty);
        assert_eq!(rule_for("bye"), RuleKind::Farewell);
        assert_eq!(rule_for("时间"), RuleKind::Time);
        assert_eq!(rule_for("日期"), RuleKind::Date);
        assert_eq!(rule_for("温度"), RuleKind::Weather);
        assert_eq!(rule_for("joke"), RuleKind::Joke);
        assert_eq!(rule_for("心情"), RuleKind::Mood);
        assert_eq!(rule_for("谢谢"), RuleKind::Thanks);
        assert_eq!(rule_for("再来一个"), RuleKind::Another);
        assert_eq!(rule_for("你喜欢什么"), RuleKind::Favorite);
        assert_eq!(rule_for("嗨"), RuleKind::Greeting);
        assert_eq!(rule_for("你是谁"), RuleKind::Identity);
        assert_eq!(rule_for("帮助"), RuleKind::Help);
        assert_eq!(rule_for("健康提醒5"), RuleKind::Lookup);
        assert_eq!(rule_for("量子力学"), RuleKind::Fallback);
    }

    #[test]
    fn test_precedence_follows_rule_order() {
        // time beats weather and joke
        assert_eq!(rule_for("现在天气时间如何"), RuleKind::Time);
        assert_eq!(rule_for("joke time"), RuleKind::Time);
        // "update" contains "date"
        assert_eq!(rule_for("update"), RuleKind::Date);
        // thanks beats greeting
        assert_eq!(rule_for("你好，谢谢"), RuleKind::Thanks);
        // "再讲一个笑话" hits the joke rule before "another"
        assert_eq!(rule_for("再讲一个笑话"), RuleKind::Joke);
        assert_eq!(rule_for("who are you"), RuleKind::Identity);
        // "this" contains "hi"
        assert_eq!(rule_for("help me with this"), RuleKind::Greeting);
    }

    #[test]
    fn test_farewell_requires_exact_word() {
        assert_eq!(rule_for("bye now"), RuleKind::Fallback);
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trimmed() {
        let kb = KnowledgeBase::reference();
        let expected = kb.get("趣味问答4").unwrap().to_string();
        let r = Resolver::new(kb);
        assert_eq!(r.resolve("  趣味问答4 "), expected);
    }

    #[test]
    fn test_help_embeds_knowledge_size() {
        let r = resolver();
        assert!(r.resolve("help").contains("1100 条预置问答"));
    }

    #[test]
    fn test_missing_catch_all_still_answers() {
        let mut r = resolver();
        r.rules.truncate(1);
        let resolution = r.resolve_detailed("量子力学", &mut StdRng::seed_from_u64(3));
        assert_eq!(resolution.rule, RuleKind::Fallback);
        assert!(FALLBACKS.contains(&resolution.reply.as_str()));
    }
}
