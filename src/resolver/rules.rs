//! Rule building blocks: triggers, replies and the default rule order.

use chrono::{DateTime, Local};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeBase;

use super::replies::{
    self, ANOTHER_KEYWORDS, ANOTHER_REPLY, DATE_KEYWORDS, DATE_KEYWORDS_RAW, EMPTY_REPLY,
    EXIT_WORDS, FALLBACKS, FAREWELL_REPLY, FAVORITE_KEYWORDS, FAVORITE_KEYWORDS_RAW,
    FAVORITE_REPLY, GREETINGS, GREETING_KEYWORDS, HELP_KEYWORDS, HELP_KEYWORDS_RAW,
    IDENTITY_KEYWORDS, IDENTITY_KEYWORDS_RAW, IDENTITY_REPLY, JOKES, JOKE_KEYWORDS,
    MOOD_KEYWORDS, MOOD_REPLIES, THANKS_KEYWORDS, THANKS_REPLIES, TIME_KEYWORDS,
    TIME_KEYWORDS_RAW, WEATHER_KEYWORDS, WEATHER_REPLIES,
};
use super::TimeFormat;

/// Strip leading and trailing whitespace the way browser input fields do:
/// U+FEFF counts as whitespace, U+0085 does not.
#[must_use]
pub fn trim_input(input: &str) -> &str {
    input.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
}

/// Trimmed chat input plus its lower-cased copy.
#[derive(Debug, Clone)]
pub struct Utterance<'a> {
    raw: &'a str,
    lower: String,
}

impl<'a> Utterance<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let raw = trim_input(input);
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }

    /// Trimmed text in its original case.
    #[must_use]
    pub fn raw(&self) -> &str {
        self.raw
    }

    /// Trimmed, lower-cased text.
    #[must_use]
    pub fn lower(&self) -> &str {
        &self.lower
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Check whether the input is one of the exit words.
#[must_use]
pub fn is_exit_word(input: &str) -> bool {
    Trigger::ExactWord(&EXIT_WORDS).matches(&Utterance::new(input))
}

/// Which step of the resolution order produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Empty,
    Farewell,
    Time,
    Date,
    Weather,
    Joke,
    Mood,
    Thanks,
    Another,
    Favorite,
    Greeting,
    Identity,
    Help,
    Lookup,
    Fallback,
}

/// Predicate half of a rule.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Trimmed input is empty.
    Empty,
    /// Lower-cased input equals one of the words.
    ExactWord(&'static [&'static str]),
    /// `raw` keywords are searched in the trimmed input, `lower` keywords in
    /// the lower-cased input. Either side matching fires the trigger.
    Contains {
        raw: &'static [&'static str],
        lower: &'static [&'static str],
    },
    Always,
}

impl Trigger {
    /// Same keyword set checked against both the raw and lower-cased text.
    #[must_use]
    pub const fn either(words: &'static [&'static str]) -> Self {
        Self::Contains {
            raw: words,
            lower: words,
        }
    }

    #[must_use]
    pub fn matches(&self, utterance: &Utterance<'_>) -> bool {
        match self {
            Self::Empty => utterance.is_empty(),
            Self::ExactWord(words) => words.iter().any(|w| *w == utterance.lower()),
            Self::Contains { raw, lower } => {
                raw.iter().any(|w| utterance.raw().contains(w))
                    || lower.iter().any(|w| utterance.lower().contains(w))
            }
            Self::Always => true,
        }
    }
}

/// Read-only state a reply may draw on.
#[derive(Debug, Clone, Copy)]
pub struct ReplyContext<'a> {
    pub knowledge: &'a KnowledgeBase,
    pub now: DateTime<Local>,
    pub format: &'a TimeFormat,
}

/// Producer half of a rule.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Fixed(&'static str),
    /// Uniform random pick among the candidates.
    Pick(&'static [&'static str]),
    CurrentTime,
    CurrentDate,
    /// Help text embedding the knowledge base size.
    Help,
    /// Exact knowledge base lookup. Declines on a miss.
    Lookup,
}

impl Reply {
    /// Render the reply, or `None` to pass control to the next rule.
    pub fn render<R: Rng + ?Sized>(
        &self,
        utterance: &Utterance<'_>,
        ctx: &ReplyContext<'_>,
        rng: &mut R,
    ) -> Option<String> {
        match self {
            Self::Fixed(text) => Some((*text).to_string()),
            Self::Pick(candidates) => candidates.choose(rng).map(|s| (*s).to_string()),
            Self::CurrentTime => Some(replies::time_reply(
                &ctx.format.format_time(&ctx.now),
                &ctx.format.format_date(&ctx.now),
            )),
            Self::CurrentDate => Some(replies::date_reply(&ctx.format.format_date(&ctx.now))),
            Self::Help => Some(replies::help_reply(ctx.knowledge.len())),
            Self::Lookup => ctx.knowledge.get(utterance.lower()).map(String::from),
        }
    }
}

/// A (trigger, reply) pair tagged with its place in the order.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: RuleKind,
    pub trigger: Trigger,
    pub reply: Reply,
}

impl Rule {
    #[must_use]
    pub const fn new(kind: RuleKind, trigger: Trigger, reply: Reply) -> Self {
        Self {
            kind,
            trigger,
            reply,
        }
    }

    /// Evaluate the rule against an utterance.
    pub fn fire<R: Rng + ?Sized>(
        &self,
        utterance: &Utterance<'_>,
        ctx: &ReplyContext<'_>,
        rng: &mut R,
    ) -> Option<String> {
        if !self.trigger.matches(utterance) {
            return None;
        }
        self.reply.render(utterance, ctx, rng)
    }
}

/// The resolution order. Earlier rules take precedence.
#[must_use]
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(RuleKind::Empty, Trigger::Empty, Reply::Fixed(EMPTY_REPLY)),
        Rule::new(
            RuleKind::Farewell,
            Trigger::ExactWord(&EXIT_WORDS),
            Reply::Fixed(FAREWELL_REPLY),
        ),
        Rule::new(
            RuleKind::Time,
            Trigger::Contains {
                raw: &TIME_KEYWORDS_RAW,
                lower: &TIME_KEYWORDS,
            },
            Reply::CurrentTime,
        ),
        Rule::new(
            RuleKind::Date,
            Trigger::Contains {
                raw: &DATE_KEYWORDS_RAW,
                lower: &DATE_KEYWORDS,
            },
            Reply::CurrentDate,
        ),
        Rule::new(
            RuleKind::Weather,
            Trigger::either(&WEATHER_KEYWORDS),
            Reply::Pick(&WEATHER_REPLIES),
        ),
        Rule::new(
            RuleKind::Joke,
            Trigger::either(&JOKE_KEYWORDS),
            Reply::Pick(&JOKES),
        ),
        Rule::new(
            RuleKind::Mood,
            Trigger::either(&MOOD_KEYWORDS),
            Reply::Pick(&MOOD_REPLIES),
        ),
        Rule::new(
            RuleKind::Thanks,
            Trigger::either(&THANKS_KEYWORDS),
            Reply::Pick(&THANKS_REPLIES),
        ),
        Rule::new(
            RuleKind::Another,
            Trigger::Contains {
                raw: &ANOTHER_KEYWORDS,
                lower: &[],
            },
            Reply::Fixed(ANOTHER_REPLY),
        ),
        Rule::new(
            RuleKind::Favorite,
            Trigger::Contains {
                raw: &FAVORITE_KEYWORDS_RAW,
                lower: &FAVORITE_KEYWORDS,
            },
            Reply::Fixed(FAVORITE_REPLY),
        ),
        Rule::new(
            RuleKind::Greeting,
            Trigger::either(&GREETING_KEYWORDS),
            Reply::Pick(&GREETINGS),
        ),
        Rule::new(
            RuleKind::Identity,
            Trigger::Contains {
                raw: &IDENTITY_KEYWORDS_RAW,
                lower: &IDENTITY_KEYWORDS,
            },
            Reply::Fixed(IDENTITY_REPLY),
        ),
        Rule::new(
            RuleKind::Help,
            Trigger::Contains {
                raw: &HELP_KEYWORDS_RAW,
                lower: &HELP_KEYWORDS,
            },
            Reply::Help,
        ),
        Rule::new(RuleKind::Lookup, Trigger::Always, Reply::Lookup),
        Rule::new(RuleKind::Fallback, Trigger::Always, Reply::Pick(&FALLBACKS)),
    ]
}
