//! Rule precedence tests.

use litechat::resolver::{Resolver, RuleKind, ANOTHER_REPLY, WEATHER_REPLIES};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rule_for(input: &str) -> RuleKind {
    Resolver::default()
        .resolve_detailed(input, &mut StdRng::seed_from_u64(0))
        .rule
}

#[test]
fn time_beats_weather() {
    assert_eq!(rule_for("现在天气时间如何"), RuleKind::Time);
    let reply = Resolver::default().resolve("现在天气时间如何");
    assert!(reply.starts_with("现在是 "));
    assert!(!WEATHER_REPLIES.contains(&reply.as_str()));
}

#[test]
fn time_beats_joke() {
    assert_eq!(rule_for("tell me a joke, what time is it"), RuleKind::Time);
}

#[test]
fn date_beats_weather() {
    assert_eq!(rule_for("日期和天气"), RuleKind::Date);
}

#[test]
fn weather_beats_greeting() {
    assert_eq!(rule_for("你好，今天天气"), RuleKind::Weather);
}

#[test]
fn farewell_beats_lookup_and_greeting() {
    assert_eq!(rule_for("BYE"), RuleKind::Farewell);
}

#[test]
fn lower_case_keywords_match_mixed_case_input() {
    assert_eq!(rule_for("WeAtHeR"), RuleKind::Weather);
    assert_eq!(rule_for("My FAVORITE thing"), RuleKind::Favorite);
    assert_eq!(rule_for("HELP"), RuleKind::Help);
}

#[test]
fn mixed_script_input_matches_both_sides() {
    assert_eq!(rule_for("Mood 心情"), RuleKind::Mood);
    assert_eq!(rule_for("THX 谢谢"), RuleKind::Thanks);
}

#[test]
fn another_phrase_only_matches_raw_text() {
    assert_eq!(rule_for("再说一个"), RuleKind::Another);
    assert_eq!(Resolver::default().resolve("再说一个"), ANOTHER_REPLY);
}

#[test]
fn greeting_matches_inside_words() {
    // containment, not whole-word: "this" contains "hi"
    assert_eq!(rule_for("this"), RuleKind::Greeting);
}

#[test]
fn keyword_rules_win_over_exact_lookup() {
    // knowledge key that also contains a keyword never reaches the lookup
    assert_eq!(rule_for("心情鼓励1"), RuleKind::Mood);
    assert_eq!(rule_for("心情鼓励"), RuleKind::Mood);
}

#[test]
fn unknown_text_falls_back() {
    assert_eq!(rule_for("量子纠缠"), RuleKind::Fallback);
}
