//! Resolver behaviour tests.

mod precedence_test;
mod properties_test;

/// Verify the public resolver types are exported from the library.
#[test]
fn test_resolver_types_exported() {
    use litechat::knowledge::{Family, KnowledgeBase, KnowledgeBounds};
    use litechat::resolver::{
        default_rules, is_exit_word, Clock, FixedClock, Reply, Resolution, Resolver, Rule,
        RuleKind, SystemClock, TimeFormat, Trigger, Utterance,
    };

    let kb = KnowledgeBase::build(&KnowledgeBounds::default());
    let resolver = Resolver::new(kb).with_clock(FixedClock(SystemClock.now()));
    assert_eq!(resolver.rules().len(), default_rules().len());

    let _ = Rule::new(RuleKind::Fallback, Trigger::Always, Reply::Fixed("x"));
    let _ = Utterance::new("x");
    let _ = TimeFormat::default();
    let _ = Family::ALL;
    let _: fn(&str) -> bool = is_exit_word;
    let _ = Resolution {
        rule: RuleKind::Empty,
        reply: String::new(),
    };
}
