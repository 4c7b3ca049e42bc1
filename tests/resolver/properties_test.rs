//! Behavioural properties of the local resolver.

use chrono::{Local, TimeZone};
use litechat::knowledge::KnowledgeBase;
use litechat::resolver::{
    Clock, FixedClock, Resolver, SystemClock, TimeFormat, EMPTY_REPLY, FALLBACKS, FAREWELL_REPLY,
    JOKES,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn every_input_gets_a_non_empty_reply() {
    let resolver = Resolver::default();
    let mut rng = StdRng::seed_from_u64(11);
    let inputs = [
        "a",
        "   x   ",
        "🙂",
        "学习建议",
        "学习建议0",
        "WHO ARE YOU",
        "\n\t",
        "很长的一句话没有任何关键词只是随便说说而已",
        "0123456789",
    ];
    for input in inputs {
        assert!(!resolver.resolve_with(input, &mut rng).is_empty(), "{input:?}");
    }
}

#[test]
fn empty_and_blank_inputs_share_reply() {
    let resolver = Resolver::default();
    assert_eq!(resolver.resolve(""), EMPTY_REPLY);
    assert_eq!(resolver.resolve("   "), EMPTY_REPLY);
    assert_eq!(resolver.resolve(""), resolver.resolve("   "));
}

#[test]
fn exit_words_return_farewell() {
    let resolver = Resolver::default();
    for word in ["exit", "quit", "bye"] {
        assert_eq!(resolver.resolve(word), FAREWELL_REPLY);
    }
}

#[test]
fn time_reply_contains_current_minute() {
    let format = TimeFormat::default();
    let resolver = Resolver::default();
    // Retry once in case the minute rolls over between reads.
    for _ in 0..2 {
        let before = SystemClock.now();
        let reply = resolver.resolve("时间");
        let after = SystemClock.now();
        let minute = format.format_time(&before)[..5].to_string();
        if before.format("%H:%M").to_string() == after.format("%H:%M").to_string() {
            assert!(reply.contains(&minute), "{reply} should contain {minute}");
            return;
        }
    }
    panic!("clock kept rolling over");
}

#[test]
fn time_reply_with_fixed_clock() {
    let now = Local.with_ymd_and_hms(2025, 12, 31, 23, 59, 58).unwrap();
    let resolver = Resolver::default().with_clock(FixedClock(now));
    assert_eq!(resolver.resolve("时间"), "现在是 23:59:58 (日期: 2025/12/31)");
}

#[test]
fn exact_lookup_is_idempotent() {
    let resolver = Resolver::default();
    let expected = "学习建议1：今天完成一个小目标，例如复习 2 个知识点。";
    assert_eq!(resolver.resolve("学习建议1"), expected);
    assert_eq!(resolver.resolve("学习建议1"), expected);
}

#[test]
fn joke_is_always_from_joke_set() {
    let resolver = Resolver::default();
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..50 {
        let reply = resolver.resolve_with("笑话", &mut rng);
        assert!(JOKES.contains(&reply.as_str()), "{reply}");
    }
}

#[test]
fn out_of_range_key_falls_back() {
    let kb = KnowledgeBase::reference();
    assert_eq!(kb.len(), 1100);
    assert!(kb.get("学习建议9999").is_none());

    let resolver = Resolver::new(kb);
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..10 {
        let reply = resolver.resolve_with("学习建议9999", &mut rng);
        assert!(FALLBACKS.contains(&reply.as_str()), "{reply}");
    }
}

#[test]
fn resolver_is_shareable_across_threads() {
    let resolver = std::sync::Arc::new(Resolver::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let resolver = std::sync::Arc::clone(&resolver);
            std::thread::spawn(move || resolver.resolve(&format!("编程提示{}", i + 1)))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let reply = handle.join().unwrap();
        assert!(reply.starts_with(&format!("编程提示{}：", i + 1)));
    }
}
