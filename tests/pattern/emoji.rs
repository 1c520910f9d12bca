use std::collections::HashMap;

use pretty_assertions::assert_eq;
use taiko_pattern::pattern::prelude::*;

#[test]
fn message_from_pattern() {
    let tokens = compile("(kdk) k").unwrap();
    assert_eq!(
        render_message(&tokens, &NoEmojis, DISCORD_MESSAGE_LIMIT).unwrap(),
        ":1k6d::6d6k::6k1::bk::1k:\u{200b}"
    );
}

#[test]
fn custom_emojis_by_label() {
    let mut emojis = HashMap::new();
    emojis.insert("1d".to_owned(), "<:1d:1>".to_owned());
    let tokens = compile("dkd").unwrap();
    let message = render_message(&tokens, &emojis, DISCORD_MESSAGE_LIMIT).unwrap();
    assert_eq!(message, "<:1d:1>:1k:<:1d:1>\u{200b}");
    assert!(message.ends_with(MESSAGE_TERMINATOR));
}

#[test]
fn message_limit() {
    let tokens = compile("kd").unwrap();
    assert_eq!(
        render_message(&tokens, &NoEmojis, 8),
        Err(PatternError::OutputTooLarge { count: 9, limit: 8 })
    );
    assert!(render_message(&tokens, &NoEmojis, 9).is_ok());
}

#[test]
fn asset_paths() {
    let paths: Vec<_> = compile("[kd]")
        .unwrap()
        .iter()
        .map(|token| token.asset_path("patterns"))
        .collect();
    assert_eq!(
        paths,
        vec![
            std::path::PathBuf::from("patterns/1k8d.png"),
            std::path::PathBuf::from("patterns/8d.png"),
        ]
    );
}
