use pretty_assertions::assert_eq;
use taiko_pattern::pattern::prelude::*;

#[test]
fn empty_group_as_rest() {
    let config = default_config().empty_group(EmptyGroupWorkaround::Rest);
    assert_eq!(
        compile_with_config("k()[]d", &config).unwrap(),
        vec![
            NoteToken::on_beat("1k"),
            NoteToken::rest(),
            NoteToken::rest(),
            NoteToken::on_beat("1d"),
        ]
    );
    assert_eq!(measure("k()[]d", &config), Ok(4));
}

#[test]
fn max_tokens() {
    let config = default_config().max_tokens(4);
    // (kdkd) is 3 tokens, plus one.
    assert_eq!(compile_with_config("(kdkd)k", &config).unwrap().len(), 4);

    let err = compile_with_config("(kdkd)kd", &config).unwrap_err();
    assert_eq!(
        err.content(),
        &PatternError::OutputTooLarge { count: 5, limit: 4 }
    );
    assert_eq!(err.as_span(), (0, 8));
}

#[test]
fn validation_comes_before_the_limit() {
    let config = default_config().max_tokens(1);
    assert_eq!(
        compile_with_config("kkkkx", &config).unwrap_err().into_content(),
        PatternError::InvalidCharacter('x')
    );
}

#[test]
fn unlimited() {
    let config = default_config().max_tokens(1).unlimited();
    assert_eq!(config, default_config());
    assert_eq!(compile_with_config("kkkk", &config).unwrap().len(), 4);
}

#[test]
fn measure_does_not_apply_the_limit() {
    let config = default_config().max_tokens(1);
    assert_eq!(measure("[kdkdkd]", &config), Ok(4));
    assert_eq!(
        measure("[kd", &config).unwrap_err().into_content(),
        PatternError::UnbalancedCounts
    );
}
