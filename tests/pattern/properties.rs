use taiko_pattern::pattern::prelude::*;

const SAMPLES: &[&str] = &[
    "",
    "k",
    "kd dk",
    "(kd)",
    "(dkdkd)(kdkdk)(dkdkdk)(kdkdkd)(dkdkdkd)(kdkdkdk)",
    "[dkdkd][kdkdkd] [k]",
    "(kkkdddk)kdd(kkkd)d[kkd]d k",
    "( k )[ d ]",
];

#[test]
fn plain_notes_are_one_cell_each() {
    for src in ["", "k", "dd kk", "  ", "kdkdkdkdkd   dkdk"] {
        let tokens = compile(src).unwrap();
        assert_eq!(tokens.len(), src.len(), "{src:?}");
        for (token, c) in tokens.iter().zip(src.chars()) {
            assert!(token.is_on_beat());
            let expected = if c == ' ' {
                REST_LABEL.to_owned()
            } else {
                format!("1{c}")
            };
            assert_eq!(token.label(), expected);
        }
    }
}

#[test]
fn segments_consume_every_symbol() {
    for src in SAMPLES {
        let symbols = lex(src).unwrap();
        let consumed: usize = Segments::new(&symbols)
            .map(|segment| segment.unwrap().len())
            .sum();
        assert_eq!(consumed, src.chars().count(), "{src:?}");
    }
}

#[test]
fn measure_agrees_with_compile() {
    let config = default_config();
    for src in SAMPLES {
        assert_eq!(
            measure(src, &config).unwrap(),
            compile(src).unwrap().len(),
            "{src:?}"
        );
    }
}

#[test]
fn offsets_come_from_a_fixed_set() {
    for src in SAMPLES {
        for token in compile(src).unwrap() {
            assert!(
                [ON_BEAT, ONE_THIRD, TWO_THIRDS, ONE_HALF].contains(&token.offset()),
                "{src:?}: {token}"
            );
        }
    }
}

#[test]
fn labels_use_the_cell_alphabet() {
    for src in SAMPLES {
        for token in compile(src).unwrap() {
            let label = token.label();
            assert!(
                label == REST_LABEL || label.chars().all(|c| "1268kd ".contains(c)),
                "{src:?}: {label:?}"
            );
        }
    }
}

#[test]
fn compile_is_pure() {
    for src in SAMPLES {
        assert_eq!(compile(src), compile(src));
    }
}

#[test]
fn validity_matches_compile() {
    for src in SAMPLES.iter().chain(&["((", "))", "(kd", "kx", "(k[d])"]) {
        assert_eq!(is_valid(src), compile(src).is_ok(), "{src:?}");
    }
}
