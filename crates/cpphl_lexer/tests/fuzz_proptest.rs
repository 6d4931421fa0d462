use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use cpphl_lexer::{classify, highlight};
use cpphl_syntax::CategoryScheme;

fn any_source() -> impl Strategy<Value = String> {
    let ascii = proptest::collection::vec(any::<char>().prop_filter("ascii", char::is_ascii), 0..400)
        .prop_map(|v| v.into_iter().collect::<String>());
    let unicode = proptest::collection::vec(any::<char>(), 0..100)
        .prop_map(|v| v.into_iter().collect::<String>());
    let sym = "[[ ]] R\"x( )x\" \" ' \\ // /* */ # \n u8\" L' 0x 0b 1e+ ".to_string();
    (ascii, unicode, any::<bool>()).prop_map(move |(a, b, f)| {
        let mut s = String::new();
        s.push_str(&a);
        if f {
            s.push_str(&sym);
        }
        s.push_str(&b);
        s
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2048, max_shrink_iters: 2000, .. ProptestConfig::default()
    })]
    #[test]
    fn scan_random_input_should_not_panic(s in any_source()) {
        for scheme in CategoryScheme::ALL {
            let classified = classify(&s, scheme);
            let covered: usize = classified.fragments.iter().map(|f| f.text.len()).sum();
            assert_eq!(covered, s.len());
        }
        // Markup never shrinks below the source size.
        assert!(highlight(&s).len() >= s.len());
    }
}
