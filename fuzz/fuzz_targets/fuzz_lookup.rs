#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use worksearch::index::{extract, Corpus, SuffixArrayBuilder};

#[derive(Arbitrary, Debug)]
struct Input {
    text: Vec<u8>,
    pattern: Vec<u8>,
    limit: Option<u8>,
    window: u16,
}

fuzz_target!(|input: Input| {
    let corpus = Corpus::from_bytes(input.text.clone());
    let sa = SuffixArrayBuilder::with_defaults().build(&corpus);
    let text = &input.text;
    let pattern = &input.pattern;

    let all = sa.lookup(pattern, None);
    for &i in &all {
        assert_eq!(&text[i..i + pattern.len()], &pattern[..]);
        // Snippets never panic, whatever the window
        let _ = extract(text, i, pattern.len(), input.window as usize);
    }

    let expected = if pattern.is_empty() || pattern.len() > text.len() {
        0
    } else {
        text.windows(pattern.len()).filter(|w| w == pattern).count()
    };
    assert_eq!(all.len(), expected);

    if let Some(k) = input.limit {
        let limited = sa.lookup(pattern, Some(k as usize));
        assert!(limited.len() <= k as usize);
        assert!(limited.iter().all(|o| all.contains(o)));
    }
});
