#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // An in-memory slice never fails to read, so any bytes must parse
    let works = worksearch::toc::parse_toc(data).expect("slice reads cannot fail");
    for (title, entries) in works.iter() {
        assert!(!title.is_empty());
        assert_eq!(title, title.trim());
        assert!(entries.is_empty());
    }
});
