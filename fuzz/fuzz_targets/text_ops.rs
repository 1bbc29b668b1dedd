#![no_main]

use libfuzzer_sys::fuzz_target;
use primext::{StrExt, ToBool};

const MAX_INPUT_BYTES: usize = 4096;

fn decode_input(bytes: &[u8]) -> String {
    let capped = &bytes[..bytes.len().min(MAX_INPUT_BYTES)];
    String::from_utf8_lossy(capped).into_owned()
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let split = usize::from(data[0]) % data.len();
    let text = decode_input(&data[1..=split]);
    let prefix = decode_input(&data[split + 1..]);
    let ignore_case = data[0] & 1 == 1;

    let _ = text.as_str().to_bool();
    let _ = text.to_lower_with_title_case();

    let stripped = text.remove_digits();
    assert!(stripped.positive_digit_runs().next().is_none());

    let digits = text.to_positive_digits("");
    let joined: String = text.positive_digit_runs().collect();
    if !text.is_blank() {
        assert_eq!(digits, joined);
    }

    let latin = text.to_similar_latin_letters();
    let _ = latin.to_similar_ru_letters();
    if !text.has_non_latin_chars() {
        assert_eq!(latin, text);
    }

    let _ = text.starts_with_ru_en(&prefix, ignore_case);
    if !text.is_empty() {
        assert!(!text.starts_with_ru_en("", ignore_case));
    }
});
