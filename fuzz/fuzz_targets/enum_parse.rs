#![no_main]

use libfuzzer_sys::fuzz_target;
use primext::{enumeration, has_enum_value, parse_enum, to_enum, to_flag_list, Enumeration};

const MAX_INPUT_BYTES: usize = 1024;

enumeration! {
    enum Color: i16 {
        Undefined = 0,
        Red = 1,
        Green = 2,
        Blue = 4,
    }
}

enumeration! {
    struct Access: u8 {
        const NONE = 0;
        const READ = 1;
        const WRITE = 2;
        const READ_WRITE = 3;
    }
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let ignore_case = data[0] & 1 == 1;
    let capped = &data[1..data.len().min(MAX_INPUT_BYTES)];
    let text = String::from_utf8_lossy(capped);

    if let Ok(color) = to_enum::<Color>(&*text, None, ignore_case) {
        assert!(color.name().is_some());
    }
    let _ = has_enum_value::<Access>(&*text, ignore_case);

    if let Ok(access) = to_enum::<Access>(&*text, None, ignore_case) {
        assert!(access.name().is_some());
    }

    if let Some(access) = parse_enum::<Access>(&text, ignore_case) {
        let declared = Access::MEMBERS
            .iter()
            .fold(Access::empty(), |acc, member| acc | member.value());
        let recombined = to_flag_list(access)
            .into_iter()
            .fold(Access::empty(), |acc, flag| acc | flag);
        assert_eq!(recombined, access & declared);
    }

    let raw = i64::from_le_bytes(std::array::from_fn(|idx| {
        capped.get(idx).copied().unwrap_or(0)
    }));
    let _ = to_enum::<Color>(raw, Some(Color::Undefined), false);
    if let Ok(access) = to_enum::<Access>(raw, None, false) {
        assert!(access.name().is_some());
    }
});
