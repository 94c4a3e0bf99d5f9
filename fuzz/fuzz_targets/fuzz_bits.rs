#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seedphrase_codec::bits::{read11, write11, BITS_PER_WORD};

#[derive(Debug, Arbitrary)]
struct Input {
    buffer: Vec<u8>,
    value: u16,
    offset: u16,
}

fuzz_target!(|input: Input| {
    let mut buffer = input.buffer;
    let offset = usize::from(input.offset);
    if offset + BITS_PER_WORD > buffer.len() * 8 {
        return;
    }
    // Writing back what is already there changes nothing.
    let before = read11(&buffer, offset);
    write11(&mut buffer, before, offset);
    assert_eq!(read11(&buffer, offset), before);

    let value = input.value & 0x7FF;
    write11(&mut buffer, value, offset);
    // OR semantics: every bit of `value` ends up set.
    assert_eq!(read11(&buffer, offset) & value, value);
});
