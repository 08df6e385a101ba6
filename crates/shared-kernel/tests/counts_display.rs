// crates/shared-kernel/tests/counts_display.rs
use precompiler_shared_kernel::{ByteSize, LineCount};

#[test]
fn bytesize_of_slice() {
    assert_eq!(ByteSize::of(b"int x;\n"), ByteSize::new(7));
    assert_eq!(ByteSize::of(b"").bytes(), 0);
    assert_eq!(ByteSize::default(), ByteSize::zero());
}

#[test]
fn display_is_plain_number_and_honours_width() {
    assert_eq!(ByteSize::from(2048).to_string(), "2048");
    assert_eq!(LineCount::from(12).to_string(), "12");
    assert_eq!(format!("|{:<5}|", LineCount::new(3)), "|3    |");
}
