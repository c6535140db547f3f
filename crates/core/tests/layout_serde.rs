#![cfg(feature = "serde")]

use mathlib_core::{DLong, Fixed16};

#[test]
fn fixed16_serializes_as_raw_integer() {
    let value = Fixed16::from_raw(0x0001_8000);
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, "98304");

    let back: Fixed16 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn dlong_serialization_keeps_every_view() {
    let mut cell = DLong::from_double(123.456);
    cell.set_float(-1.0);

    let json = serde_json::to_string(&cell).unwrap();
    let back: DLong = serde_json::from_str(&json).unwrap();

    assert_eq!(back.to_bytes(), cell.to_bytes());
    assert_eq!(back.float(), -1.0);
    assert_eq!(back.ints(), cell.ints());
}
