//! Fixed-layout value types shared with native consumers.
//!
//! Neither type carries arithmetic. `Fixed16` only fixes the representation of a
//! 16.16 fixed-point number, and `DLong` reproduces an 8-byte union that code
//! elsewhere uses to reinterpret the same bits as integers, a double or a float.

use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem::{align_of, size_of};

use crate::vector::{Vec3, Vec4};

/// 16.16 fixed-point value stored as a raw `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Fixed16(i32);

impl Fixed16 {
    /// Wrap raw 16.16 bits.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        Fixed16(raw)
    }

    /// Raw 16.16 bits.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for Fixed16 {
    fn from(raw: i32) -> Self {
        Fixed16(raw)
    }
}

impl From<Fixed16> for i32 {
    fn from(value: Fixed16) -> Self {
        value.0
    }
}

/// Eight bytes of storage readable as `[i32; 2]`, `f64` or `f32`.
///
/// Views alias exactly like a C union in native byte order:
/// - `f64` covers all 8 bytes
/// - `ints()[0]` and `f32` share bytes `0..4`
/// - writing the `f32` view leaves bytes `4..8` untouched
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C, align(8))]
pub struct DLong {
    bytes: [u8; 8],
}

impl DLong {
    /// All-zero cell.
    #[inline]
    #[must_use]
    pub const fn zeroed() -> Self {
        DLong { bytes: [0; 8] }
    }

    /// Cell holding exactly these bytes.
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        DLong { bytes }
    }

    /// Raw storage.
    #[inline]
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 8] {
        self.bytes
    }

    /// Cell written through the integer-pair view.
    #[inline]
    #[must_use]
    pub fn from_ints(ints: [i32; 2]) -> Self {
        DLong {
            bytes: bytemuck::cast(ints),
        }
    }

    /// Cell written through the `f64` view.
    #[inline]
    #[must_use]
    pub fn from_double(value: f64) -> Self {
        DLong {
            bytes: bytemuck::cast(value),
        }
    }

    /// Cell written through the `f32` view; the upper four bytes are zero.
    #[inline]
    #[must_use]
    pub fn from_float(value: f32) -> Self {
        let mut cell = Self::zeroed();
        cell.set_float(value);
        cell
    }

    /// Read as two `i32`.
    #[inline]
    pub fn ints(&self) -> [i32; 2] {
        bytemuck::cast(self.bytes)
    }

    /// Overwrite all 8 bytes with two `i32`.
    #[inline]
    pub fn set_ints(&mut self, ints: [i32; 2]) {
        self.bytes = bytemuck::cast(ints);
    }

    /// Read as `f64`.
    #[inline]
    pub fn double(&self) -> f64 {
        bytemuck::cast(self.bytes)
    }

    /// Overwrite all 8 bytes with an `f64`.
    #[inline]
    pub fn set_double(&mut self, value: f64) {
        self.bytes = bytemuck::cast(value);
    }

    /// Read the first four bytes as `f32`.
    #[inline]
    pub fn float(&self) -> f32 {
        bytemuck::pod_read_unaligned(&self.bytes[..4])
    }

    /// Overwrite the first four bytes with an `f32`.
    #[inline]
    pub fn set_float(&mut self, value: f32) {
        self.bytes[..4].copy_from_slice(bytemuck::bytes_of(&value));
    }
}

impl fmt::Debug for DLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DLong")
            .field("ints", &self.ints())
            .field("double", &self.double())
            .field("float", &self.float())
            .finish()
    }
}

// Layout checks for the shapes native consumers rely on.
const _: () = assert!(size_of::<Vec3>() == 12);
const _: () = assert!(size_of::<Vec4>() == 16);
const _: () = assert!(size_of::<Fixed16>() == 4);
const _: () = assert!(size_of::<DLong>() == 8);
const _: () = assert!(align_of::<DLong>() == align_of::<f64>());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::byte_swap;

    #[test]
    fn test_fixed16_raw_roundtrip() {
        let one = Fixed16::from_raw(0x0001_0000);
        assert_eq!(one.raw(), 65536);
        assert_eq!(i32::from(Fixed16::from(-1)), -1);
        assert_eq!(Fixed16::default().raw(), 0);
    }

    #[test]
    fn test_fixed16_byte_swap() {
        let value = Fixed16::from_raw(0x12345678);
        assert_eq!(byte_swap(value).raw(), 0x78563412);
    }

    #[test]
    fn test_dlong_double_view() {
        let cell = DLong::from_double(1.5);
        assert_eq!(cell.double(), 1.5);
        assert_eq!(cell.to_bytes(), 1.5_f64.to_ne_bytes());
    }

    #[test]
    fn test_dlong_ints_alias_double() {
        let cell = DLong::from_double(-2.0);
        let bits = (-2.0_f64).to_bits().to_ne_bytes();
        let lo = i32::from_ne_bytes([bits[0], bits[1], bits[2], bits[3]]);
        let hi = i32::from_ne_bytes([bits[4], bits[5], bits[6], bits[7]]);
        assert_eq!(cell.ints(), [lo, hi]);
    }

    #[test]
    fn test_dlong_float_shares_first_int() {
        let mut cell = DLong::from_ints([0, 0x7eadbeef]);
        cell.set_float(1.0);

        assert_eq!(cell.float(), 1.0);
        assert_eq!(cell.ints()[0], i32::from_ne_bytes(1.0_f32.to_ne_bytes()));
        assert_eq!(cell.ints()[1], 0x7eadbeef); // upper half untouched
    }

    #[test]
    fn test_dlong_from_float_zeroes_upper_half() {
        let cell = DLong::from_float(-3.25);
        assert_eq!(cell.float(), -3.25);
        assert_eq!(cell.ints()[1], 0);
    }

    #[test]
    fn test_dlong_set_ints_then_double() {
        let mut cell = DLong::zeroed();
        cell.set_double(f64::INFINITY);
        assert!(cell.double().is_infinite());

        cell.set_ints([0, 0]);
        assert_eq!(cell.double(), 0.0);
    }

    #[test]
    fn test_dlong_nan_bits_preserved() {
        let payload = f64::from_bits(0x7ff8_0000_dead_beef);
        let cell = DLong::from_double(payload);
        assert_eq!(cell.double().to_bits(), 0x7ff8_0000_dead_beef);
    }
}
