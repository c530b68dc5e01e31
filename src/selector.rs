//! Bit-window trait selection.
//!
//! Mirrors the seeder contract's `uint48(pseudorandomness >> offset) % count`: shift right,
//! keep the low `width` bits, reduce modulo the option count. Everything stays in `U256`
//! until the remainder, which is below the cardinality and therefore fits in a `u64`.

use primitive_types::U256;
use crate::{errors::SeederError, types::{Digest, DEFAULT_FIELD_WIDTH, DIGEST_BITS}};

/// `(offset, width)` slice of the digest feeding one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitWindow {
    pub offset: u32,
    pub width: u32,
}

impl BitWindow {
    /// Window of the reference width at `offset`.
    #[must_use]
    pub const fn at(offset: u32) -> Self {
        Self { offset, width: DEFAULT_FIELD_WIDTH }
    }

    /// # Errors
    ///
    /// `WindowOutOfRange` if the window is empty or extends past bit 255.
    pub fn validate(&self) -> Result<(), SeederError> {
        if self.width == 0 || self.width > DIGEST_BITS || self.offset > DIGEST_BITS - self.width {
            return Err(SeederError::WindowOutOfRange { offset: self.offset, width: self.width });
        }
        Ok(())
    }

    /// One past the highest bit the window reads.
    #[must_use]
    pub const fn end(&self) -> u32 {
        self.offset.saturating_add(self.width)
    }

    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }
}

#[inline]
fn low_mask(width: u32) -> U256 {
    if width >= DIGEST_BITS {
        U256::MAX
    } else {
        (U256::one() << width) - U256::one()
    }
}

/// `uintW(value >> shift)`: drop the low `shift` bits, keep the low `width` bits of what remains.
#[must_use]
pub fn shift_right_and_cast(value: U256, shift: u32, width: u32) -> U256 {
    if shift >= DIGEST_BITS {
        return U256::zero();
    }
    (value >> shift) & low_mask(width)
}

/// Select an index in `[0, cardinality)` from the `(bit_offset, field_width)` window of `digest`.
///
/// # Errors
///
/// `ZeroCardinality` if `cardinality == 0`; `WindowOutOfRange` if the window is empty or
/// `bit_offset + field_width > 256`.
pub fn select_index(
    digest: &Digest,
    cardinality: u64,
    bit_offset: u32,
    field_width: u32,
) -> Result<u64, SeederError> {
    if cardinality == 0 {
        return Err(SeederError::ZeroCardinality { category: None });
    }
    BitWindow { offset: bit_offset, width: field_width }.validate()?;
    let field = shift_right_and_cast(digest.as_u256(), bit_offset, field_width);
    let index = field % U256::from(cardinality);
    Ok(index.low_u64())
}

/// [`select_index`] with the reference 48-bit field.
///
/// # Errors
///
/// See [`select_index`].
pub fn select_index_default(digest: &Digest, cardinality: u64, bit_offset: u32) -> Result<u64, SeederError> {
    select_index(digest, cardinality, bit_offset, DEFAULT_FIELD_WIDTH)
}
