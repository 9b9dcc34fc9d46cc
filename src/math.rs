use crate::error::EscrowError;

/// Checked u64 addition: returns `ArithmeticOverflow` on overflow.
#[inline]
pub fn checked_add(a: u64, b: u64) -> Result<u64, EscrowError> {
    a.checked_add(b).ok_or(EscrowError::ArithmeticOverflow)
}

/// Checked u64 subtraction: returns `ArithmeticOverflow` on underflow.
#[inline]
pub fn checked_sub(a: u64, b: u64) -> Result<u64, EscrowError> {
    a.checked_sub(b).ok_or(EscrowError::ArithmeticOverflow)
}
