//! Bounds-checked read/write cursors over fixed little-endian layouts.
//!
//! [`SliceCursor`] reads typed fields sequentially from account or
//! instruction data; [`DataWriter`] writes them when initializing a
//! layout. Every access is bounds-checked — a short buffer yields
//! `AccountDataTooSmall`, never a panic. Field order must match the
//! layout comment next to the owning struct; that is the only footgun.

use crate::address::{Address, ADDRESS_LEN};
use crate::error::EscrowError;

/// Read cursor over a byte slice.
pub struct SliceCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes remaining from the current position.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, EscrowError> {
        if self.pos >= self.data.len() {
            return Err(EscrowError::AccountDataTooSmall);
        }
        let val = self.data[self.pos];
        self.pos += 1;
        Ok(val)
    }

    #[inline]
    pub fn read_u64(&mut self) -> Result<u64, EscrowError> {
        let end = self.pos + 8;
        if end > self.data.len() {
            return Err(EscrowError::AccountDataTooSmall);
        }
        let val = u64::from_le_bytes(self.data[self.pos..end].try_into().unwrap());
        self.pos = end;
        Ok(val)
    }

    #[inline]
    pub fn read_address(&mut self) -> Result<Address, EscrowError> {
        let end = self.pos + ADDRESS_LEN;
        if end > self.data.len() {
            return Err(EscrowError::AccountDataTooSmall);
        }
        let arr: [u8; ADDRESS_LEN] = self.data[self.pos..end].try_into().unwrap();
        self.pos = end;
        Ok(arr.into())
    }
}

/// Write cursor over a mutable byte slice. All writes are little-endian.
pub struct DataWriter<'a> {
    data: &'a mut [u8],
    pos: usize,
}

impl<'a> DataWriter<'a> {
    #[inline]
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn written(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn write_u8(&mut self, val: u8) -> Result<(), EscrowError> {
        if self.pos >= self.data.len() {
            return Err(EscrowError::AccountDataTooSmall);
        }
        self.data[self.pos] = val;
        self.pos += 1;
        Ok(())
    }

    #[inline]
    pub fn write_u64(&mut self, val: u64) -> Result<(), EscrowError> {
        let end = self.pos + 8;
        if end > self.data.len() {
            return Err(EscrowError::AccountDataTooSmall);
        }
        self.data[self.pos..end].copy_from_slice(&val.to_le_bytes());
        self.pos = end;
        Ok(())
    }

    #[inline]
    pub fn write_address(&mut self, addr: &Address) -> Result<(), EscrowError> {
        let end = self.pos + ADDRESS_LEN;
        if end > self.data.len() {
            return Err(EscrowError::AccountDataTooSmall);
        }
        self.data[self.pos..end].copy_from_slice(addr.as_ref());
        self.pos = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_past_end_fails_without_panicking() {
        let mut cur = SliceCursor::new(&[1, 2, 3]);
        assert_eq!(cur.read_u8(), Ok(1));
        assert_eq!(cur.read_u64(), Err(EscrowError::AccountDataTooSmall));
        assert_eq!(cur.remaining(), 2);
    }

    #[test]
    fn write_then_read_round_trips_field_order() {
        let addr = Address::new_from_array([5; ADDRESS_LEN]);
        let mut buf = [0u8; 41];
        let mut w = DataWriter::new(&mut buf);
        w.write_u8(7).unwrap();
        w.write_u64(123_456).unwrap();
        w.write_address(&addr).unwrap();
        assert_eq!(w.written(), 41);

        let mut cur = SliceCursor::new(&buf);
        assert_eq!(cur.read_u8().unwrap(), 7);
        assert_eq!(cur.read_u64().unwrap(), 123_456);
        assert_eq!(cur.read_address().unwrap(), addr);
    }

    #[test]
    fn write_past_end_fails() {
        let mut buf = [0u8; 4];
        let mut w = DataWriter::new(&mut buf);
        assert_eq!(w.write_u64(1), Err(EscrowError::AccountDataTooSmall));
    }
}
