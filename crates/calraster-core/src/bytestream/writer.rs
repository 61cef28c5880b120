/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::mem::size_of;

use crate::bytestream::{ByteIoError, ByteSink};

/// Encapsulates a simple byte writer with
/// support for endian aware writes
pub struct ByteWriter<T: ByteSink> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ByteSink> ByteWriter<T> {
    /// Create a new writer that writes to `sink`
    pub fn new(sink: T) -> ByteWriter<T> {
        ByteWriter {
            buffer:        sink,
            bytes_written: 0
        }
    }

    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use calraster_core::bytestream::ByteWriter;
    /// let mut out = vec![];
    /// let mut stream = ByteWriter::new(&mut out);
    /// stream.write_u32_le_err(10).unwrap();
    /// assert_eq!(stream.bytes_written(), 4);
    /// ```
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Hint the sink about the total size we are about to write
    pub fn reserve(&mut self, additional: usize) -> Result<(), ByteIoError> {
        self.buffer.reserve_capacity(additional)
    }

    /// Write all of `buf` or error out
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.buffer.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }

    /// Write a fixed size array, letting the sink optimize the copy
    pub fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.buffer.write_const_bytes(buf)?;
        self.bytes_written += N;
        Ok(())
    }

    /// Write `count` zero bytes, used for alignment padding
    pub fn write_zeros(&mut self, count: usize) -> Result<(), ByteIoError> {
        const ZEROS: [u8; 8] = [0; 8];

        let mut remaining = count;

        while remaining > 0 {
            let chunk = remaining.min(ZEROS.len());
            self.write_all(&ZEROS[..chunk])?;
            remaining -= chunk;
        }
        Ok(())
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<(), ByteIoError> {
        self.buffer.flush_bytes()
    }
}

macro_rules! write_single_type {
    ($name:tt,$int_type:tt) => {
        impl<T: ByteSink> ByteWriter<T> {
            #[doc=concat!("Write ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying sink cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name(&mut self, byte: $int_type) -> Result<(), ByteIoError> {
                const SIZE: usize = size_of::<$int_type>();

                let bytes: [u8; SIZE] = byte.to_le_bytes();

                self.write_const_bytes(&bytes)
            }
        }
    };
}

write_single_type!(write_u16_le_err, u16);

write_single_type!(write_u32_le_err, u32);

write_single_type!(write_i32_le_err, i32);

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::bytestream::{ByteIoError, ByteWriter};

    #[test]
    fn little_endian_layout() {
        let mut out: Vec<u8> = vec![];
        let mut writer = ByteWriter::new(&mut out);

        writer.write_u16_le_err(0x4D42).unwrap();
        writer.write_u32_le_err(0x0011_9436).unwrap();
        writer.write_i32_le_err(-1).unwrap();
        assert_eq!(writer.bytes_written(), 10);

        assert_eq!(
            out,
            [0x42, 0x4D, 0x36, 0x94, 0x11, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn zero_padding() {
        let mut out: Vec<u8> = vec![1];
        let mut writer = ByteWriter::new(&mut out);
        writer.write_zeros(11).unwrap();
        assert_eq!(writer.bytes_written(), 11);
        assert_eq!(out.len(), 12);
        assert!(out[1..].iter().all(|x| *x == 0));
    }

    #[test]
    fn slice_sink_runs_out_of_space() {
        let mut storage = [0_u8; 3];
        let mut writer = ByteWriter::new(&mut storage[..]);
        assert!(matches!(
            writer.write_u32_le_err(7),
            Err(ByteIoError::NotEnoughBuffer(4, 3))
        ));
    }
}
