/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! The writer is generic over a [`ByteSink`], so the same encoder
//! can write to memory or to a file, the reader works on byte slices.
pub use errors::ByteIoError;
pub use reader::ByteReader;
pub use traits::ByteSink;
pub use writer::ByteWriter;

mod errors;
mod reader;
mod traits;
mod writer;
