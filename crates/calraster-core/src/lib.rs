/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all calraster libraries
//!
//! This crate provides a set of core routines shared
//! by the pattern compositor and the bitmap encoder
//!
//! It currently contains
//!
//! - A byte sink trait and an endian aware writer on top of it
//! - An endian aware slice reader used when reading bitmaps back
//! - Colorspace and bit depth information shared by pixel buffers
//! - Encoder and decoder options
//! - A logging facade that compiles to nothing unless the `log` feature is enabled
//!
//! This library is `#[no_std]` with `alloc` needed for defining `Vec`
//! sinks.
//!
//! # Features
//!  - `std`: Enables sinks backed by `std::io` writers and `std::error::Error` impls.
//!
//!  - `log`: Forwards the logging macros to the `log` crate.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bit_depth;
pub mod bytestream;
pub mod colorspace;
pub mod log;
pub mod options;
pub mod serde;
