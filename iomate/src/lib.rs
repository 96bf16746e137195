//! # iomate
//!
//! Command-line inspection of the user I/O board signal map.
//! Argument handling lives in [`cli`], output formatting in [`render`].

pub mod cli;
pub mod render;
