//! Library for lintlab CLI utilities and shared functionality.

pub mod commands;
pub mod output;
