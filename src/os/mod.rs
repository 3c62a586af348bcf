//! Operating system entropy layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system's cryptographically secure random number generator.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same crate-private
//! surface:
//!
//! ```text
//! fn sys_random(buf: &mut [u8]) -> std::io::Result<()>
//! ```
//!
//! The OS source is treated as a trusted primitive: on success the buffer
//! holds unpredictable, uniformly distributed bytes. On failure the platform
//! error is handed back unchanged so that higher layers can surface it. No
//! implementation falls back to a weaker source.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
compile_error!("secrand has no entropy backend for this target");
