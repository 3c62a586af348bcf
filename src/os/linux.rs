//! Linux entropy backend
//!
//! Reads from the kernel CSPRNG through the `getrandom(2)` system call.
//! The call blocks only until the entropy pool has been initialised once
//! after boot; afterwards it never blocks.

use std::io;

use libc::{c_void, getrandom};

/// Fills a buffer with cryptographically secure random bytes from the kernel.
///
/// Partial reads are handled by looping until the whole buffer is filled.
/// A call interrupted by a signal (`EINTR`) is reissued; any other failure
/// is returned as the corresponding OS error.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }

        filled += ret as usize;
    }

    Ok(())
}
