use std::io;

use libc::arc4random_buf;

/// `arc4random_buf` is backed by the kernel CSPRNG and cannot fail.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }

    Ok(())
}
