use std::io;

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

// BCryptGenRandom takes a u32 length.
const MAX_CHUNK: usize = u32::MAX as usize;

pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    for chunk in buf.chunks_mut(MAX_CHUNK) {
        let status = unsafe {
            BCryptGenRandom(
                std::ptr::null_mut(),
                chunk.as_mut_ptr(),
                chunk.len() as u32,
                BCRYPT_USE_SYSTEM_PREFERRED_RNG,
            )
        };

        if status != 0 {
            return Err(io::Error::other(format!(
                "BCryptGenRandom failed with status {status:#x}"
            )));
        }
    }

    Ok(())
}
