//! Process-wide native state.

use crate::error::TorchError;

/// Seeds the native random generators on every device.
pub fn manual_seed(seed: i64) -> Result<(), TorchError> {
    let api = crate::api()?;
    // SAFETY: plain value argument, no result.
    unsafe { (api.manual_seed)(seed) };
    Ok(())
}
