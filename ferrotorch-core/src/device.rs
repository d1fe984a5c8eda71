use std::fmt;
use std::str::FromStr;

use ferrotorch_sys::c_int;

use crate::error::TorchError;

/// Location of a tensor's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Device {
    /// Main system memory.
    #[default]
    Cpu,
    /// A CUDA device, by ordinal.
    Cuda(i32),
}

impl Device {
    /// c10 device-type code crossing the boundary.
    pub(crate) fn type_code(self) -> c_int {
        match self {
            Device::Cpu => 0,
            Device::Cuda(_) => 1,
        }
    }

    pub(crate) fn index_code(self) -> c_int {
        match self {
            Device::Cpu => -1,
            Device::Cuda(index) => index,
        }
    }

    pub(crate) fn from_codes(device_type: c_int, device_index: c_int) -> Result<Device, TorchError> {
        match device_type {
            0 => Ok(Device::Cpu),
            1 => Ok(Device::Cuda(device_index.max(0))),
            other => Err(TorchError::InvalidDevice {
                spec: format!("device type code {other}"),
            }),
        }
    }

    pub fn is_cuda(self) -> bool {
        matches!(self, Device::Cuda(_))
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Cuda(index) => write!(f, "cuda:{index}"),
        }
    }
}

impl FromStr for Device {
    type Err = TorchError;

    /// Parses the `cpu` / `cuda` / `cuda:N` notation.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = || TorchError::InvalidDevice {
            spec: spec.to_string(),
        };
        match spec {
            "cpu" => Ok(Device::Cpu),
            "cuda" => Ok(Device::Cuda(0)),
            other => {
                let index = other
                    .strip_prefix("cuda:")
                    .ok_or_else(invalid)?
                    .parse::<i32>()
                    .map_err(|_| invalid())?;
                if index < 0 {
                    return Err(invalid());
                }
                Ok(Device::Cuda(index))
            }
        }
    }
}

/// CUDA runtime queries, forwarded to the native library.
pub struct Cuda;

impl Cuda {
    /// Whether the native library can see a CUDA runtime.
    pub fn is_available() -> Result<bool, TorchError> {
        let api = crate::api()?;
        // SAFETY: no arguments, plain int result.
        Ok(unsafe { (api.cuda_is_available)() } != 0)
    }

    pub fn cudnn_is_available() -> Result<bool, TorchError> {
        let api = crate::api()?;
        // SAFETY: no arguments, plain int result.
        Ok(unsafe { (api.cuda_cudnn_is_available)() } != 0)
    }

    pub fn device_count() -> Result<i64, TorchError> {
        let api = crate::api()?;
        // SAFETY: no arguments, plain int result.
        Ok(unsafe { (api.cuda_device_count)() } as i64)
    }
}
