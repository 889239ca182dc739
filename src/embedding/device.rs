use candle_core::Device;
use tracing::{debug, warn};

use super::error::EmbeddingError;

/// Picks the encoder device: Metal, then CUDA when compiled in, else CPU.
///
/// GPU initialisation failures are logged and fall through to the next
/// backend; the CPU is always available.
pub fn select_device() -> Result<Device, EmbeddingError> {
    #[cfg_attr(not(any(feature = "metal", feature = "cuda")), allow(unused_mut))]
    let mut failures: Vec<EmbeddingError> = Vec::new();

    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            tracing::info!("Encoding on Metal GPU");
            return Ok(device);
        }
        Err(e) => failures.push(EmbeddingError::DeviceUnavailable {
            device: "metal".to_string(),
            reason: e.to_string(),
        }),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            tracing::info!("Encoding on CUDA GPU");
            return Ok(device);
        }
        Err(e) => failures.push(EmbeddingError::DeviceUnavailable {
            device: "cuda".to_string(),
            reason: e.to_string(),
        }),
    }

    if failures.is_empty() {
        debug!("No GPU backend compiled, encoding on CPU");
    } else {
        for failure in &failures {
            warn!(error = %failure, "GPU unavailable, falling back to CPU");
        }
    }

    Ok(Device::Cpu)
}
