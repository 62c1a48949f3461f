//! # 容量与分帧模块
//!
//! 图像容量只取决于尺寸：每个像素的 R、G、B 各提供 1 个比特。

use crate::constants::{CHANNELS_PER_PIXEL, DELIMITER_BITS};
use crate::error::{Result, StegoError};
use log::debug;

/// 图像可承载的总比特数：`width * height * 3`。
pub fn capacity(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS_PER_PIXEL
}

/// 消息比特数加上分隔符后的总长度。
pub fn frame(payload_bits: usize) -> usize {
    payload_bits + DELIMITER_BITS
}

/// 检查分帧后的比特数能否完整写入。
///
/// # Errors
///
/// 超出容量时返回 [`StegoError::CapacityExceeded`]，其中 `max_bytes = capacity / 8`。
pub fn check_capacity(total_bits: usize, capacity: usize) -> Result<()> {
    debug!("payload needs {total_bits} bits, carrier offers {capacity} bits");
    if total_bits > capacity {
        return Err(StegoError::CapacityExceeded {
            max_bytes: capacity / 8,
        });
    }
    Ok(())
}

/// 扣除分隔符后，图像还能容纳的消息字节数。
pub fn max_message_bytes(width: u32, height: u32) -> usize {
    capacity(width, height).saturating_sub(DELIMITER_BITS) / 8
}
