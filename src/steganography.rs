//! # 隐写核心模块
//!
//! [`embed`] 把 "消息比特 + 分隔符" 依次写入载体通道的最低有效位；
//! [`extract`] 以相同顺序读回最低有效位，直到末尾 32 位与分隔符相同。
//!
//! ## 已知局限
//!
//! 分隔符并不保证不出现在数据中。如果读出的比特流在真正结尾之前就出现了
//! 分隔符图样，提取会在第一次匹配处确定性地停止。对合法 UTF-8 文本而言，
//! 消息内部不可能出现连续 16 个 1 (需要两个 `0xFF` 字节)，但未经隐写的
//! 图像中随机的最低有效位可能恰好组成分隔符，此时通常得到
//! [`StegoError::DecodeFailure`]。

use crate::bits::{self, BitSequence};
use crate::capacity::{capacity, check_capacity, frame};
use crate::constants::{DELIMITER, DELIMITER_BITS};
use crate::error::{Result, StegoError};
use crate::raster::{RasterBuffer, RasterPixel, carrier_channels, carrier_channels_mut};
use log::{debug, warn};

/// 将 `message` 隐藏到 `image` 的副本中并返回该副本。
///
/// 原图不会被修改。写完最后一个比特后立即停止，之后的所有通道与原图逐字节相同。
///
/// # Errors
///
/// 消息加分隔符超过 `width * height * 3` 比特时返回 [`StegoError::CapacityExceeded`]，
/// 此时不会分配或修改任何像素数据。
pub fn embed<P: RasterPixel>(image: &RasterBuffer<P>, message: &str) -> Result<RasterBuffer<P>> {
    let mut payload = bits::encode(message);
    check_capacity(
        frame(payload.len()),
        capacity(image.width(), image.height()),
    )?;
    payload.push_bits(DELIMITER, DELIMITER_BITS);

    let mut doctored = image.clone();
    carrier_channels_mut(&mut doctored)
        .zip(payload.iter())
        .for_each(|(channel, bit)| *channel = (*channel & 0xFE) | bit);

    debug!(
        "embedded {} bytes as {} bits into a {}x{} image",
        message.len(),
        payload.len(),
        image.width(),
        image.height()
    );

    Ok(doctored)
}

/// 从 `image` 中恢复隐藏的文本，不修改输入。
///
/// # Errors
///
/// * [`StegoError::DelimiterNotFound`] - 所有通道读完仍未遇到分隔符。
/// * [`StegoError::DecodeFailure`] - 分隔符之前的字节不是合法 UTF-8。
pub fn extract<P: RasterPixel>(image: &RasterBuffer<P>) -> Result<String> {
    let mut scanner = DelimiterScanner::new();
    for channel in carrier_channels(image) {
        if scanner.push(channel & 1) == ScanState::Found {
            break;
        }
    }
    scanner.finish()
}

/// 分隔符扫描器所处的状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// 仍在读取比特，尚未匹配到分隔符。
    Scanning,
    /// 末尾 32 位与分隔符相同，前缀即为消息。
    Found,
    /// 输入已耗尽且从未匹配。
    Exhausted,
}

/// 逐比特寻找分隔符的状态机：`Scanning -> Found | Exhausted`。
///
/// 最近 32 个比特保存在一个移位寄存器中，每追加一个比特只需一次比较。
#[derive(Debug, Clone)]
pub struct DelimiterScanner {
    bits: BitSequence,
    window: u32,
    state: ScanState,
}

impl Default for DelimiterScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl DelimiterScanner {
    pub fn new() -> Self {
        Self {
            bits: BitSequence::new(),
            window: 0,
            state: ScanState::Scanning,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// 已读取的比特数 (匹配后不含分隔符)。
    pub fn bits_read(&self) -> usize {
        self.bits.len()
    }

    /// 追加一个比特并返回新的状态。进入终止状态后再追加不会产生任何效果。
    pub fn push(&mut self, bit: u8) -> ScanState {
        if self.state != ScanState::Scanning {
            return self.state;
        }

        self.bits.push(bit);
        self.window = (self.window << 1) | u32::from(bit & 1);

        if self.bits.len() >= DELIMITER_BITS && self.window == DELIMITER {
            self.bits.truncate(self.bits.len() - DELIMITER_BITS);
            self.state = ScanState::Found;
            debug!("delimiter found after {} message bits", self.bits.len());
        }

        self.state
    }

    /// 结束扫描：找到分隔符则解码前缀，否则转入 `Exhausted` 并报告未找到。
    pub fn finish(mut self) -> Result<String> {
        if self.state == ScanState::Scanning {
            self.state = ScanState::Exhausted;
        }

        match self.state {
            ScanState::Found => bits::decode(&self.bits),
            _ => {
                warn!(
                    "scanned {} bits without finding the delimiter",
                    self.bits.len()
                );
                Err(StegoError::DelimiterNotFound)
            }
        }
    }
}
