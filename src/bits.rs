//! # 比特编解码模块
//!
//! 在 UTF-8 文本与按 MSB 优先排列的比特序列之间转换。
//! 比特紧凑地存放在字节数组中，而不是 `"0101..."` 这样的字符串。

use crate::error::Result;

/// 紧凑存储、可按位寻址的比特序列。
///
/// 第 `i` 个比特位于 `bytes[i / 8]` 的第 `7 - i % 8` 位 (MSB 优先)。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    bytes: Vec<u8>,
    len: usize,
}

impl BitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// 将每个字节按 MSB 优先展开为 8 个比特。
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 在末尾追加一个比特，只取 `bit` 的最低位。
    pub fn push(&mut self, bit: u8) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if let Some(last) = self.bytes.last_mut() {
            *last |= (bit & 1) << (7 - offset);
        }
        self.len += 1;
    }

    /// 按 MSB 优先追加 `value` 的低 `count` 位。
    pub fn push_bits(&mut self, value: u32, count: usize) {
        (0..count)
            .rev()
            .for_each(|shift| self.push(((value >> shift) & 1) as u8));
    }

    /// 读取第 `index` 个比特，越界时返回 `None`。
    pub fn get(&self, index: usize) -> Option<u8> {
        (index < self.len).then(|| (self.bytes[index / 8] >> (7 - index % 8)) & 1)
    }

    /// 截断到前 `len` 个比特；`len` 不小于当前长度时不做任何事。
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        self.bytes.truncate(len.div_ceil(8));
        let tail = len % 8;
        if tail != 0 {
            if let Some(last) = self.bytes.last_mut() {
                *last &= 0xFF << (8 - tail);
            }
        }
        self.len = len;
    }

    /// 依次产出每个比特 (0 或 1)。
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.len).map(move |i| (self.bytes[i / 8] >> (7 - i % 8)) & 1)
    }

    /// 只返回完整的字节；末尾不足 8 位的部分被丢弃。
    pub fn whole_bytes(&self) -> &[u8] {
        &self.bytes[..self.len / 8]
    }
}

/// 将文本编码为比特序列：UTF-8 字节逐个按 MSB 优先展开。
pub fn encode(text: &str) -> BitSequence {
    BitSequence::from_bytes(text.as_bytes())
}

/// 将比特序列还原为文本。
///
/// 长度不是 8 的倍数时，末尾不完整的字节会被**有意地静默丢弃**，
/// 这与既有数据的读取行为保持一致，不视为错误。
///
/// # Errors
///
/// 恢复出的字节不是合法 UTF-8 时返回 [`StegoError::DecodeFailure`](crate::error::StegoError::DecodeFailure)。
pub fn decode(bits: &BitSequence) -> Result<String> {
    Ok(String::from_utf8(bits.whole_bytes().to_vec())?)
}
