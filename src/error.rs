//! # 错误类型模块
//!
//! 核心隐写流程的所有预期失败都通过 [`StegoError`] 以返回值的形式报告，
//! 从不借用 "看起来像正常文本" 的错误字符串。

use std::string::FromUtf8Error;
use thiserror::Error;

/// 嵌入或提取过程中可能出现的错误。
#[derive(Debug, Error)]
pub enum StegoError {
    /// 消息加分隔符超出了图像的承载能力。
    #[error("message is too long: this image can hold at most {max_bytes} bytes")]
    CapacityExceeded { max_bytes: usize },

    /// 扫描完整个图像也没有找到结束分隔符。
    #[error("no end-of-message delimiter found in the image")]
    DelimiterNotFound,

    /// 恢复出的字节不是合法的 UTF-8。
    #[error("hidden data could not be decoded as UTF-8: {0}")]
    DecodeFailure(#[from] FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, StegoError>;
