//! # lsb_delim 库
//!
//! 本库包含以分隔符结尾的 LSB 文本隐写核心逻辑，以及命令行工具使用的处理函数。
//!
//! 数据流：
//!
//! ```text
//! 隐藏: 文本 -> bits::encode -> + 分隔符 -> capacity::check_capacity -> embed -> 新图像
//! 恢复: 图像 -> extract (逐位寻找分隔符) -> bits::decode -> 文本
//! ```

// 声明库包含的所有模块。

pub mod bits;
pub mod capacity;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod raster;
pub mod steganography;

pub use bits::BitSequence;
pub use capacity::capacity;
pub use error::StegoError;
pub use raster::{RasterBuffer, RasterPixel};
pub use steganography::{embed, extract};
