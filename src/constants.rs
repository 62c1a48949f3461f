/// 标记隐藏数据结束的分隔符：16 个 1 后接 16 个 0。
/// 按 MSB 优先顺序写入图像，紧跟在消息比特之后。
pub const DELIMITER: u32 = 0xFFFF_0000;

/// 分隔符占用的比特数。
pub const DELIMITER_BITS: usize = 32;

/// 每个像素中用于承载数据的通道数 (R, G, B)。
/// Alpha 通道即使存在也从不写入。
pub const CHANNELS_PER_PIXEL: usize = 3;

/// 未指定输出路径时，隐写结果图像的文件名前缀。
pub const OUTPUT_PREFIX: &str = "secret_";

/// 隐写结果固定使用的无损格式扩展名。
pub const OUTPUT_EXTENSION: &str = "png";
