//! # 像素缓冲区模块
//!
//! 定义可作为载体的像素类型，以及按固定顺序遍历载体通道的迭代器：
//! 行优先 (自上而下、从左到右)，每个像素内依次为 R、G、B。
//! 嵌入与提取必须使用同一顺序，否则恢复出的比特毫无意义。

use crate::constants::CHANNELS_PER_PIXEL;
use image::{ImageBuffer, Pixel, Rgb, Rgba};

/// 8 位深度、至少包含 R、G、B 三个通道的像素类型。
pub trait RasterPixel: Pixel<Subpixel = u8> {}

impl RasterPixel for Rgb<u8> {}
impl RasterPixel for Rgba<u8> {}

/// 已解码到内存中的栅格图像。
pub type RasterBuffer<P> = ImageBuffer<P, Vec<u8>>;

/// 按载体顺序产出每个 R、G、B 通道的值，Alpha 通道被跳过。
pub fn carrier_channels<P: RasterPixel>(image: &RasterBuffer<P>) -> impl Iterator<Item = u8> + '_ {
    image
        .pixels()
        .flat_map(|pixel| pixel.channels()[..CHANNELS_PER_PIXEL].iter().copied())
}

/// 与 [`carrier_channels`] 顺序相同，但产出可写引用。
pub fn carrier_channels_mut<P: RasterPixel>(
    image: &mut RasterBuffer<P>,
) -> impl Iterator<Item = &mut u8> + '_ {
    image
        .pixels_mut()
        .flat_map(|pixel| pixel.channels_mut()[..CHANNELS_PER_PIXEL].iter_mut())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_follow_raster_order_and_skip_alpha() {
        let image = RasterBuffer::from_fn(2, 2, |x, y| {
            let base = ((y * 2 + x) * 10) as u8;
            Rgba([base, base + 1, base + 2, 255])
        });
        let channels: Vec<u8> = carrier_channels(&image).collect();
        assert_eq!(channels, vec![0, 1, 2, 10, 11, 12, 20, 21, 22, 30, 31, 32]);
    }

    #[test]
    fn mutable_channels_leave_alpha_untouched() {
        let mut image = RasterBuffer::from_pixel(1, 1, Rgba([0u8, 0, 0, 7]));
        carrier_channels_mut(&mut image).for_each(|channel| *channel = 9);
        assert_eq!(image.get_pixel(0, 0), &Rgba([9, 9, 9, 7]));
    }
}
