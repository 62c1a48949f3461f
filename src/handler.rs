//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。
//! 核心算法只处理内存中的像素缓冲区，图像的读取与无损保存都在这里完成。

use crate::capacity::{capacity, max_message_bytes};
use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{OUTPUT_EXTENSION, OUTPUT_PREFIX};
use crate::steganography::{embed, extract};
use anyhow::{Context, Result};
use colored::Colorize;
use image::{DynamicImage, GenericImageView, ImageFormat};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和待隐藏文本、确定输出路径、调用 [`embed`] 生成新图像，
/// 最后将结果以 PNG 格式无损写入目标文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或文本文件。
/// * 待隐藏的文本为空。
/// * 目标路径不是 `.png`，或目标文件已存在且未指定 `--force`。
/// * 图像没有足够的空间来隐藏文本。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let message = match (&args.message, &args.text) {
        (Some(message), _) => message.clone(),
        (None, Some(text)) => fs::read_to_string(text).with_context(|| {
            format!(
                "Unable to read text file: {}",
                text.to_string_lossy().red().bold()
            )
        })?,
        (None, None) => anyhow::bail!("Either --message or --text must be given."),
    };

    anyhow::ensure!(!message.is_empty(), "The message must not be empty.");

    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| default_hide_path(&args.image));

    anyhow::ensure!(
        dest.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(OUTPUT_EXTENSION)),
        "Output must be a lossless PNG file: {}",
        dest.to_string_lossy().red().bold()
    );
    ensure_writable(&dest, args.force)?;

    let cover = open_image(&args.image)?;

    // 带 Alpha 的图像按 RGBA 处理以原样保留 Alpha，其余按 RGB 处理。
    let doctored: DynamicImage = if cover.color().has_alpha() {
        embed(&cover.to_rgba8(), &message)?.into()
    } else {
        embed(&cover.to_rgb8(), &message)?.into()
    };

    doctored
        .save_with_format(&dest, ImageFormat::Png)
        .with_context(|| {
            format!(
                "Unable to write to target image file: {}",
                dest.to_string_lossy().red().bold()
            )
        })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用 [`extract`] 恢复文本，
/// 然后将文本写入目标文件，或在未指定目标时直接打印。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 图像中没有分隔符，或分隔符之前的数据不是合法 UTF-8。
/// * 目标文件已存在且未指定 `--force`，或无法写入。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    if let Some(text) = &args.text {
        ensure_writable(text, args.force)?;
    }

    let picture = open_image(&args.image)?;

    let message = extract(&picture.to_rgba8()).with_context(|| {
        format!(
            "Failed to recover a message from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    match &args.text {
        Some(text) => {
            fs::write(text, &message).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    text.to_string_lossy().red().bold()
                )
            })?;

            println!(
                "The text has been successfully recovered and saved: {}",
                text.to_string_lossy().green().bold()
            );
        }
        None => println!("{message}"),
    }

    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑：打印图像的比特容量和可隐藏的最大字节数。
///
/// # Errors
///
/// 无法读取或解码输入图像时返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let picture = open_image(&args.image)?;
    let (width, height) = picture.dimensions();

    println!(
        "{}: {}x{}, {} bits, up to {} bytes of text",
        args.image.to_string_lossy().bold(),
        width,
        height,
        capacity(width, height).to_string().green(),
        max_message_bytes(width, height).to_string().green().bold()
    );

    Ok(())
}

/// 缺省输出路径：输入图像同目录下的 `secret_<文件名主干>.png`。
pub fn default_hide_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("{OUTPUT_PREFIX}{stem}.{OUTPUT_EXTENSION}"))
}

fn open_image(path: &Path) -> Result<DynamicImage> {
    let image = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    let (width, height) = image.dimensions();
    debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        width,
        height,
        image.color()
    );
    Ok(image)
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}
