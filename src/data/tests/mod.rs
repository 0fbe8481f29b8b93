//! 数据集单元测试

use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};

mod options;
mod store;

/// 写入一张`width`x`height`的灰度 png，像素值由`pixel`给出
fn write_gray_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    pixel: impl Fn(u32, u32) -> u8,
) -> PathBuf {
    let path = dir.join(name);
    let image = GrayImage::from_fn(width, height, |x, y| Luma([pixel(x, y)]));
    image.save(&path).expect("写入测试图像失败");
    path
}

/// 写入一张左右渐变（有效）的行图像
fn write_line_png(dir: &Path, name: &str) -> PathBuf {
    write_gray_png(dir, name, 16, 4, |x, _| (x * 16) as u8)
}

fn write_text(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("写入测试文本失败");
    path
}
