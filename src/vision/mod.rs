//! 本模块提供行图像（单通道灰度图）的表示与加载。
//! 在本模块中，“灰度”（图）等同于英文中luma、luminance、grey、gray的概念；
//! 像素值统一归一化到[0, 1]闭区间。

use std::path::Path;

use image::{GrayImage, ImageBuffer, ImageReader, Luma};
use ndarray::{Array2, ArrayView2, ShapeError};
use serde::{Deserialize, Serialize};


/// 一张解码后的行图像，形状为[高, 宽]。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineImage {
    data: Array2<f32>,
}

impl LineImage {
    /// 由按行优先排列的像素数据创建图像，`data`的长度必须等于`height * width`。
    pub fn new(data: &[f32], height: usize, width: usize) -> Result<Self, ShapeError> {
        let data = Array2::from_shape_vec((height, width), data.to_vec())?;
        Ok(Self { data })
    }

    /// 创建一张全零（全黑）的图像
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            data: Array2::zeros((height, width)),
        }
    }

    pub fn from_array(data: Array2<f32>) -> Self {
        Self { data }
    }

    /// 以灰度方式读取本地图像文件，像素值归一化到[0, 1]
    ///
    /// 图像格式由文件内容判断而非扩展名；16 位图像保留完整精度。
    pub fn open_gray<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let gray = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?
            .to_luma32f();
        Ok(Self::from(&gray))
    }

    pub fn view(&self) -> ArrayView2<'_, f32> {
        self.data.view()
    }

    pub fn into_array(self) -> Array2<f32> {
        self.data
    }

    /// (高, 宽)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// 像素总数
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 最小像素值；空图像返回None
    pub fn min_value(&self) -> Option<f32> {
        self.data
            .iter()
            .copied()
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f32| m.min(v))))
    }

    /// 最大像素值；空图像返回None
    pub fn max_value(&self) -> Option<f32> {
        self.data
            .iter()
            .copied()
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f32| m.max(v))))
    }

    /// 图像是否不含任何信息：尺寸为零，或所有像素值相同（最大值等于最小值）
    pub fn is_flat(&self) -> bool {
        match (self.min_value(), self.max_value()) {
            (Some(min), Some(max)) => min == max,
            _ => true,
        }
    }
}

impl From<&GrayImage> for LineImage {
    fn from(gray: &GrayImage) -> Self {
        let (width, height) = gray.dimensions();
        let data = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
            gray.get_pixel(x as u32, y as u32)[0] as f32 / 255.0
        });
        Self { data }
    }
}

impl From<&ImageBuffer<Luma<f32>, Vec<f32>>> for LineImage {
    fn from(gray: &ImageBuffer<Luma<f32>, Vec<f32>>) -> Self {
        let (width, height) = gray.dimensions();
        let data = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
            gray.get_pixel(x as u32, y as u32)[0]
        });
        Self { data }
    }
}
