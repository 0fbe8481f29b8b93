//! 单个样本记录

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::vision::LineImage;

/// 一个训练/预测单元：(行图像, 标注文本) 及其标识
///
/// 文件数据集的样本在构建时只有`image_path`/`text_path`，
/// 加载后才会填入`image`/`text`；内存数据集的样本直接持有`image`/`text`。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// 样本标识，用于错误信息与日志，不能为空
    pub id: String,
    pub image_path: Option<PathBuf>,
    pub text_path: Option<PathBuf>,
    /// 解码后的图像
    pub image: Option<LineImage>,
    /// 标注文本；为None表示该样本没有标注
    pub text: Option<String>,
}

impl Sample {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// 创建一个基于文件路径、尚未加载的样本
    pub fn from_paths(
        id: impl Into<String>,
        image_path: Option<PathBuf>,
        text_path: Option<PathBuf>,
    ) -> Self {
        Self {
            id: id.into(),
            image_path,
            text_path,
            ..Self::default()
        }
    }

    /// 创建一个直接持有图像与文本的样本
    pub fn from_values(
        id: impl Into<String>,
        image: Option<LineImage>,
        text: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            image,
            text,
            ..Self::default()
        }
    }

    pub fn with_image(mut self, image: LineImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// 是否带有标注文本
    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }
}
