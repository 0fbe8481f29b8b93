//! 数据集错误类型定义

use std::path::PathBuf;
use thiserror::Error;

/// 数据集构建、加载与访问相关错误
#[derive(Debug, Error)]
pub enum DataSetError {
    /// 数据集配置无效（既无图像也无文本、输入为空等）
    #[error("数据集配置错误: {0}")]
    Configuration(String),

    /// 样本记录不合法（如缺少 id）
    #[error("无效样本: {0}")]
    InvalidSample(String),

    /// 数据集尚未加载
    #[error("数据集尚未加载: {0}")]
    NotLoaded(String),

    /// 训练样本缺少标注文本
    #[error("样本 {id} 不是训练样本，可能缺少对应的标注文本文件")]
    MissingLabel { id: String },

    /// 图像与文本无法配对，或数据点为空
    #[error("配对错误: {0}")]
    Pairing(String),

    /// 文件未找到
    #[error("文件未找到: {0}")]
    FileNotFound(PathBuf),

    /// 图像为空、尺寸为零或像素值全部相同
    #[error("空数据: 样本 '{id}' 的图像{reason}")]
    EmptyData { id: String, reason: InvalidImage },

    /// 在不支持的数据集上调用了操作
    #[error("非法操作: {0}")]
    InvalidOperation(String),

    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 配置解析错误
    #[error("配置解析错误: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// 并行加载所需的线程池无法创建
    #[error("线程池错误: {0}")]
    WorkerPool(String),
}

/// 图像无效的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidImage {
    /// 解码结果为空（可能文件已损坏）
    Missing,
    /// 图像尺寸为零，或所有像素值相同
    Empty,
}

impl std::fmt::Display for InvalidImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            InvalidImage::Missing => "为 None（可能已损坏）",
            InvalidImage::Empty => "为空",
        };
        write!(f, "{}", reason)
    }
}
