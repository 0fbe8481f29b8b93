//! # Line Dataset
//!
//! `line_dataset`负责为OCR行识别的训练、预测与评估准备数据：
//! 枚举(行图像, 标注文本)样本、校验配对、并行加载像素与文本，并过滤掉损坏/无效的样本，
//! 最终给出按位置一一对应的图像序列与文本序列。
//!
//! - [`data::RawDataSet`]：内存中已就绪的数据集
//! - [`data::FileDataSet`]：基于文件路径、按需加载的数据集
//! - [`data::DataSet`]：两者共享的生命周期（样本存储 + 并行加载）
//!

pub mod data;
pub mod utils;
pub mod vision;
