//! 数据集模块
//!
//! 为OCR行识别准备 (行图像, 标注文本) 样本：构建、校验配对、并行加载与过滤。
//!
//! # 主要组件
//!
//! - [`DataSet`]: 数据集的共享生命周期（样本存储 + 并行加载）
//! - [`RawDataSet`]: 内存数据集
//! - [`FileDataSet`]: 文件数据集
//! - [`SampleStore`] / [`LoadState`]: 有序样本存储与加载状态
//! - [`pairing`]: 图像/文本路径的配对规则
//! - [`DataSetError`]: 数据集错误类型
//!
//! # 使用示例
//!
//! ```ignore
//! use line_dataset::data::{DataSet, FileDataSet, FileDataSetOptions};
//!
//! let options = FileDataSetOptions::default().skip_invalid(true);
//! let mut dataset = FileDataSet::new(&image_files, &gt_files, options)?;
//! dataset.load_samples(4, true)?;
//!
//! let (lines, gts) = dataset.train_samples(false)?;
//! ```

mod dataset;
pub mod datasets;
pub mod error;
mod options;
pub mod pairing;
mod sample;
mod store;

#[cfg(test)]
mod tests;

// Re-exports
pub use dataset::{DataSet, DataSetBase, LoadedSample};
pub use datasets::{FileDataSet, RawDataSet};
pub use error::{DataSetError, InvalidImage};
pub use options::{DataSetOptions, FileDataSetOptions};
pub use sample::Sample;
pub use store::{LoadState, SampleStore};
