//! 内置数据集
//!
//! - RawDataSet：内存中的图像与文本（始终已加载）
//! - FileDataSet：按基名配对的图像文件与标注文本文件（按需加载）

mod file;
mod raw;

pub use file::FileDataSet;
pub use raw::RawDataSet;
