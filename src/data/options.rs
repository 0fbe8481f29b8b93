//! 数据集配置
//!
//! 配置项均可通过 JSON 读入（缺省字段取默认值），也可用链式 setter 构建：
//!
//! ```ignore
//! let options = FileDataSetOptions::default()
//!     .skip_invalid(true)
//!     .non_existing_as_empty(true);
//! ```

use serde::{Deserialize, Serialize};

use crate::data::DataSetError;

/// 所有数据集共享的无效样本处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSetOptions {
    /// 跳过（仅记录日志）无效样本，而不是直接报错
    pub skip_invalid: bool,
    /// 将被跳过的无效样本从数据集中删除，使其不计入该数据集上的统计
    pub remove_invalid: bool,
}

impl Default for DataSetOptions {
    fn default() -> Self {
        Self {
            skip_invalid: false,
            remove_invalid: true,
        }
    }
}

impl DataSetOptions {
    pub fn skip_invalid(mut self, skip_invalid: bool) -> Self {
        self.skip_invalid = skip_invalid;
        self
    }

    pub fn remove_invalid(mut self, remove_invalid: bool) -> Self {
        self.remove_invalid = remove_invalid;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, DataSetError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// 文件数据集的配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDataSetOptions {
    #[serde(flatten)]
    pub base: DataSetOptions,
    /// 把不存在的文件当作空内容（空文本 / 1x1 占位图像），评估时常用
    pub non_existing_as_empty: bool,
}

impl FileDataSetOptions {
    pub fn skip_invalid(mut self, skip_invalid: bool) -> Self {
        self.base.skip_invalid = skip_invalid;
        self
    }

    pub fn remove_invalid(mut self, remove_invalid: bool) -> Self {
        self.base.remove_invalid = remove_invalid;
        self
    }

    pub fn non_existing_as_empty(mut self, non_existing_as_empty: bool) -> Self {
        self.non_existing_as_empty = non_existing_as_empty;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, DataSetError> {
        Ok(serde_json::from_str(json)?)
    }
}
