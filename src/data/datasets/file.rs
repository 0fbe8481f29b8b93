//! 文件数据集：按路径配对行图像与标注文本，按需加载
//!
//! 支持：
//! - 按基名配对图像与文本，并检查文件是否存在
//! - 只给图像（预测）或只给文本（评估）
//! - 把不存在的文件当作空内容（评估时常用）

use std::path::{Path, PathBuf};

use crate::data::dataset::{DataSet, DataSetBase, LoadedSample};
use crate::data::pairing::pair_paths;
use crate::data::{DataSetError, FileDataSetOptions, Sample};
use crate::vision::LineImage;

/// 由图像文件与标注文本文件构成的数据集
#[derive(Debug, Clone)]
pub struct FileDataSet {
    base: DataSetBase,
    non_existing_as_empty: bool,
}

impl FileDataSet {
    /// 由文件路径列表创建数据集
    ///
    /// # 参数
    /// - `images`: 图像文件；为空时只含文本，用于评估
    /// - `texts`: 文本文件；为空时只含图像，用于预测
    /// - `options`: 无效样本策略与`non_existing_as_empty`
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        images: &[P],
        texts: &[Q],
        options: FileDataSetOptions,
    ) -> Result<Self, DataSetError> {
        Self::from_optional_paths(
            images.iter().map(|p| Some(p.as_ref().to_path_buf())).collect(),
            texts.iter().map(|p| Some(p.as_ref().to_path_buf())).collect(),
            options,
        )
    }

    /// 同[`FileDataSet::new`]，但单个位置上的路径可以缺失（空路径同样视为缺失）
    ///
    /// 每一对路径都会经过[`pair_paths`]校验；校验失败时，`skip_invalid`为true则
    /// 打印日志并跳过，否则直接返回该错误。
    pub fn from_optional_paths(
        images: Vec<Option<PathBuf>>,
        texts: Vec<Option<PathBuf>>,
        options: FileDataSetOptions,
    ) -> Result<Self, DataSetError> {
        let mut base = DataSetBase::new(!images.is_empty(), !texts.is_empty(), options.base)?;
        let non_existing_as_empty = options.non_existing_as_empty;

        let mut images: Vec<Option<PathBuf>> = images.into_iter().map(non_empty).collect();
        let mut texts: Vec<Option<PathBuf>> = texts.into_iter().map(non_empty).collect();
        if texts.is_empty() {
            // 没有标注，大概是预测
            texts = vec![None; images.len()];
        }
        if images.is_empty() {
            // 没有图像，大概是评估
            images = vec![None; texts.len()];
        }
        if images.len() != texts.len() {
            log::warn!(
                "图像文件数 {} 与文本文件数 {} 不一致，多余部分将被忽略",
                images.len(),
                texts.len()
            );
        }

        let store = base.store_mut();
        for (image, text) in images.into_iter().zip(texts) {
            let id = match pair_paths(image.as_deref(), text.as_deref(), non_existing_as_empty) {
                Ok(id) => id,
                Err(e) if options.base.skip_invalid => {
                    log::warn!("无效数据: {e}");
                    continue;
                }
                Err(e) => return Err(e),
            };
            store.push(Sample::from_paths(id, image, text))?;
        }

        Ok(Self {
            base,
            non_existing_as_empty,
        })
    }

    pub fn non_existing_as_empty(&self) -> bool {
        self.non_existing_as_empty
    }

    /// 读取标注文本（UTF-8）
    ///
    /// 路径为None时返回None；文件不存在时，`non_existing_as_empty`为true返回空串，
    /// 否则返回`DataSetError::FileNotFound`。
    pub fn load_text(&self, path: Option<&Path>) -> Result<Option<String>, DataSetError> {
        let Some(path) = path else {
            return Ok(None);
        };

        if !path.exists() {
            return if self.non_existing_as_empty {
                Ok(Some(String::new()))
            } else {
                Err(DataSetError::FileNotFound(path.to_path_buf()))
            };
        }

        Ok(Some(std::fs::read_to_string(path)?))
    }

    /// 以灰度方式读取行图像
    ///
    /// 路径为None时返回None；文件不存在时，`non_existing_as_empty`为true返回1x1的占位图像，
    /// 否则返回`DataSetError::FileNotFound`。
    /// 解码失败不会报错，而是返回None，交由加载流程按无效图像处理。
    pub fn load_image(&self, path: Option<&Path>) -> Result<Option<LineImage>, DataSetError> {
        let Some(path) = path else {
            return Ok(None);
        };

        if !path.exists() {
            return if self.non_existing_as_empty {
                Ok(Some(LineImage::zeros(1, 1)))
            } else {
                Err(DataSetError::FileNotFound(path.to_path_buf()))
            };
        }

        match LineImage::open_gray(path) {
            Ok(image) => Ok(Some(image)),
            Err(e) => {
                log::debug!("无法解码图像 {}: {e}", path.display());
                Ok(None)
            }
        }
    }
}

impl DataSet for FileDataSet {
    fn base(&self) -> &DataSetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut DataSetBase {
        &mut self.base
    }

    fn load_sample(&self, sample: &Sample) -> Result<LoadedSample, DataSetError> {
        Ok((
            self.load_image(sample.image_path.as_deref())?,
            self.load_text(sample.text_path.as_deref())?,
        ))
    }
}

fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}
