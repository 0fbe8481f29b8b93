//! 内存数据集：图像与文本已经就绪，无需解码

use crate::data::dataset::{DataSet, DataSetBase, LoadedSample};
use crate::data::{DataSetError, DataSetOptions, Sample};
use crate::vision::LineImage;

/// 由内存中的图像列表与文本列表构成的数据集
///
/// 构建完成即处于已加载状态，`load_samples`不会做任何事。
#[derive(Debug, Clone)]
pub struct RawDataSet {
    base: DataSetBase,
}

impl RawDataSet {
    /// 由两个按位置对应的列表创建数据集
    ///
    /// # 参数
    /// - `images`: 图像列表；为None（或为空）时只含文本，用于评估
    /// - `texts`: 文本列表；为None（或为空）时只含图像，用于预测
    ///
    /// 两者都为None，或两者都给出但都为空时，返回`DataSetError::Configuration`。
    /// 每个样本的 id 是其从0开始的位置。
    pub fn new(
        images: Option<Vec<Option<LineImage>>>,
        texts: Option<Vec<Option<String>>>,
        options: DataSetOptions,
    ) -> Result<Self, DataSetError> {
        let mut base = DataSetBase::new(images.is_some(), texts.is_some(), options)?;

        let both_given = images.is_some() && texts.is_some();
        let mut images = images.unwrap_or_default();
        let mut texts = texts.unwrap_or_default();
        if both_given && images.is_empty() && texts.is_empty() {
            return Err(DataSetError::Configuration("提供的数据集为空".to_string()));
        }

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
                "图像数 {} 与文本数 {} 不一致，多余部分将被忽略",
                images.len(),
                texts.len()
            );
        }

        let store = base.store_mut();
        for (i, (image, text)) in images.into_iter().zip(texts).enumerate() {
            store.push(Sample::from_values(i.to_string(), image, text))?;
        }
        store.mark_loaded();

        Ok(Self { base })
    }

    /// 便捷 API：由完整的图像与文本列表创建训练用数据集
    pub fn from_pairs(
        images: Vec<LineImage>,
        texts: Vec<String>,
        options: DataSetOptions,
    ) -> Result<Self, DataSetError> {
        Self::new(
            Some(images.into_iter().map(Some).collect()),
            Some(texts.into_iter().map(Some).collect()),
            options,
        )
    }
}

impl DataSet for RawDataSet {
    fn base(&self) -> &DataSetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut DataSetBase {
        &mut self.base
    }

    fn load_sample(&self, _sample: &Sample) -> Result<LoadedSample, DataSetError> {
        Err(DataSetError::InvalidOperation(
            "内存数据集始终处于已加载状态".to_string(),
        ))
    }
}
