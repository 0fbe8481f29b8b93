//! DataSet - 数据集的共享生命周期
//!
//! 所有数据集都由一个[`DataSetBase`]（样本存储 + 无效样本策略）和一个
//! “如何把单个样本变成 (图像, 文本)”的`load_sample`组成。
//! 存储访问、批量并行加载与无效图像过滤都在本 trait 的默认方法中完成，
//! 具体数据集只需实现`base`/`base_mut`/`load_sample`。

use crate::data::error::InvalidImage;
use crate::data::{DataSetError, DataSetOptions, Sample, SampleStore};
use crate::utils::parallel::{ParallelMap, RayonMap};
use crate::vision::LineImage;

/// 进度条上显示的描述
const LOADING_DESC: &str = "Loading Dataset";

/// `load_sample`的返回值：(图像, 文本)，两者都可能为空
pub type LoadedSample = (Option<LineImage>, Option<String>);

/// 各数据集共享的状态
#[derive(Debug, Clone)]
pub struct DataSetBase {
    store: SampleStore,
    has_images: bool,
    has_texts: bool,
    options: DataSetOptions,
}

impl DataSetBase {
    /// 创建一个空的数据集状态
    ///
    /// # 参数
    /// - `has_images`: 该数据集是否包含图像
    /// - `has_texts`: 该数据集是否包含文本
    ///
    /// 两者至少有一个为true，否则返回`DataSetError::Configuration`
    pub fn new(
        has_images: bool,
        has_texts: bool,
        options: DataSetOptions,
    ) -> Result<Self, DataSetError> {
        if !has_images && !has_texts {
            return Err(DataSetError::Configuration(
                "不允许空数据集：既没有图像也没有文本".to_string(),
            ));
        }
        Ok(Self {
            store: SampleStore::new(),
            has_images,
            has_texts,
            options,
        })
    }

    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SampleStore {
        &mut self.store
    }

    pub fn has_images(&self) -> bool {
        self.has_images
    }

    pub fn has_texts(&self) -> bool {
        self.has_texts
    }

    pub fn options(&self) -> &DataSetOptions {
        &self.options
    }
}

/// 可加载的样本来源
///
/// # 示例
/// ```ignore
/// let mut dataset = FileDataSet::new(&images, &texts, FileDataSetOptions::default())?;
/// dataset.load_samples(4, true)?;
/// let (lines, gts) = dataset.train_samples(false)?;
/// ```
pub trait DataSet: Sync {
    fn base(&self) -> &DataSetBase;

    fn base_mut(&mut self) -> &mut DataSetBase;

    /// 把单个样本解码为 (图像, 文本)。会在工作线程上并发调用。
    fn load_sample(&self, sample: &Sample) -> Result<LoadedSample, DataSetError>;

    /// 样本数量
    fn len(&self) -> usize {
        self.base().store().len()
    }

    fn is_empty(&self) -> bool {
        self.base().store().is_empty()
    }

    fn is_loaded(&self) -> bool {
        self.base().store().is_loaded()
    }

    fn has_images(&self) -> bool {
        self.base().has_images()
    }

    fn has_texts(&self) -> bool {
        self.base().has_texts()
    }

    fn options(&self) -> &DataSetOptions {
        self.base().options()
    }

    /// 全部样本（按插入顺序）
    fn samples(&self) -> &[Sample] {
        self.base().store().samples()
    }

    /// 就地修改样本记录；追加样本请使用[`DataSet::add_sample`]
    fn samples_mut(&mut self) -> &mut [Sample] {
        self.base_mut().store_mut().samples_mut()
    }

    /// 追加一个样本。此后数据集需要重新加载。
    fn add_sample(&mut self, sample: Sample) -> Result<(), DataSetError> {
        self.base_mut().store_mut().push(sample)
    }

    /// 全部图像，按样本顺序
    fn prediction_samples(&self) -> Result<Vec<Option<&LineImage>>, DataSetError> {
        let store = self.base().store();
        store.ensure_loaded("预测样本")?;
        Ok(store.samples().iter().map(|s| s.image.as_ref()).collect())
    }

    /// 全部文本，按样本顺序
    fn text_samples(&self) -> Result<Vec<Option<&str>>, DataSetError> {
        let store = self.base().store();
        store.ensure_loaded("文本")?;
        Ok(store.samples().iter().map(|s| s.text.as_deref()).collect())
    }

    /// 图像列表与文本列表，两者长度相同且按位置一一对应
    ///
    /// # 参数
    /// - `skip_empty`: 跳过没有文本的样本；为false时遇到这样的样本返回`MissingLabel`
    fn train_samples(
        &self,
        skip_empty: bool,
    ) -> Result<(Vec<Option<&LineImage>>, Vec<&str>), DataSetError> {
        Ok(self.paired_samples(skip_empty)?.into_iter().unzip())
    }

    /// 与`train_samples`相同的规则，但返回 (图像, 文本) 对的列表
    fn paired_samples(
        &self,
        skip_empty: bool,
    ) -> Result<Vec<(Option<&LineImage>, &str)>, DataSetError> {
        let store = self.base().store();
        store.ensure_loaded("训练样本")?;

        let mut pairs = Vec::with_capacity(store.len());
        for sample in store.samples() {
            match &sample.text {
                Some(text) => pairs.push((sample.image.as_ref(), text.as_str())),
                None if skip_empty => log::info!("跳过空样本 {}", sample.id),
                None => {
                    return Err(DataSetError::MissingLabel {
                        id: sample.id.clone(),
                    });
                }
            }
        }
        Ok(pairs)
    }

    /// 用默认的 rayon 线程池把样本加载进内存，见[`DataSet::load_samples_with`]
    fn load_samples(
        &mut self,
        processes: usize,
        progress_bar: bool,
    ) -> Result<&[Sample], DataSetError>
    where
        Self: Sized,
    {
        self.load_samples_with(&RayonMap, processes, progress_bar)
    }

    /// 把样本加载进内存
    ///
    /// 已加载时直接返回当前样本，不会再次解码。
    /// 否则用`mapper`在`processes`个工作线程上对每个样本调用`load_sample`，
    /// 再按原顺序把结果写回样本；若数据集包含图像，则过滤无效图像
    /// （为空、尺寸为零或所有像素相同）：
    /// - `skip_invalid`为true：记录并打印日志，`remove_invalid`为true时最后将其删除
    /// - 否则：返回`DataSetError::EmptyData`
    ///
    /// 出错时样本与加载状态都保持不变。
    fn load_samples_with<M: ParallelMap>(
        &mut self,
        mapper: &M,
        processes: usize,
        progress_bar: bool,
    ) -> Result<&[Sample], DataSetError>
    where
        Self: Sized,
    {
        if self.is_loaded() {
            return Ok(self.samples());
        }

        let results = mapper.map(
            |sample: &Sample| self.load_sample(sample),
            self.samples(),
            processes,
            LOADING_DESC,
            progress_bar,
        )?;
        let loaded = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        let options = *self.options();
        let mut invalid = Vec::new();
        if self.has_images() {
            for (index, ((image, _), sample)) in loaded.iter().zip(self.samples()).enumerate() {
                let Some(reason) = check_image(image.as_ref()) else {
                    continue;
                };
                if !options.skip_invalid {
                    return Err(DataSetError::EmptyData {
                        id: sample.id.clone(),
                        reason,
                    });
                }
                log::warn!("空数据: 样本 '{}' 的图像{}", sample.id, reason);
                invalid.push(index);
            }
        }

        let store = self.base_mut().store_mut();
        for (sample, (image, text)) in store.samples_mut().iter_mut().zip(loaded) {
            sample.image = image;
            sample.text = text;
        }
        if options.remove_invalid {
            store.remove_indices(&invalid);
        }
        store.mark_loaded();

        Ok(self.samples())
    }
}

/// 图像无效时返回原因
fn check_image(image: Option<&LineImage>) -> Option<InvalidImage> {
    match image {
        None => Some(InvalidImage::Missing),
        Some(image) if image.is_flat() => Some(InvalidImage::Empty),
        Some(_) => None,
    }
}
