//! 样本存储：有序的样本列表 + 显式的加载状态

use crate::data::{DataSetError, Sample};

/// 数据集的加载状态
///
/// `Unloaded` --`mark_loaded`--> `Loaded` --`push`--> `Unloaded`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loaded,
}

/// 有序的样本集合。插入顺序即数据集的规范顺序，存储本身从不重排样本。
#[derive(Debug, Clone, Default)]
pub struct SampleStore {
    samples: Vec<Sample>,
    state: LoadState,
}

impl SampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// 只允许修改已有样本；增删样本必须经过`push`/`remove_indices`
    pub(crate) fn samples_mut(&mut self) -> &mut [Sample] {
        &mut self.samples
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    /// 追加一个样本；存储随之变为`Unloaded`
    pub fn push(&mut self, sample: Sample) -> Result<(), DataSetError> {
        if sample.id.is_empty() {
            return Err(DataSetError::InvalidSample("样本必须带有非空的 id".to_string()));
        }
        self.state = LoadState::Unloaded;
        self.samples.push(sample);
        Ok(())
    }

    /// 未加载时返回`NotLoaded`，`what`描述调用方想访问的内容
    pub fn ensure_loaded(&self, what: &str) -> Result<(), DataSetError> {
        match self.state {
            LoadState::Loaded => Ok(()),
            LoadState::Unloaded => Err(DataSetError::NotLoaded(format!(
                "必须先加载数据集才能访问其{what}"
            ))),
        }
    }

    pub(crate) fn mark_loaded(&mut self) {
        self.state = LoadState::Loaded;
    }

    /// 删除给定位置上的样本
    ///
    /// 必须按下标从大到小删除，否则先删除的样本会让后面的下标错位。
    pub(crate) fn remove_indices(&mut self, indices: &[usize]) {
        let mut indices = indices.to_vec();
        indices.sort_unstable();
        indices.dedup();
        for &index in indices.iter().rev() {
            if index < self.samples.len() {
                self.samples.remove(index);
            }
        }
    }
}
