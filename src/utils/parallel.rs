//! 并行映射能力
//!
//! 数据集的批量加载只依赖[`ParallelMap`]这一窄接口：
//! “用 P 个工作线程把函数映射到 N 个元素上，可选地显示进度”，
//! 且返回结果的顺序必须与输入一致。

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::data::DataSetError;

/// 保序的并行映射
pub trait ParallelMap {
    /// 对`items`中的每个元素调用`f`，按输入顺序返回结果
    ///
    /// # 参数
    /// - `workers`: 工作线程数，`<= 1`时顺序执行
    /// - `desc`: 进度条上显示的描述
    /// - `show_progress`: 是否显示进度条
    fn map<T, R, F>(
        &self,
        f: F,
        items: &[T],
        workers: usize,
        desc: &str,
        show_progress: bool,
    ) -> Result<Vec<R>, DataSetError>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send;
}

/// 基于 rayon 线程池的实现（默认）
///
/// 每次调用都会创建一个恰好含`workers`个线程的独立线程池，
/// 不占用全局线程池。
#[derive(Debug, Clone, Copy, Default)]
pub struct RayonMap;

impl ParallelMap for RayonMap {
    fn map<T, R, F>(
        &self,
        f: F,
        items: &[T],
        workers: usize,
        desc: &str,
        show_progress: bool,
    ) -> Result<Vec<R>, DataSetError>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        let progress = new_progress_bar(items.len(), desc, show_progress);
        let run = |item: &T| {
            let result = f(item);
            progress.inc(1);
            result
        };

        let results: Vec<R> = if workers > 1 && items.len() > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .map_err(|e| {
                    DataSetError::WorkerPool(format!("无法创建含 {workers} 个线程的线程池: {e}"))
                })?;
            // 索引式并行迭代器在 collect 时按原顺序重组结果
            pool.install(|| items.par_iter().map(&run).collect())
        } else {
            items.iter().map(&run).collect()
        };

        progress.finish_and_clear();
        Ok(results)
    }
}

/// 始终在调用线程上顺序执行，忽略`workers`
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialMap;

impl ParallelMap for SequentialMap {
    fn map<T, R, F>(
        &self,
        f: F,
        items: &[T],
        _workers: usize,
        desc: &str,
        show_progress: bool,
    ) -> Result<Vec<R>, DataSetError>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        let progress = new_progress_bar(items.len(), desc, show_progress);
        let results: Vec<R> = items
            .iter()
            .map(|item| {
                let result = f(item);
                progress.inc(1);
                result
            })
            .collect();
        progress.finish_and_clear();
        Ok(results)
    }
}

fn new_progress_bar(len: usize, desc: &str, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{msg}: {wide_bar} {pos}/{len} [{elapsed_precise}<{eta_precise}]")
    {
        bar.set_style(style);
    }
    bar.set_message(desc.to_string());
    bar
}
