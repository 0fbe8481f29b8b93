//! 图像/文本路径的配对与校验
//!
//! 一张行图像与其标注文本通过“基名”配对：`a/line_001.bin.png`与`b/line_001.gt.txt`
//! 的基名都是`line_001`。

use std::path::Path;

use crate::data::DataSetError;

/// 在第一个`.`处拆分文件名，返回 (基名, 全部扩展名)
///
/// ```ignore
/// assert_eq!(split_all_ext("0001.bin.png"), ("0001", ".bin.png"));
/// assert_eq!(split_all_ext("README"), ("README", ""));
/// ```
pub fn split_all_ext(file_name: &str) -> (&str, &str) {
    match file_name.find('.') {
        Some(pos) => file_name.split_at(pos),
        None => (file_name, ""),
    }
}

/// 路径的基名：去掉目录与全部扩展名后的文件名
pub fn base_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    split_all_ext(&file_name).0.to_string()
}

/// 校验一对 (图像路径, 文本路径)，返回可作为样本 id 的基名
///
/// - 两者均为空：数据点为空，不允许
/// - `non_existing_as_empty`为false时，给出的文件必须存在
/// - 两者都给出时，基名必须一致
///
/// id 优先取图像的基名，否则取文本的基名。
pub fn pair_paths(
    image: Option<&Path>,
    text: Option<&Path>,
    non_existing_as_empty: bool,
) -> Result<String, DataSetError> {
    if image.is_none() && text.is_none() {
        return Err(DataSetError::Pairing(
            "不允许空数据点：图像与文本文件均为 None".to_string(),
        ));
    }

    let image_base_name = match image {
        Some(path) => {
            ensure_exists(path, non_existing_as_empty)?;
            Some(base_name(path))
        }
        None => None,
    };

    let text_base_name = match text {
        Some(path) => {
            ensure_exists(path, non_existing_as_empty)?;
            Some(base_name(path))
        }
        None => None,
    };

    if let (Some(image_bn), Some(text_bn)) = (&image_base_name, &text_base_name) {
        if image_bn != text_bn {
            return Err(DataSetError::Pairing(format!(
                "图像基名应与文本基名一致，实际为 '{image_bn}' != '{text_bn}'"
            )));
        }
    }

    let id = image_base_name.or(text_base_name).unwrap_or_default();
    if id.is_empty() {
        let path = image.or(text).map(|p| p.display().to_string()).unwrap_or_default();
        return Err(DataSetError::Pairing(format!(
            "无法从路径 '{path}' 中得到非空的基名"
        )));
    }
    Ok(id)
}

fn ensure_exists(path: &Path, non_existing_as_empty: bool) -> Result<(), DataSetError> {
    if !non_existing_as_empty && !path.exists() {
        return Err(DataSetError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}
