//! 数据集配置单元测试

use crate::data::{DataSetError, DataSetOptions, FileDataSetOptions};

#[test]
fn test_default_options() {
    let options = DataSetOptions::default();
    assert!(!options.skip_invalid);
    assert!(options.remove_invalid);

    let options = FileDataSetOptions::default();
    assert!(!options.base.skip_invalid);
    assert!(options.base.remove_invalid);
    assert!(!options.non_existing_as_empty);
}

#[test]
fn test_options_builder() {
    let options = FileDataSetOptions::default()
        .skip_invalid(true)
        .remove_invalid(false)
        .non_existing_as_empty(true);
    assert_eq!(
        options.base,
        DataSetOptions {
            skip_invalid: true,
            remove_invalid: false,
        }
    );
    assert!(options.non_existing_as_empty);
}

#[test]
fn test_options_from_json() {
    // 缺省字段取默认值
    let options = FileDataSetOptions::from_json(r#"{"skip_invalid": true}"#).unwrap();
    assert!(options.base.skip_invalid);
    assert!(options.base.remove_invalid);
    assert!(!options.non_existing_as_empty);

    let options = FileDataSetOptions::from_json(
        r#"{"remove_invalid": false, "non_existing_as_empty": true}"#,
    )
    .unwrap();
    assert!(!options.base.skip_invalid);
    assert!(!options.base.remove_invalid);
    assert!(options.non_existing_as_empty);

    let options = DataSetOptions::from_json("{}").unwrap();
    assert_eq!(options, DataSetOptions::default());
}

#[test]
fn test_options_from_invalid_json() {
    let result = DataSetOptions::from_json(r#"{"skip_invalid": "yes"}"#);
    assert!(matches!(result, Err(DataSetError::ConfigParse(_))));
}

#[test]
fn test_options_serialize_flat() {
    let options = FileDataSetOptions::default().skip_invalid(true);
    let json = serde_json::to_value(options).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "skip_invalid": true,
            "remove_invalid": true,
            "non_existing_as_empty": false,
        })
    );
}
