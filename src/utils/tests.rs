use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crate::utils::{ParallelMap, RayonMap, SequentialMap};

#[test]
fn test_rayon_map_preserves_order() {
    let items: Vec<u64> = (0..64).collect();
    // 让前面的元素更慢，迫使工作线程乱序完成
    let results = RayonMap
        .map(
            |&x: &u64| {
                thread::sleep(Duration::from_millis(64 - x));
                x * 10
            },
            &items,
            4,
            "测试",
            false,
        )
        .unwrap();

    assert_eq!(results, items.iter().map(|x| x * 10).collect::<Vec<_>>());
}

#[test]
fn test_rayon_map_single_worker_falls_back_to_sequential() {
    let items = vec!["a", "bb", "ccc"];
    let results = RayonMap.map(|s: &&str| s.len(), &items, 1, "测试", false).unwrap();
    assert_eq!(results, vec![1, 2, 3]);
}

#[test]
fn test_map_calls_function_once_per_item() {
    let items: Vec<usize> = (0..17).collect();
    let calls = AtomicUsize::new(0);
    let f = |&x: &usize| {
        calls.fetch_add(1, Ordering::SeqCst);
        x
    };

    RayonMap.map(f, &items, 3, "测试", false).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 17);

    SequentialMap.map(f, &items, 3, "测试", false).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 34);
}

#[test]
fn test_map_empty_input() {
    let items: Vec<i32> = vec![];
    let results = RayonMap.map(|x: &i32| x + 1, &items, 8, "测试", true).unwrap();
    assert!(results.is_empty());
}
