use arraylist::ArrayList;

#[test]
fn test_list_initialization() {
    let list: ArrayList<i32> = ArrayList::new();

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.capacity(), 0);
    assert!(list.values().is_empty());
}

#[test]
fn test_add_preserves_order() {
    let mut list = ArrayList::new();

    list.add(["hello", "world"]);
    list.push("again");

    assert_eq!(list.len(), 3);
    assert_eq!(list.get(0), Some(&"hello"));
    assert_eq!(list.get(1), Some(&"world"));
    assert_eq!(list.get(2), Some(&"again"));
}

#[test]
fn test_size_tracks_every_add() {
    let mut list = ArrayList::new();
    let mut total = 0;

    for batch in 0..20 {
        list.add(0..batch);
        total += batch;
        assert_eq!(list.len(), total);
        assert!(list.capacity() >= list.len());
    }
}

#[test]
fn test_get_out_of_bounds() {
    let mut list = ArrayList::new();
    assert_eq!(list.get(0), None);

    list.push(1);
    assert_eq!(list.get(0), Some(&1));
    assert_eq!(list.get(1), None);
    assert_eq!(list.get(usize::MAX), None);
}

#[test]
fn test_get_mut() {
    let mut list: ArrayList<i32> = [1, 2, 3].into_iter().collect();

    if let Some(value) = list.get_mut(1) {
        *value = 20;
    }
    assert!(list.get_mut(3).is_none());
    assert_eq!(list.values(), vec![1, 20, 3]);
}

#[test]
fn test_set_operation() {
    let mut list: ArrayList<&str> = ["a", "b", "c"].into_iter().collect();

    list.set(0, "x");
    assert_eq!(list.values(), vec!["x", "b", "c"]);

    // Index equal to the length appends
    list.set(3, "d");
    assert_eq!(list.values(), vec!["x", "b", "c", "d"]);

    // Beyond the length is ignored
    list.set(10, "z");
    assert_eq!(list.values(), vec!["x", "b", "c", "d"]);
}

#[test]
fn test_insert_in_the_middle() {
    let mut list: ArrayList<i32> = [1, 2, 5, 6].into_iter().collect();

    list.insert(2, [3, 4]);

    assert_eq!(list.values(), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(list.len(), 6);
}

#[test]
fn test_insert_at_front() {
    let mut list: ArrayList<&str> = ["c"].into_iter().collect();

    list.insert(0, ["a", "b"]);
    list.insert(0, ["_"]);

    assert_eq!(list.values(), vec!["_", "a", "b", "c"]);
}

#[test]
fn test_insert_at_length_is_append() {
    let mut inserted: ArrayList<i32> = [1, 2].into_iter().collect();
    let mut added: ArrayList<i32> = [1, 2].into_iter().collect();

    inserted.insert(2, [3]);
    added.add([3]);

    assert_eq!(inserted, added);
    assert_eq!(inserted.capacity(), added.capacity());
}

#[test]
fn test_insert_beyond_length_is_ignored() {
    let mut list: ArrayList<i32> = [1, 2].into_iter().collect();
    let capacity = list.capacity();

    list.insert(3, [9]);
    list.insert(usize::MAX, [9, 9]);

    assert_eq!(list.values(), vec![1, 2]);
    assert_eq!(list.capacity(), capacity);
}

#[test]
fn test_insert_into_empty_list() {
    let mut list = ArrayList::new();

    list.insert(0, [1, 2]);
    list.insert(1, [7]);

    assert_eq!(list.values(), vec![1, 7, 2]);
}

#[test]
fn test_remove_shifts_left() {
    let mut list: ArrayList<i32> = [10, 20, 30, 40].into_iter().collect();

    assert_eq!(list.remove(1), Some(20));

    assert_eq!(list.values(), vec![10, 30, 40]);
    assert_eq!(list.len(), 3);

    assert_eq!(list.remove(2), Some(40));
    assert_eq!(list.values(), vec![10, 30]);
}

#[test]
fn test_remove_out_of_bounds() {
    let mut list: ArrayList<i32> = [1, 2].into_iter().collect();

    assert_eq!(list.remove(2), None);
    assert_eq!(list.values(), vec![1, 2]);

    let mut empty: ArrayList<i32> = ArrayList::new();
    assert_eq!(empty.remove(0), None);
}

#[test]
fn test_contains() {
    let list: ArrayList<&str> = ["a", "b", "c"].into_iter().collect();

    assert!(list.contains(&["a"]));
    assert!(list.contains(&["c", "a"]));
    assert!(!list.contains(&["a", "d"]));
    assert!(!list.contains(&["d"]));
}

#[test]
fn test_contains_empty_query() {
    let list: ArrayList<i32> = [1].into_iter().collect();
    let empty: ArrayList<i32> = ArrayList::new();

    assert!(list.contains(&[]));
    assert!(empty.contains(&[]));
    assert!(!empty.contains(&[1]));
}

#[test]
fn test_index_of() {
    let mut list: ArrayList<char> = ['a', 'b', 'a'].into_iter().collect();

    assert_eq!(list.index_of(&'a'), Some(0));
    assert_eq!(list.index_of(&'b'), Some(1));
    assert_eq!(list.index_of(&'z'), None);

    // Elements removed from the list are not found
    list.remove(0);
    list.remove(0);
    list.remove(0);
    assert_eq!(list.index_of(&'a'), None);
}

#[test]
fn test_values_is_a_copy() {
    let list: ArrayList<i32> = [1, 2, 3].into_iter().collect();

    let mut copy = list.values();
    copy[0] = 100;
    copy.push(4);

    assert_eq!(list.values(), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_clear_operation() {
    let mut list = ArrayList::new();
    list.add(0..100);
    assert!(list.capacity() >= 100);

    list.clear();

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.capacity(), 0);

    list.push(1);
    assert_eq!(list.values(), vec![1]);
}

#[test]
fn test_swap() {
    let mut list: ArrayList<i32> = [1, 2, 3].into_iter().collect();

    list.swap(0, 2);
    assert_eq!(list.values(), vec![3, 2, 1]);

    list.swap(1, 1);
    assert_eq!(list.values(), vec![3, 2, 1]);

    list.swap(0, 3);
    list.swap(5, 1);
    assert_eq!(list.values(), vec![3, 2, 1]);
}

#[test]
fn test_sort_natural_order() {
    let mut list: ArrayList<i32> = [5, 3, 9, 1, 3].into_iter().collect();

    list.sort();

    assert_eq!(list.values(), vec![1, 3, 3, 5, 9]);
}

#[test]
fn test_sort_by_comparator() {
    let mut list: ArrayList<&str> = ["pear", "fig", "banana"].into_iter().collect();

    list.sort_by(|a, b| a.len().cmp(&b.len()));
    assert_eq!(list.values(), vec!["fig", "pear", "banana"]);

    list.sort_by(|a, b| b.cmp(a));
    assert_eq!(list.values(), vec!["pear", "fig", "banana"]);
}

#[test]
fn test_sort_by_less() {
    let mut list: ArrayList<i32> = [2, -7, 4, 0].into_iter().collect();

    list.sort_by_less(|a, b| a.abs() < b.abs());

    assert_eq!(list.values(), vec![0, 2, 4, -7]);
}

#[test]
fn test_sort_ignores_spare_capacity() {
    let mut list = ArrayList::with_capacity(10);
    list.add([3, 1, 2]);

    list.sort();

    assert_eq!(list.values(), vec![1, 2, 3]);
    assert_eq!(list.capacity(), 10);
}

#[test]
fn test_from_and_extend() {
    let mut list = ArrayList::from(vec![1, 2]);
    assert_eq!(list.capacity(), 2);

    list.extend([3, 4]);

    assert_eq!(list.values(), vec![1, 2, 3, 4]);
}

#[test]
fn test_equality_ignores_capacity() {
    let mut spacious = ArrayList::with_capacity(50);
    spacious.add([1, 2, 3]);
    let tight = ArrayList::from(vec![1, 2, 3]);

    assert_eq!(spacious, tight);

    spacious.push(4);
    assert_ne!(spacious, tight);
}

#[test]
fn test_debug_and_display() {
    let list: ArrayList<i32> = [1, 2, 3].into_iter().collect();

    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    assert_eq!(format!("{list}"), "ArrayList\n1, 2, 3");
}
