use kitbag::collection::Key;
use kitbag::mapping;
use kitbag::traverse::{each, index_of};

#[test]
fn each_visits_sequence_elements_in_order() {
    let numbers = vec![10, 20, 30];
    let mut visited = Vec::new();
    each(&numbers, |value, key, _| {
        visited.push((key, *value));
    });
    assert_eq!(
        visited,
        vec![(Key::Index(0), 10), (Key::Index(1), 20), (Key::Index(2), 30)]
    );
}

#[test]
fn each_visits_mapping_entries_in_insertion_order() {
    let scores = mapping! {"one" => 1, "two" => 2, "three" => 3};
    let mut keys = Vec::new();
    let mut values = Vec::new();
    each(&scores, |value, key, _| {
        keys.push(format!("{}", key));
        values.push(*value);
    });
    assert_eq!(keys, vec!["one", "two", "three"]);
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn each_passes_a_view_of_the_whole_collection() {
    let letters = ["a", "b", "c"];
    let mut lengths = Vec::new();
    each(&letters, |_, _, all| {
        lengths.push(all.len());
    });
    assert_eq!(lengths, vec![3, 3, 3]);
}

#[test]
fn each_never_calls_back_on_an_empty_collection() {
    let nothing: Vec<i32> = Vec::new();
    let mut calls = 0;
    each(&nothing, |_, _, _| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn index_of_finds_the_first_occurrence() {
    let numbers = [1, 2, 3, 2, 1];
    assert_eq!(index_of(&numbers, &2), Some(1));
    assert_eq!(index_of(&numbers, &1), Some(0));
}

#[test]
fn index_of_reports_missing_values_as_none() {
    let numbers = [1, 2, 3];
    assert_eq!(index_of(&numbers, &7), None);
    let nothing: [i32; 0] = [];
    assert_eq!(index_of(&nothing, &7), None);
}
