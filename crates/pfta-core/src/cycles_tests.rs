use super::*;

fn map(pairs: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    pairs
        .iter()
        .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
        .collect()
}

#[test]
fn acyclic_graph_has_no_cycles() {
    let adj = map(&[("a", &["b"]), ("b", &["c"]), ("c", &[])]);
    assert!(find_cycles(&adj).is_empty());
}

#[test]
fn three_cycle_is_found_rotated_to_smallest_node() {
    let adj = map(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"])]);
    let cycles = find_cycles(&adj);
    assert_eq!(cycles, vec![vec!["a".to_string(), "b".to_string(), "c".to_string()]]);
}

#[test]
fn self_loop_is_a_length_one_cycle() {
    let adj = map(&[("a", &["a"])]);
    let cycles = find_cycles(&adj);
    assert_eq!(cycles, vec![vec!["a".to_string()]]);
}

#[test]
fn disjoint_cycles_are_both_reported() {
    let adj = map(&[
        ("a", &["b"]),
        ("b", &["a"]),
        ("x", &["y"]),
        ("y", &["x"]),
    ]);
    let cycles = find_cycles(&adj);
    assert_eq!(cycles.len(), 2);
    assert!(cycles.contains(&vec!["a".to_string(), "b".to_string()]));
    assert!(cycles.contains(&vec!["x".to_string(), "y".to_string()]));
}

#[test]
fn diamond_shape_with_no_back_edge_is_acyclic() {
    let adj = map(&[
        ("top", &["left", "right"]),
        ("left", &["bottom"]),
        ("right", &["bottom"]),
        ("bottom", &[]),
    ]);
    assert!(find_cycles(&adj).is_empty());
}
