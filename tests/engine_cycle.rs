use quick_search::engines::{self, ENGINES};

#[test]
fn cycling_forward_once_per_engine_returns_to_start() {
    for start in 0..ENGINES.len() {
        let mut index = start;
        for _ in 0..ENGINES.len() {
            index = engines::cycle(index, 1);
        }
        assert_eq!(index, start);
    }
}

#[test]
fn cycling_backward_from_the_first_engine_wraps_to_the_last() {
    assert_eq!(engines::cycle(0, -1), ENGINES.len() - 1);
}

#[test]
fn forward_then_backward_is_a_no_op() {
    for start in 0..ENGINES.len() {
        assert_eq!(engines::cycle(engines::cycle(start, 1), -1), start);
    }
}

#[test]
fn first_letter_lookup_is_case_insensitive_and_ordered() {
    // Google comes before GitHub in the registry, so "g" means Google.
    assert_eq!(engines::by_first_letter('g'), engines::position_of("google"));
    assert_eq!(engines::by_first_letter('G'), engines::position_of("google"));
    assert_eq!(engines::by_first_letter('y'), engines::position_of("youtube"));
    assert_eq!(engines::by_first_letter('z'), None);
}

#[test]
fn out_of_range_indices_are_clamped_to_the_first_engine() {
    assert_eq!(engines::clamp_index(ENGINES.len()), 0);
    assert_eq!(engines::clamp_index(usize::MAX), 0);
    assert_eq!(engines::clamp_index(2), 2);
}
