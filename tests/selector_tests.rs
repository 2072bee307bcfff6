use trace_thumbnail::ThumbnailError;
use trace_thumbnail::core::{
    SelectionContext, find_trailing_digits, rank_candidates, select_element,
};

const CONTEXTS: [SelectionContext; 5] = [
    SelectionContext::Cell,
    SelectionContext::Repetition,
    SelectionContext::Sweep,
    SelectionContext::Protocol,
    SelectionContext::Response,
];

#[test]
fn trailing_digits_take_the_last_run() {
    assert_eq!(find_trailing_digits("123abc321"), Some(321));
    assert_eq!(find_trailing_digits("sweep12"), Some(12));
    assert_eq!(find_trailing_digits("000smallest00"), Some(0));
    assert_eq!(find_trailing_digits("cell7_rep"), Some(7));
}

#[test]
fn names_without_digits_have_no_key() {
    assert_eq!(find_trailing_digits("noDigitsHere"), None);
    assert_eq!(find_trailing_digits(""), None);
}

#[test]
fn oversized_digit_run_saturates() {
    assert_eq!(
        find_trailing_digits("cell99999999999999999999999"),
        Some(u64::MAX)
    );
}

#[test]
fn single_candidate_is_returned_for_every_context_and_index() {
    let candidates = ["only"];
    for context in CONTEXTS {
        for index in [-100, -1, 0, 1, 100] {
            let chosen = select_element(&candidates, index, context).expect("single candidate");
            assert_eq!(chosen, "only");
        }
    }
}

#[test]
fn empty_candidates_fail_with_context_specific_error() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        select_element(&empty, 0, SelectionContext::Cell),
        Err(ThumbnailError::NoCellFound)
    ));
    assert!(matches!(
        select_element(&empty, 0, SelectionContext::Repetition),
        Err(ThumbnailError::NoRepetitionFound)
    ));
    assert!(matches!(
        select_element(&empty, 0, SelectionContext::Sweep),
        Err(ThumbnailError::NoSweepFound)
    ));
    assert!(matches!(
        select_element(&empty, 0, SelectionContext::Protocol),
        Err(ThumbnailError::NoSuchElement {
            context: SelectionContext::Protocol
        })
    ));
    assert!(matches!(
        select_element(&empty, 0, SelectionContext::Response),
        Err(ThumbnailError::NoSuchElement {
            context: SelectionContext::Response
        })
    ));
}

#[test]
fn smallest_trailing_number_wins_by_default() {
    let candidates = ["cell234", "cell123", "000smallest00"];
    let chosen = select_element(&candidates, 0, SelectionContext::Cell).expect("selection");
    assert_eq!(chosen, "000smallest00");
}

#[test]
fn negative_index_picks_from_the_end_of_ranking() {
    let candidates = ["cell234", "cell123", "000smallest00"];
    let chosen = select_element(&candidates, -1, SelectionContext::Cell).expect("selection");
    assert_eq!(chosen, "cell234");
}

#[test]
fn names_without_digits_rank_last() {
    let candidates = ["noDigits", "sweep2", "sweep10"];
    assert_eq!(rank_candidates(&candidates), vec![1, 2, 0]);
    let chosen = select_element(&candidates, -1, SelectionContext::Sweep).expect("selection");
    assert_eq!(chosen, "noDigits");
}

#[test]
fn equal_keys_keep_input_order() {
    let candidates = ["b1", "a1", "c1"];
    assert_eq!(rank_candidates(&candidates), vec![0, 1, 2]);
    let chosen = select_element(&candidates, 0, SelectionContext::Repetition).expect("selection");
    assert_eq!(chosen, "b1");

    let no_digits = ["beta", "alpha"];
    let chosen = select_element(&no_digits, 0, SelectionContext::Cell).expect("selection");
    assert_eq!(chosen, "beta");
}

#[test]
fn out_of_range_index_clamps() {
    let candidates = ["sweep3", "sweep1", "sweep2"];
    let high = select_element(&candidates, 100, SelectionContext::Sweep).expect("high");
    let low = select_element(&candidates, -100, SelectionContext::Sweep).expect("low");
    assert_eq!(high, "sweep3");
    assert_eq!(low, "sweep1");
}

#[test]
fn owned_candidate_lists_are_accepted() {
    let candidates = vec!["rep2".to_owned(), "rep1".to_owned()];
    let chosen =
        select_element(&candidates, 0, SelectionContext::Repetition).expect("owned strings");
    assert_eq!(chosen, "rep1");
}
