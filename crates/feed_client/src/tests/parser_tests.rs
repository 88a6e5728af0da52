use super::*;

#[test]
fn parses_headers_with_their_packages_in_feed_order() {
    let feed = "libfoo-transition:\n  - libfoo1\n  - libfoo1-dev\nlibbar-transition\n  - libbar2\n";

    let transitions = parse_transitions(feed);
    assert_eq!(transitions.len(), 2);
    assert_eq!(transitions[0].name, "libfoo-transition");
    assert_eq!(transitions[0].packages, vec!["libfoo1", "libfoo1-dev"]);
    assert_eq!(transitions[1].name, "libbar-transition");
    assert_eq!(transitions[1].packages, vec!["libbar2"]);
}

#[test]
fn keeps_final_transition_without_trailing_newline() {
    let feed = "perl-transition:\n  - libperl5.36\n  - perl-base";

    let transitions = parse_transitions(feed);
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].packages, vec!["libperl5.36", "perl-base"]);
}

#[test]
fn consecutive_headers_yield_an_empty_package_list() {
    let feed = "empty-transition:\nfull-transition:\n  - pkg\n";

    let transitions = parse_transitions(feed);
    assert_eq!(transitions.len(), 2);
    assert_eq!(transitions[0].name, "empty-transition");
    assert!(transitions[0].packages.is_empty());
    assert_eq!(transitions[1].packages, vec!["pkg"]);
}

#[test]
fn drops_package_lines_before_any_header() {
    let feed = "  - orphan1\n  - orphan2\n";
    assert!(parse_transitions(feed).is_empty());

    let feed = "  - orphan\nreal-transition:\n  - member\n";
    let transitions = parse_transitions(feed);
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].name, "real-transition");
    assert_eq!(transitions[0].packages, vec!["member"]);
}

#[test]
fn header_without_colon_keeps_its_name_verbatim() {
    let transitions = parse_transitions("bare-header\n");
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].name, "bare-header");
}

#[test]
fn strips_exactly_one_trailing_colon() {
    let transitions = parse_transitions("odd-name::\n");
    assert_eq!(transitions[0].name, "odd-name:");
}

#[test]
fn whitespace_only_lines_never_open_or_close_a_record() {
    let feed = "libfoo-transition:\n   \n  - libfoo1\n\n  - libfoo1-dev\n";

    let transitions = parse_transitions(feed);
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].packages, vec!["libfoo1", "libfoo1-dev"]);
}

#[test]
fn indentation_width_is_irrelevant_for_package_lines() {
    let feed = "libfoo-transition:\n - libfoo1\n        - libfoo1-dev\n\t- libfoo-doc\n";

    let transitions = parse_transitions(feed);
    assert_eq!(
        transitions[0].packages,
        vec!["libfoo1", "libfoo1-dev", "libfoo-doc"]
    );
}

#[test]
fn ignores_indented_lines_without_the_package_marker() {
    let feed = "libfoo-transition:\n  status: ongoing\n  - libfoo1\n";

    let transitions = parse_transitions(feed);
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].packages, vec!["libfoo1"]);
}

#[test]
fn empty_input_yields_no_transitions() {
    assert!(parse_transitions("").is_empty());
    assert!(parse_transitions("\n\n  \n").is_empty());
}

#[test]
fn duplicate_packages_are_kept_in_order() {
    let feed = "dup-transition:\n  - same\n  - same\n";

    let transitions = parse_transitions(feed);
    assert_eq!(transitions[0].packages, vec!["same", "same"]);
}
