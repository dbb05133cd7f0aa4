use indoc::indoc;

use crate::Typelist;

#[test]
fn flag_selects_interface() {
    let typelist = Typelist::parse("/A\n/B 0\n/C 1");

    assert_eq!(typelist.types().collect::<Vec<_>>(), vec!["/A", "/B", "/C"]);
    assert_eq!(typelist.interface_types().collect::<Vec<_>>(), vec!["/A", "/C"]);
}

#[test]
fn other_digits_are_internal() {
    let typelist = Typelist::parse("/base/Frame 2");

    assert!(typelist.contains("/base/Frame"));
    assert!(!typelist.is_interface("/base/Frame"));
}

#[test]
fn array_suffix_is_not_a_flag() {
    let unflagged = Typelist::parse("/unsigned char[8]");
    assert!(unflagged.contains("/unsigned char[8]"));
    assert!(unflagged.is_interface("/unsigned char[8]"));

    let flagged = Typelist::parse("/unsigned char[8] 0");
    assert!(flagged.contains("/unsigned char[8]"));
    assert!(!flagged.is_interface("/unsigned char[8]"));
}

#[test]
fn multi_digit_suffix_is_part_of_the_name() {
    let typelist = Typelist::parse("/base/Frame 12");

    assert!(typelist.contains("/base/Frame 12"));
    assert!(typelist.is_interface("/base/Frame 12"));
}

#[test]
fn blank_lines_and_padding_are_ignored() {
    let typelist = Typelist::parse("\n  /A 0  \n\n\t/B\n");

    assert_eq!(typelist.len(), 2);
    assert_eq!(typelist.iter().collect::<Vec<_>>(), vec![("/A", false), ("/B", true)]);
}

#[test]
fn insert_promotes_to_interface() {
    let mut typelist = Typelist::new();
    typelist.insert("/A", false);
    typelist.insert("/A", true);
    typelist.insert("/A", false);

    assert_eq!(typelist.len(), 1);
    assert!(typelist.is_interface("/A"));
}

#[test]
fn text_round_trip() {
    let text = indoc! {"
        /base/Time
        /base/Angle 0
        /std/vector</base/Time> 1
        /unsigned char[8] 0
    "};
    let typelist = Typelist::parse(text);

    let rendered = typelist.to_text();
    insta::assert_snapshot!(rendered.trim_end(), @r"
    /base/Time 1
    /base/Angle 0
    /std/vector</base/Time> 1
    /unsigned char[8] 0
    ");
    assert_eq!(Typelist::parse(&rendered), typelist);
}
