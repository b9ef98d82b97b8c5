use super::*;
use crate::call_args;

#[test]
fn plain_text_passes_through() {
    assert_eq!(render("start", &CallArgs::new()).unwrap(), "start");
    assert_eq!(render("", &CallArgs::new()).unwrap(), "");
}

#[test]
fn automatic_fields_consume_in_order() {
    let args = call_args!["a", "b", "c"];
    assert_eq!(render("{}-{}-{}", &args).unwrap(), "a-b-c");
}

#[test]
fn manual_fields_may_repeat_and_reorder() {
    let args = call_args!["x", "y"];
    assert_eq!(render("{1}{0}{1}", &args).unwrap(), "yxy");
}

#[test]
fn named_fields_use_named_arguments() {
    let args = call_args![path = "/tmp/a", size = 10];
    assert_eq!(render("{path} ({size} bytes)", &args).unwrap(), "/tmp/a (10 bytes)");
}

#[test]
fn unused_arguments_are_ignored() {
    let args = call_args![1, 2, 3, extra = "x"];
    assert_eq!(render("first={}", &args).unwrap(), "first=1");
}

#[test]
fn doubled_braces_are_literals() {
    let args = call_args![7];
    assert_eq!(render("{{}} {{{}}}", &args).unwrap(), "{} {7}");
}

#[test]
fn unmatched_braces_are_rejected() {
    let args = call_args![1];
    assert_eq!(render("{", &args), Err(FormatError::UnmatchedOpen));
    assert_eq!(render("{0", &args), Err(FormatError::UnmatchedOpen));
    assert_eq!(render("{a{b}", &args), Err(FormatError::UnmatchedOpen));
    assert_eq!(render("}", &args), Err(FormatError::UnmatchedClose));
    assert_eq!(render("x } y", &args), Err(FormatError::UnmatchedClose));
}

#[test]
fn mixing_numbering_styles_fails() {
    let args = call_args![1, 2];
    assert_eq!(render("{} {0}", &args), Err(FormatError::MixedNumbering));
    assert_eq!(render("{0} {}", &args), Err(FormatError::MixedNumbering));
}

#[test]
fn named_fields_do_not_affect_numbering() {
    let args = call_args![1, 2, k = "v"];
    assert_eq!(render("{} {k} {}", &args).unwrap(), "1 v 2");
    assert_eq!(render("{1} {k} {0}", &args).unwrap(), "2 v 1");
}

#[test]
fn missing_arguments_are_reported() {
    let args = call_args![1];
    assert_eq!(render("{} {}", &args), Err(FormatError::MissingIndex(1)));
    assert_eq!(render("{5}", &args), Err(FormatError::MissingIndex(5)));
    assert_eq!(render("{who}", &args), Err(FormatError::MissingName("who".into())));
}

#[test]
fn attribute_access_is_not_a_field_name() {
    let args = call_args![1];
    assert_eq!(
        render("{0.real}", &args),
        Err(FormatError::InvalidField("0.real".into()))
    );
    assert_eq!(
        render("{a-b}", &args),
        Err(FormatError::InvalidField("a-b".into()))
    );
}

#[test]
fn width_and_alignment() {
    let args = call_args!["ab", 5];
    assert_eq!(render("[{:5}]", &args).unwrap(), "[ab   ]");
    assert_eq!(render("[{0:>5}]", &args).unwrap(), "[   ab]");
    assert_eq!(render("[{0:^6}]", &args).unwrap(), "[  ab  ]");
    assert_eq!(render("[{1:4}]", &args).unwrap(), "[   5]");
    assert_eq!(render("[{1:*<4}]", &args).unwrap(), "[5***]");
    assert_eq!(render("[{1:0>3}]", &args).unwrap(), "[005]");
}

#[test]
fn zero_flag_pads_numbers_after_the_sign() {
    let args = call_args![3, -3, -1.5, "ab"];
    assert_eq!(render("{0:05}", &args).unwrap(), "00003");
    assert_eq!(render("{1:05}", &args).unwrap(), "-0003");
    assert_eq!(render("{2:06.1}", &args).unwrap(), "-001.5");
    assert_eq!(render("{3:05}", &args).unwrap(), "ab000");
}

#[test]
fn zero_flag_yields_to_explicit_fill_and_alignment() {
    let args = call_args![3];
    assert_eq!(render("{:<05}", &args).unwrap(), "30000");
    assert_eq!(render("{:*<05}", &args).unwrap(), "3****");
    assert_eq!(render("{:>05}", &args).unwrap(), "00003");
    assert_eq!(render("{:0}", &args).unwrap(), "3");
}

#[test]
fn width_smaller_than_text_keeps_text() {
    let args = call_args!["longer"];
    assert_eq!(render("{:3}", &args).unwrap(), "longer");
}

#[test]
fn precision_applies_to_floats_and_strings() {
    let args = call_args![1.23456, "abcdef"];
    assert_eq!(render("{0:.2}", &args).unwrap(), "1.23");
    assert_eq!(render("{0:8.3}", &args).unwrap(), "   1.235");
    assert_eq!(render("{1:.3}", &args).unwrap(), "abc");
}

#[test]
fn precision_on_integers_is_invalid() {
    let args = call_args![3];
    assert_eq!(
        render("{:.2}", &args),
        Err(FormatError::InvalidSpec(":.2".into()))
    );
}

#[test]
fn malformed_specs_are_rejected() {
    let args = call_args![1];
    assert_eq!(render("{:x}", &args), Err(FormatError::InvalidSpec("x".into())));
    assert_eq!(render("{:5.}", &args), Err(FormatError::InvalidSpec("5.".into())));
}

#[test]
fn unicode_width_counts_characters() {
    let args = call_args!["é"];
    assert_eq!(render("[{:>3}]", &args).unwrap(), "[  é]");
}
