//! Integration tests for tenrso-ragged
//!
//! These tests walk through the public API the way a caller preparing
//! operands for matrix and set operations would.

use regex::Regex;
use tenrso_ragged::{
    array_size, contains, filter, filter_regexp, flatten, for_each, generalize,
    get_array_data_type, identify, initial, join, last, map, nested, unsqueeze, ElementType,
    Identified, Nested, RaggedError, Scalar, ScalarKind,
};

fn s(value: impl Into<Scalar>) -> Nested<Scalar> {
    Nested::Scalar(value.into())
}

#[test]
fn test_unsqueeze_scenarios() {
    assert_eq!(unsqueeze(nested!([1, 2, 3]), 2, 0), nested!([[1], [2], [3]]));
    assert_eq!(
        unsqueeze(nested!([1, 2, 3]), 3, 0),
        nested!([[[1]], [[2]], [[3]]])
    );
    assert_eq!(unsqueeze(Nested::Scalar(1), 2, 0), nested!([[1]]));
    assert_eq!(unsqueeze(Nested::Scalar(1), 3, 0), nested!([[[1]]]));
    assert_eq!(unsqueeze(nested!([1, 2, 3]), 1, 0), nested!([1, 2, 3]));
    assert_eq!(unsqueeze(nested!([[1, 2]]), 2, 0), nested!([[1, 2]]));
    assert_eq!(unsqueeze(Nested::<i32>::empty(), 2, 0), Nested::empty());
    assert_eq!(unsqueeze(Nested::<i32>::empty(), 3, 0), Nested::empty());
}

#[test]
fn test_bring_two_operands_to_same_rank() {
    let vector = nested!([1.0, 2.0]);
    let matrix = nested!([[1.0, 2.0], [3.0, 4.0]]);

    let lifted = unsqueeze(vector, 2, 0);
    assert_eq!(lifted, nested!([[1.0], [2.0]]));
    assert_eq!(array_size(&lifted), array_size(&matrix));
    assert_eq!(
        get_array_data_type(&lifted, |_: &f64| "number"),
        get_array_data_type(&matrix, |_: &f64| "number")
    );
}

#[test]
fn test_flatten_scenarios() {
    assert_eq!(flatten(&nested!([1, [2, [3, [4]]]])), nested!([1, 2, 3, 4]));
    assert_eq!(flatten(&nested!([1, [], 3])), nested!([1, 3]));
    assert_eq!(flatten(&Nested::<i32>::empty()), Nested::empty());
    assert_eq!(flatten(&Nested::Scalar(1)), Nested::Scalar(1));
}

#[test]
fn test_map_and_for_each() {
    assert_eq!(map(&nested!([1, 2, 3]), |x| x * 2).unwrap(), nested!([2, 4, 6]));
    assert_eq!(map(&Nested::<i32>::empty(), |x| x * 2).unwrap(), Nested::empty());

    let mut calls = 0;
    for_each(&nested!([1, 2, 3]), |_| calls += 1).unwrap();
    assert_eq!(calls, 3);

    let null = Nested::Scalar(Scalar::Null);
    assert!(matches!(
        for_each(&null, |_| {}),
        Err(RaggedError::InvalidArgument { .. })
    ));
}

#[test]
fn test_filter_scenarios() {
    assert_eq!(filter(&nested!([1, 2, 3, 4]), |&x| x > 2).unwrap(), nested!([3, 4]));
    assert_eq!(filter(&nested!([1, 2, 3, 4]), |&x| x < 0).unwrap(), Nested::empty());

    let err = filter(&nested!([[1, 2], [3, 4]]), |&x| x > 2).unwrap_err();
    assert_eq!(err.to_string(), "Only one dimensional matrices supported");
}

#[test]
fn test_filter_regexp_scenarios() {
    let starts_with_a = Regex::new("^a").unwrap();
    assert_eq!(
        filter_regexp(&nested!(["apple", "banana", "apricot"]), &starts_with_a).unwrap(),
        nested!(["apple", "apricot"])
    );

    let starts_with_z = Regex::new("^z").unwrap();
    assert_eq!(
        filter_regexp(&nested!(["apple", "banana", "cherry"]), &starts_with_z).unwrap(),
        Nested::empty()
    );

    let err = filter_regexp(&nested!([[1, 2], [3, 4]]), &Regex::new("test").unwrap())
        .unwrap_err();
    assert_eq!(err.to_string(), "Only one dimensional matrices supported");
}

#[test]
fn test_pass_through_helpers() {
    assert_eq!(join(&[1, 2, 3], "-"), "1-2-3");
    assert_eq!(join::<i32>(&[], "-"), "");
    assert_eq!(last(&[1, 2, 3]), Some(&3));
    assert_eq!(last::<i32>(&[]), None);
    assert_eq!(initial(&[1, 2, 3]), &[1, 2]);
    assert!(initial::<i32>(&[]).is_empty());
    assert!(contains(&[1, 2, 3], &2));
    assert!(!contains(&[1, 2, 3], &4));
    assert!(!contains::<i32>(&[], &4));
}

#[test]
fn test_identify_scenarios() {
    let tagged = identify(&nested!([1, 1, 2, 2, 3])).unwrap();
    assert_eq!(
        tagged,
        nested!([
            (Identified::new(1, 0)),
            (Identified::new(1, 1)),
            (Identified::new(2, 0)),
            (Identified::new(2, 1)),
            (Identified::new(3, 0))
        ])
    );
    assert_eq!(identify(&Nested::<i32>::empty()).unwrap(), Nested::empty());

    let err = identify(&Nested::Scalar(Scalar::Null)).unwrap_err();
    assert!(err.to_string().contains("Array input expected"));
}

#[test]
fn test_generalize_scenarios() {
    let input = nested!([(Identified::new(1, 0)), (Identified::new(2, 1))]);
    assert_eq!(generalize(&input).unwrap(), nested!([1, 2]));
    assert_eq!(
        generalize(&Nested::<Identified<i32>>::empty()).unwrap(),
        Nested::empty()
    );

    let err = generalize(&Nested::Scalar(Identified::new(Scalar::Null, 0))).unwrap_err();
    assert!(err.to_string().contains("Array input expected"));
}

#[test]
fn test_multiset_intersection_via_identify() {
    // [1, 1, 2, 3] ∩ [1, 2, 2] as multisets is [1, 2]
    let a = identify(&nested!([1, 3, 1, 2])).unwrap();
    let b = identify(&nested!([2, 1, 2])).unwrap();
    let b_items = b.as_seq().unwrap();
    let common: Vec<Nested<Identified<i32>>> = a
        .as_seq()
        .unwrap()
        .iter()
        .filter(|item| contains(b_items, *item))
        .cloned()
        .collect();
    assert_eq!(generalize(&Nested::Seq(common)).unwrap(), nested!([1, 2]));
}

#[test]
fn test_data_type_scenarios() {
    let numbers = Nested::Seq(vec![s(1), s(2), s(3)]);
    assert_eq!(
        get_array_data_type(&numbers, Scalar::kind),
        ElementType::Kind(ScalarKind::Number)
    );

    let mixed = Nested::Seq(vec![s(1), s("2"), s(3)]);
    assert_eq!(get_array_data_type(&mixed, Scalar::kind), ElementType::Mixed);

    let matrix = Nested::Seq(vec![
        Nested::Seq(vec![s(1), s(2)]),
        Nested::Seq(vec![s(3), s(4)]),
    ]);
    assert_eq!(
        get_array_data_type(&matrix, Scalar::kind).to_string(),
        "number"
    );

    let mixed_matrix = Nested::Seq(vec![
        Nested::Seq(vec![s(1), s(2)]),
        Nested::Seq(vec![s(3), s("4")]),
    ]);
    assert_eq!(
        get_array_data_type(&mixed_matrix, Scalar::kind).to_string(),
        "mixed"
    );

    assert!(get_array_data_type(&Nested::<Scalar>::empty(), Scalar::kind).is_undefined());
}

#[test]
fn test_array_size_scenarios() {
    assert_eq!(array_size(&nested!([1, [2, [3]]])).as_slice(), &[2]);
    let row = Nested::Seq(vec![s(1), s(10), s(10), s(2030), s(30), s("adasd")]);
    assert_eq!(array_size(&row).as_slice(), &[6]);
    assert_eq!(array_size(&Nested::<i32>::empty()).as_slice(), &[0]);
    assert!(array_size(&Nested::Scalar(1)).is_empty());
}
