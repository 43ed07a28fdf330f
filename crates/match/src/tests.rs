use super::*;

fn set<I: IntoIterator<Item = ErrorDescriptor>>(descriptors: I) -> ExpectationSet {
    descriptors.into_iter().collect()
}

#[test]
fn empty_expectations_and_no_errors_are_exact() {
    let assignment = assign(&ExpectationSet::new(), Vec::<ErrorRecord>::new());
    assert!(assignment.is_exact());
    assert!(assignment.bindings().is_empty());
}

#[test]
fn single_exact_descriptor_binds() {
    let expected = set([ErrorDescriptor::new(422).at("json", "/name").with_message("required")]);
    let actual = [ErrorRecord::new(422).at("json", "/name").with_message("required")];

    let assignment = assign(&expected, &actual);
    assert!(assignment.is_exact());
    assert_eq!(
        assignment.bindings(),
        [Binding {
            descriptor: 0,
            record: 0
        }]
    );
}

#[test]
fn failed_message_reports_unmet_and_unconsumed_record() {
    let expected = set([ErrorDescriptor::new(422).at("json", "/name").with_message("required")]);
    let actual = [ErrorRecord::new(422).at("json", "/name").with_message("missing")];

    let assignment = assign(&expected, &actual);
    assert!(!assignment.is_exact());
    assert_eq!(assignment.unmet_expectations(), expected.as_slice());
    assert_eq!(assignment.leftover_actuals(), actual);
}

#[test]
fn first_fit_takes_earliest_satisfying_record() {
    let expected = set([ErrorDescriptor::new(1)]);
    let actual = [
        ErrorRecord::new(2).with_message("b"),
        ErrorRecord::new(1).with_message("first"),
        ErrorRecord::new(1).with_message("second"),
    ];

    let assignment = assign(&expected, &actual);
    assert_eq!(assignment.bindings()[0].record, 1);
    assert_eq!(assignment.leftover_actuals(), [actual[0].clone(), actual[2].clone()]);
}

#[test]
fn duplicate_descriptors_consume_distinct_records() {
    let expected = set([ErrorDescriptor::new(1), ErrorDescriptor::new(1)]);

    let one = [ErrorRecord::new(1).with_message("m")];
    let assignment = assign(&expected, &one);
    assert_eq!(assignment.unmet_expectations().len(), 1);
    assert!(assignment.leftover_actuals().is_empty());

    let two = [
        ErrorRecord::new(1).with_message("m"),
        ErrorRecord::new(1).with_message("m"),
    ];
    assert!(assign(&expected, &two).is_exact());
}

#[test]
fn greedy_choice_is_not_revisited() {
    // Both records satisfy the loose first descriptor; it takes the one the
    // strict second descriptor needs.
    let expected = set([
        ErrorDescriptor::new(1),
        ErrorDescriptor::new(1).with_message("specific"),
    ]);
    let actual = [
        ErrorRecord::new(1).with_message("specific"),
        ErrorRecord::new(1).with_message("other"),
    ];

    let assignment = assign(&expected, &actual);
    assert!(!assignment.is_exact());
    assert_eq!(assignment.unmet_expectations().len(), 1);
    assert_eq!(assignment.leftover_actuals(), [actual[1].clone()]);

    // Declaring the strict descriptor first lets both bind.
    let reordered = set([
        ErrorDescriptor::new(1).with_message("specific"),
        ErrorDescriptor::new(1),
    ]);
    assert!(assign(&reordered, &actual).is_exact());
}

#[test]
fn unmet_descriptors_keep_declaration_order() {
    let expected = set([
        ErrorDescriptor::new(3),
        ErrorDescriptor::new(1),
        ErrorDescriptor::new(2),
    ]);
    let assignment = assign(&expected, Vec::<ErrorRecord>::new());

    let codes: Vec<i32> = assignment
        .unmet_expectations()
        .iter()
        .map(ErrorDescriptor::code)
        .collect();
    assert_eq!(codes, [3, 1, 2]);
}

#[test]
fn accepts_model_errors_directly() {
    let errors = vec![model::ApiError::new(7).with_message("seven")];
    let expected = set([ErrorDescriptor::new(7).with_message("seven")]);
    assert!(assign(&expected, &errors).is_exact());
    assert!(assign(&expected, errors).is_exact());
}
