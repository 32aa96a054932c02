use enumap::EnuMap;

#[derive(EnuMap, Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    Nominative,
    Accusative,
    Genitive,
}

#[derive(EnuMap, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonClass {
    FirstSingular,
    ThirdPluralMasculine,
}

#[test]
fn test_basic_enumap() {
    let map = CaseMap {
        nominative: "on",
        accusative: "jego",
        genitive: "jego",
    };

    assert_eq!(map.get(&Case::Nominative), &"on");
    assert_eq!(map.get(&Case::Accusative), &"jego");
    assert_eq!(map.get(&Case::Genitive), &"jego");
}

#[test]
fn test_multi_word_variants_become_snake_case_fields() {
    let map = PersonClassMap {
        first_singular: "am",
        third_plural_masculine: "ają",
    };

    assert_eq!(map.get(&PersonClass::ThirdPluralMasculine), &"ają");
}

#[test]
fn test_all_lists_variants_in_order() {
    assert_eq!(
        Case::ALL,
        [Case::Nominative, Case::Accusative, Case::Genitive]
    );
    assert_eq!(PersonClass::ALL.len(), 2);
}

#[test]
fn test_from_fn_and_map() {
    let lengths = CaseMap::from_fn(|case| format!("{case:?}")).map(|_, name| name.len());

    assert_eq!(lengths.nominative, "Nominative".len());
    assert_eq!(lengths.genitive, "Genitive".len());
}

#[test]
fn test_iter_follows_declaration_order() {
    let map = CaseMap {
        nominative: 1,
        accusative: 2,
        genitive: 3,
    };

    let collected: Vec<_> = map.iter().map(|(case, value)| (case, *value)).collect();
    assert_eq!(
        collected,
        vec![
            (Case::Nominative, 1),
            (Case::Accusative, 2),
            (Case::Genitive, 3)
        ]
    );
}

#[test]
fn test_enumap_mut() {
    let mut map = CaseMap {
        nominative: 0,
        accusative: 0,
        genitive: 0,
    };

    *map.get_mut(&Case::Accusative) = 100;

    assert_eq!(map.get(&Case::Accusative), &100);
    assert_eq!(map.get(&Case::Genitive), &0);
}
