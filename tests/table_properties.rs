use glyph_core::{build_subglyph_table, primary_table, subglyph_table, PrimaryTable, SubglyphSet};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet};

fn arb_pairs() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[1234QWERASDFZXCV]{1,6}", "[a-z]{1,3}", 0..32)
}

#[test]
fn wras_is_d() {
    let table = PrimaryTable::from_entries([("WRAS", "d")]).unwrap();
    let subglyphs = build_subglyph_table(&table);
    let key: SubglyphSet = ['W', 'R', 'A', 'S'].into_iter().collect();
    assert_eq!(subglyphs.get(&key), Some("d"));
}

#[test]
fn permuted_codes_collide_last_write_wins() {
    let table = PrimaryTable::from_entries([("QWRS", "b"), ("SWRQ", "x")]).unwrap();
    let subglyphs = build_subglyph_table(&table);
    assert_eq!(subglyphs.len(), 1);
    assert_eq!(subglyphs.lookup("QWRS"), Some("x"));
    // the primary table still tells them apart
    assert_eq!(table.get("QWRS"), Some("b"));
    assert_eq!(table.get("SWRQ"), Some("x"));
}

#[test]
fn built_in_tables_agree() {
    for entry in primary_table() {
        assert_eq!(subglyph_table().lookup(&entry.glyph_code), Some(entry.sound.as_str()));
    }
}

proptest! {
    #[test]
    fn primary_lookup_returns_inserted_sound(pairs in arb_pairs()) {
        let table = PrimaryTable::from_entries(pairs.clone()).unwrap();
        prop_assert_eq!(table.len(), pairs.len());
        for (code, sound) in &pairs {
            prop_assert_eq!(table.get(code), Some(sound.as_str()));
        }
    }

    #[test]
    fn subglyph_holds_last_sound_per_set(pairs in arb_pairs()) {
        let table = PrimaryTable::from_entries(pairs.clone()).unwrap();
        let subglyphs = build_subglyph_table(&table);

        let mut expected: HashMap<SubglyphSet, &str> = HashMap::new();
        for (code, sound) in &pairs {
            expected.insert(SubglyphSet::from_code(code), sound.as_str());
        }
        for (code, _) in &pairs {
            let set = SubglyphSet::from_code(code);
            prop_assert_eq!(subglyphs.get(&set), expected.get(&set).copied());
        }

        let keys: HashSet<&SubglyphSet> = subglyphs.iter().map(|(set, _)| set).collect();
        let derived: HashSet<&SubglyphSet> = expected.keys().collect();
        prop_assert_eq!(keys, derived);
        prop_assert!(subglyphs.len() <= table.len());
    }

    #[test]
    fn rebuild_is_idempotent(pairs in arb_pairs()) {
        let table = PrimaryTable::from_entries(pairs).unwrap();
        prop_assert_eq!(build_subglyph_table(&table), build_subglyph_table(&table));
    }

    #[test]
    fn lookup_ignores_order_and_repeats(code in "[1234QWERASDFZXCV]{1,6}") {
        let table = PrimaryTable::from_entries([(code.clone(), "s".to_string())]).unwrap();
        let subglyphs = table.subglyph_table();
        let reversed: String = code.chars().rev().collect();
        let doubled = format!("{code}{code}");
        prop_assert_eq!(subglyphs.lookup(&reversed), Some("s"));
        prop_assert_eq!(subglyphs.lookup(&doubled), Some("s"));
    }
}
