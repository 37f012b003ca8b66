#![no_main]

//! Replays arbitrary operation sequences against a `Dict` and a plain
//! insertion-ordered `Vec` model, checking content and order after every step.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tally_dict::{Dict, Maybe};

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(u8, i32),
    Update(u8, i32),
    Remove(u8),
    FilterEven,
    MapAdd(i32),
    UnionWith(Vec<(u8, i32)>),
    Rebuild,
}

type Model = Vec<(String, i32)>;

fn key(raw: u8) -> String {
    // Few distinct keys, so collisions are common.
    format!("k{}", raw % 8)
}

fn model_put(model: &mut Model, key: String, value: i32) {
    match model.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = value,
        None => model.push((key, value)),
    }
}

fn apply(dict: &Dict<i32>, model: &mut Model, op: Op) -> Dict<i32> {
    match op {
        Op::Insert(raw, value) => {
            let key = key(raw);
            model_put(model, key.clone(), value);
            dict.insert(key.as_str(), value)
        }
        Op::Update(raw, delta) => {
            let key = key(raw);
            if let Some(entry) = model.iter_mut().find(|(k, _)| *k == key) {
                entry.1 = entry.1.wrapping_add(delta);
            }
            dict.update(&key, |n| n.wrapping_add(delta))
        }
        Op::Remove(raw) => {
            let key = key(raw);
            model.retain(|(k, _)| *k != key);
            dict.remove(&key)
        }
        Op::FilterEven => {
            model.retain(|(_, n)| n % 2 == 0);
            dict.filter(|_, n| n % 2 == 0)
        }
        Op::MapAdd(delta) => {
            for entry in model.iter_mut() {
                entry.1 = entry.1.wrapping_add(delta);
            }
            dict.map(|_, n| n.wrapping_add(delta))
        }
        Op::UnionWith(raw_pairs) => {
            let pairs: Vec<(String, i32)> =
                raw_pairs.into_iter().map(|(raw, n)| (key(raw), n)).collect();
            let other = Dict::from_list(pairs.clone());
            let mut merged: Model = Vec::new();
            for (k, n) in pairs {
                model_put(&mut merged, k, n);
            }
            for (k, n) in model.drain(..) {
                model_put(&mut merged, k, n);
            }
            *model = merged;
            dict.union(&other)
        }
        Op::Rebuild => Dict::from_list(dict.to_list()),
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut dict = Dict::empty();
    let mut model: Model = Vec::new();
    for op in ops.into_iter().take(256) {
        let before = dict.to_list();
        let next = apply(&dict, &mut model, op);
        assert_eq!(dict.to_list(), before, "input dict changed");
        dict = next;

        let keys: Vec<String> = dict.keys().iter().map(|k| k.to_string()).collect();
        let model_keys: Vec<String> = model.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, model_keys);
        assert_eq!(dict.values(), model.iter().map(|(_, n)| *n).collect::<Vec<_>>());
        assert_eq!(dict.size(), model.len());
        for (k, n) in &model {
            assert_eq!(dict.get(k), Maybe::Just(*n));
        }
    }
});
