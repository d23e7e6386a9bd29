#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use rway::RadixTree;

#[derive(Arbitrary, Debug)]
enum MapMethod {
    Get { key: Vec<u8> },
    Insert { key: Vec<u8>, val: u64 },
    Delete { key: Vec<u8> },
    PrefixScan { prefix: Vec<u8> },
}

// Keys are capped so pathological inputs exercise the tree, not the stack.
fn bound(key: &[u8]) -> &[u8] {
    &key[..key.len().min(128)]
}

fuzz_target!(|methods: Vec<MapMethod>| {
    let mut tree = RadixTree::new();
    let mut model = BTreeMap::<Vec<u8>, u64>::new();

    for m in &methods {
        match m {
            MapMethod::Get { key } => {
                let key = bound(key);
                assert_eq!(tree.get(key), model.get(key));
            }
            MapMethod::Insert { key, val } => {
                let key = bound(key);
                let t = tree.insert(key, *val);
                let b = model.insert(key.to_vec(), *val);
                assert_eq!(t, b);
            }
            MapMethod::Delete { key } => {
                let key = bound(key);
                assert_eq!(tree.remove(key), model.remove(key));
            }
            MapMethod::PrefixScan { prefix } => {
                let prefix = bound(prefix);
                let expected: Vec<String> = model
                    .keys()
                    .filter(|k| k.starts_with(prefix))
                    .map(|k| k.iter().map(|&b| char::from(b)).collect())
                    .collect();
                assert_eq!(tree.keys_with_prefix(prefix), expected);
            }
        }
    }

    assert_eq!(tree.len(), model.len());
    for (k, v) in &model {
        assert_eq!(tree.get(k), Some(v));
    }
});
