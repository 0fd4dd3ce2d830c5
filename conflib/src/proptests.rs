//! Property-based tests for tokenizing and layered lookup.

use proptest::prelude::*;

use crate::document::Document;
use crate::layer::Layer;
use crate::path::KeyPath;
use crate::resolver::Resolver;
use crate::tokenizer::CommandLine;
use crate::value::Value;

// Strategy for dotted keys of one to four lowercase segments
fn key_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 1..=4).prop_map(|segments| segments.join("."))
}

fn single_layer(key: &str, value: i64) -> Document {
    let mut doc = Document::new();
    doc.set(&KeyPath::parse(key).unwrap(), Value::Integer(value));
    doc
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Distinct values in every layer: the command line always wins
    #[test]
    fn cmdline_takes_precedence(
        key in key_strategy(),
        cmdline in any::<i64>(),
        custom in any::<i64>(),
        default in any::<i64>(),
    ) {
        let resolver = Resolver::new()
            .with_layer(Layer::Cmdline, single_layer(&key, cmdline))
            .with_layer(Layer::Custom, single_layer(&key, custom))
            .with_layer(Layer::Default, single_layer(&key, default));

        prop_assert_eq!(resolver.get(&key, 0_i64), cmdline);
        prop_assert_eq!(resolver.source_of(&key), Some(Layer::Cmdline));
    }

    // Custom beats default when the command line is silent
    #[test]
    fn custom_takes_precedence_over_default(
        key in key_strategy(),
        custom in any::<i64>(),
        default in any::<i64>(),
    ) {
        let resolver = Resolver::new()
            .with_layer(Layer::Cmdline, Document::new())
            .with_layer(Layer::Custom, single_layer(&key, custom))
            .with_layer(Layer::Default, single_layer(&key, default));

        prop_assert_eq!(resolver.get(&key, 0_i64), custom);
    }

    // Keys absent everywhere return the fallback unchanged
    #[test]
    fn absent_key_returns_fallback(key in key_strategy(), fallback in any::<i64>()) {
        let resolver = Resolver::new()
            .with_layer(Layer::Cmdline, single_layer("zz0.present", 1))
            .with_layer(Layer::Default, single_layer("zz1.present", 2));

        prop_assert_eq!(resolver.get(&key, fallback), fallback);
        prop_assert_eq!(resolver.get(&key, format!("{fallback}")), format!("{fallback}"));
    }

    // Every sibling under a shared parent survives, whatever the order
    #[test]
    fn siblings_survive_tokenizing(leaves in prop::collection::btree_map("[a-z]{1,8}", any::<i32>(), 1..12)) {
        let args: Vec<String> = leaves
            .iter()
            .map(|(leaf, value)| format!("-group.nested.{leaf}={value}"))
            .collect();
        let doc = CommandLine::tokenize(&args).unwrap();

        for (leaf, value) in &leaves {
            let path = KeyPath::parse(&format!("group.nested.{leaf}")).unwrap();
            prop_assert_eq!(doc.value(&path), Some(Value::Integer(i64::from(*value))));
        }
        let nested = doc.node(&KeyPath::parse("group.nested").unwrap()).unwrap();
        prop_assert_eq!(nested.as_object().unwrap().len(), leaves.len());
    }

    // Keys never named on the command line are absent from its layer
    #[test]
    fn no_false_positives(
        named in prop::collection::btree_set("[a-m]{1,6}", 0..8),
        probe in "[n-z]{1,6}",
    ) {
        let args: Vec<String> = named.iter().map(|k| format!("-{k}=1")).collect();
        let doc = CommandLine::tokenize(&args).unwrap();
        prop_assert!(!doc.contains(&KeyPath::parse(&probe).unwrap()));
    }

    // Tokenizing twice gives the same document
    #[test]
    fn tokenizing_is_deterministic(entries in prop::collection::btree_map(key_strategy(), "[a-z0-9.]{0,6}", 0..8)) {
        let args: Vec<String> = entries.iter().map(|(k, v)| format!("-{k}={v}")).collect();
        prop_assert_eq!(CommandLine::tokenize(&args).unwrap(), CommandLine::tokenize(&args).unwrap());
    }

    // Any 32-bit integer is inferred as an integer
    #[test]
    fn integers_are_inferred(n in any::<i32>()) {
        prop_assert_eq!(Value::infer(&n.to_string()), Value::Integer(i64::from(n)));
    }

    // Alphabetic text other than booleans stays a string
    #[test]
    fn words_stay_strings(word in "[a-zA-Z]{1,12}") {
        let expected = match word.to_lowercase().as_str() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(word.clone()),
        };
        prop_assert_eq!(Value::infer(&word), expected);
    }

    // Bare and rooted keys always resolve identically
    #[test]
    fn root_marker_is_transparent(key in key_strategy(), value in any::<i64>()) {
        let resolver = Resolver::new().with_layer(Layer::Custom, single_layer(&key, value));
        let rooted = format!("$.{key}");
        prop_assert_eq!(resolver.lookup(&key), resolver.lookup(&rooted));
    }
}

