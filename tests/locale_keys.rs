use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use regex::Regex;
use serde_yaml::Value;

const LOCALES: &[&str] = &["en", "pt-BR"];

fn flatten(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) {
    match value {
        Value::Mapping(map) => {
            for (k, v) in map {
                let Some(k) = k.as_str() else { continue };
                let key = if prefix.is_empty() {
                    k.to_string()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&key, v, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        _ => {}
    }
}

fn load_locale(name: &str) -> BTreeMap<String, String> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("locales")
        .join(format!("{name}.yml"));
    let text = fs::read_to_string(&path).unwrap();
    let value: Value = serde_yaml::from_str(&text).unwrap();
    let mut out = BTreeMap::new();
    flatten("", &value, &mut out);
    out
}

fn rust_sources(dir: &Path, out: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(fs::read_to_string(&path).unwrap());
        }
    }
}

/// Every quoted `section.key` literal under `src/`, which covers both direct
/// `t!("...")` calls and keys chosen at runtime.
fn keys_used_in_source() -> BTreeSet<String> {
    let pattern = Regex::new(r#""((?:home|difficulty|quiz|result|error)\.[a-z_]+)""#).unwrap();
    let mut sources = Vec::new();
    rust_sources(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut sources);
    sources
        .iter()
        .flat_map(|src| {
            pattern
                .captures_iter(src)
                .map(|c| c[1].to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}

fn placeholders(text: &str) -> BTreeSet<String> {
    let pattern = Regex::new(r"%\{([a-z_]+)\}").unwrap();
    pattern
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect()
}

#[test]
fn every_used_key_is_translated() {
    let used = keys_used_in_source();
    assert!(used.contains("result.keep_trying"));
    for locale in LOCALES {
        let table = load_locale(locale);
        let missing: Vec<_> = used.iter().filter(|k| !table.contains_key(*k)).collect();
        assert!(missing.is_empty(), "{locale} is missing {missing:?}");
    }
}

#[test]
fn locales_share_keys_and_placeholders() {
    let en = load_locale("en");
    for locale in &LOCALES[1..] {
        let other = load_locale(locale);
        let en_keys: BTreeSet<_> = en.keys().collect();
        let other_keys: BTreeSet<_> = other.keys().collect();
        assert_eq!(en_keys, other_keys, "{locale} keys differ from en");
        for (key, text) in &en {
            assert_eq!(
                placeholders(text),
                placeholders(&other[key]),
                "{locale} placeholders differ for {key}"
            );
        }
    }
}
