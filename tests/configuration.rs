use std::fs;

use dep_compress::config::{validate_rate, CompressionConfig, ConfigError, RelationLabels};
use dep_compress::document::{Sentence, Token};
use dep_compress::selection::Compressor;
use tempfile::tempdir;

#[test]
fn v0_defaults() {
    let config = CompressionConfig::v0();
    assert_eq!(config.rate, 0.5);
    assert_eq!(config.relations.punct, "punct");
    assert_eq!(config.relations.cc, "cc");
    assert_eq!(config.relations.conj, "conj");
    assert_eq!(config, CompressionConfig::default());
    assert!(config.validate().is_ok());
}

#[test]
fn partial_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "rate": 0.3, "relations": { "punct": "PUNCT" } }"#).unwrap();

    let config = CompressionConfig::from_path(&path).unwrap();
    assert_eq!(config.rate, 0.3);
    assert_eq!(config.relations.punct, "PUNCT");
    assert_eq!(config.relations.cc, "cc");
}

#[test]
fn out_of_range_rate_is_rejected_at_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "rate": 1.5 }"#).unwrap();

    let err = CompressionConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRate(r) if r == 1.5));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ rate: ").unwrap();

    assert!(matches!(
        CompressionConfig::from_path(&path).unwrap_err(),
        ConfigError::Parse(_)
    ));
}

#[test]
fn empty_label_is_rejected() {
    let mut config = CompressionConfig::v0();
    config.relations.conj.clear();
    assert!(matches!(config.validate(), Err(ConfigError::EmptyLabel("conjunct"))));
}

#[test]
fn rate_bounds_are_exclusive() {
    assert!(validate_rate(0.0).is_err());
    assert!(validate_rate(1.0).is_err());
    assert!(validate_rate(f64::NAN).is_err());
    assert!(validate_rate(0.01).is_ok());
    assert!(validate_rate(0.99).is_ok());
}

#[test]
fn configured_labels_drive_the_compressor() {
    let config = CompressionConfig {
        rate: 0.5,
        relations: RelationLabels {
            punct: "PUNCT".into(),
            cc: "CC".into(),
            conj: "CONJ".into(),
        },
    };
    let sentence = Sentence::new(vec![
        Token::new(1, "!", "!", 0, "PUNCT").with_tfidf(1.0),
        Token::new(2, "hm", "hm", 1, "dep").with_tfidf(1.0),
    ]);

    let compressor = Compressor::from_config(&config);
    assert_eq!(compressor.compress(&sentence, config.rate).unwrap(), "");
    // Under the default labels "PUNCT" is an ordinary relation.
    assert_eq!(Compressor::default().compress(&sentence, 0.5).unwrap(), "! hm");
}

#[test]
fn resolve_without_a_file_uses_v0() {
    assert_eq!(
        CompressionConfig::resolve(None, None).unwrap(),
        CompressionConfig::v0()
    );
}

#[test]
fn resolve_rate_overrides_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "rate": 0.3, "relations": { "cc": "CC" } }"#).unwrap();

    let config = CompressionConfig::resolve(Some(path.as_path()), Some(0.7)).unwrap();
    assert_eq!(config.rate, 0.7);
    assert_eq!(config.relations.cc, "CC");

    let from_file = CompressionConfig::resolve(Some(path.as_path()), None).unwrap();
    assert_eq!(from_file.rate, 0.3);
}

#[test]
fn resolve_rejects_an_out_of_range_override() {
    let err = CompressionConfig::resolve(None, Some(1.0)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRate(r) if r == 1.0));
}
