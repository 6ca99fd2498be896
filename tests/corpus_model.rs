use wordrank_core::corpus::{Corpus, CorpusError};
use wordrank_core::extraction::{ConfigError, ExtractionConfig};
use wordrank_core::types::{Token, TokenError};

#[test]
fn invariant_utf8_rejection() {
    // Invalid UTF-8 sequence
    let invalid_bytes = vec![0, 159, 146, 150];
    let result = Corpus::from_bytes(invalid_bytes);
    assert!(matches!(result, Err(CorpusError::InvalidEncoding(_))));
}

#[test]
fn invariant_same_content_same_version() {
    let a = Corpus::new("Hello world");
    let b = Corpus::from_bytes(b"Hello world".to_vec()).unwrap();
    let c = Corpus::new("Hello world!");

    assert_eq!(a.version(), b.version());
    assert_ne!(a.version(), c.version());
    assert_eq!(a, b);
}

#[test]
fn version_is_prefixed_sha256() {
    let corpus = Corpus::new("");
    assert_eq!(
        corpus.version().as_str(),
        "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn corpus_tokens_follow_text() {
    let corpus = Corpus::new("Natasha, Pierre & Andrei");
    assert_eq!(corpus.text(), "Natasha, Pierre & Andrei");
    assert_eq!(
        corpus.tokens().collect::<Vec<_>>(),
        vec!["Natasha", "Pierre", "Andrei"]
    );
}

#[test]
fn token_constructor_enforces_letter_runs() {
    assert_eq!(Token::new(""), Err(TokenError::Empty));
    assert_eq!(Token::new("abc1"), Err(TokenError::NonLetter('1')));
    assert_eq!(Token::new("two words"), Err(TokenError::NonLetter(' ')));
    assert_eq!(Token::new("chapter\u{216B}"), Err(TokenError::NonLetter('\u{216B}')));
    assert_eq!(Token::new("a\u{0345}b"), Err(TokenError::NonLetter('\u{0345}')));

    let token = Token::new("Привет").unwrap();
    assert_eq!(token.as_str(), "Привет");
    assert_eq!(token.to_string(), "Привет");
    assert_eq!(token.into_string(), "Привет".to_string());
}

#[test]
fn config_defaults_to_reference_values() {
    let config = ExtractionConfig::default();
    assert_eq!(config.min_length, 12);
    assert_eq!(config.limit_after_dedup, 100);
    assert_eq!(config.limit_final, 10);
    assert_eq!(config, ExtractionConfig::reference());
}

#[test]
fn config_from_json_fills_missing_fields() {
    assert_eq!(ExtractionConfig::from_json("{}").unwrap(), ExtractionConfig::reference());

    let config = ExtractionConfig::from_json(r#"{"limit_final": 3}"#).unwrap();
    assert_eq!(config.min_length, 12);
    assert_eq!(config.limit_after_dedup, 100);
    assert_eq!(config.limit_final, 3);

    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"min_length":12,"limit_after_dedup":100,"limit_final":3}"#);
}

#[test]
fn config_from_json_rejects_bad_input() {
    let unknown = ExtractionConfig::from_json(r#"{"max_length": 3}"#);
    assert!(matches!(unknown, Err(ConfigError::Parse(_))));

    let negative = ExtractionConfig::from_json(r#"{"min_length": -1}"#);
    assert!(matches!(negative, Err(ConfigError::Parse(_))));

    let garbage = ExtractionConfig::from_json("not json");
    assert!(matches!(garbage, Err(ConfigError::Parse(_))));
}
