//! End-to-end tests of the request-level service.

use std::sync::Arc;

use lexpack::config::LexpackConfig;
use lexpack::error::{LexpackError, Result};
use lexpack::service::{
    CompressRequest, DecompressRequest, IndexWordsRequest, PreprocessQueryRequest, TextService,
};
use lexpack::spelling::IndexRegistry;

#[test]
fn test_json_compress_decompress_flow() -> Result<()> {
    let service = TextService::new(LexpackConfig::default());

    let request: CompressRequest = serde_json::from_str(
        r#"{"mode": "varbyte", "integer_lists": {"apple": [0, 4, 133], "pie": [7]}}"#,
    )?;
    let compressed = service.compress(&request)?;
    assert_eq!(compressed["pie"], "88");

    let body = serde_json::json!({
        "mode": "varbyte",
        "compressed_values": compressed,
    });
    let request: DecompressRequest = serde_json::from_value(body)?;
    let decompressed = service.decompress(&request)?;

    assert_eq!(decompressed["apple"], vec![0, 4, 133]);
    assert_eq!(decompressed["pie"], vec![7]);
    Ok(())
}

#[test]
fn test_mode_is_required() {
    let missing = serde_json::from_str::<DecompressRequest>(r#"{"compressed_values": {}}"#);
    assert!(missing.is_err());

    let service = TextService::new(LexpackConfig::default());
    let request: DecompressRequest =
        serde_json::from_str(r#"{"type": "gzip", "compressed_values": {"k": "00fc"}}"#).unwrap();
    assert!(matches!(
        service.decompress(&request),
        Err(LexpackError::UnsupportedMode(_))
    ));

    let request: DecompressRequest =
        serde_json::from_str(r#"{"type": "gamma", "compressed_values": {"k": "00fc"}}"#).unwrap();
    assert_eq!(service.decompress(&request).unwrap()["k"], vec![0]);
}

#[test]
fn test_malformed_blob_in_request() {
    let service = TextService::new(LexpackConfig::default());
    let request: DecompressRequest =
        serde_json::from_str(r#"{"mode": "gamma", "compressed_values": {"k": "zz"}}"#).unwrap();

    let error = service.decompress(&request).unwrap_err();
    assert!(matches!(error, LexpackError::MalformedEncoding(_)));
    assert!(error.to_string().contains("'k'"));
}

#[test]
fn test_index_then_preprocess_query() -> Result<()> {
    let service = TextService::new(LexpackConfig::default());

    let request: IndexWordsRequest =
        serde_json::from_str(r#"{"words": ["apple", "pie", "recipe", "easy"]}"#)?;
    let status = service.index_words(&request);
    assert_eq!(
        serde_json::to_value(&status)?,
        serde_json::json!({"status": "success", "indexed": 4})
    );

    let request: PreprocessQueryRequest =
        serde_json::from_str(r#"{"query": "Easy aple-pie recipie"}"#)?;
    let corrected = service.preprocess_and_correct_query(&request.query)?;
    assert_eq!(corrected, vec!["easy", "apple", "pie", "recipe"]);
    Ok(())
}

#[test]
fn test_reset_request() -> Result<()> {
    let service = TextService::new(LexpackConfig::default());
    service.index_words(&IndexWordsRequest {
        words: vec!["apple".to_string()],
        reset: false,
    });

    let request: IndexWordsRequest =
        serde_json::from_str(r#"{"words": ["pear"], "reset": true}"#)?;
    service.index_words(&request);

    assert_eq!(service.correct_word("aple"), "aple");
    assert_eq!(service.correct_word("paer"), "pear");
    Ok(())
}

#[test]
fn test_services_per_tenant() {
    let registry = IndexRegistry::default();
    let english = TextService::with_index(LexpackConfig::default(), registry.get_or_create("en"));
    let french = TextService::with_index(LexpackConfig::default(), registry.get_or_create("fr"));

    english.index_words(&IndexWordsRequest {
        words: vec!["apple".to_string()],
        reset: false,
    });
    french.index_words(&IndexWordsRequest {
        words: vec!["pomme".to_string()],
        reset: false,
    });

    assert_eq!(english.correct_word("appel"), "apple");
    assert_eq!(french.correct_word("pome"), "pomme");
    assert_eq!(french.correct_word("appel"), "appel");
    assert!(Arc::ptr_eq(english.index(), &registry.get_or_create("en")));
}
