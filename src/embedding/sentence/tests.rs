use super::*;
use std::path::PathBuf;

mod config_tests {
    use super::*;

    #[test]
    fn test_sentence_config_default() {
        let config = SentenceConfig::default();
        assert_eq!(config.embedding_dim, SENTENCE_EMBEDDING_DIM);
        assert_eq!(config.max_seq_len, SENTENCE_MAX_SEQ_LEN);
        assert!(!config.testing_stub);
        assert!(config.model_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_sentence_config_new() {
        let config = SentenceConfig::new("/models/all-MiniLM-L6-v2");
        assert_eq!(config.model_dir, PathBuf::from("/models/all-MiniLM-L6-v2"));
        assert!(!config.testing_stub);
    }

    #[test]
    fn test_sentence_config_builders() {
        let config = SentenceConfig::stub()
            .with_max_seq_len(128)
            .with_embedding_dim(64);
        assert_eq!(config.max_seq_len, 128);
        assert_eq!(config.embedding_dim, 64);
        assert!(config.testing_stub);
    }

    #[test]
    fn test_validation_with_stub() {
        assert!(SentenceConfig::stub().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_dim() {
        let err = SentenceConfig::stub()
            .with_embedding_dim(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_validation_rejects_zero_seq_len() {
        let err = SentenceConfig::stub()
            .with_max_seq_len(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_validation_empty_dir_no_stub() {
        let err = SentenceConfig::default().validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_validation_nonexistent_dir() {
        let err = SentenceConfig::new("/nonexistent/models/minilm")
            .validate()
            .unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelNotFound { .. }));
    }

    #[test]
    fn test_validation_reports_missing_weights() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{}").unwrap();
        std::fs::write(dir.path().join("tokenizer.json"), "{}").unwrap();

        let config = SentenceConfig::new(dir.path());
        assert!(!config.model_available());
        assert_eq!(
            config.missing_files(),
            vec![dir.path().join("model.safetensors")]
        );

        match config.validate().unwrap_err() {
            EmbeddingError::ModelNotFound { path } => {
                assert_eq!(path, dir.path().join("model.safetensors"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_model_available_with_all_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in REQUIRED_MODEL_FILES {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        assert!(SentenceConfig::new(dir.path()).model_available());
    }
}

mod embedder_tests {
    use super::*;

    #[test]
    fn test_stub_embedder_loads() {
        let embedder = SentenceEmbedder::stub().unwrap();
        assert!(embedder.is_stub());
        assert_eq!(embedder.embedding_dim(), SENTENCE_EMBEDDING_DIM);
    }

    #[test]
    fn test_stub_embedding_dimension() {
        let embedder = SentenceEmbedder::load(SentenceConfig::stub().with_embedding_dim(96)).unwrap();
        let embedding = embedder.embed("Rust developer").unwrap();
        assert_eq!(embedding.dim(), 96);
    }

    #[test]
    fn test_stub_identical_texts_identical_embeddings() {
        let embedder = SentenceEmbedder::stub().unwrap();
        let a = embedder.embed("Python developer with 5 years experience").unwrap();
        let b = embedder.embed("Python developer with 5 years experience").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_stub_empty_text_does_not_fail() {
        let embedder = SentenceEmbedder::stub().unwrap();
        let embedding = embedder.embed("").unwrap();
        assert!(embedding.is_zero());
    }

    #[test]
    fn test_embed_batch_preserves_order() {
        let embedder = SentenceEmbedder::stub().unwrap();
        let batch = embedder.embed_batch(&["alpha", "beta"]).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], embedder.embed("alpha").unwrap());
        assert_eq!(batch[1], embedder.embed("beta").unwrap());
    }

    #[test]
    fn test_load_missing_model_dir_fails() {
        let err = SentenceEmbedder::load(SentenceConfig::new("/nonexistent/minilm")).unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelNotFound { .. }));
    }

    #[test]
    fn test_load_corrupt_model_files_fails() {
        let dir = tempfile::tempdir().unwrap();
        for name in REQUIRED_MODEL_FILES {
            std::fs::write(dir.path().join(name), b"not a model").unwrap();
        }
        let err = SentenceEmbedder::load(SentenceConfig::new(dir.path())).unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelLoadFailed { .. }));
    }

    #[test]
    fn test_debug_shows_backend() {
        let embedder = SentenceEmbedder::stub().unwrap();
        let debug = format!("{:?}", embedder);
        assert!(debug.contains("SentenceEmbedder"));
        assert!(debug.contains("Stub"));
    }
}
