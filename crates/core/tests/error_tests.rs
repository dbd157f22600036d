// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use production_dashboard_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("buffer overflow".into());
        assert_eq!(err.to_string(), "Serialization error: buffer overflow");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            provider: "RTE".into(),
            message: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "API error (RTE): rate limited");
    }

    #[test]
    fn api_error_empty_provider() {
        let err = CoreError::Api {
            provider: String::new(),
            message: "unknown".into(),
        };
        assert_eq!(err.to_string(), "API error (): unknown");
    }

    #[test]
    fn auth_error() {
        let err = CoreError::Auth {
            provider: "RTE".into(),
            message: "invalid client".into(),
        };
        assert_eq!(
            err.to_string(),
            "Authentication failed (RTE): invalid client"
        );
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn validation() {
        let err = CoreError::ValidationError("bad range".into());
        assert_eq!(err.to_string(), "Validation failed: bad range");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn serde_json_error_becomes_deserialization() {
        let parse_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err: CoreError = parse_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn serde_json_error_keeps_message() {
        let parse_err = serde_json::from_str::<Vec<i32>>("[1, 2,").unwrap_err();
        let message = parse_err.to_string();
        let err: CoreError = parse_err.into();
        assert_eq!(err.to_string(), format!("Deserialization error: {message}"));
    }
}

// ── Trait object compatibility ──────────────────────────────────────

mod trait_objects {
    use super::*;

    #[test]
    fn implements_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(CoreError::Network("timeout".into()));
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }
}
