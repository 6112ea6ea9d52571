//! Verification flow tests.

#[cfg(test)]
mod tests {
    use apisign::{ApiSignConfig, ApiSignService, SignError};
    use serde_json::json;

    use crate::{base_config, request_data, service};

    #[test]
    fn test_should_accept_a_freshly_signed_request() {
        let service = service();
        let mut data = request_data(chrono::Utc::now().timestamp());

        let signature = service.sign(&data).expect("sign");
        data.insert("signature".to_owned(), json!(signature));

        service.check(&data).expect("check");
    }

    #[test]
    fn test_should_reject_tampered_request_with_stable_code() {
        let service = service();
        let mut data = request_data(chrono::Utc::now().timestamp());

        let signature = service.sign(&data).expect("sign");
        data.insert("signature".to_owned(), json!(signature));
        data.insert("noncestr".to_owned(), json!("tampered"));

        let err = service.check(&data).expect_err("tampered");
        assert!(matches!(err, SignError::SignVerifyFail));
        // Hosts map codes onto their response format; 4005 is verification
        // failure.
        assert_eq!(err.code(), 4005);
    }

    #[test]
    fn test_should_reject_stale_request() {
        let service = service();
        let mut data = request_data(chrono::Utc::now().timestamp() - 120);

        let signature = service.sign(&data).expect("sign");
        data.insert("signature".to_owned(), json!(signature));

        let err = service.check(&data).expect_err("stale");
        assert!(matches!(err, SignError::SignTimeout));
        assert_eq!(err.code(), 4006);
    }

    #[test]
    fn test_should_accept_old_request_when_window_disabled() {
        let service = ApiSignService::new(ApiSignConfig {
            timeout: 0,
            ..base_config()
        });

        let mut data = request_data(1_661_408_635);
        let signature = service.sign(&data).expect("sign");
        data.insert("signature".to_owned(), json!(signature));

        service.check(&data).expect("check");
    }

    #[test]
    fn test_should_honor_wider_window_from_config() {
        let service = ApiSignService::new(ApiSignConfig {
            timeout: 600,
            ..base_config()
        });

        let mut data = request_data(chrono::Utc::now().timestamp() - 120);
        let signature = service.sign(&data).expect("sign");
        data.insert("signature".to_owned(), json!(signature));

        service.check(&data).expect("check");
    }

    #[test]
    fn test_should_reject_missing_signature_with_params_code() {
        let service = service();
        let data = request_data(chrono::Utc::now().timestamp());

        let err = service.check(&data).expect_err("no signature");
        assert!(matches!(err, SignError::Params(_)));
        assert_eq!(err.code(), 4001);
    }
}
