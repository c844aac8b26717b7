use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ExtractFoodsRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "text must be between 1 and 5000 characters"
    ))]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_valid() {
        let request = ExtractFoodsRequest {
            text: "comí arroz con pollo".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let request = ExtractFoodsRequest {
            text: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_oversized_text_is_rejected() {
        let request = ExtractFoodsRequest {
            text: "a".repeat(5001),
        };
        assert!(request.validate().is_err());
    }
}
