use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::shared::i18n::TranslationBundle;
use std::sync::Arc;

use crate::shared::translations::{TranslationError, TranslationStore};

/// GET /api/translations/:language/:category
pub async fn get_bundle(
    State(store): State<Arc<TranslationStore>>,
    Path((language, category)): Path<(String, String)>,
) -> Result<Json<TranslationBundle>, StatusCode> {
    match store.bundle(&language, &category).await {
        Ok(bundle) => Ok(Json(bundle)),
        Err(e) => Err(status_for(&e)),
    }
}

fn status_for(error: &TranslationError) -> StatusCode {
    match error {
        TranslationError::InvalidLanguage(_) => StatusCode::BAD_REQUEST,
        TranslationError::UnknownCategory(_) => StatusCode::NOT_FOUND,
        TranslationError::Io { .. } | TranslationError::Parse { .. } => {
            tracing::error!("translations: {}", error);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&TranslationError::InvalidLanguage("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&TranslationError::UnknownCategory("x".into())),
            StatusCode::NOT_FOUND
        );
        let io = TranslationError::Io {
            path: "t/en/ui.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(status_for(&io), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_get_bundle_returns_json() {
        let store = Arc::new(TranslationStore::new(
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("translations"),
            "en",
        ));
        let Json(bundle) = get_bundle(
            State(store.clone()),
            Path(("en".to_string(), "title".to_string())),
        )
        .await
        .unwrap();
        assert_eq!(bundle.category, "title");

        let err = get_bundle(State(store), Path(("en".to_string(), "nope".to_string())))
            .await
            .unwrap_err();
        assert_eq!(err, StatusCode::NOT_FOUND);
    }
}
