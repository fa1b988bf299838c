use std::sync::Arc;

use crate::{
    domain::{
        error::DomainError, models::credential::HashedPassword,
        services::password_service::PasswordHasher,
    },
    usecase::credential_usecase::CredentialUsecase,
};
use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde::{Deserialize, Serialize};

// Request

/// json for hash request
#[derive(Serialize, Deserialize)]
pub struct HashRequest {
    pub password: String,
}

/// json for verify request
#[derive(Serialize, Deserialize)]
pub struct VerifyRequest {
    pub password: String,
    pub hash: String,
}

/// json for identifier request, seed defaults to 0
#[derive(Serialize, Deserialize)]
pub struct IdentifierRequest {
    pub input: String,
    #[serde(default)]
    pub seed: Option<i32>,
}

// Response

#[derive(Serialize, Deserialize)]
pub struct HashResponse {
    pub hash: String,
}

#[derive(Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

#[derive(Serialize, Deserialize)]
pub struct IdentifierResponse {
    pub identifier: String,
}

/* Router Function and Handler Function */

/// function return Router object
/// Suppose to be nested by main router
pub fn create_credential_router<P: PasswordHasher + Send + Sync + 'static>(
    credential_service: CredentialUsecase<P>,
) -> Router {
    let state = AppState {
        credential_service: Arc::new(credential_service),
    };

    Router::new()
        .route("/password/hash", post(hash_password::<P>))
        .route("/password/verify", post(verify_password::<P>))
        .route("/identifier", post(derive_identifier::<P>))
        .with_state(state)
}

pub struct AppState<P: PasswordHasher> {
    pub credential_service: Arc<CredentialUsecase<P>>,
}

// derive(Clone) would demand P: Clone on the Arc'd usecase too
impl<P: PasswordHasher> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            credential_service: Arc::clone(&self.credential_service),
        }
    }
}

// handler function

/// handler function for hashing
async fn hash_password<P: PasswordHasher + Send + Sync + 'static>(
    State(state): State<AppState<P>>,
    Json(payload): Json<HashRequest>,
) -> impl IntoResponse {
    match state.credential_service.hash_password(payload.password).await {
        Ok(hashed) => {
            let response = HashResponse {
                hash: hashed.into_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e @ (DomainError::EmptyPassword | DomainError::PasswordTooLong { .. })) => {
            (StatusCode::BAD_REQUEST, Json(e.to_string())).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "password hashing failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json("Hashing failed")).into_response()
        }
    }
}

/// handler function for verification
async fn verify_password<P: PasswordHasher + Send + Sync + 'static>(
    State(state): State<AppState<P>>,
    Json(payload): Json<VerifyRequest>,
) -> impl IntoResponse {
    let valid = state
        .credential_service
        .verify_password(payload.password, HashedPassword::new(payload.hash))
        .await;

    (StatusCode::OK, Json(VerifyResponse { valid })).into_response()
}

/// handler function for identifier derivation
async fn derive_identifier<P: PasswordHasher + Send + Sync + 'static>(
    State(state): State<AppState<P>>,
    Json(payload): Json<IdentifierRequest>,
) -> impl IntoResponse {
    let identifier = state
        .credential_service
        .derive_identifier(&payload.input, payload.seed);

    let response = IdentifierResponse {
        identifier: identifier.to_string(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use http_body_util::BodyExt;
    use rstest::*;
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        domain::models::credential::HashScheme,
        infrastructure::{
            bcrypt_password_hasher::BcryptPasswordHasher,
            scheme_password_hasher::SchemePasswordHasher,
        },
    };

    // mock hasher: "mock$<password>" stands in for a real hash
    #[derive(Clone)]
    struct MockPasswordHasher;

    impl PasswordHasher for MockPasswordHasher {
        fn scheme(&self) -> HashScheme {
            HashScheme::Bcrypt
        }

        fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
            match plain_password {
                "" => Err(DomainError::EmptyPassword),
                "explode" => Err(DomainError::HashingFailed("no entropy".to_string())),
                long if long.len() > 72 => Err(DomainError::PasswordTooLong {
                    len: long.len(),
                    max: 72,
                }),
                _ => Ok(HashedPassword::new(format!("mock${plain_password}"))),
            }
        }

        fn verify(&self, plain_password: &str, hashed_password: &HashedPassword) -> bool {
            hashed_password.as_str().strip_prefix("mock$") == Some(plain_password)
        }
    }

    #[fixture]
    async fn test_app() -> Router {
        let credential_usecase = CredentialUsecase::new(MockPasswordHasher);

        // setup router: sync settings of main.app
        Router::new().nest("/api", create_credential_router(credential_usecase))
    }

    /// # Description
    ///
    /// General POST helper shared by the test cases
    async fn post_json(app: Router, uri: &str, body: String) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> T {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    // Hash

    #[rstest]
    #[tokio::test]
    async fn test_hash_positive(#[future] test_app: Router) {
        let app = test_app.await;
        let body = serde_json::to_string(&HashRequest {
            password: "test_password".to_string(),
        })
        .unwrap();

        let response = post_json(app, "/api/password/hash", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let hash_response: HashResponse = read_json(response).await;
        assert_eq!(hash_response.hash, "mock$test_password");
    }

    #[rstest]
    #[tokio::test]
    async fn test_hash_empty_password_negative(#[future] test_app: Router) {
        let app = test_app.await;
        let body = serde_json::to_string(&HashRequest {
            password: String::new(),
        })
        .unwrap();

        let response = post_json(app, "/api/password/hash", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[tokio::test]
    async fn test_hash_primitive_failure_negative(#[future] test_app: Router) {
        let app = test_app.await;
        let body = serde_json::to_string(&HashRequest {
            password: "explode".to_string(),
        })
        .unwrap();

        let response = post_json(app, "/api/password/hash", body).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[rstest]
    #[tokio::test]
    async fn test_hash_too_long_negative(#[future] test_app: Router) {
        let app = test_app.await;
        let body = serde_json::to_string(&HashRequest {
            password: "a".repeat(73),
        })
        .unwrap();

        let response = post_json(app, "/api/password/hash", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // Verify

    #[rstest]
    #[case("test_password", "mock$test_password", true)]
    #[case("wrong_password", "mock$test_password", false)]
    #[case("x", "not-a-valid-hash-format", false)]
    #[tokio::test]
    async fn test_verify(
        #[future] test_app: Router,
        #[case] password: &str,
        #[case] hash: &str,
        #[case] expected: bool,
    ) {
        let app = test_app.await;
        let body = serde_json::to_string(&VerifyRequest {
            password: password.to_string(),
            hash: hash.to_string(),
        })
        .unwrap();

        let response = post_json(app, "/api/password/verify", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let verify_response: VerifyResponse = read_json(response).await;
        assert_eq!(verify_response.valid, expected);
    }

    #[rstest]
    #[case("$argon2id$v=19$m=4294967295,t=1,p=1$c2FsdHNhbHQ$ZGlnZXN0ZGlnZXN0ZGlnZXN0ZGlnZXN0")]
    #[case("$2b$31$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW")]
    #[tokio::test]
    async fn test_verify_hostile_cost_negative(#[case] hash: &str) {
        // real hasher: the stored cost must be checked before any work is done
        let hasher = SchemePasswordHasher::new(HashScheme::Bcrypt)
            .with_bcrypt(BcryptPasswordHasher::with_cost(4).unwrap());
        let app = Router::new().nest(
            "/api",
            create_credential_router(CredentialUsecase::new(hasher)),
        );
        let body = serde_json::to_string(&VerifyRequest {
            password: "x".to_string(),
            hash: hash.to_string(),
        })
        .unwrap();

        let response = post_json(app, "/api/password/verify", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let verify_response: VerifyResponse = read_json(response).await;
        assert!(!verify_response.valid);
    }

    // Identifier

    #[rstest]
    #[case(r#"{"input":"hello"}"#, "TWOL_4625896200565286")]
    #[case(r#"{"input":"hello","seed":0}"#, "TWOL_4625896200565286")]
    #[case(r#"{"input":"hello","seed":1}"#, "TWOL_6922249475667011")]
    #[tokio::test]
    async fn test_identifier(
        #[future] test_app: Router,
        #[case] body: &str,
        #[case] expected: &str,
    ) {
        let app = test_app.await;

        let response = post_json(app, "/api/identifier", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let identifier_response: IdentifierResponse = read_json(response).await;
        assert_eq!(identifier_response.identifier, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn test_identifier_missing_input_negative(#[future] test_app: Router) {
        let app = test_app.await;

        let response = post_json(app, "/api/identifier", r#"{"seed":1}"#.to_string()).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
