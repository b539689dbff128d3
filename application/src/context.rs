//! [`Context`]-related definitions.

use std::sync::atomic::{self, AtomicU16};

use axum::{async_trait, extract::FromRequestParts, RequestPartsExt as _};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use common::DateTime;
use juniper::{
    http::{GraphQLBatchResponse, GraphQLResponse},
    IntoFieldError as _,
};
use serde::Deserialize;
use service::{access::Actor, domain::user};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{define_error, AsError, Error, JuniperResponse, Service};

/// Application context.
#[derive(Debug)]
pub struct Context {
    /// [`Service`] instance.
    service: Service,

    /// [`Auth`] verifying authentication tokens.
    auth: Auth,

    /// Error status code.
    error_status_code: AtomicU16,

    /// Parts of the HTTP request.
    parts: http::request::Parts,

    /// Current [`Session`].
    current_session: OnceCell<Session>,

    /// Last authentication [`Error`].
    auth_error: OnceCell<Error>,
}

impl Context {
    /// Returns [`Service`] instance of this [`Context`].
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Returns the error status code of this [`Context`].
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn error_status_code(&self) -> http::StatusCode {
        http::StatusCode::from_u16(
            self.error_status_code.load(atomic::Ordering::Relaxed),
        )
        .expect("invalid status code")
    }

    /// Sets the error status code for this [`Context`].
    ///
    /// Provided [`http::StatusCode`] will be applied to the response.
    pub fn set_error_status_code(&self, status_code: http::StatusCode) {
        self.error_status_code
            .store(status_code.as_u16(), atomic::Ordering::Relaxed);
    }

    /// Helper method calling [`Context::set_error_status_code()`] inside
    /// [`Result::map_err()`] closure.
    pub fn error(&self) -> impl FnOnce(Error) -> Error + '_ {
        move |err| {
            self.set_error_status_code(err.status_code);
            err
        }
    }

    /// Tries to get the current [`Session`] for this [`Context`].
    ///
    /// # Errors
    ///
    /// Errors if the provided authentication token is invalid.
    pub async fn try_current_session(&self) -> Result<Option<Session>, Error> {
        self.current_session().await.map(Some).or_else(|e| {
            if e.code == Error::from(AuthError::AuthorizationRequired).code {
                Ok(None)
            } else {
                Err(e)
            }
        })
    }

    /// Returns the current [`Session`] for this [`Context`].
    ///
    /// # Errors
    ///
    /// Errors if:
    /// - the current HTTP request is not authorized;
    /// - the provided authentication token is invalid.
    pub async fn current_session(&self) -> Result<Session, Error> {
        self.current_session
            .get_or_try_init(|| async {
                match self
                    .auth_error
                    .get_or_try_init(|| async {
                        match self.do_authentication().await {
                            Ok(u) => Err(u),
                            Err(e) => Ok(e),
                        }
                    })
                    .await
                {
                    Ok(e) => Err(e),
                    Err(u) => Ok(u),
                }
            })
            .await
            .cloned()
            .map_err(Clone::clone)
    }

    /// Performs the [`Session`] authentication.
    ///
    /// # Errors
    ///
    /// Errors if the provided authentication token is invalid.
    async fn do_authentication(&self) -> Result<Session, Error> {
        let res = self
            .parts
            .clone()
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await;
        match res {
            Ok(TypedHeader(Authorization(bearer))) => {
                self.auth.verify(bearer.token())
            }
            Err(e) => {
                if e.is_missing() {
                    Err(AuthError::AuthorizationRequired.into())
                } else {
                    Err(e.into_error())
                }
            }
        }
        .map_err(self.error())
    }
}

impl juniper::Context for Context {}

#[async_trait]
impl<S> FromRequestParts<S> for Context
where
    S: Send + Sync,
{
    type Rejection = JuniperResponse;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _: &S,
    ) -> Result<Self, Self::Rejection> {
        let missing = |what: &'static str| JuniperResponse {
            status_code: http::StatusCode::INTERNAL_SERVER_ERROR,
            response: GraphQLBatchResponse::Single(GraphQLResponse::error(
                Error::internal(&format!("missing `{what}` extension"))
                    .into_field_error(),
            )),
        };

        let service = parts
            .extensions
            .get::<Service>()
            .cloned()
            .ok_or_else(|| missing("Service"))?;
        let auth = parts
            .extensions
            .get::<Auth>()
            .cloned()
            .ok_or_else(|| missing("Auth"))?;

        Ok(Self {
            service,
            auth,
            error_status_code: AtomicU16::new(
                http::StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            ),
            parts: parts.clone(),
            current_session: OnceCell::new(),
            auth_error: OnceCell::new(),
        })
    }
}

/// Authenticated session of a back-office [`user`].
#[derive(Clone, Debug)]
pub struct Session {
    /// [`Actor`] associated with this [`Session`].
    pub actor: Actor,

    /// [`DateTime`] when this [`Session`] expires.
    pub expires_at: DateTime,
}

/// Verifier of [JWT] authentication tokens.
///
/// [JWT]: https://wikipedia.org/wiki/JSON_Web_Token
#[derive(Clone)]
pub struct Auth {
    /// Key to verify token signatures with.
    decoding_key: jsonwebtoken::DecodingKey,

    /// Validation parameters of the tokens.
    validation: jsonwebtoken::Validation,
}

impl Auth {
    /// Creates a new [`Auth`] verifying tokens signed with the provided
    /// `secret`.
    #[must_use]
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            decoding_key: jsonwebtoken::DecodingKey::from_secret(
                secret.as_ref(),
            ),
            validation: jsonwebtoken::Validation::default(),
        }
    }

    /// Verifies the provided `token` and extracts the [`Session`] out of its
    /// claims.
    ///
    /// # Errors
    ///
    /// Errors if the `token` is expired, malformed, carries an unknown role,
    /// or its signature doesn't match.
    pub fn verify(&self, token: &str) -> Result<Session, Error> {
        let claims = jsonwebtoken::decode::<Claims>(
            token,
            &self.decoding_key,
            &self.validation,
        )
        .map_err(|_| Error::from(AuthError::InvalidToken))?
        .claims;

        let roles = claims
            .roles
            .iter()
            .map(|role| role.parse::<user::Role>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Error::from(AuthError::InvalidToken))?;
        let expires_at = DateTime::from_unix_timestamp(claims.exp)
            .ok_or_else(|| Error::from(AuthError::InvalidToken))?;

        Ok(Session {
            actor: Actor {
                id: claims.sub.into(),
                roles,
            },
            expires_at,
        })
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth").finish_non_exhaustive()
    }
}

/// Claims of an authentication token.
#[derive(Debug, Deserialize)]
struct Claims {
    /// ID of the authenticated [`user`].
    sub: Uuid,

    /// [`user::Role`]s granted to the authenticated [`user`].
    #[serde(default)]
    roles: Vec<String>,

    /// Expiration of the token, as a Unix timestamp.
    exp: i64,
}

define_error! {
    enum AuthError {
        #[code = "AUTHORIZATION_REQUIRED"]
        #[status = UNAUTHORIZED]
        #[message = "Authorization required"]
        AuthorizationRequired,

        #[code = "INVALID_TOKEN"]
        #[status = UNAUTHORIZED]
        #[message = "Invalid authentication token"]
        InvalidToken,
    }
}

#[cfg(test)]
mod spec {
    use common::DateTime;
    use serde::Serialize;
    use service::domain::user;

    use super::Auth;

    #[derive(Serialize)]
    struct TestClaims {
        sub: uuid::Uuid,
        roles: Vec<&'static str>,
        exp: i64,
    }

    fn token(claims: &TestClaims, secret: &str) -> String {
        jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            claims,
            &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn verifies_roles_and_subject() {
        let id = uuid::Uuid::new_v4();
        let token = token(
            &TestClaims {
                sub: id,
                roles: vec!["ADMIN", "EDITOR"],
                exp: DateTime::now().unix_timestamp() + 3600,
            },
            "secret",
        );

        let session = Auth::new("secret").verify(&token).unwrap();
        assert_eq!(session.actor.id, id.into());
        assert_eq!(
            session.actor.roles,
            vec![user::Role::Admin, user::Role::Editor],
        );
    }

    #[test]
    fn rejects_wrong_signature() {
        let token = token(
            &TestClaims {
                sub: uuid::Uuid::new_v4(),
                roles: vec!["ADMIN"],
                exp: DateTime::now().unix_timestamp() + 3600,
            },
            "other-secret",
        );

        assert!(Auth::new("secret").verify(&token).is_err());
    }

    #[test]
    fn rejects_expired() {
        let token = token(
            &TestClaims {
                sub: uuid::Uuid::new_v4(),
                roles: vec!["ADMIN"],
                exp: DateTime::now().unix_timestamp() - 3600,
            },
            "secret",
        );

        assert!(Auth::new("secret").verify(&token).is_err());
    }

    #[test]
    fn rejects_unknown_role() {
        let token = token(
            &TestClaims {
                sub: uuid::Uuid::new_v4(),
                roles: vec!["SUPERUSER"],
                exp: DateTime::now().unix_timestamp() + 3600,
            },
            "secret",
        );

        assert!(Auth::new("secret").verify(&token).is_err());
    }
}
