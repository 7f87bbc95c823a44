//! In-memory session store and the `CurrentSession` extractor.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{
        header::{COOKIE, SET_COOKIE},
        request::Parts,
        HeaderMap, HeaderValue,
    },
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::Session;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "career_session";

struct StoredSession {
    session: Session,
    last_seen: DateTime<Utc>,
}

/// Sessions keyed by the id in the session cookie. Idle sessions expire after `ttl`.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, StoredSession>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Returns the live session for `id`, if it exists and has not expired.
    pub async fn load(&self, id: Uuid) -> Option<Session> {
        self.load_at(id, Utc::now()).await
    }

    async fn load_at(&self, id: Uuid, now: DateTime<Utc>) -> Option<Session> {
        let sessions = self.inner.read().await;
        sessions
            .get(&id)
            .filter(|stored| now - stored.last_seen <= self.ttl)
            .map(|stored| stored.session.clone())
    }

    pub async fn save(&self, id: Uuid, session: Session) {
        self.save_at(id, session, Utc::now()).await;
    }

    async fn save_at(&self, id: Uuid, session: Session, now: DateTime<Utc>) {
        let mut sessions = self.inner.write().await;
        let ttl = self.ttl;
        let before = sessions.len();
        sessions.retain(|_, stored| now - stored.last_seen <= ttl);
        if sessions.len() < before {
            debug!(expired = before - sessions.len(), "Discarded idle sessions");
        }
        sessions.insert(
            id,
            StoredSession {
                session,
                last_seen: now,
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

/// Reads the session id out of a `Cookie` header.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// The requesting visitor's session. Unknown or expired ids start a fresh one.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub id: Uuid,
    pub session: Session,
}

impl CurrentSession {
    /// Persists the session and attaches the session cookie to `response`.
    pub async fn commit(
        self,
        store: &SessionStore,
        response: impl IntoResponse,
    ) -> Result<Response, AppError> {
        store.save(self.id, self.session).await;

        let cookie = format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.id);
        let value = HeaderValue::from_str(&cookie).map_err(|e| AppError::Internal(e.into()))?;

        let mut response = response.into_response();
        response.headers_mut().insert(SET_COOKIE, value);
        Ok(response)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(id) = session_id_from_headers(&parts.headers) {
            if let Some(session) = state.sessions.load(id).await {
                return Ok(CurrentSession { id, session });
            }
            debug!(session_id = %id, "Session cookie unknown or expired; starting fresh");
        }

        Ok(CurrentSession {
            id: Uuid::new_v4(),
            session: Session::default(),
        })
    }
}
