// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub(super) fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut claims = Claims::default();
    for fact in facts {
        claims.apply(fact.predicate);
    }
    claims.into_user()
}

#[derive(Default)]
struct Claims {
    user_id: Option<i64>,
    username: Option<String>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl Claims {
    fn apply(&mut self, predicate: Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user_id = Some(*id);
                self.username = Some(name.clone());
            }
            ("issued_at", [Term::Date(seconds)]) => self.issued_at = Some(from_epoch(*seconds)),
            ("expires_at", [Term::Date(seconds)]) => self.expires_at = Some(from_epoch(*seconds)),
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let missing = |claim: &str| ApplicationError::unauthorized(format!("missing {claim}"));

        let user_id = self.user_id.ok_or_else(|| missing("user id"))?;
        let username = self.username.ok_or_else(|| missing("username"))?;
        let issued_at = self.issued_at.ok_or_else(|| missing("issued_at"))?;
        let expires_at = self.expires_at.ok_or_else(|| missing("expires_at"))?;

        let id = UserId::new(user_id)
            .map_err(|_| ApplicationError::unauthorized("invalid user id"))?;

        Ok(AuthenticatedUser {
            id,
            username,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
        })
    }
}

fn from_epoch(seconds: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(seconds)
}
