use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::Session,
    ports::{
        incoming::use_cases::{
            SignInCommand, SignInError, SignInResult, SignInUseCase, SignOutError,
            SignOutUseCase, SignUpCommand, SignUpError, SignUpResult, SignUpUseCase,
        },
        outgoing::{TokenError, TokenVerifier},
    },
};
use crate::comments::application::{
    domain::entities::Comment,
    ports::incoming::use_cases::{
        CreateCommentCommand, CreateCommentError, CreateCommentUseCase, DeleteCommentError,
        DeleteCommentUseCase, ListCommentsError, ListCommentsUseCase,
    },
};
use crate::multimedia::application::{
    domain::{entities::MediaItem, policies::ingest_policy::IngestPolicy},
    ports::{
        incoming::use_cases::{
            AdminListMediaQuery, AdminListMediaUseCase, DeleteMediaError, DeleteMediaOutcome,
            DeleteMediaUseCase, GetMediaError, GetMediaUseCase, IngestMediaCommand,
            IngestMediaError, IngestMediaUseCase, IngestResult, LikeMediaError, LikeMediaUseCase,
            LikeOutcome, ListMediaError, ListMediaQuery, ListMediaUseCase, MediaStatsError,
            MediaStatsUseCase, MediaView, UpdateMediaCommand, UpdateMediaError,
            UpdateMediaUseCase,
        },
        outgoing::db::MediaStats,
    },
};
use crate::tags::application::{
    domain::entities::Tag,
    ports::incoming::use_cases::{
        CreateTagCommand, CreateTagError, CreateTagUseCase, DeleteTagError, DeleteTagUseCase,
        ListTagsError, ListTagsUseCase,
    },
};
use crate::tests::support::media_fixtures::{active_session, member_session};

// ============================================================
// Token verification
// ============================================================

/// Answers every token with the same outcome.
#[derive(Clone)]
pub struct StubTokenVerifier {
    outcome: Result<Session, TokenError>,
}

impl StubTokenVerifier {
    pub fn admin() -> Self {
        Self {
            outcome: Ok(active_session()),
        }
    }

    pub fn member() -> Self {
        Self {
            outcome: Ok(member_session()),
        }
    }

    pub fn failing(err: TokenError) -> Self {
        Self { outcome: Err(err) }
    }

    pub fn into_data(self) -> web::Data<Arc<dyn TokenVerifier>> {
        let verifier: Arc<dyn TokenVerifier> = Arc::new(self);
        web::Data::new(verifier)
    }
}

impl TokenVerifier for StubTokenVerifier {
    fn verify(&self, _token: &str) -> Result<Session, TokenError> {
        self.outcome.clone()
    }
}

/// Verifier accepting any bearer as the admin session from `active_session()`.
pub fn admin_token_verifier() -> web::Data<Arc<dyn TokenVerifier>> {
    StubTokenVerifier::admin().into_data()
}

// ============================================================
// Auth
// ============================================================

#[derive(Default, Clone)]
pub struct StubSignInUseCase;

#[async_trait]
impl SignInUseCase for StubSignInUseCase {
    async fn execute(&self, _command: SignInCommand) -> Result<SignInResult, SignInError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSignUpUseCase;

#[async_trait]
impl SignUpUseCase for StubSignUpUseCase {
    async fn execute(&self, _command: SignUpCommand) -> Result<SignUpResult, SignUpError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSignOutUseCase;

#[async_trait]
impl SignOutUseCase for StubSignOutUseCase {
    async fn execute(&self, _session: &Session) -> Result<(), SignOutError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================
// Multimedia
// ============================================================

#[derive(Default, Clone)]
pub struct StubIngestMediaUseCase {
    policy: IngestPolicy,
}

#[async_trait]
impl IngestMediaUseCase for StubIngestMediaUseCase {
    async fn execute(
        &self,
        _session: &Session,
        _command: IngestMediaCommand,
    ) -> Result<IngestResult, IngestMediaError> {
        unimplemented!("Not used in this test")
    }

    fn policy(&self) -> &IngestPolicy {
        &self.policy
    }
}

#[derive(Default, Clone)]
pub struct StubListMediaUseCase;

#[async_trait]
impl ListMediaUseCase for StubListMediaUseCase {
    async fn execute(&self, _query: ListMediaQuery) -> Result<Vec<MediaView>, ListMediaError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAdminListMediaUseCase;

#[async_trait]
impl AdminListMediaUseCase for StubAdminListMediaUseCase {
    async fn execute(
        &self,
        _query: AdminListMediaQuery,
    ) -> Result<Vec<MediaView>, ListMediaError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetMediaUseCase;

#[async_trait]
impl GetMediaUseCase for StubGetMediaUseCase {
    async fn execute(&self, _media_id: Uuid) -> Result<MediaView, GetMediaError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLikeMediaUseCase;

#[async_trait]
impl LikeMediaUseCase for StubLikeMediaUseCase {
    async fn execute(
        &self,
        _session: &Session,
        _media_id: Uuid,
    ) -> Result<LikeOutcome, LikeMediaError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateMediaUseCase;

#[async_trait]
impl UpdateMediaUseCase for StubUpdateMediaUseCase {
    async fn execute(&self, _command: UpdateMediaCommand) -> Result<MediaItem, UpdateMediaError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteMediaUseCase;

#[async_trait]
impl DeleteMediaUseCase for StubDeleteMediaUseCase {
    async fn execute(
        &self,
        _session: &Session,
        _media_id: Uuid,
    ) -> Result<DeleteMediaOutcome, DeleteMediaError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubMediaStatsUseCase;

#[async_trait]
impl MediaStatsUseCase for StubMediaStatsUseCase {
    async fn execute(&self) -> Result<MediaStats, MediaStatsError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================
// Tags
// ============================================================

#[derive(Clone)]
pub struct StubListTagsUseCase {
    result: Result<Vec<Tag>, ListTagsError>,
}

impl StubListTagsUseCase {
    pub fn success(tags: Vec<Tag>) -> Self {
        Self { result: Ok(tags) }
    }
}

#[async_trait]
impl ListTagsUseCase for StubListTagsUseCase {
    async fn execute(&self) -> Result<Vec<Tag>, ListTagsError> {
        self.result.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubCreateTagUseCase;

#[async_trait]
impl CreateTagUseCase for StubCreateTagUseCase {
    async fn execute(&self, _command: CreateTagCommand) -> Result<Tag, CreateTagError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteTagUseCase;

#[async_trait]
impl DeleteTagUseCase for StubDeleteTagUseCase {
    async fn execute(&self, _tag_id: Uuid) -> Result<(), DeleteTagError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================
// Comments
// ============================================================

#[derive(Default, Clone)]
pub struct StubListCommentsUseCase;

#[async_trait]
impl ListCommentsUseCase for StubListCommentsUseCase {
    async fn execute(&self, _media_id: Uuid) -> Result<Vec<Comment>, ListCommentsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateCommentUseCase;

#[async_trait]
impl CreateCommentUseCase for StubCreateCommentUseCase {
    async fn execute(
        &self,
        _session: &Session,
        _command: CreateCommentCommand,
    ) -> Result<Comment, CreateCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCommentUseCase;

#[async_trait]
impl DeleteCommentUseCase for StubDeleteCommentUseCase {
    async fn execute(&self, _session: &Session, _comment_id: Uuid) -> Result<(), DeleteCommentError> {
        unimplemented!("Not used in this test")
    }
}
