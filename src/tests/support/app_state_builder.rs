use actix_web::web;
use std::sync::Arc;

use crate::auth::application::{
    auth_use_cases::AuthUseCases,
    ports::incoming::{
        services::CurrentSessionService,
        use_cases::{SignInUseCase, SignOutUseCase, SignUpUseCase},
    },
};
use crate::comments::application::{
    comment_use_cases::CommentUseCases,
    ports::incoming::use_cases::{
        CreateCommentUseCase, DeleteCommentUseCase, ListCommentsUseCase,
    },
};
use crate::multimedia::application::{
    media_use_cases::MultimediaUseCases,
    ports::incoming::use_cases::{
        AdminListMediaUseCase, DeleteMediaUseCase, GetMediaUseCase, IngestMediaUseCase,
        LikeMediaUseCase, ListMediaUseCase, MediaStatsUseCase, SubmissionProgressUseCase,
        UpdateMediaUseCase,
    },
    submission_registry::SubmissionRegistry,
};
use crate::tags::application::{
    ports::incoming::use_cases::{CreateTagUseCase, DeleteTagUseCase, ListTagsUseCase},
    tag_use_cases::TagUseCases,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case starts as a stub; tests swap in the ones they exercise.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    multimedia: MultimediaUseCases,
    tags: TagUseCases,
    comments: CommentUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                sign_in: Arc::new(StubSignInUseCase),
                sign_up: Arc::new(StubSignUpUseCase),
                sign_out: Arc::new(StubSignOutUseCase),
                current_session: Arc::new(CurrentSessionService),
            },
            multimedia: MultimediaUseCases {
                ingest: Arc::new(StubIngestMediaUseCase::default()),
                submission_progress: Arc::new(SubmissionRegistry::new()),
                list: Arc::new(StubListMediaUseCase),
                admin_list: Arc::new(StubAdminListMediaUseCase),
                get: Arc::new(StubGetMediaUseCase),
                like: Arc::new(StubLikeMediaUseCase),
                update: Arc::new(StubUpdateMediaUseCase),
                delete: Arc::new(StubDeleteMediaUseCase),
                stats: Arc::new(StubMediaStatsUseCase),
            },
            tags: TagUseCases {
                list: Arc::new(StubListTagsUseCase::success(vec![])),
                create: Arc::new(StubCreateTagUseCase),
                delete: Arc::new(StubDeleteTagUseCase),
            },
            comments: CommentUseCases {
                list: Arc::new(StubListCommentsUseCase),
                create: Arc::new(StubCreateCommentUseCase),
                delete: Arc::new(StubDeleteCommentUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ── Auth ────────────────────────────────────────────────

    pub fn with_sign_in(mut self, uc: impl SignInUseCase + Send + Sync + 'static) -> Self {
        self.auth.sign_in = Arc::new(uc);
        self
    }

    pub fn with_sign_up(mut self, uc: impl SignUpUseCase + Send + Sync + 'static) -> Self {
        self.auth.sign_up = Arc::new(uc);
        self
    }

    pub fn with_sign_out(mut self, uc: impl SignOutUseCase + Send + Sync + 'static) -> Self {
        self.auth.sign_out = Arc::new(uc);
        self
    }

    // ── Multimedia ──────────────────────────────────────────

    pub fn with_ingest_media(
        mut self,
        uc: impl IngestMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.multimedia.ingest = Arc::new(uc);
        self
    }

    pub fn with_submission_progress(
        mut self,
        uc: impl SubmissionProgressUseCase + Send + Sync + 'static,
    ) -> Self {
        self.multimedia.submission_progress = Arc::new(uc);
        self
    }

    pub fn with_list_media(mut self, uc: impl ListMediaUseCase + Send + Sync + 'static) -> Self {
        self.multimedia.list = Arc::new(uc);
        self
    }

    pub fn with_admin_list_media(
        mut self,
        uc: impl AdminListMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.multimedia.admin_list = Arc::new(uc);
        self
    }

    pub fn with_get_media(mut self, uc: impl GetMediaUseCase + Send + Sync + 'static) -> Self {
        self.multimedia.get = Arc::new(uc);
        self
    }

    pub fn with_like_media(mut self, uc: impl LikeMediaUseCase + Send + Sync + 'static) -> Self {
        self.multimedia.like = Arc::new(uc);
        self
    }

    pub fn with_update_media(
        mut self,
        uc: impl UpdateMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.multimedia.update = Arc::new(uc);
        self
    }

    pub fn with_delete_media(
        mut self,
        uc: impl DeleteMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.multimedia.delete = Arc::new(uc);
        self
    }

    pub fn with_media_stats(mut self, uc: impl MediaStatsUseCase + Send + Sync + 'static) -> Self {
        self.multimedia.stats = Arc::new(uc);
        self
    }

    // ── Tags ────────────────────────────────────────────────

    pub fn with_list_tags(mut self, uc: impl ListTagsUseCase + Send + Sync + 'static) -> Self {
        self.tags.list = Arc::new(uc);
        self
    }

    pub fn with_create_tag(mut self, uc: impl CreateTagUseCase + Send + Sync + 'static) -> Self {
        self.tags.create = Arc::new(uc);
        self
    }

    pub fn with_delete_tag(mut self, uc: impl DeleteTagUseCase + Send + Sync + 'static) -> Self {
        self.tags.delete = Arc::new(uc);
        self
    }

    // ── Comments ────────────────────────────────────────────

    pub fn with_list_comments(
        mut self,
        uc: impl ListCommentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comments.list = Arc::new(uc);
        self
    }

    pub fn with_create_comment(
        mut self,
        uc: impl CreateCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comments.create = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(
        mut self,
        uc: impl DeleteCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comments.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            multimedia: self.multimedia,
            tags: self.tags,
            comments: self.comments,
        })
    }
}
