pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, comments, multimedia, tags};

use crate::api::openapi::ApiDoc;
use crate::auth::{
    adapter::outgoing::{
        auth_gateway_supabase::SupabaseAuthGateway,
        jwt::{JwtConfig, JwtTokenVerifier},
    },
    application::{
        auth_use_cases::AuthUseCases,
        ports::{
            incoming::services::{
                CurrentSessionService, SignInService, SignOutService, SignUpService,
            },
            outgoing::TokenVerifier,
        },
        session_events::SessionEvents,
    },
};
use crate::comments::{
    adapter::outgoing::{CommentQueryPostgres, CommentRepositoryPostgres},
    application::{
        comment_use_cases::CommentUseCases,
        ports::incoming::services::{
            CreateCommentService, DeleteCommentService, ListCommentsService,
        },
    },
};
use crate::multimedia::{
    adapter::outgoing::{
        cloud_storage::SupabaseObjectStorage,
        db::{MediaQueryPostgres, MediaRepositoryPostgres},
    },
    application::{
        domain::policies::ingest_policy::IngestPolicy,
        media_use_cases::MultimediaUseCases,
        ports::incoming::services::{
            DeleteMediaService, GetMediaService, IngestMediaService, LikeMediaService,
            ListMediaService, MediaStatsService, UpdateMediaService,
        },
        submission_registry::SubmissionRegistry,
    },
};
use crate::shared::{
    api::{custom_json_config, custom_path_config, custom_query_config},
    supabase_config::SupabaseConfig,
};
use crate::tags::{
    adapter::outgoing::{TagQueryPostgres, TagRepositoryPostgres},
    application::{
        ports::incoming::services::{CreateTagService, DeleteTagService, ListTagsService},
        tag_use_cases::TagUseCases,
    },
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub multimedia: MultimediaUseCases,
    pub auth: AuthUseCases,
    pub tags: TagUseCases,
    pub comments: CommentUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let max_connections: u32 = env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(20);

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(max_connections)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db_arc = Arc::new(conn);

    // Hosted backend
    let supabase = SupabaseConfig::from_env();
    let verifier: Arc<dyn TokenVerifier> = Arc::new(JwtTokenVerifier::new(JwtConfig::from_env()));
    let policy = IngestPolicy::from_env();
    info!(
        bucket = %policy.bucket_name,
        max_file_size_bytes = policy.max_file_size_bytes,
        max_files = policy.max_files,
        max_submission_bytes = policy.max_submission_bytes,
        timeout_secs = policy.submission_timeout.as_secs(),
        "Ingest policy loaded"
    );

    let storage = SupabaseObjectStorage::new(supabase.clone(), policy.bucket_name.clone());
    let gateway = SupabaseAuthGateway::new(supabase);

    let events = SessionEvents::default();
    let audit_listener = events.spawn_audit_listener();

    // Auth
    let auth = AuthUseCases {
        sign_in: Arc::new(SignInService::new(
            gateway.clone(),
            Arc::clone(&verifier),
            events.clone(),
        )),
        sign_up: Arc::new(SignUpService::new(gateway.clone(), events.clone())),
        sign_out: Arc::new(SignOutService::new(gateway, events)),
        current_session: Arc::new(CurrentSessionService),
    };

    // Media
    let media_query = MediaQueryPostgres::new(Arc::clone(&db_arc));
    let media_repo = MediaRepositoryPostgres::new(Arc::clone(&db_arc));
    let submissions = SubmissionRegistry::new();

    let multimedia = MultimediaUseCases {
        ingest: Arc::new(IngestMediaService::new(
            storage.clone(),
            media_repo.clone(),
            policy,
            submissions.clone(),
        )),
        submission_progress: Arc::new(submissions),
        list: Arc::new(ListMediaService::new(media_query.clone())),
        admin_list: Arc::new(ListMediaService::new(media_query.clone())),
        get: Arc::new(GetMediaService::new(media_query.clone(), media_repo.clone())),
        like: Arc::new(LikeMediaService::new(media_query.clone(), media_repo.clone())),
        update: Arc::new(UpdateMediaService::new(media_repo.clone())),
        delete: Arc::new(DeleteMediaService::new(storage, media_repo)),
        stats: Arc::new(MediaStatsService::new(media_query)),
    };

    // Tags
    let tags = TagUseCases {
        list: Arc::new(ListTagsService::new(TagQueryPostgres::new(Arc::clone(
            &db_arc,
        )))),
        create: Arc::new(CreateTagService::new(TagRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        delete: Arc::new(DeleteTagService::new(TagRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
    };

    // Comments
    let comment_query = CommentQueryPostgres::new(Arc::clone(&db_arc));
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(&db_arc));
    let comments = CommentUseCases {
        list: Arc::new(ListCommentsService::new(comment_query.clone())),
        create: Arc::new(CreateCommentService::new(comment_repo.clone())),
        delete: Arc::new(DeleteCommentService::new(comment_query, comment_repo)),
    };

    let state = AppState {
        multimedia,
        auth,
        tags,
        comments,
    };

    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();

    let result = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&verifier)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await;

    audit_listener.abort();
    result
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::sign_up_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::sign_in_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::sign_out_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_session_handler);
    // Media
    cfg.service(crate::multimedia::adapter::incoming::web::routes::list_media_handler);
    cfg.service(crate::multimedia::adapter::incoming::web::routes::media_stats_handler);
    cfg.service(crate::multimedia::adapter::incoming::web::routes::get_media_handler);
    cfg.service(crate::multimedia::adapter::incoming::web::routes::like_media_handler);
    // Comments
    cfg.service(crate::comments::adapter::incoming::web::routes::list_comments_handler);
    cfg.service(crate::comments::adapter::incoming::web::routes::create_comment_handler);
    cfg.service(crate::comments::adapter::incoming::web::routes::delete_comment_handler);
    // Admin media; static segments before `{id}`
    cfg.service(crate::multimedia::adapter::incoming::web::routes::upload_media_handler);
    cfg.service(crate::multimedia::adapter::incoming::web::routes::submit_link_handler);
    cfg.service(crate::multimedia::adapter::incoming::web::routes::submission_progress_handler);
    cfg.service(crate::multimedia::adapter::incoming::web::routes::admin_list_media_handler);
    cfg.service(crate::multimedia::adapter::incoming::web::routes::update_media_handler);
    cfg.service(crate::multimedia::adapter::incoming::web::routes::delete_media_handler);
    // Tags
    cfg.service(crate::tags::adapter::incoming::web::routes::list_tags_handler);
    cfg.service(crate::tags::adapter::incoming::web::routes::create_tag_handler);
    cfg.service(crate::tags::adapter::incoming::web::routes::delete_tag_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
