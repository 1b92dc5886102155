use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    CurrentSessionUseCase, SignInUseCase, SignOutUseCase, SignUpUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub sign_in: Arc<dyn SignInUseCase + Send + Sync>,
    pub sign_up: Arc<dyn SignUpUseCase + Send + Sync>,
    pub sign_out: Arc<dyn SignOutUseCase + Send + Sync>,
    pub current_session: Arc<dyn CurrentSessionUseCase + Send + Sync>,
}
