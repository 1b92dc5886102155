use crate::auth::application::{
    domain::entities::Session,
    ports::incoming::use_cases::{CurrentSessionUseCase, SessionView},
};

#[derive(Debug, Clone, Default)]
pub struct CurrentSessionService;

impl CurrentSessionUseCase for CurrentSessionService {
    fn execute(&self, session: &Session) -> SessionView {
        SessionView::from(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::media_fixtures::{active_session, member_session};

    #[test]
    fn view_reflects_role() {
        let service = CurrentSessionService;
        assert!(service.execute(&active_session()).is_admin);
        assert!(!service.execute(&member_session()).is_admin);
    }
}
