use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{config::Config, middleware::rate_limit::RateLimiter, service::token::TokenAuthority};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub token_authority: TokenAuthority,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let token_authority = TokenAuthority::new(&config.jwt_secret);
        let rate_limiter = Arc::new(RateLimiter::new(
            config.rate_limit_window(),
            config.rate_limit_max_requests,
        ));

        Self {
            db,
            config: Arc::new(config),
            token_authority,
            rate_limiter,
        }
    }
}
