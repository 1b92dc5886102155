pub mod auth_gateway;
pub mod token_verifier;

pub use auth_gateway::{
    AuthGateway, AuthGatewayError, GatewaySignUp, GatewayTokens, GatewayUser, SignUpProfile,
};
pub use token_verifier::{TokenError, TokenVerifier};
