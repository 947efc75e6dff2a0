//! # Shopifun Identity
//!
//! This is a facade crate that re-exports all public APIs from the identity components.
//! Use this crate to get registration, login, profile lookup and OAuth sign-in in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `SessionClaims`, etc.
//! - **Ports**: `UserRepository`, `PasswordHasher`, `TokenIssuer`, `OAuthUrlProvider`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, etc.
//! - **Adapters**: `Argon2PasswordHasher`, `JwtTokenIssuer`, `GoogleOAuthUrlProvider`, `HashMapUserRepository`
//! - **Service**: `AuthenticationService` - the main entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use shopifun_core::*;
}

// Re-export most commonly used core types at the root level
pub use shopifun_core::{
    Email, LoginRequest, LoginResponse, OAuthRedirect, OAuthState, Password, PasswordHash,
    ProfileRequest, RegisterRequest, RegisterResponse, Role, SessionClaims, User, UserId,
    UserProfile, ValidationError,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use shopifun_core::{
        HashingError, OAuthUrlError, OAuthUrlProvider, PasswordHasher, TokenError, TokenIssuer,
        UserRepository, UserRepositoryError,
    };
}

pub use ports::{OAuthUrlProvider, PasswordHasher, TokenIssuer, UserRepository};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use shopifun_application::use_cases::*;
}

pub use shopifun_application::{AuthenticationService, IdentityError, IdentityService};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Password hashing
    pub mod hashing {
        pub use shopifun_adapters::hashing::*;
    }

    /// Session tokens
    pub mod token {
        pub use shopifun_adapters::token::*;
    }

    /// OAuth identity providers
    pub mod oauth {
        pub use shopifun_adapters::oauth::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use shopifun_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use shopifun_adapters::config::*;
    }

    pub use shopifun_adapters::telemetry::init_tracing;
}

// Re-export commonly used adapters at root level
pub use shopifun_adapters::{
    Argon2PasswordHasher, GoogleOAuthUrlProvider, HashMapUserRepository, JwtTokenIssuer, Settings,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
