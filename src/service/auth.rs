use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::auth::{LoginDto, LoginResponseDto, RegisterDto},
    service::token::TokenAuthority,
};

/// Login and registration flows.
///
/// Password hashing and verification run on the blocking pool; argon2 is far
/// too slow to run on an async worker thread.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    token_authority: &'a TokenAuthority,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, token_authority: &'a TokenAuthority) -> Self {
        Self {
            db,
            token_authority,
        }
    }

    /// Verifies credentials and issues a token.
    ///
    /// An unknown email and a wrong password produce the same error so the
    /// response does not reveal which accounts exist. Deactivated accounts
    /// are rejected after the password check, matching the original flow.
    pub async fn login(&self, dto: LoginDto) -> Result<LoginResponseDto, Error> {
        let repository = UserRepository::new(self.db);

        let Some(user) = repository.get_by_email(&dto.email).await? else {
            info!(email = %dto.email, "login rejected: unknown email");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(dto.password, user.password_hash.clone()).await? {
            info!(user_id = %user.id, "login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            info!(user_id = %user.id, "login rejected: account deactivated");
            return Err(AuthError::AccountDeactivated.into());
        }

        let token = self.token_authority.issue(&user)?;

        info!(user_id = %user.id, role = %user.role, "login succeeded");

        Ok(LoginResponseDto {
            user: user.into(),
            token,
        })
    }

    /// Creates a user account and issues a token for it.
    pub async fn register(&self, dto: RegisterDto) -> Result<LoginResponseDto, Error> {
        let repository = UserRepository::new(self.db);

        if repository.get_by_email(&dto.email).await?.is_some() {
            return Err(Error::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(dto.password).await?;

        let user = repository
            .create(
                dto.practice_id,
                dto.email,
                password_hash,
                dto.role,
                dto.first_name,
                dto.last_name,
            )
            .await?;

        let token = self.token_authority.issue(&user)?;

        info!(user_id = %user.id, role = %user.role, "user registered");

        Ok(LoginResponseDto {
            user: user.into(),
            token,
        })
    }
}

/// Argon2-hashes a password on the blocking pool.
pub async fn hash_password(password: String) -> Result<String, Error> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| Error::Internal(format!("password hashing failed: {err}")))
    })
    .await?
}

/// Checks a password against a stored hash on the blocking pool.
///
/// An unparseable stored hash counts as a failed verification rather than an
/// internal error, so a corrupt row cannot be used to probe the system.
async fn verify_password(password: String, hash: String) -> Result<bool, Error> {
    let valid = tokio::task::spawn_blocking(move || {
        let Ok(parsed) = PasswordHash::new(&hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
    .await?;

    Ok(valid)
}

#[cfg(test)]
mod tests {
    use bitewing_test_utils::prelude::*;

    use crate::{
        error::{auth::AuthError, Error},
        model::auth::{LoginDto, RegisterDto, Role},
        service::{auth::AuthService, token::TokenAuthority},
    };

    fn login_dto(email: &str, password: &str) -> LoginDto {
        LoginDto {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    /// Expect login to succeed with the right password and yield a
    /// verifiable token
    #[tokio::test]
    async fn test_login_success() -> Result<(), TestError> {
        let test = test_setup_with_all_tables!()?;
        let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
        let user =
            fixtures::insert_user(&test.db, practice.id, "ada@example.com", "staff", true).await?;
        let authority = TokenAuthority::new(TEST_JWT_SECRET);
        let service = AuthService::new(&test.db, &authority);

        let response = service
            .login(login_dto("ada@example.com", TEST_PASSWORD))
            .await
            .unwrap();

        assert_eq!(response.user.id, user.id);

        let claims = authority.verify(&response.token).unwrap();
        assert_eq!(claims.sub, user.id);

        Ok(())
    }

    /// Expect the same error for an unknown email and a wrong password
    #[tokio::test]
    async fn test_login_invalid_credentials() -> Result<(), TestError> {
        let test = test_setup_with_all_tables!()?;
        let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
        fixtures::insert_user(&test.db, practice.id, "ada@example.com", "staff", true).await?;
        let authority = TokenAuthority::new(TEST_JWT_SECRET);
        let service = AuthService::new(&test.db, &authority);

        let unknown = service
            .login(login_dto("nobody@example.com", TEST_PASSWORD))
            .await;
        let wrong = service
            .login(login_dto("ada@example.com", "wrong password"))
            .await;

        assert!(matches!(
            unknown,
            Err(Error::Auth(AuthError::InvalidCredentials))
        ));
        assert!(matches!(
            wrong,
            Err(Error::Auth(AuthError::InvalidCredentials))
        ));

        Ok(())
    }

    /// Expect a deactivated account to be rejected even with the right
    /// password
    #[tokio::test]
    async fn test_login_deactivated() -> Result<(), TestError> {
        let test = test_setup_with_all_tables!()?;
        let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
        fixtures::insert_user(&test.db, practice.id, "ada@example.com", "staff", false).await?;
        let authority = TokenAuthority::new(TEST_JWT_SECRET);
        let service = AuthService::new(&test.db, &authority);

        let result = service.login(login_dto("ada@example.com", TEST_PASSWORD)).await;

        assert!(matches!(
            result,
            Err(Error::Auth(AuthError::AccountDeactivated))
        ));

        Ok(())
    }

    /// Expect registration to create a login-capable account
    #[tokio::test]
    async fn test_register_then_login() -> Result<(), TestError> {
        let test = test_setup_with_all_tables!()?;
        let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
        let authority = TokenAuthority::new(TEST_JWT_SECRET);
        let service = AuthService::new(&test.db, &authority);

        let response = service
            .register(RegisterDto {
                email: "grace@example.com".to_string(),
                password: "hunter2hunter2".to_string(),
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                role: Role::Admin,
                practice_id: practice.id,
            })
            .await
            .unwrap();

        assert_eq!(response.user.role, "admin");

        let login = service
            .login(login_dto("grace@example.com", "hunter2hunter2"))
            .await;
        assert!(login.is_ok());

        Ok(())
    }

    /// Expect a duplicate email to be rejected as a conflict
    #[tokio::test]
    async fn test_register_duplicate_email() -> Result<(), TestError> {
        let test = test_setup_with_all_tables!()?;
        let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;
        fixtures::insert_user(&test.db, practice.id, "ada@example.com", "staff", true).await?;
        let authority = TokenAuthority::new(TEST_JWT_SECRET);
        let service = AuthService::new(&test.db, &authority);

        let result = service
            .register(RegisterDto {
                email: "ada@example.com".to_string(),
                password: "hunter2hunter2".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                role: Role::Staff,
                practice_id: practice.id,
            })
            .await;

        assert!(matches!(result, Err(Error::Conflict(_))));

        Ok(())
    }
}
