use sha2::{Digest, Sha256};
use sqlx::{AnyPool, any::AnyPoolOptions};
use crate::config::DatabaseConfig;
use crate::errors::AppResult;
use crate::models::{Assessment, User};

/// Access to the relational credential store.
///
/// Every operation checks a single connection out of the pool for one
/// statement; the checkout is released when the query future completes,
/// whether it succeeded or not.
#[derive(Clone)]
pub struct CredentialStore {
    pool: AnyPool,
    bcrypt_cost: u32,
}

impl CredentialStore {
    pub fn new(pool: AnyPool, bcrypt_cost: u32) -> Self {
        Self { pool, bcrypt_cost }
    }

    pub async fn connect(config: &DatabaseConfig, bcrypt_cost: u32) -> Result<Self, sqlx::Error> {
        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url())
            .await?;

        Ok(Self::new(pool, bcrypt_cost))
    }

    /// Inserts a new user. Constraint violations (e.g. a duplicate email)
    /// come back as `AppError::Database` untouched.
    pub async fn create_user(&self, fullname: &str, email: &str, password: &str) -> AppResult<()> {
        let password = prehash(password);
        let cost = self.bcrypt_cost;
        let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;

        sqlx::query("INSERT INTO users (fullname, email, password) VALUES (?, ?, ?)")
            .bind(fullname)
            .bind(email)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn find_user_by_credentials(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT fullname, email, password FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        let Some(user) = user else {
            return Ok(None);
        };

        let password = prehash(password);
        let hash = user.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await?;

        match verified {
            Ok(true) => Ok(Some(user)),
            Ok(false) => Ok(None),
            // Rows that do not hold a bcrypt hash can never match.
            Err(e) => {
                tracing::warn!(email = %user.email, error = %e, "Stored password is not a valid bcrypt hash");
                Ok(None)
            }
        }
    }

    // No page lists assessments yet.
    #[allow(dead_code)]
    pub async fn list_assessments(&self) -> AppResult<Vec<Assessment>> {
        let assessments = sqlx::query_as::<_, Assessment>(
            "SELECT assessment_name, skills FROM assessments",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(assessments)
    }
}

// bcrypt only reads the first 72 bytes of its input, so it is fed the
// hex SHA-256 of the password (64 bytes) instead of the password itself.
fn prehash(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}


#[cfg(test)]
mod tests {
    use super::test_support::memory_store;
    use crate::errors::AppError;

    #[tokio::test]
    async fn created_user_is_found_with_matching_password() {
        let store = memory_store().await;
        store.create_user("Alice", "alice@example.com", "pw123").await.unwrap();

        let user = store
            .find_user_by_credentials("alice@example.com", "pw123")
            .await
            .unwrap()
            .expect("user should match");

        assert_eq!(user.fullname, "Alice");
        assert_eq!(user.email, "alice@example.com");
        assert_ne!(user.password_hash, "pw123");
    }

    #[tokio::test]
    async fn wrong_password_or_unknown_email_finds_nothing() {
        let store = memory_store().await;
        store.create_user("Alice", "alice@example.com", "pw123").await.unwrap();

        assert!(store.find_user_by_credentials("alice@example.com", "wrong").await.unwrap().is_none());
        assert!(store.find_user_by_credentials("bob@example.com", "pw123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn passwords_sharing_a_long_prefix_are_distinct() {
        let store = memory_store().await;
        let prefix = "a".repeat(72);
        let password = format!("{prefix}correct");
        store.create_user("Long", "long@example.com", &password).await.unwrap();

        assert!(store.find_user_by_credentials("long@example.com", &password).await.unwrap().is_some());
        assert!(store
            .find_user_by_credentials("long@example.com", &format!("{prefix}WRONG"))
            .await
            .unwrap()
            .is_none());
        assert!(store.find_user_by_credentials("long@example.com", &prefix).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn varied_credentials_round_trip() {
        let store = memory_store().await;
        let cases = [
            ("Zoë Ñandú", "zoe@example.com", "pässwörd-日本語"),
            ("Tom & Jerry", "tom+jerry@example.com", "a&b=c+d e"),
            ("Bob", "bob@example.com", "pw123"),
            ("", "empty.name@example.com", " "),
        ];

        for (fullname, email, password) in cases {
            store.create_user(fullname, email, password).await.unwrap();

            let user = store
                .find_user_by_credentials(email, password)
                .await
                .unwrap()
                .unwrap_or_else(|| panic!("{email} should log in"));
            assert_eq!(user.fullname, fullname);

            let mut wrong = password.to_owned();
            let last = wrong.pop().unwrap();
            wrong.push(if last == 'x' { 'y' } else { 'x' });
            assert!(
                store.find_user_by_credentials(email, &wrong).await.unwrap().is_none(),
                "{email} must not log in with {wrong:?}"
            );
        }
    }

    #[tokio::test]
    async fn duplicate_email_propagates_database_error() {
        let store = memory_store().await;
        store.create_user("Alice", "alice@example.com", "pw123").await.unwrap();

        let err = store
            .create_user("Alice Again", "alice@example.com", "other")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn cleartext_rows_never_match() {
        let store = memory_store().await;
        sqlx::query("INSERT INTO users (fullname, email, password) VALUES (?, ?, ?)")
            .bind("Legacy")
            .bind("legacy@example.com")
            .bind("pw123")
            .execute(&store.pool)
            .await
            .unwrap();

        assert!(store.find_user_by_credentials("legacy@example.com", "pw123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_assessments_returns_every_row() {
        let store = memory_store().await;
        assert!(store.list_assessments().await.unwrap().is_empty());

        for (name, skills) in [("Rust Basics", "ownership,borrowing"), ("SQL", "joins,indexes")] {
            sqlx::query("INSERT INTO assessments (assessment_name, skills) VALUES (?, ?)")
                .bind(name)
                .bind(skills)
                .execute(&store.pool)
                .await
                .unwrap();
        }

        let assessments = store.list_assessments().await.unwrap();
        assert_eq!(assessments.len(), 2);
        assert!(assessments.iter().any(|a| a.assessment_name == "Rust Basics" && a.skills == "ownership,borrowing"));
        assert!(assessments.iter().any(|a| a.assessment_name == "SQL" && a.skills == "joins,indexes"));
    }
}
