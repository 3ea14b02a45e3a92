use sqlx::FromRow;

// A row of the `users` table. The `password` column holds a bcrypt hash.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub fullname: String,
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
}
