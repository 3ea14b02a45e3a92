use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Assessment {
    pub assessment_name: String,
    pub skills: String,
}
