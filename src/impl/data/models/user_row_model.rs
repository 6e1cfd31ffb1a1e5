use crate::entities::{User, UserId};

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRowModel {
    pub(crate) id: String,
    pub(crate) email: String,
}

impl From<UserRowModel> for User {
    fn from(row: UserRowModel) -> Self {
        User {
            id: UserId(row.id),
            email: row.email,
        }
    }
}
