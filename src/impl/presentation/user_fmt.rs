use crate::entities::User;

impl User {
    pub(crate) fn record_line(&self) -> String {
        format!("user: id={} email={}", self.id, self.email)
    }
}
