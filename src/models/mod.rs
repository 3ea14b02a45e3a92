mod user;
mod forms;
mod assessment;

pub use user::User;
pub use forms::{LoginForm, SignupForm};
pub use assessment::Assessment;
