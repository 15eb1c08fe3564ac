pub mod auth_token;
pub mod current_user;
pub mod project_access;
pub mod project_id;

pub use auth_token::AuthToken;
pub use current_user::CurrentUser;
pub use project_access::{Editor, Owner, ProjectAccess, RoleRequirement, Viewer};
pub use project_id::ProjectId;
