pub mod project_users;
pub mod projects;

pub use project_users::Entity as ProjectUsers;
pub use project_users::MemberRole;
pub use project_users::Model as ProjectUser;
pub use projects::Entity as Projects;
pub use projects::Model as Project;
