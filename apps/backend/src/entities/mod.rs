pub mod articles;
pub mod projects;
pub mod skills;
pub mod users;

pub use articles::Entity as Articles;
pub use articles::Model as Article;
pub use projects::Entity as Projects;
pub use projects::Model as Project;
pub use skills::Entity as Skills;
pub use skills::Model as Skill;
pub use users::Entity as Users;
pub use users::Model as User;
