mod articles;
mod health;
mod projects;
mod skills;
mod users;
