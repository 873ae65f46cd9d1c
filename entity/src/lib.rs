pub mod event;
pub mod project;
pub mod team;
pub mod team_member;
pub mod user;

/*
 Users join teams through team_member; neither side embeds the other.
 Projects may point at one team. Events only carry a project id, which is never
 checked against the projects table.
 */
