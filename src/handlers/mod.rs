pub mod actors;
pub mod movies;
