pub mod actor;
pub mod movie;

pub use actor::{Actor, CreateActorRequest, UpdateActorRequest};
pub use movie::{CreateMovieRequest, Movie, UpdateMovieRequest};
