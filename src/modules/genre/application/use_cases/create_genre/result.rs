use serde::Serialize;

use crate::modules::genre::domain::{Genre, GenreId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateGenreOutput {
    pub id: GenreId,
}

impl From<&Genre> for CreateGenreOutput {
    fn from(genre: &Genre) -> Self {
        Self { id: genre.id() }
    }
}
