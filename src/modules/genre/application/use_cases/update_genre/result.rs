use serde::Serialize;

use crate::modules::genre::domain::{Genre, GenreId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateGenreOutput {
    pub id: GenreId,
}

impl From<&Genre> for UpdateGenreOutput {
    fn from(genre: &Genre) -> Self {
        Self { id: genre.id() }
    }
}
