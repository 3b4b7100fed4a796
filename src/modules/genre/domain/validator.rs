use super::entities::genre::Genre;
use crate::shared::errors::DomainError;
use crate::shared::validation::{check_name_length, ValidationHandler, Validator};

const NAME_MIN_LENGTH: usize = 1;
const NAME_MAX_LENGTH: usize = 255;

/// Field rules for [`Genre`]
pub struct GenreValidator<'a> {
    genre: &'a Genre,
    handler: &'a mut dyn ValidationHandler,
}

impl<'a> GenreValidator<'a> {
    pub fn new(genre: &'a Genre, handler: &'a mut dyn ValidationHandler) -> Self {
        Self { genre, handler }
    }
}

impl Validator for GenreValidator<'_> {
    fn validate(&mut self) -> Result<(), DomainError> {
        check_name_length(
            self.handler,
            self.genre.name(),
            NAME_MIN_LENGTH,
            NAME_MAX_LENGTH,
        )
    }
}
