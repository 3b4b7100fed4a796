pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use modules::{
    category::{
        CategoryRepository, CategoryRepositoryImpl, CreateCategoryHandler, DeleteCategoryHandler,
        GetCategoryHandler, InMemoryCategoryRepository, ListCategoriesHandler,
        UpdateCategoryHandler,
    },
    genre::{
        CreateGenreHandler, DeleteGenreHandler, GenreRepository, GenreRepositoryImpl,
        GetGenreHandler, InMemoryGenreRepository, ListGenresHandler, UpdateGenreHandler,
    },
};
use shared::{errors::AppResult, utils::init_logger, Database};

/// Every catalog use case, wired to one pair of storage adapters
#[derive(Clone)]
pub struct CatalogServices {
    pub create_category: Arc<CreateCategoryHandler>,
    pub update_category: Arc<UpdateCategoryHandler>,
    pub get_category: Arc<GetCategoryHandler>,
    pub list_categories: Arc<ListCategoriesHandler>,
    pub delete_category: Arc<DeleteCategoryHandler>,
    pub create_genre: Arc<CreateGenreHandler>,
    pub update_genre: Arc<UpdateGenreHandler>,
    pub get_genre: Arc<GetGenreHandler>,
    pub list_genres: Arc<ListGenresHandler>,
    pub delete_genre: Arc<DeleteGenreHandler>,
}

impl CatalogServices {
    pub fn new(
        category_repository: Arc<dyn CategoryRepository>,
        genre_repository: Arc<dyn GenreRepository>,
    ) -> Self {
        Self {
            create_category: Arc::new(CreateCategoryHandler::new(Arc::clone(
                &category_repository,
            ))),
            update_category: Arc::new(UpdateCategoryHandler::new(Arc::clone(
                &category_repository,
            ))),
            get_category: Arc::new(GetCategoryHandler::new(Arc::clone(&category_repository))),
            list_categories: Arc::new(ListCategoriesHandler::new(Arc::clone(
                &category_repository,
            ))),
            delete_category: Arc::new(DeleteCategoryHandler::new(category_repository)),
            create_genre: Arc::new(CreateGenreHandler::new(Arc::clone(&genre_repository))),
            update_genre: Arc::new(UpdateGenreHandler::new(Arc::clone(&genre_repository))),
            get_genre: Arc::new(GetGenreHandler::new(Arc::clone(&genre_repository))),
            list_genres: Arc::new(ListGenresHandler::new(Arc::clone(&genre_repository))),
            delete_genre: Arc::new(DeleteGenreHandler::new(genre_repository)),
        }
    }

    /// Wire every use case to Postgres through an existing pool
    pub fn with_database(database: Arc<Database>) -> Self {
        Self::new(
            Arc::new(CategoryRepositoryImpl::new(Arc::clone(&database))),
            Arc::new(GenreRepositoryImpl::new(database)),
        )
    }

    /// Wire every use case to process-local storage
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryCategoryRepository::new()),
            Arc::new(InMemoryGenreRepository::new()),
        )
    }
}

/// Load `.env`, start logging, connect to Postgres, apply pending
/// migrations and return the wired services.
pub fn bootstrap() -> AppResult<CatalogServices> {
    dotenvy::dotenv().ok();
    init_logger();

    let database = Arc::new(Database::new()?);
    database.run_migrations()?;

    let status = database.pool_status();
    log_info!(
        "Catalog services ready ({} of {} connections open)",
        status.connections,
        status.max_size
    );

    Ok(CatalogServices::with_database(database))
}
