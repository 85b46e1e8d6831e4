use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookshelfError {
    #[error(transparent)]
    Validation(#[from] crate::domain::ValidationError),

    #[error(transparent)]
    Shelf(#[from] crate::shelf::storage::ShelfError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type BookshelfResult<T> = Result<T, BookshelfError>;
