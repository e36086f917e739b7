use crate::error::AppError;
use crate::model::requests::CreateBookRequest;
use crate::model::responses::{Book, BooksResponse, MessageResponse};
use async_trait::async_trait;

/// Interface for the book endpoints
#[async_trait]
pub trait BookService: Send + Sync {
    /// Lists books, optionally filtered by status
    ///
    /// `None` or an empty status requests `/books` with no query string.
    async fn get_books(&self, status: Option<&str>) -> Result<BooksResponse, AppError>;

    /// Creates a book
    async fn create_book(&self, book: &CreateBookRequest) -> Result<Book, AppError>;

    /// Changes the reading status of a book
    ///
    /// # Arguments
    /// * `id` - Book identifier
    /// * `status` - New status, sent as `{"status": ...}`
    async fn update_book_status(&self, id: u64, status: &str) -> Result<Book, AppError>;

    /// Deletes a book
    async fn delete_book(&self, id: u64) -> Result<MessageResponse, AppError>;
}
