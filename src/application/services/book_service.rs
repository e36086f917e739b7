use crate::application::client::ApiClient;
use crate::application::interfaces::book::BookService;
use crate::error::AppError;
use crate::model::requests::{CreateBookRequest, UpdateStatusRequest};
use crate::model::responses::{Book, BooksResponse, MessageResponse};
use async_trait::async_trait;
use tracing::{debug, info};

/// Endpoint for listing books, with the optional status filter appended verbatim
pub fn books_endpoint(status: Option<&str>) -> String {
    match status.filter(|s| !s.is_empty()) {
        Some(status) => format!("/books?status={status}"),
        None => "/books".to_string(),
    }
}

/// Endpoint for a single book
pub fn book_endpoint(id: u64) -> String {
    format!("/books/{id}")
}

/// Endpoint for a book's status
pub fn book_status_endpoint(id: u64) -> String {
    format!("/books/{id}/status")
}

#[async_trait]
impl BookService for ApiClient {
    async fn get_books(&self, status: Option<&str>) -> Result<BooksResponse, AppError> {
        let path = books_endpoint(status);
        info!("Getting books: {}", path);

        let result: BooksResponse = self.get(&path).await?;

        debug!("Books obtained: {} books", result.books.len());
        Ok(result)
    }

    async fn create_book(&self, book: &CreateBookRequest) -> Result<Book, AppError> {
        info!("Creating book: {}", book.title);

        let result: Book = self.post("/books", book).await?;

        debug!("Book created with id {}", result.id);
        Ok(result)
    }

    async fn update_book_status(&self, id: u64, status: &str) -> Result<Book, AppError> {
        let path = book_status_endpoint(id);
        info!("Updating status of book {} to {}", id, status);

        let result: Book = self.put(&path, &UpdateStatusRequest { status }).await?;

        debug!("Book {} now has status {}", result.id, result.status);
        Ok(result)
    }

    async fn delete_book(&self, id: u64) -> Result<MessageResponse, AppError> {
        let path = book_endpoint(id);
        info!("Deleting book {}", id);
        self.delete(&path).await
    }
}
