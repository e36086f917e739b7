//! Command line interface of the `book-tracker` binary.

use crate::model::responses::Book;
use clap::{Parser, Subcommand};
use prettytable::{Table, row};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "book-tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API base URL (defaults to BOOK_TRACKER_API_URL or http://localhost:8083/api/v1).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// File holding the stored auth token.
    #[arg(long, env = "BOOK_TRACKER_TOKEN_FILE", global = true)]
    pub token_file: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Book management.
    Books {
        #[command(subcommand)]
        action: BookCommand,
    },

    /// Log in and store the returned token.
    Login {
        /// Username.
        username: String,
        /// Password (prompted if not provided).
        #[arg(short, long, env = "BOOK_TRACKER_PASSWORD")]
        password: Option<String>,
    },

    /// Register a new account and store the returned token.
    Register {
        /// Username.
        username: String,
        /// E-mail address.
        #[arg(short, long)]
        email: Option<String>,
        /// Password (prompted if not provided).
        #[arg(short, long, env = "BOOK_TRACKER_PASSWORD")]
        password: Option<String>,
    },

    /// Log out and forget the stored token.
    Logout,

    /// Show the authenticated user.
    Me,

    /// Print the active configuration.
    Config,
}

#[derive(Subcommand, Debug, Clone)]
pub enum BookCommand {
    /// List books.
    List {
        /// Only books with this status (to-read, reading, read).
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Add a book.
    Add {
        /// Title.
        title: String,
        /// Author.
        #[arg(short, long)]
        author: Option<String>,
        /// Initial status.
        #[arg(short, long, default_value = "to-read")]
        status: String,
    },

    /// Change the status of a book.
    Status {
        /// Book id.
        id: u64,
        /// New status.
        status: String,
    },

    /// Delete a book.
    Delete {
        /// Book id.
        id: u64,
    },
}

/// Renders books as a table.
pub fn books_table(books: &[Book]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["ID", "TITLE", "AUTHOR", "STATUS", "ADDED"]);
    for book in books {
        let added = book
            .date_added
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        table.add_row(row![
            book.id,
            book.title,
            book.author.as_deref().unwrap_or("-"),
            book.status,
            added
        ]);
    }
    table
}
