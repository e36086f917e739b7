//! book-tracker command line entry point.

use book_tracker_client::application::bootstrap::App;
use book_tracker_client::application::config::Config;
use book_tracker_client::cli::{BookCommand, Cli, Command, books_table};
use book_tracker_client::error::AppError;
use book_tracker_client::model::requests::{CreateBookRequest, Credentials, RegisterRequest};
use book_tracker_client::prelude::{AuthService, BookService};
use book_tracker_client::utils::logger::setup_logger;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logger();

    let mut config = match cli.api_url.as_deref() {
        Some(url) => Config::with_base_url(url),
        None => Config::new(),
    };
    if let Some(path) = cli.token_file.clone() {
        config = config.with_token_file(path);
    }

    let app = App::bootstrap_with(config);

    match run(&app, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e.message());
            if let Some(status) = e.status() {
                eprintln!("Status: {status}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(app: &App, command: Command) -> Result<(), AppError> {
    match command {
        Command::Books { action } => cmd_books(app, action).await,
        Command::Login { username, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt("Password: ")?,
            };
            let session = app.sign_in(&Credentials::new(&username, password)).await?;
            match session.user {
                Some(user) => println!("Logged in as {} (id: {})", user.username, user.id),
                None => println!("Logged in as {username}"),
            }
            Ok(())
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let password = match password {
                Some(p) => p,
                None => prompt("Password: ")?,
            };
            let mut request = RegisterRequest::new(&username, password);
            if let Some(email) = email {
                request = request.with_email(email);
            }
            app.sign_up(&request).await?;
            println!("Registered {username}");
            Ok(())
        }
        Command::Logout => {
            let reply = app.sign_out().await?;
            println!("{}", reply.message.unwrap_or_else(|| "Logged out".to_string()));
            Ok(())
        }
        Command::Me => {
            let user = app.client().get_current_user().await?;
            println!("{} (id: {})", user.username, user.id);
            if let Some(email) = user.email {
                println!("{email}");
            }
            Ok(())
        }
        Command::Config => {
            println!("{:?}", app.config());
            println!("signed in: {}", app.is_signed_in());
            Ok(())
        }
    }
}

async fn cmd_books(app: &App, action: BookCommand) -> Result<(), AppError> {
    let client = app.client();
    match action {
        BookCommand::List { status } => {
            let response = client.get_books(status.as_deref()).await?;
            if response.books.is_empty() {
                println!("No books found.");
            } else {
                books_table(&response.books).printstd();
                println!("{} book(s)", response.count);
            }
        }
        BookCommand::Add {
            title,
            author,
            status,
        } => {
            if title.trim().is_empty() {
                return Err(AppError::InvalidInput("title must not be empty".to_string()));
            }
            let mut request = CreateBookRequest::new(title).with_status(status.as_str());
            if let Some(author) = author {
                request = request.with_author(author);
            }
            let book = client.create_book(&request).await?;
            println!("Created book {} (id: {}, status: {})", book.title, book.id, book.status);
        }
        BookCommand::Status { id, status } => {
            let book = client.update_book_status(id, &status).await?;
            println!("Book {} is now {}", book.id, book.status);
        }
        BookCommand::Delete { id } => {
            let reply = client.delete_book(id).await?;
            println!(
                "{}",
                reply.message.unwrap_or_else(|| format!("Deleted book {id}"))
            );
        }
    }
    Ok(())
}

fn prompt(label: &str) -> Result<String, AppError> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
