use clap::{Args, Parser, Subcommand};

use crate::model::ItemId;

#[derive(Parser)]
#[command(name = "sf", about = concat!("[*] shelf v", env!("CARGO_PKG_VERSION"), " - your lists are plain JSON"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different shelf directory
    #[arg(short = 'C', long = "shelf-dir", global = true)]
    pub shelf_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new shelf in the current directory
    Init(InitArgs),
    /// Work with the todo list
    Todo(TodoCmd),
    /// Work with the film guide
    Film(FilmCmd),
}

// ---------------------------------------------------------------------------
// Init args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct InitArgs {
    /// Shelf name (default: inferred from directory name)
    #[arg(long)]
    pub name: Option<String>,
    /// Reinitialize even if shelf/ already exists
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Todo commands
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct TodoCmd {
    #[command(subcommand)]
    pub action: TodoAction,
}

#[derive(Subcommand)]
pub enum TodoAction {
    /// List todos
    List,
    /// Add a todo
    Add(TodoAddArgs),
    /// Toggle a todo between done and not done
    Done(IdArg),
    /// Replace a todo's text
    Edit(TodoEditArgs),
    /// Delete a todo
    Rm(IdArg),
}

#[derive(Args)]
pub struct TodoAddArgs {
    /// Todo text
    pub text: String,
}

#[derive(Args)]
pub struct TodoEditArgs {
    /// Todo id
    pub id: ItemId,
    /// New text
    pub text: String,
}

// ---------------------------------------------------------------------------
// Film commands
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct FilmCmd {
    #[command(subcommand)]
    pub action: FilmAction,
}

#[derive(Subcommand)]
pub enum FilmAction {
    /// List films
    List,
    /// Add a film
    Add(FilmAddArgs),
    /// Replace a film's title and description
    Edit(FilmEditArgs),
    /// Delete a film
    Rm(IdArg),
}

#[derive(Args)]
pub struct FilmAddArgs {
    /// Film title
    pub title: String,
    /// Short description
    pub description: String,
}

#[derive(Args)]
pub struct FilmEditArgs {
    /// Film id
    pub id: ItemId,
    /// New title
    pub title: String,
    /// New description
    pub description: String,
}

// ---------------------------------------------------------------------------
// Shared args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct IdArg {
    /// Item id
    pub id: ItemId,
}
