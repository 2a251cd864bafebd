mod init;
pub use init::cmd_init;

use std::path::PathBuf;
use std::sync::Mutex;

/// Global override for the shelf directory (set by -C flag)
static SHELF_DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::shelf_io::{self, Shelf, ShelfError};
use crate::model::film::{Film, FilmFields};
use crate::model::todo::Todo;
use crate::store::session;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    // Store -C override for load_shelf_cwd()
    if let Some(ref dir) = cli.shelf_dir {
        let abs = std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?;
        SHELF_DIR_OVERRIDE.lock().unwrap().replace(abs);
    }

    match cli.command {
        // Init does not require an existing shelf
        Commands::Init(args) => cmd_init(args),

        Commands::Todo(cmd) => match cmd.action {
            TodoAction::List => cmd_todo_list(json),
            TodoAction::Add(args) => cmd_todo_add(args, json),
            TodoAction::Done(args) => cmd_todo_done(args, json),
            TodoAction::Edit(args) => cmd_todo_edit(args, json),
            TodoAction::Rm(args) => cmd_todo_rm(args, json),
        },

        Commands::Film(cmd) => match cmd.action {
            FilmAction::List => cmd_film_list(json),
            FilmAction::Add(args) => cmd_film_add(args, json),
            FilmAction::Edit(args) => cmd_film_edit(args, json),
            FilmAction::Rm(args) => cmd_film_rm(args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_shelf_cwd() -> Result<Shelf, ShelfError> {
    let start = match SHELF_DIR_OVERRIDE.lock().unwrap().as_ref() {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(ShelfError::Io)?,
    };
    let root = shelf_io::discover_shelf(&start)?;
    shelf_io::load_shelf(&root)
}

fn print_todos(shelf: &Shelf, todos: &[Todo], json: bool) -> serde_json::Result<()> {
    if json {
        let out = TodoListJson {
            shelf: shelf.config.shelf.name.clone(),
            todos: todos.iter().map(todo_to_json).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for todo in todos {
            println!("{}", todo_line(todo));
        }
    }
    Ok(())
}

fn print_films(shelf: &Shelf, films: &[Film], json: bool) -> serde_json::Result<()> {
    if json {
        let out = FilmListJson {
            shelf: shelf.config.shelf.name.clone(),
            films: films.iter().map(film_to_json).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for film in films {
            println!("{}", film_line(film));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Todo commands
// ---------------------------------------------------------------------------

fn cmd_todo_list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let shelf = load_shelf_cwd()?;
    let session = session::open_todos(&shelf);
    print_todos(&shelf, session.items(), json)?;
    Ok(())
}

fn cmd_todo_add(args: TodoAddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let shelf = load_shelf_cwd()?;
    let mut session = session::open_todos(&shelf);

    let before = session.items().len();
    session.add(&args.text);
    if session.items().len() == before {
        // Blank input: rejected as a quiet no-op
        return Ok(());
    }

    if let Some(added) = session.items().last() {
        if json {
            println!("{}", serde_json::to_string_pretty(&todo_to_json(added))?);
        } else {
            println!("added {}", todo_line(added));
        }
    }
    Ok(())
}

fn cmd_todo_done(args: IdArg, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let shelf = load_shelf_cwd()?;
    let mut session = session::open_todos(&shelf);
    session.toggle(args.id);

    if let Some(todo) = session.get(args.id) {
        if json {
            println!("{}", serde_json::to_string_pretty(&todo_to_json(todo))?);
        } else {
            println!("{}", todo_line(todo));
        }
    }
    Ok(())
}

fn cmd_todo_edit(args: TodoEditArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let shelf = load_shelf_cwd()?;
    let mut session = session::open_todos(&shelf);

    session.begin_edit(args.id);
    session.set_draft(args.text);
    session.commit_edit();

    if let Some(todo) = session.get(args.id) {
        if json {
            println!("{}", serde_json::to_string_pretty(&todo_to_json(todo))?);
        } else {
            println!("{}", todo_line(todo));
        }
    }
    Ok(())
}

fn cmd_todo_rm(args: IdArg, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let shelf = load_shelf_cwd()?;
    let mut session = session::open_todos(&shelf);

    let existed = session.get(args.id).is_some();
    session.delete(args.id);

    if json {
        print_todos(&shelf, session.items(), true)?;
    } else if existed {
        println!("removed {}", args.id);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Film commands
// ---------------------------------------------------------------------------

fn cmd_film_list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let shelf = load_shelf_cwd()?;
    let session = session::open_films(&shelf);
    print_films(&shelf, session.items(), json)?;
    Ok(())
}

fn cmd_film_add(args: FilmAddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let shelf = load_shelf_cwd()?;
    let mut session = session::open_films(&shelf);

    let before = session.items().len();
    session.add(&FilmFields::new(args.title, args.description));
    if session.items().len() == before {
        return Ok(());
    }

    if let Some(added) = session.items().last() {
        if json {
            println!("{}", serde_json::to_string_pretty(&film_to_json(added))?);
        } else {
            println!("added {}", film_line(added));
        }
    }
    Ok(())
}

fn cmd_film_edit(args: FilmEditArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let shelf = load_shelf_cwd()?;
    let mut session = session::open_films(&shelf);

    session.begin_edit(args.id);
    session.set_draft(FilmFields::new(args.title, args.description));
    session.commit_edit();

    if let Some(film) = session.get(args.id) {
        if json {
            println!("{}", serde_json::to_string_pretty(&film_to_json(film))?);
        } else {
            println!("{}", film_line(film));
        }
    }
    Ok(())
}

fn cmd_film_rm(args: IdArg, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let shelf = load_shelf_cwd()?;
    let mut session = session::open_films(&shelf);

    let existed = session.get(args.id).is_some();
    session.delete(args.id);

    if json {
        print_films(&shelf, session.items(), true)?;
    } else if existed {
        println!("removed {}", args.id);
    }
    Ok(())
}
