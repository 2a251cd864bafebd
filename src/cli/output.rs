use serde::Serialize;

use crate::model::film::Film;
use crate::model::todo::Todo;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoJson {
    pub id: i64,
    pub text: String,
    pub done: bool,
}

#[derive(Serialize)]
pub struct TodoListJson {
    pub shelf: String,
    pub todos: Vec<TodoJson>,
}

#[derive(Serialize)]
pub struct FilmJson {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub best: bool,
}

#[derive(Serialize)]
pub struct FilmListJson {
    pub shelf: String,
    pub films: Vec<FilmJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn todo_to_json(todo: &Todo) -> TodoJson {
    TodoJson {
        id: todo.id,
        text: todo.text.clone(),
        done: todo.done,
    }
}

pub fn film_to_json(film: &Film) -> FilmJson {
    FilmJson {
        id: film.id,
        title: film.title.clone(),
        description: film.description.clone(),
        best: film.is_best,
    }
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

/// One todo as a checkbox line: `[x] <id> <text>`
pub fn todo_line(todo: &Todo) -> String {
    let mark = if todo.done { 'x' } else { ' ' };
    format!("[{}] {} {}", mark, todo.id, todo.text)
}

/// One film as a line: `* <id> <title>: <description>` (`*` marks the best)
pub fn film_line(film: &Film) -> String {
    let mark = if film.is_best { '*' } else { ' ' };
    format!("{} {} {}: {}", mark, film.id, film.title, film.description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::ListItem;

    #[test]
    fn todo_line_marks_done() {
        let todo = Todo::new(7, "Buy milk").unwrap();
        assert_eq!(todo_line(&todo), "[ ] 7 Buy milk");

        let done = Todo { done: true, ..todo };
        assert_eq!(todo_line(&done), "[x] 7 Buy milk");
    }

    #[test]
    fn film_line_marks_best() {
        let seed = Film::seed();
        assert!(film_line(&seed[0]).starts_with("* 1 Seven Samurai:"));
        assert!(film_line(&seed[2]).starts_with("  3 Rashomon:"));
    }
}
