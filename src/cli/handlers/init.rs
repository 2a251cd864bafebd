use std::fs;

use crate::cli::commands::InitArgs;
use crate::io::shelf_io;

const CONFIG_TOML_TEMPLATE: &str = r#"[shelf]
name = "{name}"

# --- Film guide ---
# A fresh guide starts with a few boilerplate entries.
# Set seed = false to start empty instead.

[films]
seed = true
"#;

/// Infer a shelf name from a directory name: replace hyphens with spaces, title-case.
fn infer_name(dir_name: &str) -> String {
    dir_name
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    upper + &chars.collect::<String>()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let shelf_dir = cwd.join("shelf");

    if shelf_dir.join("config.toml").exists() && !args.force {
        return Err("shelf already exists in ./shelf/ (use --force to reinitialize)".into());
    }

    // Check for a parent shelf and warn
    if let Some(parent) = cwd.parent()
        && let Ok(parent_root) = shelf_io::discover_shelf(parent)
    {
        eprintln!(
            "Note: parent shelf found at {}/",
            parent_root.join("shelf").display()
        );
        eprintln!("Creating new shelf in ./shelf/");
    }

    let name = args.name.unwrap_or_else(|| {
        cwd.file_name()
            .and_then(|n| n.to_str())
            .map(infer_name)
            .unwrap_or_else(|| "Untitled".to_string())
    });

    fs::create_dir_all(&shelf_dir)?;
    fs::write(
        shelf_dir.join("config.toml"),
        CONFIG_TOML_TEMPLATE.replace("{name}", &name),
    )?;

    println!("Initialized shelf: {}", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_name() {
        assert_eq!(infer_name("my-lists"), "My Lists");
        assert_eq!(infer_name("shelf"), "Shelf");
        assert_eq!(infer_name("film-night-picks"), "Film Night Picks");
    }

    #[test]
    fn test_template_parses_as_config() {
        let text = CONFIG_TOML_TEMPLATE.replace("{name}", "Test");
        let config: crate::model::config::ShelfConfig = toml::from_str(&text).unwrap();
        assert_eq!(config.shelf.name, "Test");
        assert!(config.films.seed);
    }
}
