use std::{fs, path::Path};
use util::{config, paths};

mod runner;

/// `migration [fresh|clean]`
///
/// - no argument: apply every migration against `DATABASE_PATH`
/// - `fresh`: delete the database file, then apply
/// - `clean`: delete the database file only
#[tokio::main]
async fn main() {
    let db_path = config::database_path();
    let url = paths::sqlite_url(&db_path);

    match std::env::args().nth(1).as_deref() {
        Some("clean") => {
            remove_db_file(&db_path);
        }
        Some("fresh") => {
            remove_db_file(&db_path);
            create_db_dir(&db_path);
            runner::run_all_migrations(&url).await;
        }
        _ => {
            create_db_dir(&db_path);
            runner::run_all_migrations(&url).await;
        }
    }
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if !db_path.exists() {
        println!("DB file does not exist: {}", db_path.display());
        return;
    }

    match fs::remove_file(db_path) {
        Ok(()) => println!("Deleted DB: {}", db_path.display()),
        Err(e) => {
            eprintln!("Failed to delete DB {}: {e}", db_path.display());
            std::process::exit(1);
        }
    }
}

fn create_db_dir(path: &str) {
    if paths::is_connection_string(path) {
        return;
    }
    if let Err(e) = paths::ensure_parent_dir(path) {
        eprintln!("Failed to create DB directory for {path}: {e}");
        std::process::exit(1);
    }
}
