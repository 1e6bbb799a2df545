use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Схема БД: по таблице на агрегат, создаётся при старте если отсутствует
const SCHEMA: &[(&str, &str)] = &[
    (
        "a001_category",
        r#"
        CREATE TABLE IF NOT EXISTS a001_category (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            content_type TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            description TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a002_subcategory",
        r#"
        CREATE TABLE IF NOT EXISTS a002_subcategory (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            category_id TEXT NOT NULL,
            content_type TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a003_language",
        r#"
        CREATE TABLE IF NOT EXISTS a003_language (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            code TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a004_validity",
        r#"
        CREATE TABLE IF NOT EXISTS a004_validity (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            months INTEGER NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a005_course",
        r#"
        CREATE TABLE IF NOT EXISTS a005_course (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            duration_hours INTEGER NOT NULL DEFAULT 0,
            is_active INTEGER NOT NULL DEFAULT 1,
            price REAL NOT NULL DEFAULT 0,
            discount_price REAL,
            category_ids TEXT NOT NULL DEFAULT '[]',
            sub_category_ids TEXT NOT NULL DEFAULT '[]',
            language_ids TEXT NOT NULL DEFAULT '[]',
            validity_ids TEXT NOT NULL DEFAULT '[]',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a006_publication",
        r#"
        CREATE TABLE IF NOT EXISTS a006_publication (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            authors TEXT NOT NULL DEFAULT '[]',
            isbn TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            price REAL NOT NULL DEFAULT 0,
            discount_price REAL,
            category_ids TEXT NOT NULL DEFAULT '[]',
            sub_category_ids TEXT NOT NULL DEFAULT '[]',
            language_ids TEXT NOT NULL DEFAULT '[]',
            validity_ids TEXT NOT NULL DEFAULT '[]',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a007_pyq",
        r#"
        CREATE TABLE IF NOT EXISTS a007_pyq (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            exam_name TEXT NOT NULL,
            year INTEGER NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            is_active INTEGER NOT NULL DEFAULT 1,
            price REAL NOT NULL DEFAULT 0,
            discount_price REAL,
            category_ids TEXT NOT NULL DEFAULT '[]',
            sub_category_ids TEXT NOT NULL DEFAULT '[]',
            language_ids TEXT NOT NULL DEFAULT '[]',
            validity_ids TEXT NOT NULL DEFAULT '[]',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a008_test_series",
        r#"
        CREATE TABLE IF NOT EXISTS a008_test_series (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            total_tests INTEGER NOT NULL DEFAULT 0,
            is_active INTEGER NOT NULL DEFAULT 1,
            price REAL NOT NULL DEFAULT 0,
            discount_price REAL,
            category_ids TEXT NOT NULL DEFAULT '[]',
            sub_category_ids TEXT NOT NULL DEFAULT '[]',
            language_ids TEXT NOT NULL DEFAULT '[]',
            validity_ids TEXT NOT NULL DEFAULT '[]',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
];

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    tracing::info!("Database file: {}", absolute_path.display());

    let conn = Database::connect(&sqlite_url(&absolute_path.to_string_lossy())).await?;

    for (table, ddl) in SCHEMA {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create table {}: {}", table, e))?;
    }
    tracing::info!("Database schema ready ({} tables)", SCHEMA.len());

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// URL подключения SQLite; на Windows путь вида C:/... требует ведущего слэша
fn sqlite_url(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url() {
        assert_eq!(
            sqlite_url("/var/lib/app.db"),
            "sqlite:///var/lib/app.db?mode=rwc"
        );
        assert_eq!(
            sqlite_url("C:\\data\\app.db"),
            "sqlite:///C:/data/app.db?mode=rwc"
        );
    }

    #[test]
    fn test_schema_covers_every_table_once() {
        let mut names: Vec<_> = SCHEMA.iter().map(|(n, _)| *n).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 8);
        for (name, ddl) in SCHEMA {
            assert!(ddl.contains(&format!("CREATE TABLE IF NOT EXISTS {} ", name)));
        }
    }
}
