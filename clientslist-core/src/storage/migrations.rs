use rusqlite::Connection;

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS contact (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            lastname TEXT NOT NULL,
            email TEXT NOT NULL,
            number TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}
