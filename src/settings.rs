use poise::serenity_prelude::RoleId;
use sqlx::{Pool, Sqlite};

pub async fn get(db: &Pool<Sqlite>, key: &str) -> anyhow::Result<Option<String>> {
    let value = sqlx::query_scalar::<_, String>("SELECT value FROM settings WHERE key = $1")
        .bind(key)
        .fetch_optional(db)
        .await?;

    Ok(value)
}

pub async fn set(db: &Pool<Sqlite>, key: &str, value: &str) -> anyhow::Result<()> {
    sqlx::query(
        "INSERT INTO settings (key, value) VALUES ($1, $2) \
         ON CONFLICT (key) DO UPDATE SET value = excluded.value",
    )
    .bind(key)
    .bind(value)
    .execute(db)
    .await?;

    Ok(())
}

/// reads the role id stored under `<name>_role`. values that don't parse as
/// a positive integer read as absent.
pub async fn get_role_id(db: &Pool<Sqlite>, name: &str) -> anyhow::Result<Option<RoleId>> {
    let key = format!("{name}_role");
    let role_id = get(db, &key)
        .await?
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|id| *id != 0)
        .map(RoleId::new);

    Ok(role_id)
}

pub async fn count_team_roles(db: &Pool<Sqlite>) -> anyhow::Result<i64> {
    let count =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM settings WHERE key LIKE '%\\_role' ESCAPE '\\'")
            .fetch_one(db)
            .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_db() -> Pool<Sqlite> {
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::migrate!("./migrations").run(&db).await.unwrap();

        db
    }

    #[tokio::test]
    async fn get_missing_key_is_none() {
        let db = test_db().await;

        assert_eq!(get(&db, "admin_role").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_roundtrips() {
        let db = test_db().await;

        set(&db, "admin_role", "123456789").await.unwrap();

        assert_eq!(
            get(&db, "admin_role").await.unwrap(),
            Some("123456789".to_string())
        );
    }

    #[tokio::test]
    async fn set_overwrites_existing_value() {
        let db = test_db().await;

        set(&db, "mod_role", "1").await.unwrap();
        set(&db, "mod_role", "2").await.unwrap();

        assert_eq!(get(&db, "mod_role").await.unwrap(), Some("2".to_string()));
    }

    #[tokio::test]
    async fn role_id_parses_stored_value() {
        let db = test_db().await;

        set(&db, "support_role", "987654321").await.unwrap();

        assert_eq!(
            get_role_id(&db, "support").await.unwrap(),
            Some(RoleId::new(987654321))
        );
    }

    #[tokio::test]
    async fn garbage_role_id_reads_as_absent() {
        let db = test_db().await;

        set(&db, "admin_role", "not a number").await.unwrap();

        assert_eq!(get_role_id(&db, "admin").await.unwrap(), None);
    }

    #[tokio::test]
    async fn zero_role_id_reads_as_absent() {
        let db = test_db().await;

        set(&db, "admin_role", "0").await.unwrap();

        assert_eq!(get_role_id(&db, "admin").await.unwrap(), None);
    }

    #[tokio::test]
    async fn team_role_count_ignores_other_keys() {
        let db = test_db().await;

        set(&db, "admin_role", "1").await.unwrap();
        set(&db, "support_role", "2").await.unwrap();
        set(&db, "greeting", "hello").await.unwrap();

        assert_eq!(count_team_roles(&db).await.unwrap(), 2);
    }
}
