use animo::asistente::{self, REPLY_SAD};
use animo::auth::{self, NewUser, RegisterError};
use animo::db;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

// One connection so every query sees the same in-memory database.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db::ensure_schema(&pool).await.unwrap();
    pool
}

fn ana() -> NewUser {
    NewUser {
        nombre: "Ana".to_string(),
        telefono: "5551234".to_string(),
        direccion: "Calle 1".to_string(),
        correo: "ana@x.com".to_string(),
        usuario: "ana".to_string(),
        clave: "secreta".to_string(),
    }
}

async fn user_count(pool: &SqlitePool) -> i64 {
    let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap();
    n
}

#[tokio::test]
async fn ensure_schema_is_idempotent() {
    let pool = test_pool().await;
    db::ensure_schema(&pool).await.unwrap();
    db::ensure_schema(&pool).await.unwrap();

    let (admins,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = 'admin'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(admins, 1);
}

#[tokio::test]
async fn authenticate_matches_exact_credentials() {
    let pool = test_pool().await;

    let admin = auth::authenticate(&pool, "admin", "1234").await.unwrap();
    assert_eq!(admin.unwrap().name, "Administrador");

    assert!(auth::authenticate(&pool, "admin", "4321").await.unwrap().is_none());
    assert!(auth::authenticate(&pool, "Admin", "1234").await.unwrap().is_none());
    assert!(auth::authenticate(&pool, "nadie", "1234").await.unwrap().is_none());
}

#[tokio::test]
async fn register_then_authenticate() {
    let pool = test_pool().await;
    let before = user_count(&pool).await;

    auth::create_user(&pool, &ana()).await.unwrap();
    assert_eq!(user_count(&pool).await, before + 1);

    let user = auth::authenticate(&pool, "ana", "secreta").await.unwrap().unwrap();
    assert_eq!(user.email, "ana@x.com");
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let pool = test_pool().await;
    auth::create_user(&pool, &ana()).await.unwrap();
    let before = user_count(&pool).await;

    let mut again = ana();
    again.correo = "otra@x.com".to_string();
    let err = auth::create_user(&pool, &again).await.unwrap_err();

    assert!(matches!(err, RegisterError::Duplicate));
    assert_eq!(user_count(&pool).await, before);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let pool = test_pool().await;
    auth::create_user(&pool, &ana()).await.unwrap();
    let before = user_count(&pool).await;

    let mut again = ana();
    again.usuario = "ana2".to_string();
    let err = auth::create_user(&pool, &again).await.unwrap_err();

    assert!(matches!(err, RegisterError::Duplicate));
    assert_eq!(user_count(&pool).await, before);
}

#[tokio::test]
async fn assistant_stores_reply_a_verbatim() {
    let pool = test_pool().await;
    let user = auth::authenticate(&pool, "admin", "1234").await.unwrap().unwrap();

    let reply = asistente::append_exchange(&pool, user.id, "me siento muy triste hoy")
        .await
        .unwrap();
    assert_eq!(reply, REPLY_SAD);

    let entries = asistente::history(&pool, user.id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user_text, "me siento muy triste hoy");
    assert_eq!(entries[0].assistant_text, REPLY_SAD);
}

#[tokio::test]
async fn history_is_ordered_and_scoped_per_user() {
    let pool = test_pool().await;
    auth::create_user(&pool, &ana()).await.unwrap();
    let ana = auth::authenticate(&pool, "ana", "secreta").await.unwrap().unwrap();
    let admin = auth::authenticate(&pool, "admin", "1234").await.unwrap().unwrap();

    asistente::append_exchange(&pool, ana.id, "hola").await.unwrap();
    asistente::append_exchange(&pool, admin.id, "estoy feliz").await.unwrap();
    asistente::append_exchange(&pool, ana.id, "estoy triste").await.unwrap();
    asistente::append_exchange(&pool, ana.id, "ya me siento alegre").await.unwrap();

    let entries = asistente::history(&pool, ana.id).await.unwrap();
    let texts: Vec<&str> = entries.iter().map(|e| e.user_text.as_str()).collect();
    assert_eq!(texts, ["hola", "estoy triste", "ya me siento alegre"]);

    for pair in entries.windows(2) {
        assert!(pair[0].created_at <= pair[1].created_at);
    }
}
