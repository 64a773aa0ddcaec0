use std::sync::Arc;

use sqlx::Row;
use sqlx::{mysql::MySqlRow, MySql, Pool};
use thiserror::Error;

use crate::shared::database::Database;
use crate::usuarios::model::usuario::Usuario;

#[derive(Debug, Error)]
pub enum UsuarioRepositoryError {
  #[error("non-numeric usuario id {0:?}")]
  InvalidId(String),

  #[error("database error: {0}")]
  DatabaseError(#[from] sqlx::Error),
}

pub trait UsuarioRepository {
  async fn fetch_usuario(&self, id: &str) -> Usuario;
}

pub struct UsuarioRepositoryImpl {
  pool: Arc<Pool<MySql>>,
}

impl UsuarioRepositoryImpl {
  pub fn new(database: Arc<Database>) -> Self {
    Self {
      pool: database.pool.clone(),
    }
  }

  async fn try_fetch(
    &self,
    id: &str,
  ) -> Result<Option<Usuario>, UsuarioRepositoryError> {
    let id: i64 = id
      .parse()
      .map_err(|_| UsuarioRepositoryError::InvalidId(id.to_string()))?;
    let usuario =
      sqlx::query("SELECT nombre, email, paswd, rol FROM usuarios WHERE id = ?")
        .bind(id)
        .map(|row: MySqlRow| Usuario::from(row))
        .fetch_optional(&*self.pool)
        .await?;
    Ok(usuario)
  }
}

impl UsuarioRepository for UsuarioRepositoryImpl {
  async fn fetch_usuario(&self, id: &str) -> Usuario {
    // Failures are logged server-side only and masked by the empty
    // record; the caller never receives an error value and cannot tell
    // a lookup miss from a query failure.
    match self.try_fetch(id).await {
      Ok(Some(usuario)) => usuario,
      Ok(None) => Usuario::default(),
      Err(error) => {
        log::error!("usuario lookup failed (id={:?}): {}", id, error);
        Usuario::default()
      }
    }
  }
}

impl From<MySqlRow> for Usuario {
  fn from(row: MySqlRow) -> Self {
    Self {
      nombre: row.get("nombre"),
      email: row.get("email"),
      paswd: row.get("paswd"),
      rol: row.get("rol"),
    }
  }
}
