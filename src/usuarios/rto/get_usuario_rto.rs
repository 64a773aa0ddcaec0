use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct GetUsuarioRto {
  pub nombre: String,
  pub email: String,
  pub paswd: String,
  pub rol: String,
}
