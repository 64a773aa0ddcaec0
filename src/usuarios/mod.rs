pub mod dto;
pub mod model;
pub mod repository;
pub mod rto;

use actix_web::{web, HttpResponse, Responder};
use dto::dispatch_dto::DispatchDto;
use model::usuario::Usuario;
use repository::usuario_repository::UsuarioRepository;
use rto::get_usuario_rto::GetUsuarioRto;

use crate::AppState;

pub async fn dispatch<UR: UsuarioRepository + 'static>(
  data: web::Data<AppState<UR>>,
  query: web::Query<DispatchDto>,
) -> impl Responder {
  match query.action.as_deref() {
    Some("get_usuario") => {
      // An absent id behaves like the empty string and degrades to the
      // empty record inside the repository.
      let id = query.id.as_deref().unwrap_or("");
      let usuario = data.usuario_repository.fetch_usuario(id).await;
      HttpResponse::Ok()
        .content_type("application/json")
        .json(GetUsuarioRto::from(usuario))
    }
    // The action enumeration is closed; everything else is reported as
    // plain text with the transport's default status.
    _ => HttpResponse::Ok()
      .content_type("text/plain; charset=utf-8")
      .body("Acción no válida"),
  }
}

// Transform Usuario domain to RTO
impl From<Usuario> for GetUsuarioRto {
  fn from(usuario: Usuario) -> Self {
    Self {
      nombre: usuario.nombre,
      email: usuario.email,
      paswd: usuario.paswd,
      rol: usuario.rol,
    }
  }
}
