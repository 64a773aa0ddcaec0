mod shared;
mod usuarios;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use shared::config::Config;
use shared::database::Database;
use usuarios::dispatch;
use usuarios::repository::usuario_repository::{
  UsuarioRepository, UsuarioRepositoryImpl,
};

// This struct represents state
struct AppState<UR: UsuarioRepository> {
  usuario_repository: UR,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  env_logger::init();

  let server_address = "127.0.0.1:3001";
  println!("Listening on http://{}", server_address);

  let database = Database::new(&Config::default()).await;
  let database = Arc::new(database);

  HttpServer::new(move || {
    App::new().configure(|cfg| {
      let usuario_repository = UsuarioRepositoryImpl::new(database.clone());
      config(cfg, usuario_repository)
    })
  })
  .bind(server_address)?
  .run()
  .await
}

// Function to initialize the App
fn config<UR: UsuarioRepository + 'static>(
  config: &mut web::ServiceConfig,
  usuario_repository: UR,
) {
  config
    .app_data(web::Data::new(AppState { usuario_repository }))
    .route("/api", web::get().to(dispatch::<UR>));
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{test, App};
  use usuarios::model::usuario::Usuario;
  use usuarios::repository::usuario_repository::tests::InMemoryUsuarioRepository;
  use usuarios::rto::get_usuario_rto::GetUsuarioRto;

  fn seeded_repository() -> InMemoryUsuarioRepository {
    InMemoryUsuarioRepository::with(vec![(
      1,
      Usuario {
        nombre: "Ana".to_string(),
        email: "ana@x.com".to_string(),
        paswd: "hash1".to_string(),
        rol: "admin".to_string(),
      },
    )])
  }

  #[actix_rt::test]
  async fn test_get_usuario_in_memory() {
    // Initialize the service in-memory
    let app = test::init_service(App::new().configure(|cfg| {
      config(cfg, seeded_repository())
    }))
    .await;

    let req = test::TestRequest::get()
      .uri("/api?action=get_usuario&id=1")
      .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success(), "Get usuario failed");

    // Use the Actix Web test helper to read the response body
    let body_bytes = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body_bytes)
      .expect("Response body should be valid UTF-8");

    // Deserialize the JSON response into your struct
    let rto: GetUsuarioRto =
      serde_json::from_str(body_str).expect("Failed to parse response JSON");
    assert_eq!(rto.nombre, "Ana");
    assert_eq!(rto.email, "ana@x.com");
    assert_eq!(rto.paswd, "hash1");
    assert_eq!(rto.rol, "admin");
  }

  #[actix_rt::test]
  async fn test_unknown_action_in_memory() {
    let app = test::init_service(App::new().configure(|cfg| {
      config(cfg, seeded_repository())
    }))
    .await;

    let req = test::TestRequest::get()
      .uri("/api?action=list_usuarios&id=1")
      .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body_bytes = test::read_body(resp).await;
    assert_eq!(body_bytes, "Acción no válida".as_bytes());
  }

  #[actix_rt::test]
  async fn test_missing_action_in_memory() {
    let app = test::init_service(App::new().configure(|cfg| {
      config(cfg, seeded_repository())
    }))
    .await;

    let req = test::TestRequest::get().uri("/api").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body_bytes = test::read_body(resp).await;
    assert_eq!(body_bytes, "Acción no válida".as_bytes());
  }
}
