use std::process;
use std::sync::Arc;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySql, Pool};

use crate::shared::config::Config;

pub struct Database {
  pub pool: Arc<Pool<MySql>>,
}

impl Database {
  /// Connects once at startup. A connection failure is fatal: the error
  /// is logged, a generic apology is written to stdout and the process
  /// terminates without serving any request.
  pub async fn new(config: &Config) -> Self {
    // One persistent connection for the process lifetime, no pooling.
    let pool = MySqlPoolOptions::new()
      .max_connections(1)
      .connect(&config.database_url())
      .await;

    match pool {
      Ok(pool) => Self {
        pool: Arc::new(pool),
      },
      Err(error) => {
        log::error!("failed to connect to the database: {}", error);
        println!("Lo sentimos, se ha producido un error en el servidor.");
        process::exit(1);
      }
    }
  }
}
