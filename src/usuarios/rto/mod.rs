pub mod get_usuario_rto;
