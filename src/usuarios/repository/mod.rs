pub mod usuario_repository;
