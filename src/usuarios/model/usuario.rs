/// Row of the externally-owned `usuarios` table.
///
/// All four fields are always present: not-found and every internal
/// failure collapse to the all-empty record (`Usuario::default()`), so
/// callers never observe a distinct absence signal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Usuario {
  pub nombre: String,
  pub email: String,
  pub paswd: String,
  pub rol: String,
}
