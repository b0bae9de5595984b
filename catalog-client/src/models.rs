use serde::Deserialize;

// Mirrors the service's wire shape; the HTTP contract is the only coupling
// between the two crates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Produto {
    pub id: i32,
    pub nome: String,
    pub preco: f64,
    pub descricao: String,
}
