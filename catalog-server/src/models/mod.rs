mod produto;

pub use produto::Produto;
