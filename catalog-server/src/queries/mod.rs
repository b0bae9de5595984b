pub mod produto_queries;
