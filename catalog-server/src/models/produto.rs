use serde::Serialize;

// Field names are the wire contract; serialized as-is, no renaming.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Produto {
    pub id: i32,
    pub nome: String,
    pub preco: f64,
    pub descricao: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_exact_field_set() {
        let produto = Produto {
            id: 1,
            nome: "Café".to_string(),
            preco: 9.5,
            descricao: "Torra média".to_string(),
        };

        let value = serde_json::to_value(&produto).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(value["id"], 1);
        assert_eq!(value["nome"], "Café");
        assert_eq!(value["descricao"], "Torra média");
        // preco must be a JSON number, not a string.
        assert!(value["preco"].is_f64());
    }
}
