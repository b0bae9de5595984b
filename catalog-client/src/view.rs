use crate::models::Produto;

pub fn format_preco(preco: f64) -> String {
    format!("R$ {:.2}", preco)
}

pub fn list_entry(produto: &Produto) -> String {
    format!("{} ({})", produto.nome, format_preco(produto.preco))
}

pub fn render_detail(produto: &Produto) -> String {
    format!(
        "{}\n{}\n\n{}",
        produto.nome,
        format_preco(produto.preco),
        produto.descricao
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn produto() -> Produto {
        Produto {
            id: 1,
            nome: "A".to_string(),
            preco: 9.5,
            descricao: "d".to_string(),
        }
    }

    #[test]
    fn formats_preco_with_two_decimals() {
        assert_eq!(format_preco(9.5), "R$ 9.50");
        assert_eq!(format_preco(12.0), "R$ 12.00");
        assert_eq!(format_preco(0.999), "R$ 1.00");
    }

    #[test]
    fn list_entry_shows_nome_and_formatted_preco() {
        assert_eq!(list_entry(&produto()), "A (R$ 9.50)");
    }

    #[test]
    fn detail_shows_nome_preco_and_descricao() {
        let rendered = render_detail(&produto());
        assert!(rendered.contains("A"));
        assert!(rendered.contains("R$ 9.50"));
        assert!(rendered.contains("d"));
    }
}
