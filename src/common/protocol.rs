//! Wire types for the `/processar` endpoint. Field names are fixed by the
//! server contract and must not be renamed.

use serde::{Deserialize, Serialize};

/// Successful classification returned by the server (2xx body).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub categoria_principal: String,
    pub sub_categoria: String,
    pub resposta_sugerida: String,
}

/// Error body returned by the server on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub erro: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_classification_body() {
        let body = r#"{
            "categoria_principal": "Produtivo",
            "sub_categoria": "Suporte",
            "resposta_sugerida": "Obrigado pelo contato, vamos verificar."
        }"#;
        let parsed: Classification = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.categoria_principal, "Produtivo");
        assert_eq!(parsed.sub_categoria, "Suporte");
        assert_eq!(parsed.resposta_sugerida, "Obrigado pelo contato, vamos verificar.");
    }

    #[test]
    fn parses_error_body() {
        let parsed: ApiError =
            serde_json::from_str(r#"{"erro": "Nenhum texto ou arquivo válido foi enviado"}"#)
                .unwrap();
        assert_eq!(parsed.erro, "Nenhum texto ou arquivo válido foi enviado");
    }

    #[test]
    fn classification_requires_all_fields() {
        let body = r#"{"categoria_principal": "Produtivo"}"#;
        assert!(serde_json::from_str::<Classification>(body).is_err());
    }
}
