use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Campos obrigatórios ausentes")]
    CamposObrigatorios,

    #[error("Valor não numérico: {0}")]
    ValorInvalido(String),

    // O Asaas respondeu com erro; guardamos o corpo original para
    // devolver no campo `details` da resposta.
    #[error("Erro do Asaas: {mensagem}")]
    Upstream {
        mensagem: String,
        detalhes: Option<Value>,
    },

    #[error("Falha de comunicação com o Asaas")]
    Http(#[from] reqwest::Error),

    // Invariante quebrada: toda mensalidade deve referenciar um aluno
    // existente. Não há defesa além de falhar a requisição.
    #[error("Mensalidade referencia aluno inexistente: {0}")]
    AlunoNaoEncontrado(i64),

    // Variante genérica para qualquer outro erro inesperado.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, mensagem) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "message": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::CamposObrigatorios => {
                (StatusCode::BAD_REQUEST, "Todos os campos são obrigatórios.")
            }
            AppError::ValorInvalido(_) => {
                (StatusCode::BAD_REQUEST, "O campo 'valor' deve ser numérico.")
            }
            // Erro vindo do provedor: ecoamos o corpo original em `details`
            // para facilitar a depuração no frontend.
            AppError::Upstream { mensagem, detalhes } => {
                tracing::error!("Erro do Asaas: {} - {:?}", mensagem, detalhes);
                let body = Json(json!({
                    "message": "Erro ao processar a requisição no Asaas.",
                    "details": detalhes,
                }));
                return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            }
            // Todos os outros erros viram 500. O `tracing` loga a mensagem
            // detalhada; o cliente só vê um texto genérico.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "message": mensagem }));
        (status, body).into_response()
    }
}
