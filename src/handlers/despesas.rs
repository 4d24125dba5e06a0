// src/handlers/despesas.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{common::error::AppError, config::AppState, models::despesa::Despesa};

/// O dashboard envia `valor` ora como número, ora como string numérica.
/// Aceitamos os dois; o que não parseia vira 400 em vez de virar NaN.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValorDespesa {
    Numero(f64),
    Texto(String),
}

impl ValorDespesa {
    fn como_decimal(&self) -> Result<Decimal, AppError> {
        match self {
            ValorDespesa::Numero(n) => {
                Decimal::try_from(*n).map_err(|_| AppError::ValorInvalido(n.to_string()))
            }
            ValorDespesa::Texto(t) => t
                .trim()
                .parse::<Decimal>()
                .map_err(|_| AppError::ValorInvalido(t.clone())),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CriarDespesaPayload {
    #[schema(example = "Compra de material de limpeza")]
    pub descricao: String,

    #[schema(example = "Suprimentos")]
    pub categoria: String,

    #[schema(value_type = String, example = "350.00")]
    pub valor: ValorDespesa,

    /// Opcional; sem ela a despesa recebe a data de hoje.
    #[schema(value_type = Option<String>, format = Date, example = "2025-09-12")]
    pub data: Option<NaiveDate>,
}

// POST /api/expenses
#[utoipa::path(
    post,
    path = "/api/expenses",
    tag = "Despesas",
    request_body = CriarDespesaPayload,
    responses(
        (status = 201, description = "Despesa criada", body = Despesa),
        (status = 400, description = "Valor não numérico")
    )
)]
pub async fn criar_despesa(
    State(app_state): State<AppState>,
    Json(payload): Json<CriarDespesaPayload>,
) -> Result<impl IntoResponse, AppError> {
    let valor = payload.valor.como_decimal()?;

    let despesa = app_state.financeiro_service.criar_despesa(
        payload.descricao,
        payload.categoria,
        valor,
        payload.data,
    );

    Ok((StatusCode::CREATED, Json(despesa)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valor_aceita_numero_e_string_numerica() {
        let numero = ValorDespesa::Numero(50.0);
        assert_eq!(numero.como_decimal().unwrap(), Decimal::try_from(50.0).unwrap());

        let texto = ValorDespesa::Texto("50".to_string());
        assert_eq!(texto.como_decimal().unwrap(), Decimal::from(50));
    }

    #[test]
    fn valor_nao_numerico_e_rejeitado() {
        let invalido = ValorDespesa::Texto("cinquenta".to_string());
        assert!(matches!(
            invalido.como_decimal(),
            Err(AppError::ValorInvalido(_))
        ));
    }

    #[test]
    fn payload_desserializa_valor_string() {
        let payload: CriarDespesaPayload = serde_json::from_value(serde_json::json!({
            "descricao": "X",
            "categoria": "Y",
            "valor": "50"
        }))
        .unwrap();
        assert_eq!(payload.valor.como_decimal().unwrap(), Decimal::from(50));
        assert!(payload.data.is_none());
    }
}
