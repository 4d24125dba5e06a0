// src/models/aluno.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Enums ---

/// Status de uma mensalidade no armazenamento local.
/// Os valores seguem o vocabulário do dashboard ("PAGO", "VENCIDO", "PENDENTE"),
/// não o da API do Asaas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusMensalidade {
    Pago,
    Vencido,
    Pendente,
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Aluno {
    #[schema(example = 101)]
    pub id: i64,

    #[schema(example = "Ana Clara Souza")]
    pub nome: String,

    #[schema(example = "Marcos Souza")]
    pub responsavel: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mensalidade {
    #[schema(example = "pay_111")]
    pub id_asaas: String,

    #[schema(example = 101)]
    pub aluno_id: i64,

    #[schema(example = "700.00")]
    pub valor: Decimal,

    #[schema(value_type = String, format = Date, example = "2025-09-10")]
    pub vencimento: NaiveDate,

    pub status: StatusMensalidade,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Taxa de Matrícula")]
    pub descricao: Option<String>,
}
