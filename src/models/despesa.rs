// src/models/despesa.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uma despesa da creche. A lista é append-only: o id é atribuído pelo
/// armazenamento, sempre crescente, nunca reaproveitado.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Despesa {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "Salário - Equipe Pedagógica")]
    pub descricao: String,

    #[schema(example = "Salários")]
    pub categoria: String,

    #[schema(value_type = String, format = Date, example = "2025-09-05")]
    pub data: NaiveDate,

    #[schema(example = "6500.00")]
    pub valor: Decimal,
}
