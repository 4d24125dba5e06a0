// src/models/asaas.rs
//
// Tipos de fio da API v3 do Asaas. Só mapeamos os campos que o dashboard
// consome; o restante do payload é descartado na desserialização.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AsaasStatus {
    Pending,
    Received,
    Confirmed,
    Overdue,
    Refunded,
    // A API tem mais estados (RECEIVED_IN_CASH, DUNNING_*, etc.); nenhum deles
    // participa das regras do dashboard.
    #[serde(other)]
    Outro,
}

// --- Structs ---

/// Uma página de resultados do Asaas. Sem paginação além do `limit=100`
/// que enviamos na query; limitação de escala conhecida.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AsaasLista<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,

    pub data: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AsaasCliente {
    #[schema(example = "cus_000005113026")]
    pub id: String,

    #[schema(example = "Ana Clara Souza")]
    pub name: String,

    #[schema(example = "24971563792")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf_cnpj: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AsaasCobranca {
    #[schema(example = "pay_080225913252")]
    pub id: String,

    /// Id do cliente dono da cobrança.
    #[schema(example = "cus_000005113026")]
    pub customer: String,

    #[schema(example = "700.00")]
    pub value: Decimal,

    #[schema(value_type = String, format = Date, example = "2025-09-10")]
    pub due_date: NaiveDate,

    pub status: AsaasStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[schema(value_type = Option<String>, format = Date, example = "2025-09-08")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_url: Option<String>,
}

// --- Payloads enviados ao Asaas ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NovoCliente {
    pub name: String,
    pub cpf_cnpj: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NovaCobranca {
    pub customer: String,
    /// Sempre BOLETO por enquanto (poderia ser PIX ou CREDIT_CARD).
    pub billing_type: String,
    pub value: Decimal,
    pub due_date: NaiveDate,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desserializa_pagina_de_cobrancas_do_asaas() {
        let payload = serde_json::json!({
            "object": "list",
            "hasMore": false,
            "totalCount": 1,
            "limit": 100,
            "offset": 0,
            "data": [{
                "object": "payment",
                "id": "pay_080225913252",
                "customer": "cus_000005113026",
                "value": 700.0,
                "netValue": 693.05,
                "dueDate": "2025-09-10",
                "status": "RECEIVED",
                "billingType": "BOLETO",
                "paymentDate": "2025-09-08",
                "invoiceUrl": "https://sandbox.asaas.com/i/080225913252"
            }]
        });

        let pagina: AsaasLista<AsaasCobranca> = serde_json::from_value(payload).unwrap();
        assert_eq!(pagina.data.len(), 1);
        let cobranca = &pagina.data[0];
        assert_eq!(cobranca.status, AsaasStatus::Received);
        assert_eq!(cobranca.customer, "cus_000005113026");
        assert_eq!(cobranca.due_date, NaiveDate::from_ymd_opt(2025, 9, 10).unwrap());
    }

    #[test]
    fn status_desconhecido_vira_outro() {
        let status: AsaasStatus = serde_json::from_str("\"RECEIVED_IN_CASH\"").unwrap();
        assert_eq!(status, AsaasStatus::Outro);
    }
}
