// src/models/dashboard.rs
//
// Tipos derivados que alimentam o dashboard. Nada aqui é persistido:
// tudo é recalculado a cada requisição a partir das mensalidades/despesas.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

use crate::models::aluno::{Aluno, Mensalidade};
use crate::models::asaas::{AsaasCliente, AsaasCobranca};
use crate::models::despesa::Despesa;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SituacaoAluno {
    Adimplente,
    Inadimplente,
}

/// Próximo vencimento de um aluno: uma data concreta ou o sentinela
/// "Sem cobranças" quando o aluno não tem nenhuma cobrança gerada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximoVencimento {
    Data(NaiveDate),
    SemCobrancas,
}

// No JSON o campo é sempre uma string: "2025-09-10" ou "Sem cobranças".
impl Serialize for ProximoVencimento {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ProximoVencimento::Data(data) => data.serialize(serializer),
            ProximoVencimento::SemCobrancas => serializer.serialize_str("Sem cobranças"),
        }
    }
}

// --- KPIs e visão geral (armazenamento local) ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    #[schema(example = "3650.00")]
    pub faturamento_previsto: Decimal,

    #[schema(example = "2100.00")]
    pub valor_recebido: Decimal,

    #[schema(example = "6850.00")]
    pub total_despesas: Decimal,

    #[schema(example = "-4750.00")]
    pub saldo: Decimal,
}

/// Mensalidade enriquecida com os dados do aluno para o relatório.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MensalidadeDetalhada {
    #[serde(flatten)]
    pub mensalidade: Mensalidade,

    #[schema(example = "Ana Clara Souza")]
    pub nome_aluno: String,

    #[schema(example = "Marcos Souza")]
    pub nome_responsavel: String,

    #[schema(example = "https://sandbox.asaas.com/pay/pay_111")]
    pub link_pagamento: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisaoFinanceira {
    pub kpis: Kpis,
    pub relatorio_mensalidades: Vec<MensalidadeDetalhada>,
    pub relatorio_despesas: Vec<Despesa>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AlunosPorSituacao {
    pub adimplentes: Vec<Aluno>,
    pub inadimplentes: Vec<Aluno>,
}

// --- Status por aluno (dados do Asaas) ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusAluno {
    #[schema(example = "cus_000005113026")]
    pub id: String,

    #[schema(example = "Ana Clara Souza")]
    pub name: String,

    pub status: SituacaoAluno,

    #[schema(value_type = String, example = "2025-09-10")]
    pub next_due_date: ProximoVencimento,

    #[schema(example = "700.00")]
    pub monthly_fee: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RespostaStatusAlunos {
    pub students: Vec<StatusAluno>,
}

// --- Relatório de receitas (dados do Asaas) ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinhaRelatorioReceitas {
    #[schema(example = "pay_080225913252")]
    pub id: String,

    #[schema(example = "Ana Clara Souza")]
    pub customer_name: String,

    #[schema(example = "700.00")]
    pub value: Decimal,

    #[schema(value_type = Option<String>, format = Date, example = "2025-09-08")]
    pub payment_date: Option<NaiveDate>,

    pub invoice_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RespostaRelatorioReceitas {
    pub report: Vec<LinhaRelatorioReceitas>,
}

/// Resposta do fluxo de criação cliente + primeira cobrança.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClienteECobranca {
    pub customer: AsaasCliente,
    pub payment: AsaasCobranca,
}
