// src/handlers/cobrancas.rs
//
// Endpoints que conversam com o Asaas: lista de clientes, matrícula
// (cliente + primeira cobrança), status por aluno e relatório de
// receitas.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::asaas::{AsaasCliente, AsaasLista},
    models::dashboard::{ClienteECobranca, RespostaRelatorioReceitas, RespostaStatusAlunos},
};

// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Asaas",
    responses(
        (status = 200, description = "Página de clientes, como o Asaas devolve", body = AsaasLista<AsaasCliente>),
        (status = 500, description = "Erro ao buscar clientes no Asaas")
    )
)]
pub async fn listar_clientes(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let pagina = app_state.cobranca_service.clientes().await?;
    Ok((StatusCode::OK, Json(pagina)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriarClienteCobrancaPayload {
    #[validate(length(min = 1, message = "O nome não pode ser vazio"))]
    #[schema(example = "Ana Clara Souza")]
    pub name: Option<String>,

    #[validate(length(min = 11, message = "CPF/CNPJ incompleto"))]
    #[schema(example = "24971563792")]
    pub cpf_cnpj: Option<String>,

    #[schema(example = "700.00")]
    pub value: Option<Decimal>,

    #[schema(value_type = Option<String>, format = Date, example = "2025-10-10")]
    pub due_date: Option<NaiveDate>,
}

// POST /api/create-customer-and-payment
#[utoipa::path(
    post,
    path = "/api/create-customer-and-payment",
    tag = "Asaas",
    request_body = CriarClienteCobrancaPayload,
    responses(
        (status = 201, description = "Cliente e cobrança criados", body = ClienteECobranca),
        (status = 400, description = "Campos obrigatórios ausentes ou inválidos"),
        (status = 500, description = "Erro ao processar a criação no Asaas, com `details`")
    )
)]
pub async fn criar_cliente_e_cobranca(
    State(app_state): State<AppState>,
    Json(payload): Json<CriarClienteCobrancaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // A checagem de presença vem antes de qualquer chamada externa.
    let (Some(name), Some(cpf_cnpj), Some(value), Some(due_date)) =
        (payload.name, payload.cpf_cnpj, payload.value, payload.due_date)
    else {
        return Err(AppError::CamposObrigatorios);
    };

    let criado = app_state
        .cobranca_service
        .criar_cliente_e_cobranca(&name, &cpf_cnpj, value, due_date)
        .await?;

    Ok((StatusCode::CREATED, Json(criado)))
}

// GET /api/students-status
#[utoipa::path(
    get,
    path = "/api/students-status",
    tag = "Asaas",
    responses(
        (status = 200, description = "Situação financeira de cada aluno", body = RespostaStatusAlunos),
        (status = 500, description = "Erro ao obter status dos alunos")
    )
)]
pub async fn status_dos_alunos(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let students = app_state.cobranca_service.status_dos_alunos().await?;
    Ok((StatusCode::OK, Json(RespostaStatusAlunos { students })))
}

// GET /api/revenue-report
#[utoipa::path(
    get,
    path = "/api/revenue-report",
    tag = "Asaas",
    responses(
        (status = 200, description = "Pagamentos recebidos, com nome do cliente", body = RespostaRelatorioReceitas),
        (status = 500, description = "Erro ao gerar relatório de receitas")
    )
)]
pub async fn relatorio_receitas(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state.cobranca_service.relatorio_receitas().await?;
    Ok((StatusCode::OK, Json(RespostaRelatorioReceitas { report })))
}
