// src/handlers/dashboard.rs
//
// Endpoints servidos pelo armazenamento em memória (modo demonstração).

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    models::dashboard::{AlunosPorSituacao, VisaoFinanceira},
};

// GET /api/financial-overview
#[utoipa::path(
    get,
    path = "/api/financial-overview",
    tag = "Dashboard",
    responses(
        (status = 200, description = "KPIs e relatórios de mensalidades e despesas", body = VisaoFinanceira),
        (status = 500, description = "Mensalidade referenciando aluno inexistente")
    )
)]
pub async fn visao_financeira(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let visao = app_state.financeiro_service.visao_geral()?;
    Ok((StatusCode::OK, Json(visao)))
}

// GET /api/students/status
#[utoipa::path(
    get,
    path = "/api/students/status",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Alunos particionados em adimplentes e inadimplentes", body = AlunosPorSituacao)
    )
)]
pub async fn alunos_por_situacao(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let particao = app_state.financeiro_service.alunos_por_situacao();
    Ok((StatusCode::OK, Json(particao)))
}
