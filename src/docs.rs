// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Asaas ---
        handlers::cobrancas::listar_clientes,
        handlers::cobrancas::criar_cliente_e_cobranca,
        handlers::cobrancas::status_dos_alunos,
        handlers::cobrancas::relatorio_receitas,

        // --- Dashboard ---
        handlers::dashboard::visao_financeira,
        handlers::dashboard::alunos_por_situacao,

        // --- Despesas ---
        handlers::despesas::criar_despesa,
    ),
    components(
        schemas(
            // --- Domínio ---
            models::aluno::Aluno,
            models::aluno::Mensalidade,
            models::aluno::StatusMensalidade,
            models::despesa::Despesa,

            // --- Asaas ---
            models::asaas::AsaasStatus,
            models::asaas::AsaasLista<models::asaas::AsaasCliente>,
            models::asaas::AsaasCliente,
            models::asaas::AsaasCobranca,
            models::asaas::NovoCliente,
            models::asaas::NovaCobranca,

            // --- Dashboard ---
            models::dashboard::SituacaoAluno,
            models::dashboard::Kpis,
            models::dashboard::MensalidadeDetalhada,
            models::dashboard::VisaoFinanceira,
            models::dashboard::AlunosPorSituacao,
            models::dashboard::StatusAluno,
            models::dashboard::RespostaStatusAlunos,
            models::dashboard::LinhaRelatorioReceitas,
            models::dashboard::RespostaRelatorioReceitas,
            models::dashboard::ClienteECobranca,

            // --- Payloads ---
            handlers::cobrancas::CriarClienteCobrancaPayload,
            handlers::despesas::CriarDespesaPayload,
        )
    ),
    tags(
        (name = "Asaas", description = "Clientes e cobranças no provedor de pagamentos"),
        (name = "Dashboard", description = "Indicadores financeiros da creche"),
        (name = "Despesas", description = "Despesas da creche (append-only)")
    )
)]
pub struct ApiDoc;
