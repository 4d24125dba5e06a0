//src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod docs;
mod handlers;
mod models;
mod providers;
mod services;
mod store;

use crate::config::AppState;
use crate::docs::ApiDoc;

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar (por exemplo, sem a
    // ASAAS_API_KEY), a aplicação não deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    // Rotas que conversam com o Asaas
    let rotas_asaas = Router::new()
        .route("/customers", get(handlers::cobrancas::listar_clientes))
        .route(
            "/create-customer-and-payment",
            post(handlers::cobrancas::criar_cliente_e_cobranca),
        )
        .route("/students-status", get(handlers::cobrancas::status_dos_alunos))
        .route("/revenue-report", get(handlers::cobrancas::relatorio_receitas));

    // Rotas servidas pelo armazenamento em memória
    let rotas_dashboard = Router::new()
        .route("/financial-overview", get(handlers::dashboard::visao_financeira))
        .route("/students/status", get(handlers::dashboard::alunos_por_situacao))
        .route("/expenses", post(handlers::despesas::criar_despesa));

    let rotas_api = Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(rotas_asaas)
        .merge(rotas_dashboard);

    // Combina tudo no router principal. CORS liberado: o dashboard roda
    // no navegador, em outra origem.
    let app = Router::new()
        .nest("/api", rotas_api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
