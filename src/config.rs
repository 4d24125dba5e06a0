// src/config.rs

use std::env;
use std::sync::Arc;

use crate::providers::asaas::AsaasClient;
use crate::services::{CobrancaService, FinanceiroService};
use crate::store::MemoryStore;

const ASAAS_BASE_URL_PADRAO: &str = "https://api.asaas.com/v3";

#[derive(Clone)]
pub struct AppState {
    pub cobranca_service: CobrancaService,
    pub financeiro_service: FinanceiroService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // Sem a chave do Asaas o processo não deve subir.
        let api_key = env::var("ASAAS_API_KEY")
            .expect("A variável de ambiente ASAAS_API_KEY não está definida");
        let base_url =
            env::var("ASAAS_BASE_URL").unwrap_or_else(|_| ASAAS_BASE_URL_PADRAO.to_string());

        let asaas = Arc::new(AsaasClient::new(base_url, &api_key)?);
        tracing::info!("✅ Cliente do Asaas configurado com sucesso!");

        // O modo demonstração do dashboard roda sobre dados em memória.
        let store = Arc::new(MemoryStore::com_dados_exemplo());

        // --- Monta o gráfico de dependências ---
        let cobranca_service = CobrancaService::new(asaas);
        let financeiro_service = FinanceiroService::new(store);

        Ok(Self {
            cobranca_service,
            financeiro_service,
        })
    }
}
