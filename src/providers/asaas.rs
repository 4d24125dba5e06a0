// src/providers/asaas.rs

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::common::error::AppError;
use crate::models::asaas::{AsaasCliente, AsaasCobranca, AsaasLista, NovaCobranca, NovoCliente};

/// Porta de acesso ao provedor de cobranças. Os serviços dependem deste
/// trait, nunca do cliente HTTP concreto, para poderem ser testados com
/// uma implementação fake sem rede.
#[async_trait]
pub trait BillingProvider: Send + Sync {
    async fn listar_clientes(&self) -> Result<AsaasLista<AsaasCliente>, AppError>;

    async fn criar_cliente(&self, novo: &NovoCliente) -> Result<AsaasCliente, AppError>;

    async fn criar_cobranca(&self, nova: &NovaCobranca) -> Result<AsaasCobranca, AppError>;

    /// Todas as cobranças de um cliente (uma página, até 100).
    async fn listar_cobrancas(&self, cliente_id: &str)
        -> Result<AsaasLista<AsaasCobranca>, AppError>;

    /// Cobranças com status RECEIVED, de todos os clientes.
    async fn listar_cobrancas_recebidas(&self) -> Result<AsaasLista<AsaasCobranca>, AppError>;
}

/// Cliente HTTP da API v3 do Asaas.
///
/// Sem retry e sem timeout próprio: cada chamada é uma única requisição
/// com os defaults de transporte do `reqwest`.
pub struct AsaasClient {
    http: reqwest::Client,
    base_url: String,
}

impl AsaasClient {
    pub fn new(base_url: String, api_key: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        // A autenticação do Asaas é um header próprio, não um Bearer token.
        headers.insert("access_token", HeaderValue::from_str(api_key)?);

        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self { http, base_url })
    }

    async fn get<T: DeserializeOwned>(&self, caminho: &str) -> Result<T, AppError> {
        let resposta = self
            .http
            .get(format!("{}{}", self.base_url, caminho))
            .send()
            .await?;
        Self::ler_resposta(resposta).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        caminho: &str,
        corpo: &B,
    ) -> Result<T, AppError> {
        let resposta = self
            .http
            .post(format!("{}{}", self.base_url, caminho))
            .json(corpo)
            .send()
            .await?;
        Self::ler_resposta(resposta).await
    }

    // Sucesso vira o tipo pedido; erro HTTP vira `AppError::Upstream` com o
    // corpo original do Asaas preservado em `detalhes`.
    async fn ler_resposta<T: DeserializeOwned>(resposta: reqwest::Response) -> Result<T, AppError> {
        let status = resposta.status();
        if status.is_success() {
            return Ok(resposta.json().await?);
        }
        let detalhes = resposta.json::<Value>().await.ok();
        Err(AppError::Upstream {
            mensagem: format!("o Asaas respondeu {status}"),
            detalhes,
        })
    }
}

#[async_trait]
impl BillingProvider for AsaasClient {
    async fn listar_clientes(&self) -> Result<AsaasLista<AsaasCliente>, AppError> {
        self.get("/customers?limit=100").await
    }

    async fn criar_cliente(&self, novo: &NovoCliente) -> Result<AsaasCliente, AppError> {
        self.post("/customers", novo).await
    }

    async fn criar_cobranca(&self, nova: &NovaCobranca) -> Result<AsaasCobranca, AppError> {
        self.post("/payments", nova).await
    }

    async fn listar_cobrancas(
        &self,
        cliente_id: &str,
    ) -> Result<AsaasLista<AsaasCobranca>, AppError> {
        self.get(&format!("/payments?customer={cliente_id}")).await
    }

    async fn listar_cobrancas_recebidas(&self) -> Result<AsaasLista<AsaasCobranca>, AppError> {
        self.get("/payments?status=RECEIVED&limit=100").await
    }
}
