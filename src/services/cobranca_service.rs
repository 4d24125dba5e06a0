// src/services/cobranca_service.rs
//
// Operações que dependem do Asaas: matrícula (cliente + primeira
// cobrança), status por aluno e relatório de receitas. O serviço só
// conhece o trait `BillingProvider`, nunca o cliente HTTP concreto.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::task::JoinSet;

use crate::common::error::AppError;
use crate::models::asaas::{AsaasCliente, AsaasLista, NovaCobranca, NovoCliente};
use crate::models::dashboard::{ClienteECobranca, LinhaRelatorioReceitas, StatusAluno};
use crate::providers::BillingProvider;
use crate::services::status_service;

#[derive(Clone)]
pub struct CobrancaService {
    provider: Arc<dyn BillingProvider>,
}

impl CobrancaService {
    pub fn new(provider: Arc<dyn BillingProvider>) -> Self {
        Self { provider }
    }

    /// Repasse direto da página de clientes do Asaas.
    pub async fn clientes(&self) -> Result<AsaasLista<AsaasCliente>, AppError> {
        self.provider.listar_clientes().await
    }

    /// Matrícula: cria o cliente no Asaas e em seguida a primeira cobrança
    /// (boleto) para ele.
    ///
    /// Atenção: não há rollback. Se a criação da cobrança falhar, o cliente
    /// já criado no passo 1 permanece no Asaas — risco de consistência
    /// aceito, herdado do fluxo original.
    pub async fn criar_cliente_e_cobranca(
        &self,
        nome: &str,
        cpf_cnpj: &str,
        valor: Decimal,
        vencimento: NaiveDate,
    ) -> Result<ClienteECobranca, AppError> {
        let cliente = self
            .provider
            .criar_cliente(&NovoCliente {
                name: nome.to_string(),
                cpf_cnpj: cpf_cnpj.to_string(),
            })
            .await?;

        let cobranca = self
            .provider
            .criar_cobranca(&NovaCobranca {
                customer: cliente.id.clone(),
                billing_type: "BOLETO".to_string(),
                value: valor,
                due_date: vencimento,
                description: format!("Mensalidade da creche para {nome}"),
            })
            .await?;

        Ok(ClienteECobranca {
            customer: cliente,
            payment: cobranca,
        })
    }

    /// Situação financeira de cada aluno matriculado.
    ///
    /// Dispara-e-coleta: uma busca de cobranças por cliente, todas em
    /// paralelo. A ordem de chegada não importa, cada resultado já carrega
    /// o id do cliente.
    pub async fn status_dos_alunos(&self) -> Result<Vec<StatusAluno>, AppError> {
        let clientes = self.provider.listar_clientes().await?.data;
        if clientes.is_empty() {
            return Ok(Vec::new());
        }

        let mut tarefas = JoinSet::new();
        for cliente in clientes {
            let provider = Arc::clone(&self.provider);
            tarefas.spawn(async move {
                let cobrancas = provider.listar_cobrancas(&cliente.id).await?.data;
                let situacao = status_service::classificar(&cobrancas);
                Ok::<_, AppError>(StatusAluno {
                    id: cliente.id,
                    name: cliente.name,
                    status: situacao.situacao,
                    next_due_date: situacao.proximo_vencimento,
                    monthly_fee: situacao.mensalidade,
                })
            });
        }

        let mut students = Vec::with_capacity(tarefas.len());
        while let Some(resultado) = tarefas.join_next().await {
            students.push(resultado.map_err(anyhow::Error::from)??);
        }
        Ok(students)
    }

    /// Relatório de receitas: cobranças RECEIVED enriquecidas com o nome
    /// do cliente. Um cliente que sumiu do mapa degrada para um texto de
    /// preenchimento em vez de falhar a requisição.
    pub async fn relatorio_receitas(&self) -> Result<Vec<LinhaRelatorioReceitas>, AppError> {
        let clientes = self.provider.listar_clientes().await?.data;
        let nomes: HashMap<String, String> = clientes
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let recebidas = self.provider.listar_cobrancas_recebidas().await?.data;

        Ok(recebidas
            .into_iter()
            .map(|cobranca| LinhaRelatorioReceitas {
                customer_name: nomes
                    .get(&cobranca.customer)
                    .cloned()
                    .unwrap_or_else(|| "Cliente não encontrado".to_string()),
                id: cobranca.id,
                value: cobranca.value,
                payment_date: cobranca.payment_date,
                invoice_url: cobranca.invoice_url,
            })
            .collect())
    }
}
