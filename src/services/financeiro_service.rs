// src/services/financeiro_service.rs
//
// Agregação financeira sobre o armazenamento em memória: KPIs do
// dashboard, relatório de mensalidades enriquecido e a partição
// adimplentes/inadimplentes.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::common::error::AppError;
use crate::models::aluno::StatusMensalidade;
use crate::models::dashboard::{AlunosPorSituacao, Kpis, MensalidadeDetalhada, VisaoFinanceira};
use crate::models::despesa::Despesa;
use crate::store::MemoryStore;

#[derive(Clone)]
pub struct FinanceiroService {
    store: Arc<MemoryStore>,
}

impl FinanceiroService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// KPIs + relatórios para o dashboard.
    ///
    /// `faturamentoPrevisto` soma TODAS as mensalidades, pagas ou não:
    /// toda cobrança emitida conta como receita prevista, sem recorte de
    /// período. `saldo` é sempre recebido - despesas, recalculado aqui.
    pub fn visao_geral(&self) -> Result<VisaoFinanceira, AppError> {
        let alunos = self.store.alunos();
        let mensalidades = self.store.mensalidades();
        let despesas = self.store.despesas();

        let faturamento_previsto: Decimal = mensalidades.iter().map(|m| m.valor).sum();
        let valor_recebido: Decimal = mensalidades
            .iter()
            .filter(|m| m.status == StatusMensalidade::Pago)
            .map(|m| m.valor)
            .sum();
        let total_despesas: Decimal = despesas.iter().map(|d| d.valor).sum();

        let relatorio_mensalidades = mensalidades
            .into_iter()
            .map(|mensalidade| {
                // Invariante: toda mensalidade referencia um aluno existente.
                // Se não referenciar, a requisição falha com 500.
                let aluno = alunos
                    .iter()
                    .find(|a| a.id == mensalidade.aluno_id)
                    .ok_or(AppError::AlunoNaoEncontrado(mensalidade.aluno_id))?;

                Ok(MensalidadeDetalhada {
                    nome_aluno: aluno.nome.clone(),
                    nome_responsavel: aluno.responsavel.clone(),
                    link_pagamento: format!(
                        "https://sandbox.asaas.com/pay/{}",
                        mensalidade.id_asaas
                    ),
                    mensalidade,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(VisaoFinanceira {
            kpis: Kpis {
                faturamento_previsto,
                valor_recebido,
                total_despesas,
                saldo: valor_recebido - total_despesas,
            },
            relatorio_mensalidades,
            relatorio_despesas: despesas,
        })
    }

    /// Partição da lista de alunos usada no dashboard.
    ///
    /// Regra deliberadamente mais estreita que a do `status_service`: só a
    /// cobrança VENCIDA marca inadimplência, PENDENTE é ignorada. As duas
    /// regras coexistem porque respondem perguntas diferentes (lista do
    /// dashboard vs. detalhe por aluno).
    pub fn alunos_por_situacao(&self) -> AlunosPorSituacao {
        let alunos = self.store.alunos();
        let inadimplentes_ids: HashSet<i64> = self
            .store
            .mensalidades()
            .iter()
            .filter(|m| m.status == StatusMensalidade::Vencido)
            .map(|m| m.aluno_id)
            .collect();

        let (inadimplentes, adimplentes) = alunos
            .into_iter()
            .partition(|a| inadimplentes_ids.contains(&a.id));

        AlunosPorSituacao {
            adimplentes,
            inadimplentes,
        }
    }

    pub fn criar_despesa(
        &self,
        descricao: String,
        categoria: String,
        valor: Decimal,
        data: Option<NaiveDate>,
    ) -> Despesa {
        let despesa = self.store.criar_despesa(descricao, categoria, valor, data);
        tracing::info!("Nova despesa adicionada: {:?}", despesa);
        despesa
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::aluno::{Aluno, Mensalidade};
    use crate::store::MemoryStore;
    use chrono::Utc;

    fn servico_com_ana_paga() -> FinanceiroService {
        // Cenário de referência: uma aluna, uma mensalidade paga de 700.
        let store = MemoryStore::vazio();
        FinanceiroService::new(Arc::new(com_aluno_e_mensalidade(
            store,
            101,
            "Ana",
            "Marcos",
            "pay_1",
            StatusMensalidade::Pago,
            70000,
        )))
    }

    fn com_aluno_e_mensalidade(
        store: MemoryStore,
        id: i64,
        nome: &str,
        responsavel: &str,
        id_asaas: &str,
        status: StatusMensalidade,
        centavos: i64,
    ) -> MemoryStore {
        store.inserir_aluno(Aluno {
            id,
            nome: nome.to_string(),
            responsavel: responsavel.to_string(),
        });
        store.inserir_mensalidade(Mensalidade {
            id_asaas: id_asaas.to_string(),
            aluno_id: id,
            valor: Decimal::new(centavos, 2),
            vencimento: "2025-09-10".parse().unwrap(),
            status,
            descricao: None,
        });
        store
    }

    #[test]
    fn kpis_do_cenario_de_referencia() {
        let visao = servico_com_ana_paga().visao_geral().unwrap();
        assert_eq!(visao.kpis.faturamento_previsto, Decimal::new(70000, 2));
        assert_eq!(visao.kpis.valor_recebido, Decimal::new(70000, 2));
        assert_eq!(visao.kpis.total_despesas, Decimal::ZERO);
        assert_eq!(visao.kpis.saldo, Decimal::new(70000, 2));
    }

    #[test]
    fn mensalidade_pendente_soma_no_previsto_mas_nao_no_recebido() {
        let servico = servico_com_ana_paga();
        let antes = servico.visao_geral().unwrap().kpis;

        servico.store.inserir_mensalidade(Mensalidade {
            id_asaas: "pay_2".to_string(),
            aluno_id: 101,
            valor: Decimal::new(15000, 2),
            vencimento: "2025-09-15".parse().unwrap(),
            status: StatusMensalidade::Pendente,
            descricao: None,
        });

        let depois = servico.visao_geral().unwrap().kpis;
        assert_eq!(
            depois.faturamento_previsto,
            antes.faturamento_previsto + Decimal::new(15000, 2)
        );
        assert_eq!(depois.valor_recebido, antes.valor_recebido);
    }

    #[test]
    fn saldo_e_sempre_recebido_menos_despesas() {
        let servico = servico_com_ana_paga();
        servico.criar_despesa(
            "Material".to_string(),
            "Suprimentos".to_string(),
            Decimal::new(20000, 2),
            None,
        );
        let kpis = servico.visao_geral().unwrap().kpis;
        assert_eq!(kpis.saldo, kpis.valor_recebido - kpis.total_despesas);
        assert_eq!(kpis.saldo, Decimal::new(50000, 2));
    }

    #[test]
    fn relatorio_enriquecido_junta_aluno_e_link_de_pagamento() {
        let visao = servico_com_ana_paga().visao_geral().unwrap();
        let linha = &visao.relatorio_mensalidades[0];
        assert_eq!(linha.nome_aluno, "Ana");
        assert_eq!(linha.nome_responsavel, "Marcos");
        assert_eq!(linha.link_pagamento, "https://sandbox.asaas.com/pay/pay_1");
    }

    #[test]
    fn mensalidade_orfa_quebra_a_visao_geral() {
        let servico = servico_com_ana_paga();
        servico.store.inserir_mensalidade(Mensalidade {
            id_asaas: "pay_orfa".to_string(),
            aluno_id: 999,
            valor: Decimal::new(70000, 2),
            vencimento: "2025-09-10".parse().unwrap(),
            status: StatusMensalidade::Pendente,
            descricao: None,
        });
        assert!(matches!(
            servico.visao_geral(),
            Err(AppError::AlunoNaoEncontrado(999))
        ));
    }

    #[test]
    fn particao_usa_somente_o_sinal_de_vencida() {
        let store = MemoryStore::vazio();
        let store = com_aluno_e_mensalidade(
            store, 101, "Ana", "Marcos", "pay_1", StatusMensalidade::Vencido, 70000,
        );
        let store = com_aluno_e_mensalidade(
            store, 102, "Lucas", "Carla", "pay_2", StatusMensalidade::Pendente, 70000,
        );
        let servico = FinanceiroService::new(Arc::new(store));

        let particao = servico.alunos_por_situacao();
        // PENDENTE não marca inadimplência aqui, só VENCIDO
        assert_eq!(particao.inadimplentes.len(), 1);
        assert_eq!(particao.inadimplentes[0].id, 101);
        assert_eq!(particao.adimplentes.len(), 1);
        assert_eq!(particao.adimplentes[0].id, 102);
    }

    #[test]
    fn particao_e_idempotente_com_dados_inalterados() {
        let servico = FinanceiroService::new(Arc::new(MemoryStore::com_dados_exemplo()));
        let primeira = servico.alunos_por_situacao();
        let segunda = servico.alunos_por_situacao();

        let ids = |alunos: &[Aluno]| alunos.iter().map(|a| a.id).collect::<Vec<_>>();
        assert_eq!(ids(&primeira.adimplentes), ids(&segunda.adimplentes));
        assert_eq!(ids(&primeira.inadimplentes), ids(&segunda.inadimplentes));
    }

    #[test]
    fn criar_despesa_atribui_id_sequencial_e_data_de_hoje() {
        let servico = FinanceiroService::new(Arc::new(MemoryStore::com_dados_exemplo()));
        let despesa = servico.criar_despesa(
            "X".to_string(),
            "Y".to_string(),
            Decimal::new(5000, 2),
            None,
        );
        assert_eq!(despesa.id, 3);
        assert_eq!(despesa.data, Utc::now().date_naive());
        assert_eq!(despesa.valor, Decimal::new(5000, 2));
    }
}
