// src/services/status_service.rs
//
// Classificação financeira de um aluno a partir das suas cobranças no
// Asaas. Função pura: nenhuma ordem é assumida na entrada e o resultado
// é recalculado a cada requisição.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::models::asaas::{AsaasCobranca, AsaasStatus};
use crate::models::dashboard::{ProximoVencimento, SituacaoAluno};

/// Resultado da classificação de um aluno.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SituacaoFinanceira {
    pub situacao: SituacaoAluno,
    pub proximo_vencimento: ProximoVencimento,
    pub mensalidade: Decimal,
}

/// Deriva a situação do aluno a partir do conjunto (não ordenado) de
/// cobranças dele.
///
/// Regras, em ordem de prioridade:
/// 1. Qualquer cobrança OVERDUE torna o aluno inadimplente. PENDING
///    sozinho não.
/// 2. Havendo cobranças em aberto (PENDING ou OVERDUE), o próximo
///    vencimento e o valor da mensalidade vêm da mais antiga delas.
/// 3. Sem cobranças em aberto mas com histórico, a cobrança do próximo
///    mês ainda não foi gerada: projetamos o último vencimento + 30 dias.
/// 4. Sem cobrança nenhuma: sentinela "Sem cobranças" e valor zero.
pub fn classificar(cobrancas: &[AsaasCobranca]) -> SituacaoFinanceira {
    let inadimplente = cobrancas.iter().any(|c| c.status == AsaasStatus::Overdue);
    let situacao = if inadimplente {
        SituacaoAluno::Inadimplente
    } else {
        SituacaoAluno::Adimplente
    };

    let mut em_aberto: Vec<&AsaasCobranca> = cobrancas
        .iter()
        .filter(|c| matches!(c.status, AsaasStatus::Pending | AsaasStatus::Overdue))
        .collect();

    if !em_aberto.is_empty() {
        // sort estável: empates de data mantêm a ordem de chegada
        em_aberto.sort_by_key(|c| c.due_date);
        let primeira = em_aberto[0];
        return SituacaoFinanceira {
            situacao,
            proximo_vencimento: ProximoVencimento::Data(primeira.due_date),
            mensalidade: primeira.value,
        };
    }

    // só troca com data estritamente maior: empates mantêm a primeira vista
    let mais_recente = cobrancas.iter().fold(None::<&AsaasCobranca>, |atual, c| match atual {
        Some(m) if c.due_date > m.due_date => Some(c),
        None => Some(c),
        outra => outra,
    });

    if let Some(ultima) = mais_recente {
        return SituacaoFinanceira {
            situacao,
            proximo_vencimento: ProximoVencimento::Data(ultima.due_date + Duration::days(30)),
            mensalidade: ultima.value,
        };
    }

    SituacaoFinanceira {
        situacao,
        proximo_vencimento: ProximoVencimento::SemCobrancas,
        mensalidade: Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cobranca(id: &str, status: AsaasStatus, vencimento: &str, valor: i64) -> AsaasCobranca {
        AsaasCobranca {
            id: id.to_string(),
            customer: "cus_1".to_string(),
            value: Decimal::new(valor * 100, 2),
            due_date: vencimento.parse().unwrap(),
            status,
            description: None,
            payment_date: None,
            invoice_url: None,
        }
    }

    #[test]
    fn qualquer_vencida_torna_o_aluno_inadimplente() {
        let cobrancas = vec![
            cobranca("pay_1", AsaasStatus::Received, "2025-08-10", 700),
            cobranca("pay_2", AsaasStatus::Overdue, "2025-09-10", 700),
            cobranca("pay_3", AsaasStatus::Pending, "2025-10-10", 700),
        ];
        assert_eq!(classificar(&cobrancas).situacao, SituacaoAluno::Inadimplente);
    }

    #[test]
    fn pendente_sozinha_nao_e_inadimplencia() {
        let cobrancas = vec![
            cobranca("pay_1", AsaasStatus::Received, "2025-08-10", 700),
            cobranca("pay_2", AsaasStatus::Pending, "2025-09-10", 700),
        ];
        assert_eq!(classificar(&cobrancas).situacao, SituacaoAluno::Adimplente);
    }

    #[test]
    fn proximo_vencimento_e_a_cobranca_em_aberto_mais_antiga() {
        // chega fora de ordem de propósito
        let cobrancas = vec![
            cobranca("pay_2", AsaasStatus::Pending, "2025-09-15", 150),
            cobranca("pay_1", AsaasStatus::Overdue, "2025-09-01", 700),
        ];
        let situacao = classificar(&cobrancas);
        assert_eq!(
            situacao.proximo_vencimento,
            ProximoVencimento::Data(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
        );
        assert_eq!(situacao.mensalidade, Decimal::new(70000, 2));
    }

    #[test]
    fn sem_cobranca_em_aberto_projeta_ultimo_vencimento_mais_30_dias() {
        let cobrancas = vec![cobranca("pay_1", AsaasStatus::Received, "2025-08-10", 700)];
        let situacao = classificar(&cobrancas);
        assert_eq!(situacao.situacao, SituacaoAluno::Adimplente);
        assert_eq!(
            situacao.proximo_vencimento,
            ProximoVencimento::Data(NaiveDate::from_ymd_opt(2025, 9, 9).unwrap())
        );
        assert_eq!(situacao.mensalidade, Decimal::new(70000, 2));
    }

    #[test]
    fn sem_cobrancas_retorna_sentinela_e_valor_zero() {
        let situacao = classificar(&[]);
        assert_eq!(situacao.situacao, SituacaoAluno::Adimplente);
        assert_eq!(situacao.proximo_vencimento, ProximoVencimento::SemCobrancas);
        assert_eq!(situacao.mensalidade, Decimal::ZERO);
    }

    #[test]
    fn empate_de_vencimento_mantem_a_primeira_vista() {
        let cobrancas = vec![
            cobranca("pay_a", AsaasStatus::Pending, "2025-09-10", 700),
            cobranca("pay_b", AsaasStatus::Pending, "2025-09-10", 150),
        ];
        // sort_by_key é estável: com datas iguais, vale a ordem de chegada
        assert_eq!(classificar(&cobrancas).mensalidade, Decimal::new(70000, 2));
    }

    #[test]
    fn empate_tambem_vale_no_ramo_sem_pendencias() {
        // duas cobranças quitadas com o mesmo vencimento: a projeção de
        // +30 dias usa a primeira vista, não a última
        let cobrancas = vec![
            cobranca("pay_a", AsaasStatus::Received, "2025-08-10", 700),
            cobranca("pay_b", AsaasStatus::Received, "2025-08-10", 150),
        ];
        let situacao = classificar(&cobrancas);
        assert_eq!(situacao.mensalidade, Decimal::new(70000, 2));
        assert_eq!(
            situacao.proximo_vencimento,
            ProximoVencimento::Data(NaiveDate::from_ymd_opt(2025, 9, 9).unwrap())
        );
    }
}
