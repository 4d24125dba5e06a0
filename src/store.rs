// src/store.rs
//
// Armazenamento em memória que simula o banco e as respostas do Asaas.
// No projeto real estes dados viriam do banco e de chamadas à API.

use std::sync::Mutex;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::models::aluno::{Aluno, Mensalidade, StatusMensalidade};
use crate::models::despesa::Despesa;

struct Dados {
    alunos: Vec<Aluno>,
    mensalidades: Vec<Mensalidade>,
    despesas: Vec<Despesa>,
    proxima_despesa_id: u64,
}

/// Dono de todos os Alunos/Mensalidades/Despesas em memória.
///
/// Um único `Mutex` cobre o contador de id e as listas: criar uma despesa
/// (incrementar + inserir) é uma seção crítica só, então o id continua
/// monotônico mesmo com handlers rodando em threads diferentes.
pub struct MemoryStore {
    dados: Mutex<Dados>,
}

impl MemoryStore {
    pub fn vazio() -> Self {
        Self {
            dados: Mutex::new(Dados {
                alunos: Vec::new(),
                mensalidades: Vec::new(),
                despesas: Vec::new(),
                proxima_despesa_id: 1,
            }),
        }
    }

    /// Carga de exemplo usada no modo demonstração do dashboard.
    pub fn com_dados_exemplo() -> Self {
        let store = Self::vazio();
        {
            let mut dados = store.dados.lock().expect("mutex do armazenamento envenenado");

            dados.alunos = vec![
                aluno(101, "Ana Clara Souza", "Marcos Souza"),
                aluno(102, "Lucas Mendes", "Carla Mendes"),
                aluno(103, "Beatriz Lima", "Beatriz Lima"),
                aluno(104, "João Gabriel", "Fernanda Costa"),
                aluno(105, "Mariana Oliveira", "Pedro Oliveira"),
                aluno(106, "Pedro Santos", "Juliana Santos"),
            ];

            dados.mensalidades = vec![
                mensalidade("pay_111", 101, 70000, "2025-09-10", StatusMensalidade::Pago, None),
                mensalidade("pay_222", 102, 70000, "2025-09-10", StatusMensalidade::Vencido, None),
                mensalidade("pay_333", 103, 70000, "2025-09-10", StatusMensalidade::Pago, None),
                mensalidade(
                    "pay_444",
                    104,
                    15000,
                    "2025-09-15",
                    StatusMensalidade::Pendente,
                    Some("Taxa de Matrícula"),
                ),
                mensalidade("pay_555", 105, 70000, "2025-09-10", StatusMensalidade::Pago, None),
                mensalidade("pay_666", 106, 70000, "2025-09-10", StatusMensalidade::Pendente, None),
            ];

            dados.despesas = vec![
                Despesa {
                    id: 1,
                    descricao: "Salário - Equipe Pedagógica".to_string(),
                    categoria: "Salários".to_string(),
                    data: data("2025-09-05"),
                    valor: Decimal::new(650000, 2),
                },
                Despesa {
                    id: 2,
                    descricao: "Compra de material de limpeza".to_string(),
                    categoria: "Suprimentos".to_string(),
                    data: data("2025-09-12"),
                    valor: Decimal::new(35000, 2),
                },
            ];
            dados.proxima_despesa_id = 3;
        }
        store
    }

    pub fn alunos(&self) -> Vec<Aluno> {
        self.dados
            .lock()
            .expect("mutex do armazenamento envenenado")
            .alunos
            .clone()
    }

    pub fn mensalidades(&self) -> Vec<Mensalidade> {
        self.dados
            .lock()
            .expect("mutex do armazenamento envenenado")
            .mensalidades
            .clone()
    }

    pub fn despesas(&self) -> Vec<Despesa> {
        self.dados
            .lock()
            .expect("mutex do armazenamento envenenado")
            .despesas
            .clone()
    }

    #[cfg(test)]
    pub fn inserir_aluno(&self, aluno: Aluno) {
        self.dados
            .lock()
            .expect("mutex do armazenamento envenenado")
            .alunos
            .push(aluno);
    }

    #[cfg(test)]
    pub fn inserir_mensalidade(&self, mensalidade: Mensalidade) {
        self.dados
            .lock()
            .expect("mutex do armazenamento envenenado")
            .mensalidades
            .push(mensalidade);
    }

    /// Atribui o próximo id, aplica a data de hoje quando não informada e
    /// insere no fim da lista. Retorna a despesa criada.
    pub fn criar_despesa(
        &self,
        descricao: String,
        categoria: String,
        valor: Decimal,
        data: Option<NaiveDate>,
    ) -> Despesa {
        let mut dados = self.dados.lock().expect("mutex do armazenamento envenenado");
        let despesa = Despesa {
            id: dados.proxima_despesa_id,
            descricao,
            categoria,
            data: data.unwrap_or_else(|| Utc::now().date_naive()),
            valor,
        };
        dados.proxima_despesa_id += 1;
        dados.despesas.push(despesa.clone());
        despesa
    }
}

fn aluno(id: i64, nome: &str, responsavel: &str) -> Aluno {
    Aluno {
        id,
        nome: nome.to_string(),
        responsavel: responsavel.to_string(),
    }
}

fn mensalidade(
    id_asaas: &str,
    aluno_id: i64,
    centavos: i64,
    vencimento: &str,
    status: StatusMensalidade,
    descricao: Option<&str>,
) -> Mensalidade {
    Mensalidade {
        id_asaas: id_asaas.to_string(),
        aluno_id,
        valor: Decimal::new(centavos, 2),
        vencimento: data(vencimento),
        status,
        descricao: descricao.map(str::to_string),
    }
}

fn data(iso: &str) -> NaiveDate {
    iso.parse().expect("data de exemplo inválida")
}
