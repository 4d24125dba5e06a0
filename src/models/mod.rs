pub mod aluno;
pub mod asaas;
pub mod dashboard;
pub mod despesa;
