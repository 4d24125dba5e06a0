pub mod cobrancas;
pub mod dashboard;
pub mod despesas;
