pub mod cobranca_service;
pub mod financeiro_service;
pub mod status_service;

pub use cobranca_service::CobrancaService;
pub use financeiro_service::FinanceiroService;
