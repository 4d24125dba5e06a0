pub mod asaas;

pub use asaas::{AsaasClient, BillingProvider};
