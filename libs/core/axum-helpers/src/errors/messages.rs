//! Client-facing messages for error responses.

pub const INTERNAL_ERROR: &str = "Erro interno no servidor";
pub const INVALID_BODY: &str = "Corpo da requisição inválido.";
pub const NOT_FOUND_RESOURCE: &str = "Recurso não encontrado.";
pub const NOT_FOUND_ROUTE: &str = "Rota não encontrada.";
pub const VALIDATION_FAILED: &str = "Dados inválidos.";
